use crate::domain::ports::{Clock, SystemClock};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

pub const MINIMUM_AGE: i32 = 21;

// 本地部分：引號字串，或首尾為英數字且不含連續點的 dot-atom
// 網域部分：方括號 IPv4，或以 2-24 字元頂級標籤結尾的網域
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?i)^(?:"(?:.*[^\\\n])"|[0-9a-z](?:(?:\.?[-!#$%&'*+/=?^`{}|~\w])*\.?[0-9a-z])?)@"#,
        r"(?:\[(?:[0-9]{1,3}\.){3}[0-9]{1,3}\]|(?:[0-9a-z][-0-9a-z]*[0-9a-z]*\.)+[a-z0-9][-a-z0-9]{0,22}[a-z0-9])$",
    ))
    .expect("email pattern must compile")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CustomerValidationError {
    #[error("Firstname is required")]
    MissingFirstname,

    #[error("Surname is required")]
    MissingSurname,

    #[error("Email address '{email}' is not valid")]
    InvalidEmail { email: String },

    #[error("Customer is {age} years old, minimum age is {minimum}")]
    Underage { age: i32, minimum: i32 },
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// 計算 `today` 當天的足歲年齡（生日還沒到就減一）
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// 無狀態的客戶資料檢查，在呼叫任何外部協作者之前執行
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerValidator;

impl CustomerValidator {
    pub fn validate(
        &self,
        firstname: &str,
        surname: &str,
        email: &str,
        date_of_birth: NaiveDate,
        today: NaiveDate,
    ) -> Result<(), CustomerValidationError> {
        if firstname.is_empty() {
            return Err(CustomerValidationError::MissingFirstname);
        }
        if surname.is_empty() {
            return Err(CustomerValidationError::MissingSurname);
        }

        if !is_valid_email(email) {
            return Err(CustomerValidationError::InvalidEmail {
                email: email.to_string(),
            });
        }

        let age = age_on(date_of_birth, today);
        if age < MINIMUM_AGE {
            return Err(CustomerValidationError::Underage {
                age,
                minimum: MINIMUM_AGE,
            });
        }

        Ok(())
    }

    pub fn is_valid_on(
        &self,
        firstname: &str,
        surname: &str,
        email: &str,
        date_of_birth: NaiveDate,
        today: NaiveDate,
    ) -> bool {
        self.validate(firstname, surname, email, date_of_birth, today)
            .is_ok()
    }

    /// 以 [`SystemClock`] 的今天日期執行 [`CustomerValidator::is_valid_on`]
    pub fn is_valid(&self, firstname: &str, surname: &str, email: &str, date_of_birth: NaiveDate) -> bool {
        self.is_valid_on(firstname, surname, email, date_of_birth, SystemClock.today())
    }
}
