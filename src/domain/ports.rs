use crate::domain::model::{Company, Customer};
use crate::utils::error;
use chrono::NaiveDate;

#[cfg_attr(test, mockall::automock)]
pub trait CompanyLookup: Send + Sync {
    /// 找不到的 id 回傳 `OnboardingError::CompanyNotFound`
    fn get_by_id(&self, company_id: i32) -> error::Result<Company>;
}

#[cfg_attr(test, mockall::automock)]
pub trait CreditLimitProvider: Send + Sync {
    fn get_credit_limit(&self, firstname: &str, surname: &str, date_of_birth: NaiveDate) -> error::Result<i64>;
}

#[cfg_attr(test, mockall::automock)]
pub trait CustomerStore: Send + Sync {
    fn add_customer(&self, customer: &Customer) -> error::Result<()>;
}

#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// 驅動端 port：呼叫建檔流程的一方只依賴這個介面
pub trait CustomerOnboarding {
    fn add_customer(
        &self,
        firstname: &str,
        surname: &str,
        email: &str,
        date_of_birth: NaiveDate,
        company_id: i32,
    ) -> error::Result<bool>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<T: CompanyLookup + ?Sized> CompanyLookup for &T {
    fn get_by_id(&self, company_id: i32) -> error::Result<Company> {
        (**self).get_by_id(company_id)
    }
}

impl<T: CreditLimitProvider + ?Sized> CreditLimitProvider for &T {
    fn get_credit_limit(&self, firstname: &str, surname: &str, date_of_birth: NaiveDate) -> error::Result<i64> {
        (**self).get_credit_limit(firstname, surname, date_of_birth)
    }
}

impl<T: CustomerStore + ?Sized> CustomerStore for &T {
    fn add_customer(&self, customer: &Customer) -> error::Result<()> {
        (**self).add_customer(customer)
    }
}
