use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Gold,
    Silver,
    Standard,
}

/// `CompanyLookup` 回傳的公司唯讀快照
///
/// `classification` 會一路寫入儲存，但不參與信用決策；信用決策看的是公司名稱
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub classification: Classification,
}

/// 呼叫端送進來的原始建檔請求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub firstname: String,
    pub surname: String,
    pub email_address: String,
    pub date_of_birth: NaiveDate,
    pub company_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditDecision {
    /// 未做信用審核，沒有額度限制
    Unlimited,
    Limited(i64),
}

impl CreditDecision {
    pub fn has_credit_limit(&self) -> bool {
        matches!(self, CreditDecision::Limited(_))
    }

    pub fn credit_limit(&self) -> Option<i64> {
        match self {
            CreditDecision::Unlimited => None,
            CreditDecision::Limited(limit) => Some(*limit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub firstname: String,
    pub surname: String,
    pub email_address: String,
    pub date_of_birth: NaiveDate,
    pub company: Company,
    pub credit: CreditDecision,
}

impl Customer {
    pub fn has_credit_limit(&self) -> bool {
        self.credit.has_credit_limit()
    }

    pub fn credit_limit(&self) -> Option<i64> {
        self.credit.credit_limit()
    }
}
