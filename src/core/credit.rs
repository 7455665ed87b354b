use crate::domain::model::{Company, CreditDecision};
use crate::domain::ports::CreditLimitProvider;
use crate::utils::error::Result;
use chrono::NaiveDate;

pub const VERY_IMPORTANT_CLIENT: &str = "VeryImportantClient";
pub const IMPORTANT_CLIENT: &str = "ImportantClient";
pub const IMPORTANT_CLIENT_MULTIPLIER: i64 = 2;
pub const MINIMUM_CREDIT_LIMIT: i64 = 500;

/// 轉交給信用額度服務的身分欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditIdentity<'a> {
    pub firstname: &'a str,
    pub surname: &'a str,
    pub date_of_birth: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditPolicy {
    SkipCheck,
    Doubled,
    Standard,
}

impl CreditPolicy {
    /// 依公司名稱（大小寫敏感）決定信用檢查方式
    pub fn for_company(company: &Company) -> Self {
        match company.name.as_str() {
            VERY_IMPORTANT_CLIENT => CreditPolicy::SkipCheck,
            IMPORTANT_CLIENT => CreditPolicy::Doubled,
            _ => CreditPolicy::Standard,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CreditDecisionEngine;

impl CreditDecisionEngine {
    /// 決定 `company` 旗下客戶的信用條件
    ///
    /// 額度服務最多呼叫一次；`VeryImportantClient` 完全不呼叫
    pub fn decide<P>(&self, company: &Company, identity: CreditIdentity<'_>, provider: &P) -> Result<CreditDecision>
    where
        P: CreditLimitProvider + ?Sized,
    {
        let policy = CreditPolicy::for_company(company);
        tracing::debug!("Credit policy for company {}: {:?}", company.id, policy);

        let multiplier = match policy {
            CreditPolicy::SkipCheck => return Ok(CreditDecision::Unlimited),
            CreditPolicy::Doubled => IMPORTANT_CLIENT_MULTIPLIER,
            CreditPolicy::Standard => 1,
        };

        let credit_limit =
            provider.get_credit_limit(identity.firstname, identity.surname, identity.date_of_birth)?;

        Ok(CreditDecision::Limited(credit_limit.saturating_mul(multiplier)))
    }
}

/// 沒有額度限制，或額度達到最低門檻時才可建檔
pub fn is_eligible(decision: &CreditDecision) -> bool {
    match decision {
        CreditDecision::Unlimited => true,
        CreditDecision::Limited(limit) => *limit >= MINIMUM_CREDIT_LIMIT,
    }
}
