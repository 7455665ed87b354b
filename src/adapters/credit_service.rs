use crate::core::CreditLimitProvider;
use crate::utils::error::{OnboardingError, Result};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Serialize)]
struct CreditLimitRequest<'a> {
    firstname: &'a str,
    surname: &'a str,
    date_of_birth: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct CreditLimitResponse {
    credit_limit: i64,
}

/// 外部信用評分服務的客戶端
///
/// 底層 `Client` 持有連線池，回應 drop 時連線歸還，provider drop 時連線池一併關閉
#[derive(Debug, Clone)]
pub struct HttpCreditLimitProvider {
    client: Client,
    endpoint: String,
}

impl HttpCreditLimitProvider {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl CreditLimitProvider for HttpCreditLimitProvider {
    fn get_credit_limit(&self, firstname: &str, surname: &str, date_of_birth: NaiveDate) -> Result<i64> {
        tracing::debug!("Requesting credit limit from: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&CreditLimitRequest {
                firstname,
                surname,
                date_of_birth,
            })
            .send()?;

        let status = response.status();
        tracing::debug!("Credit service response status: {}", status);

        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(OnboardingError::CreditServiceError {
                status: status.as_u16(),
                message,
            });
        }

        let body: CreditLimitResponse = response.json()?;
        Ok(body.credit_limit)
    }
}
