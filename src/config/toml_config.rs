use crate::adapters::credit_service::DEFAULT_TIMEOUT_SECONDS;
use crate::utils::error::{OnboardingError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern must compile"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingConfig {
    pub companies: CompaniesConfig,
    pub customers: CustomersConfig,
    pub credit_service: CreditServiceConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompaniesConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomersConfig {
    pub output_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditServiceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
}

impl OnboardingConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| OnboardingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CREDIT_SERVICE_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn credit_timeout(&self) -> Duration {
        Duration::from_secs(
            self.credit_service
                .timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        )
    }

    pub fn json_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|logging| logging.json)
            .unwrap_or(false)
    }
}

impl Validate for OnboardingConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("companies.path", &self.companies.path)?;
        validation::validate_file_extension("companies.path", &self.companies.path, &["csv"])?;

        validation::validate_path("customers.output_path", &self.customers.output_path)?;
        validation::validate_file_extension(
            "customers.output_path",
            &self.customers.output_path,
            &["csv"],
        )?;

        validation::validate_url("credit_service.endpoint", &self.credit_service.endpoint)?;
        if let Some(timeout) = self.credit_service.timeout_seconds {
            validation::validate_positive_number("credit_service.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}
