use thiserror::Error;

#[derive(Error, Debug)]
pub enum OnboardingError {
    #[error("Company {company_id} not found")]
    CompanyNotFound { company_id: i32 },

    #[error("Company lookup failed: {message}")]
    CompanyLookupError { message: String },

    #[error("Credit service returned {status}: {message}")]
    CreditServiceError { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Customer store error: {message}")]
    CustomerStoreError { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Collaborator,
    Storage,
    Network,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl OnboardingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OnboardingError::CompanyNotFound { .. }
            | OnboardingError::CompanyLookupError { .. }
            | OnboardingError::CreditServiceError { .. } => ErrorCategory::Collaborator,
            OnboardingError::HttpError(_) => ErrorCategory::Network,
            OnboardingError::CustomerStoreError { .. }
            | OnboardingError::CsvError(_)
            | OnboardingError::IoError(_) => ErrorCategory::Storage,
            OnboardingError::ConfigValidationError { .. }
            | OnboardingError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 呼叫端輸入了不存在的公司，重新輸入即可
            OnboardingError::CompanyNotFound { .. } => ErrorSeverity::Low,
            OnboardingError::HttpError(_) | OnboardingError::CreditServiceError { .. } => {
                ErrorSeverity::Medium
            }
            OnboardingError::CompanyLookupError { .. }
            | OnboardingError::CustomerStoreError { .. }
            | OnboardingError::CsvError(_) => ErrorSeverity::High,
            OnboardingError::IoError(_)
            | OnboardingError::ConfigValidationError { .. }
            | OnboardingError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Collaborator => match self {
                OnboardingError::CompanyNotFound { .. } => {
                    "Check the company id against the company directory"
                }
                _ => "Verify the credit service and company directory are reachable and healthy",
            },
            ErrorCategory::Network => "Check network connectivity and the credit service endpoint",
            ErrorCategory::Storage => "Check file permissions and the format of the data files",
            ErrorCategory::Configuration => "Review the configuration file and command line flags",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            OnboardingError::CompanyNotFound { company_id } => {
                format!("No company is registered with id {}", company_id)
            }
            OnboardingError::CreditServiceError { status, .. } => {
                format!("The credit check could not be completed (status {})", status)
            }
            OnboardingError::HttpError(_) => "The credit service could not be reached".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OnboardingError>;
