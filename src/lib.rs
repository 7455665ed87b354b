pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::OnboardingConfig;

pub use adapters::{CompanyDirectory, CsvCustomerStore, HttpCreditLimitProvider, InMemoryCustomerStore};
pub use crate::core::onboarding::{CustomerService, OnboardingOutcome, Rejection};
pub use crate::core::validator::{CustomerValidationError, CustomerValidator};
pub use utils::error::{OnboardingError, Result};
