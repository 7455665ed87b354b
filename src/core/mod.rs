pub mod credit;
pub mod onboarding;
pub mod validator;

pub use crate::domain::model::{Classification, Company, CreditDecision, Customer, NewCustomer};
pub use crate::domain::ports::{
    Clock, CompanyLookup, CreditLimitProvider, CustomerOnboarding, CustomerStore, FixedClock,
    SystemClock,
};
pub use crate::utils::error::Result;
