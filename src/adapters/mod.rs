// Adapters layer: concrete implementations of the domain ports (files, http).

pub mod company_directory;
pub mod credit_service;
pub mod customer_store;

pub use company_directory::CompanyDirectory;
pub use credit_service::HttpCreditLimitProvider;
pub use customer_store::{CsvCustomerStore, CustomerRecord, InMemoryCustomerStore};
