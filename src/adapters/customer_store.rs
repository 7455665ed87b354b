use crate::core::{Classification, Customer, CustomerStore};
use crate::utils::error::{OnboardingError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// 每位成功建檔的客戶寫入 CSV 的一列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub firstname: String,
    pub surname: String,
    pub email_address: String,
    pub date_of_birth: NaiveDate,
    pub company_id: i32,
    pub company_name: String,
    pub company_classification: Classification,
    pub has_credit_limit: bool,
    pub credit_limit: Option<i64>,
}

impl From<&Customer> for CustomerRecord {
    fn from(customer: &Customer) -> Self {
        Self {
            firstname: customer.firstname.clone(),
            surname: customer.surname.clone(),
            email_address: customer.email_address.clone(),
            date_of_birth: customer.date_of_birth,
            company_id: customer.company.id,
            company_name: customer.company.name.clone(),
            company_classification: customer.company.classification,
            has_credit_limit: customer.has_credit_limit(),
            credit_limit: customer.credit_limit(),
        }
    }
}

/// 將客戶附加寫入 CSV 檔，檔案為空時先寫標題列
#[derive(Debug)]
pub struct CsvCustomerStore {
    path: PathBuf,
    // 序列化同一個檔案的寫入
    write_lock: Mutex<()>,
}

impl CsvCustomerStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_records(&self) -> Result<Vec<CustomerRecord>> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let records = reader.deserialize().collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }
}

impl CustomerStore for CsvCustomerStore {
    fn add_customer(&self, customer: &Customer) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| OnboardingError::CustomerStoreError {
                message: "customer store lock poisoned".to_string(),
            })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(CustomerRecord::from(customer))?;
        writer.flush()?;

        tracing::debug!("Appended customer to {}", self.path.display());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    customers: Mutex<Vec<Customer>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customers(&self) -> Result<Vec<Customer>> {
        let customers = self
            .customers
            .lock()
            .map_err(|_| OnboardingError::CustomerStoreError {
                message: "customer store lock poisoned".to_string(),
            })?;
        Ok(customers.clone())
    }
}

impl CustomerStore for InMemoryCustomerStore {
    fn add_customer(&self, customer: &Customer) -> Result<()> {
        let mut customers =
            self.customers
                .lock()
                .map_err(|_| OnboardingError::CustomerStoreError {
                    message: "customer store lock poisoned".to_string(),
                })?;
        customers.push(customer.clone());
        Ok(())
    }
}
