use crate::core::{Company, CompanyLookup};
use crate::utils::error::{OnboardingError, Result};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// 啟動時載入快照的公司查詢
///
/// CSV 格式為 `id,name,classification`，每列一家公司
#[derive(Debug, Clone, Default)]
pub struct CompanyDirectory {
    companies: HashMap<i32, Company>,
}

impl CompanyDirectory {
    pub fn from_companies(companies: impl IntoIterator<Item = Company>) -> Self {
        let companies = companies
            .into_iter()
            .map(|company| (company.id, company))
            .collect();
        Self { companies }
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(&path)?;
        let directory = Self::from_reader(file)?;
        tracing::info!(
            "Loaded {} companies from {}",
            directory.len(),
            path.as_ref().display()
        );
        Ok(directory)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut companies = HashMap::new();
        for row in csv_reader.deserialize::<Company>() {
            let company = row?;
            if companies.contains_key(&company.id) {
                return Err(OnboardingError::CompanyLookupError {
                    message: format!("duplicate company id {}", company.id),
                });
            }
            companies.insert(company.id, company);
        }

        Ok(Self { companies })
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

impl CompanyLookup for CompanyDirectory {
    fn get_by_id(&self, company_id: i32) -> Result<Company> {
        self.companies
            .get(&company_id)
            .cloned()
            .ok_or(OnboardingError::CompanyNotFound { company_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const COMPANIES_CSV: &str = "id,name,classification
1,VeryImportantClient,Gold
2, ImportantClient ,Silver
3,Acme Ltd,Standard
";

    #[test]
    fn test_lookup_from_reader() {
        let directory = CompanyDirectory::from_reader(COMPANIES_CSV.as_bytes()).unwrap();

        assert_eq!(directory.len(), 3);
        let company = directory.get_by_id(2).unwrap();
        assert_eq!(company.name, "ImportantClient");
        assert_eq!(company.classification, Classification::Silver);
    }

    #[test]
    fn test_from_companies() {
        let directory = CompanyDirectory::from_companies(vec![Company {
            id: 5,
            name: "Initech".to_string(),
            classification: Classification::Standard,
        }]);

        assert!(!directory.is_empty());
        assert_eq!(directory.get_by_id(5).unwrap().name, "Initech");
        assert!(CompanyDirectory::default().is_empty());
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let directory = CompanyDirectory::from_reader(COMPANIES_CSV.as_bytes()).unwrap();

        let result = directory.get_by_id(99);
        assert!(matches!(
            result,
            Err(OnboardingError::CompanyNotFound { company_id: 99 })
        ));
    }

    #[test]
    fn test_unknown_classification_is_a_csv_error() {
        let csv = "id,name,classification\n1,Acme,Platinum\n";
        let result = CompanyDirectory::from_reader(csv.as_bytes());
        assert!(matches!(result, Err(OnboardingError::CsvError(_))));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let csv = "id,name,classification\n1,Acme,Gold\n1,Other,Silver\n";
        let result = CompanyDirectory::from_reader(csv.as_bytes());
        assert!(matches!(result, Err(OnboardingError::CompanyLookupError { .. })));
    }

    #[test]
    fn test_from_csv_path() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(COMPANIES_CSV.as_bytes()).unwrap();

        let directory = CompanyDirectory::from_csv_path(temp_file.path()).unwrap();
        assert_eq!(directory.get_by_id(3).unwrap().name, "Acme Ltd");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = CompanyDirectory::from_csv_path("/definitely/not/here/companies.csv");
        assert!(matches!(result, Err(OnboardingError::IoError(_))));
    }
}
