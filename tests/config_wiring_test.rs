use anyhow::Result;
use customer_onboarding::core::FixedClock;
use customer_onboarding::utils::validation::Validate;
use customer_onboarding::{
    CompanyDirectory, CsvCustomerStore, CustomerService, HttpCreditLimitProvider, OnboardingConfig,
};
use httpmock::prelude::*;
use tempfile::TempDir;

#[test]
fn test_adapters_built_from_toml_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let companies_path = temp_dir.path().join("companies.csv");
    std::fs::write(
        &companies_path,
        "id,name,classification\n7,Acme Ltd,Standard\n",
    )?;
    let customers_path = temp_dir.path().join("out").join("customers.csv");

    let server = MockServer::start();
    let credit_mock = server.mock(|when, then| {
        when.method(POST).path("/limits");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "credit_limit": 1200 }));
    });

    let toml_content = format!(
        r#"
[companies]
path = "{}"

[customers]
output_path = "{}"

[credit_service]
endpoint = "{}"
timeout_seconds = 2
"#,
        companies_path.display(),
        customers_path.display(),
        server.url("/limits")
    );

    let config = OnboardingConfig::from_toml_str(&toml_content)?;
    config.validate()?;

    let service = CustomerService::with_clock(
        CompanyDirectory::from_csv_path(&config.companies.path)?,
        HttpCreditLimitProvider::new(&config.credit_service.endpoint, config.credit_timeout())?,
        CsvCustomerStore::new(&config.customers.output_path),
        FixedClock(chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()),
    );

    let added = service.add_customer(
        "Ada",
        "Lovelace",
        "ada@example.org",
        chrono::NaiveDate::from_ymd_opt(1990, 12, 10).unwrap(),
        7,
    )?;

    assert!(added);
    credit_mock.assert_hits(1);

    let content = std::fs::read_to_string(&customers_path)?;
    assert!(content.contains("Ada,Lovelace,ada@example.org,1990-12-10,7,Acme Ltd,Standard,true,1200"));

    Ok(())
}
