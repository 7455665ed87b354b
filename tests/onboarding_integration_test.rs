use anyhow::Result;
use chrono::NaiveDate;
use customer_onboarding::core::{FixedClock, NewCustomer};
use customer_onboarding::{
    CompanyDirectory, CsvCustomerStore, CustomerService, HttpCreditLimitProvider,
    InMemoryCustomerStore, OnboardingError, OnboardingOutcome, Rejection,
};
use httpmock::prelude::*;
use std::time::Duration;
use tempfile::TempDir;

const COMPANIES_CSV: &str = "id,name,classification
1,VeryImportantClient,Gold
2,ImportantClient,Silver
3,Acme Ltd,Standard
";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn request(company_id: i32) -> NewCustomer {
    NewCustomer {
        firstname: "Nick".to_string(),
        surname: "Gowdy".to_string(),
        email_address: "nickgowdy87@gmail.com".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1987, 9, 2).unwrap(),
        company_id,
    }
}

fn companies() -> CompanyDirectory {
    CompanyDirectory::from_reader(COMPANIES_CSV.as_bytes()).unwrap()
}

fn credit_provider(server: &MockServer) -> HttpCreditLimitProvider {
    HttpCreditLimitProvider::new(server.url("/credit-limit"), Duration::from_secs(5)).unwrap()
}

fn mock_credit_limit(server: &MockServer, credit_limit: i64) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/credit-limit")
            .json_body(serde_json::json!({
                "firstname": "Nick",
                "surname": "Gowdy",
                "date_of_birth": "1987-09-02"
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "credit_limit": credit_limit }));
    })
}

#[test]
fn test_important_client_end_to_end_with_csv_store() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("customers.csv");

    let server = MockServer::start();
    let credit_mock = mock_credit_limit(&server, 5000);

    let store = CsvCustomerStore::new(&output_path);
    let service = CustomerService::with_clock(companies(), credit_provider(&server), &store, FixedClock(today()));

    let added = service.add_customer(
        "Nick",
        "Gowdy",
        "nickgowdy87@gmail.com",
        NaiveDate::from_ymd_opt(1987, 9, 2).unwrap(),
        2,
    )?;

    assert!(added);
    credit_mock.assert_hits(1);

    let records = store.read_records()?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].company_name, "ImportantClient");
    assert!(records[0].has_credit_limit);
    assert_eq!(records[0].credit_limit, Some(10000));

    Ok(())
}

#[test]
fn test_very_important_client_never_calls_credit_service() -> Result<()> {
    let server = MockServer::start();
    let credit_mock = mock_credit_limit(&server, 5000);

    let store = InMemoryCustomerStore::new();
    let service = CustomerService::with_clock(companies(), credit_provider(&server), &store, FixedClock(today()));

    let outcome = service.onboard(&request(1))?;

    assert!(outcome.is_onboarded());
    credit_mock.assert_hits(0);

    let customers = store.customers()?;
    assert_eq!(customers.len(), 1);
    assert!(!customers[0].has_credit_limit());

    Ok(())
}

#[test]
fn test_low_credit_limit_is_rejected_and_not_written() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("customers.csv");

    let server = MockServer::start();
    let credit_mock = mock_credit_limit(&server, 499);

    let store = CsvCustomerStore::new(&output_path);
    let service = CustomerService::with_clock(companies(), credit_provider(&server), &store, FixedClock(today()));

    let outcome = service.onboard(&request(3))?;

    assert_eq!(
        outcome,
        OnboardingOutcome::Rejected(Rejection::CreditLimitTooLow {
            credit_limit: 499,
            minimum: 500
        })
    );
    credit_mock.assert_hits(1);
    assert!(!output_path.exists());

    Ok(())
}

#[test]
fn test_invalid_customer_touches_nothing() -> Result<()> {
    let server = MockServer::start();
    let credit_mock = mock_credit_limit(&server, 5000);

    let store = InMemoryCustomerStore::new();
    let service = CustomerService::with_clock(companies(), credit_provider(&server), &store, FixedClock(today()));

    let mut invalid = request(2);
    invalid.email_address = "nickgowdy87@@gmail.com".to_string();

    assert!(!service.onboard(&invalid)?.is_onboarded());
    credit_mock.assert_hits(0);
    assert!(store.customers()?.is_empty());

    Ok(())
}

#[test]
fn test_unknown_company_is_an_error() {
    let server = MockServer::start();
    let credit_mock = mock_credit_limit(&server, 5000);

    let store = InMemoryCustomerStore::new();
    let service = CustomerService::with_clock(companies(), credit_provider(&server), &store, FixedClock(today()));

    let result = service.onboard(&request(99));

    assert!(matches!(
        result,
        Err(OnboardingError::CompanyNotFound { company_id: 99 })
    ));
    credit_mock.assert_hits(0);
    assert!(store.customers().unwrap().is_empty());
}

#[test]
fn test_credit_service_failure_propagates() {
    let server = MockServer::start();
    let credit_mock = server.mock(|when, then| {
        when.method(POST).path("/credit-limit");
        then.status(503).body("credit bureau offline");
    });

    let store = InMemoryCustomerStore::new();
    let service = CustomerService::with_clock(companies(), credit_provider(&server), &store, FixedClock(today()));

    let result = service.onboard(&request(3));

    match result {
        Err(OnboardingError::CreditServiceError { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "credit bureau offline");
        }
        other => panic!("expected credit service error, got {other:?}"),
    }
    credit_mock.assert_hits(1);
    assert!(store.customers().unwrap().is_empty());
}

#[test]
fn test_malformed_credit_response_is_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/credit-limit");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "limit": "lots" }));
    });

    let store = InMemoryCustomerStore::new();
    let service = CustomerService::with_clock(companies(), credit_provider(&server), &store, FixedClock(today()));

    let result = service.onboard(&request(3));

    assert!(matches!(result, Err(OnboardingError::HttpError(_))));
    assert!(store.customers().unwrap().is_empty());
}

#[test]
fn test_persisted_customers_always_meet_minimum_credit() -> Result<()> {
    let store = InMemoryCustomerStore::new();

    for credit_limit in [0, 249, 250, 499, 500, 501, 5000] {
        let server = MockServer::start();
        mock_credit_limit(&server, credit_limit);

        let service =
            CustomerService::with_clock(companies(), credit_provider(&server), &store, FixedClock(today()));
        for company_id in [1, 2, 3] {
            service.onboard(&request(company_id))?;
        }
    }

    let customers = store.customers()?;
    assert!(!customers.is_empty());
    for customer in customers {
        assert!(
            !customer.has_credit_limit() || customer.credit_limit().unwrap_or_default() >= 500,
            "customer persisted below minimum: {customer:?}"
        );
    }

    Ok(())
}
