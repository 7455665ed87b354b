use crate::core::credit::{is_eligible, CreditDecisionEngine, CreditIdentity, MINIMUM_CREDIT_LIMIT};
use crate::core::validator::{CustomerValidationError, CustomerValidator};
use crate::domain::model::{Customer, NewCustomer};
use crate::domain::ports::{
    Clock, CompanyLookup, CreditLimitProvider, CustomerOnboarding, CustomerStore, SystemClock,
};
use crate::utils::error::Result;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    InvalidCustomer(CustomerValidationError),
    CreditLimitTooLow { credit_limit: i64, minimum: i64 },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::InvalidCustomer(reason) => write!(f, "{}", reason),
            Rejection::CreditLimitTooLow {
                credit_limit,
                minimum,
            } => write!(
                f,
                "Credit limit {} is below the minimum of {}",
                credit_limit, minimum
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingOutcome {
    Onboarded(Customer),
    Rejected(Rejection),
}

impl OnboardingOutcome {
    pub fn is_onboarded(&self) -> bool {
        matches!(self, OnboardingOutcome::Onboarded(_))
    }
}

/// 驗證、信用審核並儲存新客戶
///
/// 業務上的拒絕透過回傳的 outcome 表示；`Err` 只用於注入的協作者
/// 所產生的錯誤，原樣往外傳遞。
pub struct CustomerService<L, P, S, K = SystemClock> {
    company_lookup: L,
    credit_limits: P,
    customers: S,
    clock: K,
    validator: CustomerValidator,
    credit_engine: CreditDecisionEngine,
}

impl<L, P, S> CustomerService<L, P, S, SystemClock>
where
    L: CompanyLookup,
    P: CreditLimitProvider,
    S: CustomerStore,
{
    pub fn new(company_lookup: L, credit_limits: P, customers: S) -> Self {
        Self::with_clock(company_lookup, credit_limits, customers, SystemClock)
    }
}

impl<L, P, S, K> CustomerService<L, P, S, K>
where
    L: CompanyLookup,
    P: CreditLimitProvider,
    S: CustomerStore,
    K: Clock,
{
    pub fn with_clock(company_lookup: L, credit_limits: P, customers: S, clock: K) -> Self {
        Self {
            company_lookup,
            credit_limits,
            customers,
            clock,
            validator: CustomerValidator,
            credit_engine: CreditDecisionEngine,
        }
    }

    pub fn onboard(&self, request: &NewCustomer) -> Result<OnboardingOutcome> {
        // 先驗證欄位，失敗就不呼叫任何外部服務
        if let Err(reason) = self.validator.validate(
            &request.firstname,
            &request.surname,
            &request.email_address,
            request.date_of_birth,
            self.clock.today(),
        ) {
            tracing::info!("Customer rejected: {}", reason);
            return Ok(OnboardingOutcome::Rejected(Rejection::InvalidCustomer(reason)));
        }

        let company = self.company_lookup.get_by_id(request.company_id)?;
        tracing::debug!("Resolved company {} ({})", company.id, company.name);

        let identity = CreditIdentity {
            firstname: &request.firstname,
            surname: &request.surname,
            date_of_birth: request.date_of_birth,
        };
        let credit = self
            .credit_engine
            .decide(&company, identity, &self.credit_limits)?;

        let customer = Customer {
            firstname: request.firstname.clone(),
            surname: request.surname.clone(),
            email_address: request.email_address.clone(),
            date_of_birth: request.date_of_birth,
            company,
            credit,
        };

        if !is_eligible(&customer.credit) {
            let rejection = Rejection::CreditLimitTooLow {
                credit_limit: customer.credit_limit().unwrap_or_default(),
                minimum: MINIMUM_CREDIT_LIMIT,
            };
            tracing::info!("Customer rejected: {}", rejection);
            return Ok(OnboardingOutcome::Rejected(rejection));
        }

        self.customers.add_customer(&customer)?;
        tracing::info!(
            company_id = customer.company.id,
            credit_limit = ?customer.credit_limit(),
            "Customer onboarded"
        );

        Ok(OnboardingOutcome::Onboarded(customer))
    }

    pub fn add_customer(
        &self,
        firstname: &str,
        surname: &str,
        email: &str,
        date_of_birth: NaiveDate,
        company_id: i32,
    ) -> Result<bool> {
        let request = NewCustomer {
            firstname: firstname.to_string(),
            surname: surname.to_string(),
            email_address: email.to_string(),
            date_of_birth,
            company_id,
        };
        self.onboard(&request).map(|outcome| outcome.is_onboarded())
    }
}

impl<L, P, S, K> CustomerOnboarding for CustomerService<L, P, S, K>
where
    L: CompanyLookup,
    P: CreditLimitProvider,
    S: CustomerStore,
    K: Clock,
{
    fn add_customer(
        &self,
        firstname: &str,
        surname: &str,
        email: &str,
        date_of_birth: NaiveDate,
        company_id: i32,
    ) -> Result<bool> {
        CustomerService::add_customer(self, firstname, surname, email, date_of_birth, company_id)
    }
}
