use crate::core::NewCustomer;
use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "customer-onboarding")]
#[command(about = "Validate, credit-check and register a new customer")]
pub struct CliConfig {
    #[arg(short, long, default_value = "onboarding.toml", help = "Path to TOML configuration file")]
    pub config: String,

    #[arg(long)]
    pub firstname: String,

    #[arg(long)]
    pub surname: String,

    #[arg(long)]
    pub email: String,

    #[arg(long, help = "Date of birth as YYYY-MM-DD")]
    pub date_of_birth: NaiveDate,

    #[arg(long)]
    pub company_id: i32,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn new_customer(&self) -> NewCustomer {
        NewCustomer {
            firstname: self.firstname.clone(),
            surname: self.surname.clone(),
            email_address: self.email.clone(),
            date_of_birth: self.date_of_birth,
            company_id: self.company_id,
        }
    }
}
