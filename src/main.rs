use clap::Parser;
use customer_onboarding::utils::error::ErrorSeverity;
use customer_onboarding::utils::{logger, validation::Validate};
use customer_onboarding::{
    CliConfig, CompanyDirectory, CsvCustomerStore, CustomerService, HttpCreditLimitProvider,
    OnboardingConfig, OnboardingError, OnboardingOutcome,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match OnboardingConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(exit_code(&e));
        }
    };

    // 初始化日誌
    if config.json_logging() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting customer onboarding");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(exit_code(&e));
    }

    match run(&cli, &config) {
        Ok(OnboardingOutcome::Onboarded(customer)) => {
            println!(
                "✅ Customer {} {} onboarded with company {}",
                customer.firstname, customer.surname, customer.company.name
            );
            match customer.credit_limit() {
                Some(limit) => println!("💳 Credit limit: {}", limit),
                None => println!("💳 No credit limit applies"),
            }
            Ok(())
        }
        Ok(OnboardingOutcome::Rejected(reason)) => {
            println!("❌ Customer rejected: {}", reason);
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!(
                "❌ Onboarding failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    }
}

fn run(cli: &CliConfig, config: &OnboardingConfig) -> Result<OnboardingOutcome, OnboardingError> {
    let companies = CompanyDirectory::from_csv_path(&config.companies.path)?;
    let credit = HttpCreditLimitProvider::new(&config.credit_service.endpoint, config.credit_timeout())?;
    let store = CsvCustomerStore::new(&config.customers.output_path);

    let service = CustomerService::new(companies, credit, store);
    service.onboard(&cli.new_customer())
}

// 1 保留給「拒絕」，錯誤依嚴重程度使用 2 以上的代碼
fn exit_code(error: &OnboardingError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 2,
        ErrorSeverity::Medium => 3,
        ErrorSeverity::High => 4,
        ErrorSeverity::Critical => 5,
    }
}
