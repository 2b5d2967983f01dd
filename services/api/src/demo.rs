use chrono::{Local, NaiveDate};
use clap::Args;
use loan_assess::config::AppConfig;
use loan_assess::error::AppError;
use loan_assess::workflows::assessment::{
    AssessmentOutcome, AssessmentService, DocumentText, EligibilityConfig,
};
use loan_assess::workflows::intake::DocumentBatchImporter;
use std::path::PathBuf;

use crate::infra::eligibility_config_from;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Recognized-text batch export (CSV with File Name / Recognized Text)
    #[arg(long)]
    pub(crate) batch: PathBuf,
    /// Assessment date stamped on the report (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) assessed_on: Option<NaiveDate>,
    /// Override the configured FOIR percentage
    #[arg(long)]
    pub(crate) foir_pct: Option<u32>,
    /// Override the configured annual interest rate
    #[arg(long)]
    pub(crate) annual_rate_pct: Option<f64>,
    /// Override the configured tenure in years
    #[arg(long)]
    pub(crate) tenure_years: Option<u32>,
    /// Print the raw outcome as JSON instead of the rendered summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Assessment date stamped on the report (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) assessed_on: Option<NaiveDate>,
    /// Print the raw outcome as JSON instead of the rendered summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        batch,
        assessed_on,
        foir_pct,
        annual_rate_pct,
        tenure_years,
        json,
    } = args;

    let config = AppConfig::load()?;
    let mut eligibility_config = eligibility_config_from(&config);
    if let Some(foir_pct) = foir_pct {
        eligibility_config.foir_pct = foir_pct;
    }
    if let Some(annual_rate_pct) = annual_rate_pct {
        eligibility_config.annual_rate_pct = annual_rate_pct;
    }
    if let Some(tenure_years) = tenure_years {
        eligibility_config.tenure_years = tenure_years;
    }

    let documents = DocumentBatchImporter::from_path(batch)?;
    let assessed_on = assessed_on.unwrap_or_else(|| Local::now().date_naive());

    let service = AssessmentService::new(eligibility_config);
    let outcome = service.assess(&documents, assessed_on);

    emit_outcome(&outcome, json);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { assessed_on, json } = args;
    let assessed_on = assessed_on.unwrap_or_else(|| Local::now().date_naive());

    println!("Loan assessment demo (bundled sample documents)");

    let service = AssessmentService::new(EligibilityConfig::default());
    let outcome = service.assess(&sample_documents(), assessed_on);

    emit_outcome(&outcome, json);
    Ok(())
}

fn emit_outcome(outcome: &AssessmentOutcome, json: bool) {
    if json {
        match serde_json::to_string_pretty(outcome) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("outcome unavailable as JSON: {err}"),
        }
    } else {
        render_outcome(outcome);
    }
}

pub(crate) fn render_outcome(outcome: &AssessmentOutcome) {
    let profile = &outcome.profile;

    println!("\nApplicant summary");
    println!("- Name: {}", field(&profile.identity.name));
    println!("- PAN: {}", field(&profile.identity.pan));
    println!("- DOB: {}", field(&profile.identity.date_of_birth));
    println!("- Aadhaar: {}", field(&profile.identity.aadhaar));
    println!("- Address: {}", field(&profile.identity.address));
    println!("- Employer: {}", field(&profile.identity.employer));
    if let Some(score) = profile.cibil_score {
        println!("- CIBIL score: {score}");
    }

    if profile.salary_slips.is_empty() {
        println!("\nSalary breakdowns: none detected");
    } else {
        println!("\nSalary breakdowns (up to 3 retained)");
        for slip in &profile.salary_slips {
            let components: Vec<String> = slip
                .components
                .iter()
                .map(|(component, amount)| format!("{} {}", component.label(), amount))
                .collect();
            println!("- {}: {}", slip.source, components.join(" | "));
        }
    }

    if profile.obligations.is_empty() {
        println!("\nExisting obligations: none detected");
    } else {
        println!("\nExisting obligations");
        for obligation in &profile.obligations {
            match obligation.monthly_amount {
                Some(amount) => println!("- Rs. {} | {}", amount, obligation.description),
                None => println!("- amount unreadable | {}", obligation.description),
            }
        }
    }

    println!("\nFOIR & eligibility");
    match &outcome.eligibility {
        Some(result) => {
            println!("- Gross monthly (est.): Rs. {}", result.gross_monthly_estimate);
            println!("- FOIR: {}%", result.foir_pct);
            println!("- Total existing EMI: Rs. {}", result.total_existing_emi);
            println!("- Max allowed EMI: Rs. {}", result.max_allowed_emi);
            println!(
                "- Available for new EMI: Rs. {}",
                result.available_for_new_emi
            );
            println!("- Approx. max loan: Rs. {}", result.approx_max_loan);
        }
        None => println!("- insufficient data, no computation performed"),
    }

    println!("\nBanking behaviour");
    if outcome.report.banking.salary_credit_sample.is_empty() {
        println!("- Salary credits: none detected");
    } else {
        println!(
            "- Salary credits (sample): {:?}",
            outcome.report.banking.salary_credit_sample
        );
    }
    match outcome.report.banking.average_balance {
        Some(balance) => println!("- Average balance: Rs. {balance}"),
        None => println!("- Average balance: not reported"),
    }

    println!("\nDocument status (as of {})", outcome.report.assessed_on);
    for entry in &outcome.report.document_status {
        println!("- {}: {}", entry.category_label, entry.status_label);
    }

    println!("\nProbable queries");
    for query in &outcome.report.probable_queries {
        println!("- {query}");
    }

    println!("\nFinal recommendation");
    println!("{}", outcome.report.recommendation);
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("(not found)")
}

fn sample_documents() -> Vec<DocumentText> {
    vec![
        DocumentText::new(
            "pan.pdf".to_string(),
            "INCOME TAX DEPARTMENT GOVT. OF INDIA\n\
Permanent Account Number Card\n\
PAN : ABCDE1234F\n\
Name: RAVI KUMAR\n\
12/04/1988"
                .to_string(),
        ),
        DocumentText::new(
            "aadhaar.pdf".to_string(),
            "Unique Identification Authority of India\n\
AADHAAR\n\
2345 6789 0123\n\
Address: 12 MG Road, Indiranagar\n\
BENGALURU 560038"
                .to_string(),
        ),
        DocumentText::new(
            "march-salary.pdf".to_string(),
            "ACME TECHNOLOGIES\n\
Pay Slip - March 2024\n\
Basic : Rs. 45,000\n\
HRA : Rs. 18,000\n\
Special Allowance : Rs. 12,000\n\
PF : Rs. 5,400\n\
Gross Salary : Rs. 75,000\n\
Net Pay : Rs. 69,600"
                .to_string(),
        ),
        DocumentText::new(
            "feb_statement.pdf".to_string(),
            "HDFC BANK STATEMENT\n\
Account Summary\n\
01/02 HOME LOAN EMI Rs. 15,000\n\
05/02 SALARY CREDIT Rs. 85,000\n\
Average Balance : Rs. 45,210"
                .to_string(),
        ),
        DocumentText::new(
            "cibil_report.pdf".to_string(),
            "CIBIL TransUnion\n\
Credit Score : 745\n\
Personal loan account closed, no outstanding"
                .to_string(),
        ),
        DocumentText::new(
            "offer.pdf".to_string(),
            "OFFER LETTER\n\
Employer: Acme Technologies Pvt Ltd\n\
Annual CTC Rs. 12,00,000"
                .to_string(),
        ),
    ]
}
