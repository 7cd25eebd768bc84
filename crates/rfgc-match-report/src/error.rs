use rfgc_match_csvs::CsvError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while producing a match report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Csv(#[from] CsvError),

    #[error("Invalid fee amount for {name}: {amount} (must not be negative)")]
    NegativeAmount { name: &'static str, amount: Decimal },

    #[error("Amount overflow while computing {0}")]
    AmountOverflow(&'static str),
}

pub type ReportResult<T> = Result<T, ReportError>;
