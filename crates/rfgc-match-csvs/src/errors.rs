use thiserror::Error;

pub type CsvResult<T> = Result<T, CsvError>;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("The registrant list is empty")]
    EmptyRegistrants,

    #[error("Missing {0} column")]
    MissingColumn(String),

    #[error(
        "Double quoted field name present. Open the file in a spreadsheet program, \
         save it as CSV and rerun this program."
    )]
    DoubleQuotedHeader,
}
