/*!
# CSV Validation & I/O

Reading registration sheets, the structural checks that must pass before a
report is computed, and writing roster lists back out.
*/

use crate::{
    errors::{CsvError, CsvResult},
    schemas::{
        Column, RefundEntry, RegistrationRow, RegistrationSheet, RosterEntry,
        QUOTED_PAID_STATUS_HEADER, REFUND_CSV_HEADERS, ROSTER_CSV_HEADERS,
    },
};
use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

const UTF8_BOM: char = '\u{feff}';

// ================================================================================================
// CSV Reading
// ================================================================================================

/// Read a registration sheet from disk
pub fn read_registration_csv<P: AsRef<Path>>(path: P) -> CsvResult<RegistrationSheet> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading registration sheet");
    let file = File::open(path)?;
    read_registrations(file)
}

/// Read a registration sheet from any reader
///
/// Rows shorter than the header are kept: every missing field is logged and
/// left as `None`. Fields past the end of the header are ignored.
pub fn read_registrations<R: Read>(reader: R) -> CsvResult<RegistrationSheet> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .flexible(true)
        .from_reader(reader);

    let mut headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if let Some(first) = headers.first_mut() {
        if let Some(stripped) = first.strip_prefix(UTF8_BOM) {
            *first = stripped.to_string();
        }
    }

    let positions = column_positions(&headers);

    let mut rows = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        let row_number = index + 1;

        for column_index in record.len()..headers.len() {
            warn!(
                row = row_number,
                column = column_index,
                record = ?record,
                "Column index is out of bounds for row"
            );
        }

        let mut row = RegistrationRow::default();
        for (column, columns) in &positions {
            if let Some(value) = columns.iter().rev().find_map(|&p| record.get(p)) {
                row.set(*column, value);
            }
        }
        rows.push(row);
    }

    debug!(
        headers = headers.len(),
        rows = rows.len(),
        "Parsed registration sheet"
    );

    Ok(RegistrationSheet { headers, rows })
}

/// Header indices of every recognized column, in header order. A row takes a
/// repeated column from the last occurrence it actually reaches.
fn column_positions(headers: &[String]) -> Vec<(Column, Vec<usize>)> {
    Column::ALL
        .iter()
        .filter_map(|&column| {
            let indices: Vec<usize> = headers
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == column.header())
                .map(|(i, _)| i)
                .collect();
            (!indices.is_empty()).then_some((column, indices))
        })
        .collect()
}

// ================================================================================================
// Structural Validation
// ================================================================================================

/// Structural checks run before any registrant is classified
///
/// Fails on:
/// - no data rows
/// - a header that was quoted twice by the exporter
/// - `RO` or `Setup` missing from the first row
pub fn validate_registrations(sheet: &RegistrationSheet) -> CsvResult<()> {
    let first = sheet.rows.first().ok_or(CsvError::EmptyRegistrants)?;

    if sheet.headers.iter().any(|h| h == QUOTED_PAID_STATUS_HEADER) {
        return Err(CsvError::DoubleQuotedHeader);
    }

    for column in [Column::Ro, Column::Setup] {
        if first.get(column).is_none() {
            return Err(CsvError::MissingColumn(column.header().to_string()));
        }
    }

    Ok(())
}

// ================================================================================================
// CSV Writing
// ================================================================================================

/// Write a roster list with the registration sheet's name headers
pub fn write_roster_csv<P: AsRef<Path>>(path: P, entries: &[RosterEntry]) -> CsvResult<()> {
    write_csv(path, ROSTER_CSV_HEADERS, entries)
}

/// Write the refund list
pub fn write_refund_csv<P: AsRef<Path>>(path: P, entries: &[RefundEntry]) -> CsvResult<()> {
    write_csv(path, REFUND_CSV_HEADERS, entries)
}

// Headers are written up front so an empty list still produces a usable file.
fn write_csv<P, T>(path: P, headers: &[&str], entries: &[T]) -> CsvResult<()>
where
    P: AsRef<Path>,
    T: Serialize,
{
    let file = File::create(path)?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);

    wtr.write_record(headers)?;
    for entry in entries {
        wtr.serialize(entry)?;
    }

    wtr.flush()?;
    Ok(())
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;
    use tempfile::NamedTempFile;

    const HEADER: &str = "First Name,Last Name,Paid Status,Approval Status,RO,Setup,\
                          Active Military,Renton Member,Junior,Member Number";

    fn sheet(body: &str) -> RegistrationSheet {
        read_registrations(format!("{HEADER}\n{body}").as_bytes()).unwrap()
    }

    #[test]
    fn test_read_full_rows() {
        let sheet = sheet("Ken,Wang,Paid,Approved,,x,,,,A123\n");

        assert_eq!(sheet.headers.len(), 10);
        assert_eq!(sheet.rows.len(), 1);

        let row = &sheet.rows[0];
        assert_eq!(row.first_name.as_deref(), Some("Ken"));
        assert_eq!(row.paid_status.as_deref(), Some("Paid"));
        assert_eq!(row.ro.as_deref(), Some(""));
        assert_eq!(row.setup.as_deref(), Some("x"));
        assert_eq!(row.member_number.as_deref(), Some("A123"));
    }

    #[test]
    fn test_short_row_leaves_missing_fields_absent() {
        let sheet = sheet("Ken,Wang,Paid,Approved,yes\nAmy,Lee,Paid,Approved,,,,,,B7\n");

        assert_eq!(sheet.rows.len(), 2);
        let short = &sheet.rows[0];
        assert_eq!(short.ro.as_deref(), Some("yes"));
        assert_eq!(short.setup, None);
        assert_eq!(short.member_number, None);

        assert_eq!(sheet.rows[1].member_number.as_deref(), Some("B7"));
    }

    #[test]
    fn test_extra_and_unknown_columns_are_ignored() {
        let csv = "Email,RO,Setup,First Name,Paid Status\n\
                   a@b.c,,1,Jo,Paid,trailing\n";
        let sheet = read_registrations(csv.as_bytes()).unwrap();

        let row = &sheet.rows[0];
        assert_eq!(row.first_name.as_deref(), Some("Jo"));
        assert_eq!(row.setup.as_deref(), Some("1"));
        assert_eq!(row.last_name, None);
        assert_eq!(row.junior, None);
    }

    #[test]
    fn test_quoted_fields_and_bom() {
        let csv = "\u{feff}First Name,Last Name,RO,Setup\n\"O'Neil, Jr.\",Smith,,\n";
        let sheet = read_registrations(csv.as_bytes()).unwrap();

        assert_eq!(sheet.headers[0], "First Name");
        assert_eq!(sheet.rows[0].first_name.as_deref(), Some("O'Neil, Jr."));
    }

    #[test]
    fn test_repeated_header_uses_last_column() {
        let csv = "RO,Setup,RO\nfirst,,second\n";
        let sheet = read_registrations(csv.as_bytes()).unwrap();
        assert_eq!(sheet.rows[0].ro.as_deref(), Some("second"));
    }

    #[test]
    fn test_repeated_header_falls_back_for_short_row() {
        let csv = "RO,Setup,RO\nfirst,\nfull,,second\n";
        let sheet = read_registrations(csv.as_bytes()).unwrap();
        assert_eq!(sheet.rows[0].ro.as_deref(), Some("first"));
        assert_eq!(sheet.rows[0].setup.as_deref(), Some(""));
        assert_eq!(sheet.rows[1].ro.as_deref(), Some("second"));
    }

    #[test]
    fn test_read_registration_csv_missing_file() {
        let result = read_registration_csv("/nonexistent/registrations.csv");
        assert!(matches!(result, Err(CsvError::Io(_))));
    }

    #[test]
    fn test_validate_accepts_well_formed_sheet() {
        let sheet = sheet("Ken,Wang,Paid,Approved,,,,,,\n");
        validate_registrations(&sheet).unwrap();
    }

    #[test]
    fn test_validate_rejects_empty_sheet() {
        let sheet = read_registrations(HEADER.as_bytes()).unwrap();
        let result = validate_registrations(&sheet);
        assert!(matches!(result, Err(CsvError::EmptyRegistrants)));
    }

    #[test]
    fn test_validate_rejects_missing_ro_and_setup() {
        let no_ro = read_registrations("First Name,Setup\nKen,\n".as_bytes()).unwrap();
        let err = validate_registrations(&no_ro).unwrap_err();
        assert_eq!(err.to_string(), "Missing RO column");

        let no_setup = read_registrations("First Name,RO\nKen,\n".as_bytes()).unwrap();
        let err = validate_registrations(&no_setup).unwrap_err();
        assert_eq!(err.to_string(), "Missing Setup column");
    }

    #[test]
    fn test_validate_checks_first_row_only() {
        // RO header exists but the first row stops before it.
        let csv = "First Name,RO,Setup\nKen\nAmy,,\n";
        let sheet = read_registrations(csv.as_bytes()).unwrap();
        let result = validate_registrations(&sheet);
        assert!(matches!(result, Err(CsvError::MissingColumn(c)) if c == "RO"));
    }

    #[test]
    fn test_validate_rejects_double_quoted_header() {
        let csv = "\"\"\"Paid Status\"\"\",\"\"\"RO\"\"\",\"\"\"Setup\"\"\"\nPaid,,\n";
        let sheet = read_registrations(csv.as_bytes()).unwrap();
        assert_eq!(sheet.headers[0], "\"Paid Status\"");

        let err = validate_registrations(&sheet).unwrap_err();
        assert!(matches!(err, CsvError::DoubleQuotedHeader));
        assert!(err.to_string().contains("save it as CSV"));
    }

    #[test]
    fn test_write_refund_csv() {
        let entries = vec![
            RefundEntry {
                first_name: "Ken".to_string(),
                last_name: "Wang".to_string(),
                refund: dec!(30),
            },
            RefundEntry {
                first_name: "Amy".to_string(),
                last_name: "Lee".to_string(),
                refund: dec!(5),
            },
        ];

        let temp_file = NamedTempFile::new().unwrap();
        write_refund_csv(temp_file.path(), &entries).unwrap();

        let written = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(
            written,
            "First Name,Last Name,Refund\nKen,Wang,30\nAmy,Lee,5\n"
        );
    }

    #[test]
    fn test_write_empty_roster_csv_keeps_headers() {
        let temp_file = NamedTempFile::new().unwrap();
        write_roster_csv(temp_file.path(), &[]).unwrap();

        let written = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(written, "First Name,Last Name\n");
    }
}
