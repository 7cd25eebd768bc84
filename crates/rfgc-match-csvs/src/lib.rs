/*!
# RFGC Match Registration CSV Schemas

This crate owns the **CSV contract** for match registration sheets:

- **Registration sheet** (input): the export from the registration site, one
  row per registrant. Recognized columns are listed in [`Column`]; any other
  column is ignored.
- **Roster lists** (output): `First Name,Last Name` and, for refunds,
  `First Name,Last Name,Refund`.

## Usage

```rust,no_run
use rfgc_match_csvs::{read_registration_csv, validate_registrations, CsvResult};

fn example() -> CsvResult<()> {
    let sheet = read_registration_csv("registrations.csv")?;
    validate_registrations(&sheet)?;
    println!("{} registrants", sheet.rows.len());
    Ok(())
}
```
*/

pub mod errors;
pub mod schemas;
pub mod validation;

// Re-export main types for convenience
pub use errors::{CsvError, CsvResult};
pub use schemas::{
    Column, RefundEntry, RegistrationRow, RegistrationSheet, RosterEntry, PAID_STATUS,
    QUOTED_PAID_STATUS_HEADER, STAFF_MARKER,
};
pub use validation::{
    read_registration_csv, read_registrations, validate_registrations, write_refund_csv,
    write_roster_csv,
};
