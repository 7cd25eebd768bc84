/*!
# RFGC Match Report

Turns a parsed registration sheet into the match's revenue summary and
volunteer rosters.

```rust,no_run
use rfgc_match_csvs::read_registration_csv;
use rfgc_match_report::{build_report, render_text, ReportConfig};

let sheet = read_registration_csv("registrations.csv")?;
let report = build_report(&sheet, &ReportConfig::default())?;
print!("{}", render_text(&report));
# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

pub mod config;
pub mod discount;
pub mod error;
pub mod registrant;
pub mod render;
pub mod report;

pub use config::ReportConfig;
pub use discount::discount;
pub use error::{ReportError, ReportResult};
pub use registrant::Registrant;
pub use render::render_text;
pub use report::{build_report, summarize, MatchReport};
