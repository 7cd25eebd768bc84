use crate::report::MatchReport;
use rfgc_match_csvs::{RefundEntry, RosterEntry};
use rust_decimal::Decimal;
use std::fmt::{self, Write};

/// Render the report as plain text, one line per metric followed by one
/// block per roster list.
pub fn render_text(report: &MatchReport) -> String {
    report.to_string()
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gross revenue: {}", amount(self.gross_revenue))?;
        writeln!(f, "Total discount: {}", amount(self.total_discount))?;
        writeln!(f, "Total classifier fee: {}", amount(self.classifier_fee_total))?;
        writeln!(f, "Total session fee: {}", amount(self.session_fee_total))?;
        writeln!(f, "Net revenue: {}", amount(self.net_revenue))?;
        writeln!(f, "Total paid registrants: {}", self.paid_count)?;
        writeln!(f, "Number of setup crew: {}", self.setup_crew.len())?;
        writeln!(f, "Number of ROs: {}", self.range_officers.len())?;
        writeln!(f, "Number of Active Military: {}", self.active_military.len())?;
        writeln!(f, "Number of Junior: {}", self.juniors.len())?;
        writeln!(f, "Number of Renton Member: {}", self.club_members.len())?;
        writeln!(
            f,
            "Number of classifier fee payers: {}",
            self.classifier_fee_payers.len()
        )?;

        writeln!(f, "Refund list:")?;
        for entry in &self.refunds {
            write_refund(f, entry)?;
        }
        write_roster(f, "Setup Crew list:", &self.setup_crew)?;
        write_roster(f, "RO list:", &self.range_officers)?;
        write_roster(f, "Renton Member list:", &self.club_members)?;
        write_roster(f, "Active Military list:", &self.active_military)?;
        write_roster(f, "Junior list:", &self.juniors)
    }
}

fn write_roster<W: Write>(w: &mut W, label: &str, entries: &[RosterEntry]) -> fmt::Result {
    writeln!(w, "{label}")?;
    for entry in entries {
        writeln!(
            w,
            "First Name: {}, Last Name: {}",
            entry.first_name, entry.last_name
        )?;
    }
    Ok(())
}

fn write_refund<W: Write>(w: &mut W, entry: &RefundEntry) -> fmt::Result {
    writeln!(
        w,
        "First Name: {}, Last Name: {}, Refund: {}",
        entry.first_name,
        entry.last_name,
        amount(entry.refund)
    )
}

// 30.00 prints as 30, 12.50 as 12.5
fn amount(value: Decimal) -> Decimal {
    value.normalize()
}
