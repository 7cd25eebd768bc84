/*!
# Match Report

One pass over the registrants, in sheet order:

1. Rows whose `Paid Status` is not exactly `Paid` are skipped.
2. Staff rows are counted and may owe the classifier fee, nothing else.
3. Every other row pays the match fee, lands on each roster its flags name,
   and receives at most one discount.

Totals are derived once the pass is done. Net revenue subtracts the session
fee for paid registrants only, while the reported session fee total also
covers staff.
*/

use crate::{
    config::ReportConfig,
    discount::discount,
    error::{ReportError, ReportResult},
    registrant::Registrant,
};
use rfgc_match_csvs::{validate_registrations, RefundEntry, RegistrationSheet, RosterEntry};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

/// Revenue summary and rosters for one match
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchReport {
    pub gross_revenue: Decimal,
    pub total_discount: Decimal,
    pub classifier_fee_total: Decimal,
    pub session_fee_total: Decimal,
    pub net_revenue: Decimal,

    /// Paid registrants excluding staff
    pub paid_count: usize,
    pub staff_count: usize,

    pub setup_crew: Vec<RosterEntry>,
    pub range_officers: Vec<RosterEntry>,
    pub active_military: Vec<RosterEntry>,
    pub juniors: Vec<RosterEntry>,
    pub club_members: Vec<RosterEntry>,
    /// Includes staff with a member number
    pub classifier_fee_payers: Vec<RosterEntry>,
    pub refunds: Vec<RefundEntry>,
}

/// Validate a parsed sheet and summarize it
///
/// Nothing is computed unless every structural check passes.
pub fn build_report(sheet: &RegistrationSheet, config: &ReportConfig) -> ReportResult<MatchReport> {
    config.validate()?;
    validate_registrations(sheet)?;

    let registrants: Vec<Registrant> = sheet.rows.iter().map(Registrant::from_row).collect();
    summarize(&registrants, config)
}

/// Classify every registrant and total the results
///
/// Fails with [`ReportError::AmountOverflow`] when a total does not fit in a
/// `Decimal`.
pub fn summarize(registrants: &[Registrant], config: &ReportConfig) -> ReportResult<MatchReport> {
    let mut report = MatchReport::default();

    for (index, registrant) in registrants.iter().enumerate() {
        if !registrant.paid {
            debug!(
                row = index + 1,
                first_name = %registrant.first_name,
                last_name = %registrant.last_name,
                "Skipping unpaid registrant"
            );
            continue;
        }

        if registrant.staff {
            debug!(
                row = index + 1,
                first_name = %registrant.first_name,
                last_name = %registrant.last_name,
                "Counting staff registrant"
            );
            report.staff_count += 1;
            if registrant.has_member_number {
                report.classifier_fee_payers.push(registrant.roster_entry());
            }
            continue;
        }

        report.paid_count += 1;
        report.gross_revenue = add(report.gross_revenue, config.match_fee, "gross revenue")?;

        if registrant.ro {
            report.range_officers.push(registrant.roster_entry());
        }
        if registrant.setup {
            report.setup_crew.push(registrant.roster_entry());
        }
        if registrant.active_military {
            report.active_military.push(registrant.roster_entry());
        }
        if registrant.renton_member {
            report.club_members.push(registrant.roster_entry());
        }
        if registrant.junior {
            report.juniors.push(registrant.roster_entry());
        }
        if registrant.has_member_number {
            report.classifier_fee_payers.push(registrant.roster_entry());
        }

        let amount = discount(registrant, config);
        if !amount.is_zero() {
            report.refunds.push(RefundEntry {
                first_name: registrant.first_name.clone(),
                last_name: registrant.last_name.clone(),
                refund: amount,
            });
        }
        report.total_discount = add(report.total_discount, amount, "total discount")?;
    }

    let paid = Decimal::from(report.paid_count);
    let attendees = Decimal::from(report.paid_count + report.staff_count);

    report.classifier_fee_total = mul(
        Decimal::from(report.classifier_fee_payers.len()),
        config.effective_classifier_fee(),
        "classifier fee total",
    )?;
    report.session_fee_total = mul(attendees, config.session_fee, "session fee total")?;

    let paid_session_fee = mul(paid, config.session_fee, "net revenue")?;
    let net = sub(report.gross_revenue, report.total_discount)?;
    let net = sub(net, report.classifier_fee_total)?;
    report.net_revenue = sub(net, paid_session_fee)?;

    info!(
        registrants = registrants.len(),
        paid = report.paid_count,
        staff = report.staff_count,
        refunds = report.refunds.len(),
        net_revenue = %report.net_revenue,
        "Summarized registrations"
    );

    Ok(report)
}

fn add(total: Decimal, amount: Decimal, what: &'static str) -> ReportResult<Decimal> {
    total
        .checked_add(amount)
        .ok_or(ReportError::AmountOverflow(what))
}

fn sub(total: Decimal, amount: Decimal) -> ReportResult<Decimal> {
    total
        .checked_sub(amount)
        .ok_or(ReportError::AmountOverflow("net revenue"))
}

fn mul(count: Decimal, amount: Decimal, what: &'static str) -> ReportResult<Decimal> {
    count
        .checked_mul(amount)
        .ok_or(ReportError::AmountOverflow(what))
}
