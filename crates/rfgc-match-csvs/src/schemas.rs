/*!
# CSV Schema Definitions

This module defines the columns a registration sheet export is expected to
carry and the shapes of the lists written back out.

Registration sheets come from the match registration site and are often
round-tripped through a spreadsheet before they reach us, so the reader is
deliberately lenient about the shape of individual rows. Structural problems
are caught once by [`crate::validation::validate_registrations`].
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Exact value of `Paid Status` for a registrant who has paid
pub const PAID_STATUS: &str = "Paid";

/// Substring of `Approval Status` that marks a staff registration
pub const STAFF_MARKER: &str = "Staff";

/// Header produced when an export has been quoted twice
pub const QUOTED_PAID_STATUS_HEADER: &str = "\"Paid Status\"";

// ================================================================================================
// Registration CSV Schema
// ================================================================================================

/// Recognized columns of the registration sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    FirstName,
    LastName,
    PaidStatus,
    ApprovalStatus,
    /// Working range officer
    Ro,
    /// Setup crew
    Setup,
    ActiveMilitary,
    RentonMember,
    Junior,
    /// USPSA member number
    MemberNumber,
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::FirstName,
        Column::LastName,
        Column::PaidStatus,
        Column::ApprovalStatus,
        Column::Ro,
        Column::Setup,
        Column::ActiveMilitary,
        Column::RentonMember,
        Column::Junior,
        Column::MemberNumber,
    ];

    /// Header text as it appears in the export
    pub fn header(self) -> &'static str {
        match self {
            Column::FirstName => "First Name",
            Column::LastName => "Last Name",
            Column::PaidStatus => "Paid Status",
            Column::ApprovalStatus => "Approval Status",
            Column::Ro => "RO",
            Column::Setup => "Setup",
            Column::ActiveMilitary => "Active Military",
            Column::RentonMember => "Renton Member",
            Column::Junior => "Junior",
            Column::MemberNumber => "Member Number",
        }
    }
}

/// One registrant as read from the sheet
///
/// A field is `None` when the header has no such column or the row was too
/// short to reach it, and `Some("")` when the cell is present but blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationRow {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub paid_status: Option<String>,
    pub approval_status: Option<String>,
    pub ro: Option<String>,
    pub setup: Option<String>,
    pub active_military: Option<String>,
    pub renton_member: Option<String>,
    pub junior: Option<String>,
    pub member_number: Option<String>,
}

impl RegistrationRow {
    pub fn get(&self, column: Column) -> Option<&str> {
        self.slot(column).as_deref()
    }

    pub fn set(&mut self, column: Column, value: impl Into<String>) {
        *self.slot_mut(column) = Some(value.into());
    }

    fn slot(&self, column: Column) -> &Option<String> {
        match column {
            Column::FirstName => &self.first_name,
            Column::LastName => &self.last_name,
            Column::PaidStatus => &self.paid_status,
            Column::ApprovalStatus => &self.approval_status,
            Column::Ro => &self.ro,
            Column::Setup => &self.setup,
            Column::ActiveMilitary => &self.active_military,
            Column::RentonMember => &self.renton_member,
            Column::Junior => &self.junior,
            Column::MemberNumber => &self.member_number,
        }
    }

    fn slot_mut(&mut self, column: Column) -> &mut Option<String> {
        match column {
            Column::FirstName => &mut self.first_name,
            Column::LastName => &mut self.last_name,
            Column::PaidStatus => &mut self.paid_status,
            Column::ApprovalStatus => &mut self.approval_status,
            Column::Ro => &mut self.ro,
            Column::Setup => &mut self.setup,
            Column::ActiveMilitary => &mut self.active_military,
            Column::RentonMember => &mut self.renton_member,
            Column::Junior => &mut self.junior,
            Column::MemberNumber => &mut self.member_number,
        }
    }
}

/// Parsed registration sheet: the header row plus every data row in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationSheet {
    pub headers: Vec<String>,
    pub rows: Vec<RegistrationRow>,
}

// ================================================================================================
// Roster Output Schemas
// ================================================================================================

/// Headers for exported roster lists in exact order
pub const ROSTER_CSV_HEADERS: &[&str] = &["First Name", "Last Name"];

/// Headers for the exported refund list in exact order
pub const REFUND_CSV_HEADERS: &[&str] = &["First Name", "Last Name", "Refund"];

/// Name pair written to every roster list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterEntry {
    #[serde(rename = "First Name")]
    pub first_name: String,

    #[serde(rename = "Last Name")]
    pub last_name: String,
}

/// Roster entry for a registrant owed a discount
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefundEntry {
    #[serde(rename = "First Name")]
    pub first_name: String,

    #[serde(rename = "Last Name")]
    pub last_name: String,

    /// Discount amount to refund or waive
    #[serde(rename = "Refund")]
    pub refund: Decimal,
}

// ================================================================================================
// Tests
// ================================================================================================
