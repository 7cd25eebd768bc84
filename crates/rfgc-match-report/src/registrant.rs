use rfgc_match_csvs::{RegistrationRow, RosterEntry, PAID_STATUS, STAFF_MARKER};

/// A registrant with every flag resolved once from the raw row
///
/// Flag columns are true when the cell holds any text at all. Absent cells
/// count as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registrant {
    pub first_name: String,
    pub last_name: String,
    /// `Paid Status` is exactly `Paid`
    pub paid: bool,
    /// `Approval Status` contains `Staff`
    pub staff: bool,
    pub ro: bool,
    pub setup: bool,
    pub active_military: bool,
    pub renton_member: bool,
    pub junior: bool,
    pub has_member_number: bool,
}

impl Registrant {
    pub fn from_row(row: &RegistrationRow) -> Self {
        Self {
            first_name: row.first_name.clone().unwrap_or_default(),
            last_name: row.last_name.clone().unwrap_or_default(),
            paid: row.paid_status.as_deref() == Some(PAID_STATUS),
            staff: row
                .approval_status
                .as_deref()
                .is_some_and(|status| status.contains(STAFF_MARKER)),
            ro: is_set(row.ro.as_deref()),
            setup: is_set(row.setup.as_deref()),
            active_military: is_set(row.active_military.as_deref()),
            renton_member: is_set(row.renton_member.as_deref()),
            junior: is_set(row.junior.as_deref()),
            has_member_number: is_set(row.member_number.as_deref()),
        }
    }

    pub fn roster_entry(&self) -> RosterEntry {
        RosterEntry {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

impl From<&RegistrationRow> for Registrant {
    fn from(row: &RegistrationRow) -> Self {
        Self::from_row(row)
    }
}

fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
