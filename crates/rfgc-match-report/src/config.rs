use crate::error::{ReportError, ReportResult};
use rust_decimal::{dec, Decimal};
use serde::{Deserialize, Serialize};

/// Fee schedule for one match
///
/// Every field has a default, so a config file only needs to name the
/// amounts that differ for a given match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Fee charged to each paid registrant
    pub match_fee: Decimal,

    /// Whether the classifier fee is remitted for this match
    pub apply_classifier_fee: bool,

    /// Per member-number classifier fee owed to USPSA
    pub classifier_fee: Decimal,

    /// Per-attendee NW session fee
    pub session_fee: Decimal,

    /// Discount for a working range officer
    pub ro_discount: Decimal,

    /// Discount for active military
    pub military_discount: Decimal,

    /// Discount for juniors
    pub junior_discount: Decimal,

    /// Discount for Renton club members
    pub club_member_discount: Decimal,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            match_fee: dec!(30),
            apply_classifier_fee: true,
            classifier_fee: dec!(3),
            session_fee: dec!(1),
            ro_discount: dec!(10),
            military_discount: dec!(10),
            junior_discount: dec!(10),
            club_member_discount: dec!(5),
        }
    }
}

impl ReportConfig {
    /// Classifier fee actually charged per member number
    pub fn effective_classifier_fee(&self) -> Decimal {
        if self.apply_classifier_fee {
            self.classifier_fee
        } else {
            Decimal::ZERO
        }
    }

    /// Reject negative amounts
    pub fn validate(&self) -> ReportResult<()> {
        let amounts = [
            ("match_fee", self.match_fee),
            ("classifier_fee", self.classifier_fee),
            ("session_fee", self.session_fee),
            ("ro_discount", self.ro_discount),
            ("military_discount", self.military_discount),
            ("junior_discount", self.junior_discount),
            ("club_member_discount", self.club_member_discount),
        ];

        for (name, amount) in amounts {
            if amount < Decimal::ZERO {
                return Err(ReportError::NegativeAmount { name, amount });
            }
        }

        Ok(())
    }
}
