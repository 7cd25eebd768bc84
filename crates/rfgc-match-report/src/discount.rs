use crate::{config::ReportConfig, registrant::Registrant};
use rust_decimal::Decimal;

/// Discount owed to a paid registrant
///
/// The first matching category wins and discounts never stack:
/// setup crew (full match fee), RO, active military, junior, club member.
pub fn discount(registrant: &Registrant, config: &ReportConfig) -> Decimal {
    if registrant.setup {
        config.match_fee
    } else if registrant.ro {
        config.ro_discount
    } else if registrant.active_military {
        config.military_discount
    } else if registrant.junior {
        config.junior_discount
    } else if registrant.renton_member {
        config.club_member_discount
    } else {
        Decimal::ZERO
    }
}
