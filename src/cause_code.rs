// ABOUTME: Maps an error class and raw cause code onto a delivery state
// ABOUTME: Reserved cause codes fold onto the closest "other" code of their problem area

use crate::datatypes::{CauseCode, DeliveryState, ErrorClass};

/// Reserved cause code ranges and the code each one is reported as
/// (N.S0005 table 6.5.2.125-1)
const RESERVED_RANGES: [(u8, u8, CauseCode); 6] = [
    (6, 31, CauseCode::NetworkProblemOther),
    (40, 47, CauseCode::TerminalProblemOther),
    (48, 63, CauseCode::SmsDeliveryPostponed),
    (67, 95, CauseCode::RadioInterfaceProblemOther),
    (101, 101, CauseCode::GeneralProblemOther),
    (108, 255, CauseCode::GeneralProblemOther),
];

/// Folds a raw cause code onto an assigned [`CauseCode`]
pub fn normalize_cause_code(cause_code: u8) -> CauseCode {
    if let Ok(code) = CauseCode::try_from(cause_code) {
        return code;
    }

    RESERVED_RANGES
        .iter()
        .find(|(first, last, _)| (*first..=*last).contains(&cause_code))
        .map(|(_, _, fallback)| *fallback)
        // Every unassigned value lies in one of the reserved ranges
        .unwrap_or(CauseCode::GeneralProblemOther)
}

/// Computes the delivery state reported by a Cause Codes parameter
///
/// ```
/// use cdma_sms::{cause_code_to_delivery_state, CauseCode, DeliveryState, ErrorClass};
///
/// assert_eq!(
///     cause_code_to_delivery_state(ErrorClass::Temporary, 33),
///     DeliveryState::Temporary(CauseCode::DestinationBusy),
/// );
/// assert_eq!(cause_code_to_delivery_state(ErrorClass::Temporary, 33).code(), 0x0321);
/// ```
pub fn cause_code_to_delivery_state(error_class: ErrorClass, cause_code: u8) -> DeliveryState {
    match error_class {
        ErrorClass::NoError => DeliveryState::CompletedReceived,
        ErrorClass::Temporary => DeliveryState::Temporary(normalize_cause_code(cause_code)),
        ErrorClass::Permanent => DeliveryState::Permanent(normalize_cause_code(cause_code)),
        ErrorClass::Reserved => DeliveryState::Unknown,
    }
}
