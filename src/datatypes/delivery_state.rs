use std::fmt;

use super::CauseCode;

const UNKNOWN: u16 = 0x0100;
const CDMA_PERMANENT_BASE: u16 = 0x0200;
const CDMA_TEMPORARY_BASE: u16 = 0x0300;

/// Delivery outcome reported by a CDMA acknowledgement
///
/// Numerically this is the CDMA half of the SMS delivery-state table:
/// `0x0000` completed, `0x0100` unknown, `0x0200 + cause` permanent
/// errors and `0x0300 + cause` temporary errors. Use [`DeliveryState::code`]
/// for the numeric form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeliveryState {
    CompletedReceived,
    Unknown,
    Permanent(CauseCode),
    Temporary(CauseCode),
}

impl DeliveryState {
    /// Numeric delivery-state value
    pub fn code(&self) -> u16 {
        match self {
            DeliveryState::CompletedReceived => 0x0000,
            DeliveryState::Unknown => UNKNOWN,
            DeliveryState::Permanent(cause) => CDMA_PERMANENT_BASE + *cause as u16,
            DeliveryState::Temporary(cause) => CDMA_TEMPORARY_BASE + *cause as u16,
        }
    }

    /// Looks up a numeric delivery-state value
    ///
    /// Returns `None` for values outside the CDMA table, including
    /// unassigned cause codes.
    pub fn from_code(code: u16) -> Option<Self> {
        let cause = |base: u16| {
            u8::try_from(code - base)
                .ok()
                .and_then(|c| CauseCode::try_from(c).ok())
        };
        match code {
            0x0000 => Some(DeliveryState::CompletedReceived),
            UNKNOWN => Some(DeliveryState::Unknown),
            0x0200..=0x02FF => cause(CDMA_PERMANENT_BASE).map(DeliveryState::Permanent),
            0x0300..=0x03FF => cause(CDMA_TEMPORARY_BASE).map(DeliveryState::Temporary),
            _ => None,
        }
    }

    /// Whether the message reached its destination
    pub fn is_completed(&self) -> bool {
        matches!(self, DeliveryState::CompletedReceived)
    }
}

impl fmt::Display for DeliveryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryState::CompletedReceived => f.write_str("completed-received"),
            DeliveryState::Unknown => f.write_str("unknown"),
            DeliveryState::Permanent(cause) => write!(f, "{cause}"),
            DeliveryState::Temporary(cause) => write!(f, "temporary-{cause}"),
        }
    }
}
