//! CDMA SMS transport layer codec (IS-637 / 3GPP2 C.S0015-B)
//!
//! Translates between the raw octets a CDMA modem exchanges for an SMS
//! (usually hex encoded) and a structured [`Message`].
//!
//! Decoding tolerates anything short of a broken frame: unknown
//! parameters, unknown enum values and failed charset conversions are
//! recorded as [`Anomaly`] values on the [`LogContext`] and the affected
//! field is left unset. Encoding builds point-to-point WMT submit PDUs.
//!
//! # Examples
//!
//! ## Decoding a received message
//!
//! ```rust
//! use cdma_sms::{LogContext, Message, PduType, TeleserviceId};
//!
//! let mut ctx = LogContext::with_label("/org/freedesktop/ModemManager1/SMS/0");
//! let message = Message::from_hex_pdu(
//!     "000002100202070\
//!      28CE95DCC65800601FC08150003168D3001061024183060800306101004044847",
//!     &mut ctx,
//! )?;
//!
//! assert_eq!(message.teleservice_id, Some(TeleserviceId::Wmt));
//! assert_eq!(message.pdu_type, PduType::Deliver);
//! assert_eq!(message.address.as_deref(), Some("3305773196"));
//! assert_eq!(message.text.as_deref(), Some("AAAA"));
//! assert!(ctx.anomalies().is_empty());
//! # Ok::<(), cdma_sms::CodecError>(())
//! ```
//!
//! ## Building a submit PDU
//!
//! ```rust
//! use cdma_sms::{to_hex, LogContext, Message};
//!
//! let mut ctx = LogContext::new();
//! let pdu = Message::submit("3305773196", "AAAA").to_submit_pdu(&mut ctx)?;
//!
//! assert_eq!(
//!     to_hex(&pdu),
//!     "000002100204070\
//!      28CE95DCC6580080D00032000000106102418306080"
//! );
//! # Ok::<(), cdma_sms::CodecError>(())
//! ```

pub mod bits;
pub mod cause_code;
pub mod charset;
pub mod codec;
pub mod datatypes;
pub mod log;
pub mod message;
pub mod parameters;
pub mod pdu;

pub(crate) mod macros;

#[cfg(test)]
mod tests;

pub use cause_code::{cause_code_to_delivery_state, normalize_cause_code};
pub use codec::{CodecError, Decodable, Encodable, Field, Result};
pub use datatypes::*;
pub use log::{Anomaly, LogContext};
pub use message::Message;
pub use pdu::{decode_hex_pdu, decode_pdu, encode_submit_pdu, to_hex};
