// ABOUTME: Bearer Reply Option and Cause Codes parameters (C.S0015-B 3.4.3.5 and 3.4.3.6)
// ABOUTME: Both carry the 6-bit reply sequence number used as the message reference

use bytes::{BufMut, BytesMut};

use crate::cause_code::cause_code_to_delivery_state;
use crate::codec::{Decodable, Encodable, Field, Result, expect_len};
use crate::datatypes::{DeliveryState, ErrorClass};
use crate::log::{Anomaly, LogContext};

/// Largest 6-bit REPLY_SEQ value
pub const MAX_REPLY_SEQ: u8 = 0x3F;

/// Bearer Reply Option: asks the receiver to acknowledge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BearerReplyOption {
    pub reply_seq: u8,
}

impl Field for BearerReplyOption {
    const NAME: &'static str = "bearer reply option";
}

impl Decodable for BearerReplyOption {
    fn decode(value: &[u8], ctx: &mut LogContext) -> Option<Self> {
        if !expect_len(value, 1, Self::NAME, ctx) {
            return None;
        }

        let reply_seq = value[0] >> 2;
        tracing::debug!("    sequence: {}", reply_seq);
        Some(Self { reply_seq })
    }
}

impl Encodable for BearerReplyOption {
    fn encode(&self, buf: &mut BytesMut) -> Result<()> {
        buf.put_u8((self.reply_seq & MAX_REPLY_SEQ) << 2);
        Ok(())
    }
}

/// Cause Codes: the acknowledgement of a message that asked for one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CauseCodes {
    pub reply_seq: u8,
    pub error_class: ErrorClass,
    /// Raw cause code; always 0 with [`ErrorClass::NoError`]
    pub cause_code: u8,
}

impl CauseCodes {
    pub fn delivery_state(&self) -> DeliveryState {
        cause_code_to_delivery_state(self.error_class, self.cause_code)
    }
}

impl Field for CauseCodes {
    const NAME: &'static str = "cause codes";
}

impl Decodable for CauseCodes {
    fn decode(value: &[u8], ctx: &mut LogContext) -> Option<Self> {
        if value.len() != 1 && value.len() != 2 {
            ctx.anomaly(Anomaly::InvalidLength {
                field: Self::NAME,
                length: value.len(),
            });
            return None;
        }

        let reply_seq = value[0] >> 2;
        let error_class = ErrorClass::from(value[0]);
        tracing::debug!("    sequence: {}", reply_seq);
        tracing::debug!("    error class: {}", error_class);

        let cause_code = match error_class {
            ErrorClass::NoError => 0,
            _ => {
                if !expect_len(value, 2, Self::NAME, ctx) {
                    return None;
                }
                value[1]
            }
        };
        tracing::debug!("    cause code: {}", cause_code);

        Some(Self {
            reply_seq,
            error_class,
            cause_code,
        })
    }
}

impl Encodable for CauseCodes {
    fn encode(&self, buf: &mut BytesMut) -> Result<()> {
        buf.put_u8(((self.reply_seq & MAX_REPLY_SEQ) << 2) | self.error_class as u8);
        if self.error_class != ErrorClass::NoError {
            buf.put_u8(self.cause_code);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::CauseCode;

    #[test]
    fn reply_option_sequence() {
        let mut ctx = LogContext::new();
        let option = BearerReplyOption::decode(&[0xFC], &mut ctx).unwrap();
        assert_eq!(option.reply_seq, 63);

        let mut buf = BytesMut::new();
        option.encode(&mut buf).unwrap();
        assert_eq!(&buf[..], &[0xFC]);
    }

    #[test]
    fn reply_option_wrong_length() {
        let mut ctx = LogContext::new();
        assert_eq!(BearerReplyOption::decode(&[0xFC, 0x00], &mut ctx), None);
        assert_eq!(
            ctx.anomalies(),
            &[Anomaly::InvalidLength {
                field: "bearer reply option",
                length: 2
            }]
        );
    }

    #[test]
    fn cause_codes_no_error_single_byte() {
        let mut ctx = LogContext::new();
        let codes = CauseCodes::decode(&[0x14], &mut ctx).unwrap();

        assert_eq!(codes.reply_seq, 5);
        assert_eq!(codes.error_class, ErrorClass::NoError);
        assert_eq!(codes.delivery_state(), DeliveryState::CompletedReceived);
    }

    #[test]
    fn cause_codes_temporary_error() {
        let mut ctx = LogContext::new();
        let codes = CauseCodes::decode(&[0x16, 0x21], &mut ctx).unwrap();

        assert_eq!(codes.reply_seq, 5);
        assert_eq!(codes.error_class, ErrorClass::Temporary);
        assert_eq!(
            codes.delivery_state(),
            DeliveryState::Temporary(CauseCode::DestinationBusy)
        );

        let mut buf = BytesMut::new();
        codes.encode(&mut buf).unwrap();
        assert_eq!(&buf[..], &[0x16, 0x21]);
    }

    #[test]
    fn cause_codes_error_without_cause_byte() {
        let mut ctx = LogContext::new();
        assert_eq!(CauseCodes::decode(&[0x17], &mut ctx), None);
        assert_eq!(
            ctx.anomalies(),
            &[Anomaly::InvalidLength {
                field: "cause codes",
                length: 1
            }]
        );
    }

    #[test]
    fn cause_codes_wrong_length() {
        let mut ctx = LogContext::new();
        assert_eq!(CauseCodes::decode(&[], &mut ctx), None);
        assert_eq!(CauseCodes::decode(&[0x00, 0x00, 0x00], &mut ctx), None);
        assert_eq!(ctx.anomalies().len(), 2);
    }
}
