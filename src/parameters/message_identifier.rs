use bytes::BytesMut;

use crate::bits::{BitReader, BitWriter};
use crate::codec::{Decodable, Encodable, Field, Result, expect_len};
use crate::datatypes::TeleserviceMessageType;
use crate::log::{Anomaly, LogContext};

/// Message Identifier subparameter (C.S0015-B section 4.5.1)
///
/// ```text
/// MESSAGE_TYPE (4) | MESSAGE_ID (16) | HEADER_IND (1) | RESERVED (3)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageIdentifier {
    /// `None` when the wire value is not a known message type
    pub message_type: Option<TeleserviceMessageType>,
    pub message_id: u16,
    pub header_indicator: bool,
}

impl MessageIdentifier {
    /// Identifier written into submit PDUs; the device assigns the real id
    pub fn submit() -> Self {
        Self {
            message_type: Some(TeleserviceMessageType::Submit),
            message_id: 0,
            header_indicator: false,
        }
    }
}

impl Field for MessageIdentifier {
    const NAME: &'static str = "message identifier";
}

impl Decodable for MessageIdentifier {
    fn decode(value: &[u8], ctx: &mut LogContext) -> Option<Self> {
        if !expect_len(value, 3, Self::NAME, ctx) {
            return None;
        }

        let mut reader = BitReader::new(value);
        let raw_type = reader.read(4);
        let message_id = u16::from_be_bytes([reader.read(8), reader.read(8)]);
        let header_indicator = reader.read(1) == 1;

        let message_type = match TeleserviceMessageType::try_from(raw_type) {
            Ok(message_type) => {
                tracing::debug!("        message type: {}", message_type);
                Some(message_type)
            }
            Err(_) => {
                ctx.anomaly(Anomaly::UnknownValue {
                    field: "message type",
                    value: u32::from(raw_type),
                });
                None
            }
        };
        tracing::debug!("        message id: {}", message_id);
        tracing::debug!("        header indicator: {}", header_indicator);

        Some(Self {
            message_type,
            message_id,
            header_indicator,
        })
    }
}

impl Encodable for MessageIdentifier {
    fn encode(&self, buf: &mut BytesMut) -> Result<()> {
        let mut writer = BitWriter::with_capacity(3);
        writer.write(4, self.message_type.map_or(0, |t| t as u8));
        let [high, low] = self.message_id.to_be_bytes();
        writer.write(8, high);
        writer.write(8, low);
        writer.write(1, u8::from(self.header_indicator));
        writer.write(3, 0);

        buf.extend_from_slice(&writer.freeze());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_deliver() {
        let mut ctx = LogContext::new();
        let id = MessageIdentifier::decode(&[0x16, 0x8D, 0x30], &mut ctx).unwrap();

        assert_eq!(id.message_type, Some(TeleserviceMessageType::Deliver));
        assert_eq!(id.message_id, 0x68D3);
        assert!(!id.header_indicator);
    }

    #[test]
    fn header_indicator_bit() {
        let mut ctx = LogContext::new();
        let id = MessageIdentifier::decode(&[0x20, 0x00, 0x08], &mut ctx).unwrap();
        assert_eq!(id.message_type, Some(TeleserviceMessageType::Submit));
        assert!(id.header_indicator);
    }

    #[test]
    fn encode_submit() {
        let mut buf = BytesMut::new();
        MessageIdentifier::submit().encode(&mut buf).unwrap();
        assert_eq!(&buf[..], &[0x20, 0x00, 0x00]);
    }

    #[test]
    fn unknown_message_type() {
        let mut ctx = LogContext::new();
        let id = MessageIdentifier::decode(&[0x90, 0x00, 0x00], &mut ctx).unwrap();
        assert_eq!(id.message_type, None);
        assert_eq!(
            ctx.anomalies(),
            &[Anomaly::UnknownValue {
                field: "message type",
                value: 9
            }]
        );
    }

    #[test]
    fn wrong_length() {
        let mut ctx = LogContext::new();
        assert_eq!(MessageIdentifier::decode(&[0x20, 0x00], &mut ctx), None);
    }
}
