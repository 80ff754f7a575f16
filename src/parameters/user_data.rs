// ABOUTME: User Data subparameter codec (C.S0015-B section 4.5.2)
// ABOUTME: Decodes octet, 7-bit ASCII, Latin-1 and UCS-2 payloads; encodes the narrowest encoding

use bytes::{Bytes, BytesMut};

use crate::bits::{BitReader, BitWriter};
use crate::charset::{ascii7_to_string, encode_text, latin1_to_string, ucs2_to_string};
use crate::codec::{CodecError, Decodable, Encodable, Field, Result};
use crate::datatypes::MessageEncoding;
use crate::log::{Anomaly, LogContext};

/// Largest NUM_FIELDS value
pub const MAX_USER_DATA_FIELDS: usize = u8::MAX as usize;

/// Message contents carried by user data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserDataPayload {
    Text(String),
    Data(Bytes),
}

/// User Data subparameter
///
/// `payload` is `None` after decoding an encoding this codec recognizes
/// but does not convert (Shift-JIS, Korean, GSM...). Encoding always
/// derives the wire encoding from the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub encoding: MessageEncoding,
    /// IS-91 message type, present with [`MessageEncoding::ExtendedProtocolMessage`]
    pub message_type: Option<u8>,
    pub payload: Option<UserDataPayload>,
}

impl UserData {
    /// Text payload in the narrowest encoding that can carry it
    pub fn text(text: &str) -> Self {
        Self {
            encoding: crate::charset::select_encoding(text),
            message_type: None,
            payload: Some(UserDataPayload::Text(text.to_string())),
        }
    }

    /// Binary payload, octet encoded
    pub fn data(data: Bytes) -> Self {
        Self {
            encoding: MessageEncoding::Octet,
            message_type: None,
            payload: Some(UserDataPayload::Data(data)),
        }
    }

    /// Encoding, NUM_FIELDS and wire units of the payload
    fn units(&self) -> Result<(MessageEncoding, usize, Vec<u8>)> {
        match &self.payload {
            Some(UserDataPayload::Text(text)) => {
                let encoded = encode_text(text);
                Ok((encoded.encoding, encoded.num_fields, encoded.units))
            }
            Some(UserDataPayload::Data(data)) => {
                Ok((MessageEncoding::Octet, data.len(), data.to_vec()))
            }
            None => Err(CodecError::FieldValidation {
                field: Self::NAME,
                reason: format!("no payload to write in '{}' encoding", self.encoding),
            }),
        }
    }
}

fn ensure_readable(reader: &BitReader<'_>, n_bits: usize, ctx: &mut LogContext) -> bool {
    if reader.can_read(n_bits) {
        return true;
    }
    ctx.anomaly(Anomaly::Truncated {
        field: UserData::NAME,
        required: reader.bytes_needed(n_bits),
        available: reader.len(),
    });
    false
}

fn read_units(reader: &mut BitReader<'_>, count: usize, n_bits: u8) -> Vec<u8> {
    (0..count).map(|_| reader.read(n_bits)).collect()
}

impl Field for UserData {
    const NAME: &'static str = "user data";
}

impl Decodable for UserData {
    fn decode(value: &[u8], ctx: &mut LogContext) -> Option<Self> {
        let mut reader = BitReader::new(value);

        if !ensure_readable(&reader, 5, ctx) {
            return None;
        }
        let raw_encoding = reader.read(5);
        let encoding = match MessageEncoding::try_from(raw_encoding) {
            Ok(encoding) => encoding,
            Err(_) => {
                ctx.anomaly(Anomaly::UnknownValue {
                    field: "message encoding",
                    value: u32::from(raw_encoding),
                });
                return None;
            }
        };
        tracing::debug!("        message encoding: {}", encoding);

        let mut message_type = None;
        if encoding == MessageEncoding::ExtendedProtocolMessage {
            if !ensure_readable(&reader, 8, ctx) {
                return None;
            }
            let raw = reader.read(8);
            tracing::debug!("        message type: {}", raw);
            message_type = Some(raw);
        }

        if !ensure_readable(&reader, 8, ctx) {
            return None;
        }
        let num_fields = usize::from(reader.read(8));
        tracing::debug!("        num fields: {}", num_fields);

        let payload = match encoding {
            MessageEncoding::Octet => {
                if !ensure_readable(&reader, num_fields * 8, ctx) {
                    return None;
                }
                let data = read_units(&mut reader, num_fields, 8);
                tracing::debug!("        data: ({} bytes)", data.len());
                Some(UserDataPayload::Data(Bytes::from(data)))
            }
            MessageEncoding::Ascii7bit => {
                if !ensure_readable(&reader, num_fields * 7, ctx) {
                    return None;
                }
                let text = ascii7_to_string(&read_units(&mut reader, num_fields, 7));
                tracing::debug!("        text: '{}'", text);
                Some(UserDataPayload::Text(text))
            }
            MessageEncoding::Latin => {
                if !ensure_readable(&reader, num_fields * 8, ctx) {
                    return None;
                }
                let text = latin1_to_string(&read_units(&mut reader, num_fields, 8));
                tracing::debug!("        text: '{}'", text);
                Some(UserDataPayload::Text(text))
            }
            MessageEncoding::Unicode => {
                // NUM_FIELDS counts 16-bit characters
                if !ensure_readable(&reader, num_fields * 16, ctx) {
                    return None;
                }
                let units = read_units(&mut reader, num_fields * 2, 8);
                match ucs2_to_string(&units) {
                    Some(text) => {
                        tracing::debug!("        text: '{}'", text);
                        Some(UserDataPayload::Text(text))
                    }
                    None => {
                        ctx.anomaly(Anomaly::ConversionFailed(encoding.as_str()));
                        None
                    }
                }
            }
            _ => {
                ctx.anomaly(Anomaly::UnsupportedEncoding(encoding));
                None
            }
        };

        Some(Self {
            encoding,
            message_type,
            payload,
        })
    }
}

impl Encodable for UserData {
    fn encode(&self, buf: &mut BytesMut) -> Result<()> {
        let (encoding, num_fields, units) = self.units()?;
        let count = u8::try_from(num_fields).map_err(|_| CodecError::TooLong {
            field: Self::NAME,
            max: MAX_USER_DATA_FIELDS,
            actual: num_fields,
        })?;

        // 16-bit fields go out a byte at a time
        let bits_per_unit = encoding.bits_per_field().map_or(8, |bits| bits.min(8));

        let mut writer = BitWriter::with_capacity(2 + units.len());
        writer.write(5, encoding as u8);
        writer.write(8, count);
        for unit in units {
            writer.write(bits_per_unit, unit);
        }

        tracing::debug!(
            "        wrote {} fields in '{}' encoding ({} bits)",
            num_fields,
            encoding,
            writer.bit_len()
        );
        buf.extend_from_slice(&writer.freeze());
        Ok(())
    }
}
