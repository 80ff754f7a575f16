// CDMA SMS transport layer codec
//
// This module holds the pieces shared by every field codec: the error type,
// the Encodable/Decodable traits, and the framer that walks the tagged,
// length-prefixed parameter sequence (and the subparameter sequence nested
// inside bearer data).

use bytes::{BufMut, BytesMut};
use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::datatypes::{PduType, TeleserviceId};
use crate::log::LogContext;

/// Largest value a one-byte length field can describe
pub const MAX_PARAMETER_LEN: usize = u8::MAX as usize;

/// Size of a parameter or subparameter header (id + length)
pub const PARAMETER_HEADER_SIZE: usize = 2;

/// Codec errors with detailed context for debugging
///
/// Only frame-integrity problems are fatal on decode; everything else is
/// recorded as an [`crate::Anomaly`] on the [`LogContext`].
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("CDMA PDU too short, {context}: {available} < {required}")]
    Incomplete {
        context: &'static str,
        required: usize,
        available: usize,
    },

    #[error("Invalid message type: {0:#04x}")]
    InvalidMessageType(u8),

    #[error("Invalid hex PDU: {0}")]
    InvalidHex(#[source] hex::FromHexError),

    #[error("Message is missing {0}")]
    MissingField(&'static str),

    #[error("Message has both text and data")]
    AmbiguousContent,

    #[error("Invalid PDU type to generate a CDMA SMS PDU: '{0}'")]
    InvalidPduType(PduType),

    #[error("Unsupported teleservice to generate a CDMA SMS PDU: {}", teleservice_name(.0))]
    UnsupportedTeleservice(Option<TeleserviceId>),

    #[error("{field} too long (max {max}, {actual} given)")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("Unsupported character in number: '{0}'. Cannot convert to DTMF")]
    InvalidDtmfDigit(char),

    #[error("Field '{field}' validation failed: {reason}")]
    FieldValidation { field: &'static str, reason: String },
}

fn teleservice_name(teleservice_id: &Option<TeleserviceId>) -> &'static str {
    teleservice_id.map_or("unknown", |id| id.as_str())
}

impl CodecError {
    /// Whether the error came from a malformed frame, as opposed to an
    /// invalid encode request
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            CodecError::Incomplete { .. }
                | CodecError::InvalidMessageType(_)
                | CodecError::InvalidHex(_)
        )
    }
}

/// A specialized `Result` type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Trait for field values carried in a parameter or subparameter
pub trait Field {
    /// Name used in log lines and errors
    const NAME: &'static str;
}

/// Trait for fields that can be decoded from a parameter value
///
/// Field decoding never fails the whole PDU: problems are recorded on the
/// log context and the field comes back as `None`.
pub trait Decodable: Field + Sized {
    fn decode(value: &[u8], ctx: &mut LogContext) -> Option<Self>;
}

/// Trait for fields that can be encoded into a parameter value
pub trait Encodable: Field {
    /// Encode this field's value (without the id/length header)
    fn encode(&self, buf: &mut BytesMut) -> Result<()>;
}

/// Classification of a parameter id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind<T> {
    Known(T),
    Unrecognized(u8),
}

/// One tagged, length-prefixed field borrowed from the input buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter<'a> {
    pub id: u8,
    pub value: &'a [u8],
}

impl<'a> Parameter<'a> {
    /// Declared length of the value
    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Maps the raw id onto an id table
    pub fn kind<T: TryFromPrimitive<Primitive = u8>>(&self) -> ParameterKind<T> {
        match T::try_from_primitive(self.id) {
            Ok(id) => ParameterKind::Known(id),
            Err(_) => ParameterKind::Unrecognized(self.id),
        }
    }
}

/// Walks a parameter (or subparameter) sequence
///
/// Yields an error for a header or value that runs past the end of the
/// buffer, and stops after it. Offsets in errors are absolute, counted
/// from the start of the PDU.
#[derive(Debug, Clone)]
pub struct ParameterIter<'a> {
    buf: &'a [u8],
    offset: usize,
    base: usize,
    header_context: &'static str,
    value_context: &'static str,
    done: bool,
}

impl<'a> ParameterIter<'a> {
    /// Iterates the top-level parameters; `base` is the absolute offset
    /// of `buf` within the PDU
    pub fn parameters(buf: &'a [u8], base: usize) -> Self {
        Self::with_context(
            buf,
            base,
            "cannot read parameter header",
            "cannot read parameter value",
        )
    }

    /// Iterates the subparameters inside a bearer data value
    pub fn subparameters(buf: &'a [u8]) -> Self {
        Self::with_context(
            buf,
            0,
            "cannot read subparameter header",
            "cannot read subparameter value",
        )
    }

    fn with_context(
        buf: &'a [u8],
        base: usize,
        header_context: &'static str,
        value_context: &'static str,
    ) -> Self {
        Self {
            buf,
            offset: 0,
            base,
            header_context,
            value_context,
            done: false,
        }
    }

    fn fail(&mut self, context: &'static str, required: usize) -> Option<Result<Parameter<'a>>> {
        self.done = true;
        Some(Err(CodecError::Incomplete {
            context,
            required: self.base + required,
            available: self.base + self.buf.len(),
        }))
    }
}

impl<'a> Iterator for ParameterIter<'a> {
    type Item = Result<Parameter<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.offset >= self.buf.len() {
            return None;
        }

        let header_end = self.offset + PARAMETER_HEADER_SIZE;
        if header_end > self.buf.len() {
            return self.fail(self.header_context, header_end);
        }

        let id = self.buf[self.offset];
        let len = usize::from(self.buf[self.offset + 1]);
        let value_end = header_end + len;
        if value_end > self.buf.len() {
            return self.fail(self.value_context, value_end);
        }

        let value = &self.buf[header_end..value_end];
        self.offset = value_end;
        Some(Ok(Parameter { id, value }))
    }
}

/// Writes `id`, the value length and the encoded value of `field`
///
/// The value is encoded into scratch space first so its length is known
/// before the header is written.
pub fn put_parameter<T: Encodable>(buf: &mut BytesMut, id: u8, field: &T) -> Result<()> {
    let mut value = BytesMut::new();
    field.encode(&mut value)?;

    if value.len() > MAX_PARAMETER_LEN {
        return Err(CodecError::TooLong {
            field: T::NAME,
            max: MAX_PARAMETER_LEN,
            actual: value.len(),
        });
    }

    tracing::trace!("writing {} ({} bytes)", T::NAME, value.len());
    buf.reserve(PARAMETER_HEADER_SIZE + value.len());
    buf.put_u8(id);
    buf.put_u8(value.len() as u8);
    buf.put_slice(&value);
    Ok(())
}

/// Checks that a fixed-size field has its expected length
pub(crate) fn expect_len(
    value: &[u8],
    expected: usize,
    field: &'static str,
    ctx: &mut LogContext,
) -> bool {
    if value.len() == expected {
        return true;
    }
    ctx.anomaly(crate::log::Anomaly::InvalidLength {
        field,
        length: value.len(),
    });
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::ParameterId;

    struct Raw(&'static [u8]);

    impl Field for Raw {
        const NAME: &'static str = "raw";
    }

    impl Encodable for Raw {
        fn encode(&self, buf: &mut BytesMut) -> Result<()> {
            buf.put_slice(self.0);
            Ok(())
        }
    }

    #[test]
    fn iterates_parameters() {
        let buf = [0x00, 0x02, 0x10, 0x02, 0x42, 0x00, 0x08, 0x01, 0xAA];
        let params: Vec<_> = ParameterIter::parameters(&buf, 1)
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(params.len(), 3);
        assert_eq!(
            params[0].kind::<ParameterId>(),
            ParameterKind::Known(ParameterId::TeleserviceId)
        );
        assert_eq!(params[0].value, &[0x10, 0x02]);
        assert_eq!(params[1].kind::<ParameterId>(), ParameterKind::Unrecognized(0x42));
        assert!(params[1].is_empty());
        assert_eq!(params[2].value, &[0xAA]);
    }

    #[test]
    fn value_past_end_is_fatal_and_stops() {
        let buf = [0x08, 0x05, 0x01, 0x02];
        let mut iter = ParameterIter::parameters(&buf, 1);

        match iter.next() {
            Some(Err(CodecError::Incomplete {
                context,
                required,
                available,
            })) => {
                assert_eq!(context, "cannot read parameter value");
                assert_eq!(required, 8);
                assert_eq!(available, 5);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(iter.next().is_none());
    }

    #[test]
    fn lone_id_byte_is_a_truncated_header() {
        let buf = [0x00, 0x00, 0x06];
        let mut iter = ParameterIter::subparameters(&buf);

        assert!(matches!(iter.next(), Some(Ok(Parameter { id: 0, value: &[] }))));
        assert!(matches!(
            iter.next(),
            Some(Err(CodecError::Incomplete {
                context: "cannot read subparameter header",
                ..
            }))
        ));
    }

    #[test]
    fn put_parameter_writes_header() {
        let mut buf = BytesMut::new();
        put_parameter(&mut buf, 0x06, &Raw(&[0xFC])).unwrap();
        assert_eq!(&buf[..], &[0x06, 0x01, 0xFC]);
    }

    #[test]
    fn put_parameter_rejects_oversized_values() {
        static BIG: [u8; 256] = [0u8; 256];
        let mut buf = BytesMut::new();
        let err = put_parameter(&mut buf, 0x08, &Raw(&BIG)).unwrap_err();

        assert!(matches!(
            err,
            CodecError::TooLong {
                field: "raw",
                max: 255,
                actual: 256
            }
        ));
        assert!(buf.is_empty());
    }
}
