// ABOUTME: Teleservice Identifier and Service Category parameters (C.S0015-B 3.4.3.1 and 3.4.3.2)
// ABOUTME: Both are a fixed two-byte big-endian code

use std::fmt::Display;

use bytes::{BufMut, BytesMut};
use num_enum::TryFromPrimitive;

use crate::codec::{Decodable, Encodable, Field, Result, expect_len};
use crate::datatypes::{ServiceCategory, TeleserviceId};
use crate::log::{Anomaly, LogContext};

fn decode_u16_code<T>(value: &[u8], ctx: &mut LogContext) -> Option<T>
where
    T: Field + Display + TryFromPrimitive<Primitive = u16>,
{
    let name = <T as Field>::NAME;
    if !expect_len(value, 2, name, ctx) {
        return None;
    }

    let raw = u16::from_be_bytes([value[0], value[1]]);
    match T::try_from_primitive(raw) {
        Ok(code) => {
            tracing::debug!("    {}: {}", name, code);
            Some(code)
        }
        Err(_) => {
            ctx.anomaly(Anomaly::UnknownValue {
                field: name,
                value: u32::from(raw),
            });
            None
        }
    }
}

impl Field for TeleserviceId {
    const NAME: &'static str = "teleservice ID";
}

impl Decodable for TeleserviceId {
    fn decode(value: &[u8], ctx: &mut LogContext) -> Option<Self> {
        decode_u16_code(value, ctx)
    }
}

impl Encodable for TeleserviceId {
    fn encode(&self, buf: &mut BytesMut) -> Result<()> {
        buf.put_u16(*self as u16);
        Ok(())
    }
}

impl Field for ServiceCategory {
    const NAME: &'static str = "service category";
}

impl Decodable for ServiceCategory {
    fn decode(value: &[u8], ctx: &mut LogContext) -> Option<Self> {
        decode_u16_code(value, ctx)
    }
}

impl Encodable for ServiceCategory {
    fn encode(&self, buf: &mut BytesMut) -> Result<()> {
        buf.put_u16(*self as u16);
        Ok(())
    }
}
