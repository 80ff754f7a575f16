// ABOUTME: Originating/Destination Address parameter codec (C.S0015-B section 3.4.3.3)
// ABOUTME: Handles DTMF digits, ASCII digits, e-mail and IP data network addresses

use bytes::BytesMut;

use crate::bits::{BitReader, BitWriter};
use crate::codec::{CodecError, Decodable, Encodable, Field, Result};
use crate::datatypes::{DataNetworkAddressType, DigitMode, NumberMode, NumberType, NumberingPlan};
use crate::log::{Anomaly, LogContext};

/// Largest NUM_FIELDS value
pub const MAX_ADDRESS_FIELDS: usize = u8::MAX as usize;

/// A decoded or to-be-encoded address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub digit_mode: DigitMode,
    pub number_mode: NumberMode,
    /// Raw NUMBER_TYPE, present in ASCII digit mode only
    pub number_type: Option<u8>,
    /// Raw NUMBER_PLAN, present in ASCII digit mode with digit number mode
    pub numbering_plan: Option<u8>,
    /// Digits, e-mail address, or colon separated hex octets of an IP address
    pub number: String,
}

impl Address {
    /// A DTMF-encoded phone number
    ///
    /// Fails if the number has more than 255 digits or contains a character
    /// with no DTMF code.
    pub fn dtmf(number: &str) -> Result<Self> {
        let digits = number.chars().count();
        if digits > MAX_ADDRESS_FIELDS {
            return Err(CodecError::TooLong {
                field: "number",
                max: MAX_ADDRESS_FIELDS,
                actual: digits,
            });
        }

        if let Some(c) = number.chars().find(|c| dtmf_from_ascii(*c).is_none()) {
            return Err(CodecError::InvalidDtmfDigit(c));
        }

        Ok(Self {
            digit_mode: DigitMode::Dtmf,
            number_mode: NumberMode::Digit,
            number_type: None,
            numbering_plan: None,
            number: number.to_string(),
        })
    }

    /// An 8-bit ASCII phone number with explicit type and plan
    pub fn ascii(number: &str, number_type: NumberType, numbering_plan: NumberingPlan) -> Self {
        Self {
            digit_mode: DigitMode::Ascii,
            number_mode: NumberMode::Digit,
            number_type: Some(number_type as u8),
            numbering_plan: Some(numbering_plan as u8),
            number: number.to_string(),
        }
    }

    /// An e-mail data network address
    pub fn email(address: &str) -> Self {
        Self {
            digit_mode: DigitMode::Ascii,
            number_mode: NumberMode::DataNetworkAddress,
            number_type: Some(DataNetworkAddressType::InternetEmailAddress as u8),
            numbering_plan: None,
            number: address.to_string(),
        }
    }

    fn is_ip_address(&self) -> bool {
        self.number_mode == NumberMode::DataNetworkAddress
            && self.number_type == Some(DataNetworkAddressType::InternetProtocol as u8)
    }

    /// Characters as they go on the wire in ASCII digit mode
    fn ascii_units(&self) -> Result<Vec<u8>> {
        if self.is_ip_address() {
            let octets: String = self.number.split(':').collect();
            return hex::decode(octets).map_err(|e| CodecError::FieldValidation {
                field: Self::NAME,
                reason: format!("invalid IP address '{}': {e}", self.number),
            });
        }

        if !self.number.is_ascii() {
            return Err(CodecError::FieldValidation {
                field: Self::NAME,
                reason: format!("'{}' is not ASCII", self.number),
            });
        }
        Ok(self.number.as_bytes().to_vec())
    }
}

/// DTMF code of a dialed character
pub fn dtmf_from_ascii(c: char) -> Option<u8> {
    match c {
        '1'..='9' => Some(c as u8 - b'0'),
        '0' => Some(10),
        '*' => Some(11),
        '#' => Some(12),
        _ => None,
    }
}

/// Dialed character of a DTMF code
pub fn dtmf_to_ascii(code: u8) -> Option<char> {
    match code {
        1..=9 => Some(char::from(b'0' + code)),
        10 => Some('0'),
        11 => Some('*'),
        12 => Some('#'),
        _ => None,
    }
}

fn ensure_readable(reader: &BitReader<'_>, n_bits: usize, ctx: &mut LogContext) -> bool {
    if reader.can_read(n_bits) {
        return true;
    }
    ctx.anomaly(Anomaly::Truncated {
        field: Address::NAME,
        required: reader.bytes_needed(n_bits),
        available: reader.len(),
    });
    false
}

impl Field for Address {
    const NAME: &'static str = "address";
}

impl Decodable for Address {
    fn decode(value: &[u8], ctx: &mut LogContext) -> Option<Self> {
        let mut reader = BitReader::new(value);

        if !ensure_readable(&reader, 2, ctx) {
            return None;
        }
        let digit_mode = DigitMode::from(reader.read(1));
        let number_mode = NumberMode::from(reader.read(1));
        tracing::debug!("    digit mode: {}", digit_mode);
        tracing::debug!("    number mode: {}", number_mode);

        let mut header_bits = 8;
        if digit_mode == DigitMode::Ascii {
            header_bits += 3;
            if number_mode == NumberMode::Digit {
                header_bits += 4;
            }
        }
        if !ensure_readable(&reader, header_bits, ctx) {
            return None;
        }

        let mut number_type = None;
        let mut numbering_plan = None;
        if digit_mode == DigitMode::Ascii {
            let raw = reader.read(3);
            match number_mode {
                NumberMode::Digit => tracing::debug!(
                    "    number type: {}",
                    NumberType::try_from(raw).map_or("unknown", |t| t.as_str())
                ),
                NumberMode::DataNetworkAddress => tracing::debug!(
                    "    data network address type: {}",
                    DataNetworkAddressType::try_from(raw).map_or("unknown", |t| t.as_str())
                ),
            }
            number_type = Some(raw);

            if number_mode == NumberMode::Digit {
                let raw = reader.read(4);
                tracing::debug!(
                    "    numbering plan: {}",
                    NumberingPlan::try_from(raw).map_or("unknown", |p| p.as_str())
                );
                numbering_plan = Some(raw);
            }
        }

        let num_fields = usize::from(reader.read(8));
        tracing::debug!("    num fields: {}", num_fields);

        let number = if digit_mode == DigitMode::Dtmf {
            if !ensure_readable(&reader, num_fields * 4, ctx) {
                return None;
            }
            let mut number = String::with_capacity(num_fields);
            for _ in 0..num_fields {
                let code = reader.read(4);
                match dtmf_to_ascii(code) {
                    Some(c) => number.push(c),
                    None => {
                        // Nothing after an invalid digit is usable
                        ctx.anomaly(Anomaly::InvalidDtmfDigit(code));
                        break;
                    }
                }
            }
            number
        } else {
            if !ensure_readable(&reader, num_fields * 8, ctx) {
                return None;
            }
            let units: Vec<u8> = (0..num_fields).map(|_| reader.read(8)).collect();

            match number_mode {
                NumberMode::Digit => units.iter().copied().map(char::from).collect(),
                NumberMode::DataNetworkAddress => {
                    match number_type.and_then(|raw| DataNetworkAddressType::try_from(raw).ok()) {
                        Some(DataNetworkAddressType::InternetEmailAddress) => {
                            units.iter().copied().map(char::from).collect()
                        }
                        Some(DataNetworkAddressType::InternetProtocol) => units
                            .iter()
                            .map(|octet| format!("{octet:02X}"))
                            .collect::<Vec<_>>()
                            .join(":"),
                        _ => {
                            ctx.anomaly(Anomaly::UnknownValue {
                                field: "data network address type",
                                value: u32::from(number_type.unwrap_or_default()),
                            });
                            return None;
                        }
                    }
                }
            }
        };

        tracing::debug!("    address: {}", number);

        Some(Self {
            digit_mode,
            number_mode,
            number_type,
            numbering_plan,
            number,
        })
    }
}

impl Encodable for Address {
    fn encode(&self, buf: &mut BytesMut) -> Result<()> {
        let mut writer = BitWriter::new();
        writer.write(1, self.digit_mode as u8);
        writer.write(1, self.number_mode as u8);

        match self.digit_mode {
            DigitMode::Dtmf => {
                let codes = self
                    .number
                    .chars()
                    .map(|c| dtmf_from_ascii(c).ok_or(CodecError::InvalidDtmfDigit(c)))
                    .collect::<Result<Vec<u8>>>()?;
                write_num_fields(&mut writer, codes.len())?;
                for code in codes {
                    writer.write(4, code);
                }
            }
            DigitMode::Ascii => {
                writer.write(3, self.number_type.unwrap_or_default());
                if self.number_mode == NumberMode::Digit {
                    writer.write(4, self.numbering_plan.unwrap_or_default());
                }
                let units = self.ascii_units()?;
                write_num_fields(&mut writer, units.len())?;
                for unit in units {
                    writer.write(8, unit);
                }
            }
        }

        buf.extend_from_slice(&writer.freeze());
        Ok(())
    }
}

fn write_num_fields(writer: &mut BitWriter, num_fields: usize) -> Result<()> {
    let count = u8::try_from(num_fields).map_err(|_| CodecError::TooLong {
        field: "number",
        max: MAX_ADDRESS_FIELDS,
        actual: num_fields,
    })?;
    writer.write(8, count);
    Ok(())
}
