// ABOUTME: Character set helpers for the user data subparameter
// ABOUTME: Picks the narrowest text encoding on encode and converts decoded units to UTF-8

use crate::datatypes::MessageEncoding;

/// Text converted to the units of its selected encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedText {
    pub encoding: MessageEncoding,
    /// Value of the NUM_FIELDS field
    pub num_fields: usize,
    /// Encoded units; 7-bit for ASCII, 8-bit otherwise (Unicode is big
    /// endian, two units per field)
    pub units: Vec<u8>,
}

/// Chooses the narrowest encoding able to carry `text` losslessly:
/// 7-bit ASCII, then Latin-1, then UCS-2
pub fn select_encoding(text: &str) -> MessageEncoding {
    if text.is_ascii() {
        MessageEncoding::Ascii7bit
    } else if text.chars().all(|c| u32::from(c) <= 0xFF) {
        MessageEncoding::Latin
    } else {
        MessageEncoding::Unicode
    }
}

/// Converts `text` into the units of the encoding [`select_encoding`] picks
pub fn encode_text(text: &str) -> EncodedText {
    let encoding = select_encoding(text);
    let units: Vec<u8> = match encoding {
        MessageEncoding::Ascii7bit => text.as_bytes().to_vec(),
        // Every char fits in a byte, checked by select_encoding
        MessageEncoding::Latin => text.chars().map(|c| u32::from(c) as u8).collect(),
        _ => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
    };

    let num_fields = match encoding {
        MessageEncoding::Unicode => units.len() / 2,
        _ => units.len(),
    };

    tracing::trace!("selected '{}' encoding, {} fields", encoding, num_fields);

    EncodedText {
        encoding,
        num_fields,
        units,
    }
}

/// ISO-8859-1 to UTF-8; every byte maps to the code point of equal value
pub fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// 7-bit ASCII units to UTF-8
pub fn ascii7_to_string(units: &[u8]) -> String {
    units.iter().map(|u| char::from(u & 0x7F)).collect()
}

/// Big-endian UTF-16 to UTF-8
///
/// Returns `None` on an odd byte count or an unpaired surrogate.
pub fn ucs2_to_string(bytes: &[u8]) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }

    let code_units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));

    char::decode_utf16(code_units)
        .collect::<Result<String, _>>()
        .ok()
}
