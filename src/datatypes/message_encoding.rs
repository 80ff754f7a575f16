// ABOUTME: User data message encodings (C.R1001-G section 9.1, table 9.1-1)
// ABOUTME: Carries the per-unit bit width used by the user data codec

use num_enum::TryFromPrimitive;

/// MSG_ENCODING field of the User Data subparameter (5 bits on the wire)
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MessageEncoding {
    /// 8-bit binary data
    Octet = 0,
    /// IS-91 extended protocol message; a MESSAGE_TYPE octet follows the encoding
    ExtendedProtocolMessage = 1,
    /// 7-bit ASCII (IRA)
    Ascii7bit = 2,
    /// IA5 (T.50)
    Ia5 = 3,
    /// UCS-2, big endian
    Unicode = 4,
    ShiftJis = 5,
    Korean = 6,
    /// ISO-8859-8
    LatinHebrew = 7,
    /// ISO-8859-1
    Latin = 8,
    Gsm7bit = 9,
    GsmDcs = 10,
}

crate::macros::impl_enum_names!(MessageEncoding {
    Octet => "octet",
    ExtendedProtocolMessage => "extended protocol message",
    Ascii7bit => "7-bit ASCII",
    Ia5 => "IA5",
    Unicode => "unicode",
    ShiftJis => "shift-jis",
    Korean => "korean",
    LatinHebrew => "latin/hebrew",
    Latin => "latin",
    Gsm7bit => "7-bit GSM",
    GsmDcs => "GSM data coding scheme",
});

impl MessageEncoding {
    /// Width in bits of one CHARi field, for the encodings this codec handles
    ///
    /// Unicode fields are 16 bits wide; they are moved 8 bits at a time.
    pub fn bits_per_field(&self) -> Option<u8> {
        match self {
            MessageEncoding::Octet | MessageEncoding::Latin => Some(8),
            MessageEncoding::Ascii7bit => Some(7),
            MessageEncoding::Unicode => Some(16),
            _ => None,
        }
    }
}
