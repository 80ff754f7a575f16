// ABOUTME: Bit-field values of the CDMA address parameter (C.S0015-B section 3.4.3.3)
// ABOUTME: Digit mode, number mode, number type, numbering plan and data network address type

use num_enum::TryFromPrimitive;

/// DIGIT_MODE: how the address characters are encoded
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DigitMode {
    /// 4-bit DTMF digits
    Dtmf = 0,
    /// 8-bit ASCII characters
    Ascii = 1,
}

impl From<u8> for DigitMode {
    /// Interprets the low bit of `bit`
    fn from(bit: u8) -> Self {
        match bit & 0x01 {
            0 => DigitMode::Dtmf,
            _ => DigitMode::Ascii,
        }
    }
}

crate::macros::impl_enum_names!(DigitMode {
    Dtmf => "dtmf",
    Ascii => "ascii",
});

/// NUMBER_MODE: phone number or data network address
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumberMode {
    Digit = 0,
    DataNetworkAddress = 1,
}

impl From<u8> for NumberMode {
    fn from(bit: u8) -> Self {
        match bit & 0x01 {
            0 => NumberMode::Digit,
            _ => NumberMode::DataNetworkAddress,
        }
    }
}

crate::macros::impl_enum_names!(NumberMode {
    Digit => "digit",
    DataNetworkAddress => "data network address",
});

/// NUMBER_TYPE when NUMBER_MODE is digit (C.S0005-E table 2.7.1.3.2.4-2)
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumberType {
    Unknown = 0,
    International = 1,
    National = 2,
    NetworkSpecific = 3,
    Subscriber = 4,
    // 5 reserved
    Abbreviated = 6,
    // 7 reserved
}

crate::macros::impl_enum_names!(NumberType {
    Unknown => "unknown",
    International => "international",
    National => "national",
    NetworkSpecific => "specific",
    Subscriber => "subscriber",
    Abbreviated => "abbreviated",
});

/// NUMBER_TYPE when NUMBER_MODE is data network address (table 3.4.3.3-1)
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DataNetworkAddressType {
    Unknown = 0,
    InternetProtocol = 1,
    InternetEmailAddress = 2,
}

crate::macros::impl_enum_names!(DataNetworkAddressType {
    Unknown => "unknown",
    InternetProtocol => "internet protocol",
    InternetEmailAddress => "internet e-mail address",
});

/// NUMBER_PLAN (C.S0005-E table 2.7.1.3.2.4-3)
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumberingPlan {
    Unknown = 0,
    Isdn = 1,
    Data = 3,
    Telex = 4,
    Private = 9,
    // 15 reserved
}

crate::macros::impl_enum_names!(NumberingPlan {
    Unknown => "unknown",
    Isdn => "isdn",
    Data => "data",
    Telex => "telex",
    Private => "private",
});
