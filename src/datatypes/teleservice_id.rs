// ABOUTME: Defines the CDMA teleservice identifiers (C.R1001-G, table 3.1-1)
// ABOUTME: Only the values listed here are accepted on decode; anything else is left unset

use num_enum::TryFromPrimitive;

/// CDMA Teleservice ID
///
/// Identifies the application-layer service a point-to-point message
/// belongs to. Carried as a 16-bit big-endian value in the Teleservice
/// Identifier parameter.
///
/// ## Encode support
/// Only [`TeleserviceId::Wmt`] can be used to build submit PDUs; every
/// other teleservice is decode-only.
#[derive(TryFromPrimitive)]
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TeleserviceId {
    /// IS-91 Extended Protocol Enhanced Services
    Cmt91 = 0x1000,
    /// Wireless Paging Teleservice
    Wpt = 0x1001,
    /// Wireless Messaging Teleservice
    Wmt = 0x1002,
    /// Voice Mail Notification
    Vmn = 0x1003,
    /// Wireless Application Protocol
    Wap = 0x1004,
    /// Wireless Enhanced Messaging Teleservice
    Wemt = 0x1005,
    /// Service Category Programming Teleservice
    Scpt = 0x1006,
    /// Card Application Toolkit Protocol Teleservice
    Catpt = 0x1007,
}

crate::macros::impl_enum_names!(TeleserviceId {
    Cmt91 => "cmt-91",
    Wpt => "wpt",
    Wmt => "wmt",
    Vmn => "vmn",
    Wap => "wap",
    Wemt => "wemt",
    Scpt => "scpt",
    Catpt => "catpt",
});
