// ABOUTME: Defines the transport-layer message type and the bearer-data message type
// ABOUTME: Maps the bearer-data message type onto the PDU type exposed on decoded messages

use num_enum::TryFromPrimitive;

/// SMS Transport Layer message type (C.S0015-B section 3.4, table 3.4-1)
///
/// The first octet of every CDMA SMS PDU. Any other value is a hard
/// decode error.
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum MessageType {
    #[default]
    PointToPoint = 0,
    Broadcast = 1,
    Acknowledge = 2,
}

crate::macros::impl_enum_names!(MessageType {
    PointToPoint => "point-to-point",
    Broadcast => "broadcast",
    Acknowledge => "acknowledge",
});

/// Teleservice message type carried in the Message Identifier
/// subparameter (C.S0015-B section 4.5.1, table 4.5.1-1)
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TeleserviceMessageType {
    Unknown = 0,
    Deliver = 1,
    Submit = 2,
    Cancellation = 3,
    DeliveryAcknowledgement = 4,
    UserAcknowledgement = 5,
    ReadAcknowledgement = 6,
}

crate::macros::impl_enum_names!(TeleserviceMessageType {
    Unknown => "unknown",
    Deliver => "deliver",
    Submit => "submit",
    Cancellation => "cancellation",
    DeliveryAcknowledgement => "delivery acknowledgement",
    UserAcknowledgement => "user acknowledgement",
    ReadAcknowledgement => "read acknowledgement",
});

/// PDU type of a CDMA SMS part
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum PduType {
    #[default]
    Unknown,
    Deliver,
    Submit,
    Cancellation,
    DeliveryAck,
    UserAck,
    ReadAck,
}

crate::macros::impl_enum_names!(PduType {
    Unknown => "unknown",
    Deliver => "cdma-deliver",
    Submit => "cdma-submit",
    Cancellation => "cdma-cancellation",
    DeliveryAck => "cdma-delivery-acknowledgement",
    UserAck => "cdma-user-acknowledgement",
    ReadAck => "cdma-read-acknowledgement",
});

impl From<TeleserviceMessageType> for PduType {
    fn from(message_type: TeleserviceMessageType) -> Self {
        match message_type {
            TeleserviceMessageType::Unknown => PduType::Unknown,
            TeleserviceMessageType::Deliver => PduType::Deliver,
            TeleserviceMessageType::Submit => PduType::Submit,
            TeleserviceMessageType::Cancellation => PduType::Cancellation,
            TeleserviceMessageType::DeliveryAcknowledgement => PduType::DeliveryAck,
            TeleserviceMessageType::UserAcknowledgement => PduType::UserAck,
            TeleserviceMessageType::ReadAcknowledgement => PduType::ReadAck,
        }
    }
}
