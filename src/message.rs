// ABOUTME: The decoded / to-be-encoded CDMA SMS part
// ABOUTME: Holds exactly the fields the transport layer codec reads and writes

use bytes::Bytes;

use crate::codec::Result;
use crate::datatypes::{DeliveryState, MessageType, PduType, ServiceCategory, TeleserviceId};
use crate::log::LogContext;

/// A CDMA SMS part
///
/// Decoding always produces a fresh `Message`, with at most one of `text`
/// and `data` set. To encode, build one with [`Message::submit`] or
/// [`Message::submit_data`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub message_type: MessageType,
    /// Set from the Message Identifier subparameter; `Unknown` without one
    pub pdu_type: PduType,
    pub teleservice_id: Option<TeleserviceId>,
    pub service_category: Option<ServiceCategory>,
    /// Originating or destination address, whichever came first
    pub address: Option<String>,
    /// 6-bit reply sequence from Bearer Reply Option or Cause Codes
    pub message_reference: Option<u8>,
    pub delivery_state: Option<DeliveryState>,
    pub text: Option<String>,
    pub data: Option<Bytes>,
}

impl Message {
    /// A WMT text message to `number`
    pub fn submit(number: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            message_type: MessageType::PointToPoint,
            pdu_type: PduType::Submit,
            teleservice_id: Some(TeleserviceId::Wmt),
            address: Some(number.into()),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// A WMT binary message to `number`
    pub fn submit_data(number: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            message_type: MessageType::PointToPoint,
            pdu_type: PduType::Submit,
            teleservice_id: Some(TeleserviceId::Wmt),
            address: Some(number.into()),
            data: Some(data.into()),
            ..Default::default()
        }
    }

    pub fn with_pdu_type(mut self, pdu_type: PduType) -> Self {
        self.pdu_type = pdu_type;
        self
    }

    crate::macros::optional_setters! {
        with_teleservice_id => teleservice_id: TeleserviceId,
        with_service_category => service_category: ServiceCategory,
        with_address => address: String,
        with_message_reference => message_reference: u8,
        with_text => text: String,
        with_data => data: Bytes,
    }

    /// Decode a raw PDU
    pub fn from_pdu(pdu: &[u8], ctx: &mut LogContext) -> Result<Self> {
        crate::pdu::decode_pdu(pdu, ctx)
    }

    /// Decode a hex-encoded PDU
    pub fn from_hex_pdu(hex_pdu: &str, ctx: &mut LogContext) -> Result<Self> {
        crate::pdu::decode_hex_pdu(hex_pdu, ctx)
    }

    /// Encode this message as a submit PDU
    pub fn to_submit_pdu(&self, ctx: &mut LogContext) -> Result<Bytes> {
        crate::pdu::encode_submit_pdu(self, ctx)
    }

    /// Whether this is an acknowledgement reporting successful delivery
    pub fn is_delivered(&self) -> bool {
        self.delivery_state.is_some_and(|state| state.is_completed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_constructor() {
        let message = Message::submit("3305773196", "AAAA");

        assert_eq!(message.message_type, MessageType::PointToPoint);
        assert_eq!(message.pdu_type, PduType::Submit);
        assert_eq!(message.teleservice_id, Some(TeleserviceId::Wmt));
        assert_eq!(message.address.as_deref(), Some("3305773196"));
        assert_eq!(message.text.as_deref(), Some("AAAA"));
        assert!(message.data.is_none());
    }

    #[test]
    fn builder_setters() {
        let message = Message::default()
            .with_pdu_type(PduType::Submit)
            .with_address("123".to_string())
            .with_data(Bytes::from_static(b"\x01\x02"))
            .with_message_reference(7);

        assert_eq!(message.address.as_deref(), Some("123"));
        assert_eq!(message.data.as_deref(), Some(&b"\x01\x02"[..]));
        assert_eq!(message.message_reference, Some(7));
        assert!(!message.is_delivered());
    }
}
