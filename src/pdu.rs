// ABOUTME: Top-level decode and encode entry points for CDMA SMS transport layer PDUs
// ABOUTME: Dispatches parameters to the field codecs and applies the mandatory field policy

use bytes::{BufMut, Bytes, BytesMut};

use crate::codec::{CodecError, Decodable, ParameterIter, ParameterKind, Result, put_parameter};
use crate::datatypes::{MessageType, ParameterId, PduType, ServiceCategory, TeleserviceId};
use crate::log::{Anomaly, LogContext};
use crate::message::Message;
use crate::parameters::{
    Address, BearerData, BearerReplyOption, CauseCodes, MessageIdentifier, UserData,
    UserDataPayload,
};

/// Decode a raw CDMA SMS transport layer PDU
///
/// Fails only if the PDU is empty, has an unknown message type, or a
/// parameter header or value runs past the end of the buffer. Any other
/// problem is recorded on `ctx` and leaves the affected field unset.
///
/// ```
/// use cdma_sms::{decode_hex_pdu, LogContext, TeleserviceId};
///
/// let mut ctx = LogContext::with_label("sms/0");
/// let message = decode_hex_pdu(
///     "00000210020207028CE95DCC658006014C",
///     &mut ctx,
/// )?;
///
/// assert_eq!(message.teleservice_id, Some(TeleserviceId::Wmt));
/// assert_eq!(message.message_reference, Some(19));
/// # Ok::<(), cdma_sms::CodecError>(())
/// ```
pub fn decode_pdu(pdu: &[u8], ctx: &mut LogContext) -> Result<Message> {
    let span = ctx.span("decode");
    let _enter = span.enter();

    tracing::debug!("parsing CDMA SMS part ({} bytes)...", pdu.len());

    let Some(&raw_type) = pdu.first() else {
        return Err(CodecError::Incomplete {
            context: "cannot read message type",
            required: 1,
            available: 0,
        });
    };
    let message_type =
        MessageType::try_from(raw_type).map_err(|_| CodecError::InvalidMessageType(raw_type))?;
    tracing::debug!("  message type: {}", message_type);

    let mut message = Message {
        message_type,
        ..Default::default()
    };

    for parameter in ParameterIter::parameters(&pdu[1..], 1) {
        let parameter = parameter?;

        let id = match parameter.kind::<ParameterId>() {
            ParameterKind::Known(id) => id,
            ParameterKind::Unrecognized(id) => {
                ctx.anomaly(Anomaly::UnknownParameter(id));
                continue;
            }
        };
        tracing::debug!("  reading {}...", id);

        match id {
            ParameterId::TeleserviceId => {
                if let Some(teleservice_id) = TeleserviceId::decode(parameter.value, ctx) {
                    message.teleservice_id = Some(teleservice_id);
                }
            }
            ParameterId::ServiceCategory => {
                if let Some(service_category) = ServiceCategory::decode(parameter.value, ctx) {
                    message.service_category = Some(service_category);
                }
            }
            ParameterId::OriginatingAddress | ParameterId::DestinationAddress => {
                if message.address.is_some() {
                    ctx.anomaly(Anomaly::DuplicateAddress(id));
                    continue;
                }
                message.address = Address::decode(parameter.value, ctx).map(|a| a.number);
            }
            ParameterId::OriginatingSubaddress | ParameterId::DestinationSubaddress => {
                tracing::debug!("  skipping {}...", id);
            }
            ParameterId::BearerReplyOption => {
                if let Some(option) = BearerReplyOption::decode(parameter.value, ctx) {
                    message.message_reference = Some(option.reply_seq);
                }
            }
            ParameterId::CauseCodes => {
                if let Some(cause_codes) = CauseCodes::decode(parameter.value, ctx) {
                    message.message_reference = Some(cause_codes.reply_seq);
                    message.delivery_state = Some(cause_codes.delivery_state());
                }
            }
            ParameterId::BearerData => {
                if let Some(bearer_data) = BearerData::decode(parameter.value, ctx) {
                    apply_bearer_data(&mut message, bearer_data);
                }
            }
        }
    }

    check_mandatory_fields(&message, ctx);

    Ok(message)
}

/// Decode a hex-encoded PDU; whitespace between digits is ignored
pub fn decode_hex_pdu(hex_pdu: &str, ctx: &mut LogContext) -> Result<Message> {
    let digits: String = hex_pdu.chars().filter(|c| !c.is_whitespace()).collect();
    let pdu = hex::decode(digits).map_err(CodecError::InvalidHex)?;
    decode_pdu(&pdu, ctx)
}

/// Renders a PDU as uppercase hex, the form modems exchange
pub fn to_hex(pdu: &[u8]) -> String {
    hex::encode_upper(pdu)
}

fn apply_bearer_data(message: &mut Message, bearer_data: BearerData) {
    if let Some(MessageIdentifier {
        message_type: Some(message_type),
        ..
    }) = bearer_data.message_identifier
    {
        message.pdu_type = PduType::from(message_type);
    }

    if let Some(UserData {
        payload: Some(payload),
        ..
    }) = bearer_data.user_data
    {
        match payload {
            UserDataPayload::Text(text) => {
                message.text = Some(text);
                message.data = None;
            }
            UserDataPayload::Data(data) => {
                message.data = Some(data);
                message.text = None;
            }
        }
    }
}

fn check_mandatory_fields(message: &Message, ctx: &mut LogContext) {
    match message.message_type {
        MessageType::PointToPoint if message.teleservice_id.is_none() => {
            ctx.anomaly(Anomaly::MandatoryMissing(ParameterId::TeleserviceId.as_str()));
        }
        MessageType::Broadcast if message.service_category.is_none() => {
            ctx.anomaly(Anomaly::MandatoryMissing(ParameterId::ServiceCategory.as_str()));
        }
        MessageType::Acknowledge if message.message_reference.is_none() => {
            ctx.anomaly(Anomaly::MandatoryMissing(ParameterId::CauseCodes.as_str()));
        }
        _ => {}
    }
}

/// Encode a message as a point-to-point WMT submit PDU
///
/// The message needs an address and exactly one of text or data. Its
/// PDU type must be [`PduType::Submit`] and its teleservice WMT. The PDU
/// carries the Teleservice ID, Destination Address and Bearer Data
/// parameters, in that order.
pub fn encode_submit_pdu(message: &Message, ctx: &mut LogContext) -> Result<Bytes> {
    let span = ctx.span("encode");
    let _enter = span.enter();

    let number = message
        .address
        .as_deref()
        .ok_or(CodecError::MissingField("address"))?;

    let user_data = match (&message.text, &message.data) {
        (Some(_), Some(_)) => return Err(CodecError::AmbiguousContent),
        (Some(text), None) => UserData::text(text),
        (None, Some(data)) => UserData::data(data.clone()),
        (None, None) => return Err(CodecError::MissingField("text or data")),
    };

    if message.pdu_type != PduType::Submit {
        return Err(CodecError::InvalidPduType(message.pdu_type));
    }

    if message.teleservice_id != Some(TeleserviceId::Wmt) {
        return Err(CodecError::UnsupportedTeleservice(message.teleservice_id));
    }

    let destination = Address::dtmf(number)?;
    let bearer_data = BearerData {
        message_identifier: Some(MessageIdentifier::submit()),
        user_data: Some(user_data),
    };

    tracing::debug!("creating CDMA SMS part...");

    let mut buf = BytesMut::with_capacity(64);
    buf.put_u8(MessageType::PointToPoint as u8);
    put_parameter(&mut buf, ParameterId::TeleserviceId as u8, &TeleserviceId::Wmt)?;
    put_parameter(&mut buf, ParameterId::DestinationAddress as u8, &destination)?;
    put_parameter(&mut buf, ParameterId::BearerData as u8, &bearer_data)?;

    tracing::debug!("  created CDMA SMS part ({} bytes)", buf.len());
    Ok(buf.freeze())
}
