// ABOUTME: Bearer Data parameter, a container of subparameters (C.S0015-B section 4.5)
// ABOUTME: Decodes the message identifier and user data; other subparameters are skipped

use bytes::BytesMut;

use crate::codec::{
    CodecError, Decodable, Encodable, Field, ParameterIter, ParameterKind, Result, put_parameter,
};
use crate::datatypes::SubparameterId;
use crate::log::{Anomaly, LogContext};

use super::{MessageIdentifier, UserData};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BearerData {
    pub message_identifier: Option<MessageIdentifier>,
    pub user_data: Option<UserData>,
}

impl Field for BearerData {
    const NAME: &'static str = "bearer data";
}

impl Decodable for BearerData {
    /// Never returns `None`: a broken subparameter frame ends decoding
    /// but keeps whatever was decoded before it
    fn decode(value: &[u8], ctx: &mut LogContext) -> Option<Self> {
        let mut bearer_data = BearerData::default();

        for subparameter in ParameterIter::subparameters(value) {
            let subparameter = match subparameter {
                Ok(subparameter) => subparameter,
                Err(CodecError::Incomplete {
                    required, available, ..
                }) => {
                    ctx.anomaly(Anomaly::Truncated {
                        field: Self::NAME,
                        required,
                        available,
                    });
                    break;
                }
                Err(e) => {
                    tracing::warn!("unexpected error reading bearer data: {}", e);
                    break;
                }
            };

            match subparameter.kind::<SubparameterId>() {
                ParameterKind::Known(SubparameterId::MessageId) => {
                    tracing::debug!("    reading message identifier...");
                    if let Some(id) = MessageIdentifier::decode(subparameter.value, ctx) {
                        bearer_data.message_identifier = Some(id);
                    }
                }
                ParameterKind::Known(SubparameterId::UserData) => {
                    tracing::debug!("    reading user data...");
                    if let Some(user_data) = UserData::decode(subparameter.value, ctx) {
                        bearer_data.user_data = Some(user_data);
                    }
                }
                ParameterKind::Known(id) => {
                    tracing::debug!("    skipping {} subparameter...", id);
                }
                ParameterKind::Unrecognized(id) => {
                    ctx.anomaly(Anomaly::UnknownSubparameter(id));
                }
            }
        }

        Some(bearer_data)
    }
}

impl Encodable for BearerData {
    fn encode(&self, buf: &mut BytesMut) -> Result<()> {
        if let Some(message_identifier) = &self.message_identifier {
            put_parameter(buf, SubparameterId::MessageId as u8, message_identifier)?;
        }
        if let Some(user_data) = &self.user_data {
            put_parameter(buf, SubparameterId::UserData as u8, user_data)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::TeleserviceMessageType;
    use crate::parameters::UserDataPayload;

    const BEARER_DATA: [u8; 21] = [
        0x00, 0x03, 0x16, 0x8D, 0x30, // message identifier
        0x01, 0x06, 0x10, 0x24, 0x18, 0x30, 0x60, 0x80, // user data
        0x03, 0x06, 0x10, 0x10, 0x04, 0x04, 0x48, 0x47, // timestamp
    ];

    #[test]
    fn decode_deliver_bearer_data() {
        let mut ctx = LogContext::new();
        let bearer_data = BearerData::decode(&BEARER_DATA, &mut ctx).unwrap();

        assert_eq!(
            bearer_data.message_identifier.unwrap().message_type,
            Some(TeleserviceMessageType::Deliver)
        );
        assert_eq!(
            bearer_data.user_data.unwrap().payload,
            Some(UserDataPayload::Text("AAAA".to_string()))
        );
        assert!(!ctx.has_anomalies());
    }

    #[test]
    fn truncated_subparameter_keeps_earlier_fields() {
        let mut value = BEARER_DATA.to_vec();
        value[6] = 0x20;
        let mut ctx = LogContext::new();
        let bearer_data = BearerData::decode(&value, &mut ctx).unwrap();

        assert!(bearer_data.message_identifier.is_some());
        assert!(bearer_data.user_data.is_none());
        assert_eq!(
            ctx.anomalies(),
            &[Anomaly::Truncated {
                field: "bearer data",
                required: 39,
                available: 21
            }]
        );
    }

    #[test]
    fn unknown_subparameter() {
        let mut ctx = LogContext::new();
        let bearer_data = BearerData::decode(&[0x30, 0x01, 0x00], &mut ctx).unwrap();

        assert_eq!(bearer_data, BearerData::default());
        assert_eq!(ctx.anomalies(), &[Anomaly::UnknownSubparameter(0x30)]);
    }

    #[test]
    fn encode_submit_bearer_data() {
        let bearer_data = BearerData {
            message_identifier: Some(MessageIdentifier::submit()),
            user_data: Some(UserData::text("AAAA")),
        };
        let mut buf = BytesMut::new();
        bearer_data.encode(&mut buf).unwrap();

        assert_eq!(
            &buf[..],
            &[
                0x00, 0x03, 0x20, 0x00, 0x00, 0x01, 0x06, 0x10, 0x24, 0x18, 0x30, 0x60, 0x80
            ]
        );
    }
}
