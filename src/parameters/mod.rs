//! Field codecs, one per transport-layer parameter or bearer data subparameter

mod address;
mod bearer_data;
mod message_identifier;
mod reply;
mod teleservice;
mod user_data;

pub use address::{Address, MAX_ADDRESS_FIELDS, dtmf_from_ascii, dtmf_to_ascii};
pub use bearer_data::BearerData;
pub use message_identifier::MessageIdentifier;
pub use reply::{BearerReplyOption, CauseCodes, MAX_REPLY_SEQ};
pub use user_data::{MAX_USER_DATA_FIELDS, UserData, UserDataPayload};
