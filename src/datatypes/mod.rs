mod address;
mod cause_code;
mod delivery_state;
mod message_encoding;
mod message_type;
mod parameter_id;
mod service_category;
mod teleservice_id;

pub use address::{DataNetworkAddressType, DigitMode, NumberMode, NumberType, NumberingPlan};
pub use cause_code::{CauseCode, ErrorClass};
pub use delivery_state::DeliveryState;
pub use message_encoding::MessageEncoding;
pub use message_type::{MessageType, PduType, TeleserviceMessageType};
pub use parameter_id::{ParameterId, SubparameterId};
pub use service_category::ServiceCategory;
pub use teleservice_id::TeleserviceId;
