// ABOUTME: Error classes and cause codes of the Cause Codes parameter (C.S0015-B section 3.4.3.6)
// ABOUTME: Cause codes follow the N.S0005 SMS_CauseCode table, grouped by problem area

use num_enum::TryFromPrimitive;

/// ERROR_CLASS: the upper two bits of the first Cause Codes octet
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    NoError = 0,
    Reserved = 1,
    Temporary = 2,
    Permanent = 3,
}

impl From<u8> for ErrorClass {
    /// Interprets the two low bits of `bits`
    fn from(bits: u8) -> Self {
        match bits & 0x03 {
            0 => ErrorClass::NoError,
            1 => ErrorClass::Reserved,
            2 => ErrorClass::Temporary,
            _ => ErrorClass::Permanent,
        }
    }
}

crate::macros::impl_enum_names!(ErrorClass {
    NoError => "no error",
    Reserved => "reserved",
    Temporary => "temporary",
    Permanent => "permanent",
});

/// SMS cause code (N.S0005 section 6.5.2.125)
///
/// Only assigned values have a variant; reserved values are folded onto
/// the closest "other" code before being looked up, see
/// [`crate::cause_code_to_delivery_state`].
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CauseCode {
    // Network problems
    AddressVacant = 0,
    AddressTranslationFailure = 1,
    NetworkResourceOutage = 2,
    NetworkFailure = 3,
    InvalidTeleserviceId = 4,
    NetworkProblemOther = 5,
    // Terminal problems
    NoPageResponse = 32,
    DestinationBusy = 33,
    NoAcknowledgment = 34,
    DestinationResourceShortage = 35,
    SmsDeliveryPostponed = 36,
    DestinationOutOfService = 37,
    DestinationNoLongerAtThisAddress = 38,
    TerminalProblemOther = 39,
    // Radio interface problems
    RadioInterfaceResourceShortage = 64,
    RadioInterfaceIncompatibility = 65,
    RadioInterfaceProblemOther = 66,
    // General problems
    Encoding = 96,
    SmsOriginationDenied = 97,
    SmsTerminationDenied = 98,
    SupplementaryServiceNotSupported = 99,
    SmsNotSupported = 100,
    MissingExpectedParameter = 102,
    MissingMandatoryParameter = 103,
    UnrecognizedParameterValue = 104,
    UnexpectedParameterValue = 105,
    UserDataSizeError = 106,
    GeneralProblemOther = 107,
}

crate::macros::impl_enum_names!(CauseCode {
    AddressVacant => "network-problem-address-vacant",
    AddressTranslationFailure => "network-problem-address-translation-failure",
    NetworkResourceOutage => "network-problem-network-resource-outage",
    NetworkFailure => "network-problem-network-failure",
    InvalidTeleserviceId => "network-problem-invalid-teleservice-id",
    NetworkProblemOther => "network-problem-other",
    NoPageResponse => "terminal-problem-no-page-response",
    DestinationBusy => "terminal-problem-destination-busy",
    NoAcknowledgment => "terminal-problem-no-acknowledgment",
    DestinationResourceShortage => "terminal-problem-destination-resource-shortage",
    SmsDeliveryPostponed => "terminal-problem-sms-delivery-postponed",
    DestinationOutOfService => "terminal-problem-destination-out-of-service",
    DestinationNoLongerAtThisAddress => "terminal-problem-destination-no-longer-at-this-address",
    TerminalProblemOther => "terminal-problem-other",
    RadioInterfaceResourceShortage => "radio-interface-problem-resource-shortage",
    RadioInterfaceIncompatibility => "radio-interface-problem-incompatibility",
    RadioInterfaceProblemOther => "radio-interface-problem-other",
    Encoding => "general-problem-encoding",
    SmsOriginationDenied => "general-problem-sms-origination-denied",
    SmsTerminationDenied => "general-problem-sms-termination-denied",
    SupplementaryServiceNotSupported => "general-problem-supplementary-service-not-supported",
    SmsNotSupported => "general-problem-sms-not-supported",
    MissingExpectedParameter => "general-problem-missing-expected-parameter",
    MissingMandatoryParameter => "general-problem-missing-mandatory-parameter",
    UnrecognizedParameterValue => "general-problem-unrecognized-parameter-value",
    UnexpectedParameterValue => "general-problem-unexpected-parameter-value",
    UserDataSizeError => "general-problem-user-data-size-error",
    GeneralProblemOther => "general-problem-other",
});
