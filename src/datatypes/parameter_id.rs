use num_enum::TryFromPrimitive;

/// Transport-layer parameter identifiers (C.S0015-B section 3.4.3, table 3.4.3-1)
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParameterId {
    TeleserviceId = 0,
    ServiceCategory = 1,
    OriginatingAddress = 2,
    OriginatingSubaddress = 3,
    DestinationAddress = 4,
    DestinationSubaddress = 5,
    BearerReplyOption = 6,
    CauseCodes = 7,
    BearerData = 8,
}

crate::macros::impl_enum_names!(ParameterId {
    TeleserviceId => "teleservice ID",
    ServiceCategory => "service category",
    OriginatingAddress => "originating address",
    OriginatingSubaddress => "originating subaddress",
    DestinationAddress => "destination address",
    DestinationSubaddress => "destination subaddress",
    BearerReplyOption => "bearer reply option",
    CauseCodes => "cause codes",
    BearerData => "bearer data",
});

/// Bearer data subparameter identifiers (C.S0015-B section 4.5, table 4.5-1)
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SubparameterId {
    MessageId = 0,
    UserData = 1,
    UserResponseCode = 2,
    MessageCenterTimeStamp = 3,
    ValidityPeriodAbsolute = 4,
    ValidityPeriodRelative = 5,
    DeferredDeliveryTimeAbsolute = 6,
    DeferredDeliveryTimeRelative = 7,
    PriorityIndicator = 8,
    PrivacyIndicator = 9,
    ReplyOption = 10,
    NumberOfMessages = 11,
    AlertOnMessageDelivery = 12,
    LanguageIndicator = 13,
    CallBackNumber = 14,
    MessageDisplayMode = 15,
    MultipleEncodingUserData = 16,
    MessageDepositIndex = 17,
    ServiceCategoryProgramData = 18,
    ServiceCategoryProgramResult = 19,
    MessageStatus = 20,
    TpFailureCause = 21,
    EnhancedVmn = 22,
    EnhancedVmnAck = 23,
}

crate::macros::impl_enum_names!(SubparameterId {
    MessageId => "message identifier",
    UserData => "user data",
    UserResponseCode => "user response code",
    MessageCenterTimeStamp => "message center timestamp",
    ValidityPeriodAbsolute => "absolute validity period",
    ValidityPeriodRelative => "relative validity period",
    DeferredDeliveryTimeAbsolute => "absolute deferred delivery time",
    DeferredDeliveryTimeRelative => "relative deferred delivery time",
    PriorityIndicator => "priority indicator",
    PrivacyIndicator => "privacy indicator",
    ReplyOption => "reply option",
    NumberOfMessages => "number of messages",
    AlertOnMessageDelivery => "alert on message delivery",
    LanguageIndicator => "language indicator",
    CallBackNumber => "call back number",
    MessageDisplayMode => "message display mode",
    MultipleEncodingUserData => "multiple encoding user data",
    MessageDepositIndex => "message deposit index",
    ServiceCategoryProgramData => "service category program data",
    ServiceCategoryProgramResult => "service category program result",
    MessageStatus => "message status",
    TpFailureCause => "TP failure cause",
    EnhancedVmn => "enhanced vmn",
    EnhancedVmnAck => "enhanced vmn ack",
});
