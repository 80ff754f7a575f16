use num_enum::TryFromPrimitive;

/// CDMA broadcast service category (C.R1001-G, table 9.3.1-1)
///
/// Mandatory in broadcast messages. 16-bit big-endian on the wire.
#[derive(TryFromPrimitive)]
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ServiceCategory {
    EmergencyBroadcast = 0x0001,
    Administrative = 0x0002,
    Maintenance = 0x0003,
    GeneralNewsLocal = 0x0004,
    GeneralNewsRegional = 0x0005,
    GeneralNewsNational = 0x0006,
    GeneralNewsInternational = 0x0007,
    BusinessNewsLocal = 0x0008,
    BusinessNewsRegional = 0x0009,
    BusinessNewsNational = 0x000A,
    BusinessNewsInternational = 0x000B,
    SportsNewsLocal = 0x000C,
    SportsNewsRegional = 0x000D,
    SportsNewsNational = 0x000E,
    SportsNewsInternational = 0x000F,
    EntertainmentNewsLocal = 0x0010,
    EntertainmentNewsRegional = 0x0011,
    EntertainmentNewsNational = 0x0012,
    EntertainmentNewsInternational = 0x0013,
    LocalWeather = 0x0014,
    TrafficReport = 0x0015,
    FlightSchedules = 0x0016,
    Restaurants = 0x0017,
    Lodgings = 0x0018,
    RetailDirectory = 0x0019,
    Advertisements = 0x001A,
    StockQuotes = 0x001B,
    Employment = 0x001C,
    Hospitals = 0x001D,
    TechnologyNews = 0x001E,
    Multicategory = 0x001F,
    // Commercial Mobile Alert System
    CmasPresidentialAlert = 0x1000,
    CmasExtremeThreat = 0x1001,
    CmasSevereThreat = 0x1002,
    CmasChildAbductionEmergency = 0x1003,
    CmasTest = 0x1004,
}

crate::macros::impl_enum_names!(ServiceCategory {
    EmergencyBroadcast => "emergency-broadcast",
    Administrative => "administrative",
    Maintenance => "maintenance",
    GeneralNewsLocal => "general-news-local",
    GeneralNewsRegional => "general-news-regional",
    GeneralNewsNational => "general-news-national",
    GeneralNewsInternational => "general-news-international",
    BusinessNewsLocal => "business-news-local",
    BusinessNewsRegional => "business-news-regional",
    BusinessNewsNational => "business-news-national",
    BusinessNewsInternational => "business-news-international",
    SportsNewsLocal => "sports-news-local",
    SportsNewsRegional => "sports-news-regional",
    SportsNewsNational => "sports-news-national",
    SportsNewsInternational => "sports-news-international",
    EntertainmentNewsLocal => "entertainment-news-local",
    EntertainmentNewsRegional => "entertainment-news-regional",
    EntertainmentNewsNational => "entertainment-news-national",
    EntertainmentNewsInternational => "entertainment-news-international",
    LocalWeather => "local-weather",
    TrafficReport => "traffic-report",
    FlightSchedules => "flight-schedules",
    Restaurants => "restaurants",
    Lodgings => "lodgings",
    RetailDirectory => "retail-directory",
    Advertisements => "advertisements",
    StockQuotes => "stock-quotes",
    Employment => "employment",
    Hospitals => "hospitals",
    TechnologyNews => "technology-news",
    Multicategory => "multicategory",
    CmasPresidentialAlert => "cmas-presidential-alert",
    CmasExtremeThreat => "cmas-extreme-threat",
    CmasSevereThreat => "cmas-severe-threat",
    CmasChildAbductionEmergency => "cmas-child-abduction-emergency",
    CmasTest => "cmas-test",
});
