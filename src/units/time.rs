use super::UnitDef;

/// 시간 단위. 내부 기준은 초이고 1년은 365일로 본다.
pub static UNITS: &[UnitDef] = &[
    UnitDef::linear("Second", "s", &["sec"], 1.0),
    UnitDef::linear("Minute", "min", &[], 60.0),
    UnitDef::linear("Hour", "h", &["hr"], 3600.0),
    UnitDef::linear("Day", "", &["d", "days"], 86400.0),
    UnitDef::linear("Week", "", &["wk", "weeks"], 604800.0),
    UnitDef::linear("Year", "", &["yr", "years"], 31536000.0),
];
