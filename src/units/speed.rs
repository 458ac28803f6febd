use super::UnitDef;

/// 속도 단위. 내부 기준은 m/s이며 Mach는 343 m/s로 고정한다.
pub static UNITS: &[UnitDef] = &[
    UnitDef::linear("m/s", "", &["mps"], 1.0),
    UnitDef::linear("km/h", "", &["kph"], 0.277778),
    UnitDef::linear("mph", "", &[], 0.44704),
    UnitDef::linear("knots", "", &["kn", "knot"], 0.514444),
    UnitDef::linear("Mach", "", &[], 343.0),
];
