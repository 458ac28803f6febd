use super::UnitDef;

/// 각도 단위. 내부 기준은 도(°)이다.
pub static UNITS: &[UnitDef] = &[
    UnitDef::linear("Degree", "°", &["deg"], 1.0),
    UnitDef::linear("Radian", "rad", &[], 57.2958),
    UnitDef::linear("Gradian", "grad", &["gon"], 0.9),
    UnitDef::linear("Revolution", "rev", &["turn"], 360.0),
];
