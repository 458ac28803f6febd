use super::UnitDef;

/// 압력 단위. 내부 기준은 Pa이며 모두 절대압 배율로만 다룬다.
pub static UNITS: &[UnitDef] = &[
    UnitDef::linear("Pascal", "Pa", &[], 1.0),
    UnitDef::linear("Bar", "bar", &[], 100000.0),
    UnitDef::linear("Atmosphere", "atm", &[], 101325.0),
    UnitDef::linear("mmHg", "", &["torr"], 133.322),
    UnitDef::linear("PSI", "", &[], 6894.76),
];
