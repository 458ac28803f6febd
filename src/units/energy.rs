use super::UnitDef;

/// 에너지 단위. 내부 기준은 J이다.
pub static UNITS: &[UnitDef] = &[
    UnitDef::linear("Joule", "J", &[], 1.0),
    UnitDef::linear("Kilojoule", "kJ", &[], 1000.0),
    UnitDef::linear("Calorie", "cal", &[], 4.184),
    UnitDef::linear("Kilocalorie", "kcal", &[], 4184.0),
    UnitDef::linear("kWh", "", &["kilowatt-hour"], 3600000.0),
    UnitDef::linear("Electronvolt", "eV", &[], 1.60218e-19),
];
