use super::UnitDef;

/// 질량 단위. 내부 기준은 kg이다.
pub static UNITS: &[UnitDef] = &[
    UnitDef::linear("Kilogram", "kg", &[], 1.0),
    UnitDef::linear("Gram", "g", &[], 0.001),
    UnitDef::linear("Milligram", "mg", &[], 1e-6),
    UnitDef::linear("Tonne", "t", &["ton"], 1000.0),
    UnitDef::linear("Pound", "lb", &["lbs"], 0.453592),
    UnitDef::linear("Ounce", "oz", &[], 0.0283495),
    UnitDef::linear("Carat", "ct", &[], 0.0002),
];
