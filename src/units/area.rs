use super::UnitDef;

/// 면적 단위. 내부 기준은 m²이다.
pub static UNITS: &[UnitDef] = &[
    UnitDef::linear("Square meter", "m²", &["m2", "m^2", "sqm"], 1.0),
    UnitDef::linear("Square kilometer", "km²", &["km2", "km^2"], 1e6),
    UnitDef::linear("Square centimeter", "cm²", &["cm2", "cm^2"], 0.0001),
    UnitDef::linear("Hectare", "ha", &[], 10000.0),
    UnitDef::linear("Acre", "ac", &[], 4046.86),
    UnitDef::linear("Square mile", "mi²", &["mi2", "mi^2"], 2.59e6),
    UnitDef::linear("Square foot", "ft²", &["ft2", "ft^2", "sqft"], 0.092903),
];
