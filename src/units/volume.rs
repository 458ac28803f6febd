use super::UnitDef;

/// 체적 단위. 내부 기준은 리터이다.
pub static UNITS: &[UnitDef] = &[
    UnitDef::linear("Liter", "L", &["litre"], 1.0),
    UnitDef::linear("Milliliter", "mL", &["millilitre"], 0.001),
    UnitDef::linear("Gallon", "gal", &[], 3.78541),
    UnitDef::linear("Pint", "pt", &[], 0.473176),
    UnitDef::linear("Cubic meter", "m³", &["m3", "m^3"], 1000.0),
    UnitDef::linear("Cubic inch", "in³", &["in3", "in^3"], 0.0163871),
    UnitDef::linear("Teaspoon", "tsp", &[], 0.00492892),
    UnitDef::linear("Tablespoon", "tbsp", &[], 0.0147868),
    UnitDef::linear("Cup", "cup", &[], 0.236588),
];
