use super::UnitDef;

/// 요리 단위. 물 밀도(1 g = 1 mL)를 가정해 질량과 부피를 한 표에서 다룬다.
pub static UNITS: &[UnitDef] = &[
    UnitDef::linear("Gram", "g", &[], 1.0),
    UnitDef::linear("Kilogram", "kg", &[], 1000.0),
    UnitDef::linear("Ounce", "oz", &[], 28.3495),
    UnitDef::linear("Pound", "lb", &["lbs"], 453.592),
    UnitDef::linear("Teaspoon", "tsp", &[], 5.0),
    UnitDef::linear("Tablespoon", "tbsp", &[], 15.0),
    UnitDef::linear("Cup", "cup", &[], 240.0),
    UnitDef::linear("Milliliter", "mL", &[], 1.0),
    UnitDef::linear("Liter", "L", &[], 1000.0),
];
