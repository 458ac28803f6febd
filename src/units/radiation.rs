use super::UnitDef;

/// 방사선량 단위. Sv를 기준으로 하며 Gy는 가중치 1로 취급한다.
pub static UNITS: &[UnitDef] = &[
    UnitDef::linear("Sievert", "Sv", &[], 1.0),
    UnitDef::linear("Rem", "rem", &[], 0.01),
    UnitDef::linear("Rad", "rad", &[], 0.01),
    UnitDef::linear("Gray", "Gy", &[], 1.0),
    UnitDef::linear("Roentgen", "R", &[], 0.00933),
];
