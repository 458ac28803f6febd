use super::UnitDef;

/// 길이 단위. 내부 기준은 미터이다.
pub static UNITS: &[UnitDef] = &[
    UnitDef::linear("Meter", "m", &["metre"], 1.0),
    UnitDef::linear("Kilometer", "km", &["kilometre"], 1000.0),
    UnitDef::linear("Centimeter", "cm", &[], 0.01),
    UnitDef::linear("Millimeter", "mm", &[], 0.001),
    UnitDef::linear("Micrometer", "µm", &["um", "micron"], 1e-6),
    UnitDef::linear("Inch", "in", &[], 0.0254),
    UnitDef::linear("Foot", "ft", &["feet"], 0.3048),
    UnitDef::linear("Yard", "yd", &[], 0.9144),
    UnitDef::linear("Mile", "mi", &[], 1609.34),
    UnitDef::linear("Nautical mile", "nmi", &[], 1852.0),
];
