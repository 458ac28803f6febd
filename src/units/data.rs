use super::UnitDef;

/// 데이터 크기 단위. 내부 기준은 bit이고 접두어는 1024 배수이다.
pub static UNITS: &[UnitDef] = &[
    UnitDef::linear("Bit", "bit", &["bits"], 1.0),
    UnitDef::linear("Byte", "B", &["bytes"], 8.0),
    UnitDef::linear("Kilobyte", "KB", &[], 8192.0),
    UnitDef::linear("Megabyte", "MB", &[], 8388608.0),
    UnitDef::linear("Gigabyte", "GB", &[], 8589934592.0),
    UnitDef::linear("Terabyte", "TB", &[], 8796093022208.0),
];
