use super::UnitDef;

/// 천문 거리 단위. 내부 기준은 광년이다.
///
/// 배율은 배포된 표를 그대로 유지한다. AU 이하 단위의 값은 "1광년에 들어가는 개수"에
/// 가까워 물리적으로 정확한 환산이 아니다.
pub static UNITS: &[UnitDef] = &[
    UnitDef::linear("Light year", "ly", &[], 1.0),
    UnitDef::linear("Astronomical unit", "AU", &[], 63241.1),
    UnitDef::linear("Parsec", "pc", &[], 3.26156),
    UnitDef::linear("Kilometer", "km", &[], 9.461e12),
    UnitDef::linear("Lunar distance", "LD", &[], 384400.0),
];
