use serde::{Deserialize, Serialize};

use super::{UnitDef, UnitRule};

/// 온도 단위를 정의한다. 변환은 항상 섭씨를 경유한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

pub static UNITS: &[UnitDef] = &[
    UnitDef {
        name: "Celsius",
        symbol: "°C",
        aliases: &["c", "degc"],
        rule: UnitRule::Affine(TemperatureUnit::Celsius),
    },
    UnitDef {
        name: "Fahrenheit",
        symbol: "°F",
        aliases: &["f", "degf"],
        rule: UnitRule::Affine(TemperatureUnit::Fahrenheit),
    },
    UnitDef {
        name: "Kelvin",
        symbol: "K",
        aliases: &[],
        rule: UnitRule::Affine(TemperatureUnit::Kelvin),
    },
];

const KELVIN_OFFSET: f64 = 273.15;

pub fn fahrenheit_to_celsius(value: f64) -> f64 {
    (value - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_fahrenheit(value: f64) -> f64 {
    value * 9.0 / 5.0 + 32.0
}

pub fn kelvin_to_celsius(value: f64) -> f64 {
    value - KELVIN_OFFSET
}

pub fn celsius_to_kelvin(value: f64) -> f64 {
    value + KELVIN_OFFSET
}

/// 주어진 값을 섭씨로 변환한다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => fahrenheit_to_celsius(value),
        TemperatureUnit::Kelvin => kelvin_to_celsius(value),
    }
}

/// 섭씨 값을 원하는 단위로 변환한다.
pub fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(value_c),
        TemperatureUnit::Kelvin => celsius_to_kelvin(value_c),
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    let c = to_celsius(value, from);
    from_celsius(c, to)
}
