//! 범주별 변환 회귀 테스트.
use universal_converter::category::Category;
use universal_converter::conversion::{convert, format_result, ConversionError};
use universal_converter::units::{self, temperature};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

#[test]
fn kilogram_to_gram() {
    let g = convert(Category::Mass, "kg", "g", 1.0).unwrap();
    assert!((g - 1000.0).abs() < 1e-9);
}

#[test]
fn temperature_reference_points() {
    let f = convert(Category::Temperature, "Celsius", "Fahrenheit", 0.0).unwrap();
    assert!((f - 32.0).abs() < 1e-9);
    let k = convert(Category::Temperature, "Celsius", "Kelvin", 0.0).unwrap();
    assert!((k - 273.15).abs() < 1e-9);
    let c = convert(Category::Temperature, "Fahrenheit", "Celsius", 212.0).unwrap();
    assert!((c - 100.0).abs() < 1e-9);
    // -40은 섭씨와 화씨가 같다.
    let same = convert(Category::Temperature, "°C", "°F", -40.0).unwrap();
    assert!((same + 40.0).abs() < 1e-9);
    let k_to_f = convert(Category::Temperature, "K", "F", 0.0).unwrap();
    assert!((k_to_f + 459.67).abs() < 1e-9);
}

#[test]
fn fahrenheit_celsius_helpers_round_trip() {
    for x in [-459.67, -40.0, 0.0, 37.5, 451.0, 1.0e4] {
        let back = temperature::celsius_to_fahrenheit(temperature::fahrenheit_to_celsius(x));
        assert!((back - x).abs() < 1e-9, "{x} -> {back}");
    }
}

#[test]
fn linear_round_trip_for_every_unit_pair() {
    let x = 12.5;
    for category in Category::ALL {
        let table = units::units_for(category);
        for a in table {
            for b in table {
                let there = convert(category, a.name, b.name, x).unwrap();
                let back = convert(category, b.name, a.name, there).unwrap();
                assert!(
                    close(back, x),
                    "{category}: {} -> {} -> {} gave {back}",
                    a.name,
                    b.name,
                    a.name
                );
            }
        }
    }
}

#[test]
fn identity_returns_input_unchanged() {
    for category in Category::ALL {
        for u in units::units_for(category) {
            assert_eq!(convert(category, u.name, u.name, -3.25), Ok(-3.25));
        }
    }
    // 같은 단위를 다른 표기로 써도 값은 그대로다.
    assert_eq!(convert(Category::Length, "m", "Meter", 7.0), Ok(7.0));
}

#[test]
fn sample_factors_match_tables() {
    let cases = [
        (Category::Length, "mi", "km", 1.0, 1.60934),
        (Category::Volume, "gal", "L", 1.0, 3.78541),
        (Category::Area, "ha", "m²", 1.0, 10000.0),
        (Category::Speed, "km/h", "m/s", 36.0, 36.0 * 0.277778),
        (Category::Data, "KB", "B", 1.0, 1024.0),
        (Category::Energy, "kcal", "kJ", 1.0, 4.184),
        (Category::Pressure, "atm", "Pa", 1.0, 101325.0),
        (Category::Time, "Day", "h", 2.0, 48.0),
        (Category::Radiation, "Sv", "rem", 1.0, 100.0),
        (Category::Astronomy, "pc", "ly", 1.0, 3.26156),
        (Category::Cooking, "cup", "tbsp", 1.0, 16.0),
        (Category::Angles, "rev", "°", 0.5, 180.0),
    ];
    for (category, from, to, value, expected) in cases {
        let got = convert(category, from, to, value).unwrap();
        assert!(close(got, expected), "{category}: {value} {from} -> {to} = {got}");
    }
}

#[test]
fn zero_and_negative_values_convert_linearly() {
    assert_eq!(convert(Category::Mass, "kg", "lb", 0.0), Ok(0.0));
    let neg = convert(Category::Length, "km", "m", -2.0).unwrap();
    assert!((neg + 2000.0).abs() < 1e-9);
}

#[test]
fn unknown_units_and_bad_values_are_rejected() {
    assert!(matches!(
        convert(Category::Mass, "kg", "parsec", 1.0),
        Err(ConversionError::InvalidUnit(_))
    ));
    assert!(matches!(
        convert(Category::Length, "kg", "m", 1.0),
        Err(ConversionError::InvalidUnit(_))
    ));
    assert!(matches!(
        convert(Category::Mass, "kg", "g", f64::INFINITY),
        Err(ConversionError::InvalidInput(_))
    ));
}

#[test]
fn non_finite_values_are_rejected_even_for_identity() {
    assert!(matches!(
        convert(Category::Mass, "kg", "kg", f64::NAN),
        Err(ConversionError::InvalidInput(_))
    ));
    assert!(matches!(
        convert(Category::Temperature, "Celsius", "Celsius", f64::NEG_INFINITY),
        Err(ConversionError::InvalidInput(_))
    ));
}

#[test]
fn formatted_results_drop_trailing_zeros() {
    let f = convert(Category::Temperature, "Celsius", "Fahrenheit", 100.0).unwrap();
    assert_eq!(format_result(f), "212");
    let k = convert(Category::Temperature, "Celsius", "Kelvin", 0.0).unwrap();
    assert_eq!(format_result(k), "273.15");
}
