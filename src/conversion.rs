use crate::category::Category;
use crate::currency::CurrencyTable;
use crate::units::{self, UnitDef, UnitRule};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// 비어 있거나 숫자가 아닌 입력, 혹은 유한하지 않은 값
    InvalidInput(String),
    /// 범주(또는 환율표)에 없는 단위
    InvalidUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            ConversionError::InvalidUnit(u) => write!(f, "unknown unit: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

fn ensure_finite(value: f64) -> Result<f64, ConversionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConversionError::InvalidInput(format!("{value} is not a finite number")))
    }
}

fn resolve(category: Category, unit: &str) -> Result<&'static UnitDef, ConversionError> {
    units::find_unit(category, unit)
        .ok_or_else(|| ConversionError::InvalidUnit(format!("{unit} ({category})")))
}

/// 범주 안에서 값을 변환한다.
///
/// 값이 유한하지 않으면 단위와 상관없이 `InvalidInput` 이다. 그다음, 단위 문자열이
/// 완전히 같으면 테이블을 조회하지 않고 값을 그대로 돌려준다.
/// 선형 단위는 `value * f_from / f_to`, 온도는 섭씨를 경유한다.
pub fn convert(
    category: Category,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    let value = ensure_finite(value)?;
    if from_unit == to_unit {
        return Ok(value);
    }
    let from = resolve(category, from_unit)?;
    let to = resolve(category, to_unit)?;
    if from.name == to.name {
        return Ok(value);
    }
    match (from.rule, to.rule) {
        (UnitRule::Affine(f), UnitRule::Affine(t)) => Ok(units::convert_temperature(value, f, t)),
        (UnitRule::Linear(f), UnitRule::Linear(t)) => {
            let base = value * f;
            Ok(base / t)
        }
        // 한 범주 안에서 규칙 종류가 섞이는 경우는 테이블 정의상 없다.
        _ => Err(ConversionError::InvalidUnit(format!(
            "{from_unit} → {to_unit} ({category})"
        ))),
    }
}

/// 환율표로 통화 금액을 변환한다. 환율은 모두 "1 USD 당 해당 통화" 기준이다.
pub fn convert_currency(
    table: &CurrencyTable,
    from_code: &str,
    to_code: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    let value = ensure_finite(value)?;
    if from_code == to_code {
        return Ok(value);
    }
    let from_rate = table
        .rate(from_code)
        .ok_or_else(|| ConversionError::InvalidUnit(from_code.to_string()))?;
    let to_rate = table
        .rate(to_code)
        .ok_or_else(|| ConversionError::InvalidUnit(to_code.to_string()))?;
    Ok(value * (to_rate / from_rate))
}

/// 사용자가 입력한 문자열을 숫자로 해석한다.
pub fn parse_value(input: &str) -> Result<f64, ConversionError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::InvalidInput("enter a value to convert".into()));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ConversionError::InvalidInput(format!("'{trimmed}' is not a number")))?;
    ensure_finite(value)
}

/// 결과를 소수 8자리로 반올림한 뒤 끝의 0과 소수점을 제거한다.
pub fn format_result(value: f64) -> String {
    let s = format!("{value:.8}");
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_result_strips_trailing_zeros() {
        assert_eq!(format_result(32.0), "32");
        assert_eq!(format_result(273.15), "273.15");
        assert_eq!(format_result(0.1 + 0.2), "0.3");
        assert_eq!(format_result(1.0 / 3.0), "0.33333333");
        assert_eq!(format_result(1e-9), "0");
        assert_eq!(format_result(-2.5), "-2.5");
    }

    #[test]
    fn parse_value_rejects_empty_and_garbage() {
        assert_eq!(parse_value(" 1.5 "), Ok(1.5));
        assert!(matches!(parse_value(""), Err(ConversionError::InvalidInput(_))));
        assert!(matches!(parse_value("abc"), Err(ConversionError::InvalidInput(_))));
        assert!(matches!(parse_value("NaN"), Err(ConversionError::InvalidInput(_))));
        assert!(matches!(parse_value("inf"), Err(ConversionError::InvalidInput(_))));
    }

    #[test]
    fn identity_short_circuits_before_lookup() {
        assert_eq!(convert(Category::Mass, "nope", "nope", 3.5), Ok(3.5));
    }

    #[test]
    fn non_finite_value_is_invalid_input() {
        let err = convert(Category::Mass, "kg", "g", f64::NAN).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidInput(_)));
    }

    #[test]
    fn unknown_unit_is_invalid_unit() {
        let err = convert(Category::Mass, "kg", "meter", 1.0).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidUnit(_)));
    }

    #[test]
    fn currency_uses_rate_ratio() {
        let table = CurrencyTable::bundled();
        let eur = convert_currency(&table, "USD", "EUR", 100.0).unwrap();
        assert!((eur - 85.0).abs() < 1e-9);
        let usd = convert_currency(&table, "EUR", "USD", 85.0).unwrap();
        assert!((usd - 100.0).abs() < 1e-9);
        assert!(matches!(
            convert_currency(&table, "USD", "XYZ", 1.0),
            Err(ConversionError::InvalidUnit(_))
        ));
    }
}
