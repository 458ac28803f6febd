//! 범주별 단위 정의 모음.
//!
//! 각 범주 모듈은 `UNITS` 테이블 하나를 내보낸다. 선형 단위는 범주의 기준 단위에 대한
//! 배율을, 온도 단위는 아핀 변환 종류를 규칙으로 가진다.

pub mod angle;
pub mod area;
pub mod astronomy;
pub mod cooking;
pub mod data;
pub mod energy;
pub mod length;
pub mod mass;
pub mod pressure;
pub mod radiation;
pub mod speed;
pub mod temperature;
pub mod time;
pub mod volume;

pub use temperature::{convert_temperature, TemperatureUnit};

use crate::category::Category;

/// 단위 하나의 변환 규칙.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitRule {
    /// `기준값 = 입력 * factor`. factor는 항상 양수.
    Linear(f64),
    /// 섭씨를 경유하는 온도 변환.
    Affine(TemperatureUnit),
}

/// 단위 테이블의 한 항목.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    pub name: &'static str,
    /// 비어 있으면 이름이 곧 기호이다 (예: `mph`).
    pub symbol: &'static str,
    /// 입력 편의를 위한 ASCII 별칭 (소문자).
    pub aliases: &'static [&'static str],
    pub rule: UnitRule,
}

impl UnitDef {
    pub const fn linear(
        name: &'static str,
        symbol: &'static str,
        aliases: &'static [&'static str],
        factor: f64,
    ) -> Self {
        Self {
            name,
            symbol,
            aliases,
            rule: UnitRule::Linear(factor),
        }
    }

    /// 화면 표시용 라벨. `Kilogram (kg)` 형식이다.
    pub fn label(&self) -> String {
        if self.symbol.is_empty() {
            self.name.to_string()
        } else {
            format!("{} ({})", self.name, self.symbol)
        }
    }

    /// 이름, 기호, 별칭, 라벨 중 하나와 대소문자 무시로 일치하는지 검사한다.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return false;
        }
        q == self.name.to_lowercase()
            || (!self.symbol.is_empty() && q == self.symbol.to_lowercase())
            || self.aliases.iter().any(|a| q == *a)
            || q == self.label().to_lowercase()
    }

    pub fn factor(&self) -> Option<f64> {
        match self.rule {
            UnitRule::Linear(f) => Some(f),
            UnitRule::Affine(_) => None,
        }
    }
}

/// 범주에 속한 단위 테이블을 돌려준다.
pub fn units_for(category: Category) -> &'static [UnitDef] {
    match category {
        Category::Mass => mass::UNITS,
        Category::Length => length::UNITS,
        Category::Volume => volume::UNITS,
        Category::Temperature => temperature::UNITS,
        Category::Area => area::UNITS,
        Category::Speed => speed::UNITS,
        Category::Data => data::UNITS,
        Category::Energy => energy::UNITS,
        Category::Pressure => pressure::UNITS,
        Category::Time => time::UNITS,
        Category::Radiation => radiation::UNITS,
        Category::Astronomy => astronomy::UNITS,
        Category::Cooking => cooking::UNITS,
        Category::Angles => angle::UNITS,
    }
}

/// 범주 안에서 단위 문자열을 찾는다.
pub fn find_unit(category: Category, query: &str) -> Option<&'static UnitDef> {
    units_for(category).iter().find(|u| u.matches(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_linear_category_has_a_base_unit_and_positive_factors() {
        for category in Category::ALL {
            let units = units_for(category);
            assert!(!units.is_empty(), "{category} has no units");
            if category.is_affine() {
                assert!(units.iter().all(|u| u.factor().is_none()));
                continue;
            }
            assert!(
                units.iter().any(|u| u.factor() == Some(1.0)),
                "{category} has no base unit"
            );
            for u in units {
                let f = u.factor().expect("linear unit");
                assert!(f > 0.0 && f.is_finite(), "{} factor {f}", u.name);
            }
        }
    }

    #[test]
    fn lookups_inside_a_category_are_unambiguous() {
        for category in Category::ALL {
            let units = units_for(category);
            for u in units {
                let hits = units.iter().filter(|o| o.matches(&u.label())).count();
                assert_eq!(hits, 1, "{category}: label {} is ambiguous", u.label());
                if !u.symbol.is_empty() {
                    let hits = units.iter().filter(|o| o.matches(u.symbol)).count();
                    assert_eq!(hits, 1, "{category}: symbol {} is ambiguous", u.symbol);
                }
            }
        }
    }

    #[test]
    fn find_unit_accepts_name_symbol_alias_and_label() {
        let kg = find_unit(Category::Mass, "kg").unwrap();
        assert_eq!(kg.name, "Kilogram");
        assert_eq!(find_unit(Category::Mass, "kilogram"), Some(kg));
        assert_eq!(find_unit(Category::Mass, "Kilogram (kg)"), Some(kg));
        assert_eq!(find_unit(Category::Volume, "m3").unwrap().name, "Cubic meter");
        assert_eq!(find_unit(Category::Temperature, "°F").unwrap().name, "Fahrenheit");
        assert!(find_unit(Category::Mass, "meter").is_none());
        assert!(find_unit(Category::Mass, "   ").is_none());
    }
}
