use serde::{Deserialize, Serialize};

/// 변환기가 다루는 측정 범주.
///
/// 온도만 아핀(오프셋 포함) 변환을 쓰고 나머지는 모두 기준 단위에 대한 배율로 환산한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Mass,
    Length,
    Volume,
    Temperature,
    Area,
    Speed,
    Data,
    Energy,
    Pressure,
    Time,
    Radiation,
    Astronomy,
    Cooking,
    Angles,
}

impl Category {
    /// 화면에 나열하는 순서 그대로의 전체 범주 목록.
    pub const ALL: [Category; 14] = [
        Category::Mass,
        Category::Length,
        Category::Volume,
        Category::Temperature,
        Category::Area,
        Category::Speed,
        Category::Data,
        Category::Energy,
        Category::Pressure,
        Category::Time,
        Category::Radiation,
        Category::Astronomy,
        Category::Cooking,
        Category::Angles,
    ];

    /// 영문 기본 이름. 번역이 없을 때의 표시명이기도 하다.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Mass => "Mass",
            Category::Length => "Length",
            Category::Volume => "Volume",
            Category::Temperature => "Temperature",
            Category::Area => "Area",
            Category::Speed => "Speed",
            Category::Data => "Data",
            Category::Energy => "Energy",
            Category::Pressure => "Pressure",
            Category::Time => "Time",
            Category::Radiation => "Radiation",
            Category::Astronomy => "Astronomy",
            Category::Cooking => "Cooking",
            Category::Angles => "Angles",
        }
    }

    /// 번역 키 (`category.mass` 형식).
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Category::Mass => "category.mass",
            Category::Length => "category.length",
            Category::Volume => "category.volume",
            Category::Temperature => "category.temperature",
            Category::Area => "category.area",
            Category::Speed => "category.speed",
            Category::Data => "category.data",
            Category::Energy => "category.energy",
            Category::Pressure => "category.pressure",
            Category::Time => "category.time",
            Category::Radiation => "category.radiation",
            Category::Astronomy => "category.astronomy",
            Category::Cooking => "category.cooking",
            Category::Angles => "category.angles",
        }
    }

    /// 영문 이름(대소문자 무시)으로 범주를 찾는다.
    pub fn from_name(name: &str) -> Option<Category> {
        let name = name.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    pub fn is_affine(&self) -> bool {
        matches!(self, Category::Temperature)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_ignores_case_and_whitespace() {
        assert_eq!(Category::from_name(" mass "), Some(Category::Mass));
        assert_eq!(Category::from_name("TEMPERATURE"), Some(Category::Temperature));
        assert_eq!(Category::from_name("Currency"), None);
    }

    #[test]
    fn only_temperature_is_affine() {
        let affine: Vec<_> = Category::ALL.into_iter().filter(|c| c.is_affine()).collect();
        assert_eq!(affine, vec![Category::Temperature]);
    }
}
