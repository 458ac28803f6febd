use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use sys_locale::get_locale;

use crate::category::Category;
use crate::currency::{CurrencyError, FetchFailure, RateStatus};

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_TITLE: &str = "general.app_title";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MODE_ORDINARY: &str = "mode.ordinary";
    pub const MODE_CURRENCY: &str = "mode.currency";

    pub const LABEL_API_KEY: &str = "label.api_key";
    pub const LABEL_CONVERSION: &str = "label.conversion";
    pub const LABEL_CATEGORY: &str = "label.category";
    pub const LABEL_FROM: &str = "label.from";
    pub const LABEL_TO: &str = "label.to";
    pub const LABEL_VALUE: &str = "label.value";
    pub const LABEL_RESULT: &str = "label.result";
    pub const LABEL_HISTORY: &str = "label.history";

    pub const BUTTON_SAVE_API: &str = "button.save_api";
    pub const BUTTON_UPDATE_RATES: &str = "button.update_rates";
    pub const BUTTON_INSTRUCTIONS: &str = "button.instructions";
    pub const BUTTON_CONVERT: &str = "button.convert";
    pub const BUTTON_CLEAR_HISTORY: &str = "button.clear_history";
    pub const BUTTON_SAVE_HISTORY: &str = "button.save_history";
    pub const BUTTON_EXIT: &str = "button.exit";

    pub const API_INSTRUCTIONS: &str = "message.api_instructions";
    pub const MSG_API_KEY_SAVED: &str = "message.api_key_saved";
    pub const MSG_HISTORY_SAVED: &str = "message.history_saved";
    pub const MSG_HISTORY_CLEARED: &str = "message.history_cleared";
    pub const MSG_HISTORY_EMPTY: &str = "message.history_empty";

    pub const ERROR_ENTER_API_KEY: &str = "error.enter_api_key";
    pub const ERROR_SAVE_KEY: &str = "error.save_key";
    pub const ERROR_INPUT: &str = "error.input";
    pub const ERROR_CONVERSION: &str = "error.conversion";
    pub const ERROR_SAVE: &str = "error.save";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const STATUS_READY: &str = "status.ready";
    pub const STATUS_LOADED_FROM_FILE: &str = "status.loaded_from_file";
    pub const STATUS_NOT_UPDATED: &str = "status.not_updated";
    pub const STATUS_UPDATED: &str = "status.updated";
    pub const STATUS_UPDATED_NOT_SAVED: &str = "status.updated_not_saved";
    pub const STATUS_API_ERROR: &str = "status.api_error";
    pub const STATUS_UPDATE_ERROR: &str = "status.update_error";

    pub const HISTORY_CURRENCY_TAG: &str = "history.currency_tag";
    pub const HISTORY_EXPORT_HEADER: &str = "history.export_header";
    pub const HISTORY_LOADED: &str = "history.loaded";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ORDINARY: &str = "main_menu.ordinary";
    pub const MAIN_MENU_CURRENCY: &str = "main_menu.currency";
    pub const MAIN_MENU_SWAP: &str = "main_menu.swap";
    pub const MAIN_MENU_UPDATE_RATES: &str = "main_menu.update_rates";
    pub const MAIN_MENU_SAVE_API_KEY: &str = "main_menu.save_api_key";
    pub const MAIN_MENU_SHOW_HISTORY: &str = "main_menu.show_history";
    pub const MAIN_MENU_CLEAR_HISTORY: &str = "main_menu.clear_history";
    pub const MAIN_MENU_SAVE_HISTORY: &str = "main_menu.save_history";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_CATEGORY: &str = "prompt.category";
    pub const PROMPT_FROM_UNIT: &str = "prompt.from_unit";
    pub const PROMPT_TO_UNIT: &str = "prompt.to_unit";
    pub const PROMPT_VALUE: &str = "prompt.value";
    pub const PROMPT_API_KEY: &str = "prompt.api_key";
    pub const PROMPT_SAVE_PATH: &str = "prompt.save_path";
    pub const CURRENT_UNITS: &str = "prompt.current_units";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Es,
    De,
    Ru,
    Zh,
}

impl Language {
    /// 언어 코드 앞부분으로 판별한다. 알 수 없는 코드는 영어.
    pub fn from_code(code: &str) -> Self {
        let c = code.trim().to_lowercase();
        let base = c.split(['-', '_', '.']).next().unwrap_or_default();
        match base {
            "es" | "spa" => Language::Es,
            "de" | "ger" | "deu" => Language::De,
            "ru" | "rus" => Language::Ru,
            "zh" | "chi" | "cn" => Language::Zh,
            _ => Language::En,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::De => "de",
            Language::Ru => "ru",
            Language::Zh => "zh",
        }
    }

    /// 환율 날짜 표시 형식.
    pub fn date_format(&self) -> &'static str {
        match self {
            Language::En => "%m/%d/%Y",
            Language::Es => "%d/%m/%Y",
            Language::De | Language::Ru => "%d.%m.%Y",
            Language::Zh => "%Y年%m月%d日",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(en/es/de/ru/zh)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 → 영어 → 키 순으로 찾는다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let builtin = match self.lang {
            Language::En => en(key),
            Language::Es => es(key),
            Language::De => de(key),
            Language::Ru => ru(key),
            Language::Zh => zh(key),
        };
        builtin
            .or_else(|| en(key))
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    /// `{name}` 자리표시자를 채운 번역.
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.t(key);
        for (name, value) in args {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        text
    }

    pub fn category_name(&self, category: Category) -> String {
        self.t(category.i18n_key())
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(self.lang.date_format()).to_string()
    }

    /// 환율 상태를 상태 표시줄 문구로 바꾼다.
    pub fn rate_status(&self, status: &RateStatus) -> String {
        use keys::*;
        match status {
            RateStatus::NotUpdated => self.t(STATUS_NOT_UPDATED),
            RateStatus::LoadedFromFile(date) => {
                self.t_with(STATUS_LOADED_FROM_FILE, &[("date", &self.format_date(*date))])
            }
            RateStatus::Updated(date) => {
                self.t_with(STATUS_UPDATED, &[("date", &self.format_date(*date))])
            }
            RateStatus::UpdatedNotSaved { date, reason } => self.t_with(
                STATUS_UPDATED_NOT_SAVED,
                &[("date", &self.format_date(*date)), ("reason", reason)],
            ),
            RateStatus::UpdateFailed(CurrencyError::Fetch {
                kind: FetchFailure::Api,
                reason,
            }) => self.t_with(STATUS_API_ERROR, &[("reason", reason)]),
            RateStatus::UpdateFailed(err) => {
                self.t_with(STATUS_UPDATE_ERROR, &[("reason", &err.to_string())])
            }
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        _ => normalize_locale_string(&c),
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "en" | "es" | "de" | "ru" | "zh" => Some(lang),
        "spa" | "ger" | "deu" | "rus" | "chi" | "cn" => {
            Some(Language::from_code(&lang).as_code().to_string())
        }
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., zh-cn)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., zh)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_TITLE => "UNIVERSAL CONVERTER V1",
        APP_EXIT => "Exiting application.",
        MODE_ORDINARY => "Regular Converter",
        MODE_CURRENCY => "Currency Converter",
        LABEL_API_KEY => "API Key:",
        LABEL_CONVERSION => "Conversion",
        LABEL_CATEGORY => "Category:",
        LABEL_FROM => "From:",
        LABEL_TO => "To:",
        LABEL_VALUE => "Value:",
        LABEL_RESULT => "Result",
        LABEL_HISTORY => "Conversion History (last 20)",
        BUTTON_SAVE_API => "Save API",
        BUTTON_UPDATE_RATES => "Update Rates",
        BUTTON_INSTRUCTIONS => "Instructions",
        BUTTON_CONVERT => "Convert",
        BUTTON_CLEAR_HISTORY => "Clear History",
        BUTTON_SAVE_HISTORY => "Save History",
        BUTTON_EXIT => "Exit",
        API_INSTRUCTIONS => "To work with currencies, you need an API key:\n\n\
            1. Go to: https://www.exchangerate-api.com/\n\
            2. Click \"Get Free Key\"\n\
            3. Register with your email\n\
            4. You'll receive an API key via email\n\
            5. Copy the key and paste it in the API key field\n\
            6. Click \"Save API\"\n\n\
            The free tier allows 1500 requests per month.\n\
            Click \"Update Rates\" to refresh currency rates.",
        MSG_API_KEY_SAVED => "API key saved!",
        MSG_HISTORY_SAVED => "History saved successfully",
        MSG_HISTORY_CLEARED => "History cleared.",
        MSG_HISTORY_EMPTY => "History is empty.",
        ERROR_ENTER_API_KEY => "Enter API key to update rates",
        ERROR_SAVE_KEY => "Failed to save key: {reason}",
        ERROR_INPUT => "Input error: {reason}",
        ERROR_CONVERSION => "Conversion error: {reason}",
        ERROR_SAVE => "Failed to save: {reason}",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        STATUS_READY => "Ready",
        STATUS_LOADED_FROM_FILE => "Rates loaded from file ({date})",
        STATUS_NOT_UPDATED => "Using saved rates (not updated)",
        STATUS_UPDATED => "Rates updated ({date})",
        STATUS_UPDATED_NOT_SAVED => "Rates updated ({date}), not saved: {reason}",
        STATUS_API_ERROR => "API Error: {reason}",
        STATUS_UPDATE_ERROR => "Update error: {reason}",
        HISTORY_CURRENCY_TAG => "Currency",
        HISTORY_EXPORT_HEADER => "Conversion History:",
        HISTORY_LOADED => "History loaded",
        MAIN_MENU_TITLE => "\n=== UNIVERSAL CONVERTER V1 ===",
        MAIN_MENU_ORDINARY => "1) Unit conversion",
        MAIN_MENU_CURRENCY => "2) Currency conversion",
        MAIN_MENU_SWAP => "3) Swap units",
        MAIN_MENU_UPDATE_RATES => "4) Update rates",
        MAIN_MENU_SAVE_API_KEY => "5) Save API key",
        MAIN_MENU_SHOW_HISTORY => "6) Show history",
        MAIN_MENU_CLEAR_HISTORY => "7) Clear history",
        MAIN_MENU_SAVE_HISTORY => "8) Save history",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_CATEGORY => "Category number (Enter to keep): ",
        PROMPT_FROM_UNIT => "From unit number (Enter to keep): ",
        PROMPT_TO_UNIT => "To unit number (Enter to keep): ",
        PROMPT_VALUE => "Value: ",
        PROMPT_API_KEY => "API key: ",
        PROMPT_SAVE_PATH => "File name (Enter for {default}): ",
        CURRENT_UNITS => "Current: {from} → {to}",
        "category.mass" => "Mass",
        "category.length" => "Length",
        "category.volume" => "Volume",
        "category.temperature" => "Temperature",
        "category.area" => "Area",
        "category.speed" => "Speed",
        "category.data" => "Data",
        "category.energy" => "Energy",
        "category.pressure" => "Pressure",
        "category.time" => "Time",
        "category.radiation" => "Radiation",
        "category.astronomy" => "Astronomy",
        "category.cooking" => "Cooking",
        "category.angles" => "Angles",
        _ => return None,
    })
}

fn es(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_TITLE => "CONVERSOR UNIVERSAL V1",
        APP_EXIT => "Saliendo de la aplicación.",
        MODE_ORDINARY => "Conversor normal",
        MODE_CURRENCY => "Conversor de divisas",
        LABEL_API_KEY => "Clave API:",
        LABEL_CONVERSION => "Conversión",
        LABEL_CATEGORY => "Categoría:",
        LABEL_FROM => "De:",
        LABEL_TO => "A:",
        LABEL_VALUE => "Valor:",
        LABEL_RESULT => "Resultado",
        LABEL_HISTORY => "Historial (últimos 20)",
        BUTTON_SAVE_API => "Guardar API",
        BUTTON_UPDATE_RATES => "Actualizar tasas",
        BUTTON_INSTRUCTIONS => "Instrucciones",
        BUTTON_CONVERT => "Convertir",
        BUTTON_CLEAR_HISTORY => "Limpiar historial",
        BUTTON_SAVE_HISTORY => "Guardar historial",
        BUTTON_EXIT => "Salir",
        MSG_API_KEY_SAVED => "¡Clave API guardada!",
        MSG_HISTORY_SAVED => "Historial guardado",
        MSG_HISTORY_CLEARED => "Historial borrado.",
        MSG_HISTORY_EMPTY => "El historial está vacío.",
        ERROR_ENTER_API_KEY => "Ingrese clave API para actualizar",
        ERROR_SAVE_KEY => "Error guardando clave: {reason}",
        ERROR_INPUT => "Error entrada: {reason}",
        ERROR_CONVERSION => "Error conversión: {reason}",
        ERROR_SAVE => "Error guardando: {reason}",
        INVALID_SELECTION_RETRY => "Entrada no válida. Inténtelo de nuevo.",
        STATUS_READY => "Listo",
        STATUS_LOADED_FROM_FILE => "Tasas cargadas ({date})",
        STATUS_NOT_UPDATED => "Usando tasas guardadas (no actualizadas)",
        STATUS_UPDATED => "Tasas actualizadas ({date})",
        STATUS_UPDATED_NOT_SAVED => "Tasas actualizadas ({date}), no guardadas: {reason}",
        STATUS_API_ERROR => "Error API: {reason}",
        STATUS_UPDATE_ERROR => "Error actualizando: {reason}",
        HISTORY_CURRENCY_TAG => "Divisas",
        HISTORY_EXPORT_HEADER => "Historial conversiones:",
        HISTORY_LOADED => "Historial cargado",
        MAIN_MENU_TITLE => "\n=== CONVERSOR UNIVERSAL V1 ===",
        MAIN_MENU_ORDINARY => "1) Conversión de unidades",
        MAIN_MENU_CURRENCY => "2) Conversión de divisas",
        MAIN_MENU_SWAP => "3) Intercambiar unidades",
        MAIN_MENU_UPDATE_RATES => "4) Actualizar tasas",
        MAIN_MENU_SAVE_API_KEY => "5) Guardar clave API",
        MAIN_MENU_SHOW_HISTORY => "6) Ver historial",
        MAIN_MENU_CLEAR_HISTORY => "7) Limpiar historial",
        MAIN_MENU_SAVE_HISTORY => "8) Guardar historial",
        MAIN_MENU_EXIT => "0) Salir",
        PROMPT_MENU_SELECT => "Seleccione menú: ",
        PROMPT_CATEGORY => "Número de categoría (Enter para mantener): ",
        PROMPT_FROM_UNIT => "Unidad de origen (Enter para mantener): ",
        PROMPT_TO_UNIT => "Unidad de destino (Enter para mantener): ",
        PROMPT_VALUE => "Valor: ",
        PROMPT_API_KEY => "Clave API: ",
        PROMPT_SAVE_PATH => "Nombre de archivo (Enter para {default}): ",
        CURRENT_UNITS => "Actual: {from} → {to}",
        "category.mass" => "Masa",
        "category.length" => "Longitud",
        "category.volume" => "Volumen",
        "category.temperature" => "Temperatura",
        "category.area" => "Área",
        "category.speed" => "Velocidad",
        "category.data" => "Datos",
        "category.energy" => "Energía",
        "category.pressure" => "Presión",
        "category.time" => "Tiempo",
        "category.radiation" => "Radiación",
        "category.astronomy" => "Astronomía",
        "category.cooking" => "Cocina",
        "category.angles" => "Ángulos",
        _ => return None,
    })
}

fn de(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Fehler",
        APP_TITLE => "UNIVERSALUMRECHNER V1",
        APP_EXIT => "Anwendung wird beendet.",
        MODE_ORDINARY => "Normaler Rechner",
        MODE_CURRENCY => "Währungsrechner",
        LABEL_API_KEY => "API-Schlüssel:",
        LABEL_CONVERSION => "Umrechnung",
        LABEL_CATEGORY => "Kategorie:",
        LABEL_FROM => "Von:",
        LABEL_TO => "Zu:",
        LABEL_VALUE => "Wert:",
        LABEL_RESULT => "Ergebnis",
        LABEL_HISTORY => "Verlauf (letzte 20)",
        BUTTON_SAVE_API => "API speichern",
        BUTTON_UPDATE_RATES => "Kurse aktualisieren",
        BUTTON_INSTRUCTIONS => "Anleitung",
        BUTTON_CONVERT => "Umrechnen",
        BUTTON_CLEAR_HISTORY => "Verlauf löschen",
        BUTTON_SAVE_HISTORY => "Verlauf speichern",
        BUTTON_EXIT => "Beenden",
        MSG_API_KEY_SAVED => "API-Schlüssel gespeichert!",
        MSG_HISTORY_SAVED => "Verlauf gespeichert",
        MSG_HISTORY_CLEARED => "Verlauf gelöscht.",
        MSG_HISTORY_EMPTY => "Der Verlauf ist leer.",
        ERROR_ENTER_API_KEY => "API-Schlüssel eingeben zum Aktualisieren",
        ERROR_SAVE_KEY => "Fehler beim Speichern: {reason}",
        ERROR_INPUT => "Eingabefehler: {reason}",
        ERROR_CONVERSION => "Umrechnungsfehler: {reason}",
        ERROR_SAVE => "Speicherfehler: {reason}",
        INVALID_SELECTION_RETRY => "Ungültige Eingabe. Bitte erneut versuchen.",
        STATUS_READY => "Bereit",
        STATUS_LOADED_FROM_FILE => "Kurse geladen ({date})",
        STATUS_NOT_UPDATED => "Verwendete gespeicherte Kurse (nicht aktualisiert)",
        STATUS_UPDATED => "Kurse aktualisiert ({date})",
        STATUS_UPDATED_NOT_SAVED => "Kurse aktualisiert ({date}), nicht gespeichert: {reason}",
        STATUS_API_ERROR => "API-Fehler: {reason}",
        STATUS_UPDATE_ERROR => "Aktualisierungsfehler: {reason}",
        HISTORY_CURRENCY_TAG => "Währung",
        HISTORY_EXPORT_HEADER => "Umrechnungsverlauf:",
        HISTORY_LOADED => "Verlauf geladen",
        MAIN_MENU_TITLE => "\n=== UNIVERSALUMRECHNER V1 ===",
        MAIN_MENU_ORDINARY => "1) Einheiten umrechnen",
        MAIN_MENU_CURRENCY => "2) Währung umrechnen",
        MAIN_MENU_SWAP => "3) Einheiten tauschen",
        MAIN_MENU_UPDATE_RATES => "4) Kurse aktualisieren",
        MAIN_MENU_SAVE_API_KEY => "5) API-Schlüssel speichern",
        MAIN_MENU_SHOW_HISTORY => "6) Verlauf anzeigen",
        MAIN_MENU_CLEAR_HISTORY => "7) Verlauf löschen",
        MAIN_MENU_SAVE_HISTORY => "8) Verlauf speichern",
        MAIN_MENU_EXIT => "0) Beenden",
        PROMPT_MENU_SELECT => "Menü wählen: ",
        PROMPT_CATEGORY => "Kategorienummer (Enter = beibehalten): ",
        PROMPT_FROM_UNIT => "Ausgangseinheit (Enter = beibehalten): ",
        PROMPT_TO_UNIT => "Zieleinheit (Enter = beibehalten): ",
        PROMPT_VALUE => "Wert: ",
        PROMPT_API_KEY => "API-Schlüssel: ",
        PROMPT_SAVE_PATH => "Dateiname (Enter für {default}): ",
        CURRENT_UNITS => "Aktuell: {from} → {to}",
        "category.mass" => "Masse",
        "category.length" => "Länge",
        "category.volume" => "Volumen",
        "category.temperature" => "Temperatur",
        "category.area" => "Fläche",
        "category.speed" => "Geschwindigkeit",
        "category.data" => "Daten",
        "category.energy" => "Energie",
        "category.pressure" => "Druck",
        "category.time" => "Zeit",
        "category.radiation" => "Strahlung",
        "category.astronomy" => "Astronomie",
        "category.cooking" => "Küche",
        "category.angles" => "Winkel",
        _ => return None,
    })
}

fn ru(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Ошибка",
        APP_EXIT => "Выход из приложения.",
        MODE_ORDINARY => "Обычный конвертер",
        MODE_CURRENCY => "Конвертер валют",
        LABEL_CONVERSION => "Конвертация",
        LABEL_CATEGORY => "Категория:",
        LABEL_FROM => "Из:",
        LABEL_TO => "В:",
        LABEL_VALUE => "Значение:",
        LABEL_RESULT => "Результат",
        LABEL_HISTORY => "История конвертаций (последние 20)",
        BUTTON_SAVE_API => "Сохранить API",
        BUTTON_UPDATE_RATES => "Обновить курсы",
        BUTTON_INSTRUCTIONS => "Инструкция",
        BUTTON_CONVERT => "Выполнить конвертацию",
        BUTTON_CLEAR_HISTORY => "Очистить историю",
        BUTTON_SAVE_HISTORY => "Сохранить историю",
        BUTTON_EXIT => "Выход",
        MSG_API_KEY_SAVED => "API ключ сохранен!",
        MSG_HISTORY_SAVED => "История успешно сохранена",
        MSG_HISTORY_CLEARED => "История очищена.",
        MSG_HISTORY_EMPTY => "История пуста.",
        ERROR_ENTER_API_KEY => "Введите API ключ для обновления курсов",
        ERROR_SAVE_KEY => "Не удалось сохранить ключ: {reason}",
        ERROR_INPUT => "Ошибка ввода: {reason}",
        ERROR_CONVERSION => "Ошибка конвертации: {reason}",
        ERROR_SAVE => "Не удалось сохранить: {reason}",
        INVALID_SELECTION_RETRY => "Неверный ввод. Попробуйте снова.",
        STATUS_READY => "Готов к работе",
        STATUS_LOADED_FROM_FILE => "Курсы загружены из файла ({date})",
        STATUS_NOT_UPDATED => "Используются сохраненные курсы (без обновления)",
        STATUS_UPDATED => "Курсы обновлены ({date})",
        STATUS_UPDATED_NOT_SAVED => "Курсы обновлены ({date}), но не сохранены: {reason}",
        STATUS_API_ERROR => "Ошибка API: {reason}",
        STATUS_UPDATE_ERROR => "Ошибка обновления: {reason}",
        HISTORY_CURRENCY_TAG => "Валюта",
        HISTORY_EXPORT_HEADER => "История конвертаций:",
        HISTORY_LOADED => "История загружена",
        MAIN_MENU_ORDINARY => "1) Конвертация единиц",
        MAIN_MENU_CURRENCY => "2) Конвертация валют",
        MAIN_MENU_SWAP => "3) Поменять единицы местами",
        MAIN_MENU_UPDATE_RATES => "4) Обновить курсы",
        MAIN_MENU_SAVE_API_KEY => "5) Сохранить API ключ",
        MAIN_MENU_SHOW_HISTORY => "6) Показать историю",
        MAIN_MENU_CLEAR_HISTORY => "7) Очистить историю",
        MAIN_MENU_SAVE_HISTORY => "8) Сохранить историю",
        MAIN_MENU_EXIT => "0) Выход",
        PROMPT_MENU_SELECT => "Выберите пункт: ",
        PROMPT_CATEGORY => "Номер категории (Enter, чтобы оставить): ",
        PROMPT_FROM_UNIT => "Исходная единица (Enter, чтобы оставить): ",
        PROMPT_TO_UNIT => "Целевая единица (Enter, чтобы оставить): ",
        PROMPT_VALUE => "Значение: ",
        PROMPT_API_KEY => "API ключ: ",
        PROMPT_SAVE_PATH => "Имя файла (Enter для {default}): ",
        CURRENT_UNITS => "Сейчас: {from} → {to}",
        "category.mass" => "Масса",
        "category.length" => "Длина",
        "category.volume" => "Объем",
        "category.temperature" => "Температура",
        "category.area" => "Площадь",
        "category.speed" => "Скорость",
        "category.data" => "Данные",
        "category.energy" => "Энергия",
        "category.pressure" => "Давление",
        "category.time" => "Время",
        "category.radiation" => "Радиация",
        "category.astronomy" => "Астрономия",
        "category.cooking" => "Кухня",
        "category.angles" => "Углы",
        _ => return None,
    })
}

fn zh(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "错误",
        APP_TITLE => "万能转换器 V1",
        APP_EXIT => "正在退出程序。",
        MODE_ORDINARY => "普通转换器",
        MODE_CURRENCY => "货币转换器",
        LABEL_API_KEY => "API密钥:",
        LABEL_CONVERSION => "单位转换",
        LABEL_CATEGORY => "类别:",
        LABEL_FROM => "从:",
        LABEL_TO => "到:",
        LABEL_VALUE => "数值:",
        LABEL_RESULT => "转换结果",
        LABEL_HISTORY => "转换历史(最近20条)",
        BUTTON_SAVE_API => "保存API",
        BUTTON_UPDATE_RATES => "更新汇率",
        BUTTON_INSTRUCTIONS => "使用说明",
        BUTTON_CONVERT => "执行转换",
        BUTTON_CLEAR_HISTORY => "清除历史",
        BUTTON_SAVE_HISTORY => "保存历史",
        BUTTON_EXIT => "退出",
        MSG_API_KEY_SAVED => "API密钥已保存!",
        MSG_HISTORY_SAVED => "历史记录保存成功",
        MSG_HISTORY_CLEARED => "历史记录已清除。",
        MSG_HISTORY_EMPTY => "历史记录为空。",
        ERROR_ENTER_API_KEY => "请输入API密钥以更新汇率",
        ERROR_SAVE_KEY => "保存密钥失败: {reason}",
        ERROR_INPUT => "输入错误: {reason}",
        ERROR_CONVERSION => "转换错误: {reason}",
        ERROR_SAVE => "保存失败: {reason}",
        INVALID_SELECTION_RETRY => "输入无效,请重试。",
        STATUS_READY => "准备就绪",
        STATUS_LOADED_FROM_FILE => "汇率已从文件加载({date})",
        STATUS_NOT_UPDATED => "使用保存的汇率(未更新)",
        STATUS_UPDATED => "汇率已更新({date})",
        STATUS_UPDATED_NOT_SAVED => "汇率已更新({date}),但未保存: {reason}",
        STATUS_API_ERROR => "API错误: {reason}",
        STATUS_UPDATE_ERROR => "更新错误: {reason}",
        HISTORY_CURRENCY_TAG => "货币",
        HISTORY_EXPORT_HEADER => "转换历史记录:",
        HISTORY_LOADED => "历史记录已加载",
        MAIN_MENU_TITLE => "\n=== 万能转换器 V1 ===",
        MAIN_MENU_ORDINARY => "1) 单位转换",
        MAIN_MENU_CURRENCY => "2) 货币转换",
        MAIN_MENU_SWAP => "3) 交换单位",
        MAIN_MENU_UPDATE_RATES => "4) 更新汇率",
        MAIN_MENU_SAVE_API_KEY => "5) 保存API密钥",
        MAIN_MENU_SHOW_HISTORY => "6) 查看历史",
        MAIN_MENU_CLEAR_HISTORY => "7) 清除历史",
        MAIN_MENU_SAVE_HISTORY => "8) 保存历史",
        MAIN_MENU_EXIT => "0) 退出",
        PROMPT_MENU_SELECT => "选择菜单: ",
        PROMPT_CATEGORY => "类别编号(回车保持不变): ",
        PROMPT_FROM_UNIT => "源单位编号(回车保持不变): ",
        PROMPT_TO_UNIT => "目标单位编号(回车保持不变): ",
        PROMPT_VALUE => "数值: ",
        PROMPT_API_KEY => "API密钥: ",
        PROMPT_SAVE_PATH => "文件名(回车使用 {default}): ",
        CURRENT_UNITS => "当前: {from} → {to}",
        "category.mass" => "质量",
        "category.length" => "长度",
        "category.volume" => "体积",
        "category.temperature" => "温度",
        "category.area" => "面积",
        "category.speed" => "速度",
        "category.data" => "数据存储",
        "category.energy" => "能量",
        "category.pressure" => "压力",
        "category.time" => "时间",
        "category.radiation" => "辐射",
        "category.astronomy" => "天文",
        "category.cooking" => "烹饪",
        "category.angles" => "角度",
        _ => return None,
    })
}
