use std::io::{self, Write};
use std::path::PathBuf;

use crate::app::{AppError, ConversionOutcome, Mode, Session};
use crate::category::Category;
use crate::conversion::ConversionError;
use crate::currency::{CurrencyError, TRACKED_CURRENCIES};
use crate::i18n::{keys, Translator};
use crate::units;

/// 기록 내보내기 기본 파일명.
const DEFAULT_EXPORT_FILE: &str = "conversion_history.txt";

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Ordinary,
    Currency,
    Swap,
    UpdateRates,
    SaveApiKey,
    ShowHistory,
    ClearHistory,
    SaveHistory,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_ORDINARY,
        keys::MAIN_MENU_CURRENCY,
        keys::MAIN_MENU_SWAP,
        keys::MAIN_MENU_UPDATE_RATES,
        keys::MAIN_MENU_SAVE_API_KEY,
        keys::MAIN_MENU_SHOW_HISTORY,
        keys::MAIN_MENU_CLEAR_HISTORY,
        keys::MAIN_MENU_SAVE_HISTORY,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Ordinary),
            "2" => return Ok(MenuChoice::Currency),
            "3" => return Ok(MenuChoice::Swap),
            "4" => return Ok(MenuChoice::UpdateRates),
            "5" => return Ok(MenuChoice::SaveApiKey),
            "6" => return Ok(MenuChoice::ShowHistory),
            "7" => return Ok(MenuChoice::ClearHistory),
            "8" => return Ok(MenuChoice::SaveHistory),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 일반 단위 변환: 범주 → 단위 → 값 순으로 입력받는다.
pub fn handle_ordinary(session: &mut Session) -> Result<(), AppError> {
    session.set_mode(Mode::Ordinary);
    let tr = session.translator().clone();

    println!("\n-- {} --", tr.t(keys::MODE_ORDINARY));
    let names: Vec<String> = Category::ALL.iter().map(|c| tr.category_name(*c)).collect();
    print_numbered(&names);
    if let Some(i) = read_choice(&tr, keys::PROMPT_CATEGORY, names.len())? {
        session.set_category(Category::ALL[i]);
    }

    let category = session.ordinary().category;
    let table = units::units_for(category);
    let labels: Vec<String> = table.iter().map(|u| u.label()).collect();
    println!("\n{}", tr.category_name(category));
    print_numbered(&labels);
    let from = read_choice(&tr, keys::PROMPT_FROM_UNIT, table.len())?
        .map(|i| table[i].name.to_string())
        .unwrap_or_else(|| session.ordinary().from.clone());
    let to = read_choice(&tr, keys::PROMPT_TO_UNIT, table.len())?
        .map(|i| table[i].name.to_string())
        .unwrap_or_else(|| session.ordinary().to.clone());
    session.set_units(&from, &to)?;

    convert_and_print(session, &tr)
}

/// 통화 변환: 통화 코드 선택 → 금액.
pub fn handle_currency(session: &mut Session) -> Result<(), AppError> {
    session.set_mode(Mode::Currency);
    let tr = session.translator().clone();

    println!("\n-- {} --", tr.t(keys::MODE_CURRENCY));
    println!("{}", session.rate_status_text());
    let labels: Vec<String> = TRACKED_CURRENCIES.iter().map(|c| c.label()).collect();
    print_numbered(&labels);
    let from = read_choice(&tr, keys::PROMPT_FROM_UNIT, labels.len())?
        .map(|i| TRACKED_CURRENCIES[i].code.to_string())
        .unwrap_or_else(|| session.currency().from.clone());
    let to = read_choice(&tr, keys::PROMPT_TO_UNIT, labels.len())?
        .map(|i| TRACKED_CURRENCIES[i].code.to_string())
        .unwrap_or_else(|| session.currency().to.clone());
    session.set_units(&from, &to)?;

    convert_and_print(session, &tr)
}

fn convert_and_print(session: &mut Session, tr: &Translator) -> Result<(), AppError> {
    print_current_units(session);
    let input = read_line(&tr.t(keys::PROMPT_VALUE))?;
    let result = session.convert(&input);
    print_outcome(session, result);
    Ok(())
}

fn print_outcome(session: &Session, result: Result<ConversionOutcome, ConversionError>) {
    let tr = session.translator();
    match result {
        Ok(outcome) => {
            let to = match session.mode() {
                Mode::Ordinary => &session.ordinary().to,
                Mode::Currency => &session.currency().to,
            };
            println!("{} {} {to}", tr.t(keys::LABEL_RESULT), outcome.formatted);
        }
        Err(e) => {
            let reason = e.to_string();
            println!("{}", tr.t_with(keys::ERROR_INPUT, &[("reason", &reason)]));
        }
    }
}

pub fn handle_swap(session: &mut Session) {
    let reconverted = session.swap_and_convert();
    print_current_units(session);
    if let Some(result) = reconverted {
        print_outcome(session, result);
    }
}

pub fn handle_update_rates(session: &mut Session) {
    let tr = session.translator().clone();
    match session.update_rates() {
        Err(CurrencyError::NoApiKey) => println!("{}", tr.t(keys::ERROR_ENTER_API_KEY)),
        _ => println!("{}", session.rate_status_text()),
    }
}

pub fn handle_save_api_key(session: &mut Session) -> Result<(), AppError> {
    let tr = session.translator().clone();
    let key = read_line(&tr.t(keys::PROMPT_API_KEY))?;
    if key.trim().is_empty() {
        println!("{}", tr.t(keys::ERROR_ENTER_API_KEY));
        return Ok(());
    }
    match session.save_api_key(&key) {
        Ok(()) => {
            println!("{}", tr.t(keys::MSG_API_KEY_SAVED));
            println!("{}", session.rate_status_text());
        }
        Err(e) => {
            let reason = e.to_string();
            println!("{}", tr.t_with(keys::ERROR_SAVE_KEY, &[("reason", &reason)]));
        }
    }
    Ok(())
}

pub fn handle_show_history(session: &Session) {
    let tr = session.translator();
    println!("\n{}", tr.t(keys::LABEL_HISTORY));
    if session.history().is_empty() {
        println!("{}", tr.t(keys::MSG_HISTORY_EMPTY));
        return;
    }
    for line in session.history().display_lines() {
        println!("{line}");
    }
}

pub fn handle_clear_history(session: &mut Session) {
    session.clear_history();
    println!("{}", session.translator().t(keys::MSG_HISTORY_CLEARED));
}

pub fn handle_save_history(session: &mut Session) -> Result<(), AppError> {
    let tr = session.translator().clone();
    if session.history().is_empty() {
        println!("{}", tr.t(keys::MSG_HISTORY_EMPTY));
        return Ok(());
    }
    let answer = read_line(&tr.t_with(
        keys::PROMPT_SAVE_PATH,
        &[("default", DEFAULT_EXPORT_FILE)],
    ))?;
    let path = match answer.trim() {
        "" => PathBuf::from(DEFAULT_EXPORT_FILE),
        other => PathBuf::from(other),
    };
    match session.export_history(&path) {
        Ok(()) => println!("{}", tr.t(keys::MSG_HISTORY_SAVED)),
        Err(e) => {
            let reason = e.to_string();
            println!("{}", tr.t_with(keys::ERROR_SAVE, &[("reason", &reason)]));
        }
    }
    Ok(())
}

fn print_current_units(session: &Session) {
    let (from, to) = match session.mode() {
        Mode::Ordinary => (&session.ordinary().from, &session.ordinary().to),
        Mode::Currency => (&session.currency().from, &session.currency().to),
    };
    println!(
        "{}",
        session
            .translator()
            .t_with(keys::CURRENT_UNITS, &[("from", from), ("to", to)])
    );
}

fn print_numbered(items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        println!("{:>2}) {item}", i + 1);
    }
}

/// 1부터 시작하는 번호를 입력받는다. 빈 입력이면 None.
fn read_choice(tr: &Translator, prompt_key: &str, count: usize) -> Result<Option<usize>, AppError> {
    loop {
        let sel = read_line(&tr.t(prompt_key))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(None);
        }
        match sel.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => return Ok(Some(n - 1)),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 한 줄을 읽는다. 입력이 닫혀 있으면 `UnexpectedEof`.
fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if n == 0 {
        return Err(AppError::Io(io::Error::from(io::ErrorKind::UnexpectedEof)));
    }
    Ok(buf)
}
