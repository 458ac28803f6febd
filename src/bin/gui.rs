#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use log::{info, warn};
use rfd::FileDialog;
use std::{fs, path::Path};
use universal_converter::{
    app::{Mode, Session},
    category::Category,
    config,
    conversion::ConversionError,
    currency::{CurrencyError, TRACKED_CURRENCIES},
    i18n::{self, keys, Translator},
    units,
};

#[derive(Parser, Debug)]
#[command(name = "universal_converter", version)]
struct Args {
    /// Interface language (auto, en, es, de, ru, zh)
    #[arg(short = 'L', long = "lang", default_value = "auto")]
    lang: String,
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    let args = Args::parse();

    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        warn!("config not loaded, using defaults: {e}");
        config::Config::default()
    });
    let lang = i18n::resolve_language(&args.lang, Some(app_cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, app_cfg.language_pack_dir.as_deref());
    let title = tr.t(keys::APP_TITLE);

    let cfg = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("{e}");
            }
            Box::new(GuiApp::new(app_cfg, tr))
        }),
    )
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    // 기본 폰트 뒤에 두어 라틴/키릴 문자는 기본 폰트로 그린다.
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .push(font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 중국어 표시용 시스템 폰트를 찾아 보조 폰트로 등록한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = vec![
        "assets/fonts/NotoSansCJK-Regular.ttc".into(),
        "/System/Library/Fonts/PingFang.ttc".into(),
        "/System/Library/Fonts/STHeiti Light.ttc".into(),
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc".into(),
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc".into(),
        "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc".into(),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["msyh.ttc", "simhei.ttf", "simsun.ttc"] {
            candidates.push(fonts.join(cand));
        }
    }
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "cjk_font");
            info!("using fallback font {}", p.display());
            return Ok(());
        }
    }
    Err("CJK font not found; Chinese text may not render.".into())
}

struct GuiApp {
    session: Session,
    tr: Translator,
    value_input: String,
    result_text: String,
    api_key_input: String,
    message: Option<(String, String)>,
    show_instructions: bool,
}

impl GuiApp {
    fn new(config: config::Config, tr: Translator) -> Self {
        let session = match Session::open(config.clone(), tr.clone(), None) {
            Ok(session) => session,
            Err(e) => {
                // HTTP 클라이언트 생성 실패: 네트워크 없이 내장 환율로 동작한다.
                warn!("rate provider unavailable: {e}");
                Session::new(
                    config,
                    tr.clone(),
                    Box::new(OfflineProvider),
                    Box::new(universal_converter::currency::SystemClock),
                )
            }
        };
        let api_key_input = session.api_key().to_string();
        Self {
            session,
            tr,
            value_input: String::new(),
            result_text: String::new(),
            api_key_input,
            message: None,
            show_instructions: false,
        }
    }

    fn txt(&self, key: &str) -> String {
        self.tr.t(key)
    }

    fn notify(&mut self, title_key: &str, body: String) {
        self.message = Some((self.txt(title_key), body));
    }

    fn ui_api_panel(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.txt(keys::LABEL_API_KEY));
                ui.add(
                    egui::TextEdit::singleline(&mut self.api_key_input)
                        .password(true)
                        .desired_width(260.0),
                );
                if ui.button(self.txt(keys::BUTTON_SAVE_API)).clicked() {
                    self.save_api_key();
                }
                if ui.button(self.txt(keys::BUTTON_UPDATE_RATES)).clicked() {
                    self.update_rates();
                }
                if ui.button(self.txt(keys::BUTTON_INSTRUCTIONS)).clicked() {
                    self.show_instructions = true;
                }
            });
        });
    }

    fn save_api_key(&mut self) {
        if self.api_key_input.trim().is_empty() {
            self.notify(keys::ERROR_PREFIX, self.txt(keys::ERROR_ENTER_API_KEY));
            return;
        }
        let key = self.api_key_input.clone();
        match self.session.save_api_key(&key) {
            Ok(()) => self.notify(keys::BUTTON_SAVE_API, self.txt(keys::MSG_API_KEY_SAVED)),
            Err(e) => {
                let body = self.tr.t_with(keys::ERROR_SAVE_KEY, &[("reason", &e.to_string())]);
                self.notify(keys::ERROR_PREFIX, body);
            }
        }
    }

    fn update_rates(&mut self) {
        match self.session.update_rates() {
            Ok(()) => {}
            Err(CurrencyError::NoApiKey) => {
                self.notify(keys::ERROR_PREFIX, self.txt(keys::ERROR_ENTER_API_KEY));
            }
            Err(_) => {
                let body = self.session.rate_status_text();
                self.notify(keys::ERROR_PREFIX, body);
            }
        }
    }

    fn ui_conversion(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(egui::RichText::new(self.txt(keys::LABEL_CONVERSION)).strong());
            egui::Grid::new("conv_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    match self.session.mode() {
                        Mode::Ordinary => self.ui_ordinary_selectors(ui),
                        Mode::Currency => self.ui_currency_selectors(ui),
                    }

                    ui.label(self.txt(keys::LABEL_VALUE));
                    ui.horizontal(|ui| {
                        let edit = ui.add(
                            egui::TextEdit::singleline(&mut self.value_input).desired_width(160.0),
                        );
                        let enter =
                            edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                        if ui.button(self.txt(keys::BUTTON_CONVERT)).clicked() || enter {
                            self.convert();
                        }
                    });
                    ui.end_row();
                });
        });
    }

    fn ui_ordinary_selectors(&mut self, ui: &mut egui::Ui) {
        let state = self.session.ordinary().clone();

        ui.label(self.txt(keys::LABEL_CATEGORY));
        let mut category = state.category;
        egui::ComboBox::from_id_source("category")
            .selected_text(self.tr.category_name(category))
            .width(200.0)
            .show_ui(ui, |ui| {
                for c in Category::ALL {
                    ui.selectable_value(&mut category, c, self.tr.category_name(c));
                }
            });
        ui.end_row();
        if category != state.category {
            self.session.set_category(category);
            self.result_text.clear();
            return;
        }

        let options: Vec<(String, String)> = units::units_for(state.category)
            .iter()
            .map(|u| (u.label(), u.name.to_string()))
            .collect();
        let (mut from, mut to) = (state.from.clone(), state.to.clone());
        let swapped = self.ui_unit_pair(ui, "unit_from", "unit_to", &options, &mut from, &mut to);
        if from != state.from || to != state.to {
            if let Err(e) = self.session.set_units(&from, &to) {
                warn!("unit selection rejected: {e}");
            }
        }
        self.reconvert_after_swap(swapped);
    }

    fn ui_currency_selectors(&mut self, ui: &mut egui::Ui) {
        let state = self.session.currency().clone();
        let options: Vec<(String, String)> = TRACKED_CURRENCIES
            .iter()
            .map(|c| (c.label(), c.code.to_string()))
            .collect();
        let (mut from, mut to) = (state.from.clone(), state.to.clone());
        let swapped =
            self.ui_unit_pair(ui, "currency_from", "currency_to", &options, &mut from, &mut to);
        if from != state.from || to != state.to {
            if let Err(e) = self.session.set_units(&from, &to) {
                warn!("currency selection rejected: {e}");
            }
        }
        self.reconvert_after_swap(swapped);
    }

    /// 결과가 표시된 상태에서 단위를 맞바꿨으면 다시 변환한다.
    fn reconvert_after_swap(&mut self, swapped: bool) {
        if swapped && !self.result_text.is_empty() {
            self.convert();
        }
    }

    /// 원본/교환 버튼/대상 선택 줄. 교환 버튼을 눌렀으면 `true`.
    fn ui_unit_pair(
        &self,
        ui: &mut egui::Ui,
        from_id: &str,
        to_id: &str,
        options: &[(String, String)],
        from: &mut String,
        to: &mut String,
    ) -> bool {
        let mut swapped = false;
        ui.label(self.txt(keys::LABEL_FROM));
        ui.horizontal(|ui| {
            unit_combo(ui, from_id, from, options);
            if ui.button("↔").clicked() {
                std::mem::swap(from, to);
                swapped = true;
            }
            ui.label(self.txt(keys::LABEL_TO));
            unit_combo(ui, to_id, to, options);
        });
        ui.end_row();
        swapped
    }

    fn convert(&mut self) {
        let input = self.value_input.clone();
        match self.session.convert(&input) {
            Ok(outcome) => {
                let to = match self.session.mode() {
                    Mode::Ordinary => {
                        let state = self.session.ordinary();
                        units::find_unit(state.category, &state.to)
                            .map(|u| u.label())
                            .unwrap_or_else(|| state.to.clone())
                    }
                    Mode::Currency => self.session.currency().to.clone(),
                };
                self.result_text = format!("{} {to}", outcome.formatted);
            }
            Err(e) => {
                let key = match e {
                    ConversionError::InvalidInput(_) => keys::ERROR_INPUT,
                    ConversionError::InvalidUnit(_) => keys::ERROR_CONVERSION,
                };
                let body = self.tr.t_with(key, &[("reason", &e.to_string())]);
                self.notify(keys::ERROR_PREFIX, body);
            }
        }
    }

    fn ui_history(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(egui::RichText::new(self.txt(keys::LABEL_HISTORY)).strong());
            egui::ScrollArea::vertical()
                .max_height(220.0)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for line in self.session.history().display() {
                        ui.label(line);
                    }
                });
            ui.horizontal(|ui| {
                if ui.button(self.txt(keys::BUTTON_CLEAR_HISTORY)).clicked() {
                    self.session.clear_history();
                }
                if ui.button(self.txt(keys::BUTTON_SAVE_HISTORY)).clicked() {
                    self.save_history();
                }
            });
        });
    }

    fn save_history(&mut self) {
        if self.session.history().is_empty() {
            self.notify(keys::BUTTON_SAVE_HISTORY, self.txt(keys::MSG_HISTORY_EMPTY));
            return;
        }
        let Some(path) = FileDialog::new()
            .set_file_name("conversion_history.txt")
            .add_filter("Text", &["txt"])
            .save_file()
        else {
            return;
        };
        match self.session.export_history(&path) {
            Ok(()) => self.notify(keys::BUTTON_SAVE_HISTORY, self.txt(keys::MSG_HISTORY_SAVED)),
            Err(e) => {
                let body = self.tr.t_with(keys::ERROR_SAVE, &[("reason", &e.to_string())]);
                self.notify(keys::ERROR_PREFIX, body);
            }
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 상단 바: 제목과 모드 전환
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.txt(keys::APP_TITLE));
                ui.separator();
                let (next, label) = match self.session.mode() {
                    Mode::Ordinary => (Mode::Currency, self.txt(keys::MODE_CURRENCY)),
                    Mode::Currency => (Mode::Ordinary, self.txt(keys::MODE_ORDINARY)),
                };
                if ui.button(label).clicked() {
                    self.session.set_mode(next);
                    self.result_text.clear();
                }
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let status = match self.session.mode() {
                    Mode::Currency => self.session.rate_status_text(),
                    Mode::Ordinary => self.txt(keys::STATUS_READY),
                };
                ui.label(status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.txt(keys::BUTTON_EXIT)).clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.session.mode() == Mode::Currency {
                self.ui_api_panel(ui);
                ui.add_space(6.0);
            }
            self.ui_conversion(ui);
            ui.add_space(6.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new(self.txt(keys::LABEL_RESULT)).strong());
                ui.label(egui::RichText::new(&self.result_text).size(20.0));
            });
            ui.add_space(6.0);
            self.ui_history(ui);
        });

        if self.show_instructions {
            egui::Window::new(self.txt(keys::BUTTON_INSTRUCTIONS))
                .collapsible(false)
                .open(&mut self.show_instructions)
                .show(ctx, |ui| {
                    ui.label(self.tr.t(keys::API_INSTRUCTIONS));
                });
        }

        if let Some((title, body)) = self.message.clone() {
            let mut open = true;
            egui::Window::new(title)
                .collapsible(false)
                .resizable(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(body);
                });
            if !open {
                self.message = None;
            }
        }
    }
}

impl Drop for GuiApp {
    fn drop(&mut self) {
        if let Err(e) = self.session.shutdown() {
            warn!("history not saved: {e}");
        }
    }
}

fn unit_combo(ui: &mut egui::Ui, id: &str, value: &mut String, options: &[(String, String)]) {
    let current = options
        .iter()
        .find(|(_, code)| code == value)
        .map(|(label, _)| label.clone())
        .unwrap_or_else(|| value.clone());
    egui::ComboBox::from_id_source(id)
        .selected_text(current)
        .width(200.0)
        .show_ui(ui, |ui| {
            for (label, code) in options {
                ui.selectable_value(value, code.clone(), label.as_str());
            }
        });
}

/// HTTP 클라이언트를 만들 수 없을 때 쓰는 제공자. 항상 네트워크 오류를 돌려준다.
struct OfflineProvider;

impl universal_converter::currency::RateProvider for OfflineProvider {
    fn fetch_usd_rates(
        &self,
        _api_key: &str,
    ) -> Result<std::collections::BTreeMap<String, f64>, CurrencyError> {
        Err(CurrencyError::fetch(
            universal_converter::currency::FetchFailure::Network,
            "HTTP client unavailable",
        ))
    }
}
