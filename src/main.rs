use std::path::PathBuf;
use std::process;

use clap::Parser;
use universal_converter::{app, config, i18n};

/// 단위/통화 변환기 터미널 버전.
#[derive(Parser, Debug)]
#[command(name = "universal_converter_cli", version, about = "Unit and currency converter")]
struct Args {
    /// Interface language (auto, en, es, de, ru, zh)
    #[arg(short = 'L', long = "lang", default_value = "auto")]
    lang: String,

    /// Settings file
    #[arg(short, long, default_value = config::CONFIG_FILE)]
    config: PathBuf,

    /// API key for this run only (not saved)
    #[arg(long = "api-key")]
    api_key: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = try_run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn try_run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::load_or_create(&args.config)?;
    let lang = i18n::resolve_language(&args.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    let mut session = app::Session::open(cfg, tr, args.api_key)?;
    app::run(&mut session)?;
    Ok(())
}
