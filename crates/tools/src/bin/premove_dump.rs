//! 候補手ダンプツール
//!
//! JSON の候補手リクエストを読み、移動元の駒（または指定した手番の全ての駒）の
//! 候補手を JSON で標準出力に書き出す。`--self-check` ではルール表が全ての
//! バリアントの駒種を解決できるか確認する。
//!
//! 使用例:
//!   premove_dump --request position.json
//!   cat position.json | premove_dump --request - --all-for white
//!   premove_dump --self-check

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use premove_core::types::json::{DestsJson, PremoveRequestJson, PremoveResponseJson};
use premove_core::{Color, dispatch, premove, premove_dests};

#[derive(Parser, Debug)]
#[command(name = "premove_dump")]
#[command(about = "候補手リクエストを読み、候補手を JSON で出力する")]
struct Cli {
    /// リクエスト JSON のパス（`-` で標準入力）
    #[arg(long, value_name = "FILE")]
    request: Option<PathBuf>,

    /// 移動元の代わりに、指定した手番の全ての駒の候補手を出力する
    #[arg(long, value_name = "COLOR")]
    all_for: Option<Color>,

    /// ルール表の網羅性を確認して終了する
    #[arg(long, default_value_t = false)]
    self_check: bool,

    /// デバッグログを有効にする
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn init_logger(debug: bool) {
    let log_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| {
        writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
    })
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();
}

fn read_request(path: &PathBuf) -> Result<PremoveRequestJson> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("標準入力の読み込みに失敗しました")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("リクエストを読み込めません: {}", path.display()))?
    };
    serde_json::from_str(&text).context("リクエスト JSON を解釈できません")
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    if cli.self_check {
        let checked = dispatch::self_check().context("ルール表の確認に失敗しました")?;
        eprintln!("self-check ok: {checked} combinations");
        return Ok(());
    }

    let Some(path) = cli.request.as_ref() else {
        bail!("--request か --self-check のどちらかを指定してください");
    };
    let request = read_request(path)?;
    let geom = request.resolved_geometry();
    log::info!(
        "{} pieces on {geom}, variant {:?}, canCastle {}",
        request.pieces.len(),
        request.variant,
        request.can_castle
    );

    if let Some(color) = cli.all_for {
        let dests = premove_dests(&request.pieces, color, request.can_castle, geom, request.variant)
            .with_context(|| format!("{color} の候補手を計算できません"))?;
        let dests = dests
            .into_iter()
            .map(|(key, dests)| PremoveResponseJson { key, dests })
            .collect();
        return print_json(&DestsJson { color, dests });
    }

    let Some(key) = request.key else {
        bail!("リクエストに key がありません（--all-for を使うか key を指定してください）");
    };
    let dests = premove(&request.pieces, key, request.can_castle, geom, request.variant)
        .with_context(|| format!("{key} の候補手を計算できません"))?;
    print_json(&PremoveResponseJson { key, dests })
}
