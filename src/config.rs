use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine_types::BenchResult;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// ルーチンごとの 5 行ブロック（既定）
    Text,
    CSV,
    /// 実行全体を 1 つの JSON ドキュメントとして最後に出力
    JSON,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::CSV),
            "json" => Ok(OutputFormat::JSON),
            other => Err(format!("unknown output format: {other} (expected text, csv or json)")),
        }
    }
}

/// 実行時設定。
///
/// 反復回数（打ち切り位置）は意図的にここには含めません。`series_math` の定数で固定です。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
    /// true の場合、古典 8 ルーチンの後に拡張ルーチン（Viète など）も実行する。
    #[serde(default)]
    pub include_extended: bool,
    #[serde(default = "default_writer_buffer_size")]
    pub writer_buffer_size: usize,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_writer_buffer_size() -> usize {
    64 * 1024
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            include_extended: false,
            writer_buffer_size: default_writer_buffer_size(),
        }
    }
}

/// 設定を読み込む。
///
/// - `path` が `None` なら既定値を返します（ファイルは一切作りません）。
/// - `path` が指定されていて存在しない場合はエラーです。
pub fn load_config(path: Option<&Path>) -> BenchResult<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    log::info!("Loading config from {}", path.display());
    let mut file = File::open(path)
        .map_err(|e| format!("cannot open config file {}: {e}", path.display()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    let cfg = toml::from_str(&contents)?;
    Ok(cfg)
}

pub const USAGE: &str = "Usage: pi-series-bench [--config <path>] [--format <text|csv|json>] [--extended]";

/// コマンドライン引数の解析結果。
///
/// 優先順位は「既定値 < 設定ファイル < コマンドライン」です。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub config_path: Option<PathBuf>,
    pub output_format: Option<OutputFormat>,
    pub include_extended: bool,
    pub show_help: bool,
}

impl CliOptions {
    /// プログラム名を除いた引数列を解析する。
    ///
    /// - 対応例:
    ///   - `pi-series-bench --format json --extended`
    ///   - `pi-series-bench --config bench.toml`
    /// - 未知の引数や値の欠落はエラーメッセージを返します（呼び出し側で usage を表示）。
    pub fn parse<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut opts = CliOptions::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--config" => {
                    let Some(path) = args.next() else {
                        return Err("--config requires a path".to_string());
                    };
                    opts.config_path = Some(PathBuf::from(path.as_ref()));
                }
                "--format" => {
                    let Some(fmt) = args.next() else {
                        return Err("--format requires a value".to_string());
                    };
                    opts.output_format = Some(fmt.as_ref().parse()?);
                }
                "--extended" => opts.include_extended = true,
                "--help" | "-h" => opts.show_help = true,
                other => return Err(format!("unknown argument: {other}")),
            }
        }

        Ok(opts)
    }

    /// 設定ファイル（指定があれば）を読み込み、コマンドラインの指定で上書きする。
    pub fn resolve_config(&self) -> BenchResult<Config> {
        let mut cfg = load_config(self.config_path.as_deref())?;
        if let Some(fmt) = self.output_format {
            cfg.output_format = fmt;
        }
        if self.include_extended {
            cfg.include_extended = true;
        }
        Ok(cfg)
    }
}
