use std::io::{self, Write};

use chrono::Local;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::engine_types::Approximation;

/// 差分を `d.ddddde±XX` 形式の指数表記にする。
///
/// - 仮数部は整数部 1 桁・小数部 5 桁（負の場合は先頭に `-`）。
/// - 指数部は常に符号付き・2 桁以上（例: `e-05`, `e+00`, `e-123`）。
/// - 非有限値（NaN / inf）はそのまま `Display` の表記を返し、失敗はしません。
pub fn format_deviation(deviation: f64) -> String {
    if !deviation.is_finite() {
        return deviation.to_string();
    }

    // Rust の `{:e}` は指数を `e-5` / `e0` のように出すので、ここで整形し直す
    let raw = format!("{deviation:.5e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}

/// ルーチンの結果を受け取って出力する側のインターフェース。
///
/// ドライバは結果が出るたびに `write_result` を呼び、最後に 1 回だけ `finish` を呼びます。
pub trait ReportWriter {
    fn write_result(&mut self, result: &Approximation, reference: f64) -> io::Result<()>;
    fn finish(&mut self) -> io::Result<()>;
}

/// 人間向けのテキストブロックを書き出す Writer（既定の出力形式）。
///
/// ```text
/// Madhava-Leibniz Sum
/// Pi:        3.1415426585893202
/// Deviation: -4.99950e-05
/// Time:      12345 ns
///
/// ```
pub struct TextReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportWriter for TextReportWriter<W> {
    fn write_result(&mut self, result: &Approximation, reference: f64) -> io::Result<()> {
        writeln!(self.writer, "{}", result.label)?;
        writeln!(self.writer, "Pi:        {}", result.value)?;
        writeln!(
            self.writer,
            "Deviation: {}",
            format_deviation(result.deviation(reference))
        )?;
        writeln!(self.writer, "Time:      {} ns", result.elapsed_ns)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

pub const CSV_HEADER: &str = "label,value,deviation,elapsed_ns";

/// 1 ルーチン 1 行の CSV。ヘッダーは最初の結果の直前に書く。
pub struct CsvReportWriter<W: Write> {
    writer: W,
    header_written: bool,
}

impl<W: Write> CsvReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header_written: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportWriter for CsvReportWriter<W> {
    fn write_result(&mut self, result: &Approximation, reference: f64) -> io::Result<()> {
        if !self.header_written {
            writeln!(self.writer, "{CSV_HEADER}")?;
            self.header_written = true;
        }
        writeln!(
            self.writer,
            "{},{},{},{}",
            result.label,
            result.value,
            format_deviation(result.deviation(reference)),
            result.elapsed_ns
        )
    }

    fn finish(&mut self) -> io::Result<()> {
        if !self.header_written {
            writeln!(self.writer, "{CSV_HEADER}")?;
            self.header_written = true;
        }
        self.writer.flush()
    }
}

#[derive(Serialize, Debug, Clone)]
struct JsonEntry {
    label: &'static str,
    value: f64,
    deviation: String,
    elapsed_ns: u64,
}

/// 実行全体のレポート（JSON 出力の最上位オブジェクト）。
#[derive(Serialize, Debug, Clone)]
struct RunReport<'a> {
    generated_at: String,
    tool_version: &'static str,
    reference: f64,
    results: &'a [JsonEntry],
}

/// 結果をためておき、`finish` で 1 つの JSON ドキュメントとして書き出す Writer。
pub struct JsonReportWriter<W: Write> {
    writer: W,
    reference: Option<f64>,
    entries: Vec<JsonEntry>,
}

impl<W: Write> JsonReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reference: None,
            entries: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportWriter for JsonReportWriter<W> {
    fn write_result(&mut self, result: &Approximation, reference: f64) -> io::Result<()> {
        self.reference = Some(reference);
        self.entries.push(JsonEntry {
            label: result.label,
            value: result.value,
            deviation: format_deviation(result.deviation(reference)),
            elapsed_ns: result.elapsed_ns,
        });
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        let report = RunReport {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            tool_version: env!("CARGO_PKG_VERSION"),
            reference: self.reference.unwrap_or(crate::driver::REFERENCE_PI),
            results: &self.entries,
        };
        serde_json::to_writer_pretty(&mut self.writer, &report)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

/// 出力形式に応じた Writer を作る。
pub fn new_report_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn ReportWriter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextReportWriter::new(writer)),
        OutputFormat::CSV => Box::new(CsvReportWriter::new(writer)),
        OutputFormat::JSON => Box::new(JsonReportWriter::new(writer)),
    }
}
