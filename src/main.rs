use std::io::{self, BufWriter};
use std::process::ExitCode;

use pi_series_bench::config::{CliOptions, USAGE};
use pi_series_bench::driver::run_benchmark;
use pi_series_bench::engine_types::BenchResult;
use pi_series_bench::output::new_report_writer;

fn main() -> ExitCode {
    env_logger::init();

    let options = match CliOptions::parse(std::env::args().skip(1)) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    if options.show_help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// 設定を確定し、標準出力に向けてベンチマークを実行する。
fn run(options: &CliOptions) -> BenchResult<()> {
    let cfg = options.resolve_config()?;
    log::debug!("Resolved config: {cfg:?}");

    let stdout = io::stdout();
    let sink = BufWriter::with_capacity(cfg.writer_buffer_size, stdout.lock());
    let mut writer = new_report_writer(cfg.output_format, sink);
    run_benchmark(&cfg, writer.as_mut())?;
    Ok(())
}
