use crate::config::Config;
use crate::engine_types::{Approximation, BenchResult};
use crate::output::ReportWriter;
use crate::routines::{routines_for, Routine};
use crate::timer::{duration_nanos, measure};

/// 比較の基準に使う π。binary64 に丸められるため、実際の精度は 15〜17 桁程度です。
#[allow(clippy::excessive_precision)]
pub const REFERENCE_PI: f64 = 3.14159265358979323846;

/// `routines` を順番に 1 つずつ計測し、結果が出るたびに `writer` へ渡す。
///
/// - 各ルーチンには `reference` をそのまま渡します。
/// - 計測されるのは各ルーチンの計算のみで、レポート出力は含みません。
/// - すべて書き終えたら `writer.finish()` を呼びます。
/// - 戻り値は実行したルーチンの数です。
pub fn run_routines(
    routines: &[Routine],
    reference: f64,
    writer: &mut dyn ReportWriter,
) -> BenchResult<usize> {
    log::info!(
        "Running {} routines (reference = {reference})",
        routines.len()
    );

    for routine in routines {
        let (value, elapsed) = measure(|| (routine.compute)(reference));
        let result = Approximation {
            label: routine.label,
            value,
            elapsed_ns: duration_nanos(elapsed),
        };
        log::debug!("{}: {:.3?}", routine.label, elapsed);
        writer.write_result(&result, reference)?;
    }

    writer.finish()?;
    log::info!("All routines completed");
    Ok(routines.len())
}

/// 設定に従ってルーチン一覧を決め、`REFERENCE_PI` を基準に実行する。
pub fn run_benchmark(cfg: &Config, writer: &mut dyn ReportWriter) -> BenchResult<usize> {
    let routines = routines_for(cfg);
    run_routines(&routines, REFERENCE_PI, writer)
}
