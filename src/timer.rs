use std::hint::black_box;
use std::time::{Duration, Instant};

/// `op` を 1 回実行し、その戻り値と経過時間を返す。
///
/// - 単調増加クロック（`Instant`）で直前・直後を読むだけなので、
///   計測対象は `op` の計算部分のみです（レポート出力は含みません）。
/// - 戻り値は `black_box` を通し、最適化で計算自体が消されないようにしています。
pub fn measure<T>(op: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = black_box(op());
    (out, start.elapsed())
}

/// `Duration` をナノ秒の整数に変換する。u64 に収まらない場合は飽和させる。
pub fn duration_nanos(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
}
