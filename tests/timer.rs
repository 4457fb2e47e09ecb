use std::time::Duration;

use pi_series_bench::timer::{duration_nanos, measure};

/// 計測対象の戻り値はそのまま返り、経過時間は処理時間以上になる。
#[test]
fn measure_returns_result_and_covers_the_operation() {
    let (value, elapsed) = measure(|| {
        std::thread::sleep(Duration::from_millis(2));
        7
    });
    assert_eq!(value, 7);
    assert!(
        elapsed >= Duration::from_millis(2),
        "elapsed should cover the sleep, got {elapsed:?}"
    );
}

#[test]
fn measure_runs_the_operation_exactly_once() {
    let mut calls = 0;
    let (_, _) = measure(|| calls += 1);
    assert_eq!(calls, 1);
}

#[test]
fn duration_nanos_converts_exactly() {
    assert_eq!(duration_nanos(Duration::from_nanos(123)), 123);
    assert_eq!(duration_nanos(Duration::ZERO), 0);
    assert_eq!(duration_nanos(Duration::from_secs(2)), 2_000_000_000);
}

/// u64 に収まらない長さは飽和させる。
#[test]
fn duration_nanos_saturates() {
    assert_eq!(duration_nanos(Duration::MAX), u64::MAX);
    assert_eq!(
        duration_nanos(Duration::from_nanos(u64::MAX)),
        u64::MAX
    );
}
