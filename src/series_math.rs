//! π を近似する古典的な級数・反復公式。
//!
//! - すべて倍精度（binary64）の純粋関数で、打ち切り位置は下の定数で固定しています。
//! - 固定値版は基準となる π を引数に取りますが、計算には使いません。
//! - `*_terms` / `*_iterations` などの引数付き版は打ち切り位置を明示的に受け取ります。
//!   通常の実行では固定値版のみを使い、引数付き版は収束の確認用です。

/// Madhava-Leibniz 級数の項数（i = 0..=10000）。
pub const MADHAVA_TERMS: u32 = 10_001;
/// Nilakantha 級数で使う最後の i（i = 2, 4, ..., 1476）。
pub const NILAKANTHA_LIMIT: u32 = 1_476;
/// Wallis 積の因子数（i = 1..=10000）。
pub const WALLIS_TERMS: u32 = 10_000;
/// Wallis 積（平方版）の最後の i（i = 2, 4, ..., 20000）。
pub const WALLIS_SQUARES_LIMIT: u32 = 20_000;
/// Brouncker 連分数を評価し始める深さ（奇数）。
pub const BROUNCKER_DEPTH: u32 = 20_001;
/// BBP 公式の項数（k = 0..=9）。
pub const BBP_TERMS: u32 = 10;
/// Gauss-Legendre（AGM）の反復回数。
pub const GAUSS_LEGENDRE_ITERATIONS: u32 = 4;

/// Viète の無限積の反復回数。
pub const VIETE_ITERATIONS: u32 = 25;
/// 拡張セットで使う BBP 公式の項数。
pub const BBP_EXTENDED_TERMS: u32 = 20;
/// Ramanujan 級数の項数。
pub const RAMANUJAN_TERMS: u32 = 2;
/// 拡張セットで使う Chudnovsky 級数の項数。
pub const CHUDNOVSKY_EXTENDED_TERMS: u32 = 2;

const CHUDNOVSKY_C: f64 = 640_320.0;
const CHUDNOVSKY_A: f64 = 13_591_409.0;
const CHUDNOVSKY_B: f64 = 545_140_134.0;

/// π = 4·Σ 2/((4i+1)(4i+3))
pub fn madhava_leibniz(_reference: f64) -> f64 {
    madhava_leibniz_terms(MADHAVA_TERMS)
}

/// 先頭 `terms` 項で打ち切った Madhava-Leibniz 級数。
///
/// 隣り合う 2 項（+1/(4i+1) と -1/(4i+3)）をまとめた形なので、各項は正です。
pub fn madhava_leibniz_terms(terms: u32) -> f64 {
    let sum: f64 = (0..terms)
        .map(|i| {
            let x = f64::from(i);
            2.0 / ((4.0 * x + 1.0) * (4.0 * x + 3.0))
        })
        .sum();
    4.0 * sum
}

/// π = 3 + 4/(2·3·4) - 4/(4·5·6) + ...
pub fn nilakantha(_reference: f64) -> f64 {
    nilakantha_up_to(NILAKANTHA_LIMIT)
}

/// i = 2, 4, ..., `limit` まで足し込んだ Nilakantha 級数。符号は + から交互。
pub fn nilakantha_up_to(limit: u32) -> f64 {
    (2..=limit)
        .step_by(2)
        .enumerate()
        .fold(3.0, |acc, (k, i)| {
            let x = f64::from(i);
            let term = 4.0 / (x * (x + 1.0) * (x + 2.0));
            if k % 2 == 0 {
                acc + term
            } else {
                acc - term
            }
        })
}

/// π = 2·Π 4i²/(4i²-1)
pub fn wallis_product(_reference: f64) -> f64 {
    wallis_product_terms(WALLIS_TERMS)
}

/// 先頭 `terms` 個の因子で打ち切った Wallis 積。
pub fn wallis_product_terms(terms: u32) -> f64 {
    let product = (1..=terms).fold(1.0, |acc, i| {
        let x = f64::from(i);
        let sq = 4.0 * x * x;
        acc * (sq / (sq - 1.0))
    });
    2.0 * product
}

/// 2 本の Wallis 型の積を並行して計算し、`2·P1 + P2` で組み合わせる。
///
/// - P1 = Π ((i+1)² - 1)/(i+1)²
/// - P2 = Π i²/(i² - 1)
///
/// 文献上の名前の付いた恒等式ではありませんが、この組み合わせの算術をそのまま再現します。
pub fn wallis_product_squares(_reference: f64) -> f64 {
    wallis_product_squares_up_to(WALLIS_SQUARES_LIMIT)
}

/// i = 2, 4, ..., `limit` までの 2 本の積を組み合わせる。
pub fn wallis_product_squares_up_to(limit: u32) -> f64 {
    let (odd, even) = (2..=limit)
        .step_by(2)
        .fold((1.0, 1.0), |(odd, even), i| {
            let x = f64::from(i);
            let next_sq = (x + 1.0) * (x + 1.0);
            let sq = x * x;
            (odd * ((next_sq - 1.0) / next_sq), even * (sq / (sq - 1.0)))
        });
    2.0 * odd + even
}

/// Brouncker の連分数 4/π = 1 + 1²/(2 + 3²/(2 + 5²/(2 + ...)))
pub fn brouncker(_reference: f64) -> f64 {
    brouncker_from(BROUNCKER_DEPTH)
}

/// 最も内側を 1.0 とし、`depth`, `depth - 2`, ..., 1 の順に内側から畳み込む。
///
/// `depth` は奇数であること。
pub fn brouncker_from(depth: u32) -> f64 {
    debug_assert!(depth % 2 == 1, "Brouncker depth must be odd (got {depth})");
    let acc = (1..=depth).rev().step_by(2).fold(1.0, |acc, i| {
        let x = f64::from(i);
        (x * x) / (2.0 + acc)
    });
    4.0 * (1.0 / (1.0 + acc))
}

/// Bailey–Borwein–Plouffe 公式（16 進基数）。
pub fn bbp(_reference: f64) -> f64 {
    bbp_terms(BBP_TERMS)
}

/// k = 0..`terms` で打ち切った BBP 公式。
pub fn bbp_terms(terms: u32) -> f64 {
    let mut sum = 0.0;
    // (1/16)^k。2 の冪なので逐次除算でも丸め誤差は出ない
    let mut scale = 1.0;
    for k in 0..terms {
        let x = 8.0 * f64::from(k);
        let term = 4.0 / (x + 1.0) - 2.0 / (x + 4.0) - 1.0 / (x + 5.0) - 1.0 / (x + 6.0);
        sum += term * scale;
        scale /= 16.0;
    }
    sum
}

/// Gauss-Legendre（算術幾何平均）反復。正しい桁数は反復ごとにおよそ倍になる。
pub fn gauss_legendre(_reference: f64) -> f64 {
    gauss_legendre_iterations(GAUSS_LEGENDRE_ITERATIONS)
}

/// AGM 反復を `iterations` 回だけ行った Gauss-Legendre。
pub fn gauss_legendre_iterations(iterations: u32) -> f64 {
    let mut a: f64 = 1.0;
    let mut b: f64 = 1.0 / 2.0_f64.sqrt();
    let mut t = 0.25;
    let mut p = 1.0;
    for _ in 0..iterations {
        let a_next = (a + b) / 2.0;
        b = (a * b).sqrt();
        t -= p * (a - a_next).powi(2);
        a = a_next;
        p *= 2.0;
    }
    (a + b).powi(2) / (4.0 * t)
}

/// Chudnovsky 級数の k = 0 の項だけを使った閉形式 π ≈ 640320^1.5 / (12·13591409)。
pub fn chudnovsky_single_term(_reference: f64) -> f64 {
    CHUDNOVSKY_C.powf(1.5) / (12.0 * CHUDNOVSKY_A)
}

/// Viète の公式 2/π = √2/2 · √(2+√2)/2 · ...
pub fn viete(_reference: f64) -> f64 {
    viete_iterations(VIETE_ITERATIONS)
}

/// 入れ子の平方根を `iterations` 段まで掛け合わせた Viète の積。
pub fn viete_iterations(iterations: u32) -> f64 {
    let mut product = 1.0;
    let mut nested = 0.0_f64;
    for _ in 0..iterations {
        nested = (2.0 + nested).sqrt();
        product *= nested / 2.0;
    }
    2.0 / product
}

/// BBP 公式を `BBP_EXTENDED_TERMS` 項まで延ばしたもの。
pub fn bbp_extended(_reference: f64) -> f64 {
    bbp_terms(BBP_EXTENDED_TERMS)
}

/// Ramanujan 級数 1/π = (√8/9801)·Σ (4k)!(1103+26390k)/((k!)⁴·396^(4k))
pub fn ramanujan(_reference: f64) -> f64 {
    ramanujan_terms(RAMANUJAN_TERMS)
}

/// 先頭 `terms` 項で打ち切った Ramanujan 級数。
pub fn ramanujan_terms(terms: u32) -> f64 {
    let sum: f64 = (0..terms)
        .map(|k| {
            let kf = f64::from(k);
            let num = factorial(4 * k) * (1103.0 + 26390.0 * kf);
            let den = factorial(k).powi(4) * 396.0_f64.powf(4.0 * kf);
            num / den
        })
        .sum();
    1.0 / ((8.0_f64.sqrt() / 9801.0) * sum)
}

/// Chudnovsky 級数を `CHUDNOVSKY_EXTENDED_TERMS` 項まで足したもの。
pub fn chudnovsky(_reference: f64) -> f64 {
    chudnovsky_terms(CHUDNOVSKY_EXTENDED_TERMS)
}

/// 1/π = 12·Σ (-1)^k (6k)!(A + Bk) / ((3k)!(k!)³ · C^(3k+3/2))
///
/// 階乗は f64 で計算するため、実用になるのは数項までです。
pub fn chudnovsky_terms(terms: u32) -> f64 {
    let sum: f64 = (0..terms)
        .map(|k| {
            let kf = f64::from(k);
            let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
            let num = sign * factorial(6 * k) * (CHUDNOVSKY_A + CHUDNOVSKY_B * kf);
            let den =
                factorial(3 * k) * factorial(k).powi(3) * CHUDNOVSKY_C.powf(3.0 * kf + 1.5);
            num / den
        })
        .sum();
    1.0 / (12.0 * sum)
}

fn factorial(n: u32) -> f64 {
    (2..=n).fold(1.0, |acc, i| acc * f64::from(i))
}
