use std::error::Error;

use serde::Serialize;

// 計算ルーチン・レポーター・ドライバで共有する結果型とレコードの定義。
//
// - 近似計算そのものは失敗しない（固定の入力に対する全域関数）ため、
//   エラーが起こり得るのは設定ファイルの読み込みと標準出力への書き込みだけです。

/// クレート共通の結果型。
///
/// - 設定読み込み・レポート出力など I/O を伴う処理はこの型を返します。
/// - エラーは `Send + Sync` な Box でラップし、`?` でそのまま `main` まで伝播させます。
pub type BenchResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// ルーチン 1 回分の計算結果。
///
/// ドライバが `timer::measure` の結果から組み立て、直後にレポーターへ渡します。
/// 保持はしません（JSON 出力だけは `finish` までまとめて持ちます）。
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Approximation {
    /// 出力の見出しに使うルーチン名（例: `"Wallis Product"`）。
    pub label: &'static str,
    /// 計算された π の近似値。
    pub value: f64,
    /// 計算に要した時間（ナノ秒）。
    pub elapsed_ns: u64,
}

impl Approximation {
    /// 参照値との符号付き差分（`value - reference`）。
    pub fn deviation(&self, reference: f64) -> f64 {
        self.value - reference
    }
}
