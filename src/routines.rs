//! 実行するルーチンの一覧と順序。

use crate::config::Config;
use crate::series_math;

/// 名前付きの近似ルーチン。
#[derive(Clone, Copy, Debug)]
pub struct Routine {
    pub label: &'static str,
    /// 基準となる π を受け取り、近似値を返す。
    pub compute: fn(f64) -> f64,
}

/// 既定で実行する 8 ルーチン。出力はこの順序で並ぶ。
pub const CLASSIC_ROUTINES: [Routine; 8] = [
    Routine {
        label: "Madhava-Leibniz Sum",
        compute: series_math::madhava_leibniz,
    },
    Routine {
        label: "Nilakantha Series",
        compute: series_math::nilakantha,
    },
    Routine {
        label: "Wallis Product",
        compute: series_math::wallis_product,
    },
    Routine {
        label: "Wallis Product Squares",
        compute: series_math::wallis_product_squares,
    },
    Routine {
        label: "Brouncker Formula",
        compute: series_math::brouncker,
    },
    Routine {
        label: "BBP Algorithm",
        compute: series_math::bbp,
    },
    Routine {
        label: "Gauss-Legendre Iterative",
        compute: series_math::gauss_legendre,
    },
    Routine {
        label: "Chudnovsky (1-term)",
        compute: series_math::chudnovsky_single_term,
    },
];

/// `include_extended` のときだけ古典ルーチンの後に続けて実行する。
pub const EXTENDED_ROUTINES: [Routine; 4] = [
    Routine {
        label: "Viete's Formula",
        compute: series_math::viete,
    },
    Routine {
        label: "BBP Algorithm (20-term)",
        compute: series_math::bbp_extended,
    },
    Routine {
        label: "Ramanujan Series (2-term)",
        compute: series_math::ramanujan,
    },
    Routine {
        label: "Chudnovsky (2-term)",
        compute: series_math::chudnovsky,
    },
];

pub fn routines_for(cfg: &Config) -> Vec<Routine> {
    let mut routines = CLASSIC_ROUTINES.to_vec();
    if cfg.include_extended {
        routines.extend_from_slice(&EXTENDED_ROUTINES);
    }
    routines
}
