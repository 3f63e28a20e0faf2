//! 評価係数
//!
//! 手数帯ごとの重みは経験的に調整された値で、設定ファイルから差し替えられる。
//! デフォルト値は固定定数だった頃の値と一致させている。

use serde::{Deserialize, Serialize};

use super::FINAL_SCORE_SHIFT;

/// 1つの手数帯 `[start, end)` の重み
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseWeights {
    /// 開始手数（inclusive）
    pub start: i32,
    /// 終了手数（exclusive）
    pub end: i32,
    /// 行動力の差に掛ける重み（加点）
    pub mobility: i32,
    /// 直前の着手で反転した石数に掛ける重み（減点）
    pub capture: i32,
}

impl PhaseWeights {
    /// 手数がこの帯に含まれるか
    #[inline]
    pub const fn contains(&self, round: i32) -> bool {
        self.start <= round && round < self.end
    }
}

/// 評価係数の集合
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalParams {
    /// 隅隣接マスの石数差（加点）
    pub adjacent_corner_weight: i32,
    /// 内側マスの石数差（減点）
    pub interior_weight: i32,
    /// 自分の隅の石数（減点）
    pub own_corner_penalty: i32,
    /// 相手の隅の石数（加点）
    pub opponent_corner_bonus: i32,
    /// 手数帯ごとの行動力・反転数の重み（昇順・重なりなし）
    ///
    /// どの帯にも含まれない手数では行動力・反転数を評価しない。
    pub phases: Vec<PhaseWeights>,
}

impl Default for EvalParams {
    fn default() -> Self {
        EvalParams {
            adjacent_corner_weight: 1 << 7,
            interior_weight: 1 << 3,
            own_corner_penalty: 1 << 13,
            opponent_corner_bonus: 1 << 12,
            phases: vec![
                PhaseWeights { start: 5, end: 15, mobility: 1 << 3, capture: 1 << 3 },
                PhaseWeights { start: 15, end: 35, mobility: 1 << 4, capture: 1 << 3 },
                PhaseWeights { start: 35, end: 40, mobility: 1 << 3, capture: 1 << 3 },
                PhaseWeights { start: 40, end: 50, mobility: 0, capture: 1 << 4 },
            ],
        }
    }
}

/// 評価係数の検証エラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalParamsError {
    /// 重みが負
    #[error("weight `{name}` must be non-negative, got {value}")]
    NegativeWeight { name: &'static str, value: i32 },

    /// 手数帯が空または範囲外
    #[error("phase #{index}: invalid round range [{start}, {end})")]
    InvalidRange { index: usize, start: i32, end: i32 },

    /// 手数帯が昇順でないか重なっている
    #[error("phase #{index} starts at {start} before the previous phase ends at {previous_end}")]
    Overlap {
        index: usize,
        start: i32,
        previous_end: i32,
    },

    /// 評価値の最大幅が1石差の終局評価に達する
    #[error("heuristic score may reach {bound}, not below the one-stone terminal score {limit}")]
    HeuristicBound { bound: i64, limit: i64 },
}

impl EvalParams {
    /// 手数 `round` に対応する手数帯
    #[inline]
    pub fn phase(&self, round: i32) -> Option<&PhaseWeights> {
        self.phases.iter().find(|phase| phase.contains(round))
    }

    /// 静的評価の絶対値の上限
    ///
    /// 隅隣接8マス、内側52マス、隅4マス、行動力差・反転数は最大64として見積もる。
    pub fn heuristic_bound(&self) -> i64 {
        let max_mobility = self.phases.iter().map(|p| p.mobility).max().unwrap_or(0);
        let max_capture = self.phases.iter().map(|p| p.capture).max().unwrap_or(0);
        8 * i64::from(self.adjacent_corner_weight)
            + 52 * i64::from(self.interior_weight)
            + 4 * i64::from(self.own_corner_penalty.max(self.opponent_corner_bonus))
            + 64 * i64::from(max_mobility)
            + 64 * i64::from(max_capture)
    }

    /// 値の整合性を検証
    ///
    /// 静的評価が1石差の終局評価以上になり得る係数は受け付けない。
    pub fn validate(&self) -> Result<(), EvalParamsError> {
        let weights = [
            ("adjacent_corner_weight", self.adjacent_corner_weight),
            ("interior_weight", self.interior_weight),
            ("own_corner_penalty", self.own_corner_penalty),
            ("opponent_corner_bonus", self.opponent_corner_bonus),
        ];
        for (name, value) in weights {
            if value < 0 {
                return Err(EvalParamsError::NegativeWeight { name, value });
            }
        }

        let mut previous_end = i32::MIN;
        for (index, phase) in self.phases.iter().enumerate() {
            if phase.start < 0 || phase.start >= phase.end || phase.end > 60 {
                return Err(EvalParamsError::InvalidRange {
                    index,
                    start: phase.start,
                    end: phase.end,
                });
            }
            if phase.start < previous_end {
                return Err(EvalParamsError::Overlap {
                    index,
                    start: phase.start,
                    previous_end,
                });
            }
            if phase.mobility < 0 {
                return Err(EvalParamsError::NegativeWeight {
                    name: "phases.mobility",
                    value: phase.mobility,
                });
            }
            if phase.capture < 0 {
                return Err(EvalParamsError::NegativeWeight {
                    name: "phases.capture",
                    value: phase.capture,
                });
            }
            previous_end = phase.end;
        }

        let bound = self.heuristic_bound();
        let limit = 1i64 << FINAL_SCORE_SHIFT;
        if bound >= limit {
            return Err(EvalParamsError::HeuristicBound { bound, limit });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_values() {
        let params = EvalParams::default();
        assert_eq!(params.adjacent_corner_weight, 128);
        assert_eq!(params.interior_weight, 8);
        assert_eq!(params.own_corner_penalty, 8192);
        assert_eq!(params.opponent_corner_bonus, 4096);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_phase_lookup() {
        let params = EvalParams::default();
        assert_eq!(params.phase(4), None);
        assert_eq!(params.phase(5).map(|p| p.mobility), Some(8));
        assert_eq!(params.phase(15).map(|p| p.mobility), Some(16));
        assert_eq!(params.phase(34).map(|p| p.mobility), Some(16));
        assert_eq!(params.phase(35).map(|p| p.mobility), Some(8));
        assert_eq!(params.phase(40).map(|p| (p.mobility, p.capture)), Some((0, 16)));
        assert_eq!(params.phase(49).map(|p| p.capture), Some(16));
        assert_eq!(params.phase(50), None);
    }

    #[test]
    fn test_validate_rejects_overlap() {
        let mut params = EvalParams::default();
        params.phases[1].start = 10;
        assert_eq!(
            params.validate(),
            Err(EvalParamsError::Overlap {
                index: 1,
                start: 10,
                previous_end: 15
            })
        );
    }

    #[test]
    fn test_validate_rejects_bad_range_and_weight() {
        let mut params = EvalParams::default();
        params.phases[0].end = params.phases[0].start;
        assert!(matches!(
            params.validate(),
            Err(EvalParamsError::InvalidRange { index: 0, .. })
        ));

        let params = EvalParams {
            interior_weight: -1,
            ..EvalParams::default()
        };
        assert_eq!(
            params.validate(),
            Err(EvalParamsError::NegativeWeight {
                name: "interior_weight",
                value: -1
            })
        );
    }

    #[test]
    fn test_validate_rejects_weights_beyond_terminal_score() {
        // 隅4つで i32 を溢れる係数
        let params = EvalParams {
            own_corner_penalty: 600_000_000,
            ..EvalParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(EvalParamsError::HeuristicBound { limit: 1_048_576, .. })
        ));

        // 溢れはしないが隅2つで1石差の終局評価を超える係数
        let params = EvalParams {
            opponent_corner_bonus: 2_000_000,
            ..EvalParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(EvalParamsError::HeuristicBound { .. })
        ));

        let mut params = EvalParams::default();
        params.phases[0].mobility = 1 << 14;
        assert!(matches!(
            params.validate(),
            Err(EvalParamsError::HeuristicBound { .. })
        ));
    }

    #[test]
    fn test_heuristic_bound() {
        let params = EvalParams::default();
        assert_eq!(params.heuristic_bound(), 8 * 128 + 52 * 8 + 4 * 8192 + 64 * 16 + 64 * 16);

        // 上限ちょうど手前は受け付ける
        let params = EvalParams {
            adjacent_corner_weight: 0,
            interior_weight: 0,
            own_corner_penalty: ((1 << 20) - 1) / 4,
            opponent_corner_bonus: 0,
            phases: Vec::new(),
        };
        assert_eq!(params.heuristic_bound(), (1 << 20) - 4);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_params_json_partial_override() {
        // 指定しなかった項目はデフォルト値になる
        let json = r#"{ "interior_weight": 4 }"#;
        let params: EvalParams = serde_json::from_str(json).expect("valid json");
        assert_eq!(params.interior_weight, 4);
        assert_eq!(params.adjacent_corner_weight, 128);
        assert_eq!(params.phases, EvalParams::default().phases);

        let text = serde_json::to_string(&EvalParams::default()).expect("serializable");
        let back: EvalParams = serde_json::from_str(&text).expect("roundtrip");
        assert_eq!(back, EvalParams::default());
    }
}
