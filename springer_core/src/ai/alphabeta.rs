use crate::ai::random;
use crate::ai::types::{Ai, DecisionSink, LastDecision};
use crate::engine::state::State;
use crate::engine::types::Square;

/// 評価関数の実装。
mod eval;
/// 探索の制限・統計・コンテキスト。
pub mod limits;
/// 探索本体（反復深化＋ミニマックス）。
mod search;

pub type SearchLimits = limits::SearchLimits;

/// 反復深化の既定の上限深さ。
pub const MAX_SEARCH_DEPTH: u8 = 10;

/// 序盤（配置フェーズ）とみなす手数。この手数未満では探索せず即応する。
const OPENING_PLIES: u16 = 2;

/// 反復深化ミニマックス（αβ枝刈り付き）で手を選択するAI。
///
/// 深さ1から上限まで順に探索し、深さごとに確定した最善手を
/// `DecisionSink` へ送り込む。受け手が打ち切るまで探索を深める。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent {
    /// 探索の制限と設定。
    limits: SearchLimits,
    /// 序盤用の乱数エージェント。
    opening: random::Agent,
}

impl Agent {
    /// 探索の制限と設定を返す。
    #[inline]
    #[must_use]
    pub const fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// 既定の制限（深さ `MAX_SEARCH_DEPTH`、枝刈りあり）で初期化する。
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self::with_limits(SearchLimits::new(MAX_SEARCH_DEPTH, true), seed)
    }

    /// `limits` を指定して初期化する。
    #[inline]
    #[must_use]
    pub const fn with_limits(limits: SearchLimits, seed: u64) -> Self {
        Self {
            limits,
            opening: random::Agent::new(seed),
        }
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, state: State) -> Option<Square> {
        let mut sink = LastDecision::new();
        self.decide(state, &mut sink);
        sink.last()
    }

    #[inline]
    fn decide(&mut self, state: State, sink: &mut dyn DecisionSink) {
        search::decide(state, self.limits, &mut self.opening, sink);
    }
}
