use crate::engine::state::State;
use crate::engine::types::Square;
use std::sync::mpsc::Sender;

/// 探索が確定させた暫定最善手の受け皿。
///
/// 深化のたびに `offer` が呼ばれ、後から届いた手がそれまでの手を置き換える。
pub trait DecisionSink {
    /// 暫定最善手を1件受け取る。
    ///
    /// 受け取りを継続する場合は `true`、打ち切る場合は `false` を返す。
    fn offer(&mut self, mv: Square) -> bool;
}

/// 手を選択するAI。
pub trait Ai {
    /// 現在局面から次の手を選択する。合法手が無い場合は `None` を返す。
    fn select_move(&mut self, state: State) -> Option<Square>;

    /// 暫定最善手を `sink` へ逐次送り込む。
    ///
    /// 既定実装は `select_move` の結果を1回だけ送る。
    #[inline]
    fn decide(&mut self, state: State, sink: &mut dyn DecisionSink) {
        if let Some(mv) = self.select_move(state) {
            let _: bool = sink.offer(mv);
        }
    }
}

/// 最後に受け取った手だけを保持する `DecisionSink`。
#[derive(Copy, Clone, Debug, Default)]
pub struct LastDecision {
    /// 最後に受け取った手。
    last: Option<Square>,
}

impl LastDecision {
    /// 何も受け取っていない状態で初期化する。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// 最後に受け取った手を返す。
    #[inline]
    #[must_use]
    pub const fn last(&self) -> Option<Square> {
        self.last
    }
}

impl DecisionSink for LastDecision {
    #[inline]
    fn offer(&mut self, mv: Square) -> bool {
        self.last = Some(mv);
        true
    }
}

impl DecisionSink for Sender<Square> {
    #[inline]
    fn offer(&mut self, mv: Square) -> bool {
        self.send(mv).is_ok()
    }
}

impl DecisionSink for Vec<Square> {
    #[inline]
    fn offer(&mut self, mv: Square) -> bool {
        self.push(mv);
        true
    }
}
