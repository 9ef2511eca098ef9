use crate::ai::random;
use crate::ai::types::{Ai as _, DecisionSink};
use crate::engine::state::State;
use crate::engine::types::Square;

use super::OPENING_PLIES;
use super::eval::evaluate;
use super::limits::{SearchContext, SearchLimits};

/// 手の決定エントリポイント。
///
/// 序盤（配置フェーズ）は探索せずランダムに即応し、それ以降は
/// 反復深化で深さごとの最善手を `sink` へ送り込む。
pub(super) fn decide(
    state: State,
    limits: SearchLimits,
    opening: &mut random::Agent,
    sink: &mut dyn DecisionSink,
) {
    if state.ply_count() < OPENING_PLIES {
        let mv = match opening.select_move(state) {
            Some(value) => value,
            None => return,
        };
        let _: bool = sink.offer(mv);
        return;
    }

    iterative_deepening(state, limits, sink);
}

/// 反復深化によるルート探索。
///
/// 深さ1から上限まで順に探索し、完了した深さごとに最善手を
/// `sink` へ渡す。受け手が拒否した時点で打ち切る。
fn iterative_deepening(state: State, limits: SearchLimits, sink: &mut dyn DecisionSink) {
    let mut ctx = SearchContext::new(limits, state.player());

    for depth in 1..=limits.max_depth() {
        let (mv, score) = match root_search(state, depth, &mut ctx) {
            Some(value) => value,
            None => return,
        };

        let nodes = ctx.stats().nodes();
        let cutoffs = ctx.stats().cutoffs();
        tracing::debug!(
            "completed depth {depth}: best={mv:?} score={score} nodes={nodes} cutoffs={cutoffs}"
        );

        // 受け手が打ち切ったら、それ以上は深めない。
        if !sink.offer(mv) {
            return;
        }
    }
}

/// ルート探索（指定深さの探索）。合法手がなければ `None` を返す。
pub(super) fn root_search(
    state: State,
    depth: u8,
    ctx: &mut SearchContext,
) -> Option<(Square, f64)> {
    // 全手が -∞（必敗）でも合法手を返せるよう、先頭の合法手を既定値にする。
    let fallback = match state.actions().next() {
        Some(value) => value,
        None => return None,
    };

    let mut best_move = fallback;
    let mut best_score = f64::NEG_INFINITY;
    let mut alpha = f64::NEG_INFINITY;
    let beta = f64::INFINITY;
    let next_depth = depth.saturating_sub(1);

    for mv in state.actions() {
        let next = match state.result(mv) {
            Ok(value) => value,
            Err(err) => {
                // 合法手が遷移で拒否されるのは前提条件違反。握りつぶさず記録する。
                tracing::error!("root action {mv:?} rejected by transition: {err:?}");
                continue;
            }
        };
        let value = min_value(next, next_depth, alpha, beta, ctx);
        // 同値の場合は先に列挙された手を保持する。
        if value > best_score {
            best_score = value;
            best_move = mv;
        }
        if ctx.limits().pruning() && value > alpha {
            alpha = value;
        }
    }

    Some((best_move, best_score))
}

/// 探索側の手番ノード（最大化）。評価値は常に探索側視点。
pub(super) fn max_value(
    state: State,
    depth: u8,
    mut alpha: f64,
    beta: f64,
    ctx: &mut SearchContext,
) -> f64 {
    ctx.stats_mut().inc_nodes();

    if state.terminal_test() {
        return state.utility(ctx.searcher());
    }
    if depth == u8::MIN {
        return evaluate(state, ctx.searcher());
    }

    let mut value = f64::NEG_INFINITY;
    let next_depth = depth.saturating_sub(1);

    for mv in state.actions() {
        let next = match state.result(mv) {
            Ok(child) => child,
            Err(err) => {
                tracing::error!("action {mv:?} rejected by transition: {err:?}");
                continue;
            }
        };
        let score = min_value(next, next_depth, alpha, beta, ctx);
        if score > value {
            value = score;
        }
        if ctx.limits().pruning() {
            if value > beta {
                ctx.stats_mut().inc_cutoffs();
                return value;
            }
            if value > alpha {
                alpha = value;
            }
        }
    }

    value
}

/// 相手の手番ノード（最小化）。評価値は常に探索側視点。
pub(super) fn min_value(
    state: State,
    depth: u8,
    alpha: f64,
    mut beta: f64,
    ctx: &mut SearchContext,
) -> f64 {
    ctx.stats_mut().inc_nodes();

    if state.terminal_test() {
        return state.utility(ctx.searcher());
    }
    if depth == u8::MIN {
        return evaluate(state, ctx.searcher());
    }

    let mut value = f64::INFINITY;
    let next_depth = depth.saturating_sub(1);

    for mv in state.actions() {
        let next = match state.result(mv) {
            Ok(child) => child,
            Err(err) => {
                tracing::error!("action {mv:?} rejected by transition: {err:?}");
                continue;
            }
        };
        let score = max_value(next, next_depth, alpha, beta, ctx);
        if score < value {
            value = score;
        }
        if ctx.limits().pruning() {
            if value <= alpha {
                ctx.stats_mut().inc_cutoffs();
                return value;
            }
            if value < beta {
                beta = value;
            }
        }
    }

    value
}
