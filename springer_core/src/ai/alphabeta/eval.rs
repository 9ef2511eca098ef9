use crate::engine::state::State;
use crate::engine::types::{Player, Square, Squares};

/// 盤中心の x 座標。
const CENTER_X: u8 = 6;

/// 盤中心の y 座標。
const CENTER_Y: u8 = 4;

/// 中央寄りのマスほど増す重みの公比。
pub(super) const GAIN: f64 = 1.4;

/// `GAIN` の2乗。
pub(super) const GAIN_SQ: f64 = GAIN * GAIN;

/// `GAIN` の3乗。
pub(super) const GAIN_CUBE: f64 = GAIN_SQ * GAIN;

/// 非終局の評価関数（探索側視点）。
///
/// 自陣リバティの `board_score` 合計から相手リバティの合計を引いた値。
pub(super) fn evaluate(state: State, searcher: Player) -> f64 {
    let own = side_score(state, state.loc(searcher));
    let opp = side_score(state, state.loc(searcher.opponent()));
    own - opp
}

/// 片側のリバティ評価値（到達可能マスの重み合計）。
fn side_score(state: State, loc: Option<Square>) -> f64 {
    Squares::new(state.liberties(loc)).map(board_score).sum()
}

/// マスの位置重み（外周 1.0 〜 中央 `GAIN` の3乗）。
///
/// 帯は外側から順に判定し、最初に一致した帯が値を決める。
/// 判定順序が値を決めるため、順序は変更しないこと。
pub(super) fn board_score(square: Square) -> f64 {
    let dfc_x = square.x().abs_diff(CENTER_X);
    let dfc_y = square.y().abs_diff(CENTER_Y);

    if dfc_x == 6 {
        1.0
    } else if dfc_y == 4 {
        1.0
    } else if dfc_x == 5 {
        1.0
    } else if dfc_y == 3 {
        GAIN
    } else if dfc_x == 4 {
        GAIN
    } else if dfc_y == 2 {
        GAIN_SQ
    } else if dfc_x == 3 {
        GAIN_SQ
    } else if dfc_x == 0 && dfc_y == 0 {
        GAIN_CUBE
    } else if dfc_y <= 1 && dfc_x <= 2 {
        GAIN_CUBE
    } else {
        1.0
    }
}
