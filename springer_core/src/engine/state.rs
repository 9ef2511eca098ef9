use crate::engine::types::{Player, Square, Squares};

/// 全マスが空きの盤面マスク（下位117ビット）。
const BOARD_MASK: u128 = match U128_ONE.checked_shl(CELL_COUNT) {
    Some(value) => value.wrapping_sub(U128_ONE),
    None => u128::MAX,
};

/// 盤面の全マス数（13×9）。
const CELL_COUNT: u32 = 117;

/// ナイトの移動オフセット（dx, dy）。
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// `u128` の 1 を表す値。
const U128_ONE: u128 = u128::MIN.wrapping_add(1);

/// 局面（空きマス・両者のナイト位置・経過手数）。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct State {
    /// 先手ナイトの位置（未配置なら `None`）。
    loc_first: Option<Square>,
    /// 後手ナイトの位置（未配置なら `None`）。
    loc_second: Option<Square>,
    /// 空きマスのビットボード。
    open: u128,
    /// 経過手数。
    ply_count: u16,
}

/// 着手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ApplyMoveError {
    /// 指定マスが合法手ではない。
    IllegalMove,
}

impl State {
    /// 現手番の合法手（移動先マス）をインデックス昇順に列挙する。
    ///
    /// 配置フェーズ（最初の2手）では全空きマス、以降はナイト移動で
    /// 到達できる空きマスが対象になる。
    #[inline]
    #[must_use]
    pub fn actions(self) -> Squares {
        Squares::new(self.liberties(self.loc(self.player())))
    }

    /// 局面を生の値から生成する（crate 内部向け）。
    ///
    /// - `loc_first` / `loc_second` のマスは `open` に含まれないこと
    /// - 手数と配置の整合は呼び出し側が保証する
    #[cfg(test)]
    #[inline]
    #[must_use]
    pub(crate) const fn from_raw(
        open: u128,
        loc_first: Option<Square>,
        loc_second: Option<Square>,
        ply_count: u16,
    ) -> Self {
        Self {
            loc_first,
            loc_second,
            open,
            ply_count,
        }
    }

    /// 初期局面（全マス空き、両者未配置）を返す。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            loc_first: None,
            loc_second: None,
            open: BOARD_MASK,
            ply_count: u16::MIN,
        }
    }

    /// 指定位置からのリバティ（到達できる空きマス）を返す。
    ///
    /// `None`（未配置）の場合は全空きマスがリバティになる。
    #[inline]
    #[must_use]
    pub fn liberties(self, loc: Option<Square>) -> u128 {
        match loc {
            Some(square) => knight_targets(square) & self.open,
            None => self.open,
        }
    }

    /// 指定プレイヤーのナイトの位置を返す。
    #[inline]
    #[must_use]
    pub const fn loc(self, player: Player) -> Option<Square> {
        match player {
            Player::First => self.loc_first,
            Player::Second => self.loc_second,
        }
    }

    /// 空きマスのビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn open(self) -> u128 {
        self.open
    }

    /// 現手番のプレイヤーを返す。
    #[inline]
    #[must_use]
    pub const fn player(self) -> Player {
        match self.ply_count.checked_rem(2) {
            Some(1) => Player::Second,
            _ => Player::First,
        }
    }

    /// 経過手数を返す。
    #[inline]
    #[must_use]
    pub const fn ply_count(self) -> u16 {
        self.ply_count
    }

    /// 着手（移動先マス）を適用した次の局面を返す。
    ///
    /// 移動先のマスは以後ふさがったままになる。
    ///
    /// # Errors
    ///
    /// 指定されたマスが合法手でない場合、`ApplyMoveError::IllegalMove` を返す。
    ///
    #[inline]
    pub fn result(self, mv: Square) -> Result<Self, ApplyMoveError> {
        let legal = self.liberties(self.loc(self.player()));
        if legal & mv.bit() == u128::MIN {
            return Err(ApplyMoveError::IllegalMove);
        }

        let (loc_first, loc_second) = match self.player() {
            Player::First => (Some(mv), self.loc_second),
            Player::Second => (self.loc_first, Some(mv)),
        };

        Ok(Self {
            loc_first,
            loc_second,
            open: self.open & !mv.bit(),
            ply_count: self.ply_count.saturating_add(1),
        })
    }

    /// 終局かどうかを返す。
    ///
    /// 手番側が配置済みでリバティを失っていれば終局（手番側の負け）。
    #[inline]
    #[must_use]
    pub fn terminal_test(self) -> bool {
        let loc = self.loc(self.player());
        if loc.is_none() {
            return false;
        }

        self.liberties(loc) == u128::MIN
    }

    /// 指定プレイヤー視点の終局評価値を返す。
    ///
    /// 非終局では 0 を返す。終局では動けなくなった手番側が `player`
    /// 自身なら `-∞`、相手なら `+∞` を返す。
    #[inline]
    #[must_use]
    pub fn utility(self, player: Player) -> f64 {
        if !self.terminal_test() {
            return 0.0;
        }

        if self.player() == player {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    }
}

/// ナイト移動で到達できるマスの集合を返す。
fn knight_targets(origin: Square) -> u128 {
    let mut targets = u128::MIN;

    for (dx, dy) in KNIGHT_OFFSETS {
        let x = match origin.x().checked_add_signed(dx) {
            Some(value) => value,
            None => continue,
        };
        let y = match origin.y().checked_add_signed(dy) {
            Some(value) => value,
            None => continue,
        };

        if let Some(square) = Square::from_xy(x, y) {
            targets |= square.bit();
        }
    }

    targets
}
