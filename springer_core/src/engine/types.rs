/// 手番（先手/後手）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Player {
    /// 先手。
    First,
    /// 後手。
    Second,
}

impl Player {
    /// 相手側のプレイヤーを返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// 盤面上のマス（0..=116のインデックス）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Square(
    /// `y * 13 + x` に対応する0..=116の値。
    u8,
);

impl Square {
    /// 盤の横幅（列数）。
    pub const BOARD_W: u8 = 13;

    /// 盤の縦幅（行数）。
    pub const BOARD_H: u8 = 9;

    /// そのマスを表すビット（`u128`）を返す。
    #[inline]
    #[must_use]
    pub fn bit(self) -> u128 {
        let one = u128::MIN.wrapping_add(1);
        let shift = u32::from(self.0);

        one.checked_shl(shift).unwrap_or(u128::MIN)
    }

    /// インデックスから `Square` を生成する（範囲チェックなし）。
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Self {
        Self(index)
    }

    /// 盤面座標（x, y）から `Square` を生成する。
    #[inline]
    #[must_use]
    pub const fn from_xy(x: u8, y: u8) -> Option<Self> {
        if x >= Self::BOARD_W || y >= Self::BOARD_H {
            return None;
        }

        let mut idx = match y.checked_mul(Self::BOARD_W) {
            Some(value) => value,
            None => return None,
        };

        idx = match idx.checked_add(x) {
            Some(value) => value,
            None => return None,
        };

        Some(Self(idx))
    }

    /// 0..=116 のインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// x 座標（0..=12）を返す。
    #[inline]
    #[must_use]
    pub const fn x(self) -> u8 {
        match self.0.checked_rem(Self::BOARD_W) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// y 座標（0..=8）を返す。
    #[inline]
    #[must_use]
    pub const fn y(self) -> u8 {
        match self.0.checked_div(Self::BOARD_W) {
            Some(value) => value,
            None => u8::MIN,
        }
    }
}

/// ビットボード上のマスをインデックス昇順に列挙するイテレータ。
#[derive(Copy, Clone, Debug)]
pub struct Squares(
    /// 未走査のマス集合（ビットボード）。
    u128,
);

impl Squares {
    /// ビットボードから列挙イテレータを生成する。
    #[inline]
    #[must_use]
    pub const fn new(bits: u128) -> Self {
        Self(bits)
    }
}

impl Iterator for Squares {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == u128::MIN {
            return None;
        }

        let index_u32 = self.0.trailing_zeros();
        self.0 &= self.0.wrapping_sub(1);

        match u8::try_from(index_u32) {
            Ok(index) => Some(Square::from_index_unchecked(index)),
            Err(_err) => None,
        }
    }
}
