use crate::engine::state::{ApplyMoveError, State};
use crate::engine::types::{Player, Square};

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 終局（手番側が移動不能）。
    GameOver {
        /// 勝者。
        winner: Player,
    },
    /// 進行中。
    InProgress,
}

/// 手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    GameOver,
    /// 指定マスが合法手ではない。
    IllegalMove,
}

/// 1ゲームの進行を管理する構造体。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の局面。
    state: State,
}

impl Game {
    /// 初期局面からゲームを開始する。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            state: State::initial(),
        }
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub fn is_game_over(self) -> bool {
        self.state.terminal_test()
    }

    /// 1手（移動先マス）を適用する。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す：
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::IllegalMove`: 指定されたマスが合法手でない場合
    ///
    #[inline]
    pub fn play(&mut self, mv: Square) -> Result<Status, PlayError> {
        if self.is_game_over() {
            return Err(PlayError::GameOver);
        }

        let next = match self.state.result(mv) {
            Ok(next_state) => next_state,
            Err(err) => {
                return Err(match err {
                    ApplyMoveError::IllegalMove => PlayError::IllegalMove,
                });
            }
        };

        self.state = next;

        Ok(self.status())
    }

    /// 現手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(self) -> Player {
        self.state.player()
    }

    /// 現在の局面を返す。
    #[inline]
    #[must_use]
    pub const fn state(self) -> State {
        self.state
    }

    /// 現在のゲーム状態を返す。
    ///
    /// 終局時の勝者は「動けなくなった手番側の相手」。
    #[inline]
    #[must_use]
    pub fn status(self) -> Status {
        if self.is_game_over() {
            return Status::GameOver {
                winner: self.state.player().opponent(),
            };
        }

        Status::InProgress
    }
}
