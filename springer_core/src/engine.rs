/// ゲーム進行（手番、終局判定など）の実装。
pub mod game;
/// 局面（ビットボード）と合法手/リバティ処理の実装。
pub mod state;
pub mod types;

pub type State = state::State;
pub type Game = game::Game;
pub type Player = types::Player;
pub type Square = types::Square;
pub type Squares = types::Squares;
pub type GameStatus = game::Status;
pub type PlayError = game::PlayError;
