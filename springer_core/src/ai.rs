/// 反復深化アルファベータ探索AI。
pub mod alphabeta;
/// 合法手からランダムに1手選ぶAI。
pub mod random;
pub mod types;
