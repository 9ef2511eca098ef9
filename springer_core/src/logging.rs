use tracing::Level;
use tracing_subscriber::util::{SubscriberInitExt as _, TryInitError};

/// 人間向けフォーマットでグローバルなロガーを初期化する。
///
/// # Errors
///
/// すでにグローバルなロガーが設定されている場合、`TryInitError` を返す。
///
#[inline]
pub fn init(level: Level) -> Result<(), TryInitError> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .finish()
        .try_init()
}

/// JSON 行フォーマットでグローバルなロガーを初期化する。
///
/// # Errors
///
/// すでにグローバルなロガーが設定されている場合、`TryInitError` を返す。
///
#[inline]
pub fn init_json(level: Level) -> Result<(), TryInitError> {
    tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_target(false)
        .finish()
        .try_init()
}
