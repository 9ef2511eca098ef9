//! Knight's Isolation core logic.
//!
//! このクレートはゲーム進行を管理する `engine` と、手を選択する `ai` を提供します。
//! CLI（`springer_cli`）から利用されることを想定しています。

#![forbid(unsafe_code)]

/// ゲームルール・局面・進行を提供するモジュール。
pub mod engine;

/// AI（手選択アルゴリズム）を提供するモジュール。
pub mod ai;

/// `tracing` 購読者の初期化を提供するモジュール。
pub mod logging;
