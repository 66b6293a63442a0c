//! # Workout API ライブラリ
//!
//! ルーター構築・ハンドラ・ユースケースを公開する。
//! `main.rs`、OpenAPI 生成ツール、統合テストから利用する。
//!
//! ## レイヤー
//!
//! ```text
//! handler → usecase → repository（workout-infra）→ db.json
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod openapi;
pub mod usecase;
