//! # Workout ドメイン層
//!
//! ワークアウトと記録（Record）のドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（JSON ファイル、HTTP）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`workout`] - ワークアウトエンティティと変更セット
//! - [`record`] - ワークアウトに紐づく記録
//! - [`timestamp`] - ロケール文字列で永続化されるタイムスタンプ
//! - [`clock`] - 現在時刻の抽象化
//! - [`error`] - ドメイン層エラー
//!
//! ## 使用例
//!
//! ```rust
//! use workout_domain::{DomainError, workout::WorkoutId};
//!
//! let id = WorkoutId::new();
//! let error = DomainError::NotFound {
//!     entity_type: "workout",
//!     id:          id.to_string(),
//! };
//! assert!(error.to_string().starts_with("Can't find workout"));
//! ```

#[macro_use]
mod macros;

pub mod clock;
pub mod error;
pub mod record;
pub mod timestamp;
pub mod workout;

pub use error::DomainError;
