//! # Workout インフラ層
//!
//! db.json の読み書きと、リポジトリトレイトの具体実装を提供する。
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`store`] - db.json をメモリに展開して保持するストア
//! - [`repository`] - リポジトリトレイトと JSON ストア実装
//! - [`error`] - インフラ層エラー定義
//! - `mock` - テスト用の故障注入リポジトリ（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use workout_infra::{JsonStore, repository::JsonWorkoutRepository};
//!
//! async fn setup() -> Result<(), workout_infra::InfraError> {
//!     let store = Arc::new(JsonStore::open("./data/db.json").await?);
//!     let workouts = JsonWorkoutRepository::new(store.clone());
//!     Ok(())
//! }
//! ```

pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;
pub mod store;

pub use error::{InfraError, InfraErrorKind};
pub use store::{Database, JsonStore};
