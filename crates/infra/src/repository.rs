//! # リポジトリ
//!
//! リポジトリトレイトと、[`JsonStore`](crate::JsonStore) を使った実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: ユースケース層は `Arc<dyn Trait>` でリポジトリを受け取る
//! - **テスタビリティ**: トレイト経由でスタブに差し替え可能

pub mod record_repository;
pub mod workout_repository;

pub use record_repository::{JsonRecordRepository, RecordRepository};
pub use workout_repository::{JsonWorkoutRepository, WorkoutFilter, WorkoutRepository};
