//! # ユースケース層
//!
//! ワークアウト・記録のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリと時計を `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、ロジックはユースケースに集約

pub mod record;
pub mod workout;

pub use record::RecordUseCaseImpl;
pub use workout::WorkoutUseCaseImpl;
