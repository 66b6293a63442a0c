//! # ミドルウェア
//!
//! - [`cache`] - GET レスポンスのインメモリキャッシュ

pub mod cache;

pub use cache::{CACHE_STATUS_HEADER, ResponseCache, cache_responses};
