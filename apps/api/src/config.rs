//! # アプリケーション設定
//!
//! 環境変数から API サーバーの設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `PORT` | No | `3000` | ポート番号 |
//! | `WORKOUT_DB_PATH` | No | `./data/db.json` | データファイル |
//! | `CACHE_TTL_SECS` | No | `120` | GET レスポンスキャッシュの TTL（`0` で無効） |
//!
//! ログ形式（`LOG_FORMAT`）は [`workout_shared::observability`] が読み込む。

use std::{env, path::PathBuf, time::Duration};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_PATH: &str = "./data/db.json";
const DEFAULT_CACHE_TTL_SECS: u64 = 120;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 値の形式が不正
    #[error("環境変数 {name} の値が不正です: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host:      String,
    /// ポート番号
    pub port:      u16,
    /// db.json のパス
    pub db_path:   PathBuf,
    /// GET レスポンスキャッシュの TTL（`None` は無効）
    pub cache_ttl: Option<Duration>,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の取得関数から設定を読み込む
    ///
    /// テストでプロセスの環境変数を書き換えずに済むよう分離している。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let db_path = lookup("WORKOUT_DB_PATH")
            .map_or_else(|| PathBuf::from(DEFAULT_DB_PATH), PathBuf::from);

        let cache_ttl_secs = match lookup("CACHE_TTL_SECS") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "CACHE_TTL_SECS",
                value,
            })?,
            None => DEFAULT_CACHE_TTL_SECS,
        };
        let cache_ttl = (cache_ttl_secs > 0).then(|| Duration::from_secs(cache_ttl_secs));

        Ok(Self {
            host,
            port,
            db_path,
            cache_ttl,
        })
    }

    /// `host:port` 形式のバインドアドレス
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
