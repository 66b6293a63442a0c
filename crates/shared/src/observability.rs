//! # トレーシング初期化
//!
//! `LOG_FORMAT`（`json` / `pretty`）と `RUST_LOG` から subscriber を組み立てる。
//! `ErrorLayer` を登録するので、`InfraError` が捕捉する `SpanTrace` に
//! リクエストからリポジトリまでのスパンが残る。

use std::str::FromStr;

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_LOG_FILTER: &str = "info,workout=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 イベント 1 行の JSON
    Json,
    #[default]
    Pretty,
}

/// `LOG_FORMAT` に解釈できない値が指定された
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown LOG_FORMAT value {0:?} (expected \"json\" or \"pretty\")")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    /// 前後の空白と大文字小文字は無視する
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else if value.eq_ignore_ascii_case("pretty") {
            Ok(Self::Pretty)
        } else {
            Err(UnknownLogFormat(s.to_string()))
        }
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// 起動時のルートスパンに付与するサービス名
    pub service_name: String,
    pub log_format:   LogFormat,
}

impl TracingConfig {
    /// 環境変数から設定を読み取る
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::from_lookup(service_name, |name| std::env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み取る
    ///
    /// 不正な `LOG_FORMAT` は subscriber 初期化前なので stderr に警告し、
    /// `Pretty` で続行する。
    pub fn from_lookup(
        service_name: impl Into<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let log_format = match lookup("LOG_FORMAT") {
            None => LogFormat::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e: UnknownLogFormat| {
                eprintln!("WARNING: {e}, falling back to pretty");
                LogFormat::Pretty
            }),
        };

        Self {
            service_name: service_name.into(),
            log_format,
        }
    }
}

/// グローバル subscriber を登録する
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();
}
