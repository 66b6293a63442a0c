//! # Workout API サーバー
//!
//! ワークアウトと記録を提供する REST API。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `WORKOUT_DB_PATH` | No | データファイル（デフォルト: `./data/db.json`） |
//! | `CACHE_TTL_SECS` | No | GET キャッシュの TTL 秒（デフォルト: `120`、`0` で無効） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,workout=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p workout-api
//!
//! PORT=8080 WORKOUT_DB_PATH=/var/lib/workout/db.json cargo run -p workout-api --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use tokio::net::TcpListener;
use workout_api::{app::build_app, config::ApiConfig};
use workout_domain::clock::SystemClock;
use workout_infra::JsonStore;
use workout_shared::observability::{TracingConfig, init_tracing};

/// API サーバーのエントリーポイント
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. db.json の読み込み
/// 5. ルーターの構築と HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("workout-api");
    init_tracing(&tracing_config);
    let _tracing_guard =
        tracing::info_span!("app", service = %tracing_config.service_name).entered();

    let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

    let store = JsonStore::open(&config.db_path)
        .await
        .with_context(|| format!("{} の読み込みに失敗しました", config.db_path.display()))?;
    tracing::info!(path = %config.db_path.display(), "データファイルを読み込みました");

    let app = build_app(Arc::new(store), Arc::new(SystemClock), config.cache_ttl);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("アドレスのパースに失敗しました: {}", config.bind_address()))?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Workout API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
