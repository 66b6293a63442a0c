//! # アプリケーション構築
//!
//! DI（リポジトリ・ユースケース・State）の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::{sync::Arc, time::Duration};

use axum::{Router, middleware::from_fn_with_state, routing::get};
use tower_http::trace::TraceLayer;
use workout_domain::clock::Clock;
use workout_infra::{
    JsonStore,
    repository::{JsonRecordRepository, JsonWorkoutRepository},
};

use crate::{
    handler::{
        RecordState,
        WorkoutState,
        create_new_workout,
        delete_one_workout,
        get_all_workouts,
        get_one_workout,
        get_record_for_workout,
        health_check,
        openapi_json,
        swagger_ui,
        update_one_workout,
    },
    middleware::{ResponseCache, cache_responses},
    usecase::{RecordUseCaseImpl, WorkoutUseCaseImpl},
};

/// API のパスプレフィックス
pub const API_V1_PREFIX: &str = "/api/v1";

/// DI コンテナの構築とルーター定義を行う
///
/// `cache_ttl` が `None` の場合はレスポンスキャッシュを無効にする。
pub fn build_app(
    store: Arc<JsonStore>,
    clock: Arc<dyn Clock>,
    cache_ttl: Option<Duration>,
) -> Router {
    let workout_state = Arc::new(WorkoutState {
        usecase: WorkoutUseCaseImpl::new(
            Arc::new(JsonWorkoutRepository::new(store.clone())),
            clock,
        ),
    });
    let record_state = Arc::new(RecordState {
        usecase: RecordUseCaseImpl::new(Arc::new(JsonRecordRepository::new(store))),
    });

    let workout_routes = Router::new()
        .route("/workouts", get(get_all_workouts).post(create_new_workout))
        .route(
            "/workouts/{workoutId}",
            get(get_one_workout)
                .put(update_one_workout)
                .delete(delete_one_workout),
        )
        .with_state(workout_state);

    let record_routes = Router::new()
        .route("/workouts/{workoutId}/records", get(get_record_for_workout))
        .with_state(record_state);

    let mut resource_routes = workout_routes.merge(record_routes);
    if let Some(ttl) = cache_ttl {
        resource_routes =
            resource_routes.layer(from_fn_with_state(ResponseCache::new(ttl), cache_responses));
    }

    let docs_routes = Router::new()
        .route("/docs.json", get(openapi_json))
        .route("/docs", get(swagger_ui));

    Router::new()
        .route("/health", get(health_check))
        .nest(API_V1_PREFIX, resource_routes.merge(docs_routes))
        .layer(TraceLayer::new_for_http())
}
