//! # OpenAPI 仕様定義
//!
//! utoipa を使用して Workout API の OpenAPI 仕様を Rust の型から生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::OpenApi;

use crate::handler::{health, record, workout};

#[derive(OpenApi)]
#[openapi(
   info(
      title = "Workout API",
      version = "1.0.0",
      description = "ワークアウトと記録を管理する REST API"
   ),
   paths(
      // health
      health::health_check,
      // workouts
      workout::get_all_workouts,
      workout::get_one_workout,
      workout::create_new_workout,
      workout::update_one_workout,
      workout::delete_one_workout,
      // records
      record::get_record_for_workout,
   ),
   components(schemas(
      workout_shared::ErrorResponse,
      workout_shared::ResponseStatus,
   )),
   tags(
      (name = "health", description = "ヘルスチェック"),
      (name = "Workouts", description = "ワークアウト管理"),
      (name = "Records", description = "ワークアウトの記録"),
   )
)]
pub struct ApiDoc;
