//! # 記録 API ハンドラ
//!
//! - `GET /api/v1/workouts/{workoutId}/records` - ワークアウトの記録一覧

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use workout_domain::record::Record;
use workout_shared::{ApiResponse, ErrorResponse};

use super::require_workout_id;
use crate::{error::ApiError, usecase::RecordUseCaseImpl};

/// 記録 API の共有状態
pub struct RecordState {
    pub usecase: RecordUseCaseImpl,
}

/// 記録データ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecordData {
    #[schema(example = "ad75d475-ac57-44f4-a02a-8f6def58ff56")]
    pub id:      String,
    /// 対象ワークアウトの ID
    #[schema(example = "4a3d9aaa-608c-49a7-a004-66305ad4ab50")]
    pub workout: String,
    #[schema(example = "160 reps")]
    pub record:  String,
}

impl From<&Record> for RecordData {
    fn from(r: &Record) -> Self {
        Self {
            id:      r.id().to_string(),
            workout: r.workout().to_string(),
            record:  r.record().to_string(),
        }
    }
}

/// GET /api/v1/workouts/{workoutId}/records
///
/// 該当する記録がなくても 200 で空配列を返す。
#[utoipa::path(
   get,
   path = "/api/v1/workouts/{workoutId}/records",
   tag = "Records",
   params(("workoutId" = String, Path, description = "ワークアウト ID")),
   responses(
      (status = 200, description = "記録一覧", body = ApiResponse<Vec<RecordData>>),
      (status = 400, description = "ID が空", body = ErrorResponse),
      (status = 500, description = "データストアエラー", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all, fields(%workout_id))]
pub async fn get_record_for_workout(
    State(state): State<Arc<RecordState>>,
    Path(workout_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let workout_id = require_workout_id(workout_id)?;

    let records = state.usecase.get_record_for_workout(&workout_id).await?;

    let items: Vec<RecordData> = records.iter().map(RecordData::from).collect();
    Ok((StatusCode::OK, Json(ApiResponse::new(items))))
}
