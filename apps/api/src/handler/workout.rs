//! # ワークアウト API ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/v1/workouts` - ワークアウト一覧（`?mode=` で絞り込み）
//! - `GET /api/v1/workouts/{workoutId}` - ワークアウト取得
//! - `POST /api/v1/workouts` - ワークアウト作成
//! - `PUT /api/v1/workouts/{workoutId}` - ワークアウト更新
//! - `DELETE /api/v1/workouts/{workoutId}` - ワークアウト削除

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path,
        Query,
        State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use workout_domain::workout::{NewWorkout, Workout, WorkoutChanges};
use workout_infra::repository::WorkoutFilter;
use workout_shared::{ApiResponse, ErrorResponse};

use super::require_workout_id;
use crate::{error::ApiError, usecase::WorkoutUseCaseImpl};

/// 作成時に必須のキー（エラーメッセージの列挙順）
const REQUIRED_KEYS: [&str; 5] = ["name", "mode", "equipment", "exercises", "trainerTips"];

/// ワークアウト API の共有状態
pub struct WorkoutState {
    pub usecase: WorkoutUseCaseImpl,
}

// --- リクエスト型 ---

/// 一覧取得のクエリパラメータ
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WorkoutListQuery {
    /// `mode` の部分一致で絞り込む（大文字小文字を区別しない）
    pub mode: Option<String>,
}

/// ワークアウト作成リクエスト
///
/// キーの欠落を検出するため全フィールドを `Option` で受ける。
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutRequest {
    pub name:         Option<String>,
    pub mode:         Option<String>,
    pub equipment:    Option<Vec<String>>,
    pub exercises:    Option<Vec<String>>,
    pub trainer_tips: Option<Vec<String>>,
}

impl CreateWorkoutRequest {
    /// 必須キーを検証して作成入力に変換する
    ///
    /// `name` / `mode` は空文字列も欠落とみなす。配列は空でもよい。
    fn into_input(self) -> Result<NewWorkout, ApiError> {
        let missing = || {
            ApiError::BadRequest(
                ErrorResponse::missing_body_keys(&REQUIRED_KEYS)
                    .message()
                    .to_string(),
            )
        };

        let name = self.name.filter(|s| !s.is_empty()).ok_or_else(missing)?;
        let mode = self.mode.filter(|s| !s.is_empty()).ok_or_else(missing)?;
        let (Some(equipment), Some(exercises), Some(trainer_tips)) =
            (self.equipment, self.exercises, self.trainer_tips)
        else {
            return Err(missing());
        };

        Ok(NewWorkout {
            name,
            mode,
            equipment,
            exercises,
            trainer_tips,
        })
    }
}

/// ワークアウト更新リクエスト
///
/// 指定されたフィールドのみ更新する。
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkoutRequest {
    pub name:         Option<String>,
    pub mode:         Option<String>,
    pub equipment:    Option<Vec<String>>,
    pub exercises:    Option<Vec<String>>,
    pub trainer_tips: Option<Vec<String>>,
}

impl From<UpdateWorkoutRequest> for WorkoutChanges {
    fn from(req: UpdateWorkoutRequest) -> Self {
        Self {
            name:         req.name,
            mode:         req.mode,
            equipment:    req.equipment,
            exercises:    req.exercises,
            trainer_tips: req.trainer_tips,
        }
    }
}

// --- レスポンス型 ---

/// ワークアウトデータ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutData {
    #[schema(example = "61dbae02-c147-4e28-863c-db7bd402b2d6")]
    pub id:           String,
    #[schema(example = "Tommy V")]
    pub name:         String,
    #[schema(example = "For Time")]
    pub mode:         String,
    pub equipment:    Vec<String>,
    pub exercises:    Vec<String>,
    /// 作成日時（en-US 形式、UTC）
    #[schema(example = "4/20/2022, 2:21:56 PM")]
    pub created_at:   String,
    /// 更新日時（en-US 形式、UTC）
    #[schema(example = "4/20/2022, 2:21:56 PM")]
    pub updated_at:   String,
    pub trainer_tips: Vec<String>,
}

impl From<&Workout> for WorkoutData {
    fn from(w: &Workout) -> Self {
        Self {
            id:           w.id().to_string(),
            name:         w.name().to_string(),
            mode:         w.mode().to_string(),
            equipment:    w.equipment().to_vec(),
            exercises:    w.exercises().to_vec(),
            created_at:   w.created_at().to_locale_string(),
            updated_at:   w.updated_at().to_locale_string(),
            trainer_tips: w.trainer_tips().to_vec(),
        }
    }
}

// --- ハンドラ ---

/// GET /api/v1/workouts
///
/// ワークアウト一覧を保存順で取得する。
#[utoipa::path(
   get,
   path = "/api/v1/workouts",
   tag = "Workouts",
   params(WorkoutListQuery),
   responses(
      (status = 200, description = "ワークアウト一覧", body = ApiResponse<Vec<WorkoutData>>),
      (status = 500, description = "データストアエラー", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn get_all_workouts(
    State(state): State<Arc<WorkoutState>>,
    query: Result<Query<WorkoutListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let filter = WorkoutFilter { mode: query.mode };

    let workouts = state.usecase.get_all_workouts(&filter).await?;

    let items: Vec<WorkoutData> = workouts.iter().map(WorkoutData::from).collect();
    Ok((StatusCode::OK, Json(ApiResponse::new(items))))
}

/// GET /api/v1/workouts/{workoutId}
///
/// ## レスポンス
///
/// - `200 OK`: ワークアウト
/// - `400 Bad Request`: ID が空、またはワークアウトが見つからない
#[utoipa::path(
   get,
   path = "/api/v1/workouts/{workoutId}",
   tag = "Workouts",
   params(("workoutId" = String, Path, description = "ワークアウト ID")),
   responses(
      (status = 200, description = "ワークアウト", body = ApiResponse<WorkoutData>),
      (status = 400, description = "ID が空、または見つからない", body = ErrorResponse),
      (status = 500, description = "データストアエラー", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all, fields(%workout_id))]
pub async fn get_one_workout(
    State(state): State<Arc<WorkoutState>>,
    Path(workout_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let workout_id = require_workout_id(workout_id)?;

    let workout = state.usecase.get_one_workout(&workout_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(WorkoutData::from(&workout)))))
}

/// POST /api/v1/workouts
///
/// ## レスポンス
///
/// - `201 Created`: 作成されたワークアウト
/// - `400 Bad Request`: 必須キーの欠落、JSON 不正、名前の重複
#[utoipa::path(
   post,
   path = "/api/v1/workouts",
   tag = "Workouts",
   request_body = CreateWorkoutRequest,
   responses(
      (status = 201, description = "作成成功", body = ApiResponse<WorkoutData>),
      (status = 400, description = "バリデーションエラー、名前の重複", body = ErrorResponse),
      (status = 500, description = "データストアエラー", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn create_new_workout(
    State(state): State<Arc<WorkoutState>>,
    payload: Result<Json<CreateWorkoutRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let input = req.into_input()?;

    let workout = state.usecase.create_new_workout(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(WorkoutData::from(&workout))),
    ))
}

/// PUT /api/v1/workouts/{workoutId}
///
/// ## レスポンス
///
/// - `200 OK`: 更新後のワークアウト
/// - `400 Bad Request`: ID が空、見つからない、名前の重複
#[utoipa::path(
   put,
   path = "/api/v1/workouts/{workoutId}",
   tag = "Workouts",
   params(("workoutId" = String, Path, description = "ワークアウト ID")),
   request_body = UpdateWorkoutRequest,
   responses(
      (status = 200, description = "更新成功", body = ApiResponse<WorkoutData>),
      (status = 400, description = "ID が空、見つからない、名前の重複", body = ErrorResponse),
      (status = 500, description = "データストアエラー", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all, fields(%workout_id))]
pub async fn update_one_workout(
    State(state): State<Arc<WorkoutState>>,
    Path(workout_id): Path<String>,
    payload: Result<Json<UpdateWorkoutRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let workout_id = require_workout_id(workout_id)?;
    let Json(req) = payload?;

    let workout = state
        .usecase
        .update_one_workout(&workout_id, req.into())
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(WorkoutData::from(&workout)))))
}

/// DELETE /api/v1/workouts/{workoutId}
///
/// ## レスポンス
///
/// - `204 No Content`: 削除成功（ボディなし）
/// - `400 Bad Request`: ID が空、または見つからない
#[utoipa::path(
   delete,
   path = "/api/v1/workouts/{workoutId}",
   tag = "Workouts",
   params(("workoutId" = String, Path, description = "ワークアウト ID")),
   responses(
      (status = 204, description = "削除成功"),
      (status = 400, description = "ID が空、または見つからない", body = ErrorResponse),
      (status = 500, description = "データストアエラー", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all, fields(%workout_id))]
pub async fn delete_one_workout(
    State(state): State<Arc<WorkoutState>>,
    Path(workout_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let workout_id = require_workout_id(workout_id)?;

    state.usecase.delete_one_workout(&workout_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
