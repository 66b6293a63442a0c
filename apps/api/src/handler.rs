//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ビジネスロジックはユースケースに委譲
//! - 成功時は `{ "status": "Ok", "data": ... }`、失敗時は [`ApiError`] が
//!   `{ "status": "FAILED", "data": { "error": ... } }` を返す

pub mod docs;
pub mod health;
pub mod record;
pub mod workout;

pub use docs::{openapi_json, swagger_ui};
pub use health::health_check;
pub use record::{RecordData, RecordState, get_record_for_workout};
pub use workout::{
    CreateWorkoutRequest,
    UpdateWorkoutRequest,
    WorkoutData,
    WorkoutListQuery,
    WorkoutState,
    create_new_workout,
    delete_one_workout,
    get_all_workouts,
    get_one_workout,
    update_one_workout,
};
use workout_domain::workout::WorkoutId;

use crate::error::ApiError;

/// ルート定義上のワークアウト ID パラメータ名
pub const WORKOUT_ID_PARAM: &str = ":workoutId";

/// 必須パスパラメータを検証してワークアウト ID に変換する
///
/// 空白のみの値（`/workouts/%20` など）は未指定として扱う。
pub(crate) fn require_workout_id(value: String) -> Result<WorkoutId, ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::MissingParameter(WORKOUT_ID_PARAM));
    }
    Ok(WorkoutId::from_string(value))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t")]
    fn test_require_workout_idは空白をmissing_parameterにする(#[case] value: &str) {
        let err = require_workout_id(value.to_string()).unwrap_err();

        assert!(matches!(err, ApiError::MissingParameter(":workoutId")));
    }

    #[test]
    fn test_require_workout_idは値をそのまま使う() {
        let id = require_workout_id("61dbae02".to_string()).unwrap();

        assert_eq!(id.as_str(), "61dbae02");
    }
}
