//! 記録参照ユースケース

use std::sync::Arc;

use workout_domain::{record::Record, workout::WorkoutId};
use workout_infra::repository::RecordRepository;

use crate::error::ApiError;

/// 記録参照ユースケース
pub struct RecordUseCaseImpl {
    record_repository: Arc<dyn RecordRepository>,
}

impl RecordUseCaseImpl {
    pub fn new(record_repository: Arc<dyn RecordRepository>) -> Self {
        Self { record_repository }
    }

    /// 指定ワークアウトの記録を取得する（該当なしは空の Vec）
    pub async fn get_record_for_workout(
        &self,
        workout_id: &WorkoutId,
    ) -> Result<Vec<Record>, ApiError> {
        let records = self
            .record_repository
            .find_by_workout_id(workout_id)
            .await?;
        Ok(records)
    }
}
