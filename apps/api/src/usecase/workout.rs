//! ワークアウト管理ユースケース

use std::sync::Arc;

use workout_domain::{
    DomainError,
    clock::Clock,
    workout::{NewWorkout, Workout, WorkoutChanges, WorkoutId},
};
use workout_infra::{
    InfraError,
    InfraErrorKind,
    repository::{WorkoutFilter, WorkoutRepository},
};

use crate::error::ApiError;

/// ワークアウト管理ユースケース
pub struct WorkoutUseCaseImpl {
    workout_repository: Arc<dyn WorkoutRepository>,
    clock: Arc<dyn Clock>,
}

impl WorkoutUseCaseImpl {
    pub fn new(workout_repository: Arc<dyn WorkoutRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            workout_repository,
            clock,
        }
    }

    /// ワークアウト一覧を保存順で取得する
    pub async fn get_all_workouts(&self, filter: &WorkoutFilter) -> Result<Vec<Workout>, ApiError> {
        let workouts = self.workout_repository.find_all(filter).await?;
        Ok(workouts)
    }

    /// ワークアウトを 1 件取得する
    pub async fn get_one_workout(&self, id: &WorkoutId) -> Result<Workout, ApiError> {
        self.find_existing(id).await
    }

    /// ワークアウトを作成する
    ///
    /// 1. ID 採番、作成・更新時刻を現在時刻で初期化
    /// 2. 末尾に追加（名前の重複はリポジトリが書き込みロック内で判定する）
    pub async fn create_new_workout(&self, input: NewWorkout) -> Result<Workout, ApiError> {
        let workout = Workout::new(WorkoutId::new(), input, self.clock.now());
        self.workout_repository
            .insert(&workout)
            .await
            .map_err(name_conflict)?;

        tracing::info!(workout_id = %workout.id(), "ワークアウトを作成しました");
        Ok(workout)
    }

    /// ワークアウトを部分更新する
    ///
    /// 指定されたフィールドのみ置き換え、`updated_at` を現在時刻に更新する。
    pub async fn update_one_workout(
        &self,
        id: &WorkoutId,
        changes: WorkoutChanges,
    ) -> Result<Workout, ApiError> {
        let current = self.find_existing(id).await?;

        let updated = current.apply(changes, self.clock.now());
        self.workout_repository
            .update(&updated)
            .await
            .map_err(name_conflict)?;

        tracing::info!(workout_id = %id, "ワークアウトを更新しました");
        Ok(updated)
    }

    /// ワークアウトを削除する
    pub async fn delete_one_workout(&self, id: &WorkoutId) -> Result<(), ApiError> {
        self.find_existing(id).await?;
        self.workout_repository.delete(id).await?;

        tracing::info!(workout_id = %id, "ワークアウトを削除しました");
        Ok(())
    }

    async fn find_existing(&self, id: &WorkoutId) -> Result<Workout, ApiError> {
        self.workout_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound {
                    entity_type: "workout",
                    id:          id.to_string(),
                }
                .into()
            })
    }
}

/// 名前重複のインフラエラーを 400 の Conflict に読み替える
fn name_conflict(err: InfraError) -> ApiError {
    if let InfraErrorKind::DuplicateName { name, .. } = err.kind() {
        return DomainError::Conflict(format!("Workout with the name '{name}' already exists"))
            .into();
    }
    err.into()
}
