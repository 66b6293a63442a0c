//! # WorkoutRepository
//!
//! ワークアウトの永続化を担当するリポジトリ。
//! 一覧は db.json 上の並び順を保持する。

use std::sync::Arc;

use async_trait::async_trait;
use workout_domain::workout::{Workout, WorkoutId};

use crate::{error::InfraError, store::JsonStore};

/// 一覧取得時の絞り込み条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutFilter {
    /// `mode` の部分一致（大文字小文字を区別しない）
    pub mode: Option<String>,
}

impl WorkoutFilter {
    fn matches(&self, workout: &Workout) -> bool {
        self.mode
            .as_deref()
            .is_none_or(|mode| workout.matches_mode(mode))
    }
}

/// ワークアウトリポジトリトレイト
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    /// 条件に一致するワークアウトを保存順で取得する
    async fn find_all(&self, filter: &WorkoutFilter) -> Result<Vec<Workout>, InfraError>;

    /// ID でワークアウトを検索する
    async fn find_by_id(&self, id: &WorkoutId) -> Result<Option<Workout>, InfraError>;

    /// ワークアウトを末尾に追加する
    ///
    /// 同じ ID が既に存在する場合は Conflict、同じ名前が既に存在する場合は
    /// DuplicateName エラー。判定は書き込みロック内で行う。
    async fn insert(&self, workout: &Workout) -> Result<(), InfraError>;

    /// 同じ ID のワークアウトを置き換える
    ///
    /// 名前を他のワークアウトと同じものに変える場合は DuplicateName エラー。
    async fn update(&self, workout: &Workout) -> Result<(), InfraError>;

    /// ワークアウトを削除する（存在しない場合は何もしない）
    async fn delete(&self, id: &WorkoutId) -> Result<(), InfraError>;
}

/// JsonStore 実装の WorkoutRepository
#[derive(Debug, Clone)]
pub struct JsonWorkoutRepository {
    store: Arc<JsonStore>,
}

impl JsonWorkoutRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl WorkoutRepository for JsonWorkoutRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(mode = ?filter.mode))]
    async fn find_all(&self, filter: &WorkoutFilter) -> Result<Vec<Workout>, InfraError> {
        let workouts: Vec<Workout> = self
            .store
            .read(|db| {
                db.workouts
                    .iter()
                    .filter(|w| filter.matches(w))
                    .cloned()
                    .collect()
            })
            .await;
        Ok(workouts)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &WorkoutId) -> Result<Option<Workout>, InfraError> {
        let workout = self
            .store
            .read(|db| db.workouts.iter().find(|w| w.id() == id).cloned())
            .await;
        Ok(workout)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %workout.id()))]
    async fn insert(&self, workout: &Workout) -> Result<(), InfraError> {
        self.store
            .write(|db| {
                if db.workouts.iter().any(|w| w.id() == workout.id()) {
                    return Err(InfraError::conflict("Workout", workout.id().as_str()));
                }
                if db.workouts.iter().any(|w| w.name() == workout.name()) {
                    return Err(InfraError::duplicate_name("Workout", workout.name()));
                }
                db.workouts.push(workout.clone());
                Ok(())
            })
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %workout.id()))]
    async fn update(&self, workout: &Workout) -> Result<(), InfraError> {
        self.store
            .write(|db| {
                let index = db
                    .workouts
                    .iter()
                    .position(|w| w.id() == workout.id())
                    .ok_or_else(|| {
                        InfraError::unexpected(format!(
                            "workout '{}' disappeared before update",
                            workout.id()
                        ))
                    })?;
                let renamed = db.workouts[index].name() != workout.name();
                if renamed
                    && db
                        .workouts
                        .iter()
                        .any(|w| w.id() != workout.id() && w.name() == workout.name())
                {
                    return Err(InfraError::duplicate_name("Workout", workout.name()));
                }
                db.workouts[index] = workout.clone();
                Ok(())
            })
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &WorkoutId) -> Result<(), InfraError> {
        self.store
            .write(|db| {
                db.workouts.retain(|w| w.id() != id);
                Ok(())
            })
            .await
    }
}
