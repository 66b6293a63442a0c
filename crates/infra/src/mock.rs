//! # テスト用モックリポジトリ
//!
//! データストアが利用できない状況を再現するリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! workout-infra = { workspace = true, features = ["test-utils"] }
//! ```

use async_trait::async_trait;
use workout_domain::{
    record::Record,
    workout::{Workout, WorkoutId},
};

use crate::{
    error::InfraError,
    repository::{RecordRepository, WorkoutFilter, WorkoutRepository},
};

const UNAVAILABLE: &str = "data store is unavailable";

/// 全操作が失敗する WorkoutRepository
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableWorkoutRepository;

#[async_trait]
impl WorkoutRepository for UnavailableWorkoutRepository {
    async fn find_all(&self, _filter: &WorkoutFilter) -> Result<Vec<Workout>, InfraError> {
        Err(InfraError::unexpected(UNAVAILABLE))
    }

    async fn find_by_id(&self, _id: &WorkoutId) -> Result<Option<Workout>, InfraError> {
        Err(InfraError::unexpected(UNAVAILABLE))
    }

    async fn insert(&self, _workout: &Workout) -> Result<(), InfraError> {
        Err(InfraError::unexpected(UNAVAILABLE))
    }

    async fn update(&self, _workout: &Workout) -> Result<(), InfraError> {
        Err(InfraError::unexpected(UNAVAILABLE))
    }

    async fn delete(&self, _id: &WorkoutId) -> Result<(), InfraError> {
        Err(InfraError::unexpected(UNAVAILABLE))
    }
}

/// 全操作が失敗する RecordRepository
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableRecordRepository;

#[async_trait]
impl RecordRepository for UnavailableRecordRepository {
    async fn find_by_workout_id(
        &self,
        _workout_id: &WorkoutId,
    ) -> Result<Vec<Record>, InfraError> {
        Err(InfraError::unexpected(UNAVAILABLE))
    }
}
