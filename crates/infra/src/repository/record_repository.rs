//! # RecordRepository
//!
//! 記録の読み取りを担当するリポジトリ。
//!
//! 該当する記録がない場合もエラーにはせず、空の Vec を返す。

use std::sync::Arc;

use async_trait::async_trait;
use workout_domain::{record::Record, workout::WorkoutId};

use crate::{error::InfraError, store::JsonStore};

/// 記録リポジトリトレイト
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// 指定ワークアウトの記録を保存順で取得する
    async fn find_by_workout_id(&self, workout_id: &WorkoutId) -> Result<Vec<Record>, InfraError>;
}

/// JsonStore 実装の RecordRepository
#[derive(Debug, Clone)]
pub struct JsonRecordRepository {
    store: Arc<JsonStore>,
}

impl JsonRecordRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RecordRepository for JsonRecordRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(%workout_id))]
    async fn find_by_workout_id(&self, workout_id: &WorkoutId) -> Result<Vec<Record>, InfraError> {
        let records: Vec<Record> = self
            .store
            .read(|db| {
                db.records
                    .iter()
                    .filter(|r| r.belongs_to(workout_id))
                    .cloned()
                    .collect()
            })
            .await;
        Ok(records)
    }
}
