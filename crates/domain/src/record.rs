//! # 記録（Record）
//!
//! ワークアウトに対する実施記録。このシステムでは読み取り専用で、
//! db.json に外部から登録されたものをワークアウト ID で検索するだけ。
//!
//! `workout` は [`WorkoutId`] への参照だが、存在は検証しない。

use serde::{Deserialize, Serialize};

use crate::workout::WorkoutId;

define_string_id! {
    /// 記録の一意識別子
    pub struct RecordId;
}

/// 記録エンティティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id:      RecordId,
    workout: WorkoutId,
    record:  String,
}

impl Record {
    pub fn new(id: RecordId, workout: WorkoutId, record: impl Into<String>) -> Self {
        Self {
            id,
            workout,
            record: record.into(),
        }
    }

    /// 指定ワークアウトの記録かどうか
    pub fn belongs_to(&self, workout_id: &WorkoutId) -> bool {
        &self.workout == workout_id
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn workout(&self) -> &WorkoutId {
        &self.workout
    }

    pub fn record(&self) -> &str {
        &self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_belongs_toはworkout_idの完全一致で判定する() {
        let record = Record::new(
            RecordId::new(),
            WorkoutId::from_string("w1"),
            "160 reps",
        );

        assert!(record.belongs_to(&WorkoutId::from_string("w1")));
        assert!(!record.belongs_to(&WorkoutId::from_string("w10")));
    }

    #[test]
    fn test_db_jsonの形式を読み込める() {
        let json = r#"{"id": "r1", "workout": "w1", "record": "7:23 minutes"}"#;

        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.workout().as_str(), "w1");
        assert_eq!(record.record(), "7:23 minutes");
    }
}
