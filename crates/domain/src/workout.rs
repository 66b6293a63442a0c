//! # ワークアウト
//!
//! トレーニングメニューを表すエンティティ。
//!
//! - `id` は作成時に採番され、以後変更されない
//! - `created_at` / `updated_at` は作成時に同じ時刻で初期化される
//! - 変更のたびに `updated_at` を更新する（以前の値より前には戻さない）
//!
//! ## 使用例
//!
//! ```rust
//! use chrono::Utc;
//! use workout_domain::workout::{NewWorkout, Workout, WorkoutChanges, WorkoutId};
//!
//! let now = Utc::now();
//! let workout = Workout::new(
//!     WorkoutId::new(),
//!     NewWorkout {
//!         name:         "Leg Day".to_string(),
//!         mode:         "strength".to_string(),
//!         equipment:    vec!["barbell".to_string()],
//!         exercises:    vec!["squat".to_string()],
//!         trainer_tips: vec!["keep back straight".to_string()],
//!     },
//!     now,
//! );
//! assert_eq!(workout.created_at(), workout.updated_at());
//!
//! let renamed = workout.apply(
//!     WorkoutChanges {
//!         name: Some("Leg Day II".to_string()),
//!         ..Default::default()
//!     },
//!     now,
//! );
//! assert_eq!(renamed.name(), "Leg Day II");
//! assert_eq!(renamed.mode(), "strength");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

define_string_id! {
    /// ワークアウトの一意識別子
    pub struct WorkoutId;
}

/// ワークアウト作成時の入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkout {
    pub name:         String,
    pub mode:         String,
    pub equipment:    Vec<String>,
    pub exercises:    Vec<String>,
    pub trainer_tips: Vec<String>,
}

/// ワークアウトの部分更新
///
/// `None` のフィールドは変更しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutChanges {
    pub name:         Option<String>,
    pub mode:         Option<String>,
    pub equipment:    Option<Vec<String>>,
    pub exercises:    Option<Vec<String>>,
    pub trainer_tips: Option<Vec<String>>,
}

/// ワークアウトエンティティ
///
/// db.json 上の表現（camelCase）をそのまま serde で読み書きする。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    id:           WorkoutId,
    name:         String,
    mode:         String,
    #[serde(default)]
    equipment:    Vec<String>,
    #[serde(default)]
    exercises:    Vec<String>,
    #[serde(default)]
    trainer_tips: Vec<String>,
    created_at:   Timestamp,
    updated_at:   Timestamp,
}

impl Workout {
    /// 新しいワークアウトを作成する
    pub fn new(id: WorkoutId, input: NewWorkout, now: DateTime<Utc>) -> Self {
        let now = Timestamp::from_datetime(now);
        Self {
            id,
            name: input.name,
            mode: input.mode,
            equipment: input.equipment,
            exercises: input.exercises,
            trainer_tips: input.trainer_tips,
            created_at: now,
            updated_at: now,
        }
    }

    /// 変更を適用した新しいワークアウトを返す
    ///
    /// `id` と `created_at` は保持される。
    pub fn apply(self, changes: WorkoutChanges, now: DateTime<Utc>) -> Self {
        let updated_at = Timestamp::from_datetime(now).max(self.updated_at);
        Self {
            name: changes.name.unwrap_or(self.name),
            mode: changes.mode.unwrap_or(self.mode),
            equipment: changes.equipment.unwrap_or(self.equipment),
            exercises: changes.exercises.unwrap_or(self.exercises),
            trainer_tips: changes.trainer_tips.unwrap_or(self.trainer_tips),
            updated_at,
            ..self
        }
    }

    /// `mode` が指定文字列を含むか（大文字小文字を区別しない）
    pub fn matches_mode(&self, mode: &str) -> bool {
        self.mode.to_lowercase().contains(&mode.to_lowercase())
    }

    // Getter メソッド

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn equipment(&self) -> &[String] {
        &self.equipment
    }

    pub fn exercises(&self) -> &[String] {
        &self.exercises
    }

    pub fn trainer_tips(&self) -> &[String] {
        &self.trainer_tips
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}
