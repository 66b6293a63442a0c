//! # JSON ストア
//!
//! db.json をメモリ上の [`Database`] に展開して保持する。
//! 起動時に一度だけ構築し、`Arc<JsonStore>` として各リポジトリに注入する。
//!
//! ## 書き込み
//!
//! [`JsonStore::write`] はコピーに対して変更を適用し、ファイルへの保存が
//! 成功した場合のみメモリ上の状態を差し替える。保存に失敗した変更は残らない。
//! ファイルは一時ファイルに書き出してから rename で置き換える。
//!
//! [`JsonStore::in_memory`] で作成したストアはファイルを持たず、保存を行わない。

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use workout_domain::{record::Record, workout::Workout};

use crate::error::InfraError;

/// db.json のトップレベル構造
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub workouts: Vec<Workout>,
    #[serde(default)]
    pub records:  Vec<Record>,
}

/// db.json をバックエンドとするインメモリストア
#[derive(Debug)]
pub struct JsonStore {
    path: Option<PathBuf>,
    db:   RwLock<Database>,
}

impl JsonStore {
    /// ファイルを読み込んでストアを作成する
    ///
    /// ファイルが存在しない場合は空の [`Database`] で開始し、最初の書き込みで作成する。
    #[tracing::instrument(skip_all, level = "debug")]
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, InfraError> {
        let path = path.as_ref().to_path_buf();

        let db = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<Database>(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("db.json が見つからないため空のデータで開始します");
                Database::default()
            }
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(
            path = %path.display(),
            workouts = db.workouts.len(),
            records = db.records.len(),
            "db.json を読み込みました"
        );

        Ok(Self {
            path: Some(path),
            db:   RwLock::new(db),
        })
    }

    /// ファイルを持たないストアを作成する
    pub fn in_memory(db: Database) -> Self {
        Self {
            path: None,
            db:   RwLock::new(db),
        }
    }

    /// 保存先のパス（インメモリの場合は `None`）
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 読み取りロックを取得して `f` を実行する
    pub async fn read<R>(&self, f: impl FnOnce(&Database) -> R) -> R {
        let db = self.db.read().await;
        f(&db)
    }

    /// 書き込みロックを取得して `f` を適用し、ファイルに保存する
    ///
    /// `f` がエラーを返した場合、または保存に失敗した場合は状態を変更しない。
    pub async fn write<R>(
        &self,
        f: impl FnOnce(&mut Database) -> Result<R, InfraError>,
    ) -> Result<R, InfraError> {
        let mut db = self.db.write().await;

        let mut next = db.clone();
        let result = f(&mut next)?;
        self.persist(&next).await?;
        *db = next;

        Ok(result)
    }

    async fn persist(&self, db: &Database) -> Result<(), InfraError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let json = serde_json::to_vec_pretty(db)?;
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, path).await?;

        tracing::debug!(path = %path.display(), "db.json を保存しました");
        Ok(())
    }
}
