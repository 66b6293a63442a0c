//! # エラーレスポンス
//!
//! 失敗時のエンベロープ `{ "status": "FAILED", "data": { "error": "..." } }` を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - HTTP ステータスはボディに含めず、API 側のエラー型が保持する
//! - 定型メッセージは便利コンストラクタで提供し、文言の揺れを防ぐ

use serde::{Deserialize, Serialize};

use crate::ResponseStatus;

/// エラーペイロード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorData {
    /// 人間可読なエラーメッセージ
    pub error: String,
}

/// 失敗レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    pub data:   ErrorData,
}

impl ErrorResponse {
    /// 任意のメッセージから失敗レスポンスを作成する
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Failed,
            data:   ErrorData {
                error: error.into(),
            },
        }
    }

    /// 必須パスパラメータが空の場合
    ///
    /// `name` はルート定義上の表記（例: `":workoutId"`）。
    pub fn missing_parameter(name: &str) -> Self {
        Self::new(format!("Parameter '{name}' can not be empty"))
    }

    /// リクエストボディの必須キーが欠けている場合
    pub fn missing_body_keys(keys: &[&str]) -> Self {
        let keys = keys
            .iter()
            .map(|k| format!("'{k}'"))
            .collect::<Vec<_>>()
            .join(", ");
        Self::new(format!(
            "One of the following keys is missing or is empty in request body: {keys}"
        ))
    }

    /// エラーメッセージを取得する
    pub fn message(&self) -> &str {
        &self.data.error
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_newでfailedエンベロープになる() {
        let json = serde_json::to_value(ErrorResponse::new("boom")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "status": "FAILED", "data": { "error": "boom" } })
        );
    }

    #[test]
    fn test_missing_parameterの文言() {
        let error = ErrorResponse::missing_parameter(":workoutId");

        assert_eq!(error.message(), "Parameter ':workoutId' can not be empty");
    }

    #[test]
    fn test_missing_body_keysはキーを引用符付きで列挙する() {
        let error = ErrorResponse::missing_body_keys(&["name", "mode"]);

        assert_eq!(
            error.message(),
            "One of the following keys is missing or is empty in request body: 'name', 'mode'"
        );
    }
}
