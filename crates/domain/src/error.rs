//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! `Display` の文言はそのまま API の `data.error` に載るため、
//! クライアントとの契約として英語の固定文言を使う。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//! | `NotFound` | 400 Bad Request | エンティティが存在しない |
//! | `Conflict` | 400 Bad Request | 名前の重複など |

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    #[error("{0}")]
    Validation(String),

    /// エンティティが見つからない
    ///
    /// `entity_type` は小文字の種別名（"workout" など）。
    #[error("Can't find {entity_type} with the id '{id}'")]
    NotFound {
        /// エンティティの種類
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },

    /// 競合エラー（一意であるべき値の重複）
    #[error("{0}")]
    Conflict(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_not_foundの文言にidが含まれる() {
        let error = DomainError::NotFound {
            entity_type: "workout",
            id:          "abc".to_string(),
        };

        assert_eq!(error.to_string(), "Can't find workout with the id 'abc'");
    }

    #[test]
    fn test_conflictはメッセージをそのまま表示する() {
        let error = DomainError::Conflict("already exists".to_string());

        assert_eq!(error.to_string(), "already exists");
    }
}
