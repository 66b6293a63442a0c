//! # API レスポンスエンベロープ
//!
//! 全エンドポイント共通のレスポンス形式 `{ "status": ..., "data": T }` を提供する。
//!
//! | status | data |
//! |--------|------|
//! | `"Ok"` | ペイロード |
//! | `"FAILED"` | `{ "error": "..." }`（[`ErrorResponse`](crate::ErrorResponse)） |

use serde::{Deserialize, Serialize};

/// エンベロープの `status` フィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ResponseStatus {
    /// 成功
    #[serde(rename = "Ok")]
    Ok,
    /// 失敗
    #[serde(rename = "FAILED")]
    Failed,
}

/// 成功レスポンスの統一型
///
/// ## 使用例
///
/// ```
/// use workout_shared::{ApiResponse, ResponseStatus};
///
/// let response = ApiResponse::new("hello");
/// assert_eq!(response.status, ResponseStatus::Ok);
/// assert_eq!(response.data, "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    pub data:   T,
}

impl<T> ApiResponse<T> {
    /// `status: "Ok"` の `ApiResponse` を作成する
    pub fn new(data: T) -> Self {
        Self {
            status: ResponseStatus::Ok,
            data,
        }
    }
}
