//! # API エラー定義
//!
//! ハンドラ・ユースケースで発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! レスポンスは常に失敗エンベロープ
//! `{ "status": "FAILED", "data": { "error": "..." } }` で返す。
//! リソースが見つからない場合も 400 を返す（既存クライアントとの互換のため）。

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use workout_domain::DomainError;
use workout_infra::InfraError;
use workout_shared::ErrorResponse;

/// API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 必須パスパラメータが空（値はルート上の表記、例: `":workoutId"`）
    #[error("Parameter '{0}' can not be empty")]
    MissingParameter(&'static str),

    /// 不正なリクエスト
    #[error("{0}")]
    BadRequest(String),

    /// リソースが見つからない
    #[error("{0}")]
    NotFound(String),

    /// データストアのエラー
    #[error("{0}")]
    Repository(#[from] InfraError),

    /// 内部エラー
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// このエラーに対応する HTTP ステータス
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) | Self::BadRequest(_) | Self::NotFound(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Repository(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => Self::NotFound(err.to_string()),
            DomainError::Validation(msg) | DomainError::Conflict(msg) => Self::BadRequest(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            match &self {
                Self::Repository(e) => {
                    tracing::error!(
                        error = %e,
                        span_trace = %e.span_trace(),
                        "データストアエラー"
                    );
                }
                other => tracing::error!(error = %other, "内部エラー"),
            }
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
