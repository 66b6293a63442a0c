//! # API ドキュメントハンドラ
//!
//! - `GET /api/v1/docs.json` - OpenAPI ドキュメント（JSON）
//! - `GET /api/v1/docs` - Swagger UI（アセットは CDN から読み込む）

use axum::{Json, response::Html};
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Workout API Docs</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/api/v1/docs.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

/// OpenAPI ドキュメントを JSON で返す
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Swagger UI の HTML を返す
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}
