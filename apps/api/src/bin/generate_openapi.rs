//! # OpenAPI YAML 生成ツール
//!
//! Workout API の Rust 型から OpenAPI 仕様を YAML 形式で標準出力に出力する。
//! 生成後、どこからも参照されないコンポーネントスキーマを除去する。
//!
//! ## 使い方
//!
//! ```bash
//! cargo run --bin generate-openapi -p workout-api > openapi/openapi.yaml
//! ```

use std::collections::HashSet;

use anyhow::Context as _;
use utoipa::OpenApi;
use workout_api::openapi::ApiDoc;

fn main() -> anyhow::Result<()> {
    let mut openapi = ApiDoc::openapi();
    remove_unused_schemas(&mut openapi)?;
    let yaml = openapi.to_yaml().context("OpenAPI YAML 生成に失敗しました")?;
    print!("{yaml}");
    Ok(())
}

/// `$ref` されていないコンポーネントスキーマを除去する
///
/// `ApiResponse<T>` は `T` を inline 展開するため、utoipa が自動登録した
/// `T` 単体のスキーマが未使用のまま残る。
fn remove_unused_schemas(openapi: &mut utoipa::openapi::OpenApi) -> anyhow::Result<()> {
    let json = serde_json::to_string(openapi).context("JSON シリアライズに失敗しました")?;

    // "$ref":"#/components/schemas/SchemaName"
    let prefix = "#/components/schemas/";
    let used_schemas: HashSet<&str> = json
        .match_indices(prefix)
        .filter_map(|(start, _)| {
            let rest = &json[start + prefix.len()..];
            rest.find('"').map(|end| &rest[..end])
        })
        .collect();

    if let Some(components) = &mut openapi.components {
        components
            .schemas
            .retain(|name, _| used_schemas.contains(name.as_str()));
    }
    Ok(())
}
