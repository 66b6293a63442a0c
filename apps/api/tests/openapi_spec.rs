//! # OpenAPI 仕様テスト
//!
//! utoipa から生成される OpenAPI 仕様の整合性を検証する。

use utoipa::OpenApi;
use workout_api::openapi::ApiDoc;

#[test]
fn test_openapi仕様がパニックせず生成される() {
    let doc = ApiDoc::openapi();
    let _yaml = doc.to_yaml().unwrap();
}

#[test]
fn test_全パスが含まれている() {
    let doc = ApiDoc::openapi();
    let paths: Vec<&str> = doc.paths.paths.keys().map(|k| k.as_str()).collect();

    assert_eq!(paths.len(), 4, "パス数が 4 であること: {paths:?}");
    assert!(paths.contains(&"/health"));
    assert!(paths.contains(&"/api/v1/workouts"));
    assert!(paths.contains(&"/api/v1/workouts/{workoutId}"));
    assert!(paths.contains(&"/api/v1/workouts/{workoutId}/records"));
}

#[test]
fn test_ワークアウトidのパスに全メソッドが定義されている() {
    let doc = ApiDoc::openapi();
    let item = doc
        .paths
        .paths
        .get("/api/v1/workouts/{workoutId}")
        .expect("パスが存在すること");

    assert!(item.get.is_some());
    assert!(item.put.is_some());
    assert!(item.delete.is_some());
}

#[test]
fn test_全タグが含まれている() {
    let doc = ApiDoc::openapi();
    let tags: Vec<&str> = doc
        .tags
        .as_ref()
        .expect("tags が存在すること")
        .iter()
        .map(|t| t.name.as_str())
        .collect();

    assert!(tags.contains(&"health"));
    assert!(tags.contains(&"Workouts"));
    assert!(tags.contains(&"Records"));
}

#[test]
fn test_エラーレスポンススキーマが登録されている() {
    let doc = ApiDoc::openapi();
    let components = doc.components.as_ref().expect("components が存在すること");

    assert!(components.schemas.contains_key("ErrorResponse"));
}
