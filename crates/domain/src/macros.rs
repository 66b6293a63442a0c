/// 文字列ベースの ID 型を定義する宣言型マクロ
///
/// db.json には任意の文字列 ID が保存されているため、UUID 型ではなく
/// `String` をラップする。新規採番時のみ UUID v4 を文字列化して使う。
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`String` をラップ、serde では素の文字列として扱う）
/// - `derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)`
/// - `new()`: UUID v4 を採番
/// - `from_string()`: 既存の文字列から復元
/// - `as_str()`: 内部文字列への参照
/// - `Default` impl（`new()` に委譲）
///
/// # 使用例
///
/// ```rust
/// use workout_domain::workout::WorkoutId;
///
/// let id = WorkoutId::from_string("61dbae02-c147-4e28-863c-db7bd402b2d6");
/// assert_eq!(id.as_str(), "61dbae02-c147-4e28-863c-db7bd402b2d6");
/// ```
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[serde(transparent)]
        #[display("{_0}")]
        $vis struct $Name(String);

        impl $Name {
            /// 新しい ID を採番する（UUID v4）
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// 既存の文字列から ID を作成する
            pub fn from_string(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// 内部の文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $Name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}
