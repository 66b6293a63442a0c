//! # タイムスタンプ
//!
//! `createdAt` / `updatedAt` は db.json 上で en-US ロケール形式の文字列
//! （例: `"4/20/2022, 2:21:56 PM"`、UTC）として保存される。
//! 文字列のままでは前後比較ができないため、内部では `DateTime<Utc>` で保持し、
//! serde の境界でのみ文字列に変換する。
//!
//! ロケール文字列は秒までしか表現しないため、生成時に秒未満を切り捨てる。
//! これにより「メモリ上の値」と「保存後に読み戻した値」が常に一致する。

use std::fmt;

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::DomainError;

/// 出力フォーマット（ゼロ埋めなし、12 時間制）
const LOCALE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// 入力フォーマット（chrono のパースは 1 桁の数値も受け付ける）
const LOCALE_PARSE_FORMAT: &str = "%m/%d/%Y, %I:%M:%S %p";

/// ロケール文字列で永続化されるタイムスタンプ
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// `DateTime<Utc>` から作成する（秒未満は切り捨て）
    pub fn from_datetime(value: DateTime<Utc>) -> Self {
        Self(value.trunc_subsecs(0))
    }

    /// ロケール文字列をパースする
    ///
    /// ロケール形式に一致しない場合は RFC 3339 として解釈を試みる。
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, LOCALE_PARSE_FORMAT) {
            return Ok(Self::from_datetime(naive.and_utc()));
        }
        DateTime::parse_from_rfc3339(value)
            .map(|dt| Self::from_datetime(dt.with_timezone(&Utc)))
            .map_err(|_| DomainError::Validation(format!("Invalid timestamp '{value}'")))
    }

    /// 内部の `DateTime<Utc>` を取得する
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// ロケール文字列に変換する
    pub fn to_locale_string(&self) -> String {
        self.0.format(LOCALE_FORMAT).to_string()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self::from_datetime(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_locale_string())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_locale_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 4, 20, h, m, s).unwrap()
    }

    #[rstest]
    #[case(at(14, 21, 56), "4/20/2022, 2:21:56 PM")]
    #[case(at(0, 5, 0), "4/20/2022, 12:05:00 AM")]
    #[case(at(12, 0, 9), "4/20/2022, 12:00:09 PM")]
    fn test_ロケール文字列に変換する(#[case] dt: DateTime<Utc>, #[case] expected: &str) {
        assert_eq!(Timestamp::from_datetime(dt).to_locale_string(), expected);
    }

    #[rstest]
    #[case("4/20/2022, 2:21:56 PM", at(14, 21, 56))]
    #[case("04/20/2022, 02:21:56 PM", at(14, 21, 56))]
    #[case("4/20/2022, 12:05:00 AM", at(0, 5, 0))]
    #[case("2022-04-20T14:21:56Z", at(14, 21, 56))]
    fn test_文字列をパースする(#[case] input: &str, #[case] expected: DateTime<Utc>) {
        assert_eq!(Timestamp::parse(input).unwrap().as_datetime(), expected);
    }

    #[test]
    fn test_不正な文字列はvalidationエラー() {
        let result = Timestamp::parse("yesterday");

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_秒未満は切り捨てられる() {
        let dt = at(14, 21, 56) + chrono::Duration::milliseconds(750);

        assert_eq!(Timestamp::from_datetime(dt).as_datetime(), at(14, 21, 56));
    }

    #[test]
    fn test_serdeでは文字列として扱われる() {
        let ts = Timestamp::from_datetime(at(14, 21, 56));
        let json = serde_json::to_value(ts).unwrap();

        assert_eq!(json, serde_json::json!("4/20/2022, 2:21:56 PM"));
        let restored: Timestamp = serde_json::from_value(json).unwrap();
        assert_eq!(restored, ts);
    }

    #[test]
    fn test_比較は時刻順になる() {
        let earlier = Timestamp::parse("4/20/2022, 9:00:00 AM").unwrap();
        let later = Timestamp::parse("4/20/2022, 1:00:00 PM").unwrap();

        assert!(earlier < later);
    }
}
