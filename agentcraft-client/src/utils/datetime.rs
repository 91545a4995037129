//! 日期时间序列化/反序列化工具
//!
//! 提供自定义 Serde 序列化/反序列化支持：
//! - 序列化: `DateTime`<Utc> -> RFC3339 字符串
//! - 反序列化: RFC3339 字符串、`YYYY-MM-DD HH:MM:SS` 字符串 或 Unix 时间戳 -> `DateTime`<Utc>

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// 后端无时区时间格式（按 UTC 解释）
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// 界面显示格式
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 序列化 Option<`DateTime`<Utc>> 为 Option<RFC3339 字符串>
#[allow(clippy::ref_option)]
pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
        None => serializer.serialize_none(),
    }
}

/// 反序列化：支持 RFC3339、无时区字符串或 Unix 时间戳（秒/毫秒自动识别）
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OptionalTimestamp {
        String(String),
        I64(i64),
    }

    match Option::<OptionalTimestamp>::deserialize(deserializer)? {
        Some(OptionalTimestamp::String(s)) if s.is_empty() => Ok(None),
        Some(OptionalTimestamp::String(s)) => parse_timestamp_str(&s)
            .map(Some)
            .ok_or_else(|| Error::custom(format!("Invalid timestamp: {s}"))),
        Some(OptionalTimestamp::I64(ts)) => parse_unix_timestamp(ts)
            .map(Some)
            .ok_or_else(|| Error::custom("Invalid Unix timestamp")),
        None => Ok(None),
    }
}

/// 解析字符串时间
fn parse_timestamp_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// 解析 Unix 时间戳（自动判断秒/毫秒）
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    // 如果时间戳 > 10^11，认为是毫秒
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}

/// 格式化为本地时间 `YYYY-MM-DD HH:MM:SS`，缺失时返回 `-`
pub fn format_datetime(dt: Option<&DateTime<Utc>>) -> String {
    dt.map_or_else(
        || "-".to_string(),
        |dt| dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Deserialize)]
    struct Holder {
        #[serde(default, with = "super")]
        at: Option<DateTime<Utc>>,
    }

    fn parse(json: &str) -> Option<DateTime<Utc>> {
        serde_json::from_str::<Holder>(json).unwrap().at
    }

    #[test]
    fn rfc3339_string() {
        let dt = parse(r#"{"at":"2024-05-01T12:00:00+08:00"}"#).unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-05-01T04:00:00+00:00");
    }

    #[test]
    fn naive_string_is_utc() {
        let dt = parse(r#"{"at":"2024-05-01 12:00:00"}"#).unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-05-01T12:00:00+00:00");
    }

    #[test]
    fn unix_seconds_and_millis() {
        let secs = parse(r#"{"at":1700000000}"#).unwrap();
        let millis = parse(r#"{"at":1700000000000}"#).unwrap();
        assert_eq!(secs, millis);
    }

    #[test]
    fn null_missing_and_empty() {
        assert_eq!(parse(r#"{"at":null}"#), None);
        assert_eq!(parse("{}"), None);
        assert_eq!(parse(r#"{"at":""}"#), None);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(serde_json::from_str::<Holder>(r#"{"at":"yesterday"}"#).is_err());
    }

    #[test]
    fn format_missing_is_dash() {
        assert_eq!(format_datetime(None), "-");
    }

    #[test]
    fn format_has_fixed_width() {
        let dt = Utc::now();
        assert_eq!(format_datetime(Some(&dt)).len(), 19);
    }
}
