//! # Type Caster
//!
//! 모델 getter가 돌려준 원시 값([`RawValue`])을 선언된 타입 태그([`TypeTag`])에 맞는
//! 와이어 값(`serde_json::Value`)으로 변환하는 순수 함수 모음입니다.
//!
//! ## DATETIME 표준 형식
//!
//! 모든 트랜스포머의 DATETIME 필드는 단 하나의 형식으로 직렬화됩니다.
//!
//! - RFC 3339 (ISO-8601) 문자열
//! - UTC 기준, 초 단위 정밀도, `Z` 접미사
//! - 예: `2023-01-01T00:00:00Z`
//!
//! 외부 소비자가 의존하는 계약이므로 형식을 바꾸면 모든 응답 타입이 영향을 받습니다.
//!
//! ## 변환 규칙
//!
//! | 원시 값 \ 태그 | STRING | INT | FLOAT | BOOL | DATETIME |
//! |---|---|---|---|---|---|
//! | string | 그대로 | i64 파싱 | f64 파싱 | `true`/`false`/`1`/`0` | RFC 3339 파싱 후 표준화 |
//! | int | 10진 문자열 | 그대로 | 손실 없을 때만 확장 | 0/1만 허용 | 실패 |
//! | float | 10진 문자열 | 정수값만 허용 | 그대로 | 실패 | 실패 |
//! | bool | `"true"`/`"false"` | 0/1 | 실패 | 그대로 | 실패 |
//! | datetime | 실패 | 실패 | 실패 | 실패 | 표준화 |
//! | null | null | null | null | null | null |

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// DIRECT 속성이 선언하는 와이어 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeTag {
    String,
    Int,
    Float,
    Bool,
    #[serde(rename = "DATETIME")]
    DateTime,
}

impl TypeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::String => "STRING",
            TypeTag::Int => "INT",
            TypeTag::Float => "FLOAT",
            TypeTag::Bool => "BOOL",
            TypeTag::DateTime => "DATETIME",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 모델 getter가 반환하는 원시 값
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(DateTime<Utc>),
}

impl RawValue {
    /// 에러 메시지에 쓰이는 원시 값의 형태 이름
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Str(_) => "string",
            RawValue::Int(_) => "int",
            RawValue::Float(_) => "float",
            RawValue::Bool(_) => "bool",
            RawValue::DateTime(_) => "datetime",
        }
    }

    fn display(&self) -> String {
        match self {
            RawValue::Null => "null".to_string(),
            RawValue::Str(value) => value.clone(),
            RawValue::Int(value) => value.to_string(),
            RawValue::Float(value) => value.to_string(),
            RawValue::Bool(value) => value.to_string(),
            RawValue::DateTime(value) => format_datetime(value),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Str(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Str(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Int(i64::from(value))
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        RawValue::Int(i64::from(value))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for RawValue {
    fn from(value: DateTime<Utc>) -> Self {
        RawValue::DateTime(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawValue::Null)
    }
}

/// 속성 이름이 붙기 전의 변환 실패
///
/// 속성 해석기가 [`CastFailure::on`]으로 속성 이름을 붙여
/// [`TransformError::CastError`](crate::core::errors::TransformError::CastError)로 바꿉니다.
#[derive(Debug, Clone, PartialEq)]
pub struct CastFailure {
    pub tag: TypeTag,
    pub found: &'static str,
    pub value: String,
}

impl CastFailure {
    fn new(raw: &RawValue, tag: TypeTag) -> Self {
        Self {
            tag,
            found: raw.kind(),
            value: raw.display(),
        }
    }

    pub fn on(self, attribute: &str) -> crate::core::errors::TransformError {
        crate::core::errors::TransformError::CastError {
            attribute: attribute.to_string(),
            tag: self.tag,
            found: self.found,
            value: self.value,
        }
    }
}

/// DATETIME 값을 표준 형식 문자열로 직렬화합니다.
///
/// ```rust,ignore
/// let instant = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(format_datetime(&instant), "2023-01-01T00:00:00Z");
/// ```
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// 원시 값을 타입 태그에 맞는 와이어 값으로 변환합니다.
///
/// 순수 함수이며 같은 입력에 대해 항상 같은 결과를 돌려줍니다.
/// `Null`은 모든 태그에서 JSON `null`로 통과합니다 (선택 필드).
pub fn cast(raw: &RawValue, tag: TypeTag) -> Result<Value, CastFailure> {
    let fail = || CastFailure::new(raw, tag);

    match (raw, tag) {
        (RawValue::Null, _) => Ok(Value::Null),

        (RawValue::Str(value), TypeTag::String) => Ok(Value::String(value.clone())),
        (RawValue::Int(value), TypeTag::String) => Ok(Value::String(value.to_string())),
        (RawValue::Float(value), TypeTag::String) => Ok(Value::String(value.to_string())),
        (RawValue::Bool(value), TypeTag::String) => Ok(Value::String(value.to_string())),

        (RawValue::Int(value), TypeTag::Int) => Ok(Value::from(*value)),
        (RawValue::Str(value), TypeTag::Int) => value
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| fail()),
        (RawValue::Float(value), TypeTag::Int) => {
            if value.fract() == 0.0 && value.is_finite() && value.abs() < i64::MAX as f64 {
                Ok(Value::from(*value as i64))
            } else {
                Err(fail())
            }
        }
        (RawValue::Bool(value), TypeTag::Int) => Ok(Value::from(i64::from(*value))),

        (RawValue::Float(value), TypeTag::Float) => float(*value).ok_or_else(fail),
        (RawValue::Int(value), TypeTag::Float) => {
            let widened = *value as f64;
            if widened >= i64::MAX as f64 || widened as i64 != *value {
                return Err(fail());
            }
            float(widened).ok_or_else(fail)
        }
        (RawValue::Str(value), TypeTag::Float) => value
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(float)
            .ok_or_else(fail),

        (RawValue::Bool(value), TypeTag::Bool) => Ok(Value::Bool(*value)),
        (RawValue::Int(0), TypeTag::Bool) => Ok(Value::Bool(false)),
        (RawValue::Int(1), TypeTag::Bool) => Ok(Value::Bool(true)),
        (RawValue::Str(value), TypeTag::Bool) => match value.trim() {
            "true" | "1" => Ok(Value::Bool(true)),
            "false" | "0" => Ok(Value::Bool(false)),
            _ => Err(fail()),
        },

        (RawValue::DateTime(value), TypeTag::DateTime) => Ok(Value::String(format_datetime(value))),
        (RawValue::Str(value), TypeTag::DateTime) => DateTime::parse_from_rfc3339(value.trim())
            .map(|parsed| Value::String(format_datetime(&parsed.with_timezone(&Utc))))
            .map_err(|_| fail()),

        _ => Err(fail()),
    }
}

fn float(value: f64) -> Option<Value> {
    Number::from_f64(value).map(Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_datetime_is_canonical() {
        let first = cast(&RawValue::from(instant()), TypeTag::DateTime).unwrap();
        let second = cast(&RawValue::from(instant()), TypeTag::DateTime).unwrap();

        assert_eq!(first, Value::String("2024-01-01T00:00:00Z".to_string()));
        assert_eq!(first, second);
    }

    #[test]
    fn test_datetime_drops_subsecond_precision() {
        let precise = instant() + chrono::Duration::milliseconds(250);

        assert_eq!(format_datetime(&precise), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_datetime_string_is_normalized_to_utc() {
        let raw = RawValue::from("2024-01-01T09:00:00+09:00");

        assert_eq!(
            cast(&raw, TypeTag::DateTime).unwrap(),
            Value::String("2024-01-01T00:00:00Z".to_string())
        );
    }

    #[test]
    fn test_non_date_under_datetime_fails() {
        let failure = cast(&RawValue::from(42i64), TypeTag::DateTime).unwrap_err();

        assert_eq!(failure.tag, TypeTag::DateTime);
        assert_eq!(failure.found, "int");
        assert_eq!(failure.value, "42");

        assert!(cast(&RawValue::from("yesterday"), TypeTag::DateTime).is_err());
    }

    #[test]
    fn test_string_casts() {
        assert_eq!(cast(&RawValue::from("abc123"), TypeTag::String).unwrap(), Value::from("abc123"));
        assert_eq!(cast(&RawValue::from(7i64), TypeTag::String).unwrap(), Value::from("7"));
        assert_eq!(cast(&RawValue::from(true), TypeTag::String).unwrap(), Value::from("true"));
        assert!(cast(&RawValue::from(instant()), TypeTag::String).is_err());
    }

    #[test]
    fn test_int_casts() {
        assert_eq!(cast(&RawValue::from(" 12 "), TypeTag::Int).unwrap(), Value::from(12));
        assert_eq!(cast(&RawValue::from(3.0), TypeTag::Int).unwrap(), Value::from(3));
        assert!(cast(&RawValue::from(3.5), TypeTag::Int).is_err());
        assert!(cast(&RawValue::from("twelve"), TypeTag::Int).is_err());
    }

    #[test]
    fn test_float_and_bool_casts() {
        assert_eq!(cast(&RawValue::from(2i64), TypeTag::Float).unwrap(), serde_json::json!(2.0));
        assert!(cast(&RawValue::from(f64::NAN), TypeTag::Float).is_err());

        assert_eq!(cast(&RawValue::from(1i64), TypeTag::Bool).unwrap(), Value::Bool(true));
        assert_eq!(cast(&RawValue::from("false"), TypeTag::Bool).unwrap(), Value::Bool(false));
        assert!(cast(&RawValue::from(2i64), TypeTag::Bool).is_err());
    }

    #[test]
    fn test_int_to_float_rejects_precision_loss() {
        let exact = 9_007_199_254_740_992i64;
        assert_eq!(cast(&RawValue::from(exact), TypeTag::Float).unwrap(), serde_json::json!(9007199254740992.0));

        let failure = cast(&RawValue::from(exact + 1), TypeTag::Float).unwrap_err();
        assert_eq!(failure.tag, TypeTag::Float);
        assert_eq!(failure.found, "int");
        assert_eq!(failure.value, "9007199254740993");
    }

    #[test]
    fn test_tag_names_match_serde() {
        for tag in [TypeTag::String, TypeTag::Int, TypeTag::Float, TypeTag::Bool, TypeTag::DateTime] {
            assert_eq!(serde_json::to_value(tag).unwrap(), Value::from(tag.as_str()));
        }
        assert_eq!(TypeTag::DateTime.to_string(), "DATETIME");
    }

    #[test]
    fn test_null_passes_through_every_tag() {
        let none: Option<&str> = None;
        let raw = RawValue::from(none);

        for tag in [TypeTag::String, TypeTag::Int, TypeTag::Float, TypeTag::Bool, TypeTag::DateTime] {
            assert_eq!(cast(&raw, tag).unwrap(), Value::Null);
        }
    }
}
