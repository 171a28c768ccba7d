//! # Response Factory
//!
//! 속성 매핑과 원시 모델, 추가 생성자 파라미터로부터 불변 응답 DTO를 만드는 계약입니다.
//!
//! 응답은 스냅샷입니다. 모델은 빌린 상태로만 전달되므로 응답이 모델을 참조할 수 없고,
//! 반환 이후 모델이 바뀌어도 응답에는 보이지 않습니다.
//!
//! 응답 타입은 자신이 받아들이는 속성 이름을 [`ResponseFactory::required_attributes`]로
//! 선언합니다. 트랜스포머는 생성 시점에 이 목록과 디스크립터 집합을 대조하므로
//! 속성 불일치는 첫 요청이 아니라 등록 시점에 `ConfigurationError`로 드러납니다.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::core::errors::{TransformError, TransformResult};

/// 속성 이름 → 와이어 값 (선언 순서 유지)
pub type AttributeMap = Map<String, Value>;

/// 응답 DTO 생성 계약
pub trait ResponseFactory: Serialize + Sized + Send + 'static {
    /// 응답이 받는 원시 모델 계약
    type Model: ?Sized;

    /// 모델 외에 트랜스포머가 모아서 넘기는 추가 생성자 파라미터
    type Extra;

    /// 에러 메시지에 쓰이는 응답 이름
    const NAME: &'static str;

    /// 이 응답이 받아들이는 속성 이름 전체
    fn required_attributes() -> &'static [&'static str];

    fn build(attributes: AttributeMap, model: &Self::Model, extra: Self::Extra) -> TransformResult<Self>;
}

/// 응답을 다른 응답의 속성 값으로 직렬화합니다 (중첩 위임용).
pub fn to_attribute_value<R: ResponseFactory>(response: &R) -> TransformResult<Value> {
    serde_json::to_value(response).map_err(|e| TransformError::construction(R::NAME, e.to_string()))
}

/// 속성 매핑에서 필드를 하나씩 꺼내는 도우미
///
/// 모든 필드를 꺼낸 뒤 [`AttributeReader::finish`]를 호출하면
/// 응답이 모르는 속성이 남아 있을 때 `ConstructionError`를 돌려줍니다.
pub struct AttributeReader {
    response: &'static str,
    attributes: AttributeMap,
}

impl AttributeReader {
    pub fn new(response: &'static str, attributes: AttributeMap) -> Self {
        Self { response, attributes }
    }

    pub fn value(&mut self, name: &str) -> TransformResult<Value> {
        self.attributes
            .remove(name)
            .ok_or_else(|| TransformError::construction(self.response, format!("missing attribute `{}`", name)))
    }

    pub fn string(&mut self, name: &str) -> TransformResult<String> {
        match self.value(name)? {
            Value::String(value) => Ok(value),
            other => Err(self.mismatch(name, "string", &other)),
        }
    }

    pub fn optional_string(&mut self, name: &str) -> TransformResult<Option<String>> {
        match self.value(name)? {
            Value::Null => Ok(None),
            Value::String(value) => Ok(Some(value)),
            other => Err(self.mismatch(name, "string or null", &other)),
        }
    }

    pub fn nested<T: DeserializeOwned>(&mut self, name: &str) -> TransformResult<T> {
        let value = self.value(name)?;
        serde_json::from_value(value).map_err(|e| {
            TransformError::construction(self.response, format!("attribute `{}`: {}", name, e))
        })
    }

    pub fn finish(self) -> TransformResult<()> {
        if self.attributes.is_empty() {
            return Ok(());
        }
        let unexpected: Vec<&str> = self.attributes.keys().map(String::as_str).collect();
        Err(TransformError::construction(
            self.response,
            format!("unexpected attributes: {}", unexpected.join(", ")),
        ))
    }

    fn mismatch(&self, name: &str, expected: &str, found: &Value) -> TransformError {
        TransformError::construction(
            self.response,
            format!("attribute `{}` expected {}, found {}", name, expected, found),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attributes(value: Value) -> AttributeMap {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_reader_takes_fields() {
        let mut reader = AttributeReader::new("sample", attributes(json!({
            "name": "Alice",
            "sex": null,
        })));

        assert_eq!(reader.string("name").unwrap(), "Alice");
        assert_eq!(reader.optional_string("sex").unwrap(), None);
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn test_reader_rejects_missing_and_mistyped() {
        let mut reader = AttributeReader::new("sample", attributes(json!({ "name": 7 })));

        assert!(matches!(
            reader.string("name"),
            Err(TransformError::ConstructionError { response: "sample", .. })
        ));
        assert!(reader.string("email").is_err());
    }

    #[test]
    fn test_reader_rejects_leftovers() {
        let mut reader = AttributeReader::new("sample", attributes(json!({
            "name": "Alice",
            "extra": true,
        })));
        reader.string("name").unwrap();

        let error = reader.finish().unwrap_err();
        assert!(error.to_string().contains("extra"));
    }
}
