//! # Attribute Descriptors
//!
//! 출력 필드 하나를 선언하는 단위([`Attribute`])와, 모델 계약이 노출하는
//! 필드 이름 → 접근자 함수 표([`AccessorTable`])를 정의합니다.
//!
//! ## 디스크립터 종류
//!
//! ```text
//! Attribute
//! ├── Direct(TypeTag)      같은 이름의 getter 값을 Type Caster로 변환
//! └── Computed(fn)         (트랜스포머, 모델) → 이미 와이어 형태인 값
//! ```
//!
//! DIRECT 디스크립터의 getter는 런타임 리플렉션 없이 [`AccessorTable`]에서
//! 이름으로 찾습니다. 검색은 트랜스포머 생성 시 한 번만 수행되고,
//! 이후 요청에서는 해석된 함수 포인터만 호출됩니다.
//!
//! COMPUTED 디스크립터는 캡처가 불가능한 함수 포인터입니다. 협력 객체(중첩 트랜스포머 등)는
//! 첫 번째 인자로 명시적으로 전달되므로 호출 간에 공유되는 가변 상태가 생길 수 없습니다.

use std::fmt;

use serde_json::Value;

use crate::core::errors::TransformResult;
use crate::domain::models::contracts::Model;
use crate::transformer::caster::{RawValue, TypeTag};

/// 모든 응답에 포함되는 공통 속성 이름
pub const COMMON_ATTRIBUTES: [&str; 3] = ["id", "created_at", "updated_at"];

/// 모델 계약의 getter 하나
pub type Accessor<M> = fn(&M) -> RawValue;

/// COMPUTED 디스크립터 함수: 소유 트랜스포머(협력 객체)와 모델을 받아 와이어 값을 만든다
pub type Compute<C, M> = fn(&C, &M) -> TransformResult<Value>;

/// 디스크립터 종류
pub enum AttributeKind<C, M: ?Sized> {
    Direct(TypeTag),
    Computed(Compute<C, M>),
}

/// 출력 필드 하나의 선언
///
/// ```rust,ignore
/// vec![
///     Attribute::direct("token", TypeTag::String),
///     Attribute::direct("expired_at", TypeTag::DateTime),
///     Attribute::computed("user", |autobot: &TokenAutobot, model| {
///         to_attribute_value(&autobot.user.transform(model.user().as_ref())?)
///     }),
/// ]
/// ```
pub struct Attribute<C, M: ?Sized> {
    name: &'static str,
    kind: AttributeKind<C, M>,
}

impl<C, M: ?Sized> Attribute<C, M> {
    pub fn direct(name: &'static str, tag: TypeTag) -> Self {
        Self {
            name,
            kind: AttributeKind::Direct(tag),
        }
    }

    pub fn computed(name: &'static str, compute: Compute<C, M>) -> Self {
        Self {
            name,
            kind: AttributeKind::Computed(compute),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> &AttributeKind<C, M> {
        &self.kind
    }

    pub(crate) fn into_parts(self) -> (&'static str, AttributeKind<C, M>) {
        (self.name, self.kind)
    }
}

impl<C, M: ?Sized> fmt::Debug for Attribute<C, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            AttributeKind::Direct(tag) => tag.as_str(),
            AttributeKind::Computed(_) => "COMPUTED",
        };
        f.debug_struct("Attribute")
            .field("name", &self.name)
            .field("kind", &kind)
            .finish()
    }
}

/// 공통 속성 디스크립터 (모든 트랜스포머에 고정)
///
/// `id`는 불투명 식별자 문자열, 타임스탬프는 표준 DATETIME 형식입니다.
pub fn common_attributes<C, M: ?Sized>() -> Vec<Attribute<C, M>> {
    vec![
        Attribute::direct("id", TypeTag::String),
        Attribute::direct("created_at", TypeTag::DateTime),
        Attribute::direct("updated_at", TypeTag::DateTime),
    ]
}

/// 필드 이름 → getter 표
///
/// 모델 계약마다 하나씩 정의되며 선언 순서를 유지합니다.
/// 같은 이름을 다시 등록하면 기존 접근자를 대체합니다.
pub struct AccessorTable<M: ?Sized> {
    entries: Vec<(&'static str, Accessor<M>)>,
}

impl<M: ?Sized> AccessorTable<M> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn with(mut self, name: &'static str, accessor: Accessor<M>) -> Self {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = accessor,
            None => self.entries.push((name, accessor)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<Accessor<M>> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, accessor)| *accessor)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }
}

impl<M: ?Sized + Model> AccessorTable<M> {
    /// 공통 속성 getter(`id`, `created_at`, `updated_at`)가 채워진 표
    pub fn for_model() -> Self {
        Self::new()
            .with("id", |model| RawValue::from(model.id()))
            .with("created_at", |model| RawValue::from(model.created_at()))
            .with("updated_at", |model| RawValue::from(model.updated_at()))
    }
}

impl<M: ?Sized> Default for AccessorTable<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// 트랜스포머가 받아들이는 모델 계약
///
/// 계약 trait 객체(`dyn UserModel` 등)에 구현하여 DIRECT 디스크립터가
/// 참조할 수 있는 getter 표를 제공합니다.
pub trait Transformable: Model {
    fn accessors() -> AccessorTable<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample;

    #[test]
    fn test_accessor_table_replaces_same_name() {
        let table: AccessorTable<Sample> = AccessorTable::new()
            .with("code", |_| RawValue::from("first"))
            .with("weight", |_| RawValue::from(3i64))
            .with("code", |_| RawValue::from("second"));

        assert_eq!(table.names(), vec!["code", "weight"]);
        let code = table.get("code").unwrap();
        assert_eq!(code(&Sample), RawValue::from("second"));
        assert!(table.get("volume").is_none());
    }

    #[test]
    fn test_common_attributes_order() {
        let names: Vec<_> = common_attributes::<(), Sample>()
            .iter()
            .map(Attribute::name)
            .collect();

        assert_eq!(names, COMMON_ATTRIBUTES.to_vec());
    }
}
