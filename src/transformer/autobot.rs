//! # Autobot Transformer Base
//!
//! 모든 모델 → 응답 변환이 조립되는 방식을 정의하는 트랜스포머 엔진입니다.
//!
//! ## 구성
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Autobot (구체 트랜스포머)      │ ← 모델 계약, 응답 타입, 기본 디스크립터, 추가 파라미터
//! └──────────────────────────────┘
//!                │ Transformer::new (등록 시점 검증)
//!                ▼
//! ┌──────────────────────────────┐
//! │ Transformer<A>               │ ← 공통 ∪ 기본 디스크립터를 접근자로 해석해 보관
//! └──────────────────────────────┘
//!                │ transform(model)
//!                ▼
//! ┌──────────────────────────────┐
//! │ ResponseFactory::build       │ ← (속성 매핑, 원시 모델, 추가 파라미터) → 응답
//! └──────────────────────────────┘
//! ```
//!
//! ## 등록 시점 검증
//!
//! [`Transformer::new`]는 다음을 한 번만 검사합니다.
//!
//! 1. DIRECT 디스크립터마다 모델 계약의 getter 존재 여부
//! 2. 기본 디스크립터 이름 중복 (공통 속성과 같은 이름은 의도된 덮어쓰기)
//! 3. 디스크립터 이름 집합과 응답 타입이 요구하는 속성 집합의 일치
//!
//! ## 무상태성
//!
//! 트랜스포머는 프로세스 전역에서 `Arc`로 공유됩니다. 생성 이후 읽기 전용이며,
//! `transform`은 입력 모델과 주입된 협력 객체만의 순수 함수입니다.
//! 결과 캐싱은 호출자의 책임입니다.
//!
//! 중첩 위임은 비순환 모델 그래프를 전제로 합니다. 순환 검출은 하지 않습니다.

use std::any::Any;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use log::{debug, trace, warn};
use serde_json::Value;

use crate::core::errors::{TransformError, TransformResult};
use crate::domain::models::contracts::Model;
use crate::transformer::attribute::{
    common_attributes, Accessor, Attribute, AttributeKind, Compute, Transformable,
};
use crate::transformer::caster::{cast, TypeTag};
use crate::transformer::response::{to_attribute_value, AttributeMap, ResponseFactory};

/// 구체 트랜스포머 계약
///
/// 구체 트랜스포머는 모델 계약, 응답 타입, 기본 디스크립터 목록, 추가 생성자 파라미터
/// 수집기만 정의합니다. 공통 속성 해석은 [`Transformer`]가 담당하며 재정의할 수 없습니다.
pub trait Autobot: Send + Sync + Sized + 'static {
    /// 입력 모델 계약 (`dyn UserModel` 등)
    type Model: ?Sized + Transformable + 'static;

    /// 출력 응답 타입
    type Response: ResponseFactory<Model = Self::Model>;

    /// 레지스트리와 로그에 쓰이는 이름
    const NAME: &'static str;

    /// 엔티티 고유 디스크립터 (선언 순서대로 출력)
    fn basic_attributes() -> Vec<Attribute<Self, Self::Model>>;

    /// 응답 생성자에 넘길 추가 파라미터를 모읍니다.
    fn gather_extra(
        &self,
        model: &Self::Model,
    ) -> TransformResult<<Self::Response as ResponseFactory>::Extra>;
}

enum Resolution<C, M: ?Sized> {
    Direct { tag: TypeTag, accessor: Accessor<M> },
    Computed(Compute<C, M>),
}

struct ResolvedAttribute<C, M: ?Sized> {
    name: &'static str,
    resolution: Resolution<C, M>,
}

/// 트랜스포머 (Autobot 베이스)
///
/// 디스크립터를 접근자 함수로 미리 해석해 두고, 호출마다 새 속성 매핑을 만듭니다.
pub struct Transformer<A: Autobot> {
    autobot: A,
    attributes: Vec<ResolvedAttribute<A, A::Model>>,
}

impl<A: Autobot> Transformer<A> {
    /// 디스크립터를 해석하고 구성 오류를 검사합니다.
    ///
    /// # Errors
    ///
    /// * `ConfigurationError` - getter 누락, 기본 디스크립터 이름 중복,
    ///   응답 타입과 속성 집합 불일치
    pub fn new(autobot: A) -> TransformResult<Self> {
        let accessors = <A::Model as Transformable>::accessors();
        let resolve = |attribute: Attribute<A, A::Model>| -> TransformResult<ResolvedAttribute<A, A::Model>> {
            let (name, kind) = attribute.into_parts();
            let resolution = match kind {
                AttributeKind::Direct(tag) => {
                    let accessor = accessors.get(name).ok_or_else(|| {
                        warn!("❌ {}: no getter for attribute `{}`", A::NAME, name);
                        TransformError::configuration(
                            A::NAME,
                            format!("model contract has no getter for attribute `{}`", name),
                        )
                    })?;
                    Resolution::Direct { tag, accessor }
                }
                AttributeKind::Computed(compute) => Resolution::Computed(compute),
            };
            Ok(ResolvedAttribute { name, resolution })
        };

        let mut attributes = Vec::new();
        for attribute in common_attributes::<A, A::Model>() {
            attributes.push(resolve(attribute)?);
        }

        let mut declared = HashSet::new();
        for attribute in A::basic_attributes() {
            let name = attribute.name();
            if !declared.insert(name) {
                return Err(TransformError::configuration(
                    A::NAME,
                    format!("attribute `{}` is declared twice", name),
                ));
            }

            let resolved = resolve(attribute)?;
            match attributes.iter_mut().find(|existing| existing.name == name) {
                Some(slot) => {
                    debug!("{}: attribute `{}` overrides the common attribute", A::NAME, name);
                    *slot = resolved;
                }
                None => attributes.push(resolved),
            }
        }

        Self::check_response_attributes(&attributes)?;

        debug!(
            "{}: resolved attributes [{}]",
            A::NAME,
            attributes.iter().map(|a| a.name).collect::<Vec<_>>().join(", ")
        );

        Ok(Self { autobot, attributes })
    }

    fn check_response_attributes(attributes: &[ResolvedAttribute<A, A::Model>]) -> TransformResult<()> {
        let required = <A::Response as ResponseFactory>::required_attributes();

        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|name| !attributes.iter().any(|a| a.name == *name))
            .collect();
        let unexpected: Vec<&str> = attributes
            .iter()
            .map(|a| a.name)
            .filter(|name| !required.contains(name))
            .collect();

        if missing.is_empty() && unexpected.is_empty() {
            return Ok(());
        }

        let mut problems = Vec::new();
        if !missing.is_empty() {
            problems.push(format!("missing [{}]", missing.join(", ")));
        }
        if !unexpected.is_empty() {
            problems.push(format!("not accepted [{}]", unexpected.join(", ")));
        }
        Err(TransformError::configuration(
            A::NAME,
            format!(
                "attributes do not match response `{}`: {}",
                <A::Response as ResponseFactory>::NAME,
                problems.join("; ")
            ),
        ))
    }

    /// 모델을 응답으로 변환합니다.
    ///
    /// 속성 하나라도 실패하면 전체 호출이 실패합니다. 중첩 트랜스포머의 에러는 그대로 전파됩니다.
    pub fn transform(&self, model: &A::Model) -> TransformResult<A::Response> {
        trace!("{}: transforming model {}", A::NAME, model.id());

        let attributes = self.resolve_attributes(model)?;
        let extra = self.autobot.gather_extra(model)?;
        <A::Response as ResponseFactory>::build(attributes, model, extra)
    }

    /// 공통 ∪ 기본 디스크립터를 선언 순서대로 해석한 새 속성 매핑
    pub fn resolve_attributes(&self, model: &A::Model) -> TransformResult<AttributeMap> {
        let mut resolved = AttributeMap::new();
        for attribute in &self.attributes {
            let value = match &attribute.resolution {
                Resolution::Direct { tag, accessor } => {
                    cast(&accessor(model), *tag).map_err(|failure| failure.on(attribute.name))?
                }
                Resolution::Computed(compute) => compute(&self.autobot, model)?,
            };
            resolved.insert(attribute.name.to_string(), value);
        }
        Ok(resolved)
    }

    /// 타입 소거된 입력을 변환합니다.
    ///
    /// 입력은 `Arc<A::Model>` 또는 `Box<A::Model>`이어야 하며,
    /// 그 외에는 `ContractViolation`으로 실패합니다.
    pub fn transform_any(&self, model: &dyn Any) -> TransformResult<A::Response> {
        if let Some(model) = model.downcast_ref::<Arc<A::Model>>() {
            return self.transform(model.as_ref());
        }
        if let Some(model) = model.downcast_ref::<Box<A::Model>>() {
            return self.transform(model.as_ref());
        }

        warn!("❌ {}: input does not satisfy the model contract", A::NAME);
        Err(TransformError::ContractViolation {
            transformer: A::NAME,
            expected: std::any::type_name::<A::Model>(),
        })
    }

    /// 출력 속성 이름 (선언 순서)
    pub fn attribute_names(&self) -> Vec<&'static str> {
        self.attributes.iter().map(|a| a.name).collect()
    }

    pub fn name(&self) -> &'static str {
        A::NAME
    }

    pub fn autobot(&self) -> &A {
        &self.autobot
    }
}

impl<A: Autobot> fmt::Debug for Transformer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformer")
            .field("name", &A::NAME)
            .field("attributes", &self.attribute_names())
            .finish()
    }
}

/// 레지스트리가 타입을 모른 채 다루는 트랜스포머
pub trait ErasedTransformer: Send + Sync {
    fn name(&self) -> &'static str;

    fn attribute_names(&self) -> Vec<&'static str>;

    /// 타입 소거된 모델을 변환해 응답의 와이어 표현을 돌려줍니다.
    fn transform_value(&self, model: &dyn Any) -> TransformResult<Value>;
}

impl<A: Autobot> ErasedTransformer for Transformer<A> {
    fn name(&self) -> &'static str {
        A::NAME
    }

    fn attribute_names(&self) -> Vec<&'static str> {
        Transformer::attribute_names(self)
    }

    fn transform_value(&self, model: &dyn Any) -> TransformResult<Value> {
        let response = self.transform_any(model)?;
        to_attribute_value(&response)
    }
}
