//! # Transformer Registry
//!
//! 트랜스포머 싱글톤을 보관하는 컨테이너이자 조립 지점(composition root)입니다.
//!
//! 각 구체 트랜스포머는 [`TransformerRegistry::boot`]에서 정확히 한 번 생성되고,
//! 협력 트랜스포머는 생성자로 주입됩니다. 트랜스포머 로직 안에서 레지스트리를
//! 다시 조회하는 일은 없습니다.
//!
//! ## 조립 순서
//!
//! ```text
//! 1. UserAutobot   → Transformer<UserAutobot>   ("core.transformer.user")
//! 2. TokenAutobot  ← Arc<Transformer<UserAutobot>> 주입
//!                  → Transformer<TokenAutobot>  ("core.transformer.token")
//! ```
//!
//! 등록마다 [`Transformer::new`]의 구성 검사가 실행되므로 잘못된 디스크립터는
//! 첫 요청이 아니라 부팅 시점에 실패합니다.
//!
//! ## 조회
//!
//! | 방식 | 메서드 | 결과 |
//! |------|--------|------|
//! | 타입 | `get::<A>()` / `try_get::<A>()` | `Arc<Transformer<A>>` |
//! | 별칭 | `transform_value(alias, &dyn Any)` | 응답의 와이어 표현 |
//!
//! 부팅이 끝난 레지스트리는 읽기 전용이므로 `Arc<TransformerRegistry>`로 스레드 간에 공유할 수 있습니다.

use std::any::{type_name, Any, TypeId};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use log::{info, warn};
use serde_json::Value;

use crate::core::errors::{TransformError, TransformResult};
use crate::transformer::autobot::{Autobot, ErasedTransformer, Transformer};
use crate::transformer::autobots::{TokenAutobot, UserAutobot};

/// 사용자 트랜스포머 별칭
pub const USER_TRANSFORMER: &str = "core.transformer.user";

/// 토큰 트랜스포머 별칭
pub const TOKEN_TRANSFORMER: &str = "core.transformer.token";

const REGISTRY: &str = "registry";

/// 트랜스포머 싱글톤 컨테이너
#[derive(Default)]
pub struct TransformerRegistry {
    /// 트랜스포머 타입별 인스턴스
    instances: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    /// 별칭별 타입 소거 인스턴스 (같은 `Arc`를 공유)
    aliases: BTreeMap<String, Arc<dyn ErasedTransformer>>,
}

impl TransformerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 기본 트랜스포머를 모두 생성하고 협력 객체를 연결합니다.
    ///
    /// # Errors
    ///
    /// * `ConfigurationError` - 어느 트랜스포머든 구성 검사에 실패한 경우
    pub fn boot() -> TransformResult<Self> {
        let mut registry = Self::new();

        let user = registry.register(USER_TRANSFORMER, Transformer::new(UserAutobot)?)?;
        registry.register(TOKEN_TRANSFORMER, Transformer::new(TokenAutobot::new(user))?)?;

        info!("✅ Transformer registry booted: {}", registry.names().join(", "));
        Ok(registry)
    }

    /// 트랜스포머를 별칭과 함께 등록하고 공유 참조를 돌려줍니다.
    ///
    /// # Errors
    ///
    /// * `ConfigurationError` - 같은 트랜스포머 타입이나 별칭이 이미 등록된 경우
    pub fn register<A: Autobot>(
        &mut self,
        alias: &str,
        transformer: Transformer<A>,
    ) -> TransformResult<Arc<Transformer<A>>> {
        let type_id = TypeId::of::<Transformer<A>>();
        if self.instances.contains_key(&type_id) {
            warn!("❌ Transformer `{}` is already registered", A::NAME);
            return Err(TransformError::configuration(
                A::NAME,
                format!("transformer `{}` is already registered", type_name::<A>()),
            ));
        }
        if self.aliases.contains_key(alias) {
            warn!("❌ Alias `{}` is already taken", alias);
            return Err(TransformError::configuration(
                A::NAME,
                format!("alias `{}` is already registered", alias),
            ));
        }

        let transformer = Arc::new(transformer);
        self.instances.insert(type_id, transformer.clone());
        self.aliases.insert(alias.to_string(), transformer.clone());

        info!("📦 Registered transformer: {} ({})", alias, transformer.attribute_names().join(", "));
        Ok(transformer)
    }

    /// 등록된 트랜스포머를 타입으로 찾습니다.
    pub fn get<A: Autobot>(&self) -> TransformResult<Arc<Transformer<A>>> {
        self.try_get::<A>().ok_or_else(|| {
            TransformError::configuration(
                A::NAME,
                format!("transformer `{}` is not registered", type_name::<A>()),
            )
        })
    }

    pub fn try_get<A: Autobot>(&self) -> Option<Arc<Transformer<A>>> {
        self.instances
            .get(&TypeId::of::<Transformer<A>>())
            .cloned()
            .and_then(|instance| instance.downcast::<Transformer<A>>().ok())
    }

    pub fn contains<A: Autobot>(&self) -> bool {
        self.instances.contains_key(&TypeId::of::<Transformer<A>>())
    }

    /// 등록된 별칭 (이름순)
    pub fn names(&self) -> Vec<&str> {
        self.aliases.keys().map(String::as_str).collect()
    }

    /// 별칭으로 트랜스포머를 찾아 타입 소거된 모델을 변환합니다.
    ///
    /// 모델은 `Arc<dyn UserModel>`, `Box<dyn TokenModel>`처럼 트랜스포머의
    /// 모델 계약을 감싼 형태여야 합니다.
    ///
    /// # Errors
    ///
    /// * `ConfigurationError` - 등록되지 않은 별칭
    /// * `ContractViolation` - 모델이 트랜스포머의 계약을 만족하지 않는 경우
    pub fn transform_value(&self, alias: &str, model: &dyn Any) -> TransformResult<Value> {
        let transformer = self.aliases.get(alias).ok_or_else(|| {
            TransformError::configuration(REGISTRY, format!("no transformer registered as `{}`", alias))
        })?;
        transformer.transform_value(model)
    }
}

impl fmt::Debug for TransformerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformerRegistry")
            .field("transformers", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use serde_json::json;

    use crate::domain::entities::tokens::Token;
    use crate::domain::entities::users::User;
    use crate::domain::models::contracts::{TokenModel, UserModel};
    use crate::domain::models::role::Role;

    fn bob() -> Arc<User> {
        let mut user = User::new(
            "Bob".to_string(),
            "bob@example.com".to_string(),
            "01098765432".to_string(),
            "Busan".to_string(),
            Role::WarehouseKeeper,
        );
        user.id = "u2".to_string();
        Arc::new(user)
    }

    #[test]
    fn test_boot_registers_default_transformers() {
        let registry = TransformerRegistry::boot().unwrap();

        assert!(registry.contains::<UserAutobot>());
        assert!(registry.contains::<TokenAutobot>());
        assert_eq!(registry.names(), vec![TOKEN_TRANSFORMER, USER_TRANSFORMER]);
    }

    #[test]
    fn test_token_transformer_shares_user_singleton() {
        let registry = TransformerRegistry::boot().unwrap();

        let user = registry.get::<UserAutobot>().unwrap();
        let token = registry.get::<TokenAutobot>().unwrap();
        assert!(Arc::ptr_eq(token.autobot().user_transformer(), &user));
        assert!(Arc::ptr_eq(&registry.get::<UserAutobot>().unwrap(), &user));
    }

    #[test]
    fn test_register_twice_is_rejected() {
        let mut registry = TransformerRegistry::new();
        registry.register(USER_TRANSFORMER, Transformer::new(UserAutobot).unwrap()).unwrap();

        let error = registry
            .register("core.transformer.user2", Transformer::new(UserAutobot).unwrap())
            .unwrap_err();
        assert!(matches!(error, TransformError::ConfigurationError { transformer: "user", .. }));
        assert_eq!(registry.names(), vec![USER_TRANSFORMER]);
    }

    #[test]
    fn test_missing_transformer() {
        let registry = TransformerRegistry::new();

        assert!(registry.try_get::<TokenAutobot>().is_none());
        assert!(registry.get::<TokenAutobot>().is_err());
        assert!(registry.transform_value("core.transformer.parcel", &()).is_err());
    }

    #[test]
    fn test_transform_value_by_alias() {
        let registry = TransformerRegistry::boot().unwrap();
        let mut token = Token::issue(bob(), "xyz789".to_string(), Duration::hours(2));
        token.created_at = Utc.with_ymd_and_hms(2023, 3, 1, 12, 0, 0).unwrap();

        let model: Arc<dyn TokenModel> = Arc::new(token);
        let value = registry.transform_value(TOKEN_TRANSFORMER, &model).unwrap();
        assert_eq!(value["token"], json!("xyz789"));
        assert_eq!(value["created_at"], json!("2023-03-01T12:00:00Z"));
        assert_eq!(value["user"]["role"], json!("WKP"));

        let user: Box<dyn UserModel> = Box::new(User::clone(&bob()));
        let value = registry.transform_value(USER_TRANSFORMER, &user).unwrap();
        assert_eq!(value["id"], json!("u2"));
    }

    #[test]
    fn test_transform_value_checks_contract() {
        let registry = TransformerRegistry::boot().unwrap();
        let user: Arc<dyn UserModel> = bob();

        let error = registry.transform_value(TOKEN_TRANSFORMER, &user).unwrap_err();
        assert!(matches!(error, TransformError::ContractViolation { transformer: "token", .. }));
    }
}
