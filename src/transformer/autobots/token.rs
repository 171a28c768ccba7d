use std::sync::Arc;

use crate::core::errors::TransformResult;
use crate::domain::dto::tokens::response::{TokenOwner, TokenResponse};
use crate::domain::models::contracts::TokenModel;
use crate::transformer::attribute::Attribute;
use crate::transformer::autobot::{Autobot, Transformer};
use crate::transformer::autobots::user::UserAutobot;
use crate::transformer::caster::TypeTag;
use crate::transformer::response::to_attribute_value;

/// 인증 토큰 트랜스포머
///
/// 토큰 소유자는 주입된 사용자 트랜스포머에 위임하여 `user` 필드로 중첩합니다.
/// 같은 사용자 트랜스포머 인스턴스를 레지스트리와 공유합니다.
pub struct TokenAutobot {
    user: Arc<Transformer<UserAutobot>>,
}

impl TokenAutobot {
    pub fn new(user: Arc<Transformer<UserAutobot>>) -> Self {
        Self { user }
    }

    pub fn user_transformer(&self) -> &Arc<Transformer<UserAutobot>> {
        &self.user
    }
}

impl Autobot for TokenAutobot {
    type Model = dyn TokenModel;
    type Response = TokenResponse;
    const NAME: &'static str = "token";

    fn basic_attributes() -> Vec<Attribute<Self, dyn TokenModel>> {
        vec![
            Attribute::direct("token", TypeTag::String),
            Attribute::direct("expired_at", TypeTag::DateTime),
            Attribute::computed("user", |autobot, model| {
                let owner = model.user();
                let response = autobot.user.transform(owner.as_ref())?;
                to_attribute_value(&response)
            }),
        ]
    }

    fn gather_extra(&self, model: &dyn TokenModel) -> TransformResult<TokenOwner> {
        let owner = model.user();
        Ok(TokenOwner {
            user_id: owner.id().to_string(),
            role: owner.role(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use serde_json::{json, Value};

    use crate::domain::entities::tokens::Token;
    use crate::domain::entities::users::User;
    use crate::domain::models::role::Role;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    fn alice() -> Arc<User> {
        let mut user = User::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "01012345678".to_string(),
            "Seoul".to_string(),
            Role::Courier,
        );
        user.id = "u1".to_string();
        user.created_at = at(2022, 1, 1);
        user.updated_at = at(2022, 6, 1);
        Arc::new(user)
    }

    fn sample_token() -> Token {
        Token {
            id: "t1".to_string(),
            token: "abc123".to_string(),
            expired_at: at(2024, 1, 1),
            user: alice(),
            created_at: at(2023, 1, 1),
            updated_at: at(2023, 6, 1),
        }
    }

    fn transformers() -> (Arc<Transformer<UserAutobot>>, Transformer<TokenAutobot>) {
        let user = Arc::new(Transformer::new(UserAutobot).unwrap());
        let token = Transformer::new(TokenAutobot::new(user.clone())).unwrap();
        (user, token)
    }

    #[test]
    fn test_token_response_wire_shape() {
        let (_, transformer) = transformers();
        let response = transformer.transform(&sample_token()).unwrap();

        let wire = serde_json::to_value(&response).unwrap();
        assert_eq!(
            wire,
            json!({
                "id": "t1",
                "created_at": "2023-01-01T00:00:00Z",
                "updated_at": "2023-06-01T00:00:00Z",
                "token": "abc123",
                "expired_at": "2024-01-01T00:00:00Z",
                "user": {
                    "id": "u1",
                    "created_at": "2022-01-01T00:00:00Z",
                    "updated_at": "2022-06-01T00:00:00Z",
                    "name": "Alice",
                    "email": "alice@example.com",
                    "phone": "01012345678",
                    "address": "Seoul",
                    "role": "COU",
                    "sex": null,
                },
            })
        );

        let keys: Vec<&str> = match &wire {
            Value::Object(map) => map.keys().map(String::as_str).collect(),
            _ => unreachable!(),
        };
        assert_eq!(keys, vec!["id", "created_at", "updated_at", "token", "expired_at", "user"]);
    }

    #[test]
    fn test_nested_user_matches_user_transformer() {
        let (user, transformer) = transformers();
        let token = sample_token();

        let nested = transformer.transform(&token).unwrap().user;
        let direct = user.transform(token.user.as_ref()).unwrap();
        assert_eq!(nested, direct);
    }

    #[test]
    fn test_extra_parameters_reach_response() {
        let (_, transformer) = transformers();
        let response = transformer.transform(&sample_token()).unwrap();

        assert_eq!(response.owner().user_id, "u1");
        assert_eq!(response.owner().role, Role::Courier);
        assert!(!response.is_expired_at(at(2023, 12, 31)));
        assert!(response.is_expired_at(at(2024, 1, 1)));
    }

    #[test]
    fn test_response_is_a_snapshot() {
        let (_, transformer) = transformers();
        let mut token = sample_token();

        let first = transformer.transform(&token).unwrap();
        let again = transformer.transform(&token).unwrap();
        assert_eq!(first, again);

        token.expired_at = token.expired_at + Duration::days(30);
        assert_eq!(first.expired_at, "2024-01-01T00:00:00Z");
        assert_ne!(transformer.transform(&token).unwrap(), first);
    }

    fn numbered_token(i: usize) -> Token {
        let mut user = User::new(
            format!("Courier {}", i),
            format!("courier{}@example.com", i),
            format!("0100000{}", i),
            "Incheon".to_string(),
            Role::Courier,
        );
        user.id = format!("u{}", i);

        Token {
            id: format!("t{}", i),
            token: format!("secret-{}", i),
            expired_at: at(2024, 1, 1) + Duration::hours(i as i64),
            user: Arc::new(user),
            created_at: at(2023, 1, 1),
            updated_at: at(2023, 6, 1),
        }
    }

    #[test]
    fn test_concurrent_transforms_are_independent() {
        let (_, transformer) = transformers();
        let transformer = &transformer;

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    scope.spawn(move || {
                        let token = numbered_token(i);
                        let responses = (0..50)
                            .map(|_| transformer.transform(&token))
                            .collect::<Result<Vec<_>, _>>();
                        (i, responses)
                    })
                })
                .collect();

            for handle in handles {
                let (i, responses) = handle.join().unwrap();
                for response in responses.unwrap() {
                    assert_eq!(response.id, format!("t{}", i));
                    assert_eq!(response.token, format!("secret-{}", i));
                    assert_eq!(response.user.id, format!("u{}", i));
                    assert_eq!(response.user.name, format!("Courier {}", i));
                    assert_eq!(response.owner().user_id, format!("u{}", i));
                }
            }
        });
    }

    #[test]
    fn test_user_transformer_is_shared() {
        let (user, transformer) = transformers();

        assert!(Arc::ptr_eq(transformer.autobot().user_transformer(), &user));
    }
}
