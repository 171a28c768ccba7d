use crate::core::errors::TransformResult;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::models::contracts::UserModel;
use crate::transformer::attribute::Attribute;
use crate::transformer::autobot::Autobot;
use crate::transformer::caster::TypeTag;

/// 사용자 트랜스포머
pub struct UserAutobot;

impl Autobot for UserAutobot {
    type Model = dyn UserModel;
    type Response = UserResponse;
    const NAME: &'static str = "user";

    fn basic_attributes() -> Vec<Attribute<Self, dyn UserModel>> {
        vec![
            Attribute::direct("name", TypeTag::String),
            Attribute::direct("email", TypeTag::String),
            Attribute::direct("phone", TypeTag::String),
            Attribute::direct("address", TypeTag::String),
            Attribute::direct("role", TypeTag::String),
            Attribute::direct("sex", TypeTag::String),
        ]
    }

    fn gather_extra(&self, _model: &dyn UserModel) -> TransformResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use crate::domain::entities::users::User;
    use crate::domain::models::role::{Role, Sex};
    use crate::transformer::autobot::Transformer;

    fn alice() -> User {
        let mut user = User::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "01012345678".to_string(),
            "Seoul".to_string(),
            Role::Courier,
        );
        user.id = "u1".to_string();
        user.created_at = Utc.with_ymd_and_hms(2022, 5, 1, 9, 30, 0).unwrap();
        user.updated_at = user.created_at;
        user
    }

    #[test]
    fn test_user_response_wire_shape() {
        let transformer = Transformer::new(UserAutobot).unwrap();
        let response = transformer.transform(&alice()).unwrap();

        assert_eq!(response.role(), Some(Role::Courier));
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            json!({
                "id": "u1",
                "created_at": "2022-05-01T09:30:00Z",
                "updated_at": "2022-05-01T09:30:00Z",
                "name": "Alice",
                "email": "alice@example.com",
                "phone": "01012345678",
                "address": "Seoul",
                "role": "COU",
                "sex": null,
            })
            .to_string()
        );
    }

    #[test]
    fn test_sex_code_when_present() {
        let transformer = Transformer::new(UserAutobot).unwrap();
        let response = transformer.transform(&alice().with_sex(Sex::Female)).unwrap();

        assert_eq!(response.sex.as_deref(), Some("F"));
    }
}
