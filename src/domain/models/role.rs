//! 사용자 역할과 성별 코드
//!
//! 와이어와 검증 규칙에서는 세 글자(성별은 한 글자) 코드를 사용합니다.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADM")]
    Admin,
    #[serde(rename = "AGT")]
    Agent,
    #[serde(rename = "COU")]
    Courier,
    #[serde(rename = "CST")]
    Customer,
    #[serde(rename = "CSV")]
    CustomerService,
    #[serde(rename = "PKP")]
    PortKeeper,
    #[serde(rename = "WKP")]
    WarehouseKeeper,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Admin,
        Role::Agent,
        Role::Courier,
        Role::Customer,
        Role::CustomerService,
        Role::PortKeeper,
        Role::WarehouseKeeper,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "ADM",
            Role::Agent => "AGT",
            Role::Courier => "COU",
            Role::Customer => "CST",
            Role::CustomerService => "CSV",
            Role::PortKeeper => "PKP",
            Role::WarehouseKeeper => "WKP",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.code() == code)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 성별 (선택 항목)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    pub fn code(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Sex::Male),
            "F" => Some(Sex::Female),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_codes_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
        assert_eq!(Role::from_code("cou"), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_value(Role::WarehouseKeeper).unwrap(), "WKP");
        assert_eq!(serde_json::from_str::<Sex>("\"F\"").unwrap(), Sex::Female);
    }
}
