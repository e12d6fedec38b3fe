//! 사용자 생성/수정 요청 DTO
//!
//! 회원가입, 계정 생성, 계정 수정이 공유하는 요청 구조입니다.
//! `userId`는 수정 요청에서만 사용되며 생성 시에는 무시됩니다.
use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 사용자 생성/수정 요청
///
/// 모든 필드는 선택적으로 역직렬화되며, 필수 여부는 각 연산에서 검증합니다.
/// 비밀번호는 역직렬화만 되고 직렬화(이벤트 페이로드 등)에서는 제외됩니다.
#[derive(Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// 이름
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// 성
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// 이메일 주소
    #[validate(required(message = "Email and password are required."))]
    #[serde(default)]
    pub email: Option<String>,

    /// 계정 비밀번호
    #[validate(required(message = "Email and password are required."))]
    #[serde(default, skip_serializing)]
    pub password: Option<String>,

    /// 사용자 ID (수정 요청 전용)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// 역할 (없으면 `user`)
    #[serde(default)]
    pub role: Option<String>,
}

impl fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("user_id", &self.user_id)
            .field("role", &self.role)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_fields() {
        let json = r#"{
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "Ada@Example.com",
            "password": "pw",
            "userId": "507f1f77bcf86cd799439011",
            "role": "admin"
        }"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.first_name.as_deref(), Some("Ada"));
        assert_eq!(request.last_name.as_deref(), Some("Lovelace"));
        assert_eq!(request.email.as_deref(), Some("Ada@Example.com"));
        assert_eq!(request.password.as_deref(), Some("pw"));
        assert_eq!(request.user_id.as_deref(), Some("507f1f77bcf86cd799439011"));
        assert_eq!(request.role.as_deref(), Some("admin"));
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let request: CreateUserRequest = serde_json::from_str("{}").unwrap();

        assert!(request.email.is_none());
        assert!(request.password.is_none());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_password_is_never_serialized() {
        let request = CreateUserRequest {
            email: Some("a@b.com".to_string()),
            password: Some("hunter2".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(!json.contains("password"));
        assert!(json.contains("\"email\":\"a@b.com\""));

        let debug = format!("{:?}", request);
        assert!(!debug.contains("hunter2"));
    }
}
