//! 인증 및 단건 조작 요청 DTO
//!
//! 로그인, 삭제, 단건 조회 요청 정보를 매핑합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 로그인 요청 구조체
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(required(message = "Email and password are required."))]
    #[serde(default)]
    pub email: Option<String>,

    #[validate(required(message = "Email and password are required."))]
    #[serde(default)]
    pub password: Option<String>,
}

/// 삭제 요청 본문 (`{"userId": "..."}`)
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserRequest {
    #[validate(required(message = "userId is required"))]
    #[serde(default)]
    pub user_id: Option<String>,
}

/// 단건 조회 쿼리 (`?userId=...`)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_request_requires_both_fields() {
        let only_email: SignInRequest = serde_json::from_str(r#"{"email": "a@b.com"}"#).unwrap();
        assert!(only_email.validate().is_err());

        let both: SignInRequest =
            serde_json::from_str(r#"{"email": "a@b.com", "password": "x"}"#).unwrap();
        assert!(both.validate().is_ok());
    }

    #[test]
    fn test_delete_request_uses_camel_case() {
        let request: DeleteUserRequest =
            serde_json::from_str(r#"{"userId": "507f1f77bcf86cd799439011"}"#).unwrap();
        assert_eq!(request.user_id.as_deref(), Some("507f1f77bcf86cd799439011"));
        assert!(request.validate().is_ok());

        let empty: DeleteUserRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.validate().is_err());
    }
}
