//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **필수 필드 검증**: `validator`의 `required` 규칙 (핸들러에서 400으로 변환)
//! 3. **도메인 검증**: 공백 값, ID 형식 등은 서비스 계층에서 검증

pub mod create_user;
pub mod auth_request;

pub use create_user::CreateUserRequest;
pub use auth_request::{DeleteUserRequest, SignInRequest, UserIdQuery};
