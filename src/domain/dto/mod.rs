//! # Data Transfer Objects Module
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 요청/응답 구조체를 정의합니다.
//! JSON 필드명은 기존 클라이언트와의 호환을 위해 camelCase를 사용합니다.

pub mod users;

pub use users::*;
