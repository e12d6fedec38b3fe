//! 사용자 관련 DTO 모듈
//!
//! - [`request`] - 생성/수정/로그인/삭제 요청
//! - [`response`] - 공개 사용자 뷰와 응답 봉투

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
