//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 전달하는 구조체들입니다.
//!
//! - **데이터 은닉**: 비밀번호는 어떤 응답에도 포함하지 않음
//! - **일관성**: 모든 JSON 응답은 `ApiResponse` 봉투(`message`, `data`)를 사용
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "message": "Sign-in successful.",
//!   "data": {
//!     "id": "507f1f77bcf86cd799439011",
//!     "firstName": "Ada",
//!     "lastName": null,
//!     "email": "ada@example.com",
//!     "role": "user",
//!     "createdAt": "2024-06-01T10:00:00Z",
//!     "updatedAt": "2024-06-01T10:00:00Z"
//!   }
//! }
//! ```

pub mod user_response;

pub use user_response::{ApiResponse, UserResponse};
