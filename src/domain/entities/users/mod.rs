//! Users Entity Module
//!
//! 사용자 도메인의 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::new(
//!     Some("Ada".to_string()),
//!     Some("Lovelace".to_string()),
//!     "ada@example.com".to_string(),
//!     password_hash,
//!     User::DEFAULT_ROLE.to_string(),
//! );
//! ```

pub mod user;
