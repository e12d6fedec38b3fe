//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당합니다.
//!
//! # Features
//!
//! - 사용자 등록 (이메일 정규화, 중복 방지, 이름 이스케이프)
//! - 사용자 수정/삭제/조회
//! - 이메일/비밀번호 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::{hasher_from_config, UserService};
//!
//! let service = UserService::new(store, hasher_from_config());
//! let outcome = service.create_user(request).await?;
//! ```

pub mod password;
pub mod user_service;

pub use password::{hasher_from_config, BcryptHasher, PasswordHasher, PlainHasher};
pub use user_service::{CreateUserOutcome, UserService};
