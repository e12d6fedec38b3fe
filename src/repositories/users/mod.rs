//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserStore`](user_repo::UserStore) 계약과 두 가지 구현을 제공합니다.
//!
//! - [`MongoUserRepository`](user_repo::MongoUserRepository) - 운영용 MongoDB 저장소
//! - [`InMemoryUserRepository`](memory_repo::InMemoryUserRepository) - 로컬 실행/테스트용
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
//! let user = store.find_by_email("user@example.com").await?;
//! ```

pub mod user_repo;
pub mod memory_repo;

pub use user_repo::{MongoUserRepository, UserStore};
pub use memory_repo::InMemoryUserRepository;

use mongodb::bson::oid::ObjectId;
use crate::errors::errors::AppError;

/// 사용자 ID 문자열(24자리 16진수)을 ObjectId로 변환합니다.
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id.trim())
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}
