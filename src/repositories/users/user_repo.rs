//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당합니다.
//! [`UserStore`]는 서비스 계층이 의존하는 저장소 계약이고,
//! [`MongoUserRepository`]는 MongoDB `users` 컬렉션 기반 구현입니다.
//!
//! ## 특징
//!
//! - **유니크 제약**: `email` 유니크 인덱스가 동시 가입 경쟁의 최종 방어선
//! - **에러 매핑**: 중복 키(11000)는 `ConflictError`, 그 외 장애는 `DatabaseError`
//! - **단건 원자성**: 다중 문서 트랜잭션은 사용하지 않음

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::doc,
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::entities::users::user::User,
    errors::errors::AppError,
};
use super::parse_object_id;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 저장소 계약
///
/// 고유 키(ID)와 유니크 이메일로 접근 가능한 CRUD 저장소입니다.
/// 구현체는 `email` 유니크 제약을 강제해야 하며, 위반 시 `AppError::ConflictError`를 반환합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자를 저장하고 ID가 할당된 사용자를 반환합니다.
    async fn insert(&self, user: User) -> Result<User, AppError>;

    /// 같은 ID의 문서를 통째로 교체합니다. 대상이 없으면 `Ok(false)`.
    async fn replace(&self, user: &User) -> Result<bool, AppError>;

    /// ID로 삭제합니다. 삭제된 문서가 없으면 `Ok(false)`.
    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// 이메일 완전 일치 조회 (정규화하지 않음)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// 전체 조회. 순서는 저장소 고유 순서를 따릅니다.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// - **컬렉션명**: `users`
/// - **인덱스**: `email_unique` (email, UNIQUE)
///
/// ```rust,ignore
/// let repo = MongoUserRepository::new(database);
/// repo.create_indexes().await?;
///
/// let created = repo.insert(user).await?;
/// let found = repo.find_by_email("ada@example.com").await?;
/// ```
#[derive(Clone)]
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(Self::COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    /// 이미 중복 이메일이 존재하면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("📇 {} 컬렉션 인덱스 준비 완료", Self::COLLECTION);
        Ok(())
    }
}

/// 드라이버 에러를 도메인 에러로 변환합니다.
fn map_write_error(e: MongoError) -> AppError {
    if is_duplicate_key(&e) {
        AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
    } else {
        AppError::DatabaseError(e.to_string())
    }
}

fn is_duplicate_key(e: &MongoError) -> bool {
    matches!(
        e.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(map_write_error)?;

        let id = result.inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::DatabaseError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string()))?;
        user.id = Some(id);

        Ok(user)
    }

    async fn replace(&self, user: &User) -> Result<bool, AppError> {
        let id = user.id
            .ok_or_else(|| AppError::ValidationError("ID가 없는 사용자는 교체할 수 없습니다".to_string()))?;

        let result = self.collection()
            .replace_one(doc! { "_id": id }, user)
            .await
            .map_err(map_write_error)?;

        Ok(result.matched_count > 0)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_object_id(id)?;

        let result = self.collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::{bson, error::WriteError};

    fn write_error(code: i32, code_name: &str) -> MongoError {
        let write_error: WriteError = bson::from_document(doc! {
            "code": code,
            "codeName": code_name,
            "errmsg": format!("E{} {}", code, code_name),
        })
        .unwrap();

        MongoError::from(ErrorKind::Write(WriteFailure::WriteError(write_error)))
    }

    #[test]
    fn test_duplicate_key_maps_to_conflict() {
        let err = map_write_error(write_error(DUPLICATE_KEY_CODE, "DuplicateKey"));

        assert!(err.is_conflict());
        assert!(matches!(err, AppError::ConflictError(_)));
    }

    #[test]
    fn test_other_write_errors_map_to_database_error() {
        let err = map_write_error(write_error(121, "DocumentValidationFailure"));

        assert!(matches!(err, AppError::DatabaseError(_)));
        assert!(!is_duplicate_key(&write_error(121, "DocumentValidationFailure")));
    }
}
