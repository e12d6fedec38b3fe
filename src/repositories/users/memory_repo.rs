//! 메모리 기반 사용자 저장소
//!
//! `STORAGE_BACKEND=memory`로 MongoDB 없이 서비스를 띄울 때 사용합니다.
//! MongoDB 구현과 같은 규칙(ObjectId 할당, 이메일 유니크 제약, 삽입 순서 유지)을 따릅니다.

use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::{
    domain::entities::users::user::User,
    errors::errors::AppError,
};
use super::{parse_object_id, user_repo::UserStore};

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<User>>, AppError> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금이 손상되었습니다".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<User>>, AppError> {
        self.users
            .write()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금이 손상되었습니다".to_string()))
    }
}

fn email_conflict() -> AppError {
    AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.write()?;

        if users.iter().any(|u| u.email == user.email) {
            return Err(email_conflict());
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }

    async fn replace(&self, user: &User) -> Result<bool, AppError> {
        let id = user.id
            .ok_or_else(|| AppError::ValidationError("ID가 없는 사용자는 교체할 수 없습니다".to_string()))?;
        let mut users = self.write()?;

        if users.iter().any(|u| u.id != Some(id) && u.email == user.email) {
            return Err(email_conflict());
        }

        match users.iter_mut().find(|u| u.id == Some(id)) {
            Some(slot) => {
                *slot = user.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_object_id(id)?;
        let mut users = self.write()?;

        let before = users.len();
        users.retain(|u| u.id != Some(object_id));

        Ok(users.len() != before)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = parse_object_id(id)?;

        Ok(self.read()?.iter().find(|u| u.id == Some(object_id)).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.read()?.iter().find(|u| u.email == email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.read()?.clone())
    }
}
