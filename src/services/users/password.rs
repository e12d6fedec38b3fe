//! 비밀번호 저장 방식
//!
//! 저장 형식은 [`PasswordHasher`] 구현에 위임됩니다.
//! 기본은 [`BcryptHasher`]이며, [`PlainHasher`]는 원문을 그대로 저장하던
//! 기존 데이터와의 호환을 위한 구현입니다.

use std::sync::Arc;
use bcrypt::BcryptError;
use crate::{
    config::{PasswordConfig, PasswordScheme},
    errors::errors::AppError,
};

/// 비밀번호 해싱/검증 계약
pub trait PasswordHasher: Send + Sync {
    /// 저장할 형태로 변환합니다.
    fn hash(&self, password: &str) -> Result<String, AppError>;

    /// 입력된 비밀번호가 저장된 값과 일치하는지 확인합니다.
    fn verify(&self, password: &str, stored: &str) -> Result<bool, AppError>;
}

/// bcrypt 솔트 해시
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl PasswordHasher for BcryptHasher {
    /// 72바이트 제한(종료 바이트 포함)을 넘는 비밀번호는 잘라내지 않고 거부합니다.
    fn hash(&self, password: &str) -> Result<String, AppError> {
        let hash_start = std::time::Instant::now();
        let hashed = bcrypt::non_truncating_hash(password, self.cost).map_err(|e| match e {
            BcryptError::Truncation(_) => AppError::ValidationError("Password is too long".to_string()),
            other => AppError::InternalError(format!("비밀번호 해싱 실패: {}", other)),
        })?;

        log::debug!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(hashed)
    }

    /// 저장된 값이 bcrypt 해시가 아니거나 입력이 제한을 넘으면 불일치로 처리합니다.
    fn verify(&self, password: &str, stored: &str) -> Result<bool, AppError> {
        let verify_start = std::time::Instant::now();
        let is_valid = match bcrypt::non_truncating_verify(password, stored) {
            Ok(is_valid) => is_valid,
            Err(BcryptError::Truncation(len)) => {
                log::debug!("Password exceeds bcrypt limit ({} bytes)", len);
                false
            }
            Err(
                e @ (BcryptError::InvalidHash(_)
                | BcryptError::InvalidPrefix(_)
                | BcryptError::InvalidCost(_)
                | BcryptError::InvalidBase64(_)),
            ) => {
                log::warn!("⚠️ 저장된 비밀번호가 bcrypt 형식이 아닙니다: {}", e);
                false
            }
            Err(e) => return Err(AppError::InternalError(format!("비밀번호 검증 실패: {}", e))),
        };

        log::debug!("Password verification took: {:?}", verify_start.elapsed());
        Ok(is_valid)
    }
}

/// 원문 저장 (바이트 단위 완전 일치 비교)
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<String, AppError> {
        Ok(password.to_string())
    }

    fn verify(&self, password: &str, stored: &str) -> Result<bool, AppError> {
        Ok(password == stored)
    }
}

/// `PASSWORD_SCHEME`/`BCRYPT_COST` 설정에 맞는 해셔를 생성합니다.
pub fn hasher_from_config() -> Arc<dyn PasswordHasher> {
    let scheme = PasswordConfig::scheme();
    log::info!("🔐 비밀번호 저장 방식: {}", scheme.as_str());

    match scheme {
        PasswordScheme::Bcrypt => Arc::new(BcryptHasher::new(PasswordConfig::bcrypt_cost())),
        PasswordScheme::Plain => {
            log::warn!("⚠️ 비밀번호가 원문으로 저장됩니다. 운영 환경에서는 사용하지 마세요");
            Arc::new(PlainHasher)
        }
    }
}
