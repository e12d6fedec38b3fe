//! # Credential Configuration Module
//!
//! 비밀번호 저장 방식과 bcrypt cost 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export PASSWORD_SCHEME="bcrypt"   # bcrypt | plain
//! export BCRYPT_COST="12"           # 4-15 범위
//! ```
//!
//! `plain`은 해싱 없이 비밀번호를 그대로 저장하던 기존 데이터와의 호환을 위한 값입니다.
//! 실제 자격 증명을 다루는 배포에서는 사용하지 마세요.

use std::env;
use super::Environment;

/// 비밀번호 저장 방식
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PasswordScheme {
    /// bcrypt 솔트 해시
    Bcrypt,
    /// 원문 저장 (기존 데이터 호환용)
    Plain,
}

impl PasswordScheme {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "bcrypt" => Ok(PasswordScheme::Bcrypt),
            "plain" | "plaintext" | "none" => Ok(PasswordScheme::Plain),
            _ => Err(format!("Unsupported password scheme: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordScheme::Bcrypt => "bcrypt",
            PasswordScheme::Plain => "plain",
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// `PASSWORD_SCHEME` 값. 설정되지 않았거나 알 수 없는 값이면 bcrypt를 사용합니다.
    pub fn scheme() -> PasswordScheme {
        match env::var("PASSWORD_SCHEME") {
            Ok(value) => PasswordScheme::from_str(&value).unwrap_or_else(|e| {
                log::warn!("{} - bcrypt 사용", e);
                PasswordScheme::Bcrypt
            }),
            Err(_) => PasswordScheme::Bcrypt,
        }
    }

    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 값이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}
