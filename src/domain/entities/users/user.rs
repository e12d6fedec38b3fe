//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! `users` 컬렉션의 문서 구조와 1:1로 대응합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 시스템의 유일한 영속 엔티티입니다.
/// `email`은 전체 컬렉션에서 유니크하며, 생성 시 정규화(trim + 소문자)되어 저장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 이름 (선택)
    #[serde(default)]
    pub first_name: Option<String>,
    /// 성 (선택)
    #[serde(default)]
    pub last_name: Option<String>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 저장된 비밀번호 표현 (설정된 해셔의 출력)
    pub password: String,
    /// 사용자 역할 (자유 형식 태그)
    pub role: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 역할이 지정되지 않았을 때 사용하는 기본 역할
    pub const DEFAULT_ROLE: &'static str = "user";

    /// 아직 저장되지 않은 새 사용자를 만듭니다. ID는 저장소가 할당합니다.
    pub fn new(
        first_name: Option<String>,
        last_name: Option<String>,
        email: String,
        password: String,
        role: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            first_name,
            last_name,
            email,
            password,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
