//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 영속 엔티티들을 정의합니다.
//!
//! - **BSON 직렬화**: `serde`를 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑
//! - **유니크 제약**: `users.email` 유니크 인덱스 (`email_unique`)

pub mod users;
