//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속 엔티티 (User)
//! └── dto       - 요청/응답 데이터 전송 객체
//!      │
//!      ▼
//! Services (UserService, UserEventPublisher)
//!      │
//!      ▼
//! Repositories / Messaging
//! ```

pub mod entities;
pub mod dto;
