//! 사용자 식별 서비스
//!
//! 사용자 계정의 생성, 조회, 수정, 삭제와 이메일/비밀번호 검증을 제공하고,
//! 계정 생성 후 `user.created` 이벤트를 발행하는 마이크로서비스입니다.
//!
//! # Features
//!
//! - **계정 관리**: 이메일 정규화, 중복 방지, 이름 HTML 이스케이프
//! - **인증**: 이메일/비밀번호 검증 (bcrypt 기본)
//! - **이벤트 발행**: Redis Streams 기반 최선 노력 발행
//! - **MongoDB**: 사용자 데이터 영구 저장 (이메일 유니크 인덱스)
//! - **명시적 조립**: `main.rs`에서 생성자 주입, 전역 컨테이너 없음
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (/api/v1)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 생성 후 발행 순서 결정
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← UserService / UserEventPublisher
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Repositories /  │ ← UserStore / EventSink
//! │   Messaging     │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소 / 스트림
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use identity_service::repositories::users::InMemoryUserRepository;
//! use identity_service::services::users::{BcryptHasher, CreateUserOutcome, UserService};
//!
//! let service = UserService::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(BcryptHasher::new(12)),
//! );
//!
//! if let CreateUserOutcome::Created(user) = service.create_user(request).await? {
//!     println!("created {}", user.email);
//! }
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod messaging;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
