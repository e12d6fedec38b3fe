//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 의존성을 주입받으며, `main.rs`에서 한 번 조립되어
//! `AppState`를 통해 핸들러에 공유됩니다.
//!
//! # Features
//!
//! - 사용자 생명주기 관리 (생성, 조회, 수정, 삭제)
//! - 이메일/비밀번호 인증
//! - 사용자 생성 이벤트 발행
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{events::UserEventPublisher, users::UserService};
//!
//! let user_service = UserService::new(store, hasher);
//! let notifier = UserEventPublisher::new(sink);
//! ```

pub mod users;
pub mod events;
