//! 도메인 이벤트 발행 모듈
//!
//! 계정 서비스와 독립적으로 동작하며, 두 서비스의 호출 순서는 핸들러가 정합니다.

pub mod user_event_publisher;

pub use user_event_publisher::{UserEventPublisher, USER_CREATED_TOPIC};
