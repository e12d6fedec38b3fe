//! 사용자 생성 이벤트 발행
//!
//! 계정 생성이 끝난 뒤 원본 생성 요청을 `user.created` 토픽으로 발행합니다.
//! 전달은 최대 1회(at-most-once) 최선 노력 방식입니다.
//!
//! - 제출 단계 실패 → 호출자에게 `PublishError` 반환
//! - 전달 단계 실패 → 별도 태스크에서 로그만 남기고 재시도하지 않음

use std::sync::Arc;
use crate::{
    domain::dto::users::request::CreateUserRequest,
    errors::errors::{AppError, AppResult},
    messaging::EventSink,
};

/// 사용자 생성 이벤트 토픽
pub const USER_CREATED_TOPIC: &str = "user.created";

#[derive(Clone)]
pub struct UserEventPublisher {
    sink: Arc<dyn EventSink>,
}

impl UserEventPublisher {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self { sink }
    }

    /// 생성 요청을 발행합니다. 브로커 응답을 기다리지 않고 반환합니다.
    ///
    /// 페이로드는 생성 요청 전체에서 비밀번호만 의도적으로 제외한 형태입니다.
    /// 소비자는 자격 증명을 받지 않으며, 제외는 `CreateUserRequest`의
    /// `skip_serializing` 속성이 보장합니다.
    pub fn notify_created(&self, request: &CreateUserRequest) -> AppResult<()> {
        let payload = serde_json::to_string(request)
            .map_err(|e| AppError::PublishError(format!("이벤트 직렬화 실패: {}", e)))?;

        let delivery = self.sink.submit(USER_CREATED_TOPIC, payload)?;

        actix_web::rt::spawn(async move {
            match delivery.await {
                Ok(position) => {
                    log::info!("📨 {} 이벤트 전달 완료 (position: {})", USER_CREATED_TOPIC, position);
                }
                Err(e) => {
                    log::error!("❌ {} 이벤트 전달 실패: {}", USER_CREATED_TOPIC, e);
                }
            }
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messaging::InMemoryEventSink;

    fn signup_request() -> CreateUserRequest {
        CreateUserRequest {
            first_name: Some("Ada".to_string()),
            email: Some("Ada@Example.com".to_string()),
            password: Some("s3cret".to_string()),
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn test_publishes_original_request_without_password() {
        let sink = Arc::new(InMemoryEventSink::new());
        let publisher = UserEventPublisher::new(sink.clone());

        publisher.notify_created(&signup_request()).unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].topic, USER_CREATED_TOPIC);

        let payload: serde_json::Value = serde_json::from_str(&events[0].payload).unwrap();
        assert_eq!(payload["email"], "Ada@Example.com");
        assert_eq!(payload["firstName"], "Ada");
        assert!(payload.get("password").is_none());
    }

    #[actix_web::test]
    async fn test_submit_failure_is_returned() {
        let publisher = UserEventPublisher::new(Arc::new(InMemoryEventSink::failing_on_submit()));

        assert!(matches!(
            publisher.notify_created(&signup_request()),
            Err(AppError::PublishError(_))
        ));
    }

    #[actix_web::test]
    async fn test_delivery_failure_is_not_returned() {
        let sink = Arc::new(InMemoryEventSink::failing_on_delivery());
        let publisher = UserEventPublisher::new(sink.clone());

        assert!(publisher.notify_created(&signup_request()).is_ok());
        assert_eq!(sink.events().len(), 1);
    }
}
