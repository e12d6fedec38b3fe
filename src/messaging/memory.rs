//! 메모리 기반 이벤트 싱크
//!
//! `EVENT_SINK=memory`로 Redis 없이 서비스를 띄울 때 사용합니다.
//! 제출된 이벤트를 순서대로 보관하고, 단조 증가하는 위치 값을 돌려줍니다.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use crate::errors::errors::{AppError, AppResult};
use super::{DeliveryFuture, EventSink};

/// 제출된 이벤트
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedEvent {
    pub topic: String,
    pub payload: String,
    pub position: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(not(test), allow(dead_code))]
enum FailureMode {
    #[default]
    None,
    Submit,
    Delivery,
}

#[derive(Debug, Default)]
pub struct InMemoryEventSink {
    events: Mutex<Vec<PublishedEvent>>,
    sequence: AtomicU64,
    failure: FailureMode,
}

impl InMemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 제출 단계에서 즉시 실패하는 싱크
    #[cfg(test)]
    pub fn failing_on_submit() -> Self {
        Self { failure: FailureMode::Submit, ..Self::default() }
    }

    /// 제출은 받지만 전달이 실패하는 싱크
    #[cfg(test)]
    pub fn failing_on_delivery() -> Self {
        Self { failure: FailureMode::Delivery, ..Self::default() }
    }

    /// 지금까지 제출된 이벤트 목록
    pub fn events(&self) -> Vec<PublishedEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl EventSink for InMemoryEventSink {
    fn submit(&self, topic: &str, payload: String) -> AppResult<DeliveryFuture> {
        if self.failure == FailureMode::Submit {
            return Err(AppError::PublishError("event sink is not accepting submissions".to_string()));
        }

        let position = format!("0-{}", self.sequence.fetch_add(1, Ordering::SeqCst) + 1);
        self.events
            .lock()
            .map_err(|_| AppError::PublishError("이벤트 버퍼 잠금이 손상되었습니다".to_string()))?
            .push(PublishedEvent {
                topic: topic.to_string(),
                payload,
                position: position.clone(),
            });

        let fail_delivery = self.failure == FailureMode::Delivery;
        Ok(Box::pin(async move {
            if fail_delivery {
                Err(AppError::PublishError("broker did not acknowledge".to_string()))
            } else {
                Ok(position)
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_records_events_with_increasing_positions() {
        let sink = InMemoryEventSink::new();

        let first = sink.submit("user.created", "{\"a\":1}".to_string()).unwrap().await.unwrap();
        let second = sink.submit("user.created", "{\"a\":2}".to_string()).unwrap().await.unwrap();

        assert_eq!(first, "0-1");
        assert_eq!(second, "0-2");

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].topic, "user.created");
        assert_eq!(events[1].payload, "{\"a\":2}");
    }

    #[actix_web::test]
    async fn test_failure_modes() {
        assert!(InMemoryEventSink::failing_on_submit()
            .submit("user.created", String::new())
            .is_err());

        let sink = InMemoryEventSink::failing_on_delivery();
        let delivery = sink.submit("user.created", String::new()).unwrap();
        assert!(delivery.await.is_err());
        assert_eq!(sink.events().len(), 1);
    }
}
