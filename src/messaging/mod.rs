//! 메시지 싱크 계층 모듈
//!
//! 토픽 이름으로 키가 지정된 비동기 발행 싱크를 추상화합니다.
//!
//! # 주요 기능
//!
//! - [`EventSink::submit`] - 동기적 제출. 실패 시 즉시 `PublishError`
//! - [`DeliveryFuture`] - 전달 완료 시 위치(offset)를 돌려주는 future
//! - [`redis::RedisStreamSink`] - Redis Streams 구현
//! - [`memory::InMemoryEventSink`] - 로컬 실행용 구현
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! let delivery = sink.submit("user.created", payload)?;   // 제출 실패는 여기서
//! actix_web::rt::spawn(async move {
//!     match delivery.await {
//!         Ok(position) => log::info!("delivered at {}", position),
//!         Err(e) => log::error!("delivery failed: {}", e),
//!     }
//! });
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! EVENT_SINK=redis                  # redis | memory
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
pub mod memory;

pub use self::redis::{RedisClient, RedisStreamSink};
pub use self::memory::{InMemoryEventSink, PublishedEvent};

use futures_util::future::BoxFuture;
use crate::errors::errors::AppResult;

/// 전달 결과 future. 성공 시 브로커가 부여한 위치를 반환합니다.
pub type DeliveryFuture = BoxFuture<'static, AppResult<String>>;

/// 토픽 기반 발행 싱크
pub trait EventSink: Send + Sync {
    /// 이벤트를 제출합니다.
    ///
    /// 반환된 future는 호출자가 기다리지 않아도 되며, 별도 태스크에서 폴링될 수 있습니다.
    fn submit(&self, topic: &str, payload: String) -> AppResult<DeliveryFuture>;
}
