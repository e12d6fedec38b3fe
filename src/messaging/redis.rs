//! Redis Streams 기반 이벤트 싱크
//!
//! 토픽 이름을 스트림 키로 사용하여 `XADD`로 이벤트를 추가합니다.
//! `XADD`가 돌려주는 엔트리 ID(`<ms>-<seq>`)가 전달 위치(offset)입니다.
//!
//! ```text
//! XADD user.created MAXLEN ~ 100000 * payload {"email":"a@b.com",...}
//! ```

use std::sync::Arc;
use redis::Client;
use crate::errors::errors::{AppError, AppResult};
use super::{DeliveryFuture, EventSink};

/// 스트림 엔트리에서 페이로드를 담는 필드명
pub const PAYLOAD_FIELD: &str = "payload";

/// Redis 클라이언트 래퍼
#[derive(Clone, Debug)]
pub struct RedisClient {
    client: Client,
}

impl RedisClient {
    /// 주어진 URL로 연결하고 `PING`으로 서버 가용성을 확인합니다.
    pub async fn connect(redis_url: &str) -> Result<Self, AppError> {
        let client = Client::open(redis_url)
            .map_err(|e| AppError::PublishError(format!("Redis URL 파싱 실패: {}", e)))?;

        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::PublishError(format!("Redis 연결 실패: {}", e)))?;
        redis::cmd("PING")
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| AppError::PublishError(format!("Redis PING 실패: {}", e)))?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    /// 스트림에 엔트리를 추가하고 엔트리 ID를 반환합니다.
    pub async fn xadd(
        &self,
        stream: &str,
        max_len: i64,
        field: &str,
        value: &str,
    ) -> Result<String, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        // MAXLEN ~ 로 근사 트리밍
        redis::cmd("XADD")
            .arg(stream)
            .arg("MAXLEN")
            .arg("~")
            .arg(max_len)
            .arg("*")
            .arg(field)
            .arg(value)
            .query_async(&mut conn)
            .await
    }
}

/// Redis Streams 이벤트 싱크
pub struct RedisStreamSink {
    redis: Arc<RedisClient>,
    max_len: i64,
}

impl RedisStreamSink {
    pub fn new(redis: Arc<RedisClient>, max_len: i64) -> Self {
        Self { redis, max_len }
    }
}

impl EventSink for RedisStreamSink {
    fn submit(&self, topic: &str, payload: String) -> AppResult<DeliveryFuture> {
        if topic.trim().is_empty() {
            return Err(AppError::PublishError("토픽 이름이 비어 있습니다".to_string()));
        }

        let redis = Arc::clone(&self.redis);
        let stream = topic.to_string();
        let max_len = self.max_len;

        Ok(Box::pin(async move {
            redis
                .xadd(&stream, max_len, PAYLOAD_FIELD, &payload)
                .await
                .map_err(|e| AppError::PublishError(e.to_string()))
        }))
    }
}
