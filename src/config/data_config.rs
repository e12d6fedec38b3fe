//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, HTTP 서버, 저장소(MongoDB), 이벤트 싱크(Redis Streams) 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버 포트 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080)
    }

    /// 바인딩 호스트 (기본값: 127.0.0.1)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 워커 스레드 수 (기본값: 4)
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|w: &usize| *w > 0)
            .unwrap_or(4)
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 사용자 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StorageBackend {
    /// MongoDB `users` 컬렉션
    Mongo,
    /// 프로세스 로컬 메모리 (로컬 실행용, 재시작 시 소멸)
    Memory,
}

impl StorageBackend {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            _ => StorageBackend::Mongo,
        }
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI (기본값: `mongodb://localhost:27017`)
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 데이터베이스 이름 (기본값: `identity_dev`)
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "identity_dev".to_string())
    }

    /// `STORAGE_BACKEND` (mongo | memory, 기본값: mongo)
    pub fn storage_backend() -> StorageBackend {
        env::var("STORAGE_BACKEND")
            .map(|v| StorageBackend::from_str(&v))
            .unwrap_or(StorageBackend::Mongo)
    }
}

/// Redis 연결 설정
pub struct RedisConfig;

impl RedisConfig {
    /// Redis 연결 URL (기본값: `redis://localhost:6379`)
    pub fn url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }
}

/// 이벤트 싱크 종류
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventSinkKind {
    /// Redis Streams (`XADD`)
    Redis,
    /// 메모리에 기록만 하는 싱크 (로컬 실행용)
    Memory,
}

impl EventSinkKind {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => EventSinkKind::Memory,
            _ => EventSinkKind::Redis,
        }
    }
}

/// 사용자 이벤트 발행 설정
pub struct EventConfig;

impl EventConfig {
    /// `EVENT_SINK` (redis | memory, 기본값: redis)
    pub fn sink() -> EventSinkKind {
        env::var("EVENT_SINK")
            .map(|v| EventSinkKind::from_str(&v))
            .unwrap_or(EventSinkKind::Redis)
    }

    /// 스트림 최대 길이 (`MAXLEN ~`, 기본값: 100000)
    pub fn stream_max_len() -> i64 {
        env::var("EVENT_STREAM_MAX_LEN")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n: &i64| *n > 0)
            .unwrap_or(100_000)
    }
}

/// Rate Limiting 설정
#[derive(Debug)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn load() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        let config = Self { per_second, burst_size };
        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용 Origin 목록
    ///
    /// `CORS_ALLOWED_ORIGINS`(쉼표 구분)가 없으면 로컬 프론트엔드 주소를 사용합니다.
    pub fn allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(raw) => Self::parse_origins(&raw),
            Err(_) => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ],
        }
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}
