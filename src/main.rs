//! 사용자 식별 서비스 실행 진입점
//!
//! 환경 파일 로드, 로깅 초기화, 저장소/싱크 선택, 서비스 조립 후 HTTP 서버를 시작합니다.
//!
//! ```bash
//! PROFILE=dev cargo run                                   # .env.dev 로드
//! STORAGE_BACKEND=memory EVENT_SINK=memory cargo run      # 외부 의존성 없이 실행
//! ```

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use identity_service::config::{
    CorsConfig, DatabaseConfig, EventConfig, EventSinkKind, RateLimitConfig, RedisConfig,
    ServerConfig, StorageBackend,
};
use identity_service::db::Database;
use identity_service::errors::AppError;
use identity_service::handlers::AppState;
use identity_service::messaging::{EventSink, InMemoryEventSink, RedisClient, RedisStreamSink};
use identity_service::repositories::users::{InMemoryUserRepository, MongoUserRepository, UserStore};
use identity_service::routes::configure_all_routes;
use identity_service::services::events::UserEventPublisher;
use identity_service::services::users::{hasher_from_config, UserService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 식별 서비스 시작중...");

    let state = build_app_state().await.map_err(|e| {
        error!("❌ 서비스 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(web::Data::new(state)).await
}

/// 저장소, 해셔, 이벤트 싱크를 설정에 따라 생성하고 서비스를 조립합니다.
async fn build_app_state() -> Result<AppState, AppError> {
    let store = initialize_user_store().await?;
    let sink = initialize_event_sink().await?;

    let user_service = UserService::new(store, hasher_from_config());
    let notifier = UserEventPublisher::new(sink);

    Ok(AppState::new(user_service, notifier))
}

async fn initialize_user_store() -> Result<Arc<dyn UserStore>, AppError> {
    match DatabaseConfig::storage_backend() {
        StorageBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Arc::new(Database::connect().await?);
            let repo = MongoUserRepository::new(database);
            repo.create_indexes().await?;

            Ok(Arc::new(repo))
        }
        StorageBackend::Memory => {
            info!("🧪 메모리 사용자 저장소 사용 (재시작 시 데이터 소멸)");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
    }
}

async fn initialize_event_sink() -> Result<Arc<dyn EventSink>, AppError> {
    match EventConfig::sink() {
        EventSinkKind::Redis => {
            info!("📡 Redis 연결 중...");

            let redis = Arc::new(RedisClient::connect(&RedisConfig::url()).await?);
            Ok(Arc::new(RedisStreamSink::new(redis, EventConfig::stream_max_len())))
        }
        EventSinkKind::Memory => {
            info!("🧪 메모리 이벤트 싱크 사용");
            Ok(Arc::new(InMemoryEventSink::new()))
        }
    }
}

async fn start_http_server(state: web::Data<AppState>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다 (0 값 불가)"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(workers)
        .run()
        .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
