//! API 라우트 설정 모듈
//!
//! 모든 사용자 API는 `/api/v1` 스코프 아래에 등록되며,
//! 로드밸런서용 헬스체크는 루트의 `/health`에 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(state.clone())
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1")
            // NormalizePath::trim 적용 여부와 무관하게 `/api/v1`, `/api/v1/` 모두 매칭
            .service(web::resource(["", "/"]).route(web::get().to(handlers::users::home)))
            .configure(configure_user_routes)
            .configure(configure_auth_routes)
    );
}

/// 사용자 CRUD 라우트
///
/// # Available Routes
///
/// - `POST /api/v1/create`
/// - `PUT /api/v1/update`
/// - `DELETE /api/v1/delete`
/// - `GET /api/v1/get?userId=`
/// - `GET /api/v1/users`
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/create \
///   -H "Content-Type: application/json" \
///   -d '{"firstName":"Ada","email":"ada@example.com","password":"s3cret"}'
///
/// curl "http://localhost:8080/api/v1/get?userId=507f1f77bcf86cd799439011"
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::create_user)
        .service(handlers::users::update_user)
        .service(handlers::users::delete_user)
        .service(handlers::users::get_user)
        .service(handlers::users::list_users);
}

/// 인증 관련 라우트
///
/// - `POST /api/v1/signin` - 이메일/비밀번호 로그인
/// - `POST /api/v1/signup` - 회원가입
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::sign_in)
        .service(handlers::auth::sign_up);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "identity_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "identity_service");
    }
}
