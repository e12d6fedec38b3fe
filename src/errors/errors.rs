//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 사용자 디렉터리와 이벤트 발행 계층을 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 필수 필드 누락, 잘못된 ID 형식 |
//! | `NotFound` | 404 Not Found | ID/이메일 조회 실패 |
//! | `ConflictError` | 409 Conflict | 이메일 유니크 제약 위반 |
//! | `AuthenticationError` | 401 Unauthorized | 비밀번호 불일치 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 장애 |
//! | `PublishError` | 500 Internal Server Error | 이벤트 제출 실패 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 중복 이메일로 인한 생성 거부는 에러가 아니라
//! [`CreateUserOutcome::AlreadyExists`](crate::services::users::user_service::CreateUserOutcome)
//! 로 표현됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! async fn get_user(&self, id: &str) -> Result<User, AppError> {
//!     self.store
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("User not found".to_string()))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 이벤트 제출 실패 에러 (500 Internal Server Error)
    ///
    /// 메시지 싱크에 동기적으로 제출하지 못한 경우에만 발생합니다.
    /// 비동기 전달 실패는 로그로만 남습니다.
    #[error("Publish error: {0}")]
    PublishError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 저장소 유니크 제약 위반 여부
    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::ConflictError(_))
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 원인을 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
