//! Authentication HTTP Handlers
//!
//! 이메일/비밀번호 로그인과 회원가입 엔드포인트입니다.
//! 토큰이나 세션은 발급하지 않으며, 성공 시 공개 사용자 뷰를 반환합니다.
//!
//! # Endpoints
//!
//! - `POST /api/v1/signin` - 이메일/비밀번호 검증
//! - `POST /api/v1/signup` - 계정 생성 + `user.created` 발행
use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::{
    domain::dto::users::{
        request::{CreateUserRequest, SignInRequest},
        response::{ApiResponse, UserResponse},
    },
    errors::errors::AppError,
    services::users::CreateUserOutcome,
};
use super::AppState;

/// 로그인
///
/// 존재하지 않는 이메일과 비밀번호 불일치는 모두 `401`로 응답하여
/// 가입 여부가 노출되지 않도록 합니다. 로그에는 구분해서 남깁니다.
#[post("/signin")]
pub async fn sign_in(
    state: web::Data<AppState>,
    payload: web::Json<SignInRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let email = payload.email.as_deref().unwrap_or_default();
    let password = payload.password.as_deref().unwrap_or_default();

    let user = match state.user_service.sign_in(email, password).await {
        Ok(user) => user,
        Err(AppError::NotFound(_)) => {
            log::warn!("로그인 실패 - 존재하지 않는 사용자: {}", email);
            return Err(AppError::AuthenticationError("Invalid credentials.".to_string()));
        }
        Err(e) => return Err(e),
    };

    log::info!("로그인 성공 - 사용자: {}", user.email);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Sign-in successful.",
        UserResponse::from(user),
    )))
}

/// 회원가입
///
/// 생성된 레코드를 공개 뷰로 반환하고 원본 요청을 `user.created`로 발행합니다.
/// 발행 제출이 실패해도 응답은 `200`이며 `warning` 필드로 알립니다.
#[post("/signup")]
pub async fn sign_up(
    state: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let request = payload.into_inner();

    match state.user_service.create_user(request.clone()).await? {
        CreateUserOutcome::Created(user) => {
            log::info!("✅ 회원가입 완료: {}", user.email);
            let warning = state.publish_created(&request);

            Ok(HttpResponse::Ok().json(
                ApiResponse::success("User created successfully", UserResponse::from(user))
                    .with_warning(warning),
            ))
        }
        CreateUserOutcome::AlreadyExists => {
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::message_only("User already exists")))
        }
    }
}
