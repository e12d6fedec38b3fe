//! User HTTP Handlers
//!
//! 사용자 CRUD 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 모든 경로는 `/api/v1` 스코프 아래에 등록됩니다.
//!
//! # Endpoints
//!
//! - `GET /api/v1/` - 서비스 응답 확인
//! - `POST /api/v1/create` - 계정 생성 + `user.created` 발행
//! - `PUT /api/v1/update` - 계정 전체 수정
//! - `DELETE /api/v1/delete` - 계정 삭제 (`{"userId": "..."}`)
//! - `GET /api/v1/get?userId=` - 단건 조회
//! - `GET /api/v1/users` - 전체 목록
use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;
use crate::{
    domain::dto::users::{
        request::{CreateUserRequest, DeleteUserRequest, UserIdQuery},
        response::{ApiResponse, UserResponse},
    },
    errors::errors::AppError,
    services::users::CreateUserOutcome,
};
use super::AppState;

/// 서비스 응답 확인용 루트 핸들러
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hello World!")
}

#[post("/create")]
pub async fn create_user(
    state: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();

    match state.user_service.create_user(request.clone()).await? {
        CreateUserOutcome::Created(user) => {
            log::info!("✅ 사용자 생성: {}", user.email);
            let warning = state.publish_created(&request);

            Ok(HttpResponse::Ok().json(
                ApiResponse::<()>::message_only("User created successfully").with_warning(warning),
            ))
        }
        CreateUserOutcome::AlreadyExists => {
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::message_only("User already exists")))
        }
    }
}

#[put("/update")]
pub async fn update_user(
    state: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    state.user_service.update_user(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message_only("User updated successfully")))
}

#[delete("/delete")]
pub async fn delete_user(
    state: web::Data<AppState>,
    payload: web::Json<DeleteUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user_id = payload.user_id.as_deref().unwrap_or_default();
    state.user_service.delete_user(user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message_only("User deleted successfully")))
}

#[get("/get")]
pub async fn get_user(
    state: web::Data<AppState>,
    query: web::Query<UserIdQuery>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.get_user(&query.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "User retrieved successfully",
        UserResponse::from(user),
    )))
}

#[get("/users")]
pub async fn list_users(
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let users = state.user_service.list_users().await?;

    let message = if users.is_empty() {
        "No users found"
    } else {
        "Users retrieved successfully"
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(message, users)))
}
