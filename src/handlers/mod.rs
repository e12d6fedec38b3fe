//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 계정 서비스와 이벤트 발행기는 서로를 호출하지 않으며, 두 작업의 순서는 이 계층이 정합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├──────────────────────┬──────────────────────┤
//!   UserService          │ UserEventPublisher   ← Service Layer
//! ├──────────────────────┼──────────────────────┤
//!   UserStore            │ EventSink            ← Repository / Messaging
//! └──────────────────────┴──────────────────────┘
//! ```
//!
//! ## 의존성 주입
//!
//! 서비스는 `main.rs`에서 한 번 조립되어 [`AppState`]로 묶인 뒤
//! `web::Data`를 통해 모든 워커에 공유됩니다.
//!
//! ```rust,ignore
//! let state = web::Data::new(AppState::new(user_service, notifier));
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(state.clone())
//!         .configure(routes::configure_all_routes)
//! })
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! `AppError`의 `ResponseError` 구현이 상태 코드와 `{"error": ...}` 본문을 만듭니다.

pub mod users;
pub mod auth;

use crate::{
    domain::dto::users::request::CreateUserRequest,
    services::{events::UserEventPublisher, users::UserService},
};

/// 핸들러가 공유하는 애플리케이션 상태
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub notifier: UserEventPublisher,
}

impl AppState {
    pub fn new(user_service: UserService, notifier: UserEventPublisher) -> Self {
        Self { user_service, notifier }
    }

    /// 생성 이벤트를 발행합니다.
    ///
    /// 제출 실패는 이미 저장된 계정을 되돌리지 않고, 응답에 실을 경고 문구로 반환합니다.
    pub(crate) fn publish_created(&self, request: &CreateUserRequest) -> Option<String> {
        match self.notifier.notify_created(request) {
            Ok(()) => None,
            Err(e) => {
                log::warn!("⚠️ 사용자 생성 이벤트 제출 실패: {}", e);
                Some(format!("User created, but the creation event was not published: {}", e))
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;
    use actix_web::web;
    use crate::{
        messaging::InMemoryEventSink,
        repositories::users::InMemoryUserRepository,
        services::{
            events::UserEventPublisher,
            users::{PlainHasher, UserService},
        },
    };
    use super::AppState;

    pub enum TestSink {
        Ok,
        FailOnSubmit,
        FailOnDelivery,
    }

    /// 메모리 저장소와 메모리 싱크로 구성된 상태
    pub fn test_state(sink: TestSink) -> (web::Data<AppState>, Arc<InMemoryEventSink>) {
        let sink = Arc::new(match sink {
            TestSink::Ok => InMemoryEventSink::new(),
            TestSink::FailOnSubmit => InMemoryEventSink::failing_on_submit(),
            TestSink::FailOnDelivery => InMemoryEventSink::failing_on_delivery(),
        });

        let user_service = UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(PlainHasher),
        );
        let notifier = UserEventPublisher::new(sink.clone());

        (web::Data::new(AppState::new(user_service, notifier)), sink)
    }
}
