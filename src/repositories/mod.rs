//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserStore`](users::UserStore) trait에만 의존하며,
//! 구체 구현은 `main.rs`에서 `STORAGE_BACKEND` 설정에 따라 선택되어 주입됩니다.

pub mod users;
