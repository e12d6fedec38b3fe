//! # Configuration Module
//!
//! 서비스 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, 개발 환경에서 안전한 기본값을 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, 이벤트 싱크, Rate Limit, CORS 설정
//! - [`auth_config`] - 비밀번호 저장 방식과 bcrypt cost 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소
//! export STORAGE_BACKEND="mongo"        # mongo | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="identity"
//!
//! # 이벤트
//! export EVENT_SINK="redis"             # redis | memory
//! export REDIS_URL="redis://localhost:6379"
//!
//! # 비밀번호
//! export PASSWORD_SCHEME="bcrypt"       # bcrypt | plain
//! export BCRYPT_COST="12"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
