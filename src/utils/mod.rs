//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 필수 값 검증, 이메일 정규화, HTML 이스케이프
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{normalize_email, sanitize_optional_text};
//!
//! let email = normalize_email("  Alice@Example.COM ");
//! let first_name = sanitize_optional_text(Some("<b>Alice</b>"));
//! ```

pub mod string_utils;
