//! 문자열 검증 및 정리 유틸리티
//!
//! 사용자 입력 정리에 쓰이는 함수들입니다.
//! 이메일 정규화, 선택 필드 정리, HTML 특수문자 이스케이프를 제공합니다.

use crate::errors::errors::AppError;

/// 필수 문자열을 검증합니다.
///
/// 값이 없거나 공백만 있으면 `ValidationError`를 반환하고,
/// 그렇지 않으면 원본 값을 그대로 돌려줍니다 (trim 하지 않음).
///
/// # Examples
///
/// ```rust,ignore
/// let password = validate_required_string(request.password.as_deref(), "Password")?;
/// ```
pub fn validate_required_string<'a>(value: Option<&'a str>, field_name: &str) -> Result<&'a str, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::ValidationError(format!("{} is required", field_name))),
    }
}

/// 선택적 문자열을 정리합니다.
///
/// 앞뒤 공백을 제거하고, 빈 문자열이면 `None`을 반환합니다.
pub fn clean_optional_string(value: Option<&str>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 이메일을 유니크 키 형태로 정규화합니다 (trim + 소문자).
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// HTML 특수문자 5종(`<`, `>`, `"`, `'`, `&`)을 엔티티로 치환합니다.
///
/// 한 번의 순회로 치환하므로 이미 만들어진 엔티티를 다시 이스케이프하지 않습니다.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '&' => escaped.push_str("&amp;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// 자유 입력 필드(이름 등)를 정리하고 이스케이프합니다.
pub fn sanitize_optional_text(value: Option<&str>) -> Option<String> {
    clean_optional_string(value).map(|s| escape_html(&s))
}
