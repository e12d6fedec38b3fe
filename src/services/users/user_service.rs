//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! 모든 사용자 레코드의 변경과 조회는 이 서비스를 거치며,
//! 다른 컴포넌트는 사용자 레코드를 직접 수정하지 않습니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │   Registration  │  │  Authentication │  │   User Query    │  │
//! │  │                 │  │                 │  │                 │  │
//! │  │ • Input Valid   │  │ • Exact Email   │  │ • By ID/Email   │  │
//! │  │ • Email Normal  │  │ • Hasher Verify │  │ • Entity to DTO │  │
//! │  │ • Duplicate Chk │  │                 │  │ • Full Scan     │  │
//! │  │ • Name Sanitize │  │                 │  │                 │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//!                 │                                   │
//!                 ▼                                   ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────────┐
//! │   UserStore (trait)           │ │   PasswordHasher (trait)      │
//! │ • MongoUserRepository         │ │ • BcryptHasher                │
//! │ • InMemoryUserRepository      │ │ • PlainHasher                 │
//! └───────────────────────────────┘ └───────────────────────────────┘
//! ```
//!
//! ## 이메일 정규화
//!
//! 생성 시에만 이메일을 정규화(trim + 소문자)합니다. 이메일 조회와 로그인은
//! 입력값을 그대로 비교하므로, 대소문자가 다른 이메일로 조회하면 찾지 못합니다.
//! 기존 클라이언트와의 호환을 위해 이 비대칭을 유지합니다.
//!
//! ## 중복 가입 경쟁
//!
//! 이메일 사전 조회와 삽입 사이는 원자적이지 않습니다. 동시에 같은 이메일로 가입하면
//! 저장소의 유니크 제약이 한쪽을 `ConflictError`로 거부하고, 이 서비스는 이를
//! 사전 조회와 같은 [`CreateUserOutcome::AlreadyExists`]로 변환합니다.

use std::sync::Arc;
use mongodb::bson::DateTime;
use crate::{
    domain::{
        entities::users::user::User,
        dto::users::{
            request::CreateUserRequest,
            response::UserResponse,
        },
    },
    errors::errors::AppError,
    repositories::users::{parse_object_id, UserStore},
    utils::string_utils::{normalize_email, sanitize_optional_text, validate_required_string},
};
use super::password::PasswordHasher;

/// 계정 생성 결과
///
/// 이메일 중복은 오류가 아닌 정상적인 비즈니스 결과로 취급합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateUserOutcome {
    /// 새 레코드가 저장됨
    Created(User),
    /// 같은 (정규화된) 이메일의 레코드가 이미 있음. 상태 변경 없음.
    AlreadyExists,
}

/// 사용자 관리 비즈니스 로직 서비스
///
/// 저장소와 비밀번호 해셔는 생성자로 주입됩니다.
///
/// ## 주요 책임
///
/// 1. **사용자 등록** - 입력 검증, 이메일 정규화, 중복 확인, 이름 이스케이프, 비밀번호 해싱
/// 2. **사용자 수정** - 모든 가변 필드의 전체 교체
/// 3. **사용자 조회** - ID/이메일 조회, 전체 목록
/// 4. **사용자 인증** - 이메일 완전 일치 + 해셔 검증
///
/// ## 에러 처리 전략
///
/// - **ValidationError**: 필수 필드 누락, 잘못된 ID 형식
/// - **NotFound**: ID/이메일에 해당하는 사용자가 없음
/// - **AuthenticationError**: 비밀번호 불일치
/// - **DatabaseError**: 저장소 장애
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let service = UserService::new(
///     Arc::new(InMemoryUserRepository::new()),
///     Arc::new(BcryptHasher::new(12)),
/// );
///
/// match service.create_user(request).await? {
///     CreateUserOutcome::Created(user) => println!("생성: {}", user.email),
///     CreateUserOutcome::AlreadyExists => println!("이미 존재하는 이메일"),
/// }
///
/// let user = service.sign_in("ada@example.com", "s3cret").await?;
/// ```
#[derive(Clone)]
pub struct UserService {
    /// 사용자 데이터 액세스 저장소
    store: Arc<dyn UserStore>,
    /// 비밀번호 저장 방식
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// 새 사용자 계정 생성
    ///
    /// # 처리 과정
    ///
    /// 1. **필수값 검증**: 이메일/비밀번호가 없거나 공백이면 `ValidationError`
    /// 2. **이메일 정규화**: trim + 소문자
    /// 3. **중복 확인**: 정규화된 이메일로 조회, 있으면 `AlreadyExists`
    /// 4. **이름 정리**: trim 후 HTML 특수문자 이스케이프
    /// 5. **비밀번호 해싱**: 설정된 해셔 사용
    /// 6. **영구 저장**: 유니크 제약 위반은 `AlreadyExists`로 변환
    ///
    /// # 반환값
    ///
    /// * `Ok(CreateUserOutcome::Created(user))` - ID가 할당된 저장 레코드
    /// * `Ok(CreateUserOutcome::AlreadyExists)` - 중복 이메일
    /// * `Err(AppError::ValidationError)` - 이메일 또는 비밀번호 누락
    /// * `Err(AppError::DatabaseError)` - 저장소 장애
    ///
    /// # 로깅
    ///
    /// ```text
    /// [DEBUG] Password hashing took: 2.1ms
    /// [INFO] Total user creation took: 4.8ms
    /// ```
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<CreateUserOutcome, AppError> {
        let start_time = std::time::Instant::now();

        let email = validate_required_string(request.email.as_deref(), "Email")?;
        let password = validate_required_string(request.password.as_deref(), "Password")?;
        let email = normalize_email(email);

        if self.store.find_by_email(&email).await?.is_some() {
            log::info!("이미 존재하는 이메일로 가입 시도: {}", email);
            return Ok(CreateUserOutcome::AlreadyExists);
        }

        let user = User::new(
            sanitize_optional_text(request.first_name.as_deref()),
            sanitize_optional_text(request.last_name.as_deref()),
            email,
            self.hasher.hash(password)?,
            role_or_default(request.role),
        );

        let created = match self.store.insert(user).await {
            Ok(created) => created,
            Err(e) if e.is_conflict() => {
                log::info!("동시 가입 경쟁으로 유니크 제약 위반: {}", e);
                return Ok(CreateUserOutcome::AlreadyExists);
            }
            Err(e) => return Err(e),
        };

        log::info!("Total user creation took: {:?}", start_time.elapsed());

        Ok(CreateUserOutcome::Created(created))
    }

    /// 기존 사용자 레코드를 요청 값으로 전체 교체합니다.
    ///
    /// 부분 수정은 지원하지 않습니다. 이름/이메일/역할은 입력값 그대로 저장되며
    /// 정규화, 이스케이프, 이메일 중복 사전 확인을 하지 않습니다.
    /// 비밀번호만 해셔를 거쳐 저장됩니다.
    ///
    /// 다른 사용자가 쓰고 있는 이메일로 바꾸면 저장소의 유니크 제약에 의해
    /// `ConflictError`가 반환됩니다.
    pub async fn update_user(&self, request: CreateUserRequest) -> Result<(), AppError> {
        let user_id = validate_required_string(request.user_id.as_deref(), "User ID")?;
        let email = validate_required_string(request.email.as_deref(), "Email")?;
        let password = validate_required_string(request.password.as_deref(), "Password")?;

        let mut user = self.store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        user.first_name = request.first_name;
        user.last_name = request.last_name;
        user.email = email.to_string();
        user.password = self.hasher.hash(password)?;
        user.role = role_or_default(request.role);
        user.updated_at = DateTime::now();

        // 조회와 교체 사이에 삭제된 경우
        if !self.store.replace(&user).await? {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        log::info!("사용자 정보 수정 완료: {}", user_id);
        Ok(())
    }

    /// ID로 사용자를 삭제합니다. 존재하지 않는 ID도 성공으로 처리합니다.
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        parse_object_id(id)?;

        if self.store.delete_by_id(id).await? {
            log::info!("사용자 삭제 완료: {}", id);
        } else {
            log::debug!("삭제할 사용자가 없음: {}", id);
        }

        Ok(())
    }

    /// 전체 사용자를 공개 뷰로 반환합니다. 순서는 저장소 고유 순서입니다.
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.store.find_all().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// ID로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 저장된 전체 레코드 (외부 응답 시 `UserResponse`로 변환할 것)
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 없음
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn get_user(&self, id: &str) -> Result<User, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 이메일 완전 일치 조회. 입력을 정규화하지 않습니다.
    pub async fn get_user_by_email(&self, email: &str) -> Result<User, AppError> {
        self.store
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 이메일/비밀번호 검증
    ///
    /// 이메일은 완전 일치로 조회하며, 사용자가 없으면 `NotFound`,
    /// 비밀번호가 맞지 않으면 `AuthenticationError`를 반환합니다.
    /// 두 경우를 외부에 구분해서 노출할지는 호출자가 결정합니다.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, AppError> {
        let start_time = std::time::Instant::now();

        let user = self.get_user_by_email(email).await?;

        if !self.hasher.verify(password, &user.password)? {
            log::warn!("비밀번호 불일치: {}", email);
            return Err(AppError::AuthenticationError("Invalid credentials".to_string()));
        }

        log::debug!("Total password verification took: {:?}", start_time.elapsed());

        Ok(user)
    }
}

fn role_or_default(role: Option<String>) -> String {
    role.filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| User::DEFAULT_ROLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::repositories::users::InMemoryUserRepository;
    use crate::services::users::password::{BcryptHasher, PlainHasher};

    fn plain_service() -> (UserService, Arc<InMemoryUserRepository>) {
        let store = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(store.clone(), Arc::new(PlainHasher));
        (service, store)
    }

    fn request(email: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            ..Default::default()
        }
    }

    fn created(outcome: CreateUserOutcome) -> User {
        match outcome {
            CreateUserOutcome::Created(user) => user,
            CreateUserOutcome::AlreadyExists => panic!("expected a created user"),
        }
    }

    #[actix_web::test]
    async fn test_distinct_emails_get_distinct_ids() {
        let (service, store) = plain_service();

        let a = created(service.create_user(request("a@b.com", "x")).await.unwrap());
        let b = created(service.create_user(request("c@d.com", "x")).await.unwrap());
        let c = created(service.create_user(request("e@f.com", "x")).await.unwrap());

        assert!(a.id.is_some());
        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
        assert_eq!(store.find_all().await.unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn test_create_normalizes_email_and_rejects_case_duplicate() {
        let (service, store) = plain_service();

        let mut first = request("A@B.com", "x");
        first.role = Some("user".to_string());
        let user = created(service.create_user(first).await.unwrap());

        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.password, "x");
        assert_eq!(user.role, "user");

        let second = service.create_user(request(" a@b.com ", "y")).await.unwrap();
        assert_eq!(second, CreateUserOutcome::AlreadyExists);

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].password, "x");
    }

    #[actix_web::test]
    async fn test_create_requires_email_and_password() {
        let (service, store) = plain_service();

        let missing_email = CreateUserRequest {
            password: Some("x".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            service.create_user(missing_email).await,
            Err(AppError::ValidationError(_))
        ));

        assert!(matches!(
            service.create_user(request("a@b.com", "")).await,
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            service.create_user(request("   ", "x")).await,
            Err(AppError::ValidationError(_))
        ));

        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_create_defaults_role() {
        let (service, _) = plain_service();

        let user = created(service.create_user(request("a@b.com", "x")).await.unwrap());
        assert_eq!(user.role, User::DEFAULT_ROLE);
    }

    #[actix_web::test]
    async fn test_create_sanitizes_names_but_update_stores_raw() {
        let (service, store) = plain_service();

        let mut create = request("a@b.com", "x");
        create.first_name = Some("  <script>alert('x')</script>  ".to_string());
        create.last_name = Some("   ".to_string());
        let user = created(service.create_user(create).await.unwrap());

        assert_eq!(
            user.first_name.as_deref(),
            Some("&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;")
        );
        assert_eq!(user.last_name, None);

        let id = user.id_string().unwrap();
        let mut update = request("a@b.com", "x");
        update.user_id = Some(id.clone());
        update.first_name = Some("<script>".to_string());
        update.last_name = Some("O'Neil & Sons".to_string());
        service.update_user(update).await.unwrap();

        let stored = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.first_name.as_deref(), Some("<script>"));
        assert_eq!(stored.last_name.as_deref(), Some("O'Neil & Sons"));
    }

    #[actix_web::test]
    async fn test_update_overwrites_all_fields_verbatim() {
        let (service, _) = plain_service();

        let mut create = request("a@b.com", "x");
        create.first_name = Some("Ada".to_string());
        let user = created(service.create_user(create).await.unwrap());
        let id = user.id_string().unwrap();

        let update = CreateUserRequest {
            user_id: Some(id.clone()),
            email: Some(" New@Mail.com ".to_string()),
            password: Some("y".to_string()),
            role: Some("admin".to_string()),
            ..Default::default()
        };
        service.update_user(update).await.unwrap();

        let stored = service.get_user(&id).await.unwrap();
        assert_eq!(stored.first_name, None);
        assert_eq!(stored.email, " New@Mail.com ");
        assert_eq!(stored.password, "y");
        assert_eq!(stored.role, "admin");
        assert_eq!(stored.created_at, user.created_at);
    }

    #[actix_web::test]
    async fn test_update_unknown_id_is_not_found() {
        let (service, _) = plain_service();

        let mut update = request("a@b.com", "x");
        update.user_id = Some("507f1f77bcf86cd799439011".to_string());

        assert!(matches!(
            service.update_user(update).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_update_requires_user_id() {
        let (service, _) = plain_service();

        assert!(matches!(
            service.update_user(request("a@b.com", "x")).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_update_hashes_password_with_bcrypt() {
        let store = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(store.clone(), Arc::new(BcryptHasher::new(4)));

        let user = created(service.create_user(request("a@b.com", "x")).await.unwrap());
        assert_ne!(user.password, "x");

        let mut update = request("a@b.com", "y");
        update.user_id = user.id_string();
        service.update_user(update).await.unwrap();

        assert!(service.sign_in("a@b.com", "y").await.is_ok());
        assert!(matches!(
            service.sign_in("a@b.com", "x").await,
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_bcrypt_long_password_is_rejected_not_truncated() {
        let store = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(store.clone(), Arc::new(BcryptHasher::new(4)));
        let prefix = "a".repeat(72);

        assert!(matches!(
            service.create_user(request("a@b.com", &format!("{}REAL", prefix))).await,
            Err(AppError::ValidationError(_))
        ));
        assert!(service.list_users().await.unwrap().is_empty());

        service.create_user(request("a@b.com", &prefix[..71])).await.unwrap();
        assert!(service.sign_in("a@b.com", &prefix[..71]).await.is_ok());
        assert!(matches!(
            service.sign_in("a@b.com", &format!("{}WRONG", prefix)).await,
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_delete_is_idempotent() {
        let (service, store) = plain_service();

        let user = created(service.create_user(request("a@b.com", "x")).await.unwrap());
        let id = user.id_string().unwrap();

        service.delete_user(&id).await.unwrap();
        service.delete_user(&id).await.unwrap();
        service.delete_user("507f1f77bcf86cd799439011").await.unwrap();

        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_delete_malformed_id_is_validation_error() {
        let (service, _) = plain_service();

        assert!(matches!(
            service.delete_user("nope").await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_list_users() {
        let (service, _) = plain_service();
        assert!(service.list_users().await.unwrap().is_empty());

        service.create_user(request("a@b.com", "x")).await.unwrap();
        service.create_user(request("c@d.com", "x")).await.unwrap();

        let users = service.list_users().await.unwrap();
        let emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, vec!["a@b.com", "c@d.com"]);
    }

    #[actix_web::test]
    async fn test_get_user_not_found() {
        let (service, _) = plain_service();

        assert!(matches!(
            service.get_user("507f1f77bcf86cd799439011").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_get_user_by_email_does_not_normalize() {
        let (service, _) = plain_service();
        service.create_user(request("A@B.com", "x")).await.unwrap();

        assert!(service.get_user_by_email("a@b.com").await.is_ok());
        assert!(matches!(
            service.get_user_by_email("A@B.com").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.get_user_by_email(" a@b.com").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_sign_in_exact_match() {
        let (service, _) = plain_service();
        service.create_user(request("a@b.com", "x")).await.unwrap();

        let user = service.sign_in("a@b.com", "x").await.unwrap();
        assert_eq!(user.email, "a@b.com");

        assert!(matches!(
            service.sign_in("a@b.com", "X").await,
            Err(AppError::AuthenticationError(_))
        ));
        assert!(matches!(
            service.sign_in("a@b.com", "x ").await,
            Err(AppError::AuthenticationError(_))
        ));
        assert!(matches!(
            service.sign_in("A@B.com", "x").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.sign_in("missing@b.com", "x").await,
            Err(AppError::NotFound(_))
        ));
    }

    /// 사전 조회는 항상 비어 있고 삽입은 유니크 제약으로 실패하는 저장소
    struct RacingStore;

    #[async_trait]
    impl UserStore for RacingStore {
        async fn insert(&self, _user: User) -> Result<User, AppError> {
            Err(AppError::ConflictError("duplicate key".to_string()))
        }
        async fn replace(&self, _user: &User) -> Result<bool, AppError> {
            Ok(false)
        }
        async fn delete_by_id(&self, _id: &str) -> Result<bool, AppError> {
            Ok(false)
        }
        async fn find_by_id(&self, _id: &str) -> Result<Option<User>, AppError> {
            Ok(None)
        }
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, AppError> {
            Ok(None)
        }
        async fn find_all(&self) -> Result<Vec<User>, AppError> {
            Ok(Vec::new())
        }
    }

    #[actix_web::test]
    async fn test_unique_constraint_race_maps_to_already_exists() {
        let service = UserService::new(Arc::new(RacingStore), Arc::new(PlainHasher));

        let outcome = service.create_user(request("a@b.com", "x")).await.unwrap();
        assert_eq!(outcome, CreateUserOutcome::AlreadyExists);
    }
}
