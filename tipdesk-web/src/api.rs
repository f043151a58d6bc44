//! HTTP client for the platform API.
//!
//! One shared client instance serves the whole application. Every
//! outbound request passes an ordered decoration chain (extension hook,
//! language header, bearer token); every failed response is normalized
//! into [`ApiError::Status`] with the server message or a fallback
//! literal. A 401 on anything but the login endpoint marks the session
//! expired in the store, exactly once.
//!
//! The client never reaches into the store directly: session access is
//! injected through [`SessionHandle`] so the request logic stays
//! testable in isolation.

use std::fmt;
use std::rc::Rc;

use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use thiserror::Error;
use tipdesk_shared::models::{
    AutoAssignSetting, Container, Envelope, ErrorResponse, LoginRequest, LoginResponse, TechUser,
    Transaction, TransactionDetail,
};
use crate::config::FrontendConfig;
use crate::language;
use crate::store::{Action, AuthAction, SessionStatus, app_dispatch};

const LOGIN_PATH: &str = "back/login";
const TRANSACTIONS_PATH: &str = "back/employer/transactions";
const CONTAINERS_PATH: &str = "back/employer/containers";
const TECH_USERS_PATH: &str = "back/employer/tech-users";
const AUTO_ASSIGN_PATH: &str = "back/employer/settings/auto-assign";

/// Shown when the server reports a failure without a usable message.
const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

thread_local! {
    static SHARED_CLIENT: OnceCell<ApiClient> = const { OnceCell::new() };
}

/// Request-time session access: token lookup, expiry check, and the
/// sink for the mark-expired signal.
pub trait SessionHandle {
    fn token(&self) -> Option<String>;
    fn status(&self) -> SessionStatus;
    fn mark_expired(&self);
}

/// Production handle backed by the global store.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreSession;

impl SessionHandle for StoreSession {
    fn token(&self) -> Option<String> {
        app_dispatch().get().auth.id_token.clone()
    }

    fn status(&self) -> SessionStatus {
        app_dispatch().get().auth.status
    }

    fn mark_expired(&self) {
        app_dispatch().apply(Action::Auth(AuthAction::SessionExpired));
    }
}

/// Normalized request failure.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status. `message` is the
    /// server-provided one when present, the fallback literal otherwise.
    #[error("{message}")]
    Status { status: StatusCode, message: String },
    /// No HTTP response at all (connection refused, timeout); the
    /// original error passes through unchanged.
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(error) => error.status(),
        }
    }
}

/// Signals the inbound handler may raise towards the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionSignal {
    Expire,
}

/// Decide what a failure status means for the session. Pure so the
/// 401/403/login-path rules are testable without a live server.
pub(crate) fn session_signal(
    status: StatusCode,
    path: &str,
    current: SessionStatus,
) -> Option<SessionSignal> {
    if is_login_path(path) {
        // A rejected login is a credential problem, not an expiry.
        return None;
    }
    match status {
        StatusCode::UNAUTHORIZED if current != SessionStatus::Expired => {
            Some(SessionSignal::Expire)
        }
        // Reserved: forced logout once the API starts emitting 403 for
        // revoked accounts.
        StatusCode::FORBIDDEN => None,
        _ => None,
    }
}

pub(crate) fn is_login_path(path: &str) -> bool {
    path.trim_start_matches('/') == LOGIN_PATH
}

/// API client for the back-office endpoints.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    session: Rc<dyn SessionHandle>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client against `base_url` with an injected session.
    pub fn new(base_url: &str, session: Rc<dyn SessionHandle>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            session,
        }
    }

    /// The application-wide client, wired to the global store.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let config = FrontendConfig::new();
                Self::new(config.api_base_url(), Rc::new(StoreSession))
            })
            .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // Head of the outbound chain; kept as an extension hook.
    fn prepare(request: RequestBuilder) -> RequestBuilder {
        request
    }

    /// Outbound decoration, in order: extension hook, language header
    /// (never for the login endpoint), bearer token read from the
    /// session at request time.
    fn decorate(&self, path: &str, request: RequestBuilder) -> RequestBuilder {
        let request = Self::prepare(request);
        let request = if is_login_path(path) {
            request
        } else {
            request.header("Accept-Language", language::current_language())
        };
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a decorated request and normalize any failure response.
    async fn send(&self, path: &str, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.decorate(path, request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if session_signal(status, path, self.session.status()) == Some(SessionSignal::Expire) {
            self.session.mark_expired();
        }
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|error| error.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
        Err(ApiError::Status { status, message })
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.api_url(LOGIN_PATH);
        let response = self.send(LOGIN_PATH, self.client.post(url).json(payload)).await?;
        Ok(response.json::<Envelope<LoginResponse>>().await?.data)
    }

    /// One page of the employer transaction listing.
    pub async fn transactions(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Envelope<Vec<Transaction>>, ApiError> {
        let url = self.api_url(TRANSACTIONS_PATH);
        let request = self
            .client
            .get(url)
            .query(&[("page", page), ("per_page", per_page)]);
        let response = self.send(TRANSACTIONS_PATH, request).await?;
        Ok(response.json().await?)
    }

    /// Full record for a single transaction.
    pub async fn transaction(&self, id: i64) -> Result<TransactionDetail, ApiError> {
        let path = format!("{TRANSACTIONS_PATH}/{id}");
        let url = self.api_url(&path);
        let response = self.send(&path, self.client.get(url)).await?;
        Ok(response.json::<Envelope<TransactionDetail>>().await?.data)
    }

    /// The employer's installed tip containers.
    pub async fn containers(&self) -> Result<Vec<Container>, ApiError> {
        let url = self.api_url(CONTAINERS_PATH);
        let response = self.send(CONTAINERS_PATH, self.client.get(url)).await?;
        Ok(response.json::<Envelope<Vec<Container>>>().await?.data)
    }

    /// Technician accounts available for assignment.
    pub async fn tech_users(&self) -> Result<Vec<TechUser>, ApiError> {
        let url = self.api_url(TECH_USERS_PATH);
        let response = self.send(TECH_USERS_PATH, self.client.get(url)).await?;
        Ok(response.json::<Envelope<Vec<TechUser>>>().await?.data)
    }

    /// Containers currently assigned to one technician.
    pub async fn tech_containers(&self, user_id: i64) -> Result<Vec<Container>, ApiError> {
        let path = format!("{TECH_USERS_PATH}/{user_id}/containers");
        let url = self.api_url(&path);
        let response = self.send(&path, self.client.get(url)).await?;
        Ok(response.json::<Envelope<Vec<Container>>>().await?.data)
    }

    /// Current auto-assign-delivery setting.
    pub async fn auto_assign(&self) -> Result<AutoAssignSetting, ApiError> {
        let url = self.api_url(AUTO_ASSIGN_PATH);
        let response = self.send(AUTO_ASSIGN_PATH, self.client.get(url)).await?;
        Ok(response.json::<Envelope<AutoAssignSetting>>().await?.data)
    }

    /// Persist the auto-assign-delivery setting.
    pub async fn set_auto_assign(&self, enabled: bool) -> Result<(), ApiError> {
        let url = self.api_url(AUTO_ASSIGN_PATH);
        let request = self.client.put(url).json(&AutoAssignSetting { enabled });
        self.send(AUTO_ASSIGN_PATH, request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct StubSession {
        token: Option<String>,
        status: SessionStatus,
        expirations: Rc<Cell<u32>>,
    }

    impl SessionHandle for StubSession {
        fn token(&self) -> Option<String> {
            self.token.clone()
        }

        fn status(&self) -> SessionStatus {
            self.status
        }

        fn mark_expired(&self) {
            self.expirations.set(self.expirations.get() + 1);
        }
    }

    fn client_with(token: Option<&str>) -> ApiClient {
        ApiClient::new(
            "/api",
            Rc::new(StubSession {
                token: token.map(ToString::to_string),
                status: SessionStatus::NotExpired,
                expirations: Rc::new(Cell::new(0)),
            }),
        )
    }

    #[test]
    fn test_store_session_marks_expiry_in_store() {
        let session = StoreSession;
        assert_eq!(session.status(), SessionStatus::NotLogged);
        assert!(session.token().is_none());

        session.mark_expired();

        assert_eq!(session.status(), SessionStatus::Expired);
    }

    #[test]
    fn test_api_url_joining() {
        let client = client_with(None);
        assert_eq!(
            client.api_url("back/employer/transactions"),
            "/api/back/employer/transactions"
        );
        assert_eq!(client.api_url("/back/login"), "/api/back/login");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new(
            "http://localhost:8080/api/",
            Rc::new(StubSession {
                token: None,
                status: SessionStatus::NotLogged,
                expirations: Rc::new(Cell::new(0)),
            }),
        );
        assert_eq!(client.api_url("back/login"), "http://localhost:8080/api/back/login");
    }

    #[test]
    fn test_login_path_detection() {
        assert!(is_login_path("back/login"));
        assert!(is_login_path("/back/login"));
        assert!(!is_login_path("back/employer/transactions"));
        assert!(!is_login_path("back/employer/transactions/42"));
    }

    #[test]
    fn test_unauthorized_on_api_path_signals_expiry() {
        let signal = session_signal(
            StatusCode::UNAUTHORIZED,
            "back/employer/transactions",
            SessionStatus::NotExpired,
        );
        assert_eq!(signal, Some(SessionSignal::Expire));
    }

    #[test]
    fn test_unauthorized_on_login_path_is_exempt() {
        let signal = session_signal(StatusCode::UNAUTHORIZED, "back/login", SessionStatus::NotExpired);
        assert_eq!(signal, None);
    }

    #[test]
    fn test_unauthorized_while_already_expired_is_silent() {
        let signal = session_signal(
            StatusCode::UNAUTHORIZED,
            "back/employer/transactions",
            SessionStatus::Expired,
        );
        assert_eq!(signal, None);
    }

    #[test]
    fn test_forbidden_is_a_reserved_no_op() {
        let signal = session_signal(
            StatusCode::FORBIDDEN,
            "back/employer/transactions",
            SessionStatus::NotExpired,
        );
        assert_eq!(signal, None);
    }

    #[test]
    fn test_server_error_raises_no_signal() {
        let signal = session_signal(
            StatusCode::INTERNAL_SERVER_ERROR,
            "back/employer/transactions",
            SessionStatus::NotExpired,
        );
        assert_eq!(signal, None);
    }

    #[test]
    fn test_bearer_header_present_when_token_held() {
        let client = client_with(Some("t1"));
        let builder = client.client.get("http://localhost/api/x");
        let request = client.decorate("back/employer/transactions", builder).build().unwrap();

        let auth = request.headers().get("authorization").unwrap();
        assert_eq!(auth.to_str().unwrap(), "Bearer t1");
        assert!(request.headers().contains_key("accept-language"));
    }

    #[test]
    fn test_no_bearer_header_without_token() {
        let client = client_with(None);
        let builder = client.client.get("http://localhost/api/x");
        let request = client.decorate("back/employer/transactions", builder).build().unwrap();

        assert!(!request.headers().contains_key("authorization"));
    }

    #[test]
    fn test_login_request_carries_no_language_header() {
        let client = client_with(Some("t1"));
        let builder = client.client.post("http://localhost/api/back/login");
        let request = client.decorate("back/login", builder).build().unwrap();

        assert!(!request.headers().contains_key("accept-language"));
    }

    #[test]
    fn test_status_error_displays_message() {
        let error = ApiError::Status {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "Invalid period".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid period");
        assert_eq!(error.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
    }
}
