//! Typed backend operations.
//!
//! Each screen loads through one of these methods when it becomes active or its
//! inputs change, and stores whatever comes back.

use crate::api::{ApiClient, ApiHeaders, ApiResult, HttpApiClient};
use crate::data::{
    AuthResponse, LeaderboardEntry, LoginRequest, OAuthProvider, ProblemDetail, ProblemSummary,
    ProgressReport, ProviderTokenRequest, RegisterRequest, SubmissionRequest, SubmissionResult,
};
use crate::errors::HandshakeError;
use crate::filters::ProblemFilter;

/// Backend base URL, overridable at build time through `DOJO_API_URL`.
pub const DEFAULT_API_URL: &str = match option_env!("DOJO_API_URL") {
    Some(url) => url,
    None => "http://localhost:8001/api",
};

pub struct Api<C = HttpApiClient> {
    client: C,
}

impl Api<HttpApiClient> {
    /// Client for [`DEFAULT_API_URL`] sending the given shared headers.
    pub fn http(headers: ApiHeaders) -> Self {
        Self::new(HttpApiClient::new(DEFAULT_API_URL, headers))
    }
}

impl<C: ApiClient> Api<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn headers(&self) -> &ApiHeaders {
        self.client.headers()
    }

    pub async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse> {
        self.client.post("/auth/login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        self.client.post("/auth/register", request).await
    }

    /// Exchanges a provider token for a session. See [`ProviderHandshake`].
    pub async fn provider_login(
        &self,
        provider: OAuthProvider,
        token: String,
    ) -> ApiResult<AuthResponse> {
        let endpoint = format!("/auth/{}", provider.slug());
        self.client
            .post(&endpoint, &ProviderTokenRequest { token })
            .await
    }

    pub async fn fetch_progress(&self) -> ApiResult<ProgressReport> {
        self.client.get("/user/progress").await
    }

    pub async fn fetch_problems(&self, filter: &ProblemFilter) -> ApiResult<Vec<ProblemSummary>> {
        self.client.get(&filter.endpoint()).await
    }

    pub async fn fetch_problem(&self, id: &str) -> ApiResult<ProblemDetail> {
        self.client.get(&problem_path(id)).await
    }

    /// Submits code for grading.
    ///
    /// Never fails: a request that errors out is reported as a zero-score
    /// [`SubmissionStatus::Error`](crate::data::SubmissionStatus::Error) result.
    pub async fn submit(&self, id: &str, request: &SubmissionRequest) -> SubmissionResult {
        let endpoint = format!("{}/submit", problem_path(id));
        match self.client.post(&endpoint, request).await {
            Ok(result) => result,
            Err(err) => {
                tracing::error!(%err, problem = id, "Submission failed");
                SubmissionResult::request_failed()
            }
        }
    }

    pub async fn fetch_leaderboard(&self) -> ApiResult<Vec<LeaderboardEntry>> {
        self.client.get("/leaderboard").await
    }
}

/// Path of a single problem, with the id kept inside its own segment.
fn problem_path(id: &str) -> String {
    format!("/questions/{}", urlencoding::encode(id))
}

/// Obtains a sign-in token from a third-party identity provider.
#[async_trait::async_trait(?Send)]
pub trait ProviderHandshake {
    async fn token(&self, provider: OAuthProvider) -> Result<String, HandshakeError>;
}

/// Stand-in handshake that is not yet wired to a real identity provider.
///
/// It hands out a fixed placeholder token for the providers it offers and
/// performs no external exchange; the backend's provider endpoints accept it
/// as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderHandshake {
    offered: &'static [OAuthProvider],
}

pub const PLACEHOLDER_TOKEN: &str = "dummy-token";

impl PlaceholderHandshake {
    /// Offers every provider.
    pub const fn new() -> Self {
        Self::offering(&OAuthProvider::ALL)
    }

    pub const fn offering(offered: &'static [OAuthProvider]) -> Self {
        Self { offered }
    }

    pub fn offers(&self, provider: OAuthProvider) -> bool {
        self.offered.contains(&provider)
    }
}

impl Default for PlaceholderHandshake {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait(?Send)]
impl ProviderHandshake for PlaceholderHandshake {
    async fn token(&self, provider: OAuthProvider) -> Result<String, HandshakeError> {
        if !self.offers(provider) {
            tracing::warn!(%provider, "Provider is not offered");
            return Err(HandshakeError::Unavailable(provider));
        }
        tracing::warn!(%provider, "Using placeholder token, no real provider handshake");
        Ok(PLACEHOLDER_TOKEN.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use futures::executor::block_on;
    use serde_json::{Value, json};

    use super::*;
    use crate::api::ApiError;
    use crate::data::{Credential, Identity, SubmissionStatus};
    use crate::navigation::{Screen, ShellAction, ShellState};
    use crate::session::SessionStore;
    use crate::storage::MemoryStore;

    #[derive(Debug, Clone, PartialEq)]
    struct Recorded {
        method: &'static str,
        endpoint: String,
        authorization: Option<String>,
        body: Option<Value>,
    }

    /// Answers from canned JSON and records what was asked.
    struct RecordingClient {
        headers: ApiHeaders,
        responses: HashMap<String, Result<Value, u16>>,
        requests: RefCell<Vec<Recorded>>,
    }

    impl RecordingClient {
        fn new(headers: ApiHeaders) -> Self {
            Self {
                headers,
                responses: HashMap::new(),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn respond(mut self, endpoint: &str, value: Value) -> Self {
            self.responses.insert(endpoint.to_string(), Ok(value));
            self
        }

        fn reject(mut self, endpoint: &str, status: u16) -> Self {
            self.responses.insert(endpoint.to_string(), Err(status));
            self
        }

        fn requests(&self) -> Vec<Recorded> {
            self.requests.borrow().clone()
        }

        fn answer<T>(&self, endpoint: &str) -> ApiResult<T>
        where
            T: serde::de::DeserializeOwned,
        {
            match self.responses.get(endpoint) {
                Some(Ok(value)) => serde_json::from_value(value.clone())
                    .map_err(|e| ApiError::ParseError(e.to_string())),
                Some(Err(status)) => Err(crate::api::error_for_status(*status, endpoint, None)
                    .unwrap_or(ApiError::UnexpectedStatusCode(*status))),
                None => Err(ApiError::NotFound(endpoint.to_string())),
            }
        }
    }

    #[async_trait::async_trait(?Send)]
    impl ApiClient for RecordingClient {
        fn headers(&self) -> &ApiHeaders {
            &self.headers
        }

        async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
        where
            T: serde::de::DeserializeOwned,
        {
            self.requests.borrow_mut().push(Recorded {
                method: "GET",
                endpoint: endpoint.to_string(),
                authorization: self.headers.authorization(),
                body: None,
            });
            self.answer(endpoint)
        }

        async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
        where
            T: serde::de::DeserializeOwned,
            B: serde::Serialize,
        {
            self.requests.borrow_mut().push(Recorded {
                method: "POST",
                endpoint: endpoint.to_string(),
                authorization: self.headers.authorization(),
                body: serde_json::to_value(body).ok(),
            });
            self.answer(endpoint)
        }
    }

    fn identity() -> Identity {
        Identity {
            id: Some("u-1".to_string()),
            username: "ada".to_string(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            points: 10,
            streak_days: 1,
        }
    }

    fn auth_json(token: &str) -> Value {
        json!({
            "access_token": token,
            "token_type": "bearer",
            "user": {
                "id": "u-1",
                "email": "ada@example.com",
                "username": "ada",
                "full_name": "Ada Lovelace",
                "points": 10,
                "streak_days": 1
            }
        })
    }

    fn leaderboard_json() -> Value {
        json!([{ "rank": 1, "username": "ada", "points": 10, "streak_days": 1 }])
    }

    #[test]
    fn requests_after_login_carry_the_credential() {
        let headers = ApiHeaders::new();
        let session = SessionStore::new(MemoryStore::new(), headers.clone());
        let api = Api::new(
            RecordingClient::new(headers).respond("/leaderboard", leaderboard_json()),
        );

        session.login(identity(), Credential::new("tok-1"));
        block_on(api.fetch_leaderboard()).unwrap();
        block_on(api.fetch_progress()).unwrap_err();

        let requests = api.client.requests();
        assert_eq!(requests.len(), 2);
        assert!(
            requests
                .iter()
                .all(|r| r.authorization.as_deref() == Some("Bearer tok-1"))
        );
    }

    #[test]
    fn requests_after_logout_carry_nothing() {
        let headers = ApiHeaders::new();
        let session = SessionStore::new(MemoryStore::new(), headers.clone());
        let api = Api::new(
            RecordingClient::new(headers).respond("/leaderboard", leaderboard_json()),
        );

        session.login(identity(), Credential::new("tok-1"));
        session.logout();
        block_on(api.fetch_leaderboard()).unwrap();

        assert_eq!(api.client.requests()[0].authorization, None);
    }

    #[test]
    fn restored_session_needs_no_request() {
        let storage = MemoryStore::new();
        SessionStore::new(storage.clone(), ApiHeaders::new())
            .login(identity(), Credential::new("tok-1"));

        let headers = ApiHeaders::new();
        let api = Api::new(RecordingClient::new(headers.clone()));
        let state = SessionStore::new(storage, headers).restore();

        assert!(state.is_authenticated());
        assert!(api.client.requests().is_empty());
        assert_eq!(api.headers().authorization().as_deref(), Some("Bearer tok-1"));
    }

    #[test]
    fn login_posts_credentials_and_returns_session_parts() {
        let api = Api::new(
            RecordingClient::new(ApiHeaders::new()).respond("/auth/login", auth_json("tok-9")),
        );

        let response = block_on(api.login(&LoginRequest {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        }))
        .unwrap();
        let (identity, credential) = response.into_parts();

        assert_eq!(identity.username, "ada");
        assert_eq!(credential.as_str(), "tok-9");
        let request = &api.client.requests()[0];
        assert_eq!(request.method, "POST");
        assert_eq!(
            request.body,
            Some(json!({ "email": "ada@example.com", "password": "hunter2" }))
        );
    }

    #[test]
    fn rejected_login_surfaces_an_error() {
        let api = Api::new(RecordingClient::new(ApiHeaders::new()).reject("/auth/login", 401));

        let err = block_on(api.login(&LoginRequest {
            email: "ada@example.com".to_string(),
            password: "wrong".to_string(),
        }))
        .unwrap_err();

        assert!(matches!(err, ApiError::UnauthorizedAccess(_)));
    }

    #[test]
    fn register_sends_profile_fields() {
        let api = Api::new(
            RecordingClient::new(ApiHeaders::new()).respond("/auth/register", auth_json("tok-2")),
        );

        block_on(api.register(&RegisterRequest {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
            username: "ada".to_string(),
            full_name: "Ada Lovelace".to_string(),
        }))
        .unwrap();

        let body = api.client.requests()[0].body.clone().unwrap();
        assert_eq!(body["username"], "ada");
        assert_eq!(body["full_name"], "Ada Lovelace");
    }

    #[test]
    fn provider_login_posts_placeholder_token() {
        let api = Api::new(
            RecordingClient::new(ApiHeaders::new())
                .respond("/auth/github", auth_json("dummy-github-token")),
        );

        let token = block_on(PlaceholderHandshake::new().token(OAuthProvider::Github)).unwrap();
        let response = block_on(api.provider_login(OAuthProvider::Github, token)).unwrap();

        assert_eq!(response.access_token, "dummy-github-token");
        let request = &api.client.requests()[0];
        assert_eq!(request.endpoint, "/auth/github");
        assert_eq!(request.body, Some(json!({ "token": PLACEHOLDER_TOKEN })));
    }

    #[test]
    fn provider_outside_the_offer_is_unavailable() {
        let handshake = PlaceholderHandshake::offering(&[OAuthProvider::Google]);

        assert!(block_on(handshake.token(OAuthProvider::Google)).is_ok());
        let err = block_on(handshake.token(OAuthProvider::Linkedin)).unwrap_err();
        assert!(matches!(err, HandshakeError::Unavailable(OAuthProvider::Linkedin)));
        assert_eq!(err.to_string(), "LinkedIn sign-in is not available");
    }

    #[test]
    fn problem_filters_become_query_parameters() {
        let api = Api::new(
            RecordingClient::new(ApiHeaders::new())
                .respond("/questions?language=Python&difficulty=Easy", json!([])),
        );
        let filter = ProblemFilter {
            language: "Python".to_string(),
            difficulty: "Easy".to_string(),
            topic: String::new(),
        };

        let problems = block_on(api.fetch_problems(&filter)).unwrap();

        assert!(problems.is_empty());
        assert_eq!(
            api.client.requests()[0].endpoint,
            "/questions?language=Python&difficulty=Easy"
        );
    }

    #[test]
    fn editor_fetches_the_selected_problem() {
        let api = Api::new(RecordingClient::new(ApiHeaders::new()).respond(
            "/questions/q-7",
            json!({
                "id": "q-7",
                "title": "Two Sum",
                "description": "Find two numbers.",
                "difficulty": "Easy",
                "language": "JavaScript",
                "topic": "Arrays",
                "starter_code": "function twoSum(nums, target) {\n}",
                "test_cases": [{ "input": "[2,7,11,15], 9", "expected": "[0,1]" }],
                "points": 10
            }),
        ));

        let shell = ShellState::default()
            .apply(ShellAction::Navigate(Screen::Problems))
            .apply(ShellAction::SelectProblem("q-7".to_string()));
        assert_eq!(shell.active, Screen::Editor);

        let id = shell.selected_problem.unwrap();
        let problem = block_on(api.fetch_problem(&id)).unwrap();

        assert_eq!(problem.id, id);
        assert_eq!(problem.test_cases.len(), 1);
        assert_eq!(api.client.requests()[0].endpoint, "/questions/q-7");
    }

    #[test]
    fn problem_id_is_kept_inside_its_path_segment() {
        let api = Api::new(RecordingClient::new(ApiHeaders::new()));

        let fetched = block_on(api.fetch_problem("a/b?x=1"));
        block_on(api.submit(
            "a/b?x=1",
            &SubmissionRequest {
                code: String::new(),
                language: "Python".to_string(),
            },
        ));

        assert!(fetched.is_err());
        let requests = api.client.requests();
        assert_eq!(requests[0].endpoint, "/questions/a%2Fb%3Fx%3D1");
        assert_eq!(requests[1].endpoint, "/questions/a%2Fb%3Fx%3D1/submit");
    }

    #[test]
    fn submission_result_passes_through() {
        let api = Api::new(RecordingClient::new(ApiHeaders::new()).respond(
            "/questions/q-7/submit",
            json!({
                "status": "failed",
                "score": 66.6,
                "passed_test_cases": 2,
                "total_test_cases": 3,
                "points_earned": 0
            }),
        ));

        let result = block_on(api.submit(
            "q-7",
            &SubmissionRequest {
                code: "return [0,1]".to_string(),
                language: "JavaScript".to_string(),
            },
        ));

        assert_eq!(result.status, SubmissionStatus::Failed);
        assert_eq!(result.passed_test_cases, 2);
        assert_eq!(
            api.client.requests()[0].body,
            Some(json!({ "code": "return [0,1]", "language": "JavaScript" }))
        );
    }

    #[test]
    fn failed_submission_becomes_error_result() {
        for client in [
            RecordingClient::new(ApiHeaders::new()).reject("/questions/q-7/submit", 500),
            RecordingClient::new(ApiHeaders::new()),
            RecordingClient::new(ApiHeaders::new())
                .respond("/questions/q-7/submit", json!({ "unexpected": true })),
        ] {
            let api = Api::new(client);
            let result = block_on(api.submit(
                "q-7",
                &SubmissionRequest {
                    code: String::new(),
                    language: "JavaScript".to_string(),
                },
            ));

            assert_eq!(result.status, SubmissionStatus::Error);
            assert_eq!(result.score, 0.0);
            assert_eq!(result.passed_test_cases, 0);
            assert_eq!(result.total_test_cases, 0);
            assert_eq!(result.points_earned, 0);
        }
    }

    #[test]
    fn progress_report_decodes() {
        let api = Api::new(RecordingClient::new(ApiHeaders::new()).respond(
            "/user/progress",
            json!({
                "user": { "id": "u-1", "username": "ada", "points": 35, "streak_days": 3 },
                "stats": {
                    "solved_questions": 2,
                    "total_questions": 3,
                    "total_submissions": 4,
                    "accuracy": 50.0
                }
            }),
        ));

        let report = block_on(api.fetch_progress()).unwrap();

        assert_eq!(report.user.points, 35);
        assert_eq!(report.stats.total_submissions, 4);
    }
}
