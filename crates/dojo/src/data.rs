//! Data structures exchanged with the backend and kept in browser storage.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The authenticated user's profile, as returned by the auth endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    #[serde(default)]
    pub id: Option<String>,
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub streak_days: u32,
}

impl Identity {
    /// Name to greet the user with, falling back to the username when no full name was given.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }

    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string()
    }
}

/// An opaque bearer token proving an authenticated session to the backend.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Tokens never end up in logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: Identity,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl AuthResponse {
    pub fn into_parts(self) -> (Identity, Credential) {
        (self.user, Credential::new(self.access_token))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub username: String,
    pub full_name: String,
}

/// Body sent to `/auth/{provider}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProviderTokenRequest {
    pub token: String,
}

/// Third-party identity providers offered on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OAuthProvider {
    Google,
    Github,
    Linkedin,
}

impl OAuthProvider {
    pub const ALL: [OAuthProvider; 3] = [
        OAuthProvider::Google,
        OAuthProvider::Github,
        OAuthProvider::Linkedin,
    ];

    /// Path segment under `/auth/`.
    pub fn slug(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Github => "github",
            OAuthProvider::Linkedin => "linkedin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "Google",
            OAuthProvider::Github => "GitHub",
            OAuthProvider::Linkedin => "LinkedIn",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ProgressUser {
    #[serde(default)]
    pub id: Option<String>,
    pub username: String,
    pub points: u32,
    pub streak_days: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ProgressStats {
    pub solved_questions: u32,
    pub total_questions: u32,
    pub total_submissions: u32,
    /// Percentage in `0.0..=100.0`.
    pub accuracy: f64,
}

impl ProgressStats {
    /// Fraction of all questions solved, in `0.0..=1.0`.
    pub fn solved_ratio(&self) -> f64 {
        if self.total_questions == 0 {
            0.0
        } else {
            (self.solved_questions as f64 / self.total_questions as f64).min(1.0)
        }
    }
}

/// Response of `GET /user/progress`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ProgressReport {
    pub user: ProgressUser,
    pub stats: ProgressStats,
}

/// Problem difficulty. Values the client does not know are carried verbatim.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl Difficulty {
    pub const KNOWN: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Other(other) => other,
        }
    }
}

/// A problem stored without a difficulty.
impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Other(String::new())
    }
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Easy" => Difficulty::Easy,
            "Medium" => Difficulty::Medium,
            "Hard" => Difficulty::Hard,
            _ => Difficulty::Other(value),
        }
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the problem list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProblemSummary {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub difficulty: Difficulty,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topic: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: u32,
}

/// An example case. Problems store arbitrary JSON here, not only strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TestCase {
    #[serde(default)]
    pub input: Value,
    #[serde(default)]
    pub expected: Value,
}

impl TestCase {
    pub fn input_text(&self) -> String {
        display_value(&self.input)
    }

    pub fn expected_text(&self) -> String {
        display_value(&self.expected)
    }
}

/// Strings are shown bare, everything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Full problem as shown in the editor.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProblemDetail {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub difficulty: Difficulty,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topic: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub starter_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub test_cases: Vec<TestCase>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubmissionRequest {
    pub code: String,
    pub language: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Passed,
    Failed,
    Error,
}

impl SubmissionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::Passed => "Passed",
            SubmissionStatus::Failed => "Failed",
            SubmissionStatus::Error => "Error",
        }
    }
}

/// Grading result of a submission.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubmissionResult {
    pub status: SubmissionStatus,
    pub score: f64,
    pub passed_test_cases: u32,
    pub total_test_cases: u32,
    pub points_earned: u32,
}

impl SubmissionResult {
    /// Result shown when the submission request itself failed.
    pub fn request_failed() -> Self {
        Self {
            status: SubmissionStatus::Error,
            score: 0.0,
            passed_test_cases: 0,
            total_test_cases: 0,
            points_earned: 0,
        }
    }

    pub fn is_passed(&self) -> bool {
        self.status == SubmissionStatus::Passed
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub streak_days: u32,
}

/// Reads a nullable column as its type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Error body the backend sends with non-success statuses.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_from_backend_json() {
        let json = r#"{
            "access_token": "abc.def",
            "token_type": "bearer",
            "user": {
                "id": "5b0c",
                "email": "ada@example.com",
                "username": "ada",
                "full_name": "Ada Lovelace",
                "points": 35,
                "streak_days": 2
            }
        }"#;

        let response: AuthResponse = serde_json::from_str(json).unwrap();
        let (identity, credential) = response.into_parts();

        assert_eq!(identity.username, "ada");
        assert_eq!(identity.points, 35);
        assert_eq!(credential.as_str(), "abc.def");
        assert_eq!(credential.bearer(), "Bearer abc.def");
    }

    #[test]
    fn credential_debug_hides_token() {
        let credential = Credential::new("secret-token");
        assert_eq!(format!("{credential:?}"), "Credential(***)");
    }

    #[test]
    fn difficulty_keeps_unknown_values() {
        let known: Difficulty = serde_json::from_str("\"Hard\"").unwrap();
        assert_eq!(known, Difficulty::Hard);

        let unknown: Difficulty = serde_json::from_str("\"Expert\"").unwrap();
        assert_eq!(unknown, Difficulty::Other("Expert".to_string()));
        assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"Expert\"");
    }

    #[test]
    fn submission_status_is_lowercase_on_the_wire() {
        let result: SubmissionResult = serde_json::from_str(
            r#"{"status":"passed","score":100.0,"passed_test_cases":3,"total_test_cases":3,"points_earned":10}"#,
        )
        .unwrap();
        assert!(result.is_passed());
        assert_eq!(result.status.label(), "Passed");
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let identity = Identity {
            id: None,
            username: "grace".to_string(),
            full_name: "  ".to_string(),
            email: "grace@example.com".to_string(),
            points: 0,
            streak_days: 0,
        };
        assert_eq!(identity.display_name(), "grace");
        assert_eq!(identity.initial(), "G");
    }

    #[test]
    fn solved_ratio_handles_empty_catalog() {
        let stats = ProgressStats::default();
        assert_eq!(stats.solved_ratio(), 0.0);

        let stats = ProgressStats {
            solved_questions: 1,
            total_questions: 4,
            total_submissions: 2,
            accuracy: 50.0,
        };
        assert_eq!(stats.solved_ratio(), 0.25);
    }

    #[test]
    fn problem_list_tolerates_null_columns() {
        let problems: Vec<ProblemSummary> = serde_json::from_str(
            r#"[
                {"id":"q-1","title":"Two Sum","difficulty":"Easy","language":"Python","topic":"Arrays","points":10},
                {"id":"q-2","title":"Git basics","difficulty":null,"language":"Git","topic":null,"points":null}
            ]"#,
        )
        .unwrap();

        assert_eq!(problems.len(), 2);
        assert_eq!(problems[1].topic, "");
        assert_eq!(problems[1].points, 0);
        assert_eq!(problems[1].difficulty, Difficulty::default());
    }

    #[test]
    fn test_cases_accept_any_json() {
        let detail: ProblemDetail = serde_json::from_str(
            r#"{
                "id": "q-3",
                "title": "Add",
                "description": null,
                "difficulty": "Easy",
                "language": "JavaScript",
                "topic": "Arrays",
                "starter_code": null,
                "test_cases": [
                    {"input": [1, 2], "expected": 3},
                    {"input": "\"a\", \"b\"", "expected": "ab"}
                ],
                "points": 5
            }"#,
        )
        .unwrap();

        assert_eq!(detail.description, "");
        assert_eq!(detail.starter_code, "");
        assert_eq!(detail.test_cases[0].input_text(), "[1,2]");
        assert_eq!(detail.test_cases[0].expected_text(), "3");
        assert_eq!(detail.test_cases[1].input_text(), "\"a\", \"b\"");
        assert_eq!(detail.test_cases[1].expected_text(), "ab");
    }

    #[test]
    fn identity_tolerates_null_profile_fields() {
        let identity: Identity = serde_json::from_str(
            r#"{"id":"u-9","email":"lin@example.com","username":"lin","full_name":null,"points":null,"streak_days":null}"#,
        )
        .unwrap();

        assert_eq!(identity.display_name(), "lin");
        assert_eq!(identity.points, 0);
    }
}
