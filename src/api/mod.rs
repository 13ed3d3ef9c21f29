use crate::models::{Note, UserProfile};
use crate::storage::{TOKEN_KEY, USER_KEY};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Unauthorized,
    NotFound,
    Network,
    Http,
    Parse,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn unauthorized() -> Self {
        Self {
            kind: ApiErrorKind::Unauthorized,
            message: "Unauthorized".to_string(),
        }
    }

    fn not_found() -> Self {
        Self {
            kind: ApiErrorKind::NotFound,
            message: "Not found".to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {body}"),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

/// Treat NotFound as an absent row rather than a failure. The gateway
/// contract is "no-op, not fatal" for missing fetch/update targets.
fn optional<T>(res: ApiResult<T>) -> ApiResult<Option<T>> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.kind == ApiErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        let default_api_url = "http://localhost:8686".to_string();

        // We support BOTH `window.ENV.API_URL` (documented in README) and
        // `window.ENV.api_url` (legacy/implementation detail) for compatibility.
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    // 1) Prefer README style: API_URL
                    if let Ok(api_url) = js_sys::Reflect::get(&env, &"API_URL".into()) {
                        if let Some(url_str) = api_url.as_string() {
                            return Self { api_url: url_str };
                        }
                    }

                    // 2) Fallback: api_url
                    if let Ok(api_url) = js_sys::Reflect::get(&env, &"api_url".into()) {
                        if let Some(url_str) = api_url.as_string() {
                            return Self { api_url: url_str };
                        }
                    }
                }
            }
        }

        Self {
            api_url: default_api_url,
        }
    }

    /// Feed endpoint base, derived from the API base by scheme swap.
    pub fn ws_url(&self) -> String {
        if let Some(rest) = self.api_url.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = self.api_url.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            self.api_url.clone()
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn get_api_url() -> String {
    EnvConfig::new().api_url
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct SignupRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct AuthResponse {
    pub token: String,
    pub account: UserProfile,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct CreateNoteRequest {
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

/// `parent_id` absent means "root notes" (rows whose parent is null),
/// present means "direct children of that note".
#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct ListNotesRequest {
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct SearchNotesRequest {
    pub owner_id: String,
    pub keyword: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct GetNoteRequest {
    pub owner_id: String,
    pub id: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct UpdateNoteRequest {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct DeleteNoteRequest {
    pub id: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct NoteListResponse {
    pub notes: Vec<Note>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct NoteResponse {
    pub note: Note,
}

#[derive(Clone)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
    pub(crate) token: Option<String>,
}

impl ApiClient {
    #[allow(dead_code)]
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            token: None,
        }
    }

    pub fn load_from_storage() -> Self {
        let base_url = get_api_url();
        let token = leptos::web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten());

        Self { base_url, token }
    }

    pub fn save_to_storage(&self) {
        if let Some(storage) =
            leptos::web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        {
            if let Some(token) = &self.token {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
    }

    pub fn clear_storage() {
        if let Some(storage) =
            leptos::web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub(crate) fn get_auth_token(&self) -> Option<String> {
        self.token.clone()
    }

    pub fn logout(&mut self) {
        self.token = None;
        Self::clear_storage();
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn with_auth_headers(
        mut req: reqwest::RequestBuilder,
        token: Option<String>,
    ) -> reqwest::RequestBuilder {
        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        req
    }

    async fn request_api<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &impl serde::Serialize,
    ) -> ApiResult<T> {
        let client = reqwest::Client::new();
        let url = format!("{}{}", self.base_url, path);
        let mut req = client.post(url);
        req = Self::with_auth_headers(req, self.get_auth_token());
        req = req.json(body);

        let res = req.send().await.map_err(ApiError::network)?;

        if res.status().is_success() {
            res.json().await.map_err(ApiError::parse)
        } else if res.status().as_u16() == 401 {
            Err(ApiError::unauthorized())
        } else if res.status().as_u16() == 404 {
            Err(ApiError::not_found())
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, "Request failed"))
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        self.request_api(
            "/auth/login",
            &LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    pub async fn signup(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> ApiResult<AuthResponse> {
        self.request_api(
            "/auth/signup",
            &SignupRequest {
                email: email.to_string(),
                username: if username.trim().is_empty() {
                    None
                } else {
                    Some(username.to_string())
                },
                password: password.to_string(),
            },
        )
        .await
    }

    /// Create a note. The server assigns `id` and `created_at` and returns
    /// the full row.
    pub async fn create_note(
        &self,
        owner_id: &str,
        title: Option<String>,
        parent_id: Option<i64>,
    ) -> ApiResult<Note> {
        let data: NoteResponse = self
            .request_api(
                "/notes/create",
                &CreateNoteRequest {
                    owner_id: owner_id.to_string(),
                    title,
                    parent_id,
                },
            )
            .await?;
        Ok(data.note)
    }

    /// Root notes when `parent_id` is None, direct children otherwise.
    /// Ordered by `created_at` descending on the server.
    pub async fn find_notes(&self, owner_id: &str, parent_id: Option<i64>) -> ApiResult<Vec<Note>> {
        let data: NoteListResponse = self
            .request_api(
                "/notes/list",
                &ListNotesRequest {
                    owner_id: owner_id.to_string(),
                    parent_id,
                },
            )
            .await?;
        Ok(data.notes)
    }

    /// Case-insensitive substring search over title and content.
    pub async fn find_notes_by_keyword(
        &self,
        owner_id: &str,
        keyword: &str,
    ) -> ApiResult<Vec<Note>> {
        let data: NoteListResponse = self
            .request_api(
                "/notes/search",
                &SearchNotesRequest {
                    owner_id: owner_id.to_string(),
                    keyword: keyword.to_string(),
                },
            )
            .await?;
        Ok(data.notes)
    }

    pub async fn find_one_note(&self, owner_id: &str, id: i64) -> ApiResult<Option<Note>> {
        let res: ApiResult<NoteResponse> = self
            .request_api(
                "/notes/get",
                &GetNoteRequest {
                    owner_id: owner_id.to_string(),
                    id,
                },
            )
            .await;
        Ok(optional(res)?.map(|r| r.note))
    }

    /// Patch title and/or content; returns the full updated row, or None if
    /// the target no longer exists.
    pub async fn update_note(
        &self,
        id: i64,
        title: Option<String>,
        content: Option<String>,
    ) -> ApiResult<Option<Note>> {
        let res: ApiResult<NoteResponse> = self
            .request_api("/notes/update", &UpdateNoteRequest { id, title, content })
            .await;
        Ok(optional(res)?.map(|r| r.note))
    }

    /// Delete `id` and all of its descendants. The recursion happens
    /// server-side; the client names only the subtree root.
    pub async fn delete_note(&self, id: i64) -> ApiResult<()> {
        let res: ApiResult<serde_json::Value> = self
            .request_api("/notes/delete", &DeleteNoteRequest { id })
            .await;
        let _ = optional(res)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_contract_deserialize() {
        let json = r#"{
            "token": "jwt-token",
            "account": {"id": "u-1", "email": "u@example.com", "username": "u"}
        }"#;
        let parsed: AuthResponse = serde_json::from_str(json).expect("auth response should parse");
        assert_eq!(parsed.token, "jwt-token");
        assert_eq!(parsed.account.id, "u-1");
    }

    #[test]
    fn test_note_list_response_contract_deserialize() {
        let json = r#"{
            "notes": [
                {"id": 2, "owner_id": "u-1", "title": "Child", "content": null,
                 "parent_id": 1, "created_at": "2025-08-14T12:40:00Z"},
                {"id": 1, "owner_id": "u-1", "title": "Root", "content": null,
                 "parent_id": null, "created_at": "2025-08-14T12:34:56Z"}
            ]
        }"#;
        let parsed: NoteListResponse = serde_json::from_str(json).expect("list should parse");
        assert_eq!(parsed.notes.len(), 2);
        assert_eq!(parsed.notes[0].parent_id, Some(1));
    }

    #[test]
    fn test_list_request_omits_absent_parent() {
        // Absent parent_id asks for root notes; the key must not be sent at all.
        let v = serde_json::to_value(ListNotesRequest {
            owner_id: "u-1".to_string(),
            parent_id: None,
        })
        .expect("should serialize");
        assert!(v.get("parent_id").is_none());

        let v = serde_json::to_value(ListNotesRequest {
            owner_id: "u-1".to_string(),
            parent_id: Some(9),
        })
        .expect("should serialize");
        assert_eq!(v["parent_id"], 9);
    }

    #[test]
    fn test_update_request_patches_only_given_fields() {
        let v = serde_json::to_value(UpdateNoteRequest {
            id: 3,
            title: Some("Renamed".to_string()),
            content: None,
        })
        .expect("should serialize");
        assert_eq!(v["title"], "Renamed");
        assert!(v.get("content").is_none());
    }

    #[test]
    fn test_optional_maps_not_found_to_none() {
        let hit: ApiResult<i32> = Ok(5);
        assert_eq!(optional(hit).unwrap(), Some(5));

        let miss: ApiResult<i32> = Err(ApiError::not_found());
        assert_eq!(optional(miss).unwrap(), None);

        let err: ApiResult<i32> = Err(ApiError::unauthorized());
        assert!(optional(err).is_err());
    }

    #[test]
    fn test_ws_url_swaps_scheme() {
        let cfg = EnvConfig {
            api_url: "http://localhost:8686".to_string(),
        };
        assert_eq!(cfg.ws_url(), "ws://localhost:8686");

        let cfg = EnvConfig {
            api_url: "https://api.nestnote.example".to_string(),
        };
        assert_eq!(cfg.ws_url(), "wss://api.nestnote.example");
    }

    #[test]
    fn test_api_client_auth_header_roundtrip() {
        let mut client = ApiClient::new("http://localhost:8686".to_string());
        assert!(!client.is_authenticated());
        assert!(client.get_auth_token().is_none());

        client.set_token("my-jwt-token".to_string());
        assert!(client.is_authenticated());
        assert_eq!(client.get_auth_token().as_deref(), Some("my-jwt-token"));
    }
}
