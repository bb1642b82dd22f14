//! REST backend client.
//!
//! Every response body is decoded against a fixed schema; a body that does
//! not match is reported as [`DataSourceError::Malformed`] rather than
//! passed on half-parsed.

use std::fmt;
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use brewords_core::error::DataSourceError;
use brewords_core::model::{Category, FlashCard, GuessQuestion, UnscrambleQuestion, User};
use brewords_core::sample;
use brewords_core::settings::{LanguagePair, ProfileEdit};
use brewords_core::traits::DataSource;
use brewords_core::vocabulary::VocabularyWord;

use crate::auth::RegisterForm;
use crate::error::ClientError;

pub const DEFAULT_BASE_URL: &str = "https://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the brewords REST backend.
pub struct ApiClient {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
    token: RwLock<Option<String>>,
    languages: LanguagePair,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("languages", &self.languages)
            .field("token", &self.token().map(|_| "***"))
            .finish()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, DataSourceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| DataSourceError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
            client,
            token: RwLock::new(None),
            languages: LanguagePair::default(),
        })
    }

    /// Request flash cards in `languages` instead of english → ukrainian.
    pub fn with_languages(mut self, languages: LanguagePair) -> Self {
        self.languages = languages;
        self
    }

    pub fn languages(&self) -> LanguagePair {
        self.languages
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The installed bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    /// Install or remove the bearer token sent with every request.
    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = token;
        }
    }

    // -----------------------------------------------------------------------
    // Auth and account
    // -----------------------------------------------------------------------

    /// Create an account. The form is checked locally before anything is sent.
    #[instrument(skip(self, form), fields(email = %form.email))]
    pub async fn register(&self, form: &RegisterForm) -> Result<(), ClientError> {
        form.validate()?;
        let body = RegisterRequest {
            username: &form.name,
            email: &form.email,
            password: &form.password,
            password_repeat: &form.confirm_password,
        };
        self.send(self.request(Method::POST, "/Auth/register").json(&body))
            .await?;
        tracing::info!("registered account");
        Ok(())
    }

    /// Exchange credentials for a token and install it on this client.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<String, DataSourceError> {
        let body = LoginRequest { email, password };
        let response = self
            .send(self.request(Method::POST, "/Auth/login").json(&body))
            .await?;
        let login: LoginResponse = decode(response).await?;
        self.set_token(Some(login.token.clone()));
        Ok(login.token)
    }

    /// Forget the token. Logout has no server-side call.
    pub fn logout(&self) {
        self.set_token(None);
    }

    #[instrument(skip(self))]
    pub async fn profile(&self) -> Result<User, DataSourceError> {
        let response = self.send(self.request(Method::GET, "/Account/info")).await?;
        let profile: ProfileDto = decode(response).await?;
        Ok(profile.into())
    }

    #[instrument(skip(self))]
    pub async fn update_avatar(&self, avatar_url: &str) -> Result<(), DataSourceError> {
        let url = reqwest::Url::parse_with_params(
            &format!("{}/Account/avatar", self.base_url),
            &[("avatarUrl", avatar_url)],
        )
        .map_err(|e| DataSourceError::Network(format!("invalid URL: {e}")))?;
        self.send(self.authorize(self.client.request(Method::PATCH, url)))
            .await?;
        Ok(())
    }

    /// Save a new name and email.
    #[instrument(skip(self))]
    pub async fn update_profile(&self, edit: &ProfileEdit) -> Result<(), DataSourceError> {
        let body = ProfileUpdateRequest {
            user_name: &edit.name,
            email: &edit.email,
        };
        self.send(self.request(Method::PUT, "/Account/info").json(&body))
            .await?;
        Ok(())
    }

    /// Save a phone number, already normalised by the caller.
    #[instrument(skip(self))]
    pub async fn update_phone(&self, phone: &str) -> Result<(), DataSourceError> {
        let body = PhoneRequest { phone_number: phone };
        self.send(self.request(Method::PATCH, "/Account/phone").json(&body))
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn update_birthdate(&self, birthdate: NaiveDate) -> Result<(), DataSourceError> {
        let body = BirthdateRequest { birthdate };
        self.send(self.request(Method::PATCH, "/Account/birthdate").json(&body))
            .await?;
        Ok(())
    }

    /// Avatar images the user can pick from.
    #[instrument(skip(self))]
    pub async fn avatars(&self) -> Result<Vec<String>, DataSourceError> {
        let response = self.send(self.request(Method::GET, "/Avatars")).await?;
        let avatars: Option<Vec<AvatarDto>> = decode(response).await?;
        Ok(avatars
            .unwrap_or_default()
            .into_iter()
            .map(AvatarDto::into_url)
            .collect())
    }

    // -----------------------------------------------------------------------
    // Plumbing
    // -----------------------------------------------------------------------

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.authorize(
            self.client
                .request(method, format!("{}{}", self.base_url, path)),
        )
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header(CONTENT_TYPE, "application/json");
        match self.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and map transport failures and error statuses.
    async fn send(&self, builder: RequestBuilder) -> Result<Response, DataSourceError> {
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                DataSourceError::Timeout(self.timeout_secs)
            } else {
                DataSourceError::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        if status < 400 {
            return Ok(response);
        }

        let path = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status, %path, "request failed");
        Err(match status {
            401 | 403 => DataSourceError::Auth(if body.is_empty() {
                format!("HTTP {status}")
            } else {
                body
            }),
            404 => DataSourceError::NotFound(path),
            _ => DataSourceError::Api {
                status,
                message: body,
            },
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, DataSourceError> {
    let body = response
        .text()
        .await
        .map_err(|e| DataSourceError::Network(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| DataSourceError::Malformed(e.to_string()))
}

#[async_trait]
impl DataSource for ApiClient {
    fn name(&self) -> &str {
        "api"
    }

    #[instrument(skip(self))]
    async fn fetch_categories(&self) -> Result<Vec<Category>, DataSourceError> {
        let response = self
            .send(self.request(Method::GET, "/Categories/approved"))
            .await?;
        let categories: Option<Vec<CategoryDto>> = decode(response).await?;
        Ok(categories
            .unwrap_or_default()
            .into_iter()
            .map(Category::from)
            .collect())
    }

    #[instrument(skip(self))]
    async fn fetch_flash_cards(
        &self,
        category_id: &str,
    ) -> Result<Vec<FlashCard>, DataSourceError> {
        let path = format!(
            "/FlashCards/category/{category_id}?originLang={}&destLang={}",
            self.languages.learning.wire_id(),
            self.languages.native.wire_id()
        );
        let response = self.send(self.request(Method::GET, &path)).await?;
        let cards: Option<Vec<FlashCard>> = decode(response).await?;
        Ok(cards.unwrap_or_default())
    }

    // The backend has no game endpoints yet; serve the built-in content.
    async fn fetch_guess_questions(
        &self,
        _category_id: &str,
    ) -> Result<Vec<GuessQuestion>, DataSourceError> {
        Ok(sample::guess_questions())
    }

    async fn fetch_unscramble_questions(
        &self,
        _category_id: &str,
    ) -> Result<Vec<UnscrambleQuestion>, DataSourceError> {
        Ok(sample::unscramble_questions())
    }

    async fn fetch_vocabulary(&self) -> Result<Vec<VocabularyWord>, DataSourceError> {
        Ok(sample::vocabulary())
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
    password_repeat: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileUpdateRequest<'a> {
    user_name: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PhoneRequest<'a> {
    phone_number: &'a str,
}

#[derive(Serialize)]
struct BirthdateRequest {
    birthdate: NaiveDate,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(alias = "accessToken")]
    token: String,
}

/// Ids arrive as strings or numbers depending on the endpoint.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(i64),
}

impl From<WireId> for String {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Text(s) => s,
            WireId::Number(n) => n.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryDto {
    id: WireId,
    name: String,
    #[serde(default = "default_true")]
    is_approved: bool,
    #[serde(default)]
    words_count: u32,
    #[serde(default)]
    sentence_count: u32,
    #[serde(default)]
    created_date: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

fn default_true() -> bool {
    true
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Category {
            id: dto.id.into(),
            name: dto.name,
            is_approved: dto.is_approved,
            word_count: dto.words_count,
            sentence_count: dto.sentence_count,
            created_date: dto.created_date.as_deref().and_then(parse_timestamp),
            image_url: dto.image_url.filter(|u| !u.is_empty()),
        }
    }
}

/// Accepts RFC 3339 and the offset-less form the backend emits.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileDto {
    id: WireId,
    #[serde(alias = "userName", alias = "username")]
    name: String,
    email: String,
    #[serde(default, alias = "avatarUrl")]
    avatar: Option<String>,
}

impl From<ProfileDto> for User {
    fn from(dto: ProfileDto) -> Self {
        User {
            id: dto.id.into(),
            name: dto.name,
            email: dto.email,
            avatar: dto.avatar.filter(|a| !a.is_empty()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AvatarDto {
    Url(String),
    Object {
        #[serde(alias = "imageUrl", alias = "avatarUrl")]
        url: String,
    },
}

impl AvatarDto {
    fn into_url(self) -> String {
        match self {
            AvatarDto::Url(url) | AvatarDto::Object { url } => url,
        }
    }
}
