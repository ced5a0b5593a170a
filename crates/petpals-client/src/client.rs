//! Typed HTTP client for the PetPals REST API.

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use petpals_types::models::{CategoryWithCount, CategoryWithPets};
use petpals_types::{
    AuthResponse, ErrorResponse, FavoriteCheckResponse, LoginRequest, MessageResponse, Pet,
    PetFilter, RegisterRequest, User,
};

use crate::error::ClientError;
use crate::favorites::FavoritesTransport;
use crate::types::ClientConfig;

/// HTTP client for the PetPals API.
///
/// Holds the bearer token captured by `login`/`register`; all favorites
/// endpoints require one. Cheap to share behind an `Arc`.
pub struct PetPalsClient {
    client: Client,
    config: ClientConfig,
    token: RwLock<Option<String>>,
}

impl PetPalsClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config, token: RwLock::new(None) })
    }

    /// Register a new account and store the returned bearer token.
    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let resp = self
            .request(Method::POST, "/auth/register")?
            .json(req)
            .send()
            .await?;
        let auth: AuthResponse = handle(resp).await?;
        self.set_token(Some(auth.token.clone()));
        Ok(auth)
    }

    /// Log in and store the returned bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ClientError> {
        let req = LoginRequest { email: email.to_string(), password: password.to_string() };
        let resp = self.request(Method::POST, "/auth/login")?.json(&req).send().await?;
        let auth: AuthResponse = handle(resp).await?;
        self.set_token(Some(auth.token.clone()));
        Ok(auth)
    }

    /// The authenticated user's profile.
    pub async fn me(&self) -> Result<User, ClientError> {
        let resp = self.authed(Method::GET, "/auth/me")?.send().await?;
        handle(resp).await
    }

    /// Drop the stored token (client-side logout).
    pub fn logout(&self) {
        self.set_token(None);
    }

    /// List pets matching the filter; absent fields are not sent at all.
    pub async fn list_pets(&self, filter: &PetFilter) -> Result<Vec<Pet>, ClientError> {
        let resp = self.request(Method::GET, "/pets")?.query(filter).send().await?;
        handle(resp).await
    }

    pub async fn get_pet(&self, id: &str) -> Result<Pet, ClientError> {
        let resp = self.request(Method::GET, &format!("/pets/{id}"))?.send().await?;
        handle(resp).await
    }

    pub async fn list_categories(&self) -> Result<Vec<CategoryWithCount>, ClientError> {
        let resp = self.request(Method::GET, "/categories")?.send().await?;
        handle(resp).await
    }

    pub async fn get_category(&self, id: &str) -> Result<CategoryWithPets, ClientError> {
        let resp = self.request(Method::GET, &format!("/categories/{id}"))?.send().await?;
        handle(resp).await
    }

    /// Full favorite list for the authenticated user, newest first.
    pub async fn favorites(&self) -> Result<Vec<Pet>, ClientError> {
        let resp = self.authed(Method::GET, "/favorites")?.send().await?;
        handle(resp).await
    }

    /// Add a favorite. A duplicate add is success on the server side.
    pub async fn add_favorite_by_id(&self, pet_id: &str) -> Result<MessageResponse, ClientError> {
        let resp = self.authed(Method::POST, &format!("/favorites/{pet_id}"))?.send().await?;
        handle(resp).await
    }

    pub async fn remove_favorite_by_id(
        &self,
        pet_id: &str,
    ) -> Result<MessageResponse, ClientError> {
        let resp = self.authed(Method::DELETE, &format!("/favorites/{pet_id}"))?.send().await?;
        handle(resp).await
    }

    /// Membership check against the server-of-record.
    pub async fn check_favorite(&self, pet_id: &str) -> Result<bool, ClientError> {
        let resp =
            self.authed(Method::GET, &format!("/favorites/check/{pet_id}"))?.send().await?;
        let check: FavoriteCheckResponse = handle(resp).await?;
        Ok(check.is_favorite)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn set_token(&self, token: Option<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = token;
        }
    }

    fn current_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|slot| slot.clone())
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = format!("{}{}", self.config.base_url, path);
        let mut builder = self.client.request(method, url);
        if let Some(token) = self.current_token() {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        if self.current_token().is_none() {
            return Err(ClientError::NotAuthenticated);
        }
        self.request(method, path)
    }
}

/// Map a response to the expected body, or to a typed error carrying the
/// server's `message` field.
async fn handle<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return resp.json().await.map_err(|e| ClientError::InvalidResponse(e.to_string()));
    }

    let message = match resp.json::<ErrorResponse>().await {
        Ok(body) => body.message,
        Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };
    Err(match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
        _ => ClientError::Api { status: status.as_u16(), message },
    })
}

#[async_trait]
impl FavoritesTransport for PetPalsClient {
    async fn fetch_favorites(&self) -> Result<Vec<Pet>, ClientError> {
        self.favorites().await
    }

    async fn add_favorite(&self, pet_id: &str) -> Result<(), ClientError> {
        self.add_favorite_by_id(pet_id).await.map(|_| ())
    }

    async fn remove_favorite(&self, pet_id: &str) -> Result<(), ClientError> {
        self.remove_favorite_by_id(pet_id).await.map(|_| ())
    }

    async fn fetch_pet(&self, pet_id: &str) -> Result<Pet, ClientError> {
        self.get_pet(pet_id).await
    }
}
