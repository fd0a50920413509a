//! REST client for the admin API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`ApiError::Transport`] since the
//! console only talks to the API from the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell builds one [`ApiContext`] per authenticated session and provides
//! it to routed views. Views never read the token from storage.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses become [`ApiError::Status`] carrying the API's
//! `message`. Under `AuthFailurePolicy::Logout` a 401 also ends the session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use wire::endpoints::{self, ListQuery};
use wire::{ApiError, Listing, LoginRequest, LoginResponse, Page};

use crate::config::{AuthFailurePolicy, ConsoleConfig};
use crate::state::auth::AuthState;
use crate::state::session::{Profile, Session};

#[cfg(not(feature = "hydrate"))]
const BROWSER_ONLY: &str = "API calls are only available in the browser";

/// Bearer-authenticated handle to the admin API.
#[derive(Clone)]
pub struct ApiContext {
    base: String,
    token: String,
    policy: AuthFailurePolicy,
    auth: RwSignal<AuthState>,
}

impl ApiContext {
    pub fn new(config: &ConsoleConfig, session: &Session, auth: RwSignal<AuthState>) -> Self {
        Self {
            base: config.api_base.clone(),
            token: session.token.clone(),
            policy: config.auth_failure_policy,
            auth,
        }
    }

    pub fn url(&self, path: &str) -> String {
        endpoints::join(&self.base, path)
    }

    pub fn authorization(&self) -> String {
        endpoints::bearer(&self.token)
    }

    /// `GET` a JSON body.
    ///
    /// # Errors
    ///
    /// Transport, status and decode failures as [`ApiError`].
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let result = match self.send(Verb::Get, path, None).await {
                Ok(resp) => resp.json::<R>().await.map_err(|e| ApiError::Decode(e.to_string())),
                Err(e) => Err(e),
            };
            self.settle(result)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            self.settle(Err(ApiError::Transport(BROWSER_ONLY.to_owned())))
        }
    }

    /// Fetch one page of `T` from the listing at `path` for `query`.
    ///
    /// # Errors
    ///
    /// As [`ApiContext::get`], plus [`ApiError::Decode`] for a malformed envelope.
    pub async fn fetch_page<T: Listing>(&self, path: &str, query: &ListQuery) -> Result<Page<T>, ApiError> {
        let value = self.get::<serde_json::Value>(&query.to_path(path)).await?;
        Page::from_value(value)
    }

    /// `POST` a JSON body, ignoring the response body.
    ///
    /// # Errors
    ///
    /// Transport and status failures as [`ApiError`].
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.mutate(Verb::Post, path, body).await
    }

    /// `PUT` a JSON body, ignoring the response body.
    ///
    /// # Errors
    ///
    /// Transport and status failures as [`ApiError`].
    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.mutate(Verb::Put, path, body).await
    }

    async fn mutate<B: Serialize>(&self, verb: Verb, path: &str, body: &B) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
            let result = self.send(verb, path, Some(body)).await.map(|_| ());
            self.settle(result)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, path, body);
            self.settle(Err(ApiError::Transport(BROWSER_ONLY.to_owned())))
        }
    }

    #[cfg(feature = "hydrate")]
    async fn send(
        &self,
        verb: Verb,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use gloo_net::http::Request;

        let url = self.url(path);
        let builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
        }
        .header("Authorization", &self.authorization())
        .header("Accept", "application/json");
        let request = match body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &text));
        }
        Ok(resp)
    }

    /// Apply the auth-failure policy to a finished call.
    fn settle<R>(&self, result: Result<R, ApiError>) -> Result<R, ApiError> {
        if let Err(e) = &result {
            if crate::util::auth::should_sign_out(self.policy, e) {
                leptos::logging::warn!("api rejected session token; signing out");
                crate::util::auth::sign_out(self.auth);
            }
        }
        result
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    Get,
    Post,
    Put,
}

/// Exchange credentials for a token via `POST /api/admin/login`.
///
/// # Errors
///
/// Bad credentials arrive as [`ApiError::Status`] with the API's message.
pub async fn login(base: &str, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoints::join(base, endpoints::LOGIN))
            .header("Accept", "application/json")
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &text));
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, request);
        Err(ApiError::Transport(BROWSER_ONLY.to_owned()))
    }
}

/// Session for a successful login. The API does not echo the email, so the
/// one the admin typed is kept.
pub fn session_from_login(resp: LoginResponse, email: &str) -> Session {
    Session {
        token: resp.token,
        profile: Profile {
            admin_id: resp.admin_id,
            name: resp.name.unwrap_or_default(),
            email: email.trim().to_owned(),
        },
    }
}
