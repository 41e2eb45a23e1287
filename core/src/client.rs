//! Async client for the posts API.
//!
//! # Design
//! `PostApiClient` holds the base URL and a transport, both fixed at
//! construction, and carries no mutable state between calls. Each operation
//! is split into a `build_*` method that produces an `HttpRequest` and an
//! async method that sends it. Responses are returned verbatim. On failure
//! the operation emits a single `error!` event and returns the transport's
//! error as-is.

use serde_json::{json, Value};
use tracing::error;

use crate::config::ClientConfig;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{Id, PostDraft, Rating};

/// `_limit` sent by `list_posts_by_company` when the caller passes `None`.
pub const DEFAULT_COMPANY_LIMIT: u32 = 5;

/// Client for the `posts` resource collection.
#[derive(Debug, Clone)]
pub struct PostApiClient<T = ReqwestTransport> {
    base_url: String,
    transport: T,
}

impl PostApiClient<ReqwestTransport> {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T> PostApiClient<T> {
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self {
            base_url: config
                .base_url
                .strip_suffix('/')
                .unwrap_or(&config.base_url)
                .to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    pub fn build_list_all_posts(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.url("posts"),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_list_posts_by_company(&self, company_id: impl Into<Id>, limit: Option<u32>) -> HttpRequest {
        let company_id = company_id.into();
        let limit = limit.unwrap_or(DEFAULT_COMPANY_LIMIT);
        HttpRequest {
            method: HttpMethod::Get,
            url: self.url(&format!("posts/company/{company_id}")),
            query: vec![("_limit".to_string(), limit.to_string())],
            headers: Vec::new(),
            body: None,
        }
    }

    /// The body is the draft's fields with `userId` and `companyId` taken
    /// from the arguments and `rating` forced to 0.
    pub fn build_create_post(
        &self,
        user_id: impl Into<Id>,
        company_id: impl Into<Id>,
        draft: &PostDraft,
    ) -> HttpRequest {
        let mut fields = draft.fields().clone();
        fields.insert("userId".to_string(), Value::from(user_id.into()));
        fields.insert("companyId".to_string(), Value::from(company_id.into()));
        fields.insert("rating".to_string(), Value::from(0));
        HttpRequest {
            method: HttpMethod::Post,
            url: self.url("posts"),
            query: Vec::new(),
            headers: json_headers(),
            body: Some(Value::Object(fields)),
        }
    }

    pub fn build_update_post_rating(
        &self,
        post_id: impl Into<Id>,
        user_id: impl Into<Id>,
        rating: impl Into<Rating>,
    ) -> HttpRequest {
        let post_id = post_id.into();
        HttpRequest {
            method: HttpMethod::Patch,
            url: self.url(&format!("posts/{post_id}/rating")),
            query: Vec::new(),
            headers: json_headers(),
            body: Some(json!({
                "rating": Value::from(rating.into()),
                "userId": Value::from(user_id.into()),
            })),
        }
    }
}

impl<T: Transport> PostApiClient<T> {
    pub async fn list_all_posts(&self) -> Result<HttpResponse, T::Error> {
        let request = self.build_list_all_posts();
        self.transport.execute(request).await.inspect_err(|error| {
            error!(%error, "Error fetching posts");
        })
    }

    /// `limit` defaults to `DEFAULT_COMPANY_LIMIT`.
    pub async fn list_posts_by_company(
        &self,
        company_id: impl Into<Id>,
        limit: Option<u32>,
    ) -> Result<HttpResponse, T::Error> {
        let company_id = company_id.into();
        let request = self.build_list_posts_by_company(company_id.clone(), limit);
        self.transport.execute(request).await.inspect_err(|error| {
            error!(%company_id, %error, "Error fetching posts for company");
        })
    }

    pub async fn create_post(
        &self,
        user_id: impl Into<Id>,
        company_id: impl Into<Id>,
        draft: &PostDraft,
    ) -> Result<HttpResponse, T::Error> {
        let request = self.build_create_post(user_id, company_id, draft);
        self.transport.execute(request).await.inspect_err(|error| {
            error!(%error, "Error creating post");
        })
    }

    pub async fn update_post_rating(
        &self,
        post_id: impl Into<Id>,
        user_id: impl Into<Id>,
        rating: impl Into<Rating>,
    ) -> Result<HttpResponse, T::Error> {
        let request = self.build_update_post_rating(post_id, user_id, rating);
        self.transport.execute(request).await.inspect_err(|error| {
            error!(%error, "Error rating post");
        })
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}
