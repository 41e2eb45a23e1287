//! Async client core for the posts service.
//!
//! # Overview
//! `PostApiClient` maps each posts operation onto exactly one HTTP request
//! against a base URL fixed at construction. Responses come back verbatim;
//! transport failures are logged once and returned unchanged.
//!
//! # Design
//! - Every operation has a pure `build_*` counterpart producing an
//!   `HttpRequest`, so request shape is testable without a network.
//! - The network round-trip sits behind the `Transport` trait. The default
//!   `ReqwestTransport` treats non-2xx statuses as failures.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{PostApiClient, DEFAULT_COMPANY_LIMIT};
pub use config::{ClientConfig, BASE_URL_ENV};
pub use error::{ConfigError, RatingError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
pub use types::{Id, Post, PostDraft, Rating};
