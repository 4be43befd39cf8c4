//! Data-access core for the grow-diary social app.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - Two stateless clients, one per backend service: [`AuthClient`] for the
//!   authentication/legal service, [`SocialClient`] for the social/content
//!   service. Each holds a base URL and an optional bearer token.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - Every list accessor takes `Option<Page>` and substitutes its documented
//!   default; filters render before the pagination pair in the query string.
//! - Process-wide UI state (active post, creation progress, notifications,
//!   progress indicator) lives in [`context::AppContexts`], guarded slots
//!   that fail with [`ContextError`] when read outside a provider's lifetime.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod auth;
pub mod context;
pub mod error;
pub mod http;
pub mod page;
pub mod social;
pub mod types;

pub use auth::{AuthClient, LegalSlug};
pub use context::{
    ActivePost, AppContexts, ContextHandle, ContextSlot, CreationProgress, NotificationBadge,
    ProgressIndicator, ProviderGuard,
};
pub use error::{ApiError, ContextError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use page::Page;
pub use social::{FeedScope, SocialClient};
pub use types::{
    Block, Comment, Credentials, Follow, Genetic, GrowPost, LegalDocument, Like, NewComment,
    NewGrowPost, NewPost, NewReel, Notification, NotificationKind, PasswordResetRequest, Phase,
    Post, PostUpdate, Profile, ProfileUpdate, Reel, Registration, Review, ReviewPayload,
    SearchResults, Session, UserProfile, UserSummary,
};
