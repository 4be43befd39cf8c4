//! Domain DTOs for the grow-diary social API.
//!
//! # Design
//! Read models (`Post`, `Comment`, ...) decode responses; write models
//! (`NewPost`, `ProfileUpdate`, ...) encode request bodies. Partial-update
//! payloads use `skip_serializing_if` so omitted fields stay unchanged on
//! the server. These types mirror the mock-server's schema but are defined
//! independently; integration tests catch any drift between the two crates.
//!
//! Dates are carried as raw strings — the client gives no parsing guarantee
//! and imposes no timezone interpretation.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Users and profiles
// ---------------------------------------------------------------------------

/// Compact user shape embedded in posts, comments and follow listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub avatar_url: Option<String>,
}

/// Another user's public profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub followers_count: i64,
    pub following_count: i64,
    pub posts_count: i64,
}

/// The authenticated user's own profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub followers_count: i64,
    pub following_count: i64,
    pub posts_count: i64,
}

/// Partial update of the own profile; omitted fields remain unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Posts, reels and grow posts
// ---------------------------------------------------------------------------

/// A social post as returned by the feed, the user listing and the detail
/// endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub author: UserSummary,
    pub content: String,
    pub image_url: Option<String>,
    pub genetic_id: Option<i64>,
    pub likes_count: i64,
    pub comments_count: i64,
    /// Whether the requesting user likes this post. Absent for anonymous
    /// requests.
    #[serde(default)]
    pub liked: bool,
    pub created_at: String,
}

/// Request payload for creating a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genetic_id: Option<i64>,
}

/// Partial update of an existing post; omitted fields remain unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A short video clip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reel {
    pub id: i64,
    pub author: UserSummary,
    pub video_url: String,
    pub caption: Option<String>,
    pub likes_count: i64,
    pub views_count: i64,
    pub created_at: String,
}

/// Request payload for creating a new reel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReel {
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// A grow-diary entry: a dated update on a plant, tied to a cultivation
/// phase and optionally to the genetic being grown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GrowPost {
    pub id: i64,
    pub author: UserSummary,
    pub content: String,
    pub week: u32,
    pub phase_id: Option<i64>,
    pub genetic_id: Option<i64>,
    pub image_url: Option<String>,
    pub created_at: String,
}

/// Request payload for creating a new grow-diary entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGrowPost {
    pub content: String,
    pub week: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genetic_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

/// A comment on a post. `parent_id` is set on replies to another comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub parent_id: Option<i64>,
    pub author: UserSummary,
    pub content: String,
    pub likes_count: i64,
    pub created_at: String,
}

/// Request payload for creating a comment; set `parent_id` to reply to
/// another comment on the same post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

// ---------------------------------------------------------------------------
// Toggle resources: likes, follows, blocks
// ---------------------------------------------------------------------------

/// The requesting user's like on a post. Presence means "set"; the read
/// accessor maps a 404 to `ApiError::NotFound`, meaning "unset".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Like {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub created_at: String,
}

/// A follow edge from `follower_id` to `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Follow {
    pub id: i64,
    pub user_id: i64,
    pub follower_id: i64,
    pub created_at: String,
}

/// A block of `user_id` by the requesting user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Block {
    pub id: i64,
    pub user_id: i64,
    pub created_at: String,
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

/// A user review of a genetic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub id: i64,
    pub genetic_id: i64,
    pub author: UserSummary,
    pub value: i32,
    pub content: String,
    pub created_at: String,
}

/// Body for creating or updating a review. The backend requires both fields
/// on update as well, so create and update share one payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewPayload {
    pub value: i32,
    pub content: String,
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// What triggered a notification. Unrecognized kinds decode to `Other` so a
/// newer backend does not break older clients.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Like,
    Comment,
    Follow,
    Review,
    #[serde(other)]
    Other,
}

/// An entry in the notification inbox.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub id: i64,
    pub kind: NotificationKind,
    pub actor: UserSummary,
    pub post_id: Option<i64>,
    pub seen: bool,
    pub created_at: String,
}

// ---------------------------------------------------------------------------
// Genetics, phases and search
// ---------------------------------------------------------------------------

/// A strain in the genetics catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genetic {
    pub id: i64,
    pub name: String,
    pub breeder: Option<String>,
    /// Raw variety label as the backend sends it (sativa, indica, hybrid).
    pub variety: Option<String>,
    pub thc: Option<f32>,
    pub cbd: Option<f32>,
    pub rating: Option<f32>,
    pub reviews_count: i64,
}

/// A cultivation phase grow posts can be tagged with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Phase {
    pub id: i64,
    pub name: String,
    pub position: i32,
    pub description: Option<String>,
}

/// Grouped result of a global search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResults {
    pub users: Vec<UserSummary>,
    pub genetics: Vec<Genetic>,
    pub posts: Vec<Post>,
}

// ---------------------------------------------------------------------------
// Authentication and legal
// ---------------------------------------------------------------------------

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Password-reset request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Successful login or registration: the bearer token plus the profile it
/// belongs to. Feed the token to `SocialClient::with_token`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: Profile,
}

/// A legal document (terms of service, privacy policy).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegalDocument {
    pub slug: String,
    pub title: String,
    pub body: String,
    pub updated_at: String,
}
