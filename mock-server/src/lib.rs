//! In-memory mock of the social/content and auth services, used by the
//! core crate's integration tests and for manual runs. Schemas are defined
//! here independently of the core crate; integration tests catch drift.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

const SEED_USER_ID: i64 = 1;

#[derive(Clone, Debug, Default)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub followers_count: i64,
    pub following_count: i64,
    pub posts_count: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub avatar_url: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
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

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PublicProfile {
    pub id: i64,
    pub username: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub followers_count: i64,
    pub following_count: i64,
    pub posts_count: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub author: UserSummary,
    pub content: String,
    pub image_url: Option<String>,
    pub genetic_id: Option<i64>,
    pub likes_count: i64,
    pub comments_count: i64,
    pub liked: bool,
    pub created_at: String,
}

#[derive(Deserialize)]
pub struct CreatePost {
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub genetic_id: Option<i64>,
}

#[derive(Deserialize)]
pub struct UpdatePost {
    pub content: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub parent_id: Option<i64>,
    pub author: UserSummary,
    pub content: String,
    pub likes_count: i64,
    pub created_at: String,
}

#[derive(Deserialize)]
pub struct CreateComment {
    pub content: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Like {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Follow {
    pub id: i64,
    pub user_id: i64,
    pub follower_id: i64,
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub kind: String,
    pub actor: UserSummary,
    pub post_id: Option<i64>,
    pub seen: bool,
    pub created_at: String,
    #[serde(skip_serializing, default)]
    pub recipient_id: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Genetic {
    pub id: i64,
    pub name: String,
    pub breeder: Option<String>,
    pub variety: Option<String>,
    pub thc: Option<f32>,
    pub cbd: Option<f32>,
    pub rating: Option<f32>,
    pub reviews_count: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Phase {
    pub id: i64,
    pub name: String,
    pub position: i32,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct SearchResults {
    pub users: Vec<UserSummary>,
    pub genetics: Vec<Genetic>,
    pub posts: Vec<Post>,
}

#[derive(Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateProfile {
    pub username: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Deserialize)]
pub struct PasswordReset {
    pub email: String,
}

#[derive(Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: Profile,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LegalDocument {
    pub slug: String,
    pub title: String,
    pub body: String,
    pub updated_at: String,
}

fn default_limit() -> usize {
    20
}

#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Deserialize)]
pub struct CommentQuery {
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Default)]
pub struct Store {
    next_id: i64,
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    pub likes: Vec<Like>,
    pub follows: Vec<Follow>,
    pub notifications: Vec<Notification>,
    pub genetics: Vec<Genetic>,
    pub phases: Vec<Phase>,
    pub legal: Vec<LegalDocument>,
}

pub type Db = Arc<RwLock<Store>>;

impl Store {
    /// One user, a small genetics catalog and the cultivation phases.
    /// Dynamic ids start at 100 so they never collide with seed rows.
    pub fn seeded() -> Self {
        let mut store = Store {
            next_id: 100,
            ..Store::default()
        };
        store.users.push(User {
            id: SEED_USER_ID,
            username: "grower_one".to_string(),
            email: "one@growly.app".to_string(),
            password: "hunter2".to_string(),
            ..User::default()
        });
        store.genetics = vec![
            Genetic {
                id: 1,
                name: "OG Kush".to_string(),
                breeder: Some("Imperial Seeds".to_string()),
                variety: Some("hybrid".to_string()),
                thc: Some(19.0),
                cbd: Some(0.3),
                rating: Some(4.5),
                reviews_count: 31,
            },
            Genetic {
                id: 2,
                name: "White Widow".to_string(),
                breeder: Some("Greenhouse".to_string()),
                variety: Some("hybrid".to_string()),
                thc: Some(17.0),
                cbd: None,
                rating: Some(4.2),
                reviews_count: 18,
            },
            Genetic {
                id: 3,
                name: "Northern Lights".to_string(),
                breeder: None,
                variety: Some("indica".to_string()),
                thc: Some(16.0),
                cbd: Some(0.1),
                rating: None,
                reviews_count: 0,
            },
        ];
        store.phases = vec![
            Phase {
                id: 1,
                name: "Germination".to_string(),
                position: 1,
                description: None,
            },
            Phase {
                id: 2,
                name: "Vegetative".to_string(),
                position: 2,
                description: None,
            },
            Phase {
                id: 3,
                name: "Flowering".to_string(),
                position: 3,
                description: Some("Switch to 12/12 light".to_string()),
            },
            Phase {
                id: 4,
                name: "Harvest".to_string(),
                position: 4,
                description: None,
            },
        ];
        store.legal = vec![
            LegalDocument {
                slug: "terms-of-service".to_string(),
                title: "Terms of Service".to_string(),
                body: "Be excellent to each other.".to_string(),
                updated_at: "2025-01-01T00:00:00Z".to_string(),
            },
            LegalDocument {
                slug: "privacy-policy".to_string(),
                title: "Privacy Policy".to_string(),
                body: "We keep your diary between us.".to_string(),
                updated_at: "2025-01-01T00:00:00Z".to_string(),
            },
        ];
        store
    }

    fn take_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// The fixture does not enforce auth: anonymous or unknown tokens fall
    /// back to the seeded user so every route stays exercisable.
    fn caller(&self, headers: &HeaderMap) -> i64 {
        headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer mock-token-"))
            .and_then(|id| id.parse().ok())
            .filter(|id| self.users.iter().any(|u| u.id == *id))
            .unwrap_or(SEED_USER_ID)
    }

    fn summary(&self, user_id: i64) -> UserSummary {
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .map(summary_of)
            .unwrap_or(UserSummary {
                id: user_id,
                username: "deleted".to_string(),
                avatar_url: None,
            })
    }
}

fn summary_of(user: &User) -> UserSummary {
    UserSummary {
        id: user.id,
        username: user.username.clone(),
        avatar_url: user.avatar_url.clone(),
    }
}

fn profile_of(user: &User) -> Profile {
    Profile {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        bio: user.bio.clone(),
        avatar_url: user.avatar_url.clone(),
        followers_count: user.followers_count,
        following_count: user.following_count,
        posts_count: user.posts_count,
    }
}

fn public_profile_of(user: &User) -> PublicProfile {
    PublicProfile {
        id: user.id,
        username: user.username.clone(),
        bio: user.bio.clone(),
        avatar_url: user.avatar_url.clone(),
        followers_count: user.followers_count,
        following_count: user.following_count,
        posts_count: user.posts_count,
    }
}

fn fake_timestamp(id: i64) -> String {
    format!("2025-05-01T12:{:02}:{:02}Z", (id / 60) % 60, id % 60)
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded()));
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/password-reset", post(password_reset))
        .route("/logout", post(logout))
        .route("/legal/{slug}", get(legal_document))
        .route("/feed-social-post/", get(feed_posts))
        .route("/user-social-post/{user_id}", get(user_posts))
        .route("/detailed-social-post/{id}", get(post_detail))
        .route("/social-post/", post(create_post))
        .route("/social-post/{id}", put(update_post).delete(delete_post))
        .route("/listed-comment/{post_id}", get(list_comments))
        .route("/comment/{id}", post(create_comment).delete(delete_comment))
        .route("/like/{post_id}", post(like_post).get(like_state).delete(unlike_post))
        .route("/follow/{user_id}", post(follow_user).get(follow_state).delete(unfollow_user))
        .route("/follower/{user_id}", get(followers))
        .route("/followed/{user_id}", get(followed))
        .route("/notification/", get(notifications).put(mark_notifications_seen))
        .route("/profile/", get(own_profile).put(update_profile))
        .route("/user/{id}", get(user_detail))
        .route("/genetic/", get(genetics))
        .route("/detailed-genetic/{id}", get(genetic_detail))
        .route("/phase/", get(phases))
        .route("/global-research/", get(global_search))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn login(
    State(db): State<Db>,
    Json(input): Json<Credentials>,
) -> Result<Json<Session>, StatusCode> {
    let store = db.read().await;
    let user = store
        .users
        .iter()
        .find(|u| u.email == input.email && u.password == input.password)
        .ok_or(StatusCode::UNAUTHORIZED)?;
    Ok(Json(Session {
        token: format!("mock-token-{}", user.id),
        user: profile_of(user),
    }))
}

async fn register(
    State(db): State<Db>,
    Json(input): Json<Registration>,
) -> Result<(StatusCode, Json<Session>), StatusCode> {
    let mut store = db.write().await;
    if store
        .users
        .iter()
        .any(|u| u.email == input.email || u.username == input.username)
    {
        return Err(StatusCode::CONFLICT);
    }
    let id = store.take_id();
    let user = User {
        id,
        username: input.username,
        email: input.email,
        password: input.password,
        ..User::default()
    };
    store.users.push(user.clone());
    Ok((
        StatusCode::CREATED,
        Json(Session {
            token: format!("mock-token-{id}"),
            user: profile_of(&user),
        }),
    ))
}

async fn password_reset(Json(_input): Json<PasswordReset>) -> StatusCode {
    // Always accepted; the fixture never reveals whether the account exists.
    StatusCode::NO_CONTENT
}

async fn logout() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn legal_document(
    State(db): State<Db>,
    Path(slug): Path<String>,
) -> Result<Json<LegalDocument>, StatusCode> {
    let store = db.read().await;
    store.legal.iter().find(|d| d.slug == slug).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn feed_posts(State(db): State<Db>, Query(q): Query<PageQuery>) -> Json<Vec<Post>> {
    let store = db.read().await;
    Json(store.posts.iter().rev().skip(q.skip).take(q.limit).cloned().collect())
}

async fn user_posts(
    State(db): State<Db>,
    Path(user_id): Path<i64>,
    Query(q): Query<PageQuery>,
) -> Json<Vec<Post>> {
    let store = db.read().await;
    Json(
        store
            .posts
            .iter()
            .rev()
            .filter(|p| p.author.id == user_id)
            .skip(q.skip)
            .take(q.limit)
            .cloned()
            .collect(),
    )
}

async fn post_detail(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, StatusCode> {
    let store = db.read().await;
    store.posts.iter().find(|p| p.id == id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_post(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CreatePost>,
) -> (StatusCode, Json<Post>) {
    let mut store = db.write().await;
    let author_id = store.caller(&headers);
    let id = store.take_id();
    let post = Post {
        id,
        author: store.summary(author_id),
        content: input.content,
        image_url: input.image_url,
        genetic_id: input.genetic_id,
        likes_count: 0,
        comments_count: 0,
        liked: false,
        created_at: fake_timestamp(id),
    };
    store.posts.push(post.clone());
    if let Some(user) = store.users.iter_mut().find(|u| u.id == author_id) {
        user.posts_count += 1;
    }
    (StatusCode::CREATED, Json(post))
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdatePost>,
) -> Result<Json<Post>, StatusCode> {
    let mut store = db.write().await;
    let post = store.posts.iter_mut().find(|p| p.id == id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(content) = input.content {
        post.content = content;
    }
    if let Some(image_url) = input.image_url {
        post.image_url = Some(image_url);
    }
    Ok(Json(post.clone()))
}

async fn delete_post(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    let mut store = db.write().await;
    let Some(index) = store.posts.iter().position(|p| p.id == id) else {
        return StatusCode::NOT_FOUND;
    };
    let post = store.posts.remove(index);
    store.comments.retain(|c| c.post_id != id);
    store.likes.retain(|l| l.post_id != id);
    if let Some(user) = store.users.iter_mut().find(|u| u.id == post.author.id) {
        user.posts_count -= 1;
    }
    StatusCode::NO_CONTENT
}

async fn list_comments(
    State(db): State<Db>,
    Path(post_id): Path<i64>,
    Query(q): Query<CommentQuery>,
) -> Json<Vec<Comment>> {
    let store = db.read().await;
    Json(
        store
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .filter(|c| q.parent_id.is_none() || c.parent_id == q.parent_id)
            .skip(q.skip)
            .take(q.limit)
            .cloned()
            .collect(),
    )
}

async fn create_comment(
    State(db): State<Db>,
    Path(post_id): Path<i64>,
    headers: HeaderMap,
    Json(input): Json<CreateComment>,
) -> Result<(StatusCode, Json<Comment>), StatusCode> {
    let mut store = db.write().await;
    let author_id = store.caller(&headers);
    let post_author = store
        .posts
        .iter()
        .find(|p| p.id == post_id)
        .map(|p| p.author.id)
        .ok_or(StatusCode::NOT_FOUND)?;
    let id = store.take_id();
    let comment = Comment {
        id,
        post_id,
        parent_id: input.parent_id,
        author: store.summary(author_id),
        content: input.content,
        likes_count: 0,
        created_at: fake_timestamp(id),
    };
    store.comments.push(comment.clone());
    if let Some(post) = store.posts.iter_mut().find(|p| p.id == post_id) {
        post.comments_count += 1;
    }
    if post_author != author_id {
        let actor = store.summary(author_id);
        let nid = store.take_id();
        store.notifications.push(Notification {
            id: nid,
            kind: "comment".to_string(),
            actor,
            post_id: Some(post_id),
            seen: false,
            created_at: fake_timestamp(nid),
            recipient_id: post_author,
        });
    }
    Ok((StatusCode::CREATED, Json(comment)))
}

async fn delete_comment(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    let mut store = db.write().await;
    let Some(index) = store.comments.iter().position(|c| c.id == id) else {
        return StatusCode::NOT_FOUND;
    };
    let comment = store.comments.remove(index);
    if let Some(post) = store.posts.iter_mut().find(|p| p.id == comment.post_id) {
        post.comments_count -= 1;
    }
    StatusCode::NO_CONTENT
}

async fn like_post(
    State(db): State<Db>,
    Path(post_id): Path<i64>,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<Like>), StatusCode> {
    let mut store = db.write().await;
    let user_id = store.caller(&headers);
    let post_author = store
        .posts
        .iter()
        .find(|p| p.id == post_id)
        .map(|p| p.author.id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if store.likes.iter().any(|l| l.post_id == post_id && l.user_id == user_id) {
        return Err(StatusCode::CONFLICT);
    }
    let id = store.take_id();
    let like = Like {
        id,
        post_id,
        user_id,
        created_at: fake_timestamp(id),
    };
    store.likes.push(like.clone());
    if let Some(post) = store.posts.iter_mut().find(|p| p.id == post_id) {
        post.likes_count += 1;
        post.liked = true;
    }
    if post_author != user_id {
        let actor = store.summary(user_id);
        let nid = store.take_id();
        store.notifications.push(Notification {
            id: nid,
            kind: "like".to_string(),
            actor,
            post_id: Some(post_id),
            seen: false,
            created_at: fake_timestamp(nid),
            recipient_id: post_author,
        });
    }
    Ok((StatusCode::CREATED, Json(like)))
}

async fn like_state(
    State(db): State<Db>,
    Path(post_id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<Like>, StatusCode> {
    let store = db.read().await;
    let user_id = store.caller(&headers);
    store
        .likes
        .iter()
        .find(|l| l.post_id == post_id && l.user_id == user_id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn unlike_post(
    State(db): State<Db>,
    Path(post_id): Path<i64>,
    headers: HeaderMap,
) -> StatusCode {
    let mut store = db.write().await;
    let user_id = store.caller(&headers);
    let Some(index) = store
        .likes
        .iter()
        .position(|l| l.post_id == post_id && l.user_id == user_id)
    else {
        return StatusCode::NOT_FOUND;
    };
    store.likes.remove(index);
    if let Some(post) = store.posts.iter_mut().find(|p| p.id == post_id) {
        post.likes_count -= 1;
        post.liked = false;
    }
    StatusCode::NO_CONTENT
}

async fn follow_user(
    State(db): State<Db>,
    Path(user_id): Path<i64>,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<Follow>), StatusCode> {
    let mut store = db.write().await;
    let follower_id = store.caller(&headers);
    if !store.users.iter().any(|u| u.id == user_id) {
        return Err(StatusCode::NOT_FOUND);
    }
    if store
        .follows
        .iter()
        .any(|f| f.user_id == user_id && f.follower_id == follower_id)
    {
        return Err(StatusCode::CONFLICT);
    }
    let id = store.take_id();
    let follow = Follow {
        id,
        user_id,
        follower_id,
        created_at: fake_timestamp(id),
    };
    store.follows.push(follow.clone());
    if let Some(user) = store.users.iter_mut().find(|u| u.id == user_id) {
        user.followers_count += 1;
    }
    if let Some(user) = store.users.iter_mut().find(|u| u.id == follower_id) {
        user.following_count += 1;
    }
    let actor = store.summary(follower_id);
    let nid = store.take_id();
    store.notifications.push(Notification {
        id: nid,
        kind: "follow".to_string(),
        actor,
        post_id: None,
        seen: false,
        created_at: fake_timestamp(nid),
        recipient_id: user_id,
    });
    Ok((StatusCode::CREATED, Json(follow)))
}

async fn follow_state(
    State(db): State<Db>,
    Path(user_id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<Follow>, StatusCode> {
    let store = db.read().await;
    let follower_id = store.caller(&headers);
    store
        .follows
        .iter()
        .find(|f| f.user_id == user_id && f.follower_id == follower_id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn unfollow_user(
    State(db): State<Db>,
    Path(user_id): Path<i64>,
    headers: HeaderMap,
) -> StatusCode {
    let mut store = db.write().await;
    let follower_id = store.caller(&headers);
    let Some(index) = store
        .follows
        .iter()
        .position(|f| f.user_id == user_id && f.follower_id == follower_id)
    else {
        return StatusCode::NOT_FOUND;
    };
    store.follows.remove(index);
    if let Some(user) = store.users.iter_mut().find(|u| u.id == user_id) {
        user.followers_count -= 1;
    }
    if let Some(user) = store.users.iter_mut().find(|u| u.id == follower_id) {
        user.following_count -= 1;
    }
    StatusCode::NO_CONTENT
}

async fn followers(
    State(db): State<Db>,
    Path(user_id): Path<i64>,
    Query(q): Query<PageQuery>,
) -> Json<Vec<UserSummary>> {
    let store = db.read().await;
    Json(
        store
            .follows
            .iter()
            .filter(|f| f.user_id == user_id)
            .skip(q.skip)
            .take(q.limit)
            .map(|f| store.summary(f.follower_id))
            .collect(),
    )
}

async fn followed(
    State(db): State<Db>,
    Path(user_id): Path<i64>,
    Query(q): Query<PageQuery>,
) -> Json<Vec<UserSummary>> {
    let store = db.read().await;
    Json(
        store
            .follows
            .iter()
            .filter(|f| f.follower_id == user_id)
            .skip(q.skip)
            .take(q.limit)
            .map(|f| store.summary(f.user_id))
            .collect(),
    )
}

async fn notifications(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(q): Query<PageQuery>,
) -> Json<Vec<Notification>> {
    let store = db.read().await;
    let recipient = store.caller(&headers);
    Json(
        store
            .notifications
            .iter()
            .rev()
            .filter(|n| n.recipient_id == recipient)
            .skip(q.skip)
            .take(q.limit)
            .cloned()
            .collect(),
    )
}

async fn mark_notifications_seen(State(db): State<Db>, headers: HeaderMap) -> StatusCode {
    let mut store = db.write().await;
    let recipient = store.caller(&headers);
    for notification in store.notifications.iter_mut().filter(|n| n.recipient_id == recipient) {
        notification.seen = true;
    }
    StatusCode::NO_CONTENT
}

async fn own_profile(State(db): State<Db>, headers: HeaderMap) -> Result<Json<Profile>, StatusCode> {
    let store = db.read().await;
    let id = store.caller(&headers);
    store
        .users
        .iter()
        .find(|u| u.id == id)
        .map(profile_of)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_profile(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<UpdateProfile>,
) -> Result<Json<Profile>, StatusCode> {
    let mut store = db.write().await;
    let id = store.caller(&headers);
    let user = store.users.iter_mut().find(|u| u.id == id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(username) = input.username {
        user.username = username;
    }
    if let Some(bio) = input.bio {
        user.bio = Some(bio);
    }
    if let Some(avatar_url) = input.avatar_url {
        user.avatar_url = Some(avatar_url);
    }
    Ok(Json(profile_of(user)))
}

async fn user_detail(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<PublicProfile>, StatusCode> {
    let store = db.read().await;
    store
        .users
        .iter()
        .find(|u| u.id == id)
        .map(public_profile_of)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn genetics(State(db): State<Db>, Query(q): Query<SearchQuery>) -> Json<Vec<Genetic>> {
    let store = db.read().await;
    let needle = q.query.unwrap_or_default().to_lowercase();
    Json(
        store
            .genetics
            .iter()
            .filter(|g| g.name.to_lowercase().contains(&needle))
            .skip(q.skip)
            .take(q.limit)
            .cloned()
            .collect(),
    )
}

async fn genetic_detail(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Genetic>, StatusCode> {
    let store = db.read().await;
    store.genetics.iter().find(|g| g.id == id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn phases(State(db): State<Db>, Query(q): Query<SearchQuery>) -> Json<Vec<Phase>> {
    let store = db.read().await;
    let needle = q.query.unwrap_or_default().to_lowercase();
    Json(
        store
            .phases
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .skip(q.skip)
            .take(q.limit)
            .cloned()
            .collect(),
    )
}

async fn global_search(
    State(db): State<Db>,
    Query(q): Query<SearchQuery>,
) -> Json<SearchResults> {
    let store = db.read().await;
    let needle = q.query.unwrap_or_default().to_lowercase();
    let users = store
        .users
        .iter()
        .filter(|u| u.username.to_lowercase().contains(&needle))
        .skip(q.skip)
        .take(q.limit)
        .map(summary_of)
        .collect();
    let genetics = store
        .genetics
        .iter()
        .filter(|g| g.name.to_lowercase().contains(&needle))
        .skip(q.skip)
        .take(q.limit)
        .cloned()
        .collect();
    let posts = store
        .posts
        .iter()
        .rev()
        .filter(|p| p.content.to_lowercase().contains(&needle))
        .skip(q.skip)
        .take(q.limit)
        .cloned()
        .collect();
    Json(SearchResults { users, genetics, posts })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_has_catalog_rows_below_the_id_counter() {
        let store = Store::seeded();
        assert_eq!(store.users.len(), 1);
        assert_eq!(store.genetics.len(), 3);
        assert_eq!(store.phases.len(), 4);
        assert!(store.genetics.iter().all(|g| g.id < 100));
    }

    #[test]
    fn create_post_defaults_optional_fields() {
        let input: CreatePost = serde_json::from_str(r#"{"content":"hello"}"#).unwrap();
        assert_eq!(input.content, "hello");
        assert!(input.image_url.is_none());
        assert!(input.genetic_id.is_none());
    }

    #[test]
    fn create_post_rejects_missing_content() {
        let result: Result<CreatePost, _> = serde_json::from_str(r#"{"image_url":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_post_all_fields_optional() {
        let input: UpdatePost = serde_json::from_str("{}").unwrap();
        assert!(input.content.is_none());
        assert!(input.image_url.is_none());
    }

    #[test]
    fn post_serializes_with_nested_author() {
        let post = Post {
            id: 100,
            author: UserSummary {
                id: 1,
                username: "grower_one".to_string(),
                avatar_url: None,
            },
            content: "hello".to_string(),
            image_url: None,
            genetic_id: Some(1),
            likes_count: 0,
            comments_count: 0,
            liked: false,
            created_at: fake_timestamp(100),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["author"]["username"], "grower_one");
        assert_eq!(json["genetic_id"], 1);
        assert_eq!(json["liked"], false);
    }

    #[test]
    fn notification_recipient_stays_off_the_wire() {
        let notification = Notification {
            id: 100,
            kind: "like".to_string(),
            actor: UserSummary {
                id: 2,
                username: "budmaster".to_string(),
                avatar_url: None,
            },
            post_id: Some(7),
            seen: false,
            created_at: fake_timestamp(100),
            recipient_id: 1,
        };
        let json = serde_json::to_value(&notification).unwrap();
        assert!(json.get("recipient_id").is_none());
        assert_eq!(json["kind"], "like");
    }

    #[test]
    fn fake_timestamps_are_stable_per_id() {
        assert_eq!(fake_timestamp(100), "2025-05-01T12:01:40Z");
        assert_eq!(fake_timestamp(100), fake_timestamp(100));
    }
}
