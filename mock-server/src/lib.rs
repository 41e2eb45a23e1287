use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: Value,
    pub company_id: Value,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rated_by: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    pub user_id: Value,
    pub company_id: Value,
    #[serde(default)]
    pub rating: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatePost {
    pub rating: f64,
    pub user_id: Value,
}

#[derive(Deserialize)]
pub struct CompanyQuery {
    #[serde(rename = "_limit")]
    pub limit: Option<usize>,
}

#[derive(Default)]
pub struct Store {
    next_id: u64,
    posts: BTreeMap<u64, Post>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/company/{company_id}", get(list_company_posts))
        .route("/posts/{id}/rating", patch(rate_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Path segments are strings, so `7` matches both `7` and `"7"`.
fn same_company(stored: &Value, requested: &str) -> bool {
    match stored {
        Value::String(s) => s == requested,
        Value::Number(n) => n.to_string() == requested,
        _ => false,
    }
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let store = db.read().await;
    Json(store.posts.values().cloned().collect())
}

async fn list_company_posts(
    State(db): State<Db>,
    Path(company_id): Path<String>,
    Query(query): Query<CompanyQuery>,
) -> Json<Vec<Post>> {
    let store = db.read().await;
    let matching = store
        .posts
        .values()
        .filter(|post| same_company(&post.company_id, &company_id))
        .take(query.limit.unwrap_or(usize::MAX))
        .cloned()
        .collect();
    Json(matching)
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<CreatePost>,
) -> (StatusCode, Json<Post>) {
    let mut store = db.write().await;
    store.next_id += 1;
    let post = Post {
        id: store.next_id,
        user_id: input.user_id,
        company_id: input.company_id,
        rating: input.rating,
        rated_by: None,
        extra: input.extra,
    };
    store.posts.insert(post.id, post.clone());
    tracing::debug!(id = post.id, "created post");
    (StatusCode::CREATED, Json(post))
}

async fn rate_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<RatePost>,
) -> Result<Json<Post>, StatusCode> {
    let mut store = db.write().await;
    let post = store.posts.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    post.rating = input.rating;
    post.rated_by = Some(input.user_id);
    Ok(Json(post.clone()))
}
