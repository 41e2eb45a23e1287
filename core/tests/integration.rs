//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every client
//! operation over real HTTP through the default reqwest transport. Validates
//! request shape and transport error behavior against an actual server.

use posts_core::{ClientConfig, Id, Post, PostApiClient, PostDraft, Rating, TransportError};
use tokio::net::TcpListener;

async fn start_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { mock_server::run(listener).await });
    format!("http://{addr}")
}

#[tokio::test]
async fn post_lifecycle() {
    let base_url = start_server().await;
    let client = PostApiClient::new(&ClientConfig::new(format!("{base_url}/")));

    // Step 1: list — should be empty.
    let response = client.list_all_posts().await.unwrap();
    assert_eq!(response.status, 200);
    let posts: Vec<Post> = response.json().unwrap();
    assert!(posts.is_empty(), "expected empty list");

    // Step 2: create seven posts for company 7, one for company 8.
    for i in 0..7 {
        let draft = PostDraft::new()
            .field("title", format!("post {i}"))
            .field("rating", 5);
        let response = client.create_post(i, 7, &draft).await.unwrap();
        assert_eq!(response.status, 201);
        let created: Post = response.json().unwrap();
        assert_eq!(created.user_id, Id::from(i));
        assert_eq!(created.company_id, Id::from(7));
        assert_eq!(created.rating, 0.0);
        assert_eq!(created.extra["title"], format!("post {i}"));
    }
    let other = PostDraft::new().field("title", "elsewhere");
    client.create_post("u-x", "8", &other).await.unwrap();

    // Step 3: list all.
    let posts: Vec<Post> = client.list_all_posts().await.unwrap().json().unwrap();
    assert_eq!(posts.len(), 8);

    // Step 4: company listing defaults to five.
    let posts: Vec<Post> = client
        .list_posts_by_company(7, None)
        .await
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(posts.len(), 5);

    // Step 5: explicit limit.
    let posts: Vec<Post> = client
        .list_posts_by_company(7, Some(10))
        .await
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(posts.len(), 7);

    // Step 6: string company id.
    let posts: Vec<Post> = client
        .list_posts_by_company("8", None)
        .await
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].user_id, Id::from("u-x"));

    // Step 7: rate post 3.
    let response = client
        .update_post_rating(3, 42, Rating::try_from(4.5).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status, 200);
    let rated: Post = response.json().unwrap();
    assert_eq!(rated.id, Some(Id::from(3)));
    assert_eq!(rated.rating, 4.5);
    assert_eq!(rated.extra["ratedBy"], 42);
}

#[tokio::test]
async fn rating_unknown_post_returns_status_error() {
    let base_url = start_server().await;
    let client = PostApiClient::new(&ClientConfig::new(base_url));

    let err = client.update_post_rating(404, 1, 3).await.unwrap_err();

    assert!(matches!(err, TransportError::Status { status: 404, .. }), "{err:?}");
}

#[tokio::test]
async fn unreachable_server_returns_request_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = PostApiClient::new(&ClientConfig::new(format!("http://{addr}")));

    let err = client.list_all_posts().await.unwrap_err();

    match err {
        TransportError::Request(inner) => assert!(inner.is_connect(), "{inner:?}"),
        other => panic!("expected request error, got {other:?}"),
    }
}
