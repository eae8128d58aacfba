mod common;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::json;

/// The full first-session flow: sign up, read the profile back, post,
/// and see the post in the personal feed.
#[tokio::test]
async fn signup_profile_post_roundtrip() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let username = format!("shreder1_{}", server.port);
    let email = format!("s_{}@example.com", server.port);

    let res = client
        .post(format!("{}/register", server.base_url))
        .json(&json!({
            "username": username,
            "email": email,
            "password": "pw123",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let token = body["token"].as_str().context("missing token")?.to_string();

    let res = client
        .get(format!("{}/profile", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let profile = res.json::<serde_json::Value>().await?;
    assert_eq!(profile["username"], username.as_str());

    let res = client
        .post(format!("{}/posts", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "content": "kickflip" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let post = res.json::<serde_json::Value>().await?;
    assert_eq!(post["content"], "kickflip");

    let res = client
        .get(format!("{}/my-posts", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let posts = body["posts"].as_array().expect("posts array");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["content"], "kickflip");
    Ok(())
}
