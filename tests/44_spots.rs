mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn spot_creation_requires_the_core_fields() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let account = common::register_account(server, &client, "spotfields").await?;

    let res = client
        .post(format!("{}/skate-spots", server.base_url))
        .bearer_auth(&account.token)
        .json(&json!({ "name": "Incomplete Ledge" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    for field in ["latitude", "longitude", "obstacles", "best_time_of_day"] {
        assert!(
            body["field_errors"].get(field).is_some(),
            "missing field error for {}: {}",
            field,
            body
        );
    }
    Ok(())
}

#[tokio::test]
async fn created_spot_is_visible_on_the_public_map() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let account = common::register_account(server, &client, "spotcreate").await?;
    let name = format!("Courthouse Ledges {}", server.port);

    let res = client
        .post(format!("{}/skate-spots", server.base_url))
        .bearer_auth(&account.token)
        .json(&json!({
            "name": name,
            "description": "waxed ledges, smooth ground",
            "latitude": "45.516018",
            "longitude": "-122.677620",
            "security_level": "medium",
            "obstacles": "ledges, stair set",
            "best_time_of_day": "evening",
        }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::CREATED);
    let spot = res.json::<serde_json::Value>().await?;
    assert_eq!(spot["name"], name.as_str());
    assert_eq!(spot["latitude"], "45.516018");
    assert!(spot["id"].as_i64().is_some(), "spot missing id: {}", spot);

    // Listing is public; the new spot shows up without a token
    let res = client
        .get(format!("{}/skate-spots", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let spots = body["spots"].as_array().expect("spots array");
    assert!(
        spots.iter().any(|s| s["name"] == name.as_str()),
        "created spot not in listing"
    );
    Ok(())
}

#[tokio::test]
async fn viewport_filter_is_applied_server_side() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let account = common::register_account(server, &client, "viewport").await?;

    let near_name = format!("Near Rail {}", server.port);
    let far_name = format!("Far Bowl {}", server.port);

    for (name, lat, lon) in [
        (&near_name, "37.774900", "-122.419400"),
        (&far_name, "51.507400", "-0.127800"),
    ] {
        let res = client
            .post(format!("{}/skate-spots", server.base_url))
            .bearer_auth(&account.token)
            .json(&json!({
                "name": name,
                "latitude": lat,
                "longitude": lon,
                "obstacles": "rail",
                "best_time_of_day": "morning",
            }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    // A box around the first spot keeps it and drops the second
    let res = client
        .get(format!(
            "{}/skate-spots?latitude=37.7749&longitude=-122.4194&latitude_delta=0.1&longitude_delta=0.1",
            server.base_url
        ))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let spots = body["spots"].as_array().expect("spots array");

    assert!(spots.iter().any(|s| s["name"] == near_name.as_str()), "near spot filtered out");
    assert!(!spots.iter().any(|s| s["name"] == far_name.as_str()), "far spot not filtered");

    // A center without its longitude is rejected
    let res = client
        .get(format!("{}/skate-spots?latitude=37.7749", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
