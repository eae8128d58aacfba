#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::json;

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/sesh-api");
        cmd.env("SESH_API_PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // The server signs tokens on register/login, so make sure it has a
        // secret even when the developer's .env does not provide one
        if std::env::var("JWT_SECRET").is_err() {
            cmd.env("JWT_SECRET", "integration-test-secret");
        }

        // Inherit environment so the server can see DATABASE_URL from .env
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                // Consider server ready on any health answer, even degraded
                if resp.status() == StatusCode::OK
                    || resp.status() == StatusCode::SERVICE_UNAVAILABLE
                {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// The CRUD suites need a real database behind the server. When none is
/// configured they skip rather than fail, like the server itself degrading
/// to 503 on /health.
pub fn database_available() -> bool {
    std::env::var("DATABASE_URL").is_ok()
}

pub struct TestAccount {
    pub token: String,
    pub username: String,
    pub email: String,
}

/// Register a throwaway user for this test run. The picked port makes the
/// username and email unique enough that reruns against a persistent
/// database do not collide.
pub async fn register_account(
    server: &TestServer,
    client: &reqwest::Client,
    tag: &str,
) -> Result<TestAccount> {
    let username = format!("{}_{}", tag, server.port);
    let email = format!("{}_{}@test.example", tag, server.port);

    let res = client
        .post(format!("{}/register", server.base_url))
        .json(&json!({
            "username": username,
            "email": email,
            "password": "pw123",
            "first_name": "Test",
            "bio": "integration test account",
        }))
        .send()
        .await?;

    anyhow::ensure!(
        res.status() == StatusCode::OK,
        "registration failed with {}",
        res.status()
    );

    let body = res.json::<serde_json::Value>().await?;
    let token = body["token"]
        .as_str()
        .context("register response missing token")?
        .to_string();

    Ok(TestAccount { token, username, email })
}
