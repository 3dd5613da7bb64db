// Shared test harness. Not every test binary uses every helper.
#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

/// HS256 secret the spawned server and the tests agree on.
pub const JWT_SECRET: &str = "secreto-de-integracion";

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    pub fn spawn(extra_env: &[(&str, String)]) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/banca-api");
        cmd.env("BANCA_API_PORT", port.to_string())
            .env("JWT_SECRET", JWT_SECRET)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        for (key, value) in extra_env {
            cmd.env(key, value);
        }

        // Inherit the rest of the environment so the server picks up
        // DATABASE_URL from .env
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    pub async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                // Ready on any health answer, even with the store down
                if resp.status() == StatusCode::OK
                    || resp.status() == StatusCode::SERVICE_UNAVAILABLE
                {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }

    /// True when /health reports the database reachable. Store-dependent
    /// tests probe this and skip when the answer is no.
    pub async fn database_ready(&self) -> bool {
        let client = reqwest::Client::new();
        match client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
        {
            Ok(resp) => resp.status() == StatusCode::OK,
            Err(_) => false,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // The shared static server lives for the whole run; per-test
        // servers (webhook suite) die with their test.
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    // Blank webhook vars pin the shared server to no fan-out even when a
    // developer .env configures targets
    let server = SERVER.get_or_init(|| {
        TestServer::spawn(&[
            ("WEBHOOK_TABLE_FEED_URL", String::new()),
            ("WEBHOOK_AUDIT_TRAIL_URL", String::new()),
        ])
        .expect("failed to spawn server binary")
    });
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Bearer token minted against the pinned test secret.
pub fn bearer_token(sub: &str) -> String {
    let claims = banca_api::auth::Claims::with_expiry(sub, 1);
    banca_api::auth::encode_with_secret(JWT_SECRET, &claims).expect("token generation")
}

/// Token already past the validation leeway, for the expiry matrix.
pub fn expired_token(sub: &str) -> String {
    let claims = banca_api::auth::Claims::with_expiry(sub, -2);
    banca_api::auth::encode_with_secret(JWT_SECRET, &claims).expect("token generation")
}
