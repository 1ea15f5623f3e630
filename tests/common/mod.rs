use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

pub const API_TOKEN: &str = "123456";

/// A server process owned by one test. Each test gets an empty store; the
/// process is killed on drop.
pub struct TestServer {
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn(extra_args: &[&str]) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_product-catalog-api"));
        cmd.args(["--host", "127.0.0.1", "--port", &port.to_string()])
            .args(extra_args)
            .env("SECURITY_API_TOKEN", API_TOKEN)
            .env("RUST_LOG", "warn")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/ping", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub async fn start_server() -> Result<TestServer> {
    start_server_with(&[]).await
}

pub async fn start_server_with(extra_args: &[&str]) -> Result<TestServer> {
    let server = TestServer::spawn(extra_args)?;
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}
