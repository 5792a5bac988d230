//! JSON fetching over HTTP.
//!
//! The [`Transport`] trait decouples [`get_json`] from the real network client
//! ([`UreqTransport`]). Tests substitute a recording transport that returns a
//! prepared body without opening a connection.

use std::io::Read;

use anyhow::{Context, Result, anyhow, bail};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::config::UtilsConfig;

/// Abstraction over a single synchronous HTTP GET.
pub trait Transport {
    /// Perform one GET against `url` and return the response body.
    fn get(&self, url: &str) -> Result<String>;
}

/// Transport backed by a blocking `ureq` agent.
///
/// One request per call: no retries, no caching and no timeout beyond the
/// agent defaults.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Build an agent that sends `cfg.user_agent` with every request.
    pub fn new(cfg: &UtilsConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(&cfg.user_agent)
            .build();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    #[instrument(skip(self))]
    fn get(&self, url: &str) -> Result<String> {
        info!("sending request");
        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => {
                warn!(status = code, "server returned error status");
                bail!("GET {url} returned status {code}");
            }
            Err(err) => return Err(anyhow!("GET {url}: {err}")),
        };
        debug!(status = response.status(), "response received");
        let mut body = String::new();
        response
            .into_reader()
            .read_to_string(&mut body)
            .with_context(|| format!("read response body from {url}"))?;
        Ok(body)
    }
}

/// Fetch `url` through `transport` and parse the body as JSON.
pub fn get_json<T: Transport + ?Sized>(transport: &T, url: &str) -> Result<Value> {
    get_json_as(transport, url)
}

/// Fetch `url` through `transport` and decode the body as JSON of type `D`.
#[instrument(skip(transport))]
pub fn get_json_as<T: Transport + ?Sized, D: DeserializeOwned>(
    transport: &T,
    url: &str,
) -> Result<D> {
    let body = transport.get(url)?;
    debug!(bytes = body.len(), "parsing response body");
    serde_json::from_str(&body).with_context(|| format!("parse json from {url}"))
}
