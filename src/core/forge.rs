//! Public key lookup on a code forge.
//!
//! Forges publish each user's SSH keys at `https://<forge>/<user>.keys`.

use std::io::Read;

use tracing::{debug, warn};

/// Upper bound on a key listing body.
const MAX_BODY: u64 = 1024 * 1024;

/// Fetches a forge user's public keys.
pub trait KeyFetcher {
    /// Return the non-empty lines served at `url`.
    ///
    /// Failures degrade to an empty list; they never abort the caller.
    fn fetch(&self, url: &str) -> Vec<String>;
}

/// URL serving `user`'s public keys on `forge`.
pub fn keys_url(forge: &str, user: &str) -> String {
    format!("https://{}/{}.keys", forge, user)
}

/// Blocking HTTP fetcher.
pub struct HttpKeyFetcher {
    agent: ureq::Agent,
}

impl HttpKeyFetcher {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl Default for HttpKeyFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyFetcher for HttpKeyFetcher {
    fn fetch(&self, url: &str) -> Vec<String> {
        debug!(url, "fetching keys");

        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(e) => {
                warn!(url, error = %e, "key lookup failed");
                return Vec::new();
            }
        };

        let mut body = String::new();
        if let Err(e) = response
            .into_reader()
            .take(MAX_BODY)
            .read_to_string(&mut body)
        {
            warn!(url, error = %e, "failed to read key listing");
            return Vec::new();
        }

        body.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }
}
