use crate::error::ImportError;
use log::debug;
use reqwest::blocking::Client;
use std::time::Duration;

pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>, user_agent: &str) -> Result<Self, ImportError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch the page body. Non-2xx responses are treated as failures.
    pub fn fetch(&self, url: &str) -> Result<String, ImportError> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send()?.error_for_status()?;
        let html = response.text()?;
        debug!("Fetched {} bytes from {}", html.len(), url);
        Ok(html)
    }
}
