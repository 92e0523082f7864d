use super::BreedDirectory;
use crate::models::Species;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const DOG_API_BASE_URL: &str = "https://api.thedogapi.com";
const CAT_API_BASE_URL: &str = "https://api.thecatapi.com";

/// One entry in the breed-index response; only the name is used.
#[derive(Debug, Deserialize)]
struct BreedEntry {
    name: String,
}

pub struct BreedApiClient {
    client: Client,
    dog_base_url: String,
    cat_base_url: String,
    timeout: Duration,
}

impl BreedApiClient {
    pub fn new() -> Self {
        Self::new_with_client(Client::new())
    }

    pub fn new_with_client(client: Client) -> Self {
        Self {
            client,
            dog_base_url: DOG_API_BASE_URL.to_string(),
            cat_base_url: CAT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    #[cfg(test)]
    fn with_base_urls(mut self, dog_base_url: String, cat_base_url: String) -> Self {
        self.dog_base_url = dog_base_url;
        self.cat_base_url = cat_base_url;
        self
    }

    async fn fetch(&self, url: &str) -> Result<Vec<String>> {
        debug!("Fetching breed index from {}", url);

        let response = self.client.get(url).timeout(self.timeout).send().await?;

        if !response.status().is_success() {
            return Err(Error::BreedApi(format!(
                "breed index returned status {}",
                response.status()
            )));
        }

        let entries: Vec<BreedEntry> = response.json().await?;
        Ok(entries
            .into_iter()
            .map(|entry| entry.name.to_lowercase())
            .collect())
    }
}

impl Default for BreedApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BreedDirectory for BreedApiClient {
    async fn list(&self, species: Species) -> Vec<String> {
        let base_url = match species {
            Species::Dog => &self.dog_base_url,
            Species::Cat => &self.cat_base_url,
        };
        let url = format!("{}/v1/breeds", base_url);

        match self.fetch(&url).await {
            Ok(breeds) => breeds,
            Err(e) => {
                warn!(
                    "Breed lookup for {} failed: {}. Treating the index as empty.",
                    species.as_str(),
                    e
                );
                Vec::new()
            }
        }
    }
}
