//! Breed lookup against the public dog/cat breed-index APIs.

pub mod client;
pub mod mock;

pub use client::BreedApiClient;
pub use mock::MockBreedDirectory;

use crate::models::Species;
use async_trait::async_trait;

#[async_trait]
pub trait BreedDirectory: Send + Sync {
    /// Fetch the known breed names for a species, lowercased.
    ///
    /// Lookup failures degrade to an empty list; the caller cannot tell an
    /// unreachable index apart from a species with no breeds.
    async fn list(&self, species: Species) -> Vec<String>;
}

/// Case-insensitive membership check against a fetched breed list.
pub fn is_known_breed(breed_name: &str, known_breeds: &[String]) -> bool {
    let breed_name = breed_name.to_lowercase();
    known_breeds.iter().any(|known| *known == breed_name)
}
