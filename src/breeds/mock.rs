use super::BreedDirectory;
use crate::models::Species;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockBreedDirectory {
    breeds: Arc<Mutex<HashMap<Species, Vec<String>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockBreedDirectory {
    pub fn new() -> Self {
        Self {
            breeds: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_breeds(self, species: Species, breeds: Vec<&str>) -> Self {
        self.breeds
            .lock()
            .unwrap()
            .insert(species, breeds.into_iter().map(String::from).collect());
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockBreedDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BreedDirectory for MockBreedDirectory {
    async fn list(&self, species: Species) -> Vec<String> {
        *self.call_count.lock().unwrap() += 1;
        self.breeds
            .lock()
            .unwrap()
            .get(&species)
            .cloned()
            .unwrap_or_default()
    }
}
