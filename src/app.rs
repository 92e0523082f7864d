//! Application orchestration for the describe and generate flows.

use crate::ai::{mime, GeminiVisionClient, ImageGenerationService, OpenAiImageClient, VisionService};
use crate::breeds::{self, BreedApiClient, BreedDirectory};
use crate::models::{Config, DescribeSection, Species};
use crate::prompts;
use crate::ui::{ConsoleUi, UserInterface};
use crate::{Error, Result};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Pause shown behind the busy line before each vision answer is rendered.
const SECTION_DELAY: Duration = Duration::from_secs(1);

/// Coordinates vision description, breed lookup, and image generation.
pub struct App {
    vision: Box<dyn VisionService>,
    image_gen: Box<dyn ImageGenerationService>,
    breeds: Box<dyn BreedDirectory>,
    ui: Box<dyn UserInterface>,
    section_delay: Duration,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub vision: Box<dyn VisionService>,
    pub image_gen: Box<dyn ImageGenerationService>,
    pub breeds: Box<dyn BreedDirectory>,
    pub ui: Box<dyn UserInterface>,
}

impl App {
    /// Build an app from concrete service dependencies.
    ///
    /// This is primarily useful for integration tests and local harnesses
    /// that need to inject mocks.
    pub fn with_services(services: AppServices, section_delay: Duration) -> Self {
        Self {
            vision: services.vision,
            image_gen: services.image_gen,
            breeds: services.breeds,
            ui: services.ui,
            section_delay,
        }
    }

    /// Construct an app from environment configuration (`Config::from_env`).
    pub fn new() -> Result<Self> {
        let config = Config::from_env()?;

        // Reuse one HTTP connection pool across remote clients.
        let http_client = reqwest::Client::new();

        info!("Vision provider: Gemini (model: {})", config.vision_model);
        let vision = Box::new(GeminiVisionClient::new_with_client(
            config.gemini_api_key.clone(),
            config.vision_model.clone(),
            http_client.clone(),
        ));

        info!("Image provider: OpenAI (model: {})", config.image_model);
        let image_gen = Box::new(OpenAiImageClient::new_with_client(
            config.openai_api_key.clone(),
            config.image_model.clone(),
            http_client.clone(),
        ));

        let breeds = Box::new(BreedApiClient::new_with_client(http_client));

        Ok(Self::with_services(
            AppServices {
                vision,
                image_gen,
                breeds,
                ui: Box::new(ConsoleUi::new()),
            },
            SECTION_DELAY,
        ))
    }

    /// Upload-and-describe flow: four sequential vision prompts about one
    /// pet photo, each answer rendered as received.
    ///
    /// A vision failure aborts the flow; there is no retry or fallback.
    pub async fn describe(&self, image_path: &Path) -> Result<()> {
        info!("Describing pet image: {}", image_path.display());

        let image_bytes = fs::read(image_path)?;
        let mime_type = mime::detect_image_mime(&image_bytes).ok_or_else(|| {
            Error::InvalidInput(format!(
                "{} is not a JPEG or PNG image",
                image_path.display()
            ))
        })?;
        debug!(
            "Read {} byte {} image for description",
            image_bytes.len(),
            mime_type
        );

        self.ui.title("Pet Breed Recognition and Information");
        self.ui.section("Pet Image");
        self.ui
            .image(&image_path.display().to_string(), "Your pet image");
        self.ui.section("Breed Information");

        for section in DescribeSection::ALL {
            self.ui.section(section.title());
            let answer = self
                .vision
                .describe(section.prompt(), &image_bytes, mime_type)
                .await?;
            self.ui.busy("Wait for it...");
            tokio::time::sleep(self.section_delay).await;
            self.ui.paragraph(&answer);
        }

        Ok(())
    }

    /// Name-and-generate flow: validate the breed name against the freshly
    /// fetched index, then request one generated image and display its URL.
    pub async fn generate(&self, species: Species, breed_name: &str) -> Result<()> {
        let breed_name = breed_name.trim();
        if breed_name.is_empty() {
            self.ui.warning("Please enter a breed name.");
            return Ok(());
        }

        let known_breeds = self.breeds.list(species).await;
        debug!(
            "Fetched {} known {} breeds",
            known_breeds.len(),
            species.as_str()
        );

        if !breeds::is_known_breed(breed_name, &known_breeds) {
            self.ui
                .error("There is no breed with this name for this pet.");
            return Ok(());
        }

        let prompt = prompts::render(
            prompts::IMAGE_PROMPT,
            &[
                ("species", species.as_str()),
                ("breed", &breed_name.to_lowercase()),
            ],
        );
        info!("Requesting image generation: {}", prompt);

        let image_url = self.image_gen.generate(&prompt).await?;

        self.ui.image(
            &image_url,
            &format!("Generated image for {} {}", species, breed_name),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{App, AppServices};
    use crate::ai::{MockImageGenerationClient, MockVisionClient};
    use crate::breeds::MockBreedDirectory;
    use crate::models::Species;
    use crate::ui::{MockUi, UiEvent};
    use crate::Error;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn build_test_app(
        vision: MockVisionClient,
        image_gen: MockImageGenerationClient,
        breeds: MockBreedDirectory,
        ui: MockUi,
    ) -> App {
        App::with_services(
            AppServices {
                vision: Box::new(vision),
                image_gen: Box::new(image_gen),
                breeds: Box::new(breeds),
                ui: Box::new(ui),
            },
            Duration::ZERO,
        )
    }

    #[tokio::test]
    async fn test_describe_renders_four_sections_in_order() {
        let dir = tempdir().unwrap();
        let image_path = dir.path().join("pet.png");
        fs::write(&image_path, PNG_MAGIC).unwrap();

        let vision = MockVisionClient::new()
            .with_response("- **Beagle**".to_string())
            .with_response("- Short coat".to_string())
            .with_response("- Friendly".to_string())
            .with_response("- Daily walks".to_string());
        let vision_probe = vision.clone();
        let ui = MockUi::new();
        let ui_probe = ui.clone();

        let app = build_test_app(
            vision,
            MockImageGenerationClient::new(),
            MockBreedDirectory::new(),
            ui,
        );

        app.describe(&image_path).await.unwrap();

        assert_eq!(vision_probe.get_call_count(), 4);

        let sections: Vec<String> = ui_probe
            .events()
            .into_iter()
            .filter_map(|event| match event {
                UiEvent::Section(title) => Some(title),
                _ => None,
            })
            .collect();
        assert_eq!(
            sections,
            vec![
                "Pet Image",
                "Breed Information",
                "Breed",
                "Characteristics",
                "Temperament",
                "Care Requirements"
            ]
        );

        let answers: Vec<String> = ui_probe
            .events()
            .into_iter()
            .filter_map(|event| match event {
                UiEvent::Paragraph(text) => Some(text),
                _ => None,
            })
            .collect();
        assert_eq!(
            answers,
            vec!["- **Beagle**", "- Short coat", "- Friendly", "- Daily walks"]
        );
    }

    #[tokio::test]
    async fn test_describe_rejects_non_image_upload() {
        let dir = tempdir().unwrap();
        let image_path = dir.path().join("notes.txt");
        fs::write(&image_path, b"not an image").unwrap();

        let vision = MockVisionClient::new();
        let vision_probe = vision.clone();

        let app = build_test_app(
            vision,
            MockImageGenerationClient::new(),
            MockBreedDirectory::new(),
            MockUi::new(),
        );

        let err = app.describe(&image_path).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(vision_probe.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_generate_issues_request_for_known_breed() {
        let image_gen = MockImageGenerationClient::new()
            .with_url_response("https://images.test/beagle.png".to_string());
        let image_gen_probe = image_gen.clone();
        let ui = MockUi::new();
        let ui_probe = ui.clone();

        let app = build_test_app(
            MockVisionClient::new(),
            image_gen,
            MockBreedDirectory::new().with_breeds(Species::Dog, vec!["beagle", "poodle"]),
            ui,
        );

        app.generate(Species::Dog, "Beagle").await.unwrap();

        assert_eq!(
            image_gen_probe.prompts(),
            vec!["An image of a dog beagle".to_string()]
        );
        assert_eq!(
            ui_probe.events(),
            vec![UiEvent::Image {
                location: "https://images.test/beagle.png".to_string(),
                caption: "Generated image for Dog Beagle".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_generate_empty_input_warns_without_any_request() {
        let image_gen = MockImageGenerationClient::new();
        let image_gen_probe = image_gen.clone();
        let breeds = MockBreedDirectory::new().with_breeds(Species::Dog, vec!["beagle"]);
        let breeds_probe = breeds.clone();
        let ui = MockUi::new();
        let ui_probe = ui.clone();

        let app = build_test_app(MockVisionClient::new(), image_gen, breeds, ui);

        app.generate(Species::Dog, "   ").await.unwrap();

        assert_eq!(
            ui_probe.events(),
            vec![UiEvent::Warning("Please enter a breed name.".to_string())]
        );
        assert_eq!(breeds_probe.get_call_count(), 0);
        assert_eq!(image_gen_probe.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_generate_unknown_breed_errors_without_generation() {
        let image_gen = MockImageGenerationClient::new();
        let image_gen_probe = image_gen.clone();
        let ui = MockUi::new();
        let ui_probe = ui.clone();

        let app = build_test_app(
            MockVisionClient::new(),
            image_gen,
            MockBreedDirectory::new().with_breeds(Species::Dog, vec!["beagle", "poodle"]),
            ui,
        );

        app.generate(Species::Dog, "Husky").await.unwrap();

        assert_eq!(
            ui_probe.events(),
            vec![UiEvent::Error(
                "There is no breed with this name for this pet.".to_string()
            )]
        );
        assert_eq!(image_gen_probe.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_generate_treats_unfetchable_index_as_unknown() {
        // Lookup failures surface as an empty list, so every name misses.
        let image_gen = MockImageGenerationClient::new();
        let image_gen_probe = image_gen.clone();
        let ui = MockUi::new();
        let ui_probe = ui.clone();

        let app = build_test_app(
            MockVisionClient::new(),
            image_gen,
            MockBreedDirectory::new(),
            ui,
        );

        app.generate(Species::Cat, "Persian").await.unwrap();

        assert_eq!(
            ui_probe.events(),
            vec![UiEvent::Error(
                "There is no breed with this name for this pet.".to_string()
            )]
        );
        assert_eq!(image_gen_probe.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_generate_matches_case_insensitively_for_cats() {
        let image_gen = MockImageGenerationClient::new();
        let image_gen_probe = image_gen.clone();

        let app = build_test_app(
            MockVisionClient::new(),
            image_gen,
            MockBreedDirectory::new().with_breeds(Species::Cat, vec!["persian"]),
            MockUi::new(),
        );

        app.generate(Species::Cat, "PERSIAN").await.unwrap();

        assert_eq!(
            image_gen_probe.prompts(),
            vec!["An image of a cat persian".to_string()]
        );
    }
}
