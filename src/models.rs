//! Data models and structures
//!
//! Defines the species and description-section domain types plus the
//! environment-driven application configuration.

use crate::prompts;
use clap::ValueEnum;
use std::fmt;

const DEFAULT_VISION_MODEL: &str = "gemini-pro-vision";
const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";

/// Which pet the user is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    /// Lowercase form used in prompts and log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Species::Dog => write!(f, "Dog"),
            Species::Cat => write!(f, "Cat"),
        }
    }
}

/// The four questions asked about an uploaded pet photo, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescribeSection {
    Breed,
    Characteristics,
    Temperament,
    Care,
}

impl DescribeSection {
    pub const ALL: [DescribeSection; 4] = [
        DescribeSection::Breed,
        DescribeSection::Characteristics,
        DescribeSection::Temperament,
        DescribeSection::Care,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DescribeSection::Breed => "Breed",
            DescribeSection::Characteristics => "Characteristics",
            DescribeSection::Temperament => "Temperament",
            DescribeSection::Care => "Care Requirements",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            DescribeSection::Breed => prompts::VISION_BREED,
            DescribeSection::Characteristics => prompts::VISION_CHARACTERISTICS,
            DescribeSection::Temperament => prompts::VISION_TEMPERAMENT,
            DescribeSection::Care => prompts::VISION_CARE,
        }
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub gemini_api_key: String,
    pub vision_model: String,
    pub image_model: String,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .map_err(|_| crate::Error::Config("OPENAI_API_KEY not set".to_string()))?,
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| crate::Error::Config("GEMINI_API_KEY not set".to_string()))?,
            vision_model: std::env::var("GEMINI_VISION_MODEL")
                .unwrap_or_else(|_| DEFAULT_VISION_MODEL.to_string()),
            image_model: std::env::var("OPENAI_IMAGE_MODEL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string()),
        })
    }
}
