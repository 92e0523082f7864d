pub const VISION_BREED: &str = include_str!("../data/prompts/vision_breed.txt");
pub const VISION_CHARACTERISTICS: &str = include_str!("../data/prompts/vision_characteristics.txt");
pub const VISION_TEMPERAMENT: &str = include_str!("../data/prompts/vision_temperament.txt");
pub const VISION_CARE: &str = include_str!("../data/prompts/vision_care.txt");
pub const IMAGE_PROMPT: &str = include_str!("../data/prompts/image_prompt.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}
