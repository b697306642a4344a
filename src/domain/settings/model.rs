//! Branding and AI configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_APP_NAME: &str = "SmartOLT Monitor";
pub const DEFAULT_AI_MODEL: &str = "Model Analisis V1";

/// AI models selectable in the settings screen
pub const AI_MODELS: [&str; 3] = [
    "Model Analisis V1",
    "Model Prediksi Lanjutan V2",
    "Model Eksperimental V3",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub app_name: String,
    pub ai_model: String,
    /// Endpoint of an external analysis service. Empty means the built-in
    /// simulation is used.
    pub ai_api_connection: String,
    pub logo_url: Option<String>,
    pub splash_background_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            ai_model: DEFAULT_AI_MODEL.to_string(),
            ai_api_connection: String::new(),
            logo_url: None,
            splash_background_url: None,
        }
    }
}
