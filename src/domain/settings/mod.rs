pub mod model;

pub use model::{Settings, AI_MODELS, DEFAULT_AI_MODEL, DEFAULT_APP_NAME};
