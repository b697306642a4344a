use validator::{Validate, ValidationError};

use super::rule;
use crate::application::stores::SettingsAction;
use crate::domain::settings::AI_MODELS;
use crate::domain::{DomainResult, Settings};

#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_ai_model"))]
pub struct SettingsForm {
    #[validate(length(min = 1, message = "Application name is required"))]
    pub app_name: String,
    pub ai_model: String,
    pub ai_api_connection: String,
}

fn validate_ai_model(form: &SettingsForm) -> Result<(), ValidationError> {
    if AI_MODELS.contains(&form.ai_model.as_str()) {
        Ok(())
    } else {
        Err(rule("ai_model", "Unknown AI model"))
    }
}

impl SettingsForm {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            app_name: settings.app_name.clone(),
            ai_model: settings.ai_model.clone(),
            ai_api_connection: settings.ai_api_connection.clone(),
        }
    }

    /// The three actions a save dispatches, in order.
    pub fn into_actions(self) -> DomainResult<Vec<SettingsAction>> {
        super::check(&self)?;
        Ok(vec![
            SettingsAction::SetAppName(self.app_name),
            SettingsAction::SetAiModel(self.ai_model),
            SettingsAction::SetAiApiConnection(self.ai_api_connection.trim().to_string()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_produces_three_actions() {
        let mut form = SettingsForm::from_settings(&Settings::default());
        form.ai_model = AI_MODELS[1].to_string();
        let actions = form.into_actions().unwrap();
        assert_eq!(actions.len(), 3);
    }

    #[test]
    fn rejects_unknown_model_and_blank_name() {
        let mut form = SettingsForm::from_settings(&Settings::default());
        form.ai_model = "GPT-Fiber".into();
        assert!(form.clone().into_actions().is_err());

        form.ai_model = AI_MODELS[0].to_string();
        form.app_name.clear();
        assert!(form.into_actions().is_err());
    }
}
