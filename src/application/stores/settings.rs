//! Branding and AI configuration store

use serde::{Deserialize, Serialize};

use super::SettingsAction;
use crate::domain::{seed, Settings};
use crate::notifications::Event;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsStore {
    settings: Settings,
    #[serde(skip)]
    revision: u64,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl SettingsStore {
    pub fn seeded() -> Self {
        Self {
            settings: seed::settings(),
            revision: 0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn reduce(&mut self, action: SettingsAction) -> Option<Event> {
        let settings = &mut self.settings;
        let changed = match action {
            SettingsAction::SetAppName(name) => replace(&mut settings.app_name, name),
            SettingsAction::SetAiModel(model) => replace(&mut settings.ai_model, model),
            SettingsAction::SetAiApiConnection(url) => {
                replace(&mut settings.ai_api_connection, url)
            }
            SettingsAction::SetLogoUrl(url) => replace(&mut settings.logo_url, url),
            SettingsAction::SetSplashBackgroundUrl(url) => {
                replace(&mut settings.splash_background_url, url)
            }
        };
        if changed {
            self.revision += 1;
        }
        changed.then_some(Event::SettingsChanged)
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
