//! Mutation intents dispatched by screens

use crate::domain::{Olt, Onu, User};

#[derive(Debug, Clone)]
pub enum Action {
    Auth(AuthAction),
    Olt(OltAction),
    Onu(OnuAction),
    Settings(SettingsAction),
}

#[derive(Debug, Clone)]
pub enum AuthAction {
    Login { username: String, password: String },
    Logout,
    AddUser(User),
}

#[derive(Debug, Clone)]
pub enum OltAction {
    Add(Olt),
    Update(Olt),
    Delete(String),
}

#[derive(Debug, Clone)]
pub enum OnuAction {
    Add(Onu),
    Update(Onu),
    Delete(String),
}

#[derive(Debug, Clone)]
pub enum SettingsAction {
    SetAppName(String),
    SetAiModel(String),
    SetAiApiConnection(String),
    SetLogoUrl(Option<String>),
    SetSplashBackgroundUrl(Option<String>),
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}

impl From<OltAction> for Action {
    fn from(action: OltAction) -> Self {
        Action::Olt(action)
    }
}

impl From<OnuAction> for Action {
    fn from(action: OnuAction) -> Self {
        Action::Onu(action)
    }
}

impl From<SettingsAction> for Action {
    fn from(action: SettingsAction) -> Self {
        Action::Settings(action)
    }
}
