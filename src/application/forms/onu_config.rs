//! ONU configuration editor
//!
//! ```text
//! Closed --open--> Editing --submit--> (validate) --ok--> Closed (record returned for dispatch)
//!                     ^                    |
//!                     +------ rejected ----+
//! ```
//! `cancel` from Editing discards the draft.

use validator::{Validate, ValidationError};

use super::rule;
use crate::domain::{DomainError, DomainResult, Onu, OnuMode, WlanConfig, WlanSecurity};

const REQUIRED: &str = "Please fill in the required fields";
const PPPOE_REQUIRED: &str = "PPPoE username and password are required in PPPoE mode";
const WLAN_PASSWORD_REQUIRED: &str = "WiFi password is required when security is set to password";

/// Editable part of an ONU
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
#[validate(schema(function = "validate_conditional_fields"))]
pub struct OnuConfigForm {
    pub mode: OnuMode,
    pub pppoe_username: String,
    pub pppoe_password: String,
    #[validate(length(min = 1, message = "Please fill in the required fields"))]
    pub vlan: String,
    pub port_binding: Vec<String>,
    #[validate(length(min = 1, message = "Please fill in the required fields"))]
    pub wlan_ssid: String,
    pub wlan_security: WlanSecurity,
    pub wlan_password: String,
}

// Checked in order; the first failing rule is the one reported.
fn validate_conditional_fields(form: &OnuConfigForm) -> Result<(), ValidationError> {
    if form.vlan.trim().parse::<u16>().is_err() {
        return Err(rule("vlan", "VLAN must be a number between 0 and 65535"));
    }
    if form.mode == OnuMode::Pppoe
        && (form.pppoe_username.is_empty() || form.pppoe_password.is_empty())
    {
        return Err(rule("pppoe_credentials", PPPOE_REQUIRED));
    }
    if form.wlan_security == WlanSecurity::Password && form.wlan_password.is_empty() {
        return Err(rule("wlan_password", WLAN_PASSWORD_REQUIRED));
    }
    Ok(())
}

impl OnuConfigForm {
    pub fn from_onu(onu: &Onu) -> Self {
        Self {
            mode: onu.mode,
            pppoe_username: onu.pppoe_username.clone().unwrap_or_default(),
            pppoe_password: onu.pppoe_password.clone().unwrap_or_default(),
            vlan: onu.vlan.to_string(),
            port_binding: onu.port_binding.clone(),
            wlan_ssid: onu.wlan.ssid.clone(),
            wlan_security: onu.wlan.security,
            wlan_password: onu.wlan.password.clone().unwrap_or_default(),
        }
    }

    /// Bind the port if unbound, unbind it otherwise.
    pub fn toggle_port(&mut self, port: &str) {
        if let Some(pos) = self.port_binding.iter().position(|p| p == port) {
            self.port_binding.remove(pos);
        } else {
            self.port_binding.push(port.to_string());
        }
    }

    pub fn check(&self) -> DomainResult<()> {
        super::check(self)
    }

    /// Validate and merge into `onu`. Credentials that do not belong to the
    /// chosen mode/security are dropped.
    pub fn apply_to(&self, onu: &Onu) -> DomainResult<Onu> {
        self.check()?;
        let vlan = self
            .vlan
            .trim()
            .parse()
            .map_err(|_| DomainError::Validation(REQUIRED.into()))?;
        let pppoe = self.mode == OnuMode::Pppoe;
        let secured = self.wlan_security == WlanSecurity::Password;

        Ok(Onu {
            mode: self.mode,
            pppoe_username: pppoe.then(|| self.pppoe_username.clone()),
            pppoe_password: pppoe.then(|| self.pppoe_password.clone()),
            vlan,
            port_binding: self.port_binding.clone(),
            wlan: WlanConfig {
                ssid: self.wlan_ssid.clone(),
                security: self.wlan_security,
                password: secured.then(|| self.wlan_password.clone()),
            },
            ..onu.clone()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    Closed,
    Editing,
    /// Still editing, showing the message of the last failed submit
    Rejected(String),
}

#[derive(Debug, Clone)]
struct EditSession {
    target: Onu,
    draft: OnuConfigForm,
    error: Option<String>,
}

/// Holds at most one in-progress edit. Nothing is persisted until a submit
/// succeeds and the caller dispatches the returned record.
#[derive(Debug, Clone, Default)]
pub struct OnuConfigEditor {
    session: Option<EditSession>,
}

impl OnuConfigEditor {
    pub fn phase(&self) -> FormPhase {
        match &self.session {
            None => FormPhase::Closed,
            Some(EditSession {
                error: Some(msg), ..
            }) => FormPhase::Rejected(msg.clone()),
            Some(_) => FormPhase::Editing,
        }
    }

    /// Start editing `onu`, replacing any draft already open.
    pub fn open(&mut self, onu: &Onu) {
        self.session = Some(EditSession {
            target: onu.clone(),
            draft: OnuConfigForm::from_onu(onu),
            error: None,
        });
    }

    pub fn target(&self) -> Option<&Onu> {
        self.session.as_ref().map(|s| &s.target)
    }

    pub fn draft(&self) -> Option<&OnuConfigForm> {
        self.session.as_ref().map(|s| &s.draft)
    }

    pub fn draft_mut(&mut self) -> Option<&mut OnuConfigForm> {
        self.session.as_mut().map(|s| &mut s.draft)
    }

    /// Close without saving.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// Validate the draft. On success the editor closes and the updated
    /// record is returned; on failure it stays open with the message.
    pub fn submit(&mut self) -> DomainResult<Onu> {
        let Some(session) = self.session.as_mut() else {
            return Err(DomainError::Validation("No ONU is being configured".into()));
        };

        match session.draft.apply_to(&session.target) {
            Ok(updated) => {
                self.session = None;
                Ok(updated)
            }
            Err(err) => {
                session.error = Some(err.user_message());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed;

    fn bridge_onu() -> Onu {
        seed::onus().remove(1)
    }

    #[test]
    fn pppoe_without_username_is_rejected_and_form_stays_open() {
        let mut editor = OnuConfigEditor::default();
        editor.open(&bridge_onu());
        {
            let draft = editor.draft_mut().unwrap();
            draft.mode = OnuMode::Pppoe;
            draft.pppoe_username.clear();
            draft.pppoe_password = "secret".into();
        }

        let err = editor.submit().unwrap_err();
        assert_eq!(err.user_message(), PPPOE_REQUIRED);
        assert_eq!(editor.phase(), FormPhase::Rejected(PPPOE_REQUIRED.into()));
        assert_eq!(editor.target().map(|o| o.id.as_str()), Some("2"));
    }

    #[test]
    fn missing_ssid_is_reported_before_conditional_rules() {
        let mut form = OnuConfigForm::from_onu(&bridge_onu());
        form.wlan_ssid.clear();
        form.mode = OnuMode::Pppoe;
        let err = form.check().unwrap_err();
        assert_eq!(err.user_message(), REQUIRED);
    }

    #[test]
    fn password_security_needs_password() {
        let mut form = OnuConfigForm::from_onu(&seed::onus().remove(2));
        form.wlan_security = WlanSecurity::Password;
        assert_eq!(form.check().unwrap_err().user_message(), WLAN_PASSWORD_REQUIRED);
    }

    #[test]
    fn commit_switches_to_bridge_and_drops_credentials() {
        let original = seed::onus().remove(0);
        let mut editor = OnuConfigEditor::default();
        editor.open(&original);
        {
            let draft = editor.draft_mut().unwrap();
            draft.mode = OnuMode::Bridge;
            draft.wlan_security = WlanSecurity::Open;
            draft.vlan = "300".into();
            draft.toggle_port("LAN3");
            draft.toggle_port("LAN1");
        }

        let updated = editor.submit().unwrap();
        assert_eq!(editor.phase(), FormPhase::Closed);
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.vlan, 300);
        assert_eq!(updated.pppoe_username, None);
        assert_eq!(updated.wlan.password, None);
        assert_eq!(updated.port_binding, vec!["LAN2".to_string(), "LAN3".to_string()]);
        assert!(updated.credentials_consistent());
    }

    #[test]
    fn rejected_then_corrected_commits() {
        let mut editor = OnuConfigEditor::default();
        editor.open(&bridge_onu());
        editor.draft_mut().unwrap().vlan = "abc".into();
        assert!(editor.submit().is_err());

        editor.draft_mut().unwrap().vlan = "120".into();
        assert_eq!(editor.submit().unwrap().vlan, 120);
    }

    #[test]
    fn cancel_discards_edits() {
        let mut editor = OnuConfigEditor::default();
        editor.open(&bridge_onu());
        editor.draft_mut().unwrap().wlan_ssid = "Changed".into();
        editor.cancel();

        assert_eq!(editor.phase(), FormPhase::Closed);
        assert!(editor.draft().is_none());
        assert!(editor.submit().is_err());
    }
}
