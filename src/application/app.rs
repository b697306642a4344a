//! Application context
//!
//! Owns the four stores behind one lock, the persistence backend, the event
//! bus and the device ports. Screens hold an `Arc<App>` and go through it
//! for every mutation: the action is applied, the affected partition is
//! written and the resulting event is published, in that order.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{error, info, warn};

use super::forms::{LoginForm, OltForm, OnuConfigEditor, SettingsForm, UserForm};
use super::services::{
    AnalysisHandle, MockDeviceTelemetry, MockDiagnostics, SessionController, SessionPhase,
};
use super::snapshot::{self, Rehydration};
use super::stores::{
    Action, AuthAction, OltAction, OnuAction, SettingsAction, StoreSet,
};
use super::views::{locations, scope, Capabilities, Route};
use crate::config::{AppConfig, StorageBackend};
use crate::domain::ports::{DeviceTelemetry, Diagnostics, OltTelemetry, OnuTelemetry};
use crate::domain::{DomainError, Olt, Onu, User};
use crate::infrastructure::{
    BootGate, FilePartitionStore, InMemoryPartitionStore, Partition, PartitionStore,
};
use crate::notifications::{create_event_bus, Event, EventSubscriber, SharedEventBus};
use crate::shared::{AppError, AppResult, InfraResult};

pub struct App {
    stores: RwLock<StoreSet>,
    storage: Arc<dyn PartitionStore>,
    events: SharedEventBus,
    session: SessionController,
    diagnostics: Arc<dyn Diagnostics>,
    telemetry: Arc<dyn DeviceTelemetry>,
    boot: BootGate,
    config: AppConfig,
}

impl App {
    /// Context with the simulated ports and the given storage backend.
    pub fn new(config: AppConfig, storage: Arc<dyn PartitionStore>) -> Self {
        let mut stores = StoreSet::seeded();
        apply_branding(&config, &mut stores);

        Self {
            stores: RwLock::new(stores),
            storage,
            events: create_event_bus(),
            session: SessionController::new(&config.simulation),
            diagnostics: Arc::new(MockDiagnostics::new(config.simulation.analysis_delay())),
            telemetry: Arc::new(MockDeviceTelemetry),
            boot: BootGate::new(),
            config,
        }
    }

    /// Pick the storage backend named in the configuration.
    pub fn from_config(config: AppConfig) -> Self {
        let storage: Arc<dyn PartitionStore> = match config.storage.backend {
            StorageBackend::File => {
                let dir = config.storage.resolved_data_dir();
                info!(path = %dir.display(), "Using file storage");
                Arc::new(FilePartitionStore::new(dir))
            }
            StorageBackend::Memory => {
                warn!("Using in-memory storage, state will not survive a restart");
                Arc::new(InMemoryPartitionStore::new())
            }
        };
        Self::new(config, storage)
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_telemetry(mut self, telemetry: Arc<dyn DeviceTelemetry>) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn events(&self) -> &SharedEventBus {
        &self.events
    }

    pub fn subscribe(&self) -> EventSubscriber {
        self.events.subscribe()
    }

    /// Consistent read view of all stores. Waits for rehydration.
    pub async fn state(&self) -> RwLockReadGuard<'_, StoreSet> {
        self.read_ready().await
    }

    // Every entry point goes through these two, so nothing reads or
    // overwrites the seed stores before the persisted state is back.
    async fn read_ready(&self) -> RwLockReadGuard<'_, StoreSet> {
        self.boot.wait_ready().await;
        self.stores.read().await
    }

    async fn write_ready(&self) -> RwLockWriteGuard<'_, StoreSet> {
        self.boot.wait_ready().await;
        self.stores.write().await
    }

    pub fn session_phase(&self) -> SessionPhase {
        self.session.phase()
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    // ── Launch ────────────────────────────────────────────────

    /// Restore persisted state. Runs once per process; later calls return
    /// `None` and leave the stores alone.
    pub async fn rehydrate(&self) -> Option<Rehydration> {
        if !self.boot.try_begin() {
            warn!("Rehydration already performed, ignoring");
            return None;
        }

        let (mut restored, report) = snapshot::restore(self.storage.as_ref()).await;
        if report.seeded.contains(&Partition::Settings) {
            apply_branding(&self.config, &mut restored);
        }

        self.stores.write().await.swap_in(restored);
        self.boot.open();
        self.events.publish(Event::Rehydrated);
        Some(report)
    }

    pub fn is_ready(&self) -> bool {
        self.boot.is_ready()
    }

    /// Resolves once rehydration has completed.
    pub async fn wait_until_ready(&self) {
        self.boot.wait_ready().await
    }

    // ── Dispatch ──────────────────────────────────────────────

    /// Apply an action without any authorization check.
    ///
    /// Returns `Ok(None)` when the action had no effect (unknown id,
    /// unchanged value, rejected login). When the partition cannot be
    /// written the in-memory change stays and the write error is returned.
    pub async fn dispatch(&self, action: impl Into<Action>) -> AppResult<Option<Event>> {
        let mut stores = self.write_ready().await;
        let Some(event) = stores.reduce(action.into()) else {
            return Ok(None);
        };
        self.commit(stores, event.clone()).await?;
        Ok(Some(event))
    }

    /// Persist what `event` touched, then publish it. The write lock is held
    /// until the partition is written so saves cannot reorder.
    async fn commit(&self, stores: RwLockWriteGuard<'_, StoreSet>, event: Event) -> AppResult<()> {
        let saved = match event.partition() {
            Some(partition) => self.persist(&stores, partition).await,
            None => Ok(()),
        };
        drop(stores);

        self.events.publish(event);
        saved.map_err(AppError::from)
    }

    async fn persist(&self, stores: &StoreSet, partition: Partition) -> InfraResult<()> {
        let document = snapshot::encode(stores, partition)?;
        if let Err(e) = self.storage.save(partition, &document).await {
            error!(partition = %partition, error = %e, "Failed to persist partition");
            return Err(e);
        }
        Ok(())
    }

    // ── Session ───────────────────────────────────────────────

    pub async fn login(&self, form: &LoginForm) -> AppResult<User> {
        form.check()?;
        self.boot.wait_ready().await;
        let _attempt = self.session.round_trip(SessionPhase::SigningIn).await?;

        let mut stores = self.write_ready().await;
        let user = stores.auth.login(&form.username, &form.password)?;
        self.commit(
            stores,
            Event::SessionStarted {
                user_id: user.id.clone(),
            },
        )
        .await?;
        Ok(user)
    }

    /// End the session, wipe every persisted partition and return to the
    /// seed roster.
    ///
    /// Storage is purged first. If that fails nothing changes, in memory or
    /// on disk, so a relaunch can never bring back a session that looked
    /// signed out.
    pub async fn logout(&self) -> AppResult<()> {
        self.boot.wait_ready().await;
        let _attempt = self.session.round_trip(SessionPhase::SigningOut).await?;

        let mut stores = self.write_ready().await;
        if let Err(e) = self.storage.purge_all().await {
            error!(error = %e, "Failed to purge persisted state, still signed in");
            return Err(e.into());
        }

        stores.auth.logout();
        let mut fresh = StoreSet::seeded();
        apply_branding(&self.config, &mut fresh);
        stores.swap_in(fresh);
        drop(stores);

        self.events.publish(Event::SessionEnded);
        self.events.publish(Event::StatePurged);
        info!("Signed out, local state purged");
        Ok(())
    }

    pub async fn current_user(&self) -> Option<User> {
        self.read_ready().await.auth.current_user().cloned()
    }

    pub async fn capabilities(&self) -> Option<Capabilities> {
        self.current_user()
            .await
            .map(|user| Capabilities::for_role(user.role))
    }

    /// Where a navigation request lands for the current session.
    pub async fn navigate(&self, requested: Route) -> Route {
        Route::guard(self.read_ready().await.auth.current_user(), requested)
    }

    // ── Screen operations ─────────────────────────────────────

    /// Create an OLT, or overwrite the one with `editing` as id.
    pub async fn save_olt(&self, form: &OltForm, editing: Option<&str>) -> AppResult<Olt> {
        let olt = {
            let stores = self.read_ready().await;
            require(&stores, |c| c.manage_olts, "manage OLTs")?;
            match editing {
                Some(id) => {
                    let existing = stores
                        .olt
                        .get(id)
                        .ok_or_else(|| DomainError::not_found("olt", id))?;
                    form.build_update(existing)?
                }
                None => form.build_new()?,
            }
        };

        let action = match editing {
            Some(_) => OltAction::Update(olt.clone()),
            None => OltAction::Add(olt.clone()),
        };
        match self.dispatch(action).await? {
            Some(_) => Ok(olt),
            // Deleted between the read above and the dispatch
            None => Err(DomainError::not_found("olt", olt.id).into()),
        }
    }

    /// ONUs attached to the OLT are left in place.
    pub async fn delete_olt(&self, olt_id: &str) -> AppResult<()> {
        {
            let stores = self.read_ready().await;
            require(&stores, |c| c.manage_olts, "manage OLTs")?;
        }
        self.dispatch(OltAction::Delete(olt_id.to_string())).await?;
        Ok(())
    }

    pub async fn delete_onu(&self, onu_id: &str) -> AppResult<()> {
        {
            let stores = self.read_ready().await;
            require(&stores, |c| c.delete_onus, "delete ONUs")?;
        }
        self.dispatch(OnuAction::Delete(onu_id.to_string())).await?;
        Ok(())
    }

    pub async fn add_user(&self, form: &UserForm) -> AppResult<User> {
        let user = {
            let stores = self.read_ready().await;
            require(&stores, |c| c.manage_users, "manage users")?;
            form.build(&locations(stores.olt.olts()))?
        };
        self.dispatch(AuthAction::AddUser(user.clone())).await?;
        Ok(user)
    }

    pub async fn save_settings(&self, form: SettingsForm) -> AppResult<()> {
        {
            let stores = self.read_ready().await;
            require(&stores, |c| c.edit_settings, "edit settings")?;
        }
        for action in form.into_actions()? {
            self.dispatch(action).await?;
        }
        Ok(())
    }

    pub async fn set_logo_url(&self, url: Option<String>) -> AppResult<()> {
        self.set_branding_image(SettingsAction::SetLogoUrl(url)).await
    }

    pub async fn set_splash_background_url(&self, url: Option<String>) -> AppResult<()> {
        self.set_branding_image(SettingsAction::SetSplashBackgroundUrl(url))
            .await
    }

    async fn set_branding_image(&self, action: SettingsAction) -> AppResult<()> {
        {
            let stores = self.read_ready().await;
            require(&stores, |c| c.edit_settings, "edit settings")?;
        }
        self.dispatch(action).await?;
        Ok(())
    }

    /// Load an ONU the current user can see into the editor.
    pub async fn open_onu_config(&self, editor: &mut OnuConfigEditor, onu_id: &str) -> AppResult<()> {
        let onu = self.visible_onu(onu_id).await?;
        editor.open(&onu);
        Ok(())
    }

    /// Submit the editor. A rejected draft keeps the editor open and
    /// nothing is dispatched.
    pub async fn save_onu_config(&self, editor: &mut OnuConfigEditor) -> AppResult<Onu> {
        let target_id = editor
            .target()
            .map(|onu| onu.id.clone())
            .ok_or_else(|| DomainError::Validation("No ONU is being configured".into()))?;
        {
            let stores = self.read_ready().await;
            require(&stores, |c| c.configure_onus, "configure ONUs")?;
            let visible = scope(
                stores.auth.current_user(),
                stores.olt.olts(),
                stores.onu.onus(),
            );
            if !visible.contains_onu(&target_id) {
                return Err(DomainError::not_found("onu", target_id).into());
            }
        }

        let updated = editor.submit()?;
        match self.dispatch(OnuAction::Update(updated.clone())).await? {
            Some(_) => Ok(updated),
            None => Err(DomainError::not_found("onu", target_id).into()),
        }
    }

    /// Start the fiber-break analysis for a visible ONU using the AI model
    /// selected in the settings.
    pub async fn start_analysis(&self, onu_id: &str) -> AppResult<AnalysisHandle> {
        let (onu, model) = {
            let stores = self.read_ready().await;
            require(&stores, |c| c.run_diagnostics, "run diagnostics")?;
            let visible = scope(
                stores.auth.current_user(),
                stores.olt.olts(),
                stores.onu.onus(),
            );
            let onu = visible
                .onu(onu_id)
                .cloned()
                .ok_or_else(|| DomainError::not_found("onu", onu_id))?;
            (onu, stores.settings.settings().ai_model.clone())
        };

        info!(onu_id = %onu.id, model = %model, "Starting fiber analysis");
        Ok(AnalysisHandle::spawn(self.diagnostics.clone(), onu, model))
    }

    pub async fn probe_olt(&self, olt_id: &str) -> AppResult<OltTelemetry> {
        let olt = {
            let stores = self.read_ready().await;
            let visible = scope(
                stores.auth.current_user(),
                stores.olt.olts(),
                stores.onu.onus(),
            );
            visible
                .olts
                .iter()
                .find(|o| o.id == olt_id)
                .cloned()
                .ok_or_else(|| DomainError::not_found("olt", olt_id))?
        };
        Ok(self.telemetry.poll_olt(&olt).await?)
    }

    pub async fn probe_onu(&self, onu_id: &str) -> AppResult<OnuTelemetry> {
        let onu = self.visible_onu(onu_id).await?;
        Ok(self.telemetry.poll_onu(&onu).await?)
    }

    async fn visible_onu(&self, onu_id: &str) -> AppResult<Onu> {
        let stores = self.read_ready().await;
        let visible = scope(
            stores.auth.current_user(),
            stores.olt.olts(),
            stores.onu.onus(),
        );
        visible
            .onu(onu_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("onu", onu_id).into())
    }
}

/// The signed-in user, if their role grants `allowed`.
fn require(
    stores: &StoreSet,
    allowed: impl Fn(&Capabilities) -> bool,
    what: &str,
) -> Result<User, DomainError> {
    let user = stores
        .auth
        .current_user()
        .ok_or_else(|| DomainError::Unauthorized("not signed in".into()))?;
    if !allowed(&Capabilities::for_role(user.role)) {
        warn!(user_id = %user.id, role = %user.role, "Not allowed to {}", what);
        return Err(DomainError::Forbidden(format!("Not allowed to {}", what)));
    }
    Ok(user.clone())
}

fn apply_branding(config: &AppConfig, stores: &mut StoreSet) {
    if let Some(name) = config.branding.app_name.clone() {
        stores.reduce(SettingsAction::SetAppName(name).into());
    }
}
