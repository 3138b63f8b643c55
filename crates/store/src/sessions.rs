use carelink_core::{
    errors::{CareError, CareResult},
    models::session::{AdminSession, Credential, ProviderSession, Role, UserSession},
};
use eyre::WrapErr;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};

use crate::storage::LocalStorage;

/// Session state for a single role, mirrored to local storage.
///
/// The in-memory copy only changes after the storage write succeeded, so a
/// failed save leaves the previous session in place.
pub struct SessionStore<C: Credential> {
    storage: Arc<dyn LocalStorage>,
    current: RwLock<Option<C>>,
}

impl<C: Credential> SessionStore<C> {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            storage,
            current: RwLock::new(None),
        }
    }

    pub fn role(&self) -> Role {
        C::ROLE
    }

    /// Reads the persisted session into memory. An entry that no longer
    /// parses is logged and treated as signed out.
    pub fn load(&self) -> CareResult<Option<C>> {
        let loaded = match self.storage.get_item(C::ROLE.storage_key())? {
            Some(raw) => match serde_json::from_str::<C>(&raw) {
                Ok(credential) => Some(credential),
                Err(err) => {
                    warn!("Ignoring unreadable {} session: {}", C::ROLE, err);
                    None
                }
            },
            None => None,
        };
        self.set_current(loaded.clone());
        Ok(loaded)
    }

    pub fn save(&self, credential: C) -> CareResult<()> {
        let raw = serde_json::to_string(&credential)
            .wrap_err_with(|| format!("cannot serialize {} session", C::ROLE))?;
        self.storage.set_item(C::ROLE.storage_key(), &raw)?;
        self.set_current(Some(credential));
        info!("Saved {} session", C::ROLE);
        Ok(())
    }

    pub fn clear(&self) -> CareResult<()> {
        self.storage.remove_item(C::ROLE.storage_key())?;
        self.set_current(None);
        info!("Cleared {} session", C::ROLE);
        Ok(())
    }

    pub fn current(&self) -> Option<C> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_active(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// The current session, or [`CareError::Session`] when signed out.
    pub fn require(&self) -> CareResult<C> {
        self.current()
            .ok_or_else(|| CareError::Session(C::ROLE.to_string()))
    }

    /// Applies `change` to a copy of the current session and saves the copy
    /// as the new session.
    pub fn update(&self, change: impl FnOnce(&mut C)) -> CareResult<C> {
        let mut next = self.require()?;
        change(&mut next);
        self.save(next.clone())?;
        Ok(next)
    }

    fn set_current(&self, value: Option<C>) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = value;
    }
}

/// The three role-scoped stores, created together over one backend.
pub struct Sessions {
    pub user: SessionStore<UserSession>,
    pub provider: SessionStore<ProviderSession>,
    pub admin: SessionStore<AdminSession>,
}

impl Sessions {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            user: SessionStore::new(storage.clone()),
            provider: SessionStore::new(storage.clone()),
            admin: SessionStore::new(storage),
        }
    }

    /// Loads every role's persisted session, as on an application reload.
    pub fn restore(&self) -> CareResult<Vec<Role>> {
        self.user.load()?;
        self.provider.load()?;
        self.admin.load()?;
        Ok(self.active_roles())
    }

    pub fn active_roles(&self) -> Vec<Role> {
        let mut roles = Vec::new();
        if self.user.is_active() {
            roles.push(Role::User);
        }
        if self.provider.is_active() {
            roles.push(Role::ServiceProvider);
        }
        if self.admin.is_active() {
            roles.push(Role::Admin);
        }
        roles
    }
}
