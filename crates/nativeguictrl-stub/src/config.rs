use crate::interface::{DBUS_ADDRESS, DBUS_NAME, DBUS_PATH};
use crate::service::ServiceError;
use std::time::Duration;
use zbus::names::WellKnownName;
use zbus::zvariant::ObjectPath;

pub const ENV_ADDRESS: &str = "NATIVEGUICTRL_ADDRESS";
pub const ENV_BUS_NAME: &str = "NATIVEGUICTRL_BUS_NAME";
pub const ENV_OBJECT_PATH: &str = "NATIVEGUICTRL_OBJECT_PATH";

/// How long to wait for in-flight replies (notably the one to `Quit`) before
/// the connection is dropped.
const FLUSH_TIMEOUT_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubConfig {
    pub address: String,
    pub bus_name: String,
    pub object_path: String,
    pub flush_timeout: Duration,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            address: DBUS_ADDRESS.to_owned(),
            bus_name: DBUS_NAME.to_owned(),
            object_path: DBUS_PATH.to_owned(),
            flush_timeout: Duration::from_millis(FLUSH_TIMEOUT_MS),
        }
    }
}

impl StubConfig {
    /// Defaults, overridden by `NATIVEGUICTRL_*` variables that are set and non-empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            address: get(ENV_ADDRESS).unwrap_or(defaults.address),
            bus_name: get(ENV_BUS_NAME).unwrap_or(defaults.bus_name),
            object_path: get(ENV_OBJECT_PATH).unwrap_or(defaults.object_path),
            flush_timeout: defaults.flush_timeout,
        }
    }

    #[must_use]
    pub fn with_address(mut self, address: &str) -> Self {
        address.clone_into(&mut self.address);
        self
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.address.trim().is_empty() {
            return Err(ServiceError::Config("bus address is empty".to_owned()));
        }
        WellKnownName::try_from(self.bus_name.as_str()).map_err(|e| {
            ServiceError::Config(format!("invalid bus name '{}': {e}", self.bus_name))
        })?;
        ObjectPath::try_from(self.object_path.as_str()).map_err(|e| {
            ServiceError::Config(format!("invalid object path '{}': {e}", self.object_path))
        })?;
        Ok(())
    }
}
