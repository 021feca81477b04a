use crate::config::StubConfig;
use crate::interface::NativeGuiCtrl;
use crate::lifecycle::{ServiceState, ShutdownHandle};
use thiserror::Error;
use tracing::{debug, info, warn};
use zbus::connection::Builder;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("DBus error: {0}")]
    Dbus(#[from] zbus::Error),
    #[error("config error: {0}")]
    Config(String),
    #[error("signal handler error: {0}")]
    Signal(String),
}

pub struct StubService {
    config: StubConfig,
    shutdown: ShutdownHandle,
}

impl StubService {
    pub fn new(config: StubConfig) -> Self {
        Self::with_shutdown(config, ShutdownHandle::new())
    }

    pub fn with_shutdown(config: StubConfig, shutdown: ShutdownHandle) -> Self {
        Self { config, shutdown }
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    pub fn state(&self) -> ServiceState {
        self.shutdown.state()
    }

    /// Connect, claim the bus name, register the object and block until the
    /// shutdown handle fires. Transport failures are returned as-is; there is
    /// no retry.
    pub async fn run(&self) -> Result<(), ServiceError> {
        self.config.validate()?;

        debug!("connecting to {}", self.config.address);
        // A second stub must fail on the taken name, not steal it.
        let conn = Builder::address(self.config.address.as_str())?
            .allow_name_replacements(false)
            .replace_existing_names(false)
            .name(self.config.bus_name.as_str())?
            .serve_at(
                self.config.object_path.as_str(),
                NativeGuiCtrl::new(self.shutdown.clone()),
            )?
            .build()
            .await?;

        debug!(
            "registered {} at {}",
            self.config.bus_name, self.config.object_path
        );
        if self.shutdown.mark_running() {
            info!("Service running...");
        } else {
            debug!("stop requested during startup");
        }

        self.shutdown.wait_stopped().await;

        // Let the reply to Quit reach its caller before the socket closes.
        if tokio::time::timeout(self.config.flush_timeout, conn.graceful_shutdown())
            .await
            .is_err()
        {
            warn!(
                "connection still busy after {}ms, closing anyway",
                self.config.flush_timeout.as_millis()
            );
        }

        info!("Service stopped");
        Ok(())
    }
}

pub async fn run_service(config: StubConfig) -> Result<(), ServiceError> {
    StubService::new(config).run().await
}

/// Route SIGINT/SIGTERM into `shutdown`. A second signal while stopping exits
/// immediately.
pub fn install_signal_handler(shutdown: &ShutdownHandle) -> Result<(), ServiceError> {
    let handle = shutdown.clone();
    ctrlc::set_handler(move || {
        if handle.is_stopped() {
            std::process::exit(1);
        }
        info!("termination signal received");
        handle.request_stop();
    })
    .map_err(|e| ServiceError::Signal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_socket_config(dir: &std::path::Path) -> StubConfig {
        let socket = dir.join("no_such_socket");
        StubConfig::default().with_address(&format!("unix:path={}", socket.display()))
    }

    #[tokio::test]
    async fn unreachable_bus_is_a_transport_error() {
        let dir = tempfile::tempdir().unwrap();
        let service = StubService::new(missing_socket_config(dir.path()));

        let err = service.run().await.unwrap_err();
        assert!(matches!(err, ServiceError::Dbus(_)), "got {err:?}");
        assert_eq!(service.state(), ServiceState::NotRunning);
    }

    #[tokio::test]
    async fn invalid_config_fails_before_connecting() {
        let config = StubConfig {
            bus_name: "bad name".to_owned(),
            ..StubConfig::default()
        };
        let err = run_service(config).await.unwrap_err();
        assert!(matches!(err, ServiceError::Config(_)));
    }

    #[test]
    fn shared_handle_controls_service_state() {
        let handle = ShutdownHandle::new();
        let service = StubService::with_shutdown(StubConfig::default(), handle.clone());
        assert_eq!(service.state(), ServiceState::NotRunning);
        handle.request_stop();
        assert_eq!(service.state(), ServiceState::Stopped);
        assert!(service.shutdown_handle().is_stopped());
    }

    #[test]
    fn error_display() {
        let e = ServiceError::Config("bus address is empty".to_owned());
        assert_eq!(e.to_string(), "config error: bus address is empty");
        let e = ServiceError::Signal("already installed".to_owned());
        assert_eq!(e.to_string(), "signal handler error: already installed");
    }
}
