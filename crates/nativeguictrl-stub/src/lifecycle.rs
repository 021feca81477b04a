use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    NotRunning,
    Running,
    Stopped,
}

impl std::fmt::Display for ServiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceState::NotRunning => write!(f, "not-running"),
            ServiceState::Running => write!(f, "running"),
            ServiceState::Stopped => write!(f, "stopped"),
        }
    }
}

/// Stop-capable handle shared between the run loop and whoever may end it
/// (the `Quit` handler, the signal handler).
///
/// `Stopped` is terminal: once reached, no transition leaves it.
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    tx: Arc<watch::Sender<ServiceState>>,
}

impl Default for ShutdownHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownHandle {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ServiceState::NotRunning);
        Self { tx: Arc::new(tx) }
    }

    pub fn state(&self) -> ServiceState {
        *self.tx.borrow()
    }

    pub fn is_stopped(&self) -> bool {
        self.state() == ServiceState::Stopped
    }

    /// Returns `false` if the service was already running or already stopped.
    pub fn mark_running(&self) -> bool {
        self.tx.send_if_modified(|state| {
            if *state == ServiceState::NotRunning {
                *state = ServiceState::Running;
                true
            } else {
                false
            }
        })
    }

    /// Returns `true` only for the call that actually stopped the service.
    pub fn request_stop(&self) -> bool {
        self.tx.send_if_modified(|state| {
            if *state == ServiceState::Stopped {
                false
            } else {
                *state = ServiceState::Stopped;
                true
            }
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<ServiceState> {
        self.tx.subscribe()
    }

    pub async fn wait_stopped(&self) {
        let mut rx = self.subscribe();
        // The sender lives in `self`, so the channel cannot close underneath us.
        let _ = rx.wait_for(|state| *state == ServiceState::Stopped).await;
    }
}
