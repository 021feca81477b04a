use crate::lifecycle::ShutdownHandle;
use tracing::{debug, info};
use zbus::interface;

pub const DBUS_NAME: &str = "com.jci.nativeguictrl";
pub const DBUS_PATH: &str = "/com/jci/nativeguictrl";
pub const DBUS_ADDRESS: &str = "unix:path=/tmp/dbus_hmi_socket";

/// The object served at [`DBUS_PATH`]. Holds nothing but the handle used by
/// `Quit` to end the run loop.
pub struct NativeGuiCtrl {
    shutdown: ShutdownHandle,
}

impl NativeGuiCtrl {
    pub fn new(shutdown: ShutdownHandle) -> Self {
        Self { shutdown }
    }
}

#[allow(clippy::unused_async, clippy::needless_pass_by_value)]
#[interface(name = "com.jci.nativeguictrl")]
impl NativeGuiCtrl {
    /// In signature `sn`, out signature `b`. Always accepts.
    async fn set_required_surfaces(&self, surfaces: String, fade_operation: i16) -> bool {
        info!("  surfaces method called");
        debug!("D-Bus: SetRequiredSurfaces surfaces={surfaces} fade_operation={fade_operation}");
        true
    }

    async fn quit(&self) {
        info!("  shutting down");
        if !self.shutdown.request_stop() {
            debug!("D-Bus: Quit received while already stopping");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::ServiceState;

    fn setup() -> (ShutdownHandle, NativeGuiCtrl) {
        let handle = ShutdownHandle::new();
        handle.mark_running();
        let iface = NativeGuiCtrl::new(handle.clone());
        (handle, iface)
    }

    #[tokio::test]
    async fn set_required_surfaces_returns_true() {
        let (_handle, iface) = setup();
        assert!(iface.set_required_surfaces("screenA".to_owned(), 2).await);
    }

    #[tokio::test]
    async fn set_required_surfaces_accepts_any_input() {
        let (handle, iface) = setup();
        for (surfaces, fade) in [
            ("", 0),
            ("screenA", i16::MIN),
            ("TV_TOUCH_SURFACE,NATGUI_SURFACE", i16::MAX),
            ("ünïcödé", -1),
        ] {
            assert!(iface.set_required_surfaces(surfaces.to_owned(), fade).await);
        }
        assert_eq!(handle.state(), ServiceState::Running);
    }

    #[tokio::test]
    async fn repeated_calls_do_not_accumulate_state() {
        let (handle, iface) = setup();
        for _ in 0..100 {
            assert!(iface.set_required_surfaces("screenA".to_owned(), 2).await);
        }
        assert_eq!(handle.state(), ServiceState::Running);
    }

    #[tokio::test]
    async fn quit_stops_service() {
        let (handle, iface) = setup();
        iface.quit().await;
        assert_eq!(handle.state(), ServiceState::Stopped);
    }

    #[tokio::test]
    async fn quit_after_surface_calls() {
        let (handle, iface) = setup();
        assert!(iface.set_required_surfaces("screenA".to_owned(), 2).await);
        assert!(iface.set_required_surfaces("screenB".to_owned(), 0).await);
        iface.quit().await;
        assert!(handle.is_stopped());
    }

    #[tokio::test]
    async fn quit_twice_is_harmless() {
        let (handle, iface) = setup();
        iface.quit().await;
        iface.quit().await;
        assert!(handle.is_stopped());
    }

    #[tokio::test]
    async fn quit_wakes_run_loop() {
        let (handle, iface) = setup();
        let waiter = handle.clone();
        let wait = tokio::spawn(async move { waiter.wait_stopped().await });
        iface.quit().await;
        tokio::time::timeout(std::time::Duration::from_secs(5), wait)
            .await
            .unwrap()
            .unwrap();
    }

    #[test]
    fn well_known_identifiers() {
        assert_eq!(DBUS_PATH, format!("/{}", DBUS_NAME.replace('.', "/")));
        assert!(DBUS_ADDRESS.starts_with("unix:path="));
    }
}
