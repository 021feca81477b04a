//! Stub of the `com.jci.nativeguictrl` D-Bus service.
//!
//! Stands in for the head unit's native GUI control service during integration
//! testing. The stub claims the well-known name on the HMI bus, serves one object
//! answering `SetRequiredSurfaces` (always `true`) and `Quit` (ends the run loop),
//! and does nothing else. A blocking client proxy is provided for test harnesses.

pub mod config;
pub mod interface;
pub mod lifecycle;
pub mod proxy;
pub mod service;

pub use config::StubConfig;
pub use interface::{NativeGuiCtrl, DBUS_ADDRESS, DBUS_NAME, DBUS_PATH};
pub use lifecycle::{ServiceState, ShutdownHandle};
pub use proxy::{connect_blocking, NativeGuiCtrlProxy, NativeGuiCtrlProxyBlocking};
pub use service::{install_signal_handler, run_service, ServiceError, StubService};
