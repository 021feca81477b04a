pub mod quit;
pub mod surfaces;

use nativeguictrl_stub::{connect_blocking, NativeGuiCtrlProxyBlocking, StubConfig};
use tracing::debug;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

pub fn json_pretty(value: &impl serde::Serialize) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))
}

pub fn connect(config: &StubConfig) -> Result<NativeGuiCtrlProxyBlocking<'static>, String> {
    debug!(
        "connecting to {} ({} at {})",
        config.address, config.bus_name, config.object_path
    );
    connect_blocking(config).map_err(|e| format!("failed to connect to {}: {e}", config.address))
}
