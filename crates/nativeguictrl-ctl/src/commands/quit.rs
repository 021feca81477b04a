use super::{json_pretty, EXIT_SUCCESS};
use nativeguictrl_stub::NativeGuiCtrlProxyBlocking;

pub fn run(proxy: &NativeGuiCtrlProxyBlocking<'_>, json: bool) -> Result<u8, String> {
    proxy.quit().map_err(|e| format!("Quit failed: {e}"))?;
    if json {
        println!("{}", json_pretty(&serde_json::json!({ "quit": true }))?);
    } else {
        println!("stub asked to quit");
    }
    Ok(EXIT_SUCCESS)
}
