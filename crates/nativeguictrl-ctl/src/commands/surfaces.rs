use super::{json_pretty, EXIT_SUCCESS};
use nativeguictrl_stub::NativeGuiCtrlProxyBlocking;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SurfacesResponse<'a> {
    surfaces: &'a str,
    fade_operation: i16,
    accepted: bool,
}

pub fn run(
    proxy: &NativeGuiCtrlProxyBlocking<'_>,
    surfaces: &str,
    fade_operation: i16,
    json: bool,
) -> Result<u8, String> {
    let accepted = proxy
        .set_required_surfaces(surfaces, fade_operation)
        .map_err(|e| format!("SetRequiredSurfaces failed: {e}"))?;

    if json {
        println!(
            "{}",
            json_pretty(&SurfacesResponse {
                surfaces,
                fade_operation,
                accepted,
            })?
        );
    } else {
        println!("{accepted}");
    }
    Ok(EXIT_SUCCESS)
}
