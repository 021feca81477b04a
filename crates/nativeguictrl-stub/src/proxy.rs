use crate::config::StubConfig;
use zbus::blocking::connection::Builder;
use zbus::proxy::CacheProperties;

#[zbus::proxy(
    interface = "com.jci.nativeguictrl",
    default_service = "com.jci.nativeguictrl",
    default_path = "/com/jci/nativeguictrl"
)]
pub trait NativeGuiCtrl {
    fn set_required_surfaces(&self, surfaces: &str, fade_operation: i16) -> zbus::Result<bool>;

    fn quit(&self) -> zbus::Result<()>;
}

/// Blocking proxy addressed per `config`, for callers outside an async runtime.
pub fn connect_blocking(config: &StubConfig) -> zbus::Result<NativeGuiCtrlProxyBlocking<'static>> {
    let conn = Builder::address(config.address.as_str())?.build()?;
    NativeGuiCtrlProxyBlocking::builder(&conn)
        .destination(config.bus_name.clone())?
        .path(config.object_path.clone())?
        .cache_properties(CacheProperties::No)
        .build()
}
