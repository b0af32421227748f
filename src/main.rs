#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod infra;
mod ui;
mod util;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use crate::util::version::{version_label, APP_NAME};

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("failed to initialise logging: {err}");
    }
    tracing::info!("starting {APP_NAME} {}", version_label());

    #[cfg(all(feature = "desktop", target_os = "linux"))]
    disable_webkit_dmabuf();

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
                    .with_inner_size(dioxus_desktop::tao::dpi::LogicalSize::new(1200.0, 900.0))
            )
        };
        builder.with_cfg(config)
    };

    #[cfg(not(feature = "desktop"))]
    let builder = builder;

    builder.launch(app::App);
}

/// WebKitGTK's DMABUF renderer draws a blank window on several Wayland setups.
/// An explicit `WEBKIT_DISABLE_DMABUF_RENDERER` from the caller wins.
#[cfg(any(test, all(feature = "desktop", target_os = "linux")))]
fn needs_dmabuf_workaround(on_wayland: bool, caller_override: bool) -> bool {
    on_wayland && !caller_override
}

#[cfg(all(feature = "desktop", target_os = "linux"))]
fn disable_webkit_dmabuf() {
    let on_wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
    let caller_override = std::env::var_os("WEBKIT_DISABLE_DMABUF_RENDERER").is_some();
    if needs_dmabuf_workaround(on_wayland, caller_override) {
        tracing::debug!("disabling the WebKit DMABUF renderer");
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }
}

#[cfg(test)]
mod tests {
    use super::needs_dmabuf_workaround;

    #[test]
    fn dmabuf_workaround_only_on_wayland_without_override() {
        assert!(needs_dmabuf_workaround(true, false));
        assert!(!needs_dmabuf_workaround(true, true));
        assert!(!needs_dmabuf_workaround(false, false));
    }
}
