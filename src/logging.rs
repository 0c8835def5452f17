use cfg_if::cfg_if;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        pub fn init() {
            // Log to browser console via tracing-wasm
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"));

            let wasm_layer = tracing_wasm::WASMLayer::new(tracing_wasm::WASMLayerConfig::default());

            tracing_subscriber::registry()
                .with(filter)
                .with(wasm_layer)
                .init();

            // Panics with stacktrace
            #[cfg(feature = "console_error_panic_hook")]
            console_error_panic_hook::set_once();
        }
    } else {
        use once_cell::sync::OnceCell;
        use std::env;
        use std::io;
        use tracing_appender::non_blocking::WorkerGuard;
        use tracing_subscriber::fmt;

        static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

        pub fn init() {
            // Env filter: use RUST_LOG or default to info
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"));

            let console_layer = fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true)
                .compact();

            let base = tracing_subscriber::registry()
                .with(filter)
                .with(console_layer);

            // Optional file logging when RUST_LOG_FILE points at a path
            match env::var("RUST_LOG_FILE") {
                Ok(log_path) => {
                    let path = std::path::Path::new(&log_path);
                    let dir = path.parent().unwrap_or(std::path::Path::new("."));
                    let file = path
                        .file_name()
                        .unwrap_or(std::ffi::OsStr::new("droidwalk.log"));
                    let (nb_writer, guard) =
                        tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, file));
                    let _ = FILE_GUARD.set(guard);

                    let file_layer = fmt::layer()
                        .with_writer(nb_writer)
                        .with_ansi(false)
                        .with_target(true)
                        .with_level(true)
                        .compact();

                    base.with(file_layer).init();
                }
                Err(_) => base.init(),
            }

            std::panic::set_hook(Box::new(|info| {
                tracing::error!("{info}");
            }));
        }
    }
}
