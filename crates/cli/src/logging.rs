use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "debug",
/// "gl_state_core=trace"). Without one, `RUST_LOG` is used, then `warn`.
/// Subsequent calls are ignored.
pub fn init(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            // Rejections are warnings; everything quieter is opt-in.
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.format_timestamp(None);
        builder.init();

        log::debug!("logging initialized");
    });
}
