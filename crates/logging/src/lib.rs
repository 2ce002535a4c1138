//! helpers for logging.

/// The filter used when `RUST_LOG` isn't set.
const DEFAULT_FILTER: &str = "warn";

/// Log to stderr.
///
/// Honors `RUST_LOG`, e.g. `RUST_LOG=sightline_geometry=trace` to see the raycasting traces.  If called multiple times
/// in the same process, only applies once.  If some other logger got installed first, that one wins.
pub fn log_to_stderr() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        let res = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(DEFAULT_FILTER),
        )
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            use std::io::Write;

            let now = time::OffsetDateTime::now_utc();

            writeln!(
                buf,
                "{} {} time={} target={}",
                record.level(),
                record.args(),
                now,
                record.target()
            )
        })
        .try_init();

        if let Err(e) = res {
            log::debug!("Not installing the stderr logger: {}", e);
        }
    });
}
