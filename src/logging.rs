// ============================================================================
// Logging Bootstrap
// ============================================================================
//
// Failures are reported as `trace` events on the `safe_int_arith` target:
// checked failures from the error constructor, flagged failures when the
// flag is raised. Successful operations emit nothing.

use tracing::Level;

/// Installs a formatting subscriber printing events up to `level`.
///
/// Returns `false` if a global subscriber was already installed, by this
/// function or by anything else; the existing one is left in place.
///
/// ```rust
/// use safe_int_arith::{checked, logging};
///
/// logging::init_logging(tracing::Level::TRACE);
/// assert!(!logging::init_logging(tracing::Level::INFO));
/// let _ = checked::add(i32::MAX, 1i32); // prints a trace event
/// ```
pub fn init_logging(level: Level) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(%level, "logging initialized");
    }
    installed
}
