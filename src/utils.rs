use std::env;

/// Prints a diagnostic line to stderr when HG_SZZ_DEBUG is set.
pub fn debug_log(message: &str) {
    if env::var("HG_SZZ_DEBUG").is_ok_and(|v| v != "0") {
        eprintln!("[hg-szz] {}", message);
    }
}
