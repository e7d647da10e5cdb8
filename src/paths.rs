//! Filesystem locations used by the driver binary.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming a site configuration file
pub const CONFIG_ENV: &str = "VITRINE_CONFIG";

/// Path to Vitrine's debug log file.
///
/// This is located in the OS temp directory.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("vitrine.log")
}

fn config_path_from(
    explicit: Option<PathBuf>,
    var_os: &mut impl FnMut(&'static str) -> Option<OsString>,
) -> Option<PathBuf> {
    explicit.or_else(|| {
        var_os(CONFIG_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

/// Resolve the site config path: explicit flag first, then `VITRINE_CONFIG`.
///
/// `None` means the built-in site data is used.
#[must_use]
pub fn config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    let mut var_os = |key: &'static str| std::env::var_os(key);
    config_path_from(explicit, &mut var_os)
}
