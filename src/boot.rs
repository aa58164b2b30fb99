use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use crate::config::SiteConfig;
use crate::loader::ContentSource;

/// Required directories that will be created if missing
const REQUIRED_DIRS: &[&str] = &["website", "website/static"];

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing directories and warns about a missing content document;
/// aborts only if a directory cannot be created.
pub fn run(config: &SiteConfig) {
    info!("BAG Digital boot check starting...");

    let mut warnings = 0u32;
    let mut errors = 0u32;

    // ── 1. Directories ─────────────────────────────────
    let static_dir = config.static_dir.as_str();
    for dir in REQUIRED_DIRS.iter().copied().chain(std::iter::once(static_dir)) {
        let path = Path::new(dir);
        if !path.exists() {
            match fs::create_dir_all(path) {
                Ok(_) => info!("  Created directory: {}", dir),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", dir, e);
                    errors += 1;
                }
            }
        }
    }

    // ── 2. Content document ────────────────────────────
    match config.source() {
        ContentSource::Path(path) => {
            if !Path::new(&path).exists() {
                warn!("  Missing content document: {} (pages will render degraded)", path);
                warnings += 1;
            }
        }
        ContentSource::Remote(url) => info!("  Content document is remote: {}", url),
    }

    // ── 3. Rocket.toml exists ──────────────────────────
    if !Path::new("Rocket.toml").exists() {
        warn!("  Rocket.toml not found, using default config");
        warnings += 1;
    }

    // ── Summary ─────────────────────────────────────────
    if errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            errors, warnings
        );
        process::exit(1);
    }

    if warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some features may not work correctly.",
            warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }
}
