//! Version information display
//!
//! Prints version and build metadata in human or JSON format.

use crate::cli::args::{OutputFormat, VersionArgs};

/// Print version and build information.
pub fn run(args: &VersionArgs) {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    match args.format {
        OutputFormat::Human => {
            println!("{name} {version}");
        }
        OutputFormat::Json => {
            let info = serde_json::json!({
                "name": name,
                "version": version,
                "frames_per_page": tenframes_core::model::FRAMES_PER_PAGE,
                "max_pages": tenframes_core::model::MAX_PAGES,
            });
            println!("{info}");
        }
    }
}
