//! Version command implementation

use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("xpt {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  MSRV: {}", min_rust_version());
    println!("  Profile: {}", build_profile());

    Ok(())
}

fn min_rust_version() -> &'static str {
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
