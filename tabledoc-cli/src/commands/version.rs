//! `tabledoc version` command - Display version information.

use crate::error::CliResult;
use crate::output::{self, kv};

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binary name
const NAME: &str = "tabledoc";

/// Run the version command
pub fn run() -> CliResult<()> {
    output::newline();

    kv("Version", VERSION);
    kv("Binary", NAME);

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    kv("Build", build_mode);

    output::newline();
    output::section("Components");
    kv("tabledoc-schema", VERSION);
    kv("tabledoc-render", VERSION);

    output::newline();

    Ok(())
}
