//! Trybuild fixture verifying `#[flag(crate = "...")]` with the real crate name.

use flagbuilder::{Flags, build_flags};

/// Verifies that `#[flag(crate = "flagbuilder")]` is accepted and the
/// generated code compiles. Uses the real crate name as a self-referential
/// alias so no workspace reconfiguration is needed.
#[derive(Flags)]
#[flag(crate = "flagbuilder")]
struct CratePathConfig {
    #[flag(name = "value")]
    value: String,
    #[flag(name = "count", empty = "0")]
    count: u32,
}

fn main() {
    let config = CratePathConfig {
        value: "hello".to_owned(),
        count: 1,
    };
    let _: flagbuilder::FlagResult<String> = build_flags(&config);
}
