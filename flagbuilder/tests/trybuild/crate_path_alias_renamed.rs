//! Trybuild fixture verifying `#[flag(crate = "...")]` works with a
//! dependency rename via `use ... as`.

use flagbuilder as my_flags;
use my_flags::{FlagDuration, Flags};

/// Generated code must reference `my_flags::Walk` rather than the
/// `::flagbuilder` default.
#[derive(Flags)]
#[flag(crate = "my_flags", rename_all = "kebab-case")]
struct AliasedConfig<T> {
    timeout: FlagDuration,
    extra: T,
}

fn main() {
    let config = AliasedConfig {
        timeout: FlagDuration::from_secs(5),
        extra: vec!["a".to_owned()],
    };
    let _: my_flags::FlagResult<Vec<String>> = my_flags::build_flag_args(&config);
}
