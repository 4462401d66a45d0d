//! Trybuild fixture verifying `#[autoconfig(crate = "...")]` works with a
//! dependency rename via `use ... as`.

use autoconfig as my_cfg;
use my_cfg::AutoConfig;

/// Generated code must reference `my_cfg::` rather than `autoconfig::`.
#[derive(Debug, Default, AutoConfig)]
#[autoconfig(crate = "my_cfg")]
struct AliasedConfig {
    #[autoconfig(key = "value")]
    value: String,
    #[autoconfig(key = "count")]
    count: u32,
}

fn main() {
    let source = AliasedConfig {
        value: "hello".into(),
        count: 1,
    };
    let mut destination = AliasedConfig::default();
    let result: my_cfg::AutoconfigResult<my_cfg::Report> =
        my_cfg::configure(&source, &mut destination);
    let _ = result;
}
