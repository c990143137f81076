//! The hardcoded roster tables: which committers to hide, and which to
//! correct. Compiled into the binary; edit here and rerun.

use bylines_core::{Blacklist, Committer, Overrides};

/// Bot and automation accounts that should never appear on the page.
const BLACKLIST: &[&str] = &["GitHub", "bors[bot]"];

pub fn blacklist() -> Blacklist {
    Blacklist::new(BLACKLIST.iter().copied())
}

/// Manual identity corrections, e.g. merging several recorded emails under
/// one canonical address.
pub fn overrides() -> Overrides {
    Overrides::new([(
        "James Munns",
        Committer::new("James Munns", "james.munns@ferrous-systems.com"),
    )])
}
