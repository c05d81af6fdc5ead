//! Built-in convention modules.
//!
//! One module per published commit-message convention, registered under its
//! canonical `conventional-changelog-{name}` module name. All module
//! listing and lookup of built-ins derives from [`builtin_modules`].

mod angular;
mod atom;
mod ember;
mod eslint;
mod express;
mod jshint;

use commit_opts::{ConventionModule, Pattern};

/// Number of built-in conventions.
pub const BUILTIN_COUNT: usize = 6;

/// Returns all built-in convention modules with their canonical names.
pub fn builtin_modules() -> Vec<(&'static str, ConventionModule)> {
    vec![
        (angular::MODULE_NAME, angular::module()),
        (atom::MODULE_NAME, atom::module()),
        (ember::MODULE_NAME, ember::module()),
        (eslint::MODULE_NAME, eslint::module()),
        (express::MODULE_NAME, express::module()),
        (jshint::MODULE_NAME, jshint::module()),
    ]
}

// Built-in patterns are fixed literals; a compile failure here is a bug in
// this module.
fn pattern(source: &str) -> Pattern {
    Pattern::new(source).expect("built-in pattern compiles")
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
