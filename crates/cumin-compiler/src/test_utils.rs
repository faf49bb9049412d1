//! Test utilities and snapshot macros.

use cumin_core::Workspace;

use crate::{Config, Error};

/// Load a JSON workspace and generate it, panicking on any failure.
pub fn expect_generated(json: &str, config: &Config) -> String {
    let workspace = Workspace::from_json(json).expect("workspace JSON should load");
    crate::generate(&workspace, config).expect("generation should succeed")
}

/// Load a JSON workspace and return the generation error it must produce.
pub fn expect_error(json: &str, config: &Config) -> Error {
    let workspace = Workspace::from_json(json).expect("workspace JSON should load");
    crate::generate(&workspace, config).expect_err("generation should fail")
}

/// Snapshot test for generated Cumin.
///
/// Takes a JSON workspace (indented freely, `indoc` strips it), an optional
/// [`Config`], and the inline snapshot of the output.
#[macro_export]
macro_rules! shot_cumin {
    ($json:literal, @$snapshot:literal) => {{
        let output = $crate::test_utils::expect_generated(
            indoc::indoc!($json),
            &$crate::Config::default(),
        );
        insta::assert_snapshot!(output, @$snapshot);
    }};
    ($json:literal, $config:expr, @$snapshot:literal) => {{
        let output = $crate::test_utils::expect_generated(indoc::indoc!($json), &$config);
        insta::assert_snapshot!(output, @$snapshot);
    }};
}
