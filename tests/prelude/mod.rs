//! Shared imports and helpers for the `smartfold` integration tests.
#![allow(unfulfilled_lint_expectations)]

#[expect(unused_imports, reason = "not every test binary drives the CLI")]
pub use assert_cmd::{Command, prelude::*};
#[expect(unused_imports, reason = "not every test binary drives the CLI")]
pub use predicates::prelude::*;
#[expect(unused_imports, reason = "not every test binary uses fixtures")]
pub use rstest::{fixture, rstest};

#[macro_use]
#[path = "../common/mod.rs"]
mod common;
#[expect(unused_imports, reason = "CLI tests build their own documents")]
pub use common::*;

/// Command for the `smartfold` binary under test.
#[expect(dead_code, reason = "only the CLI tests run the binary")]
pub fn smartfold() -> Command {
    Command::cargo_bin("smartfold").expect("Failed to create cargo command for smartfold")
}
