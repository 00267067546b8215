//! Regression harness for the demo programs.
//!
//! Demos are discovered from the demo binary source tree, executed headless as
//! subprocesses, and the screenshot flagged subset is rendered in process and
//! compared against stored reference images within a per channel tolerance.

pub mod backend;
pub use backend::*;

pub mod compare;
pub use compare::*;

pub mod discover;
pub use discover::*;

pub mod paths;
pub use paths::*;

pub mod process;
pub use process::*;

pub mod screenshot;
pub use screenshot::*;
