//! Workspace-level test package for MatCalc-rs.
//!
//! Holds no code of its own; the golden integration tests under `tests/`
//! exercise the member crates together.
