// Shared helpers for the integration test crates.
#![allow(dead_code)]

pub mod fixtures;

/// Route `log` output through env_logger once per test binary.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
