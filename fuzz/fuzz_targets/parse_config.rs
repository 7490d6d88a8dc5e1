//! Fuzz harness for run files (run.yaml)
//!
//! This harness tests the robustness of the configuration parser against
//! malformed input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use redwood_config::RedwoodConfig;

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };

    // Parse failures are fine; panics are not
    let _: Result<RedwoodConfig, _> = serde_yaml::from_str(input);
});
