#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use tenframes::config::{ConfigLoader, Validator};

fuzz_target!(|data: &[u8]| {
    if let Ok(yaml_str) = std::str::from_utf8(data) {
        let loader = ConfigLoader::new(64 * 1024);

        // Loading and validating may fail, but must never panic
        if let Ok(config) = loader.load_from_str(yaml_str, Path::new("fuzz.yaml")) {
            let _ = Validator::new().validate(&config);
        }
    }
});
