#![no_main]

use libfuzzer_sys::fuzz_target;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tenframes_core::model::Worksheet;
use tenframes_docs::validate::check_nesting;
use tenframes_docs::worksheet::{LayoutOptions, render_master};

fuzz_target!(|data: &[u8]| {
    if let Ok(heading) = std::str::from_utf8(data) {
        let sheet = Worksheet::generate(1, &mut StdRng::seed_from_u64(0))
            .expect("one page is always valid");
        let options = LayoutOptions {
            heading: heading.to_string(),
            ..LayoutOptions::default()
        };

        // An escaped heading can never break environment nesting
        let master = render_master(&sheet, &options).expect("master renders");
        check_nesting(&master).expect("nesting holds for any heading");
    }
});
