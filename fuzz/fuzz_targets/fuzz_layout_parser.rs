#![no_main]

use holdr::{HolderGenerator, LayoutParser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        for default_include in [true, false] {
            if let Ok(layout) = LayoutParser::new(default_include).parse("fuzz", source) {
                let _ = HolderGenerator::new("com.example").generate(&layout);
            }
        }
    }
});
