#![no_main]

use std::path::Path;

use holdr::domain::services::HolderGenerator;
use holdr::domain::value_objects::LayoutPath;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(path) = std::str::from_utf8(data) {
        if let Some(layout) = LayoutPath::parse(Path::new(path)) {
            let _ = HolderGenerator::class_name_for(&layout.layout_name());
        }
    }
});
