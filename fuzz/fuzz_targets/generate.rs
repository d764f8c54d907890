#![no_main]

use fidlgen::{BindingGenerator, GenerationMode, GeneratorConfig, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    // Only inputs with a valid header reach the generator
    if let Ok(file) = parser::parse(s) {
        for mode in [GenerationMode::Sender, GenerationMode::Receiver] {
            let _ = BindingGenerator::new(GeneratorConfig::new().with_mode(mode)).generate(&file);
        }
    }
});
