#![no_main]

use libfuzzer_sys::fuzz_target;
use dsml::cli::parse_values;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Whatever parses must flow through the statistics without panicking
        if let Ok(values) = parse_values(input) {
            if !values.is_empty() {
                let _ = dsml::stats::ttest_1samp(&values, 0.0);
                let _ = dsml::viz::histogram(&values, 8);
            }
        }
    }
});
