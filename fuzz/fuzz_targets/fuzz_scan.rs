#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let spans = dechain::scan(data);

    // Accepted spans stay inside the buffer, strictly increase, and never
    // overlap, no matter what bytes are thrown at the scanner.
    let mut prev_end = 0;
    for span in &spans {
        assert!(span.total_size > 0);
        assert!(span.start >= prev_end);
        assert!(span.end() <= data.len());
        prev_end = span.end();
    }
});
