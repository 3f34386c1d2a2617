#![no_main]
use fuzz::{run_fuzz_entry, Data};
use libfuzzer_sys::{fuzz_target, Corpus};

fuzz_target!(|data: Data| -> Corpus {
    if run_fuzz_entry(data) {
        Corpus::Keep
    } else {
        Corpus::Reject
    }
});
