#![no_main]
use libfuzzer_sys::fuzz_target;
use xml2record::{parse, NodeRecord};

fn check(record: &NodeRecord) {
    assert!(record.is_leaf() != record.has_children());
    assert!(record.children().is_empty() || record.text().is_none());
    record.children().iter().for_each(check);
}

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(record) = parse(s) {
            check(&record);
        }
    }
});
