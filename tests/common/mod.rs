#![allow(dead_code)]

pub use debship_test_utils::init_tracing;

use debship::exec::filters::{RED, RESET};
use debship::types::{OutputLine, StreamTag};

/// Split collected lines into stdout texts and stderr texts, preserving
/// each stream's order.
pub fn partition_by_tag(lines: &[OutputLine]) -> (Vec<String>, Vec<String>) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    for line in lines {
        match line.tag() {
            StreamTag::Out => out.push(line.text().to_string()),
            StreamTag::Err => err.push(line.text().to_string()),
        }
    }
    (out, err)
}

/// Remove the colour markers the error filter wraps stderr lines in.
pub fn strip_markers(s: &str) -> String {
    s.replace(RED, "").replace(RESET, "")
}
