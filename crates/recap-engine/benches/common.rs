// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_report(sections: usize) -> String {
    let base = "# Meeting Summary\n\n## Executive Summary\n- Key topic: budget\n- Decision: approve plan\n\nDetailed notes paragraph with a few sentences of narrative.\nSecond line of narrative.\n\nHighlights\n----------\n\n## Action Items\nAlice: send the deck\n  Bob: review the contract\n\n";
    base.repeat(sections)
}

#[allow(dead_code)]
pub fn generate_setext_heavy(count: usize) -> String {
    let mut content = String::new();
    for i in 0..count {
        content.push_str(&format!("Section {i}\n"));
        content.push_str(if i % 2 == 0 { "=====\n" } else { "-----\n" });
        content.push_str("Body text under the heading.\n\n");
    }
    content
}
