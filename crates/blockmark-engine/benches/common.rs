// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = concat!(
        "Paragraph with *some* **content** and a [link](/x \"t\").\n\n",
        "- Bullet point\n    - Nested item\n- Another item\n\n",
        "> Quoted text\n> > nested http://example.com\n\n",
        "A|B\n:--|--:\n1|2\n\n",
        "---\n\n",
    );
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_quotes(depth: usize) -> String {
    format!("{}deep\n", "> ".repeat(depth))
}

#[allow(dead_code)]
pub fn generate_long_list(items: usize) -> String {
    let mut content = String::new();
    for i in 0..items {
        content.push_str(&format!("{}. item {} with _emphasis_\n", i + 1, i));
        if i % 10 == 0 {
            content.push_str("    - sub item\n");
        }
    }
    content
}
