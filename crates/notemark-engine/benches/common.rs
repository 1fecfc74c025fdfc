// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_note(size: usize) -> String {
    let base = "# Title\n\nParagraph with **bold**, *italic* and a [link](https://example.com).\n\n- Bullet point #tag\n  - Nested item\n- [ ] Open task\n- [x] Done task\n\n1. First\n2. Second\n\n> Quoted with `code` and [[note?line=3]]\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n| a | b |\n| :-- | --: |\n| 1 | 2 |\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy(lines: usize) -> String {
    let line = "Mix ***all*** of ~~it~~ ==up== with H~2~O, x^2^, ||spoiler||, $e^x$, \\* and https://bare.example/path.\n";
    line.repeat(lines)
}

#[allow(dead_code)]
pub fn generate_deep_quote(depth: usize) -> String {
    format!("{}deep", "> ".repeat(depth))
}
