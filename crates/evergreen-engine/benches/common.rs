// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_document(sections: usize) -> Vec<String> {
    let base = [
        "# Section {#s .section}",
        "",
        "Paragraph with **bold**, *italic* and a [link](https://example.test Title).",
        "It continues on a second line with ![an image](pic.png).",
        "",
        "1. First {{#steps}}",
        "2. Second",
        "  * Nested [item](x)",
        "  * Another ***loud*** one",
        "3. Third",
        "",
        "> Quoted text",
        ">> Deeper quote",
        "",
        "<<-NOTE{#note .aside}",
        "|Name|Value|",
        "|:---|---:|",
        "|a|1|",
        "<<-NOTE",
        "",
        "```",
        "fn main() { println!(\"<hi>\"); }",
        "```",
        "",
    ];

    base.iter()
        .cycle()
        .take(base.len() * sections)
        .map(|line| line.to_string())
        .collect()
}
