use regex::Regex;

/// Clean and normalize text recovered from a PDF text layer, OCR pass, or
/// word-processor export. Total and idempotent.
///
/// Whitespace is collapsed within lines only; line boundaries survive
/// cleaning because the format and layout classifiers anchor on them.
pub fn clean_text(text: &str) -> String {
    let horizontal_ws = Regex::new(r"[^\S\n]+").expect("valid horizontal whitespace regex");
    let bar_glyphs = Regex::new(r"[\u{2502}\u{00A6}]").expect("valid bar glyph regex");
    let dash_runs = Regex::new(r"[\u{2014}\u{2013}-]{2,}").expect("valid dash run regex");
    let page_number_line = Regex::new(r"^\d+$").expect("valid page number regex");
    let blank_runs = Regex::new(r"\n{3,}").expect("valid blank run regex");

    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let collapsed = horizontal_ws.replace_all(&unified, " ");
    let collapsed = bar_glyphs.replace_all(&collapsed, "|");
    let collapsed = dash_runs.replace_all(&collapsed, "-");

    let lines = collapsed
        .split('\n')
        .map(str::trim)
        .filter(|line| !page_number_line.is_match(line))
        .collect::<Vec<&str>>();

    let joined = lines.join("\n");
    blank_runs.replace_all(&joined, "\n\n").trim().to_string()
}
