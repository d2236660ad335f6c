//! Context-specific escaping for values interpolated into the generated page.
//!
//! Every user-supplied value goes through exactly one of these before it is
//! placed in the document. None of them validate; they only make sure the
//! value cannot leave the context it is placed in.

/// Escape for HTML text content and double- or single-quoted attribute values.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape for the inside of a double-quoted CSS string, e.g. `url("...")`
/// within a `<style>` block.
///
/// Quotes, backslashes, control characters and `<`/`>` become CSS hex
/// escapes, so neither the string nor the enclosing `</style>` can be closed
/// early.
pub fn escape_css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' | '\'' | '<' | '>' | '&' => push_css_hex(&mut out, ch),
            c if c.is_control() => push_css_hex(&mut out, c),
            _ => out.push(ch),
        }
    }
    out
}

fn push_css_hex(out: &mut String, ch: char) {
    // Trailing space terminates the escape.
    out.push_str(&format!("\\{:X} ", ch as u32));
}

/// Serialize a list of strings as a JavaScript array literal that is safe to
/// place inside a `<script>` element.
pub fn js_string_array(items: &[String]) -> String {
    let json = serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string());
    json_for_script_tag(&json)
}

/// `<`, `>` and `&` only appear inside string literals in serialized JSON,
/// where their `\uXXXX` forms decode to the same value.
fn json_for_script_tag(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for ch in json.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out
}
