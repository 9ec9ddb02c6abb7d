const HTML_FENCE_OPEN: &str = "```html";
const FENCE_CLOSE: &str = "```";

/// Remove Markdown code-fence wrapping from an LLM reply.
///
/// Only a leading ```` ```html ```` (plus following whitespace) and a trailing
/// ```` ``` ```` are removed; fences anywhere else are left alone.
/// The result is trimmed.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut content = raw.trim();
    if let Some(rest) = content.strip_prefix(HTML_FENCE_OPEN) {
        content = rest.trim_start();
    }
    if let Some(rest) = content.strip_suffix(FENCE_CLOSE) {
        content = rest;
    }
    content.trim()
}
