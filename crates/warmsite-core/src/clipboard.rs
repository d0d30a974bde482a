//! Legacy clipboard fallback
//!
//! When the native clipboard is unavailable (no display protocol, sandboxed
//! webview), the page falls back to the classic trick: insert an offscreen
//! textarea, select its contents, run the legacy copy command, remove the
//! element. This module builds that script; the desktop binary evaluates it
//! inside the webview.
//!
//! The payload is embedded in a single-quoted JS string literal, so escaping
//! has to be watertight: a quote in the copied text must never terminate the
//! literal.

/// Escape `text` for embedding inside a single-quoted JS string literal.
fn escape_js(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            // "</script>" must not appear literally in inline script text
            '/' => out.push_str("\\/"),
            _ => out.push(c),
        }
    }
    out
}

/// Build the fallback copy script for `text`.
///
/// The script is self-contained and leaves no element behind whether or not
/// the copy command succeeds.
pub fn fallback_copy_script(text: &str) -> String {
    format!(
        "(function() {{\n\
         var area = document.createElement('textarea');\n\
         area.value = '{}';\n\
         area.style.position = 'fixed';\n\
         area.style.left = '-9999px';\n\
         document.body.appendChild(area);\n\
         area.select();\n\
         try {{ document.execCommand('copy'); }} catch (e) {{}}\n\
         document.body.removeChild(area);\n\
         }})();",
        escape_js(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_embedded_verbatim() {
        let script = fallback_copy_script("wa_sk_abc123");
        assert!(script.contains("area.value = 'wa_sk_abc123';"));
        assert!(script.contains("document.execCommand('copy')"));
        assert!(script.contains("removeChild"));
    }

    #[test]
    fn test_single_quote_cannot_break_out() {
        let script = fallback_copy_script("it's");
        assert!(script.contains(r"area.value = 'it\'s';"));
    }

    #[test]
    fn test_backslash_escaped_before_quotes() {
        let script = fallback_copy_script(r"a\'b");
        assert!(script.contains(r"area.value = 'a\\\'b';"));
    }

    #[test]
    fn test_newlines_become_escapes() {
        let script = fallback_copy_script("line1\nline2\r\n");
        assert!(script.contains(r"line1\nline2\r\n"));
        // The literal itself must stay on one line.
        assert!(script
            .lines()
            .any(|l| l.starts_with("area.value = ") && l.ends_with("';")));
    }

    #[test]
    fn test_script_close_tag_neutralized() {
        let script = fallback_copy_script("</script>");
        assert!(!script.contains("</script>"));
        assert!(script.contains(r"<\/script>"));
    }

    #[test]
    fn test_multiline_snippet_roundtrip_shape() {
        // Representative quickstart snippet with quotes and newlines.
        let snippet = "from warm_agent import Warmth\n\nclient = Warmth(api_key=\"wa_sk_x\")";
        let script = fallback_copy_script(snippet);
        assert!(script.contains(r#"api_key=\"wa_sk_x\""#));
        assert!(script.starts_with("(function() {"));
        assert!(script.ends_with("})();"));
    }
}
