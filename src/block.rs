//! Boundary-preserving whitespace trim for content blocks.
//!
//! Blocks are stripped of blank lines at their edges while keeping the
//! newlines that delimit the non-blank span, so a block re-emitted between
//! headings reproduces its original internal spacing.

/// Trims blank lines outside the outermost newlines that surround non-blank
/// content, keeping those newlines themselves.
///
/// The kept span runs from the nearest newline at or before the first
/// non-whitespace character (or the start of the text) to the nearest newline
/// at or after the last non-whitespace character (or the end of the text),
/// inclusive. Internal blank lines are untouched. Entirely-whitespace text is
/// returned unchanged.
#[must_use]
pub fn trim(text: &str) -> &str {
    let not_blank = |c: char| !c.is_whitespace();
    let (Some(first), Some(last)) = (text.find(not_blank), text.rfind(not_blank)) else {
        return text;
    };

    // first and last index non-whitespace characters, so neither is a newline
    let start = text[..first].rfind('\n').unwrap_or(0);
    let end = text[last..].find('\n').map_or(text.len(), |i| last + i + 1);

    &text[start..end]
}

#[cfg(test)]
#[path = "tests/block.rs"]
mod tests;
