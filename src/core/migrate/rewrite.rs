//! Buffer rewriter — apply every migration step to one source buffer.
//!
//! Composition order matches the original migration: header include, then
//! declaration signatures, then `.Add()` call conversion. Call replacements
//! are applied by offset back-to-front so earlier span offsets stay valid;
//! spans are non-overlapping and ordered, which makes the reverse pass safe.

use super::convert::convert_call;
use super::locator::locate_calls;
use super::signature::rewrite_signatures;

pub const OLD_INCLUDE: &str = "#include <Draw_Interpretor.hxx>";
pub const NEW_INCLUDE: &str = "#include <Draw_CommandInterface.hxx>";

/// Outcome of rewriting a single buffer. Counts are per category; the
/// caller folds them across files — no shared state between buffers.
#[derive(Debug, Clone)]
pub struct BufferRewrite {
    pub content: String,
    /// 1 when the legacy header include was present and replaced.
    pub includes: usize,
    /// Declaration signatures rewritten.
    pub signatures: usize,
    /// `.Add()` calls converted to macros.
    pub calls: usize,
    /// Located calls whose shape had no canonical form.
    pub skipped_calls: usize,
}

impl BufferRewrite {
    pub fn total_changes(&self) -> usize {
        self.includes + self.signatures + self.calls
    }
}

/// Run the full migration over one buffer and return the rewritten content
/// with change counts. The input buffer is never retained.
pub fn rewrite_buffer(buffer: &str) -> BufferRewrite {
    let mut content = buffer.to_string();

    let mut includes = 0;
    if content.contains(OLD_INCLUDE) {
        content = content.replace(OLD_INCLUDE, NEW_INCLUDE);
        includes = 1;
    }

    let (content, signatures) = rewrite_signatures(&content);

    let spans = locate_calls(&content, "Add");
    let mut replacements = Vec::new();
    let mut skipped_calls = 0;
    for span in spans {
        match convert_call(&span.raw_text) {
            Some(replacement) => replacements.push((span, replacement)),
            None => skipped_calls += 1,
        }
    }

    let calls = replacements.len();
    let mut content = content;
    // Back-to-front so earlier offsets stay valid
    for (span, replacement) in replacements.iter().rev() {
        content.replace_range(span.start..span.end, replacement);
    }

    BufferRewrite {
        content,
        includes,
        signatures,
        calls,
        skipped_calls,
    }
}
