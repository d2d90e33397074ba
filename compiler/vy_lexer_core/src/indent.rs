//! Indentation hints.

use crate::context::Alignment;
use crate::state::ScanState;

/// Indent (in columns) for a line whose content starts with `text_after`,
/// given the state reached at the end of the preceding line.
///
/// Returns `None` inside a string or block comment, where the scanner has
/// no opinion. Otherwise the innermost bracket context decides:
///
/// - aligned: one column past the opener, or the opener's column when
///   `text_after` starts with the matching closer;
/// - unaligned: the opener line's indentation plus `indent_unit`, or
///   without the unit when closing.
///
/// Leading whitespace in `text_after` is ignored.
pub fn compute_indent(state: &ScanState, text_after: &str, indent_unit: u32) -> Option<u32> {
    if !state.is_default_mode() {
        return None;
    }

    let ctx = state.contexts().top();
    let first = text_after.trim_start().chars().next();
    let closing = first.is_some() && first == ctx.closer.char();

    if ctx.align == Alignment::Aligned {
        return Some(ctx.column + u32::from(!closing));
    }

    let step = if closing { 0 } else { i64::from(indent_unit) };
    let indent = (i64::from(ctx.indented) + step).max(0);
    Some(u32::try_from(indent).unwrap_or(u32::MAX))
}
