//! Argument tokenizer — split a call's argument region into top-level fields.
//!
//! Operates on the text strictly between a call's outer parentheses. A single
//! left-to-right pass tracks paren nesting depth and an active quote
//! character, so commas inside string literals or inside nested call
//! expressions never produce a split.

/// Split a flat argument-list string into top-level comma-separated fields.
///
/// Each returned field is trimmed of surrounding whitespace and is a
/// syntactically whole argument (it may itself contain balanced nested
/// parentheses and quoted text). For well-formed input the field count is
/// always `top-level commas + 1`.
///
/// Quote handling checks only the single preceding character for a backslash,
/// so a literal `\\"` inside a string reads as an escaped quote. Known
/// simplification carried from the source behavior.
pub fn split_arguments(args_text: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;
    let mut quote: Option<char> = None;
    let mut prev = '\0';

    for c in args_text.chars() {
        match quote {
            Some(q) => {
                current.push(c);
                if c == q && prev != '\\' {
                    quote = None;
                }
            }
            None => match c {
                '"' | '\'' => {
                    current.push(c);
                    quote = Some(c);
                }
                '(' => {
                    current.push(c);
                    depth += 1;
                }
                ')' => {
                    current.push(c);
                    depth -= 1;
                }
                ',' if depth == 0 => {
                    args.push(current.trim().to_string());
                    current.clear();
                }
                _ => current.push(c),
            },
        }
        prev = c;
    }

    if !current.trim().is_empty() {
        args.push(current.trim().to_string());
    }

    args
}
