//! Call classifier — map a located `.Add(...)` call to its macro replacement.
//!
//! Classification is structural: argument count plus presence of the
//! `__FILE__` marker in the third field. Conversion is all-or-nothing per
//! call site; a shape outside the supported set yields `None` and the
//! original text is left untouched.

use regex::Regex;

use super::tokenizer::split_arguments;

/// The literal token marking "register with the current source file".
pub const FILE_MARKER: &str = "__FILE__";

/// Group assigned to 4-argument file-marker calls that carry none.
pub const DEFAULT_GROUP: &str = "\"User Commands\"";

/// Convert one raw `.Add(...)` call expression into its macro form.
///
/// Shapes:
/// - 5 args, 3rd exactly `__FILE__` → `DRAW_ADD_COMMAND(recv, name, help, __FILE__, func, group);`
/// - 4 args, 3rd contains `__FILE__` → `DRAW_ADD_COMMAND(..., func, "User Commands");`
/// - 4 args otherwise → `DRAW_ADD_SIMPLE_COMMAND(recv, name, help, func, group);`
/// - 3 args → `DRAW_ADD_DEFAULT_COMMAND(recv, name, help, func);`
///
/// Anything else (including a span that does not match the structural
/// pattern at all) returns `None`.
///
/// The 4-argument disambiguation is a substring check, so an argument that
/// merely mentions `__FILE__` in unrelated text is treated as a file-marker
/// call. Known limitation carried from the source behavior.
pub fn convert_call(raw: &str) -> Option<String> {
    let shape = Regex::new(r"(?s)^(\w+)\.Add\s*\((.*)\)\s*;?\s*$").unwrap();
    let caps = shape.captures(raw.trim())?;
    let receiver = caps[1].to_string();
    let args_text = caps[2].trim().to_string();

    let args = split_arguments(&args_text);

    match args.len() {
        5 => {
            // name, help, __FILE__, function, group
            if args[2].trim() == FILE_MARKER {
                Some(format!(
                    "DRAW_ADD_COMMAND({}, {}, {}, {}, {}, {});",
                    receiver, args[0], args[1], FILE_MARKER, args[3], args[4]
                ))
            } else {
                None
            }
        }
        4 => {
            if args[2].contains(FILE_MARKER) {
                // name, help, __FILE__, function — group defaulted
                Some(format!(
                    "DRAW_ADD_COMMAND({}, {}, {}, {}, {}, {});",
                    receiver, args[0], args[1], FILE_MARKER, args[3], DEFAULT_GROUP
                ))
            } else {
                // name, help, function, group
                Some(format!(
                    "DRAW_ADD_SIMPLE_COMMAND({}, {}, {}, {}, {});",
                    receiver, args[0], args[1], args[2], args[3]
                ))
            }
        }
        3 => {
            // name, help, function
            Some(format!(
                "DRAW_ADD_DEFAULT_COMMAND({}, {}, {}, {});",
                receiver, args[0], args[1], args[2]
            ))
        }
        _ => None,
    }
}
