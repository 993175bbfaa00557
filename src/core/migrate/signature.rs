//! Signature rewriter — swap the interpretor parameter type in declaration
//! headers.
//!
//! Independent of the call-rewriting components: a single regex pass, no
//! balancing needed, since the matched parameter list is always one typed
//! reference parameter.

use regex::Regex;

/// Replace `ClassName::Method(Draw_Interpretor& name)` parameter types with
/// `DRAW_INTERPRETOR`, preserving the parameter name and surrounding
/// whitespace (including embedded newlines). Returns the rewritten buffer
/// and the number of substitutions.
pub fn rewrite_signatures(buffer: &str) -> (String, usize) {
    let re = Regex::new(r"(\w+::\w+\s*\(\s*)Draw_Interpretor(\s*&\s*\w+\s*\))").unwrap();

    let count = re.find_iter(buffer).count();
    if count == 0 {
        return (buffer.to_string(), 0);
    }

    let out = re.replace_all(buffer, "${1}DRAW_INTERPRETOR${2}");
    (out.into_owned(), count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_simple_signature() {
        let (out, count) =
            rewrite_signatures("void Foo::Commands(Draw_Interpretor& theCommands)");
        assert_eq!(count, 1);
        assert_eq!(out, "void Foo::Commands(DRAW_INTERPRETOR& theCommands)");
    }

    #[test]
    fn preserves_parameter_name_across_line_break() {
        let (out, count) =
            rewrite_signatures("void Foo::Commands(Draw_Interpretor\n  & theCommands)");
        assert_eq!(count, 1);
        assert_eq!(out, "void Foo::Commands(DRAW_INTERPRETOR\n  & theCommands)");
    }

    #[test]
    fn rewrites_multiple_signatures() {
        let buf = "void A::Commands(Draw_Interpretor& a) {}\nvoid B::Commands(Draw_Interpretor & b) {}\n";
        let (out, count) = rewrite_signatures(buf);
        assert_eq!(count, 2);
        assert!(out.contains("A::Commands(DRAW_INTERPRETOR& a)"));
        assert!(out.contains("B::Commands(DRAW_INTERPRETOR & b)"));
    }

    #[test]
    fn ignores_other_parameter_types() {
        let buf = "void Foo::Commands(OtherType& theCommands)";
        let (out, count) = rewrite_signatures(buf);
        assert_eq!(count, 0);
        assert_eq!(out, buf);
    }

    #[test]
    fn ignores_non_member_declarations() {
        // No ClassName:: prefix, no match
        let buf = "void Commands(Draw_Interpretor& theCommands)";
        let (_, count) = rewrite_signatures(buf);
        assert_eq!(count, 0);
    }
}
