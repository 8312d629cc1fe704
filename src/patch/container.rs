//! Container field patcher — adds a controller field to `AppContainer`.
//!
//! The container (`di/wire.go`) is hand-edited, so the patch is a single
//! field insertion at the end of the struct's field block, byte-preserving
//! everything else.

use crate::patch::PatchOutcome;
use regex::Regex;
use std::sync::LazyLock;

/// The `AppContainer` declaration up to the first line holding only the
/// closing brace.
static RE_CONTAINER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)type AppContainer struct \{(?P<fields>.*?)\n\}").unwrap());

/// Insert `<Name> *controllers.<Name>` as the last field of `AppContainer`,
/// unless the exact field line already exists.
pub fn add_container_field(content: &str, controller: &str) -> PatchOutcome {
    let field_line = format!("\t{} *controllers.{}\n", controller, controller);
    if content.contains(&field_line) {
        return PatchOutcome::AlreadyPresent;
    }

    let Some(caps) = RE_CONTAINER.captures(content) else {
        return PatchOutcome::NoAnchor;
    };

    // Splice right before the closing brace's newline
    let at = match caps.name("fields") {
        Some(m) => m.end(),
        None => return PatchOutcome::NoAnchor,
    };
    let mut patched = String::with_capacity(content.len() + field_line.len());
    patched.push_str(&content[..at]);
    patched.push_str(&format!("\n\t{} *controllers.{}", controller, controller));
    patched.push_str(&content[at..]);
    PatchOutcome::Changed(patched)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIRE: &str = "package di\n\ntype AppContainer struct {\n\tBaseController *controllers.BaseController\n}\n\nfunc NewAppContainer() (*AppContainer, error) {\n\treturn &AppContainer{}, nil\n}\n";

    #[test]
    fn adds_field_before_closing_brace() {
        let PatchOutcome::Changed(out) = add_container_field(WIRE, "OrderController") else {
            panic!("expected a change");
        };
        assert!(out.contains(
            "\tBaseController *controllers.BaseController\n\tOrderController *controllers.OrderController\n}"
        ));
        // Rest of the file is untouched
        assert!(out.ends_with("func NewAppContainer() (*AppContainer, error) {\n\treturn &AppContainer{}, nil\n}\n"));
    }

    #[test]
    fn existing_field_is_a_noop() {
        assert!(matches!(
            add_container_field(WIRE, "BaseController"),
            PatchOutcome::AlreadyPresent
        ));
    }

    #[test]
    fn patch_is_idempotent() {
        let PatchOutcome::Changed(once) = add_container_field(WIRE, "OrderController") else {
            panic!("expected a change");
        };
        assert!(matches!(
            add_container_field(&once, "OrderController"),
            PatchOutcome::AlreadyPresent
        ));
    }

    #[test]
    fn missing_struct_is_no_anchor() {
        assert!(matches!(
            add_container_field("package di\n", "OrderController"),
            PatchOutcome::NoAnchor
        ));
    }

    #[test]
    fn empty_struct_gains_first_field() {
        let wire = "type AppContainer struct {\n}\n";
        let PatchOutcome::Changed(out) = add_container_field(wire, "OrderController") else {
            panic!("expected a change");
        };
        assert_eq!(
            out,
            "type AppContainer struct {\n\tOrderController *controllers.OrderController\n}\n"
        );
    }
}
