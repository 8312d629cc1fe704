//! Annotation extractor — line-by-line state machine over one controller file.
//!
//! Recognizes three fixed textual shapes, no Go parsing involved:
//!
//! - `// @Tags <name>` — the group a following route belongs to
//! - `// @Router <path> [<verb>]` — path and HTTP verb
//! - `func (x *XController) Handler(ctx *fiber.Ctx) error {` — the handler
//!
//! A record is emitted only when a handler line is seen while a tag, a path
//! and a verb are all pending. Emission clears every pending slot, tag
//! included: one `@Tags` annotation feeds exactly one route. A second
//! route/handler pair without its own `@Tags` is dropped silently.

use crate::model::RouteRecord;
use regex::Regex;
use std::sync::LazyLock;

static RE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@Tags\s+(?P<tag>[A-Za-z0-9_]+)").unwrap());

static RE_ROUTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@Router\s+(?P<path>[^\s]+) \[(?P<verb>[a-zA-Z]+)\]").unwrap());

static RE_HANDLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"func \(.*\*(?P<recv>[A-Za-z0-9_]+)\) (?P<name>[A-Za-z0-9_]+)\(.*\*fiber\.Ctx.*\) error",
    )
    .unwrap()
});

/// Pending annotation slots. Empty string means unset.
#[derive(Default)]
struct Pending {
    tag: String,
    path: String,
    method: String,
    handler: String,
    controller: String,
}

impl Pending {
    fn complete(&self) -> bool {
        !self.tag.is_empty() && !self.path.is_empty() && !self.method.is_empty()
    }

    fn clear(&mut self) {
        *self = Pending::default();
    }
}

/// Extract all route records from one source file's content.
///
/// Unfilled slots at end of file are dropped without error.
pub fn extract(content: &str) -> Vec<RouteRecord> {
    let mut pending = Pending::default();
    let mut records = Vec::new();

    for line in content.lines() {
        if let Some(caps) = RE_TAG.captures(line) {
            // Last tag seen before a handler wins
            pending.tag = caps["tag"].to_string();
        }
        if let Some(caps) = RE_ROUTER.captures(line) {
            pending.path = caps["path"].to_string();
            pending.method = caps["verb"].to_uppercase();
        }
        if let Some(caps) = RE_HANDLER.captures(line) {
            pending.controller = caps["recv"].to_string();
            pending.handler = caps["name"].to_string();
            if pending.complete() {
                records.push(RouteRecord {
                    tag: pending.tag.clone(),
                    method: pending.method.clone(),
                    path: pending.path.clone(),
                    handler: pending.handler.clone(),
                    controller: pending.controller.clone(),
                });
                pending.clear();
            }
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT: &str = r#"package controllers

// @Summary      Get Server Info
// @Tags         ProductController
// @Produce      json
// @Router       /api/v1/ProductController/info [get]
func (c *ProductController) Info(ctx *fiber.Ctx) error {
	return ctx.SendString("info")
}
"#;

    #[test]
    fn extracts_complete_record() {
        let records = extract(PRODUCT);
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.tag, "ProductController");
        assert_eq!(r.method, "GET");
        assert_eq!(r.path, "/api/v1/ProductController/info");
        assert_eq!(r.handler, "Info");
        assert_eq!(r.controller, "ProductController");
    }

    #[test]
    fn verb_is_upper_cased() {
        let input = "// @Tags X\n// @Router /x [Post]\nfunc (c *X) H(ctx *fiber.Ctx) error {\n";
        assert_eq!(extract(input)[0].method, "POST");
    }

    #[test]
    fn handler_without_annotations_emits_nothing() {
        let input = "func (c *X) H(ctx *fiber.Ctx) error {\n";
        assert!(extract(input).is_empty());
    }

    #[test]
    fn annotations_without_handler_are_dropped() {
        let input = "// @Tags X\n// @Router /x [get]\n";
        assert!(extract(input).is_empty());
    }

    #[test]
    fn last_tag_before_handler_wins() {
        let input = "// @Tags First\n// @Tags Second\n// @Router /x [get]\nfunc (c *X) H(ctx *fiber.Ctx) error {\n";
        assert_eq!(extract(input)[0].tag, "Second");
    }

    #[test]
    fn one_tag_two_handlers_yields_one_record() {
        // The tag slot is cleared on emission, so the second pair has no tag.
        let input = r#"// @Tags Product
// @Router /a [get]
func (c *Product) A(ctx *fiber.Ctx) error {
// @Router /b [get]
func (c *Product) B(ctx *fiber.Ctx) error {
"#;
        let records = extract(input);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].handler, "A");
    }

    #[test]
    fn fresh_tag_per_route_yields_both() {
        let input = r#"// @Tags Product
// @Router /a [get]
func (c *Product) A(ctx *fiber.Ctx) error {
// @Tags Product
// @Router /b [post]
func (c *Product) B(ctx *fiber.Ctx) error {
"#;
        let records = extract(input);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].handler, "B");
        assert_eq!(records[1].method, "POST");
    }

    #[test]
    fn plain_function_is_not_a_handler() {
        // No receiver, no fiber.Ctx — must not trigger emission
        let input = "// @Tags X\n// @Router /x [get]\nfunc NewX() *X {\n";
        assert!(extract(input).is_empty());
    }
}
