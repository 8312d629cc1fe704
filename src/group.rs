//! Route grouper — buckets records by tag and normalizes names and paths.
//!
//! The reserved group `Base` (any case) belongs to the hand-maintained root
//! registration file and is never grouped. For every other tag the grouper
//! derives a file-safe `clean_name` and strips the tag's own segment out of
//! each declared path, so generated files mount relative to their group.

use crate::model::{RouteGroup, RouteRecord};
use regex::Regex;

/// Group name reserved for the hand-maintained root registration file.
pub const RESERVED_GROUP: &str = "Base";

/// Bucket records by tag in first-seen order, skipping the reserved group.
///
/// Record order inside a group is discovery order — it becomes the call
/// order in the generated registration function. Path stripping happens
/// here, before rendering.
pub fn group_routes(records: Vec<RouteRecord>) -> Vec<RouteGroup> {
    let mut groups: Vec<RouteGroup> = Vec::new();

    for mut record in records {
        if record.tag.eq_ignore_ascii_case(RESERVED_GROUP) {
            continue;
        }
        record.path = strip_tag_segment(&record.path, &record.tag);
        match groups.iter_mut().find(|g| g.tag == record.tag) {
            Some(group) => group.routes.push(record),
            None => groups.push(RouteGroup {
                clean_name: clean_name(&record.tag),
                tag: record.tag.clone(),
                routes: vec![record],
            }),
        }
    }

    groups
}

/// Derive the file-safe group name: strip a trailing case-insensitive
/// "controller" suffix, then snake_case the rest.
///
/// "ProductController" → "product", "OrderItem" → "order_item"
pub fn clean_name(tag: &str) -> String {
    let base = if tag.to_lowercase().ends_with("controller") {
        &tag[..tag.len() - "controller".len()]
    } else {
        tag
    };
    to_snake_case(base)
}

/// CamelCase/PascalCase → snake_case: underscore before every non-initial
/// uppercase letter, then lowercase everything.
fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, c) in s.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// Remove the literal segment `/<tag>` or `/<tag>Controller` from a declared
/// path. An emptied path becomes "/".
fn strip_tag_segment(path: &str, tag: &str) -> String {
    // Tag values match [A-Za-z0-9_]+, but escape anyway
    let re = Regex::new(&format!("/{}(Controller)?", regex::escape(tag)))
        .expect("escaped tag forms a valid pattern");
    let stripped = re.replace_all(path, "").to_string();
    if stripped.is_empty() {
        "/".to_string()
    } else {
        stripped
    }
}
