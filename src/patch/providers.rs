//! Provider list patcher — registers a constructor in `ProviderSet`.
//!
//! The provider list feeds the external wiring step. Insertion goes right
//! after the opening of the `wire.NewSet(` literal; the presence check is a
//! plain substring match on the constructor name, so a hand-added reference
//! also counts as registered.

use crate::patch::PatchOutcome;
use regex::Regex;
use std::sync::LazyLock;

static RE_PROVIDER_SET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"var ProviderSet = wire\.NewSet\(").unwrap());

/// Insert `New<Name>,` at the head of the `ProviderSet` literal unless the
/// constructor is already referenced anywhere in the file.
pub fn add_provider(content: &str, controller: &str) -> PatchOutcome {
    let constructor = format!("New{}", controller);
    if content.contains(&constructor) {
        return PatchOutcome::AlreadyPresent;
    }

    let Some(m) = RE_PROVIDER_SET.find(content) else {
        return PatchOutcome::NoAnchor;
    };

    let mut patched = String::with_capacity(content.len() + constructor.len() + 3);
    patched.push_str(&content[..m.end()]);
    patched.push_str(&format!("\n\t{},", constructor));
    patched.push_str(&content[m.end()..]);
    PatchOutcome::Changed(patched)
}
