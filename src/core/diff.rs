//! Content diff between two versions of a working file.

use similar::TextDiff;

/// Line diff between an old and a new version.
#[derive(Debug, Clone)]
pub struct ContentDiff {
    unified: String,
    changed: bool,
}

impl ContentDiff {
    /// Compare `old` and `new`, labelling the sides for display.
    ///
    /// Equality is byte-exact; the rendered diff is line based.
    pub fn compute(old: &[u8], new: &[u8], old_label: &str, new_label: &str) -> Self {
        if old == new {
            return Self {
                unified: String::new(),
                changed: false,
            };
        }

        let old = String::from_utf8_lossy(old);
        let new = String::from_utf8_lossy(new);
        let unified = TextDiff::from_lines(&*old, &*new)
            .unified_diff()
            .context_radius(3)
            .header(old_label, new_label)
            .to_string();

        Self {
            unified,
            changed: true,
        }
    }

    /// Whether both versions are identical.
    pub fn is_empty(&self) -> bool {
        !self.changed
    }

    /// Unified diff text; empty when nothing changed.
    pub fn unified(&self) -> &str {
        &self.unified
    }
}
