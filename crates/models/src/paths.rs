//! Path patterns: one per line, `*` matches anything (slashes included),
//! `<front>` is the front page. Leading slashes are ignored on both sides.

use glob::Pattern;

use crate::section::Section;

pub const FRONT_PAGE: &str = "<front>";

/// Non-blank, trimmed pattern lines.
pub fn patterns(paths: &str) -> impl Iterator<Item = &str> {
    paths.lines().map(str::trim).filter(|l| !l.is_empty())
}

fn normalize(path: &str) -> &str {
    path.trim().trim_start_matches('/')
}

/// Compile a pattern where only `*` is special.
fn compile(pattern: &str) -> Option<Pattern> {
    let escaped = normalize(pattern)
        .split('*')
        .map(Pattern::escape)
        .collect::<Vec<_>>()
        .join("*");
    Pattern::new(&escaped).ok()
}

pub fn matches(pattern: &str, path: &str) -> bool {
    let path = normalize(path);
    if pattern == FRONT_PAGE {
        return path.is_empty();
    }
    compile(pattern).map(|p| p.matches(path)).unwrap_or(false)
}

impl Section {
    pub fn path_patterns(&self) -> impl Iterator<Item = &str> {
        patterns(&self.paths)
    }

    pub fn matches_path(&self, path: &str) -> bool {
        self.path_patterns().any(|p| matches(p, path))
    }
}
