use serde::Serialize;

/// The five cells of one export row, as text.
///
/// Empty cells are `None`. Column positions are resolved by the row source,
/// so everything downstream works on named fields only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawRow {
    pub line: usize,               // 1-based line/row in the source file
    pub date: Option<String>,      // date column (may be empty on continuation rows)
    pub start: Option<String>,     // "kommt" time
    pub end: Option<String>,       // "geht" time
    pub kind: Option<String>,      // booking type label
    pub violation: Option<String>, // rule violation note
}

impl RawRow {
    pub fn new(line: usize) -> Self {
        Self {
            line,
            ..Default::default()
        }
    }

    /// Builder helpers used by the row sources and the tests.
    pub fn with_date(mut self, v: &str) -> Self {
        self.date = non_empty(v);
        self
    }

    pub fn with_times(mut self, start: &str, end: &str) -> Self {
        self.start = non_empty(start);
        self.end = non_empty(end);
        self
    }

    pub fn with_kind(mut self, v: &str) -> Self {
        self.kind = non_empty(v);
        self
    }

    pub fn with_violation(mut self, v: &str) -> Self {
        self.violation = non_empty(v);
        self
    }
}

/// Cell text → `Option`, treating whitespace-only cells as empty.
pub fn non_empty(v: &str) -> Option<String> {
    if v.trim().is_empty() {
        None
    } else {
        Some(v.to_string())
    }
}
