//! Supporting types for port contracts.

use spellbindr_domain::RecordKind;

/// Partial attributes for a record update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub kind: Option<RecordKind>,
}

impl RecordPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_kind(mut self, kind: RecordKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.kind.is_none()
    }
}
