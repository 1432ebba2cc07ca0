use serde::{Deserialize, Serialize};

/// A record of interest appended by a caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Target {
    pub id: i64,

    /// Category tag, e.g. `domain`, `ip` or `url`. Not validated.
    pub kind: String,

    pub value: String,

    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTarget {
    pub kind: String,

    pub value: String,

    pub description: String,
}

impl NewTarget {
    pub fn new(
        kind: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn with_id(self, id: i64) -> Target {
        Target {
            id,
            kind: self.kind,
            value: self.value,
            description: self.description,
        }
    }
}
