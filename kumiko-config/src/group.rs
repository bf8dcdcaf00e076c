use serde::{Deserialize, Serialize};

/// Workspace group. The name doubles as the label shown in the bar, so
/// configurations typically use single glyphs here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
}

impl Group {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// One group per character of `symbols`.
    pub fn from_symbols(symbols: &str) -> Vec<Self> {
        symbols
            .chars()
            .map(|c| Self {
                name: c.to_string(),
            })
            .collect()
    }
}
