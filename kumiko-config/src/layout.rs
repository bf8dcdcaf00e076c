use serde::{Deserialize, Serialize};

/// Tiling algorithm descriptor. Declaration order in [`Config::layouts`]
/// is the cycling order for the next-layout operation.
///
/// [`Config::layouts`]: crate::Config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Layout {
    MainAndVertStack {
        border_focus: String,
        border_width: u32,
    },
    MainAndHorizontalStack {
        border_focus: String,
        border_width: u32,
    },
    TreeTabs,
    Monocle,
}
