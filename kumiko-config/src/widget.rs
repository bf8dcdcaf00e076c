use serde::{Deserialize, Serialize};

/// Status bar widget descriptors. Each variant carries exactly the
/// parameters that widget understands, so a bar definition cannot pass
/// an option the renderer would silently drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Widget {
    GroupBox {
        background: String,
        active: String,
        fontsize: u32,
        borderwidth: u32,
        padding_x: u32,
        highlight: HighlightMethod,
    },
    WindowTitle {
        background: String,
        font: String,
        foreground: String,
        max_chars: u32,
    },
    Updates {
        no_update_string: String,
        update_interval: u32,
        font: String,
        fontsize: u32,
        color_no_updates: String,
        color_have_updates: String,
        display_format: String,
        padding: u32,
        source: UpdatesSource,
    },
    Text {
        text: String,
        background: String,
        foreground: String,
        padding: f64,
        fontsize: u32,
    },
    Net {
        background: String,
        format: String,
    },
    LayoutIcon {
        background: String,
        scale: f64,
        padding: u32,
    },
    LayoutName {
        background: String,
        padding: u32,
    },
    Clock {
        background: String,
        format: String,
    },
    Systray {
        background: String,
        padding: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMethod {
    Block,
    Border,
    Line,
    Text,
}

/// Where the updates widget asks for pending package counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatesSource {
    ArchCheckupdates,
    Pacman,
    Apt,
    Dnf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub widgets: Vec<Widget>,
    pub size: u32,
    pub background: String,
    pub opacity: f64,
}

/// One physical output. Only a top bar is supported for now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    #[serde(default)]
    pub top: Option<Bar>,
}

/// Fallback appearance for widgets that do not override these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDefaults {
    pub font: String,
    pub fontsize: u32,
    pub padding: u32,
}
