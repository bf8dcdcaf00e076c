use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::binding::Modifiers;
use crate::rules::RuleMatcher;

/// How the manager reacts when a client asks for focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusOnActivation {
    Smart,
    Urgent,
    Focus,
    Never,
}

impl Default for FocusOnActivation {
    fn default() -> Self {
        FocusOnActivation::Smart
    }
}

/// Strategy for generating per-group key bindings at runtime when the
/// group list changes after startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GroupKeyBinder {
    Simple { mods: Modifiers },
}

/// Placement rule applied to new windows before they are mapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRule {
    pub matcher: RuleMatcher,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub float: bool,
}

/// Per-device input settings, keyed by device name in
/// [`Options::wl_input_rules`]. `None` leaves the compositor default in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub kb_layout: Option<String>,
    #[serde(default)]
    pub natural_scroll: Option<bool>,
    #[serde(default)]
    pub tap: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    #[serde(default)]
    pub dgroups_key_binder: Option<GroupKeyBinder>,
    #[serde(default)]
    pub dgroups_app_rules: Vec<GroupRule>,
    pub follow_mouse_focus: bool,
    pub bring_front_click: bool,
    pub cursor_warp: bool,
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusOnActivation,
    pub reconfigure_screens: bool,
    pub auto_minimize: bool,
    #[serde(default)]
    pub wl_input_rules: Option<BTreeMap<String, InputConfig>>,
    pub wmname: String,
}
