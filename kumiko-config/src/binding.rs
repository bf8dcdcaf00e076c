use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::Action;

/// Modifier set for a key or mouse binding. Empty means the bare key
/// fires the action, which is how media keys are bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub logo: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub shift: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn logo() -> Self {
        Self {
            logo: true,
            ..Self::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::default()
        }
    }

    pub fn logo_shift() -> Self {
        Self {
            logo: true,
            shift: true,
            ..Self::default()
        }
    }

    pub fn logo_ctrl() -> Self {
        Self {
            logo: true,
            ctrl: true,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.logo && !self.alt && !self.ctrl && !self.shift
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.logo {
            parts.push("logo");
        }
        if self.alt {
            parts.push("alt");
        }
        if self.ctrl {
            parts.push("ctrl");
        }
        if self.shift {
            parts.push("shift");
        }
        f.write_str(&parts.join("+"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub mods: Modifiers,
    pub key: String,
    pub action: Action,
    #[serde(default)]
    pub desc: Option<String>,
}

impl KeyBinding {
    pub fn new(mods: Modifiers, key: &str, action: Action) -> Self {
        Self {
            mods,
            key: key.to_string(),
            action,
            desc: None,
        }
    }

    pub fn desc(mut self, desc: &str) -> Self {
        self.desc = Some(desc.to_string());
        self
    }

    /// Human-readable chord, e.g. "logo+shift+Return".
    pub fn chord(&self) -> String {
        if self.mods.is_empty() {
            self.key.clone()
        } else {
            format!("{}+{}", self.mods, self.key)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragOp {
    MoveWindow,
    ResizeWindow,
}

/// Pointer binding. Drags track the pointer for the duration of the
/// press, clicks fire once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MouseBinding {
    Drag {
        mods: Modifiers,
        button: MouseButton,
        op: DragOp,
    },
    Click {
        mods: Modifiers,
        button: MouseButton,
        action: Action,
    },
}
