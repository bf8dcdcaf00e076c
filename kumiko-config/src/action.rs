use std::fmt;

use serde::{Deserialize, Serialize};

/// Deferred action attached to a binding. The configuration layer only
/// names actions; the window manager dispatches them when the binding
/// fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Spawn { command: String },
    Layout { op: LayoutOp },
    Window { op: WindowOp },
    Group { op: GroupOp },
    System { op: SystemOp },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutOp {
    Focus { direction: Direction },
    FocusNext,
    Shuffle { direction: Direction },
    Grow { direction: Direction },
    ToggleSplit,
    NextLayout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowOp {
    Kill,
    ToggleFullscreen,
    BringToFront,
}

/// Group-targeting operations carry the name of the group they act on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GroupOp {
    View { group: String },
    MoveWindow { group: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemOp {
    ReloadConfig,
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Action {
    pub fn spawn(command: &str) -> Self {
        Action::Spawn {
            command: command.to_string(),
        }
    }

    pub fn layout(op: LayoutOp) -> Self {
        Action::Layout { op }
    }

    pub fn window(op: WindowOp) -> Self {
        Action::Window { op }
    }

    pub fn group(op: GroupOp) -> Self {
        Action::Group { op }
    }

    pub fn system(op: SystemOp) -> Self {
        Action::System { op }
    }

    pub fn focus(direction: Direction) -> Self {
        Action::Layout {
            op: LayoutOp::Focus { direction },
        }
    }

    pub fn shuffle(direction: Direction) -> Self {
        Action::Layout {
            op: LayoutOp::Shuffle { direction },
        }
    }

    pub fn grow(direction: Direction) -> Self {
        Action::Layout {
            op: LayoutOp::Grow { direction },
        }
    }

    pub fn view_group(group: &str) -> Self {
        Action::Group {
            op: GroupOp::View {
                group: group.to_string(),
            },
        }
    }

    pub fn move_to_group(group: &str) -> Self {
        Action::Group {
            op: GroupOp::MoveWindow {
                group: group.to_string(),
            },
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Spawn { command } => write!(f, "spawn {:?}", command),
            Action::Layout { op } => write!(f, "{}", op),
            Action::Window { op } => write!(f, "{}", op),
            Action::Group { op } => write!(f, "{}", op),
            Action::System { op } => write!(f, "{}", op),
        }
    }
}

impl fmt::Display for LayoutOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutOp::Focus { direction } => write!(f, "focus {}", direction),
            LayoutOp::FocusNext => write!(f, "focus-next"),
            LayoutOp::Shuffle { direction } => write!(f, "shuffle {}", direction),
            LayoutOp::Grow { direction } => write!(f, "grow {}", direction),
            LayoutOp::ToggleSplit => write!(f, "toggle-split"),
            LayoutOp::NextLayout => write!(f, "next-layout"),
        }
    }
}

impl fmt::Display for WindowOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WindowOp::Kill => "kill-window",
            WindowOp::ToggleFullscreen => "toggle-fullscreen",
            WindowOp::BringToFront => "bring-to-front",
        };
        f.write_str(s)
    }
}

impl fmt::Display for GroupOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupOp::View { group } => write!(f, "view-group {}", group),
            GroupOp::MoveWindow { group } => write!(f, "move-to-group {}", group),
        }
    }
}

impl fmt::Display for SystemOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SystemOp::ReloadConfig => "reload-config",
            SystemOp::Shutdown => "shutdown",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(s)
    }
}
