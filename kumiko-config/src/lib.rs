pub mod action;
pub mod binding;
pub mod config;
pub mod group;
pub mod layout;
pub mod options;
pub mod rules;
pub mod widget;

pub use action::{Action, Direction, GroupOp, LayoutOp, SystemOp, WindowOp};
pub use binding::{DragOp, KeyBinding, Modifiers, MouseBinding, MouseButton};
pub use config::Config;
pub use group::Group;
pub use layout::Layout;
pub use options::{FocusOnActivation, GroupKeyBinder, GroupRule, InputConfig, Options};
pub use rules::{FloatingLayout, RuleMatcher, WindowType};
pub use widget::{Bar, HighlightMethod, Screen, UpdatesSource, Widget, WidgetDefaults};
