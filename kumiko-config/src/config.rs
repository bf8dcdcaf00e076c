use serde::{Deserialize, Serialize};

use crate::binding::{KeyBinding, MouseBinding};
use crate::group::Group;
use crate::layout::Layout;
use crate::options::Options;
use crate::rules::FloatingLayout;
use crate::widget::{Screen, WidgetDefaults};

/// Complete window manager configuration. Built once at startup and
/// handed to the manager whole; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub keys: Vec<KeyBinding>,
    pub mouse: Vec<MouseBinding>,
    pub groups: Vec<Group>,
    pub layouts: Vec<Layout>,
    pub widget_defaults: WidgetDefaults,
    pub extension_defaults: WidgetDefaults,
    pub screens: Vec<Screen>,
    pub floating: FloatingLayout,
    pub options: Options,
}
