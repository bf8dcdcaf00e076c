use serde::{Deserialize, Serialize};

/// Matcher for deciding which windows float. A window floats if any
/// matcher in the rule list applies to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleMatcher {
    WmClass { class: String },
    Title { title: String },
    WindowType { kind: WindowType },
}

impl RuleMatcher {
    pub fn wm_class(class: &str) -> Self {
        RuleMatcher::WmClass {
            class: class.to_string(),
        }
    }

    pub fn title(title: &str) -> Self {
        RuleMatcher::Title {
            title: title.to_string(),
        }
    }

    pub fn window_type(kind: WindowType) -> Self {
        RuleMatcher::WindowType { kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowType {
    Utility,
    Notification,
    Toolbar,
    Splash,
    Dialog,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatingLayout {
    pub float_rules: Vec<RuleMatcher>,
}

impl FloatingLayout {
    pub fn new(float_rules: Vec<RuleMatcher>) -> Self {
        Self { float_rules }
    }

    /// Rules that any sane configuration wants: transient window types
    /// plus the classes and titles common dialogs announce themselves
    /// with.
    pub fn default_rules() -> Vec<RuleMatcher> {
        vec![
            RuleMatcher::window_type(WindowType::Utility),
            RuleMatcher::window_type(WindowType::Notification),
            RuleMatcher::window_type(WindowType::Toolbar),
            RuleMatcher::window_type(WindowType::Splash),
            RuleMatcher::window_type(WindowType::Dialog),
            RuleMatcher::wm_class("file_progress"),
            RuleMatcher::wm_class("confirm"),
            RuleMatcher::wm_class("dialog"),
            RuleMatcher::wm_class("download"),
            RuleMatcher::wm_class("error"),
            RuleMatcher::wm_class("notification"),
            RuleMatcher::wm_class("splash"),
            RuleMatcher::wm_class("toolbar"),
        ]
    }
}

impl Default for FloatingLayout {
    fn default() -> Self {
        Self {
            float_rules: Self::default_rules(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_matcher_serialization() {
        let rule = RuleMatcher::wm_class("ssh-askpass");
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(json, "{\"type\":\"wm_class\",\"class\":\"ssh-askpass\"}");

        let rule = RuleMatcher::title("pinentry");
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(json, "{\"type\":\"title\",\"title\":\"pinentry\"}");

        let rule = RuleMatcher::window_type(WindowType::Dialog);
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(json, "{\"type\":\"window_type\",\"kind\":\"dialog\"}");
    }

    #[test]
    fn test_default_rules_cover_transient_types() {
        let rules = FloatingLayout::default_rules();
        assert_eq!(rules.len(), 13);

        let type_rules = rules
            .iter()
            .filter(|r| matches!(r, RuleMatcher::WindowType { .. }))
            .count();
        assert_eq!(type_rules, 5);
        assert!(rules.contains(&RuleMatcher::window_type(WindowType::Dialog)));
        assert!(rules.contains(&RuleMatcher::wm_class("file_progress")));
    }

    #[test]
    fn test_floating_layout_default_uses_default_rules() {
        let layout = FloatingLayout::default();
        assert_eq!(layout.float_rules, FloatingLayout::default_rules());
    }

    #[test]
    fn test_floating_layout_roundtrip() {
        let layout = FloatingLayout::new(vec![
            RuleMatcher::wm_class("gitk"),
            RuleMatcher::title("branchdialog"),
        ]);
        let json = serde_json::to_string(&layout).unwrap();
        let deserialized: FloatingLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, layout);
    }
}
