//! The stock configuration document, assembled in code.

use kumiko_config::{
    Action, Bar, Config, Direction, DragOp, FloatingLayout, FocusOnActivation, Group,
    HighlightMethod, KeyBinding, Layout, LayoutOp, Modifiers, MouseBinding, MouseButton, Options,
    RuleMatcher, Screen, SystemOp, UpdatesSource, Widget, WidgetDefaults, WindowOp,
};

/// One group per glyph. The labels are Nerd Font private use area
/// codepoints, so the bar needs a patched font to render them.
pub const GROUP_SYMBOLS: &str = "\u{e745}\u{e70c}\u{e795}\u{f1781}\u{f058}";

/// Assemble the complete configuration document.
pub fn build() -> Config {
    let groups = Group::from_symbols(GROUP_SYMBOLS);

    let mut keys = base_keys();
    keys.extend(group_keys(&groups));

    let widget_defaults = WidgetDefaults {
        font: "Hack Nerd Font".to_string(),
        fontsize: 12,
        padding: 5,
    };
    let extension_defaults = widget_defaults.clone();

    Config {
        keys,
        mouse: mouse_bindings(),
        groups,
        layouts: layouts(),
        widget_defaults,
        extension_defaults,
        screens: vec![Screen {
            top: Some(status_bar()),
        }],
        floating: floating_layout(),
        options: options(),
    }
}

fn base_keys() -> Vec<KeyBinding> {
    let logo = Modifiers::logo();
    let logo_shift = Modifiers::logo_shift();
    let logo_ctrl = Modifiers::logo_ctrl();
    let bare = Modifiers::none();

    vec![
        // Switch between windows
        KeyBinding::new(logo, "Left", Action::focus(Direction::Left)).desc("Move focus to left"),
        KeyBinding::new(logo, "Right", Action::focus(Direction::Right))
            .desc("Move focus to right"),
        KeyBinding::new(logo, "Down", Action::focus(Direction::Down)).desc("Move focus down"),
        KeyBinding::new(logo, "Up", Action::focus(Direction::Up)).desc("Move focus up"),
        KeyBinding::new(logo, "space", Action::layout(LayoutOp::FocusNext))
            .desc("Move window focus to other window"),
        // Move windows between left/right columns or up/down in the current stack
        KeyBinding::new(logo_shift, "Left", Action::shuffle(Direction::Left))
            .desc("Move window to the left"),
        KeyBinding::new(logo_shift, "Right", Action::shuffle(Direction::Right))
            .desc("Move window to the right"),
        KeyBinding::new(logo_shift, "Down", Action::shuffle(Direction::Down))
            .desc("Move window down"),
        KeyBinding::new(logo_shift, "Up", Action::shuffle(Direction::Up)).desc("Move window up"),
        // Grow windows. A window already on the screen edge shrinks when
        // told to grow toward that edge.
        KeyBinding::new(logo_ctrl, "h", Action::grow(Direction::Left))
            .desc("Grow window to the left"),
        KeyBinding::new(logo_ctrl, "l", Action::grow(Direction::Right))
            .desc("Grow window to the right"),
        KeyBinding::new(logo_ctrl, "j", Action::grow(Direction::Down)).desc("Grow window down"),
        KeyBinding::new(logo_ctrl, "k", Action::grow(Direction::Up)).desc("Grow window up"),
        // Split shows every pane in the stack, unsplit collapses them to
        // one while keeping the panes around.
        KeyBinding::new(logo_shift, "Return", Action::layout(LayoutOp::ToggleSplit))
            .desc("Toggle between split and unsplit sides of stack"),
        // Kitty
        KeyBinding::new(logo, "Return", Action::spawn("kitty")).desc("Launch terminal"),
        // Rofi
        KeyBinding::new(Modifiers::alt(), "Space", Action::spawn("rofi -show run")),
        // PcmanFM
        KeyBinding::new(logo, "e", Action::spawn("pcmanfm")),
        // Firefox
        KeyBinding::new(logo, "b", Action::spawn("brave")),
        // Notion
        KeyBinding::new(logo, "n", Action::spawn("obsidian")),
        // VSCode
        KeyBinding::new(logo, "c", Action::spawn("code")),
        // Redshift
        KeyBinding::new(logo, "r", Action::spawn("redshift -O 5000")),
        KeyBinding::new(logo_shift, "r", Action::spawn("redshift -x")),
        // Spotify
        KeyBinding::new(logo, "s", Action::spawn("spotify-launcher")),
        // Bitwarden
        KeyBinding::new(logo, "p", Action::spawn("bitwarden-desktop")),
        // Volumen
        KeyBinding::new(
            bare,
            "XF86AudioMute",
            Action::spawn("pactl set-sink-mute @DEFAULT_SINK@ toggle"),
        ),
        KeyBinding::new(
            bare,
            "XF86AudioRaiseVolume",
            Action::spawn("pactl set-sink-volume @DEFAULT_SINK@ +5%"),
        ),
        KeyBinding::new(
            bare,
            "XF86AudioLowerVolume",
            Action::spawn("pactl set-sink-volume @DEFAULT_SINK@ -5%"),
        ),
        // Brillo
        KeyBinding::new(
            bare,
            "XF86MonBrightnessUp",
            Action::spawn("brightnessctl set +10%"),
        ),
        KeyBinding::new(
            bare,
            "XF86MonBrightnessDown",
            Action::spawn("brightnessctl set 10%-"),
        ),
        // Toggle between different layouts as defined below
        KeyBinding::new(logo, "Tab", Action::layout(LayoutOp::NextLayout))
            .desc("Toggle between layouts"),
        KeyBinding::new(logo, "w", Action::window(WindowOp::Kill)).desc("Kill focused window"),
        KeyBinding::new(logo_ctrl, "r", Action::system(SystemOp::ReloadConfig))
            .desc("Reload the config"),
        KeyBinding::new(logo_ctrl, "q", Action::system(SystemOp::Shutdown))
            .desc("Shutdown kumiko"),
        KeyBinding::new(logo, "z", Action::window(WindowOp::ToggleFullscreen)),
    ]
}

fn group_keys(groups: &[Group]) -> Vec<KeyBinding> {
    let logo = Modifiers::logo();
    let logo_shift = Modifiers::logo_shift();

    let mut keys = Vec::with_capacity(groups.len() * 2);
    for (i, group) in groups.iter().enumerate() {
        let key = (i + 1).to_string();
        // Switch to workspace N
        keys.push(KeyBinding::new(logo, &key, Action::view_group(&group.name)));
        // Send window to workspace N
        keys.push(KeyBinding::new(
            logo_shift,
            &key,
            Action::move_to_group(&group.name),
        ));
    }
    keys
}

fn layouts() -> Vec<Layout> {
    vec![
        Layout::MainAndVertStack {
            border_focus: "#9c4dcc".to_string(),
            border_width: 2,
        },
        Layout::MainAndHorizontalStack {
            border_focus: "#9c4dcc".to_string(),
            border_width: 2,
        },
        Layout::TreeTabs,
        Layout::Monocle,
    ]
}

fn status_bar() -> Bar {
    Bar {
        widgets: vec![
            Widget::GroupBox {
                background: "#06000f".to_string(),
                active: "9c4dcc".to_string(),
                fontsize: 19,
                borderwidth: 0,
                padding_x: 8,
                highlight: HighlightMethod::Block,
            },
            Widget::WindowTitle {
                background: "#06000f".to_string(),
                font: "Hack Nerd Font".to_string(),
                foreground: "#9c4dcc".to_string(),
                max_chars: 150,
            },
            Widget::Updates {
                no_update_string: "\u{f019}  0".to_string(),
                update_interval: 2700,
                font: "Hack Nerd Font".to_string(),
                fontsize: 14,
                color_no_updates: "#9c4dcc".to_string(),
                color_have_updates: "#9c4dcc".to_string(),
                display_format: "\u{f019}  {updates}".to_string(),
                padding: 10,
                source: UpdatesSource::ArchCheckupdates,
            },
            Widget::Text {
                text: "\u{eb6f}".to_string(),
                background: "#000".to_string(),
                foreground: "#A27EBB".to_string(),
                padding: -5.0,
                fontsize: 40,
            },
            Widget::Net {
                background: "#A27EBB".to_string(),
                format: "\u{f1eb} {down} ↓↑{up}'".to_string(),
            },
            Widget::Text {
                text: "\u{eb6f}".to_string(),
                background: "#A27EBB".to_string(),
                foreground: "#65499c".to_string(),
                padding: -5.0,
                fontsize: 40,
            },
            Widget::LayoutIcon {
                background: "#65499c".to_string(),
                scale: 0.55,
                padding: 0,
            },
            Widget::LayoutName {
                background: "#65499c".to_string(),
                padding: 5,
            },
            Widget::Text {
                text: "\u{eb6f}".to_string(),
                background: "#65499c".to_string(),
                foreground: "#9c4dcc".to_string(),
                padding: -5.0,
                fontsize: 40,
            },
            Widget::Clock {
                background: "#9c4dcc".to_string(),
                format: "%A, %B %d - %H:%M".to_string(),
            },
            Widget::Text {
                text: "\u{eb6f}".to_string(),
                background: "#9c4dcc".to_string(),
                foreground: "#A27EFE".to_string(),
                padding: -5.0,
                fontsize: 40,
            },
            Widget::Systray {
                background: "#A27EFE".to_string(),
                padding: 5,
            },
        ],
        size: 25,
        background: "#06000f".to_string(),
        opacity: 0.0,
    }
}

/// Chevron separator in the style of powerline prompts. The stock bar
/// above declares its separators inline instead of calling this.
#[allow(dead_code)]
pub fn powerline(bg: &str, fg: &str) -> Widget {
    Widget::Text {
        text: "\u{eb6f}".to_string(),
        background: bg.to_string(),
        foreground: fg.to_string(),
        padding: -0.5,
        fontsize: 30,
    }
}

// Drag floating layouts.
fn mouse_bindings() -> Vec<MouseBinding> {
    vec![
        MouseBinding::Drag {
            mods: Modifiers::logo(),
            button: MouseButton::Left,
            op: DragOp::MoveWindow,
        },
        MouseBinding::Drag {
            mods: Modifiers::logo(),
            button: MouseButton::Right,
            op: DragOp::ResizeWindow,
        },
        MouseBinding::Click {
            mods: Modifiers::logo(),
            button: MouseButton::Middle,
            action: Action::window(WindowOp::BringToFront),
        },
    ]
}

fn floating_layout() -> FloatingLayout {
    // Run xprop to see the wm class and name of an X client.
    let mut rules = FloatingLayout::default_rules();
    rules.extend([
        RuleMatcher::wm_class("confirmreset"), // gitk
        RuleMatcher::wm_class("makebranch"),   // gitk
        RuleMatcher::wm_class("maketag"),      // gitk
        RuleMatcher::wm_class("ssh-askpass"),  // ssh-askpass
        RuleMatcher::title("branchdialog"),    // gitk
        RuleMatcher::title("pinentry"),        // GPG key password entry
    ]);
    FloatingLayout::new(rules)
}

fn options() -> Options {
    Options {
        dgroups_key_binder: None,
        dgroups_app_rules: Vec::new(),
        follow_mouse_focus: true,
        bring_front_click: false,
        cursor_warp: false,
        auto_fullscreen: true,
        focus_on_window_activation: FocusOnActivation::Smart,
        reconfigure_screens: true,
        // Respect clients that auto-minimize themselves when losing
        // focus, steam games mostly.
        auto_minimize: true,
        // Per-device input settings for the Wayland backend.
        wl_input_rules: None,
        // Java UI toolkits misbehave under window managers outside
        // their whitelist; LG3D is on it.
        wmname: "LG3D".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(build(), build());
    }

    #[test]
    fn test_one_group_per_symbol() {
        let config = build();
        assert_eq!(config.groups.len(), GROUP_SYMBOLS.chars().count());
        assert_eq!(config.groups.len(), 5);
    }

    #[test]
    fn test_group_keys_use_decimal_key_symbols() {
        let config = build();
        for (i, group) in config.groups.iter().enumerate() {
            let key = (i + 1).to_string();
            let view = config
                .keys
                .iter()
                .find(|b| b.key == key && b.mods == Modifiers::logo())
                .unwrap();
            assert_eq!(view.action, Action::view_group(&group.name));
            let send = config
                .keys
                .iter()
                .find(|b| b.key == key && b.mods == Modifiers::logo_shift())
                .unwrap();
            assert_eq!(send.action, Action::move_to_group(&group.name));
        }
        assert_eq!(
            config.keys.len(),
            base_keys().len() + config.groups.len() * 2
        );
    }

    #[test]
    fn test_groups_past_the_ninth_get_unreachable_keys() {
        // Key symbols are decimal positions, so a tenth group would be
        // bound to "10", which no keyboard produces.
        let groups = Group::from_symbols("abcdefghijkl");
        let keys = group_keys(&groups);
        assert_eq!(keys.len(), 24);

        let long: Vec<_> = keys.iter().filter(|b| b.key.len() > 1).collect();
        assert_eq!(long.len(), 6);
        assert!(long
            .iter()
            .all(|b| b.key == "10" || b.key == "11" || b.key == "12"));
    }

    #[test]
    fn test_binding_table_covers_core_operations() {
        let config = build();
        let find = |chord: &str| {
            config
                .keys
                .iter()
                .find(|b| b.chord() == chord)
                .map(|b| b.action.clone())
        };

        for direction in [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ] {
            let arrow = match direction {
                Direction::Left => "Left",
                Direction::Right => "Right",
                Direction::Up => "Up",
                Direction::Down => "Down",
            };
            assert_eq!(
                find(&format!("logo+{}", arrow)),
                Some(Action::focus(direction))
            );
            assert_eq!(
                find(&format!("logo+shift+{}", arrow)),
                Some(Action::shuffle(direction))
            );
        }
        assert_eq!(find("logo+ctrl+h"), Some(Action::grow(Direction::Left)));
        assert_eq!(find("logo+ctrl+l"), Some(Action::grow(Direction::Right)));
        assert_eq!(find("logo+ctrl+j"), Some(Action::grow(Direction::Down)));
        assert_eq!(find("logo+ctrl+k"), Some(Action::grow(Direction::Up)));
        assert_eq!(find("logo+space"), Some(Action::layout(LayoutOp::FocusNext)));
        assert_eq!(
            find("logo+shift+Return"),
            Some(Action::layout(LayoutOp::ToggleSplit))
        );
        assert_eq!(find("logo+Tab"), Some(Action::layout(LayoutOp::NextLayout)));
        assert_eq!(find("logo+w"), Some(Action::window(WindowOp::Kill)));
        assert_eq!(
            find("logo+z"),
            Some(Action::window(WindowOp::ToggleFullscreen))
        );
        assert_eq!(
            find("logo+ctrl+r"),
            Some(Action::system(SystemOp::ReloadConfig))
        );
        assert_eq!(
            find("logo+ctrl+q"),
            Some(Action::system(SystemOp::Shutdown))
        );
    }

    #[test]
    fn test_spawn_bindings_carry_literal_commands() {
        let config = build();
        let find = |chord: &str| config.keys.iter().find(|b| b.chord() == chord).unwrap();

        assert_eq!(find("logo+Return").action, Action::spawn("kitty"));
        assert_eq!(find("alt+Space").action, Action::spawn("rofi -show run"));
        assert_eq!(find("logo+e").action, Action::spawn("pcmanfm"));
        assert_eq!(find("logo+r").action, Action::spawn("redshift -O 5000"));
        assert_eq!(find("logo+shift+r").action, Action::spawn("redshift -x"));
        assert_eq!(
            find("XF86AudioRaiseVolume").action,
            Action::spawn("pactl set-sink-volume @DEFAULT_SINK@ +5%")
        );
        assert_eq!(
            find("XF86MonBrightnessDown").action,
            Action::spawn("brightnessctl set 10%-")
        );
    }

    #[test]
    fn test_media_keys_have_no_modifiers() {
        let config = build();
        for binding in &config.keys {
            if binding.key.starts_with("XF86") {
                assert!(binding.mods.is_empty(), "{} should be bare", binding.key);
            }
        }
        let bare = config.keys.iter().filter(|b| b.mods.is_empty()).count();
        assert_eq!(bare, 5);
    }

    #[test]
    fn test_layouts_preserve_declaration_order() {
        let config = build();
        assert_eq!(config.layouts.len(), 4);
        match &config.layouts[0] {
            Layout::MainAndVertStack {
                border_focus,
                border_width,
            } => {
                assert_eq!(border_focus, "#9c4dcc");
                assert_eq!(*border_width, 2);
            }
            _ => panic!("Wrong variant"),
        }
        assert!(matches!(
            config.layouts[1],
            Layout::MainAndHorizontalStack { .. }
        ));
        assert_eq!(config.layouts[2], Layout::TreeTabs);
        assert_eq!(config.layouts[3], Layout::Monocle);
    }

    #[test]
    fn test_bar_widget_order() {
        let config = build();
        assert_eq!(config.screens.len(), 1);
        let bar = config.screens[0].top.as_ref().unwrap();
        assert_eq!(bar.size, 25);
        assert_eq!(bar.background, "#06000f");
        assert_eq!(bar.opacity, 0.0);

        let kinds: Vec<&str> = bar
            .widgets
            .iter()
            .map(|w| match w {
                Widget::GroupBox { .. } => "group_box",
                Widget::WindowTitle { .. } => "window_title",
                Widget::Updates { .. } => "updates",
                Widget::Text { .. } => "text",
                Widget::Net { .. } => "net",
                Widget::LayoutIcon { .. } => "layout_icon",
                Widget::LayoutName { .. } => "layout_name",
                Widget::Clock { .. } => "clock",
                Widget::Systray { .. } => "systray",
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                "group_box",
                "window_title",
                "updates",
                "text",
                "net",
                "text",
                "layout_icon",
                "layout_name",
                "text",
                "clock",
                "text",
                "systray",
            ]
        );
    }

    #[test]
    fn test_updates_widget_strings() {
        let config = build();
        let bar = config.screens[0].top.as_ref().unwrap();
        let found = bar
            .widgets
            .iter()
            .find_map(|w| match w {
                Widget::Updates {
                    no_update_string,
                    display_format,
                    source,
                    update_interval,
                    ..
                } => Some((
                    no_update_string.clone(),
                    display_format.clone(),
                    *source,
                    *update_interval,
                )),
                _ => None,
            })
            .unwrap();
        assert_eq!(found.0, "\u{f019}  0");
        assert_eq!(found.1, "\u{f019}  {updates}");
        assert_eq!(found.2, UpdatesSource::ArchCheckupdates);
        assert_eq!(found.3, 2700);
    }

    #[test]
    fn test_powerline_descriptor() {
        match powerline("#06000f", "#9c4dcc") {
            Widget::Text {
                text,
                background,
                foreground,
                padding,
                fontsize,
            } => {
                assert_eq!(text, "\u{eb6f}");
                assert_eq!(background, "#06000f");
                assert_eq!(foreground, "#9c4dcc");
                assert_eq!(padding, -0.5);
                assert_eq!(fontsize, 30);
            }
            _ => panic!("Wrong variant"),
        }
    }

    #[test]
    fn test_floating_rules_extend_default_set() {
        let config = build();
        let rules = &config.floating.float_rules;
        let defaults = FloatingLayout::default_rules();

        assert_eq!(&rules[..defaults.len()], &defaults[..]);
        assert_eq!(rules.len(), defaults.len() + 6);
        assert!(rules.contains(&RuleMatcher::wm_class("confirmreset")));
        assert!(rules.contains(&RuleMatcher::wm_class("ssh-askpass")));
        assert!(rules.contains(&RuleMatcher::title("branchdialog")));
        assert!(rules.contains(&RuleMatcher::title("pinentry")));
    }

    #[test]
    fn test_extension_defaults_match_widget_defaults() {
        let config = build();
        assert_eq!(config.widget_defaults, config.extension_defaults);
        assert_eq!(config.widget_defaults.font, "Hack Nerd Font");
        assert_eq!(config.widget_defaults.fontsize, 12);
        assert_eq!(config.widget_defaults.padding, 5);
    }

    #[test]
    fn test_mouse_bindings() {
        let config = build();
        assert_eq!(config.mouse.len(), 3);
        assert_eq!(
            config.mouse[0],
            MouseBinding::Drag {
                mods: Modifiers::logo(),
                button: MouseButton::Left,
                op: DragOp::MoveWindow,
            }
        );
        assert_eq!(
            config.mouse[1],
            MouseBinding::Drag {
                mods: Modifiers::logo(),
                button: MouseButton::Right,
                op: DragOp::ResizeWindow,
            }
        );
        assert_eq!(
            config.mouse[2],
            MouseBinding::Click {
                mods: Modifiers::logo(),
                button: MouseButton::Middle,
                action: Action::window(WindowOp::BringToFront),
            }
        );
    }

    #[test]
    fn test_options_record() {
        let config = build();
        let options = &config.options;
        assert_eq!(options.dgroups_key_binder, None);
        assert!(options.dgroups_app_rules.is_empty());
        assert!(options.follow_mouse_focus);
        assert!(!options.bring_front_click);
        assert!(!options.cursor_warp);
        assert!(options.auto_fullscreen);
        assert_eq!(
            options.focus_on_window_activation,
            FocusOnActivation::Smart
        );
        assert!(options.reconfigure_screens);
        assert!(options.auto_minimize);
        assert_eq!(options.wl_input_rules, None);
        assert_eq!(options.wmname, "LG3D");
    }
}
