//! Clickable appearance controls: password visibility and the theme bulb

use dioxus::prelude::*;

use crate::utils::appearance::{icon_class, theme_glyph, visibility_glyph};

#[derive(Props, PartialEq, Clone)]
pub struct VisibilityToggleProps {
    pub visible: bool,
    pub dark: bool,
    pub on_toggle: EventHandler<()>,
}

#[component]
pub fn VisibilityToggle(props: VisibilityToggleProps) -> Element {
    let title = if props.visible {
        "Hide password"
    } else {
        "Show password"
    };

    rsx! {
        span {
            class: "{icon_class(props.dark)} visibility-icon",
            role: "button",
            title: "{title}",
            onclick: move |_| props.on_toggle.call(()),
            "{visibility_glyph(props.visible)}"
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ThemeToggleProps {
    pub dark: bool,
    pub on_toggle: EventHandler<()>,
}

#[component]
pub fn ThemeToggle(props: ThemeToggleProps) -> Element {
    let title = if props.dark {
        "Switch to light theme"
    } else {
        "Switch to dark theme"
    };

    rsx! {
        span {
            class: "{icon_class(props.dark)} bulb-icon",
            role: "button",
            title: "{title}",
            onclick: move |_| props.on_toggle.call(()),
            "{theme_glyph(props.dark)}"
        }
    }
}
