//! Pure class-name and glyph derivation for the light/dark theme and the
//! visibility toggles. Nothing here reads or writes state.

/// Page wrapper class driving the stylesheet's background colors.
pub fn page_class(dark: bool) -> &'static str {
    if dark {
        "main-form-container dark"
    } else {
        "main-form-container"
    }
}

pub fn header_class(dark: bool) -> &'static str {
    if dark {
        "form-header dark"
    } else {
        "form-header"
    }
}

pub fn input_class(dark: bool) -> &'static str {
    if dark {
        "form-input dark"
    } else {
        "form-input"
    }
}

pub fn icon_class(dark: bool) -> &'static str {
    if dark {
        "icon-button dark"
    } else {
        "icon-button"
    }
}

/// Eye glyph for the visibility toggles: open while masked (click to reveal),
/// struck while revealed (click to mask).
pub fn visibility_glyph(visible: bool) -> &'static str {
    if visible {
        "🚫👁"
    } else {
        "👁"
    }
}

/// Bulb glyph for the theme toggle: lit while the dark theme is active.
pub fn theme_glyph(dark: bool) -> &'static str {
    if dark {
        "💡"
    } else {
        "🔅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_classes_flip_with_flag() {
        assert_eq!(input_class(false), "form-input");
        assert_eq!(input_class(true), "form-input dark");
        assert_eq!(page_class(true), "main-form-container dark");
        assert_ne!(header_class(true), header_class(false));
        assert_ne!(icon_class(true), icon_class(false));
    }

    #[test]
    fn test_glyphs_differ_per_state() {
        assert_ne!(visibility_glyph(true), visibility_glyph(false));
        assert_ne!(theme_glyph(true), theme_glyph(false));
    }
}
