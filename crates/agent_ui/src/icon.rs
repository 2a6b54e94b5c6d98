//! Centralized icon API.
//!
//! Icons are inline stroke SVGs drawn on a 24×24 grid with `currentColor`, so
//! they inherit text color from the surrounding control.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Icons available to controls and apps.
pub enum IconName {
    /// Two stacked sheets.
    Copy,
    /// Confirmation tick.
    Checkmark,
    /// Upward arrow used to send a message.
    ArrowSend,
    /// Right-pointing triangle.
    Play,
    /// Two vertical bars.
    Pause,
    /// Rounded square.
    Stop,
}

impl IconName {
    /// Every icon, in declaration order.
    pub const ALL: [IconName; 6] = [
        Self::Copy,
        Self::Checkmark,
        Self::ArrowSend,
        Self::Play,
        Self::Pause,
        Self::Stop,
    ];

    /// Stable `data-ui-icon` token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Checkmark => "checkmark",
            Self::ArrowSend => "arrow-send",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Stop => "stop",
        }
    }

    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Copy => &[
                "M10 8h10a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H10a2 2 0 0 1-2-2V10a2 2 0 0 1 2-2z",
                "M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2",
            ],
            Self::Checkmark => &["M20 6 9 17l-5-5"],
            Self::ArrowSend => &["m5 12 7-7 7 7", "M12 19V5"],
            Self::Play => &["M6 3l14 9-14 9V3z"],
            Self::Pause => &["M6 4h4v16H6z", "M14 4h4v16h-4z"],
            Self::Stop => &[
                "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 15px, used inside compact overlay buttons.
    Xs,
    /// 16px.
    #[default]
    Sm,
    /// 20px.
    Md,
    /// 24px.
    Lg,
}

impl IconSize {
    /// Edge length in CSS pixels.
    pub fn pixels(self) -> u16 {
        match self {
            Self::Xs => 15,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders a decorative inline SVG icon.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Sm)] size: IconSize) -> impl IntoView {
    let pixels = size.pixels();

    view! {
        <svg
            width=pixels
            height=pixels
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon
                .paths()
                .iter()
                .map(|d| view! { <path d=*d></path> })
                .collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn icon_tokens_are_unique() {
        let tokens: HashSet<_> = IconName::ALL.iter().map(|icon| icon.token()).collect();
        assert_eq!(tokens.len(), IconName::ALL.len());
    }

    #[test]
    fn every_icon_has_geometry() {
        for icon in IconName::ALL {
            assert!(!icon.paths().is_empty(), "{icon:?} has no paths");
        }
    }

    #[test]
    fn icon_sizes_grow_monotonically() {
        let sizes = [IconSize::Xs, IconSize::Sm, IconSize::Md, IconSize::Lg].map(IconSize::pixels);
        assert_eq!(sizes, [15, 16, 20, 24]);
    }
}
