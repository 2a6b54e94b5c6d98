//! Shared style tokens plus the tooltip and typography primitives controls compose.

use leptos::*;

use crate::class_names::merge_layout_class;
use crate::i18n::keys;
use crate::IconName;

mod tooltip;
mod typography;

pub use tooltip::Tooltip;
pub use typography::{Heading, Text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Discrete size selector shared by the spinner and action buttons.
pub enum ControlSize {
    /// Compact rendering.
    #[default]
    Small,
    /// Emphasized rendering.
    Large,
}

impl ControlSize {
    /// Both sizes, smallest first.
    pub const ALL: [ControlSize; 2] = [Self::Small, Self::Large];

    /// Width and height of the loading spinner layers, in CSS pixels.
    pub fn spinner_dimensions(self) -> (u16, u16) {
        match self {
            Self::Small => (25, 25),
            Self::Large => (50, 50),
        }
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Display mode of the copy-to-clipboard control.
pub enum CopyMode {
    /// Ready to copy.
    #[default]
    Copy,
    /// Confirms a copy that just happened.
    Copied,
}

impl CopyMode {
    /// Icon rendered for the mode. Exactly one per mode.
    pub fn icon(self) -> IconName {
        match self {
            Self::Copy => IconName::Copy,
            Self::Copied => IconName::Checkmark,
        }
    }

    /// Translation key of the accessible name for the mode.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Copy => keys::BUTTON_COPY,
            Self::Copied => keys::BUTTON_COPIED,
        }
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Copied => "copied",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Side of the anchor a tooltip bubble opens on.
pub enum TooltipPlacement {
    /// Above the anchor.
    #[default]
    Top,
    /// Below the anchor.
    Bottom,
    /// Left of the anchor.
    Left,
    /// Right of the anchor.
    Right,
}

impl TooltipPlacement {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared text roles.
pub enum TextRole {
    /// Body text.
    #[default]
    Body,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Title text.
    Title,
    /// Display-size headline.
    Display,
    /// Monospace/code text.
    Code,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
            Self::Display => "display",
            Self::Code => "code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    #[default]
    Primary,
    /// Secondary text.
    Secondary,
    /// Accent text.
    Accent,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
        }
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
