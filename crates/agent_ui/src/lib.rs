//! Stateless, prop-driven visual controls for agent chat surfaces.
//!
//! The crate owns a small set of Leptos controls (loading spinner, action,
//! submit, and copy-to-clipboard buttons, header title), the primitives they
//! compose (tooltip, typography, icons), the translation context that labels
//! them, and the stable `data-ui-*` DOM contract consumed by the app
//! stylesheet. Controls never hold state: every mode, size, and disabled flag
//! is a prop, and activation always leaves through a caller callback.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class_names;
mod controls;
pub mod i18n;
mod icon;
mod primitives;

pub use class_names::class_names;
pub use controls::{
    dispatch_activation, ActionButton, CopyToClipboardButton, HeaderTitle, LoadingSpinner,
    SubmitButton,
};
pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    ControlSize, CopyMode, Heading, Text, TextRole, TextTone, Tooltip, TooltipPlacement,
};

/// Convenience imports for application crates consuming the control set.
pub mod prelude {
    pub use crate::i18n::{provide_embedded_i18n, provide_i18n, use_i18n, I18n, Locale};
    pub use crate::{
        ActionButton, ControlSize, CopyMode, CopyToClipboardButton, HeaderTitle, Heading, Icon,
        IconName, IconSize, LoadingSpinner, SubmitButton, Text, TextRole, TextTone, Tooltip,
        TooltipPlacement,
    };
}
