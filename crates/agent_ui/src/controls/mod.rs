//! Stateless controls: the loading spinner, action-style buttons, and the header title.
//!
//! Controls own no state. Disabled flags, display modes, and sizes arrive as
//! props; activation leaves through caller-supplied callbacks.

use leptos::*;

use crate::class_names::{class_names, merge_layout_class};
use crate::i18n::{keys, use_i18n};
use crate::primitives::{
    bool_token, ControlSize, CopyMode, Heading, TextRole, TextTone, Tooltip,
};
use crate::{Icon, IconName, IconSize};

mod action_button;
mod copy_button;
mod header_title;
mod spinner;
mod submit_button;

pub use action_button::ActionButton;
pub use copy_button::CopyToClipboardButton;
pub use header_title::HeaderTitle;
pub use spinner::LoadingSpinner;
pub use submit_button::SubmitButton;

/// Forwards one activation to `handler` unless the control is disabled.
///
/// Returns whether the handler ran. Controls route every click through this so
/// a disabled control stays inert even if the native `disabled` attribute is
/// bypassed.
pub fn dispatch_activation<T>(disabled: bool, value: T, handler: impl FnOnce(T)) -> bool {
    if disabled {
        return false;
    }
    handler(value);
    true
}
