use super::*;

#[component]
/// Wraps its children in a hover/focus anchor with an auxiliary text bubble.
///
/// The bubble is always in the DOM; the shell stylesheet reveals it while the
/// anchor is hovered or holds focus.
pub fn Tooltip(
    #[prop(into)] text: String,
    #[prop(default = TooltipPlacement::Top)] placement: TooltipPlacement,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-tooltip-anchor", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tooltip-anchor"
        >
            {children()}
            <span
                class="ui-tooltip"
                role="tooltip"
                data-ui-slot="tooltip"
                data-ui-placement=placement.token()
            >
                {text}
            </span>
        </span>
    }
}
