use super::*;

fn size_class(size: ControlSize) -> Option<&'static str> {
    match size {
        ControlSize::Small => None,
        ControlSize::Large => Some("ui-action-button-large"),
    }
}

#[component]
/// Round action button that hands its `action` value to `on_action` when activated.
///
/// With `content` set the button is wrapped in a [`Tooltip`] carrying that text.
pub fn ActionButton<T>(
    action: T,
    on_action: Callback<T>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] content: Option<String>,
    #[prop(default = ControlSize::Small)] size: ControlSize,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView
where
    T: Clone + 'static,
{
    let class = class_names([Some("ui-action-button"), size_class(size), layout_class]);

    let button = view! {
        <button
            type="button"
            class=class
            aria-label=aria_label
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="action-button"
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |_| {
                dispatch_activation(disabled.get_untracked(), action.clone(), |value| {
                    on_action.call(value)
                });
            }
        >
            <span data-ui-slot="content">{children()}</span>
        </button>
    };

    match content {
        Some(text) => view! { <Tooltip text=text>{button}</Tooltip> }.into_view(),
        None => button.into_view(),
    }
}
