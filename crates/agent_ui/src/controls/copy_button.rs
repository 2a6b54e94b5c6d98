use super::*;

#[component]
/// Overlay button that copies content through `on_click` and shows the outcome.
///
/// `mode` selects between the copy icon and the confirmation checkmark. The
/// button never changes mode by itself; the caller flips it back once the
/// confirmation has been visible long enough. `hidden` wins over `mode`.
pub fn CopyToClipboardButton(
    on_click: Callback<()>,
    #[prop(optional, into)] mode: MaybeSignal<CopyMode>,
    #[prop(optional, into)] hidden: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <button
            type="button"
            class=merge_layout_class("ui-copy-button", layout_class)
            hidden=move || hidden.get()
            disabled=move || disabled.get()
            aria-label=move || i18n.tr(mode.get().label_key())
            data-ui-primitive="true"
            data-ui-kind="copy-button"
            data-ui-mode=move || mode.get().token()
            data-ui-hidden=move || bool_token(hidden.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |_| {
                dispatch_activation(disabled.get_untracked(), (), |()| on_click.call(()));
            }
        >
            {move || view! { <Icon icon=mode.get().icon() size=IconSize::Xs /> }}
        </button>
    }
}
