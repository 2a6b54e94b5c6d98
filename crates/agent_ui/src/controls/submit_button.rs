use super::*;

#[component]
/// Compact send button for composer forms.
pub fn SubmitButton(
    on_click: Callback<()>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <button
            type="submit"
            class=merge_layout_class("ui-submit-button", layout_class)
            aria-label=move || i18n.tr(keys::BUTTON_SEND)
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="submit-button"
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |_| {
                dispatch_activation(disabled.get_untracked(), (), |()| on_click.call(()));
            }
        >
            <Icon icon=IconName::ArrowSend size=IconSize::Sm />
        </button>
    }
}
