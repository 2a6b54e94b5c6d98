use super::*;

#[component]
/// Decorative page title showing the text resolved for `i18n_key`.
pub fn HeaderTitle(
    #[prop(into)] i18n_key: String,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <header
            class=merge_layout_class("ui-header-title", layout_class)
            data-ui-primitive="true"
            data-ui-kind="header-title"
        >
            <Heading role=TextRole::Display tone=TextTone::Accent ui_slot="title">
                {move || i18n.tr(&i18n_key)}
            </Heading>
        </header>
    }
}
