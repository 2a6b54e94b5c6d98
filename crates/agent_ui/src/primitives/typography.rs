use super::*;

#[component]
/// Shared inline text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared heading primitive rendered as a real `<h1>`..`<h3>` by role.
pub fn Heading(
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-heading", layout_class);
    let variant = role.token();
    let tone = tone.token();

    match role {
        TextRole::Display => view! {
            <h1
                class=class
                data-ui-primitive="true"
                data-ui-kind="heading"
                data-ui-slot=ui_slot
                data-ui-variant=variant
                data-ui-tone=tone
            >
                {children()}
            </h1>
        }
        .into_view(),
        TextRole::Title => view! {
            <h2
                class=class
                data-ui-primitive="true"
                data-ui-kind="heading"
                data-ui-slot=ui_slot
                data-ui-variant=variant
                data-ui-tone=tone
            >
                {children()}
            </h2>
        }
        .into_view(),
        TextRole::Body | TextRole::Label | TextRole::Caption | TextRole::Code => view! {
            <h3
                class=class
                data-ui-primitive="true"
                data-ui-kind="heading"
                data-ui-slot=ui_slot
                data-ui-variant=variant
                data-ui-tone=tone
            >
                {children()}
            </h3>
        }
        .into_view(),
    }
}
