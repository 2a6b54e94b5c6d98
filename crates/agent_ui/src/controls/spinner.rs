use super::*;

#[component]
/// Two-layer loading indicator: a static track ring under a spinning ring.
///
/// Both layers share the dimensions from [`ControlSize::spinner_dimensions`].
pub fn LoadingSpinner(
    #[prop(default = ControlSize::Small)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let i18n = use_i18n();
    let (width, height) = size.spinner_dimensions();
    let layer_style = format!("width: {width}px; height: {height}px;");

    view! {
        <div
            class=merge_layout_class("ui-loading-spinner", layout_class)
            role="status"
            aria-label=move || i18n.tr(keys::LOADING_LABEL)
            style=layer_style.clone()
            data-ui-primitive="true"
            data-ui-kind="loading-spinner"
            data-ui-size=size.token()
        >
            <div class="ui-loading-spinner-track" data-ui-slot="track" style=layer_style.clone()></div>
            <div
                class="ui-loading-spinner-indicator"
                data-ui-slot="indicator"
                data-ui-animation="spin"
                style=layer_style
            ></div>
        </div>
    }
}
