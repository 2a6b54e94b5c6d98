use agent_ui::i18n::{provide_embedded_i18n, provide_i18n, Locale};
use agent_ui_showcase::{showcase_bundle, ShowcaseApp};
use leptos::*;
use leptos_meta::*;
use serde_json::Value;

#[cfg(target_arch = "wasm32")]
const STATE_STORAGE_KEY: &str = "agent-ui.showcase.state";

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let locale = browser_locale();
    match showcase_bundle() {
        Ok(bundle) => {
            provide_i18n(bundle, locale);
        }
        Err(err) => {
            logging::error!("site translations failed to load: {err}");
            provide_embedded_i18n(locale);
        }
    }

    view! {
        <Title text="Agent UI" />
        <Meta name="description" content="Stateless agent controls built with Leptos." />

        <div class="site-root">
            <ShowcaseApp restored_state=load_state() on_persist=Callback::new(save_state) />
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_locale() -> Locale {
    web_sys::window()
        .and_then(|window| window.navigator().language())
        .and_then(|tag| match tag.parse::<Locale>() {
            Ok(locale) => Some(locale),
            Err(err) => {
                logging::log!("falling back to the default locale: {err}");
                None
            }
        })
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_locale() -> Locale {
    Locale::default()
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn load_state() -> Option<Value> {
    let raw = local_storage()?.get_item(STATE_STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            logging::warn!("discarding unreadable showcase state: {err}");
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_state() -> Option<Value> {
    None
}

#[cfg(target_arch = "wasm32")]
fn save_state(value: Value) {
    let Some(storage) = local_storage() else {
        logging::warn!("showcase state not saved: local storage unavailable");
        return;
    };
    if let Err(err) = storage.set_item(STATE_STORAGE_KEY, &value.to_string()) {
        logging::warn!("showcase state not saved: {err:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn save_state(_value: Value) {}
