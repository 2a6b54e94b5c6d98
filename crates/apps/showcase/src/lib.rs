//! Showcase app for the shared agent controls.
//!
//! Every `agent_ui` control is wired to real state owned here: the action bar
//! drives a small agent lifecycle, the composer feeds a transcript, and the
//! copy button confirms clipboard writes and is reset on a timer by this app,
//! never by the button itself.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use agent_ui::i18n::{keys as ui_keys, Bundle, Catalog, I18nError, Locale};
use agent_ui::prelude::*;
use leptos::*;
use serde_json::Value;

mod state;

pub use state::{draft_is_blank, AgentState, CopyFeedback, InvalidTransition, ShowcaseState};

use state::keys;

/// How long the copy button shows its confirmation before the showcase resets it.
pub const COPIED_RESET: Duration = Duration::from_secs(2);

fn catalog_source(locale: Locale) -> &'static str {
    match locale {
        Locale::En => include_str!("../locales/en.json"),
        Locale::De => include_str!("../locales/de.json"),
        Locale::Fr => include_str!("../locales/fr.json"),
    }
}

/// Control catalogs layered with the showcase's own strings.
pub fn showcase_bundle() -> Result<Bundle, I18nError> {
    let app = Locale::ALL
        .into_iter()
        .try_fold(Bundle::new(), |bundle, locale| {
            let catalog = Catalog::from_json(locale, catalog_source(locale))?;
            Ok::<_, I18nError>(bundle.with_catalog(catalog))
        })?;
    Ok(Bundle::embedded()?.merge(app))
}

#[cfg(target_arch = "wasm32")]
fn write_clipboard(text: String) {
    let Some(window) = web_sys::window() else {
        logging::warn!("clipboard unavailable: no window");
        return;
    };
    let promise = window.navigator().clipboard().write_text(&text);
    spawn_local(async move {
        if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
            logging::warn!("clipboard write failed: {err:?}");
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn write_clipboard(text: String) {
    logging::log!("clipboard write skipped outside the browser ({} bytes)", text.len());
}

#[component]
/// Showcase page contents.
pub fn ShowcaseApp(
    /// Previously persisted state payload.
    restored_state: Option<Value>,
    /// Receives a snapshot whenever the persisted state changes.
    #[prop(optional)]
    on_persist: Option<Callback<Value>>,
) -> impl IntoView {
    let i18n = use_context::<I18n>().unwrap_or_else(|| match showcase_bundle() {
        Ok(bundle) => provide_i18n(bundle, Locale::default()),
        Err(err) => {
            logging::error!("showcase translations failed to load: {err}");
            provide_embedded_i18n(Locale::default())
        }
    });
    let state = create_rw_signal(ShowcaseState::default());
    let last_saved = create_rw_signal::<Option<String>>(None);
    let draft = create_rw_signal(String::new());
    let copy_feedback = create_rw_signal(CopyFeedback::default());

    let mut restored_locale = false;
    if let Some(restored_state) = restored_state {
        let has_locale = restored_state.get("locale").is_some();
        match serde_json::from_value::<ShowcaseState>(restored_state) {
            Ok(restored) => {
                last_saved.set(serde_json::to_string(&restored).ok());
                state.set(restored);
                restored_locale = has_locale;
            }
            Err(err) => logging::warn!("showcase restore failed: {err}"),
        }
    }

    // A persisted locale beats the one the parent picked; otherwise adopt the parent's.
    if restored_locale {
        i18n.set_locale(state.with_untracked(|state| state.locale));
    } else {
        let locale = i18n.locale_untracked();
        state.update(|state| state.locale = locale);
    }

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("showcase serialize failed: {err}");
                return;
            }
        };

        if last_saved.get_untracked().as_deref() == Some(serialized.as_str()) {
            return;
        }
        last_saved.set(Some(serialized));

        if let Some(on_persist) = on_persist.as_ref() {
            match serde_json::to_value(&snapshot) {
                Ok(value) => on_persist.call(value),
                Err(err) => logging::warn!("showcase persist failed: {err}"),
            }
        }
    });

    let submit = Callback::new(move |()| {
        let text = draft.get_untracked();
        if state.try_update(|state| state.submit(&text)).unwrap_or(false) {
            draft.set(String::new());
        }
    });

    let copy_last = Callback::new(move |()| {
        let Some(text) =
            state.with_untracked(|state| state.last_message().map(str::to_string))
        else {
            return;
        };
        write_clipboard(text);

        let Some(ticket) = copy_feedback.try_update(|feedback| feedback.confirm()) else {
            return;
        };
        set_timeout(
            move || {
                copy_feedback.update(|feedback| {
                    feedback.expire(ticket);
                });
            },
            COPIED_RESET,
        );
    });

    view! {
        <main class="showcase" data-app="agent-ui-showcase">
            <HeaderTitle i18n_key=ui_keys::HOME_HEADER_TITLE />

            <section class="showcase-locale">
                <select
                    aria-label="Language"
                    on:change=move |ev| {
                        match event_target_value(&ev).parse::<Locale>() {
                            Ok(locale) => {
                                state.update(|state| state.locale = locale);
                                i18n.set_locale(locale);
                            }
                            Err(err) => logging::warn!("locale switch ignored: {err}"),
                        }
                    }
                >
                    {Locale::ALL
                        .into_iter()
                        .map(|locale| {
                            view! {
                                <option
                                    value=locale.tag()
                                    selected=move || state.with(|state| state.locale == locale)
                                >
                                    {locale.display_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </section>

            <section class="showcase-agent" data-ui-slot="agent">
                <Heading role=TextRole::Title>
                    {move || i18n.tr(state.with(|state| state.agent_state.status_key()))}
                </Heading>
                <Show when=move || state.with(|state| state.agent_state == AgentState::Running)>
                    <LoadingSpinner size=ControlSize::Small />
                    <LoadingSpinner size=ControlSize::Large />
                </Show>
                <div class="showcase-action-bar" role="toolbar">
                    {move || {
                        state
                            .with(|state| state.agent_state.transitions())
                            .iter()
                            .map(|&next| {
                                view! {
                                    <ActionButton
                                        action=next
                                        on_action=Callback::new(move |next: AgentState| {
                                            let applied = state
                                                .try_update(|state| state.transition(next));
                                            if let Some(Err(err)) = applied {
                                                logging::warn!("{err}");
                                            }
                                        })
                                        content=i18n.tr(next.action_key())
                                        aria_label=i18n.tr(next.action_key())
                                        size=ControlSize::Large
                                    >
                                        <Icon icon=next.action_icon() size=IconSize::Md />
                                    </ActionButton>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>

            <section class="showcase-chat" data-ui-slot="chat">
                <div class="showcase-transcript">
                    <ol>
                        {move || {
                            let messages = state.with(|state| state.messages.clone());
                            if messages.is_empty() {
                                view! {
                                    <li>
                                        <Text tone=TextTone::Secondary>{i18n.tr(keys::CHAT_EMPTY)}</Text>
                                    </li>
                                }
                                    .into_view()
                            } else {
                                messages
                                    .into_iter()
                                    .map(|message| view! { <li><Text>{message}</Text></li> })
                                    .collect_view()
                            }
                        }}
                    </ol>
                    <CopyToClipboardButton
                        mode=Signal::derive(move || copy_feedback.get().mode())
                        hidden=Signal::derive(move || state.with(|state| state.messages.is_empty()))
                        on_click=copy_last
                    />
                </div>
                <form class="showcase-composer" on:submit=move |ev| ev.prevent_default()>
                    <textarea
                        placeholder=move || i18n.tr(keys::CHAT_PLACEHOLDER)
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    ></textarea>
                    <SubmitButton
                        disabled=Signal::derive(move || draft.with(|draft| draft_is_blank(draft)))
                        on_click=submit
                    />
                </form>
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn render(restored_state: Value) -> String {
        let runtime = create_runtime();
        let html = view! { <ShowcaseApp restored_state=Some(restored_state) /> }
            .into_view()
            .render_to_string()
            .to_string();
        runtime.dispose();
        html
    }

    fn render_under(parent_locale: Locale, restored_state: Option<Value>) -> String {
        let runtime = create_runtime();
        provide_i18n(showcase_bundle().expect("catalogs parse"), parent_locale);
        let html = view! { <ShowcaseApp restored_state=restored_state /> }
            .into_view()
            .render_to_string()
            .to_string();
        runtime.dispose();
        html
    }

    #[test]
    fn showcase_bundle_covers_every_locale() {
        let bundle = showcase_bundle().expect("catalogs parse");
        for locale in Locale::ALL {
            assert!(bundle.missing_keys(locale).is_empty(), "{locale:?}");
        }
        assert_eq!(bundle.translate(Locale::De, keys::AGENT_PAUSE), "Agent pausieren");
        assert_eq!(bundle.translate(Locale::De, ui_keys::BUTTON_COPY), "Kopieren");
    }

    #[test]
    fn running_agent_shows_both_spinners_and_its_actions() {
        let html = render(json!({ "agent_state": "running" }));
        assert!(html.contains(r#"data-ui-size="small""#));
        assert!(html.contains(r#"data-ui-size="large""#));
        assert_eq!(html.matches(r#"data-ui-kind="loading-spinner""#).count(), 2);
        assert_eq!(html.matches(r#"data-ui-kind="action-button""#).count(), 2);
    }

    #[test]
    fn stopped_agent_hides_spinners_and_offers_resume() {
        let html = render(json!({ "agent_state": "stopped" }));
        assert!(!html.contains(r#"data-ui-kind="loading-spinner""#));
        assert_eq!(html.matches(r#"data-ui-kind="action-button""#).count(), 1);
        assert!(html.contains(r#"data-ui-icon="play""#));
    }

    #[test]
    fn copy_button_is_hidden_until_a_message_exists() {
        let empty = render(json!({}));
        assert!(empty.contains(r#"data-ui-hidden="true""#));

        let chatted = render(json!({ "messages": ["ship it"] }));
        assert!(chatted.contains(r#"data-ui-hidden="false""#));
        assert!(chatted.contains("ship it"));
    }

    #[test]
    fn first_visit_keeps_the_parent_locale() {
        let html = render_under(Locale::De, None);
        assert!(html.contains("Was bauen wir heute?"));
        assert!(!html.contains("What are we building today?"));
    }

    #[test]
    fn restore_without_locale_keeps_the_parent_locale() {
        let html = render_under(Locale::Fr, Some(json!({ "agent_state": "paused" })));
        assert!(html.contains("Que construisons-nous"));
        assert!(!html.contains("What are we building today?"));
        assert!(!html.contains("Agent is paused"));
    }

    #[test]
    fn restored_locale_overrides_the_parent_locale() {
        let html = render_under(Locale::Fr, Some(json!({ "locale": "de" })));
        assert!(html.contains("Was bauen wir heute?"));
    }

    #[test]
    fn restored_locale_drives_translations() {
        let html = render(json!({ "locale": "de", "agent_state": "paused" }));
        assert!(html.contains("Agent ist pausiert"));
        assert!(html.contains("Was bauen wir heute?"));
    }
}
