//! Caller-owned state behind the showcase controls.
//!
//! The shared controls are stateless; everything they display here (agent
//! status, copy confirmation, transcript, locale) lives in these types.

use agent_ui::i18n::Locale;
use agent_ui::{CopyMode, IconName};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Translation keys owned by the showcase.
pub(crate) mod keys {
    pub const AGENT_RESUME: &str = "AGENT$RESUME";
    pub const AGENT_PAUSE: &str = "AGENT$PAUSE";
    pub const AGENT_STOP: &str = "AGENT$STOP";
    pub const AGENT_STATE_RUNNING: &str = "AGENT$STATE_RUNNING";
    pub const AGENT_STATE_PAUSED: &str = "AGENT$STATE_PAUSED";
    pub const AGENT_STATE_STOPPED: &str = "AGENT$STATE_STOPPED";
    pub const CHAT_PLACEHOLDER: &str = "CHAT$PLACEHOLDER";
    pub const CHAT_EMPTY: &str = "CHAT$EMPTY";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Lifecycle of the demo agent driven by the action buttons.
pub enum AgentState {
    /// Working on a task.
    #[default]
    Running,
    /// Suspended; can resume.
    Paused,
    /// Halted; can be restarted.
    Stopped,
}

impl AgentState {
    /// States reachable from `self` with one action button.
    pub fn transitions(self) -> &'static [AgentState] {
        match self {
            Self::Running => &[Self::Paused, Self::Stopped],
            Self::Paused => &[Self::Running, Self::Stopped],
            Self::Stopped => &[Self::Running],
        }
    }

    /// Whether one action moves `self` to `next`.
    pub fn can_transition_to(self, next: AgentState) -> bool {
        self.transitions().contains(&next)
    }

    pub(crate) fn status_key(self) -> &'static str {
        match self {
            Self::Running => keys::AGENT_STATE_RUNNING,
            Self::Paused => keys::AGENT_STATE_PAUSED,
            Self::Stopped => keys::AGENT_STATE_STOPPED,
        }
    }

    /// Tooltip key for the button that moves the agent into `self`.
    pub(crate) fn action_key(self) -> &'static str {
        match self {
            Self::Running => keys::AGENT_RESUME,
            Self::Paused => keys::AGENT_PAUSE,
            Self::Stopped => keys::AGENT_STOP,
        }
    }

    pub(crate) fn action_icon(self) -> IconName {
        match self {
            Self::Running => IconName::Play,
            Self::Paused => IconName::Pause,
            Self::Stopped => IconName::Stop,
        }
    }
}

/// Rejected agent action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("agent cannot move from {from:?} to {to:?}")]
pub struct InvalidTransition {
    /// State at the time of the action.
    pub from: AgentState,
    /// Requested state.
    pub to: AgentState,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Persisted showcase state.
pub struct ShowcaseState {
    /// Current agent lifecycle state.
    pub agent_state: AgentState,
    /// Active UI locale.
    pub locale: Locale,
    /// Submitted chat messages, oldest first.
    pub messages: Vec<String>,
}

impl ShowcaseState {
    /// Applies an agent action if the lifecycle allows it.
    pub fn transition(&mut self, next: AgentState) -> Result<(), InvalidTransition> {
        if !self.agent_state.can_transition_to(next) {
            return Err(InvalidTransition {
                from: self.agent_state,
                to: next,
            });
        }
        self.agent_state = next;
        Ok(())
    }

    /// Appends the trimmed draft to the transcript. Blank drafts are ignored.
    pub fn submit(&mut self, draft: &str) -> bool {
        if draft_is_blank(draft) {
            return false;
        }
        self.messages.push(draft.trim().to_string());
        true
    }

    /// Most recent message, the copy button's target.
    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

/// Whether the composer has nothing worth sending.
pub fn draft_is_blank(draft: &str) -> bool {
    draft.trim().is_empty()
}

/// Copy-button mode plus the ticket that guards its timed reset.
///
/// Every confirmation bumps the generation, so a reset timer scheduled by an
/// earlier click cannot cut a later confirmation short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyFeedback {
    mode: CopyMode,
    generation: u64,
}

impl CopyFeedback {
    /// Mode to hand to the copy button.
    pub fn mode(self) -> CopyMode {
        self.mode
    }

    /// Switches to [`CopyMode::Copied`] and returns the ticket for the reset timer.
    pub fn confirm(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.mode = CopyMode::Copied;
        self.generation
    }

    /// Reverts to [`CopyMode::Copy`] if `ticket` belongs to the latest confirmation.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if self.mode != CopyMode::Copied || ticket != self.generation {
            return false;
        }
        self.mode = CopyMode::Copy;
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn lifecycle_transitions_follow_the_action_bar() {
        assert_eq!(
            AgentState::Running.transitions(),
            &[AgentState::Paused, AgentState::Stopped]
        );
        assert_eq!(
            AgentState::Paused.transitions(),
            &[AgentState::Running, AgentState::Stopped]
        );
        assert_eq!(AgentState::Stopped.transitions(), &[AgentState::Running]);
    }

    #[test]
    fn no_state_transitions_to_itself() {
        for state in [AgentState::Running, AgentState::Paused, AgentState::Stopped] {
            assert!(!state.can_transition_to(state), "{state:?}");
        }
    }

    #[test]
    fn rejected_transition_leaves_state_untouched() {
        let mut state = ShowcaseState {
            agent_state: AgentState::Stopped,
            ..ShowcaseState::default()
        };

        let err = state.transition(AgentState::Paused).unwrap_err();
        assert_eq!(
            err,
            InvalidTransition {
                from: AgentState::Stopped,
                to: AgentState::Paused,
            }
        );
        assert_eq!(state.agent_state, AgentState::Stopped);

        state.transition(AgentState::Running).unwrap();
        assert_eq!(state.agent_state, AgentState::Running);
    }

    #[test]
    fn submit_trims_and_skips_blank_drafts() {
        let mut state = ShowcaseState::default();
        assert!(!state.submit("   \n"));
        assert!(state.submit("  add a retry to the upload  "));
        assert_eq!(state.messages, vec!["add a retry to the upload".to_string()]);
        assert_eq!(state.last_message(), Some("add a retry to the upload"));
    }

    #[test]
    fn restore_fills_missing_fields_with_defaults() {
        let state: ShowcaseState =
            serde_json::from_value(json!({ "agent_state": "paused", "locale": "de" })).unwrap();
        assert_eq!(state.agent_state, AgentState::Paused);
        assert_eq!(state.locale, Locale::De);
        assert!(state.messages.is_empty());
    }

    #[test]
    fn restore_rejects_unknown_agent_states() {
        let restored = serde_json::from_value::<ShowcaseState>(json!({ "agent_state": "sleeping" }));
        assert!(restored.is_err());
    }

    #[test]
    fn copy_feedback_expires_only_for_the_latest_ticket() {
        let mut feedback = CopyFeedback::default();
        assert_eq!(feedback.mode(), CopyMode::Copy);

        let first = feedback.confirm();
        let second = feedback.confirm();
        assert_eq!(feedback.mode(), CopyMode::Copied);

        assert!(!feedback.expire(first));
        assert_eq!(feedback.mode(), CopyMode::Copied);

        assert!(feedback.expire(second));
        assert_eq!(feedback.mode(), CopyMode::Copy);
        assert!(!feedback.expire(second));
    }
}
