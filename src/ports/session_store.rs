//! Session Store Port - Interface for persisting conversation session state.
//!
//! Flow state is keyed by conversation, the rider profile by rider. Loads
//! have get-or-create semantics: an absent key yields the fresh default, so
//! a brand-new conversation needs no explicit setup call.

use async_trait::async_trait;

use crate::domain::booking::{FlowState, RiderProfile};
use crate::domain::foundation::{ConversationId, RiderId};

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session backend unavailable: {0}")]
    Unavailable(String),

    #[error("failed to serialize session state: {0}")]
    Serialization(String),
}

/// Port for loading and saving per-conversation session state
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the flow state for a conversation, defaulting to idle when the
    /// conversation has no stored state.
    async fn flow_state(&self, conversation: ConversationId) -> Result<FlowState, SessionStoreError>;

    /// Load the profile for a rider, defaulting to fresh when the rider has
    /// no stored profile.
    async fn rider_profile(&self, rider: RiderId) -> Result<RiderProfile, SessionStoreError>;

    /// Save the flow state for a conversation. Called once per turn, after
    /// the turn has fully processed.
    async fn save_flow_state(
        &self,
        conversation: ConversationId,
        state: FlowState,
    ) -> Result<(), SessionStoreError>;

    /// Save the profile for a rider. Called once per turn, after the turn
    /// has fully processed.
    async fn save_rider_profile(
        &self,
        rider: RiderId,
        profile: RiderProfile,
    ) -> Result<(), SessionStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_render_with_context() {
        let err = SessionStoreError::Unavailable("connection reset".to_string());
        assert!(err.to_string().contains("connection reset"));

        let err = SessionStoreError::Serialization("bad payload".to_string());
        assert!(err.to_string().contains("bad payload"));
    }
}
