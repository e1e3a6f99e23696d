//! In-Memory Session Store Adapter
//!
//! Keeps flow state and rider profiles in memory. Useful for testing and
//! single-process deployments; loads default to fresh state, giving the
//! get-or-create semantics the turn handler relies on.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::booking::{FlowState, RiderProfile};
use crate::domain::foundation::{ConversationId, RiderId};
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage for conversation flow state and rider profiles
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    flows: Arc<RwLock<HashMap<ConversationId, FlowState>>>,
    profiles: Arc<RwLock<HashMap<RiderId, RiderProfile>>>,
}

impl InMemorySessionStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.flows.write().await.clear();
        self.profiles.write().await.clear();
    }

    /// Number of conversations with stored flow state
    pub async fn conversation_count(&self) -> usize {
        self.flows.read().await.len()
    }

    /// Number of riders with stored profiles
    pub async fn rider_count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn flow_state(
        &self,
        conversation: ConversationId,
    ) -> Result<FlowState, SessionStoreError> {
        let flows = self.flows.read().await;
        Ok(flows.get(&conversation).copied().unwrap_or_default())
    }

    async fn rider_profile(&self, rider: RiderId) -> Result<RiderProfile, SessionStoreError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(&rider).cloned().unwrap_or_default())
    }

    async fn save_flow_state(
        &self,
        conversation: ConversationId,
        state: FlowState,
    ) -> Result<(), SessionStoreError> {
        self.flows.write().await.insert(conversation, state);
        Ok(())
    }

    async fn save_rider_profile(
        &self,
        rider: RiderId,
        profile: RiderProfile,
    ) -> Result<(), SessionStoreError> {
        self.profiles.write().await.insert(rider, profile);
        Ok(())
    }
}
