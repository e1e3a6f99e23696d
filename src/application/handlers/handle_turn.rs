//! TurnHandler - route one incoming user message through the booking flow.
//!
//! Per turn: load flow state and profile, decide (an active sequence always
//! wins over knowledge-base lookup), validate and advance, save state, and
//! produce exactly one reply. Profile and flow state are written only after
//! the full decision is in hand, so a turn cancelled mid-flight leaves no
//! partial update behind.

use std::sync::Arc;

use chrono::Local;
use tracing::{debug, info};

use crate::config::FlowConfig;
use crate::domain::booking::{validators, FlowState, RiderProfile, Slot, ValidationOutcome};
use crate::domain::foundation::{ConversationId, RiderId};
use crate::ports::{
    DateTimeRecognizer, KnowledgeBase, KnowledgeBaseError, NumberRecognizer, SessionStore,
    SessionStoreError,
};

/// Reply sent when the knowledge base has no answer for an idle turn.
pub const NO_ANSWER_REPLY: &str = "Sorry, I could not find an answer in the knowledge base.";

/// Command to process one incoming user message
#[derive(Debug, Clone)]
pub struct HandleTurnCommand {
    pub conversation_id: ConversationId,
    pub rider_id: RiderId,
    pub text: String,
}

/// Result of processing one turn
#[derive(Debug, Clone)]
pub struct HandleTurnResult {
    /// The single outbound reply for this turn.
    pub reply: String,
    /// Flow state after the turn.
    pub flow_state: FlowState,
}

/// Error type for turn processing.
///
/// Recognition failures never surface here: the validators convert them to
/// rejection replies so the conversation stays alive.
#[derive(Debug, thiserror::Error)]
pub enum HandleTurnError {
    #[error("session store error: {0}")]
    Session(#[from] SessionStoreError),

    #[error("knowledge base error: {0}")]
    KnowledgeBase(#[from] KnowledgeBaseError),
}

/// Handler routing each user turn to slot collection or knowledge-base
/// lookup.
pub struct TurnHandler {
    store: Arc<dyn SessionStore>,
    numbers: Arc<dyn NumberRecognizer>,
    dates: Arc<dyn DateTimeRecognizer>,
    knowledge: Arc<dyn KnowledgeBase>,
    config: FlowConfig,
}

impl TurnHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        numbers: Arc<dyn NumberRecognizer>,
        dates: Arc<dyn DateTimeRecognizer>,
        knowledge: Arc<dyn KnowledgeBase>,
        config: FlowConfig,
    ) -> Self {
        Self {
            store,
            numbers,
            dates,
            knowledge,
            config,
        }
    }

    /// Process one user message and produce the reply for it.
    pub async fn handle(
        &self,
        cmd: HandleTurnCommand,
    ) -> Result<HandleTurnResult, HandleTurnError> {
        let flow = self.store.flow_state(cmd.conversation_id).await?;
        let mut profile = self.store.rider_profile(cmd.rider_id).await?;
        let input = cmd.text.trim();

        debug!(conversation = %cmd.conversation_id, state = ?flow, "routing turn");

        let (reply, next) = match flow {
            FlowState::Asking(slot) => self.collect_slot(slot, input, &mut profile).await,
            FlowState::NotStarted => Self::begin_sequence(),
            FlowState::Idle => self.answer_from_knowledge_base(input).await?,
        };

        self.store.save_flow_state(cmd.conversation_id, next).await?;
        self.store.save_rider_profile(cmd.rider_id, profile).await?;

        Ok(HandleTurnResult {
            reply,
            flow_state: next,
        })
    }

    /// Opens the question sequence with the first slot prompt.
    fn begin_sequence() -> (String, FlowState) {
        (
            Slot::Name.prompt().to_string(),
            FlowState::Asking(Slot::Name),
        )
    }

    /// Idle-state turn: the top-ranked answer governs. The booking trigger
    /// starts a sequence, any other answer is echoed verbatim, and no
    /// answer yields the fixed fallback.
    async fn answer_from_knowledge_base(
        &self,
        query: &str,
    ) -> Result<(String, FlowState), HandleTurnError> {
        let answers = self.knowledge.answers(query).await?;

        Ok(match answers.first() {
            Some(top) if top.text == self.config.booking_trigger => {
                debug!(score = top.score, "booking trigger matched");
                Self::begin_sequence()
            }
            Some(top) => (top.text.clone(), FlowState::Idle),
            None => (NO_ANSWER_REPLY.to_string(), FlowState::Idle),
        })
    }

    /// Runs the validator for the pending slot. On acceptance the profile
    /// gains the value and the sequence advances; on rejection the reply is
    /// the rejection message and the state is held so the slot is re-asked.
    async fn collect_slot(
        &self,
        slot: Slot,
        input: &str,
        profile: &mut RiderProfile,
    ) -> (String, FlowState) {
        match slot {
            Slot::Name => match validators::validate_name(input) {
                ValidationOutcome::Accepted(name) => {
                    let reply = format!("Hi {}. {}", name, Slot::Age.prompt());
                    profile.name = Some(name);
                    (reply, FlowState::Asking(Slot::Age))
                }
                ValidationOutcome::Rejected(message) => (message, FlowState::Asking(slot)),
            },
            Slot::Age => {
                let recognized = self
                    .numbers
                    .recognize_number(input, self.config.locale)
                    .await;
                match validators::validate_age(recognized) {
                    ValidationOutcome::Accepted(age) => {
                        profile.age = Some(age);
                        let reply =
                            format!("I have your age as {}. {}", age, Slot::PickupDate.prompt());
                        (reply, FlowState::Asking(Slot::PickupDate))
                    }
                    ValidationOutcome::Rejected(message) => (message, FlowState::Asking(slot)),
                }
            }
            Slot::PickupDate => {
                let recognized = self
                    .dates
                    .recognize_datetime(input, self.config.locale)
                    .await;
                let now = Local::now().naive_local();
                match validators::validate_pickup_date(recognized, now) {
                    ValidationOutcome::Accepted(date) => {
                        profile.pickup_date = Some(date.clone());
                        let name = profile.name.as_deref().unwrap_or("there").to_string();
                        info!(
                            name = %name,
                            pickup = %date,
                            complete = profile.is_complete(),
                            "booking collected"
                        );
                        let reply = format!(
                            "Your ride to the airport is scheduled for {}. \
                             Thanks for completing the booking, {}. \
                             Type anything to start over.",
                            date, name
                        );
                        profile.reset();
                        (reply, FlowState::Idle)
                    }
                    ValidationOutcome::Rejected(message) => (message, FlowState::Asking(slot)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{
        InMemorySessionStore, ScriptedDateTimeRecognizer, ScriptedKnowledgeBase,
        ScriptedNumberRecognizer,
    };
    use crate::domain::booking::{validators, DateTimeCandidate, NumberCandidate};
    use crate::ports::RankedAnswer;
    use chrono::Duration;

    struct Rig {
        store: Arc<InMemorySessionStore>,
        handler: TurnHandler,
    }

    fn rig(
        numbers: ScriptedNumberRecognizer,
        dates: ScriptedDateTimeRecognizer,
        knowledge: ScriptedKnowledgeBase,
    ) -> Rig {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = TurnHandler::new(
            store.clone(),
            Arc::new(numbers),
            Arc::new(dates),
            Arc::new(knowledge),
            FlowConfig::default(),
        );
        Rig { store, handler }
    }

    fn quiet_rig() -> Rig {
        rig(
            ScriptedNumberRecognizer::new(),
            ScriptedDateTimeRecognizer::new(),
            ScriptedKnowledgeBase::new(),
        )
    }

    fn cmd(conversation: ConversationId, rider: RiderId, text: &str) -> HandleTurnCommand {
        HandleTurnCommand {
            conversation_id: conversation,
            rider_id: rider,
            text: text.to_string(),
        }
    }

    async fn seed_flow(rig: &Rig, conversation: ConversationId, state: FlowState) {
        rig.store.save_flow_state(conversation, state).await.unwrap();
    }

    #[tokio::test]
    async fn idle_turn_without_answers_sends_fallback_and_stays_idle() {
        let rig = quiet_rig();
        let conversation = ConversationId::new();

        let result = rig
            .handler
            .handle(cmd(conversation, RiderId::new(), "what is the meaning of life"))
            .await
            .unwrap();

        assert_eq!(result.reply, NO_ANSWER_REPLY);
        assert_eq!(result.flow_state, FlowState::Idle);
    }

    #[tokio::test]
    async fn idle_turn_echoes_top_answer_verbatim() {
        let knowledge = ScriptedKnowledgeBase::new().with_answers(vec![
            RankedAnswer::new("We operate around the clock.", 0.91),
            RankedAnswer::new("Call us any time.", 0.40),
        ]);
        let rig = rig(
            ScriptedNumberRecognizer::new(),
            ScriptedDateTimeRecognizer::new(),
            knowledge,
        );

        let result = rig
            .handler
            .handle(cmd(ConversationId::new(), RiderId::new(), "when are you open?"))
            .await
            .unwrap();

        assert_eq!(result.reply, "We operate around the clock.");
        assert_eq!(result.flow_state, FlowState::Idle);
    }

    #[tokio::test]
    async fn booking_trigger_starts_sequence_with_name_prompt() {
        let knowledge = ScriptedKnowledgeBase::new()
            .with_answers(vec![RankedAnswer::new("Booking", 0.97)]);
        let rig = rig(
            ScriptedNumberRecognizer::new(),
            ScriptedDateTimeRecognizer::new(),
            knowledge,
        );
        let conversation = ConversationId::new();

        let result = rig
            .handler
            .handle(cmd(conversation, RiderId::new(), "book me a ride"))
            .await
            .unwrap();

        assert_eq!(result.reply, Slot::Name.prompt());
        assert_eq!(result.flow_state, FlowState::Asking(Slot::Name));
        assert_eq!(
            rig.store.flow_state(conversation).await.unwrap(),
            FlowState::Asking(Slot::Name)
        );
    }

    #[tokio::test]
    async fn blank_name_is_reasked_without_state_change() {
        let rig = quiet_rig();
        let conversation = ConversationId::new();
        let rider = RiderId::new();
        seed_flow(&rig, conversation, FlowState::Asking(Slot::Name)).await;

        let result = rig.handler.handle(cmd(conversation, rider, "  ")).await.unwrap();

        assert_eq!(result.reply, validators::NAME_REQUIRED);
        assert_eq!(result.flow_state, FlowState::Asking(Slot::Name));
        assert_eq!(
            rig.store.rider_profile(rider).await.unwrap(),
            RiderProfile::default()
        );
    }

    #[tokio::test]
    async fn accepted_name_greets_and_asks_for_age() {
        let rig = quiet_rig();
        let conversation = ConversationId::new();
        let rider = RiderId::new();
        seed_flow(&rig, conversation, FlowState::Asking(Slot::Name)).await;

        let result = rig.handler.handle(cmd(conversation, rider, "Ana")).await.unwrap();

        assert!(result.reply.contains("Hi Ana."));
        assert!(result.reply.contains(Slot::Age.prompt()));
        assert_eq!(result.flow_state, FlowState::Asking(Slot::Age));
        assert_eq!(
            rig.store.rider_profile(rider).await.unwrap().name,
            Some("Ana".to_string())
        );
    }

    #[tokio::test]
    async fn out_of_range_age_is_reasked_without_profile_change() {
        let numbers = ScriptedNumberRecognizer::new()
            .with_candidates(vec![NumberCandidate::new("12", 12.0)]);
        let rig = rig(numbers, ScriptedDateTimeRecognizer::new(), ScriptedKnowledgeBase::new());
        let conversation = ConversationId::new();
        let rider = RiderId::new();
        seed_flow(&rig, conversation, FlowState::Asking(Slot::Age)).await;

        let result = rig.handler.handle(cmd(conversation, rider, "12")).await.unwrap();

        assert_eq!(result.reply, validators::AGE_OUT_OF_RANGE);
        assert_eq!(result.flow_state, FlowState::Asking(Slot::Age));
        assert_eq!(rig.store.rider_profile(rider).await.unwrap().age, None);
    }

    #[tokio::test]
    async fn accepted_age_advances_to_pickup_date() {
        let numbers = ScriptedNumberRecognizer::new()
            .with_candidates(vec![NumberCandidate::new("25", 25.0)]);
        let rig = rig(numbers, ScriptedDateTimeRecognizer::new(), ScriptedKnowledgeBase::new());
        let conversation = ConversationId::new();
        let rider = RiderId::new();
        seed_flow(&rig, conversation, FlowState::Asking(Slot::Age)).await;

        let result = rig.handler.handle(cmd(conversation, rider, "25")).await.unwrap();

        assert!(result.reply.contains("25"));
        assert!(result.reply.contains(Slot::PickupDate.prompt()));
        assert_eq!(result.flow_state, FlowState::Asking(Slot::PickupDate));
        assert_eq!(rig.store.rider_profile(rider).await.unwrap().age, Some(25));
    }

    #[tokio::test]
    async fn recognizer_failure_keeps_the_sequence_alive() {
        let numbers = ScriptedNumberRecognizer::new().with_failure("service down");
        let rig = rig(numbers, ScriptedDateTimeRecognizer::new(), ScriptedKnowledgeBase::new());
        let conversation = ConversationId::new();
        seed_flow(&rig, conversation, FlowState::Asking(Slot::Age)).await;

        let result = rig
            .handler
            .handle(cmd(conversation, RiderId::new(), "twenty-five"))
            .await
            .unwrap();

        assert_eq!(result.reply, validators::AGE_NOT_UNDERSTOOD);
        assert_eq!(result.flow_state, FlowState::Asking(Slot::Age));
    }

    #[tokio::test]
    async fn accepted_pickup_date_completes_booking_and_resets() {
        let soon = Local::now().naive_local() + Duration::hours(3);
        let dates = ScriptedDateTimeRecognizer::new().with_candidates(vec![
            DateTimeCandidate::point("in 3 hours", soon.format("%Y-%m-%d %H:%M:%S").to_string()),
        ]);
        let rig = rig(ScriptedNumberRecognizer::new(), dates, ScriptedKnowledgeBase::new());
        let conversation = ConversationId::new();
        let rider = RiderId::new();
        seed_flow(&rig, conversation, FlowState::Asking(Slot::PickupDate)).await;
        rig.store
            .save_rider_profile(
                rider,
                RiderProfile {
                    name: Some("Ana".to_string()),
                    age: Some(25),
                    pickup_date: None,
                },
            )
            .await
            .unwrap();

        let result = rig
            .handler
            .handle(cmd(conversation, rider, "in 3 hours"))
            .await
            .unwrap();

        let expected_date = soon.date().format("%-m/%-d/%Y").to_string();
        assert!(result.reply.contains(&expected_date));
        assert!(result.reply.contains("Ana"));
        assert_eq!(result.flow_state, FlowState::Idle);
        // Profile resets once the booking completes.
        assert_eq!(
            rig.store.rider_profile(rider).await.unwrap(),
            RiderProfile::default()
        );
    }

    #[tokio::test]
    async fn active_sequence_never_consults_the_knowledge_base() {
        let knowledge = ScriptedKnowledgeBase::new()
            .with_answers(vec![RankedAnswer::new("Booking", 0.99)]);
        let probe = knowledge.clone();
        let rig = rig(
            ScriptedNumberRecognizer::new(),
            ScriptedDateTimeRecognizer::new(),
            knowledge,
        );
        let conversation = ConversationId::new();
        seed_flow(&rig, conversation, FlowState::Asking(Slot::Name)).await;

        let result = rig
            .handler
            .handle(cmd(conversation, RiderId::new(), "what are your hours?"))
            .await
            .unwrap();

        // The question is treated as a name answer, not a lookup.
        assert_eq!(result.flow_state, FlowState::Asking(Slot::Age));
        assert!(probe.queries().is_empty());
    }

    #[tokio::test]
    async fn not_started_state_prompts_for_name() {
        let rig = quiet_rig();
        let conversation = ConversationId::new();
        seed_flow(&rig, conversation, FlowState::NotStarted).await;

        let result = rig
            .handler
            .handle(cmd(conversation, RiderId::new(), "hello"))
            .await
            .unwrap();

        assert_eq!(result.reply, Slot::Name.prompt());
        assert_eq!(result.flow_state, FlowState::Asking(Slot::Name));
    }

    #[tokio::test]
    async fn knowledge_base_failure_propagates_to_the_host() {
        let knowledge = ScriptedKnowledgeBase::new().with_failure("endpoint down");
        let rig = rig(
            ScriptedNumberRecognizer::new(),
            ScriptedDateTimeRecognizer::new(),
            knowledge,
        );

        let result = rig
            .handler
            .handle(cmd(ConversationId::new(), RiderId::new(), "anything"))
            .await;

        assert!(matches!(result, Err(HandleTurnError::KnowledgeBase(_))));
    }
}
