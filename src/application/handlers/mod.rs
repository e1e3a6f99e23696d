//! Application handlers.

mod handle_turn;

pub use handle_turn::{
    HandleTurnCommand, HandleTurnError, HandleTurnResult, TurnHandler, NO_ANSWER_REPLY,
};
