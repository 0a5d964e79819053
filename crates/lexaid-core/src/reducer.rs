use super::actions::SessionAction;
use super::state::ChatMessage;
use super::state::SessionState;

/// First message of every fresh transcript, seeded alongside a successful
/// analysis.
pub const ANALYSIS_WELCOME: &str =
    "Hello! I've analyzed your document. How can I help you?";

/// Pure state-transition function. Total over the action set: every action
/// is applicable in every state, and each field transition is explicit, so
/// no action can leave the state partially initialized. Phase preconditions
/// (for example, chat only after an analysis) are caller discipline, not
/// enforced here.
pub fn reduce(state: &mut SessionState, action: SessionAction) {
    match action {
        SessionAction::SetUserRole(role) => {
            state.user_role = Some(role);
        }
        SessionAction::StartProcessing => {
            state.is_loading = true;
            state.error = None;
        }
        SessionAction::AnalysisSuccess(result) => {
            state.is_loading = false;
            state.analysis_result = Some(result);
            state.chat_history = vec![ChatMessage::model(ANALYSIS_WELCOME)];
        }
        SessionAction::AddChatMessage(message) => {
            state.chat_history.push(message);
        }
        SessionAction::SetError(message) => {
            state.is_loading = false;
            state.error = Some(message);
        }
        SessionAction::ClearState => {
            *state = SessionState::default();
        }
        SessionAction::LoadState(snapshot) => {
            *state = snapshot;
        }
    }
}

#[cfg(test)]
mod tests;
