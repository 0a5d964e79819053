pub(super) use super::reduce;
pub(super) use super::ANALYSIS_WELCOME;
pub(super) use crate::actions::SessionAction;
pub(super) use crate::state::AnalysisResult;
pub(super) use crate::state::ChatMessage;
pub(super) use crate::state::ChatRole;
pub(super) use crate::state::SessionPhase;
pub(super) use crate::state::SessionState;
pub(super) use crate::state::UserRole;

mod lifecycle;

fn state() -> SessionState {
    SessionState::default()
}

fn analysis(text: &str) -> AnalysisResult {
    AnalysisResult {
        scraped_text: text.to_string(),
        ..AnalysisResult::default()
    }
}

/// State after a role was chosen, an upload ran, and the analysis came back.
fn ready_state() -> SessionState {
    let mut state = state();
    reduce(&mut state, SessionAction::SetUserRole(UserRole::Plaintiff));
    reduce(&mut state, SessionAction::StartProcessing);
    reduce(
        &mut state,
        SessionAction::AnalysisSuccess(analysis("This agreement is made...")),
    );
    state
}
