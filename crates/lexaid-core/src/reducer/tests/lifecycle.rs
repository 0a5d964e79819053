use super::*;
use pretty_assertions::assert_eq;

#[test]
fn role_then_start_enters_uploading() {
    let mut state = state();

    reduce(&mut state, SessionAction::SetUserRole(UserRole::Plaintiff));
    assert_eq!(state.phase(), SessionPhase::RoleSelected);

    reduce(&mut state, SessionAction::StartProcessing);
    assert_eq!(state.user_role, Some(UserRole::Plaintiff));
    assert!(state.is_loading);
    assert_eq!(state.error, None);
    assert_eq!(state.phase(), SessionPhase::Uploading);
}

#[test]
fn start_processing_clears_previous_error() {
    let mut state = state();
    reduce(&mut state, SessionAction::SetError("network down".to_string()));
    assert_eq!(state.phase(), SessionPhase::Failed);

    reduce(&mut state, SessionAction::StartProcessing);
    assert_eq!(state.error, None);
    assert!(state.is_loading);
}

#[test]
fn success_lands_in_ready_with_seeded_transcript() {
    let mut state = state();
    reduce(&mut state, SessionAction::SetUserRole(UserRole::Plaintiff));
    reduce(&mut state, SessionAction::StartProcessing);
    reduce(
        &mut state,
        SessionAction::AnalysisSuccess(analysis("scraped")),
    );

    assert!(!state.is_loading);
    assert_eq!(state.phase(), SessionPhase::Ready);
    assert_eq!(state.chat_history.len(), 1);
    assert_eq!(state.chat_history[0].role, ChatRole::Model);
    assert_eq!(state.chat_history[0].text, ANALYSIS_WELCOME);
}

#[test]
fn chat_messages_append_in_order() {
    let mut state = ready_state();

    reduce(
        &mut state,
        SessionAction::AddChatMessage(ChatMessage::user("Hi")),
    );
    reduce(
        &mut state,
        SessionAction::AddChatMessage(ChatMessage::user("Hi")),
    );

    assert_eq!(state.chat_history.len(), 3);
    assert_eq!(state.chat_history[0].role, ChatRole::Model);
    assert_eq!(state.chat_history[1], ChatMessage::user("Hi"));
    assert_eq!(state.chat_history[2], ChatMessage::user("Hi"));
}

#[test]
fn error_after_success_keeps_the_session() {
    let mut state = ready_state();
    let result_before = state.analysis_result.clone();

    reduce(&mut state, SessionAction::SetError("network down".to_string()));

    assert_eq!(state.error.as_deref(), Some("network down"));
    assert!(!state.is_loading);
    assert_eq!(state.analysis_result, result_before);
    // A present result wins over a present error in the derived phase.
    assert_eq!(state.phase(), SessionPhase::Ready);
}

#[test]
fn clear_state_matches_initial_defaults() {
    let mut state = ready_state();
    reduce(
        &mut state,
        SessionAction::AddChatMessage(ChatMessage::user("Hi")),
    );
    reduce(&mut state, SessionAction::ClearState);

    assert_eq!(state, SessionState::default());
    assert_eq!(state.phase(), SessionPhase::Idle);
}

#[test]
fn load_state_replaces_everything() {
    let mut state = state();
    reduce(&mut state, SessionAction::SetUserRole(UserRole::Defendant));

    let snapshot = ready_state();
    reduce(&mut state, SessionAction::LoadState(snapshot.clone()));
    assert_eq!(state, snapshot);
}
