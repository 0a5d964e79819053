use lexaid_core::actions::SessionAction;
use lexaid_core::state::ChatMessage;
use lexaid_core::store::SessionStore;

use super::api::BackendClient;
use super::error::ClientError;
use super::error::Result;

/// Appended as the assistant's turn when the chat round-trip fails. Chat
/// failures degrade into the transcript instead of becoming session errors,
/// so a flaky question never tears down a successful analysis.
pub const CHAT_FAILURE_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Role sent to the chat backend when none was chosen this session.
const FALLBACK_CHAT_ROLE: &str = "user";

/// Run one chat round-trip: append the user's question, ask the backend
/// with the analyzed document text as context, append the reply. Returns
/// the text that ended up in the transcript.
pub async fn run_chat(
    store: &mut SessionStore,
    client: &BackendClient,
    question: &str,
) -> Result<String> {
    let question = question.trim();
    if question.is_empty() {
        return Err(ClientError::Validation(
            "Question must not be empty.".to_string(),
        ));
    }
    let Some(context) = store
        .state()
        .analysis_result
        .as_ref()
        .map(|result| result.scraped_text.clone())
    else {
        return Err(ClientError::Validation(
            "No analyzed document in this session. Upload one first.".to_string(),
        ));
    };
    let role = store
        .state()
        .user_role
        .map(|role| role.label().to_string())
        .unwrap_or_else(|| FALLBACK_CHAT_ROLE.to_string());

    store.dispatch(SessionAction::AddChatMessage(ChatMessage::user(question)));

    let reply = match client.chat(question, &context, &role).await {
        Ok(reply) => reply,
        Err(err) => {
            tracing::warn!(error = %err, "chat round-trip failed");
            CHAT_FAILURE_REPLY.to_string()
        }
    };
    store.dispatch(SessionAction::AddChatMessage(ChatMessage::model(&reply)));
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::run_chat;
    use super::CHAT_FAILURE_REPLY;
    use crate::api::BackendClient;
    use crate::error::ClientError;
    use lexaid_core::actions::SessionAction;
    use lexaid_core::state::AnalysisResult;
    use lexaid_core::state::ChatRole;
    use lexaid_core::store::SessionStore;
    use pretty_assertions::assert_eq;

    fn ready_store() -> SessionStore {
        let mut store = SessionStore::in_memory();
        store.dispatch(SessionAction::AnalysisSuccess(AnalysisResult {
            scraped_text: "This agreement is made...".to_string(),
            ..AnalysisResult::default()
        }));
        store
    }

    #[tokio::test]
    async fn empty_question_is_rejected_without_dispatch() {
        let mut store = ready_store();
        let len_before = store.state().chat_history.len();

        let err = run_chat(&mut store, &BackendClient::default(), "   ")
            .await
            .expect_err("empty question");

        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(store.state().chat_history.len(), len_before);
    }

    #[tokio::test]
    async fn chat_requires_an_analyzed_document() {
        let mut store = SessionStore::in_memory();

        let err = run_chat(&mut store, &BackendClient::default(), "What now?")
            .await
            .expect_err("no analysis");

        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(store.state().chat_history.len(), 0);
    }

    #[tokio::test]
    async fn unreachable_backend_degrades_into_the_transcript() {
        // Port 9 is the discard service; nothing is listening there.
        let client = BackendClient::new("http://127.0.0.1:9");
        let mut store = ready_store();

        let reply = run_chat(&mut store, &client, "What are my rights?")
            .await
            .expect("chat degrades, not fails");

        assert_eq!(reply, CHAT_FAILURE_REPLY);
        let history = &store.state().chat_history;
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].role, ChatRole::User);
        assert_eq!(history[1].text, "What are my rights?");
        assert_eq!(history[2].role, ChatRole::Model);
        assert_eq!(history[2].text, CHAT_FAILURE_REPLY);
        assert!(store.state().error.is_none());
    }
}
