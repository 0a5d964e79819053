use super::state::AnalysisResult;
use super::state::ChatMessage;
use super::state::SessionState;
use super::state::UserRole;

/// The full action set of the session state machine. Every transition the
/// application can make goes through one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// Record which side of the dispute the user is on.
    SetUserRole(UserRole),
    /// An upload went in flight; clears any previous error.
    StartProcessing,
    /// The backend analyzed the document. Replaces any prior transcript
    /// with the welcome message, since the old conversation was grounded
    /// in a different document.
    AnalysisSuccess(AnalysisResult),
    /// Append one message to the transcript.
    AddChatMessage(ChatMessage),
    /// A recoverable failure; previous analysis and transcript survive.
    SetError(String),
    /// Atomic full reset to the initial defaults.
    ClearState,
    /// Wholesale replacement with a restored snapshot. Issued only by the
    /// persistence layer at startup.
    LoadState(SessionState),
}
