use serde::Deserialize;
use serde::Serialize;

/// Side of the dispute the user is on. Chosen once per session, before
/// the document is uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Plaintiff,
    Defendant,
}

impl UserRole {
    pub fn label(self) -> &'static str {
        match self {
            Self::Plaintiff => "Plaintiff",
            Self::Defendant => "Defendant",
        }
    }

    /// Lowercased value expected by the analysis backend form field.
    pub fn form_value(self) -> &'static str {
        match self {
            Self::Plaintiff => "plaintiff",
            Self::Defendant => "defendant",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "plaintiff" => Some(Self::Plaintiff),
            "defendant" => Some(Self::Defendant),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KeyTerm {
    pub term: String,
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KeyDetails {
    pub confidence_score: String,
    pub document_type: String,
    pub parties_involved: Vec<String>,
    pub effective_period: String,
    pub clauses_involved: Vec<String>,
    pub key_terms: Vec<KeyTerm>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClauseAnalysis {
    pub clause: String,
    pub meaning: String,
    pub citation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisReport {
    pub summary: String,
    pub clauses_analysis: Vec<ClauseAnalysis>,
    pub references: Vec<String>,
}

/// Payload returned by the analysis backend for one document. Treated as an
/// opaque value object once received; `scraped_text` is the ground truth the
/// chat assistant is grounded in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisResult {
    pub scraped_text: String,
    pub key_details: KeyDetails,
    pub analysis: AnalysisReport,
    pub actionable_checklist: Vec<String>,
}

/// Phase of the session induced by field combinations. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    RoleSelected,
    Uploading,
    Ready,
    Failed,
}

impl SessionPhase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::RoleSelected => "Role selected",
            Self::Uploading => "Uploading",
            Self::Ready => "Ready",
            Self::Failed => "Failed",
        }
    }
}

/// The single shared state of one document-analysis session. Mutated only
/// through the reducer; the chat history is a strict append log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionState {
    pub user_role: Option<UserRole>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub analysis_result: Option<AnalysisResult>,
    pub chat_history: Vec<ChatMessage>,
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        if self.is_loading {
            return SessionPhase::Uploading;
        }
        if self.analysis_result.is_some() {
            return SessionPhase::Ready;
        }
        if self.error.is_some() {
            return SessionPhase::Failed;
        }
        if self.user_role.is_some() {
            return SessionPhase::RoleSelected;
        }
        SessionPhase::Idle
    }
}
