use std::path::Path;

use tokio_util::sync::CancellationToken;

use lexaid_core::actions::SessionAction;
use lexaid_core::state::UserRole;
use lexaid_core::store::SessionStore;

use super::api::BackendClient;
use super::error::ClientError;
use super::error::Result;

/// File types the analysis backend accepts.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg"];

/// Pre-flight check, before any network call or dispatch. A rejected file
/// surfaces to the initiator only; session state is untouched.
pub fn validate_upload(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(ClientError::Validation(
            "Please upload a PDF or image file (JPEG, PNG).".to_string(),
        )),
    }
}

/// Run one full upload: validate, dispatch `SetUserRole` + `StartProcessing`,
/// await the backend, then dispatch `AnalysisSuccess` or `SetError`. The
/// `Start -> (Success|Error)` pair is issued here in program order; nothing
/// serializes two concurrent uploads, the later resolution wins.
///
/// Cancelling the token abandons the in-flight request and records the
/// cancellation as an error transition.
pub async fn run_upload(
    store: &mut SessionStore,
    client: &BackendClient,
    path: &Path,
    role: UserRole,
    cancel: CancellationToken,
) -> Result<()> {
    validate_upload(path)?;
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| ClientError::Validation(format!("Could not read file: {err}")))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());

    store.dispatch(SessionAction::SetUserRole(role));
    store.dispatch(SessionAction::StartProcessing);

    let outcome = tokio::select! {
        _ = cancel.cancelled() => Err(ClientError::Cancelled),
        result = client.process_document(&file_name, bytes, role) => result,
    };

    match outcome {
        Ok(result) => {
            tracing::info!(document_type = %result.key_details.document_type, "analysis succeeded");
            store.dispatch(SessionAction::AnalysisSuccess(result));
            Ok(())
        }
        Err(err) => {
            tracing::warn!(error = %err, "upload did not complete");
            store.dispatch(SessionAction::SetError(err.user_message()));
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use tempfile::tempdir;
    use tokio_util::sync::CancellationToken;

    use super::run_upload;
    use super::validate_upload;
    use crate::api::BackendClient;
    use crate::error::ClientError;
    use lexaid_core::state::SessionPhase;
    use lexaid_core::state::SessionState;
    use lexaid_core::state::UserRole;
    use lexaid_core::store::SessionStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_the_backend_file_types() {
        for name in ["claim.pdf", "scan.PNG", "photo.jpeg", "page.jpg"] {
            assert!(validate_upload(Path::new(name)).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for name in ["notes.docx", "contract", "archive.tar.gz", "doc.pdf.exe"] {
            let err = validate_upload(Path::new(name)).expect_err(name);
            assert!(matches!(err, ClientError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn rejected_file_leaves_session_state_untouched() {
        let mut store = SessionStore::in_memory();
        let client = BackendClient::default();

        let err = run_upload(
            &mut store,
            &client,
            Path::new("notes.docx"),
            UserRole::Plaintiff,
            CancellationToken::new(),
        )
        .await
        .expect_err("validation should fail");

        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(*store.state(), SessionState::default());
    }

    #[tokio::test]
    async fn cancelled_upload_records_the_cancellation_message() {
        let dir = tempdir().expect("tmpdir");
        let path = dir.path().join("contract.pdf");
        let mut file = std::fs::File::create(&path).expect("create");
        file.write_all(b"%PDF-1.4").expect("write");

        let mut store = SessionStore::in_memory();
        let client = BackendClient::default();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = run_upload(&mut store, &client, &path, UserRole::Defendant, cancel)
            .await
            .expect_err("cancelled");

        assert!(matches!(err, ClientError::Cancelled));
        assert_eq!(
            store.state().error.as_deref(),
            Some("Upload cancelled by user.")
        );
        assert_eq!(store.state().user_role, Some(UserRole::Defendant));
        assert!(!store.state().is_loading);
        assert_eq!(store.state().phase(), SessionPhase::Failed);
    }
}
