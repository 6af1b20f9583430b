//! Upload Workflow
//!
//! Modal-driven photo upload state machine. Generic over the file handle
//! so the transitions stay testable off the browser; the app instantiates
//! it with `web_sys::File`.

use crate::geo::Coordinate;

/// Shown when submit is pressed before a map click seeded a location
pub const ERR_NO_LOCATION: &str = "撮影地点が取得できませんでした。もう一度お試しください。";
/// Shown when submit is pressed with no image chosen
pub const ERR_NO_FILE: &str = "アップロードする画像を選択してください。";
/// Fallback when the storage service reports no message of its own
pub const ERR_UPLOAD_FAILED: &str = "アップロードに失敗しました。時間をおいて再度お試しください。";

/// A successfully uploaded photo, as listed in the sidebar.
///
/// Append-only: entries are never mutated, reordered or truncated within a
/// session.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadedEntry {
    pub id: String,
    pub image_url: String,
    pub comment: String,
    pub location: Coordinate,
}

/// Everything the sink needs for one storage write
#[derive(Clone, Debug, PartialEq)]
pub struct UploadJob<F> {
    pub file: F,
    pub location: Coordinate,
    pub comment: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Idle,
    ModalOpen,
    Uploading,
}

/// Upload modal state machine.
///
/// `idle -> modal open -> uploading -> idle`; validation failures and
/// storage failures fall back to the open modal with the selection intact.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadForm<F> {
    stage: Stage,
    location: Option<Coordinate>,
    file: Option<F>,
    comment: String,
    error: Option<String>,
}

impl<F> Default for UploadForm<F> {
    fn default() -> Self {
        Self {
            stage: Stage::Idle,
            location: None,
            file: None,
            comment: String::new(),
            error: None,
        }
    }
}

impl<F: Clone> UploadForm<F> {
    pub fn is_open(&self) -> bool {
        self.stage != Stage::Idle
    }

    pub fn is_uploading(&self) -> bool {
        self.stage == Stage::Uploading
    }

    pub fn location(&self) -> Option<Coordinate> {
        self.location
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Map click: target the clicked spot and open the modal with a clean
    /// slate. The owning view resets its tally session alongside.
    pub fn open_at(&mut self, location: Coordinate) {
        self.stage = Stage::ModalOpen;
        self.location = Some(location);
        self.file = None;
        self.comment.clear();
        self.error = None;
    }

    /// Entry-list click: re-target the pending location without opening
    /// the modal, so the map re-centers there.
    pub fn focus_location(&mut self, location: Coordinate) {
        self.location = Some(location);
    }

    pub fn select_file(&mut self, file: F) {
        self.file = Some(file);
        self.error = None;
    }

    /// File dialog dismissed without a choice
    pub fn clear_file(&mut self) {
        self.file = None;
        self.error = None;
    }

    pub fn set_comment(&mut self, text: String) {
        self.comment = text;
        self.error = None;
    }

    /// Validate and move to the uploading stage.
    ///
    /// Returns the job to hand to the sink, or records an inline error and
    /// stays put. The file stays selected either way so a failed attempt
    /// can be retried without re-choosing.
    pub fn begin_submit(&mut self) -> Option<UploadJob<F>> {
        if self.stage != Stage::ModalOpen {
            return None;
        }

        let Some(location) = self.location else {
            self.error = Some(ERR_NO_LOCATION.to_string());
            return None;
        };
        let Some(file) = self.file.clone() else {
            self.error = Some(ERR_NO_FILE.to_string());
            return None;
        };

        self.stage = Stage::Uploading;
        self.error = None;
        Some(UploadJob {
            file,
            location,
            comment: self.comment.trim().to_string(),
        })
    }

    /// Storage write failed: back to the open modal, message shown verbatim
    pub fn fail(&mut self, message: String) {
        self.stage = Stage::ModalOpen;
        self.error = Some(message);
    }

    /// Storage write succeeded: clear the transient fields and close.
    /// The pending location survives; it keeps driving map centering.
    pub fn succeed(&mut self) {
        self.stage = Stage::Idle;
        self.file = None;
        self.comment.clear();
        self.error = None;
    }

    /// Close without uploading. Ignored mid-upload (the cancel control is
    /// disabled then as well).
    pub fn cancel(&mut self) {
        if self.stage == Stage::Uploading {
            return;
        }
        self.stage = Stage::Idle;
        self.file = None;
        self.comment.clear();
        self.error = None;
    }
}

/// Browser-generated unique id for entries and storage object names
pub fn random_id() -> String {
    web_sys::window()
        .and_then(|window| window.crypto().ok())
        .map(|crypto| crypto.random_uuid())
        .unwrap_or_else(|| format!("entry-{:016x}", (js_sys::Math::random() * 1e16) as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot() -> Coordinate {
        Coordinate::new(34.7075, 137.7345)
    }

    #[test]
    fn test_map_click_opens_with_clean_slate() {
        let mut form: UploadForm<&str> = UploadForm::default();
        form.open_at(spot());
        form.select_file("old.jpg");
        form.set_comment("memo".to_string());
        form.fail("boom".to_string());

        form.open_at(spot());
        assert!(form.is_open());
        assert!(!form.has_file());
        assert_eq!(form.comment(), "");
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_submit_without_file_reports_and_keeps_location() {
        let mut form: UploadForm<&str> = UploadForm::default();
        form.open_at(spot());

        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.error(), Some(ERR_NO_FILE));
        assert!(form.is_open());
        assert!(!form.is_uploading());
        assert_eq!(form.location(), Some(spot()));
    }

    #[test]
    fn test_submit_without_location_reports_first() {
        let mut form: UploadForm<&str> = UploadForm::default();
        form.open_at(spot());
        form.location = None;
        form.select_file("photo.jpg");

        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.error(), Some(ERR_NO_LOCATION));
        assert!(form.is_open());
    }

    #[test]
    fn test_submit_trims_comment_and_enters_uploading() {
        let mut form: UploadForm<&str> = UploadForm::default();
        form.open_at(spot());
        form.select_file("photo.jpg");
        form.set_comment("  屋台の行列がすごい  ".to_string());

        let job = form.begin_submit().expect("job");
        assert_eq!(job.comment, "屋台の行列がすごい");
        assert_eq!(job.location, spot());
        assert!(form.is_uploading());

        // Mid-upload, neither submit nor cancel may act
        assert_eq!(form.begin_submit(), None);
        form.cancel();
        assert!(form.is_uploading());
    }

    #[test]
    fn test_failure_keeps_file_for_retry() {
        let mut form: UploadForm<&str> = UploadForm::default();
        form.open_at(spot());
        form.select_file("photo.jpg");
        form.begin_submit().expect("job");

        form.fail("bucket is full".to_string());
        assert!(form.is_open());
        assert!(!form.is_uploading());
        assert_eq!(form.error(), Some("bucket is full"));
        assert!(form.has_file());

        // Retry goes straight back to uploading
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_editing_clears_error() {
        let mut form: UploadForm<&str> = UploadForm::default();
        form.open_at(spot());
        assert_eq!(form.begin_submit(), None);
        assert!(form.error().is_some());

        form.select_file("photo.jpg");
        assert_eq!(form.error(), None);

        form.fail("boom".to_string());
        form.set_comment("x".to_string());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_success_clears_fields_and_closes_keeping_location() {
        let mut form: UploadForm<&str> = UploadForm::default();
        form.open_at(spot());
        form.select_file("photo.jpg");
        form.set_comment("memo".to_string());
        form.begin_submit().expect("job");

        form.succeed();
        assert!(!form.is_open());
        assert!(!form.has_file());
        assert_eq!(form.comment(), "");
        assert_eq!(form.location(), Some(spot()));
    }

    #[test]
    fn test_cancel_resets_transient_fields() {
        let mut form: UploadForm<&str> = UploadForm::default();
        form.open_at(spot());
        form.select_file("photo.jpg");
        form.set_comment("memo".to_string());

        form.cancel();
        assert!(!form.is_open());
        assert!(!form.has_file());
        assert_eq!(form.comment(), "");
        assert_eq!(form.location(), Some(spot()));
    }
}
