//! Create / edit form screens.
//!
//! ```text
//!  Loading ──load ok──▶ Editing ──submit──▶ Submitting ──ok──▶ Done
//!     │                   ▲  │ invalid          │
//!     └─load failed─▶ Done│  └────────┘          └──failed──▶ Editing
//!
//! A standalone create form goes back to Editing with a fresh draft
//! instead of Done.
//! ```

use crate::api::{ApiClient, Resource, Transport};
use crate::core::draft::Draft;
use crate::core::lifetime::ViewLifetime;
use crate::core::notice::Notice;
use crate::device::{Camera, Capture, Locator, PermissionGate};
use crate::errors::{AppError, AppResult, Capability};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// Standalone creation: the form is cleared after a successful save.
    Create,
    /// Creation started from a parent record: go back after saving.
    CreateLinked { parent_id: String },
    Edit { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Loading,
    Editing,
    Submitting,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The view was dismissed before the operation finished.
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoOutcome {
    Updated,
    /// The user backed out of the camera.
    Canceled,
    /// The view was dismissed before the capture finished.
    Discarded,
}

pub struct FormController<'a, T: Transport, D: Draft> {
    api: &'a ApiClient<T>,
    mode: FormMode,
    state: FormState,
    draft: D,
    notice: Option<Notice>,
    navigation: Navigation,
    lifetime: ViewLifetime,
    camera: PermissionGate,
    location: PermissionGate,
}

impl<'a, T: Transport, D: Draft> FormController<'a, T, D> {
    fn with_mode(api: &'a ApiClient<T>, mode: FormMode, state: FormState) -> Self {
        Self {
            api,
            mode,
            state,
            draft: D::default(),
            notice: None,
            navigation: Navigation::Stay,
            lifetime: ViewLifetime::new(),
            camera: PermissionGate::new(Capability::Camera),
            location: PermissionGate::new(Capability::Location),
        }
    }

    pub fn create(api: &'a ApiClient<T>) -> Self {
        Self::with_mode(api, FormMode::Create, FormState::Editing)
    }

    pub fn create_linked(api: &'a ApiClient<T>, parent_id: &str) -> Self {
        let mut form = Self::with_mode(
            api,
            FormMode::CreateLinked {
                parent_id: parent_id.to_string(),
            },
            FormState::Editing,
        );
        form.draft.link(parent_id);
        form
    }

    pub fn edit(api: &'a ApiClient<T>, id: &str) -> Self {
        Self::with_mode(
            api,
            FormMode::Edit { id: id.to_string() },
            FormState::Loading,
        )
    }

    /// Fetch the record being edited. No-op for creation forms.
    pub fn load(&mut self) -> AppResult<Outcome> {
        let id = match (&self.mode, self.state) {
            (FormMode::Edit { id }, FormState::Loading) => id.clone(),
            _ => return Ok(Outcome::Completed),
        };

        let ticket = self.lifetime.ticket();
        let result = self.api.get::<D::Record>(&id);

        if !ticket.is_current() {
            debug!(id = %id, "edit load discarded, view dismissed");
            return Ok(Outcome::Discarded);
        }

        match result {
            Ok(record) => {
                self.draft = D::from_record(&record);
                self.state = FormState::Editing;
                Ok(Outcome::Completed)
            }
            Err(e) => {
                self.notice = Some(Notice::from_error(
                    &format!("load {}", <D::Record as Resource>::LABEL),
                    &e,
                ));
                self.state = FormState::Done;
                self.navigation = Navigation::Back;
                Err(e)
            }
        }
    }

    /// Validate locally, then create or update.
    ///
    /// Validation failures never reach the backend. On any failure the
    /// draft is left untouched and the form stays editable.
    pub fn submit(&mut self) -> AppResult<Outcome> {
        if self.state != FormState::Editing {
            return Err(AppError::Other(format!(
                "form is not editable (state: {:?})",
                self.state
            )));
        }

        let payload = match self.draft.to_payload() {
            Ok(p) => p,
            Err(e) => {
                self.notice = Some(Notice::from_error("save", &e));
                return Err(e);
            }
        };

        self.state = FormState::Submitting;
        let ticket = self.lifetime.ticket();
        let label = <D::Record as Resource>::LABEL;

        let (result, action) = match &self.mode {
            FormMode::Edit { id } => (
                self.api.update::<D::Record>(id, &payload),
                format!("update {label}"),
            ),
            FormMode::Create | FormMode::CreateLinked { .. } => (
                self.api.create::<D::Record>(&payload),
                format!("create {label}"),
            ),
        };

        if !ticket.is_current() {
            debug!(action = %action, "submit result discarded, view dismissed");
            return Ok(Outcome::Discarded);
        }

        match result {
            Ok(()) => {
                self.state = FormState::Done;
                match &self.mode {
                    FormMode::Create => {
                        // cleared and ready for the next entry
                        self.notice = Some(Notice::success(format!("{} created!", capitalize(label))));
                        self.draft = D::default();
                        self.state = FormState::Editing;
                        self.navigation = Navigation::Stay;
                    }
                    FormMode::CreateLinked { .. } => {
                        self.notice = Some(Notice::success(format!("{} created!", capitalize(label))));
                        self.navigation = Navigation::Back;
                    }
                    FormMode::Edit { .. } => {
                        self.notice = Some(Notice::success(format!("{} updated!", capitalize(label))));
                        self.navigation = Navigation::Back;
                    }
                }
                Ok(Outcome::Completed)
            }
            Err(e) => {
                self.state = FormState::Editing;
                self.notice = Some(Notice::from_error(&action, &e));
                Err(e)
            }
        }
    }

    /// Take a picture and store it in the draft as a data URI.
    /// A cancelled capture keeps the previous photo.
    pub fn capture_photo(&mut self, camera: &impl Camera) -> AppResult<PhotoOutcome> {
        if let Err(e) = self.camera.ensure(|| camera.request_permission()) {
            self.notice = Some(Notice::from_error("take photo", &e));
            return Err(e);
        }

        let ticket = self.lifetime.ticket();
        let capture = camera.capture();
        if !ticket.is_current() {
            debug!("photo discarded, view dismissed");
            return Ok(PhotoOutcome::Discarded);
        }

        match capture {
            Ok(Capture::Taken(image)) => {
                self.draft.set_photo(image.to_data_uri());
                Ok(PhotoOutcome::Updated)
            }
            Ok(Capture::Canceled) => Ok(PhotoOutcome::Canceled),
            Err(e) => {
                self.notice = Some(Notice::from_error("take photo", &e));
                Err(e)
            }
        }
    }

    /// Read the current position once and store it in the draft.
    pub fn capture_location(&mut self, locator: &impl Locator) -> AppResult<Outcome> {
        if let Err(e) = self.location.ensure(|| locator.request_permission()) {
            self.notice = Some(Notice::from_error("read location", &e));
            return Err(e);
        }

        let ticket = self.lifetime.ticket();
        let position = locator.current_position();
        if !ticket.is_current() {
            return Ok(Outcome::Discarded);
        }

        match position {
            Ok(point) => {
                self.draft.set_location(point);
                Ok(Outcome::Completed)
            }
            Err(e) => {
                self.notice = Some(Notice::from_error("read location", &e));
                Err(e)
            }
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn navigation(&self) -> Navigation {
        self.navigation
    }

    pub fn lifetime(&self) -> &ViewLifetime {
        &self.lifetime
    }

    pub fn camera_permission(&self) -> &PermissionGate {
        &self.camera
    }

    pub fn location_permission(&self) -> &PermissionGate {
        &self.location
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
