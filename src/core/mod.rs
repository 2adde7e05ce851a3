//! Screen controllers: list, create/edit form, detail.
//! Each one owns its local state and talks to the backend only through
//! the shared `ApiClient`.

pub mod config;
pub mod detail;
pub mod draft;
pub mod form;
pub mod inspection_draft;
pub mod lifetime;
pub mod list;
pub mod notice;
pub mod site_draft;

pub use detail::{Confirmation, DeleteOutcome, DetailController, DetailNavigation, DetailState};
pub use draft::Draft;
pub use form::{FormController, FormMode, FormState, Navigation, Outcome, PhotoOutcome};
pub use inspection_draft::{InspectionDraft, SiteOption, SitePicker};
pub use lifetime::{Ticket, ViewLifetime};
pub use list::{ListController, ListState};
pub use notice::{Notice, NoticeKind};
pub use site_draft::WorkSiteDraft;
