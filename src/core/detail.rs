//! Work-site detail screen: the site, its inspections, deletion and the
//! "send report by e-mail" dialog.

use crate::api::{ApiClient, Transport};
use crate::core::draft::is_blank;
use crate::core::lifetime::ViewLifetime;
use crate::core::notice::Notice;
use crate::errors::{AppError, AppResult};
use crate::models::{Inspection, WorkSite};
use std::sync::mpsc;
use std::thread;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Loaded,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailNavigation {
    Stay,
    /// The site is gone; return to the list.
    ToList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
    Discarded,
}

/// Two-choice prompt shown before an irreversible action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: String,
    pub message: String,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
}

enum Fetched {
    Site(AppResult<WorkSite>),
    Inspections(AppResult<Vec<Inspection>>),
}

pub struct DetailController<'a, T: Transport> {
    api: &'a ApiClient<T>,
    site_id: String,
    state: DetailState,
    site: Option<WorkSite>,
    inspections: Vec<Inspection>,
    notice: Option<Notice>,
    navigation: DetailNavigation,
    lifetime: ViewLifetime,
    email: String,
    sending: bool,
}

impl<'a, T: Transport> DetailController<'a, T> {
    pub fn new(api: &'a ApiClient<T>, site_id: &str) -> Self {
        Self {
            api,
            site_id: site_id.to_string(),
            state: DetailState::Loading,
            site: None,
            inspections: Vec::new(),
            notice: None,
            navigation: DetailNavigation::Stay,
            lifetime: ViewLifetime::new(),
            email: String::new(),
            sending: false,
        }
    }

    /// Fetch the site and its inspections in parallel.
    ///
    /// Results are applied in completion order. A failed inspections fetch
    /// leaves an empty list; only the site fetch decides Loaded vs Error.
    pub fn load(&mut self) -> AppResult<DetailState> {
        self.state = DetailState::Loading;
        let ticket = self.lifetime.ticket();
        let api = self.api;
        let id = self.site_id.as_str();
        let (tx, rx) = mpsc::channel();

        let mut site_error = None;

        thread::scope(|s| {
            let site_tx = tx.clone();
            s.spawn(move || {
                let _ = site_tx.send(Fetched::Site(api.get::<WorkSite>(id)));
            });
            s.spawn(move || {
                let _ = tx.send(Fetched::Inspections(api.site_inspections(id)));
            });

            for fetched in rx.iter() {
                if !ticket.is_current() {
                    debug!(site = %id, "detail result discarded, view dismissed");
                    continue;
                }
                match fetched {
                    Fetched::Site(Ok(site)) => {
                        self.site = Some(site);
                        self.state = DetailState::Loaded;
                    }
                    Fetched::Site(Err(e)) => {
                        self.notice = Some(Notice::from_error("load work site", &e));
                        self.state = DetailState::Error;
                        site_error = Some(e);
                    }
                    Fetched::Inspections(Ok(list)) => self.inspections = list,
                    Fetched::Inspections(Err(e)) => {
                        debug!(site = %id, error = %e, "inspections unavailable, showing none");
                        self.inspections.clear();
                    }
                }
            }
        });

        match site_error {
            Some(e) => Err(e),
            None => Ok(self.state),
        }
    }

    pub fn delete_confirmation(&self) -> Confirmation {
        Confirmation {
            title: "Confirm deletion".to_string(),
            message: "Delete this work site and all of its inspections? This action is irreversible."
                .to_string(),
            confirm_label: "Delete",
            cancel_label: "Cancel",
        }
    }

    /// Ask first; issue the DELETE only on explicit confirmation.
    pub fn delete(&mut self, confirm: impl FnOnce(&Confirmation) -> bool) -> AppResult<DeleteOutcome> {
        if !confirm(&self.delete_confirmation()) {
            return Ok(DeleteOutcome::Declined);
        }

        let ticket = self.lifetime.ticket();
        let result = self.api.delete::<WorkSite>(&self.site_id);
        if !ticket.is_current() {
            return Ok(DeleteOutcome::Discarded);
        }

        match result {
            Ok(()) => {
                self.notice = Some(Notice::success("Work site deleted!"));
                self.navigation = DetailNavigation::ToList;
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) => {
                self.notice = Some(Notice::from_error("delete work site", &e));
                Err(e)
            }
        }
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    /// Ask the backend to mail the site report to the typed address.
    pub fn send_report(&mut self) -> AppResult<()> {
        if is_blank(&self.email) {
            let e = AppError::Validation(vec!["e-mail"]);
            self.notice = Some(Notice::from_error("send e-mail", &e));
            return Err(e);
        }

        self.sending = true;
        let ticket = self.lifetime.ticket();
        let result = self.api.send_report(&self.site_id, self.email.trim());
        if !ticket.is_current() {
            return Ok(());
        }
        self.sending = false;

        match result {
            Ok(()) => {
                self.notice = Some(Notice::success("E-mail sent!"));
                self.email.clear();
                Ok(())
            }
            Err(e) => {
                self.notice = Some(Notice::from_error("send e-mail", &e));
                Err(e)
            }
        }
    }

    pub fn state(&self) -> DetailState {
        self.state
    }

    pub fn site(&self) -> Option<&WorkSite> {
        self.site.as_ref()
    }

    pub fn inspections(&self) -> &[Inspection] {
        &self.inspections
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn navigation(&self) -> DetailNavigation {
        self.navigation
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn lifetime(&self) -> &ViewLifetime {
        &self.lifetime
    }
}
