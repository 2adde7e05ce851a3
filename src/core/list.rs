//! List screen: fetch the whole collection once on mount.

use crate::api::{ApiClient, Resource, Transport};
use crate::core::lifetime::ViewLifetime;
use crate::core::notice::Notice;
use crate::errors::AppResult;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Loaded,
    Empty,
    Error,
}

pub struct ListController<'a, T: Transport, R: Resource> {
    api: &'a ApiClient<T>,
    state: ListState,
    items: Vec<R>,
    notice: Option<Notice>,
    lifetime: ViewLifetime,
}

impl<'a, T: Transport, R: Resource> ListController<'a, T, R> {
    pub fn new(api: &'a ApiClient<T>) -> Self {
        Self {
            api,
            state: ListState::Loading,
            items: Vec::new(),
            notice: None,
            lifetime: ViewLifetime::new(),
        }
    }

    pub fn load(&mut self) -> AppResult<ListState> {
        let ticket = self.lifetime.ticket();
        let result = self.api.list::<R>();

        if !ticket.is_current() {
            debug!(collection = R::COLLECTION, "list result discarded, view dismissed");
            return Ok(self.state);
        }

        match result {
            Ok(items) => {
                self.state = if items.is_empty() {
                    ListState::Empty
                } else {
                    ListState::Loaded
                };
                self.items = items;
                Ok(self.state)
            }
            Err(e) => {
                self.state = ListState::Error;
                self.notice = Some(Notice::from_error(&format!("load {}s", R::LABEL), &e));
                Err(e)
            }
        }
    }

    pub fn state(&self) -> ListState {
        self.state
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn lifetime(&self) -> &ViewLifetime {
        &self.lifetime
    }
}
