//! Per-status project list bound to store notifications.

use crate::model::project::{Project, ProjectStatus};
use crate::state::listeners::ListenerId;
use crate::state::project_state::ProjectState;
use crate::view::card::{render_card, RenderedCard};
use std::cell::RefCell;
use std::rc::Rc;

/// Render model for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedList {
    pub status: ProjectStatus,
    /// `<status>-projects-list`.
    pub list_id: String,
    /// `<STATUS> PROJECTS`.
    pub heading: String,
    pub items: Vec<RenderedCard>,
    /// Number of redraws since binding.
    pub renders: usize,
}

impl RenderedList {
    fn empty(status: ProjectStatus) -> Self {
        Self {
            status,
            list_id: list_element_id(status),
            heading: format!("{} PROJECTS", status.as_str().to_ascii_uppercase()),
            items: Vec::new(),
            renders: 0,
        }
    }

    fn redraw(&mut self, projects: &[Project]) {
        self.items = projects
            .iter()
            .filter(|project| project.status() == self.status)
            .map(render_card)
            .collect();
        self.renders += 1;
    }
}

/// Element id of the list holding cards of `status`.
pub fn list_element_id(status: ProjectStatus) -> String {
    format!("{}-projects-list", status.as_str())
}

/// Column view subscribed to a `ProjectState`.
#[derive(Debug)]
pub struct ProjectListView {
    listener_id: ListenerId,
    rendered: Rc<RefCell<RenderedList>>,
}

impl ProjectListView {
    /// Registers a listener on `state` that keeps this column in sync.
    ///
    /// Nothing is drawn until the first notification.
    pub fn bind(status: ProjectStatus, state: &mut ProjectState) -> Self {
        let rendered = Rc::new(RefCell::new(RenderedList::empty(status)));
        let sink = Rc::clone(&rendered);
        let listener_id = state.add_listener(move |projects| {
            sink.borrow_mut().redraw(&projects);
        });
        Self {
            listener_id,
            rendered,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.rendered.borrow().status
    }

    pub fn listener_id(&self) -> ListenerId {
        self.listener_id
    }

    /// Current render output.
    pub fn rendered(&self) -> RenderedList {
        self.rendered.borrow().clone()
    }

    /// Stops receiving notifications.
    pub fn unbind(self, state: &mut ProjectState) -> bool {
        state.remove_listener(self.listener_id)
    }
}
