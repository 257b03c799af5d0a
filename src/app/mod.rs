//! Application state and logic for the TUI.
//!
//! [`App`] owns the current [`Screen`], the request scope its loads run
//! under, and the banner and confirm dialog drawn over it. Spawned tasks
//! report back through [`AppMessage`]s on an unbounded channel; the UI
//! loop feeds them to [`App::handle_message`].

mod actions;
mod handlers;
mod keys;
pub mod loaders;
mod messages;
mod scope;
pub mod views;

pub use handlers::SESSION_EXPIRED;
pub use messages::{AppMessage, Loaded, Outcome};
pub use scope::RequestScope;
pub use views::{
    Alert, AlertKind, Confirm, ListView, PendingAction, Screen, ScreenStatus, View,
};

use chrono::{Local, NaiveDate};
use tokio::sync::mpsc;
use tracing::debug;

use crate::input::CommandRegistry;
use crate::routes::{self, MenuItem, Route};
use crate::services::Services;
use crate::session::{Capabilities, SessionContext};

/// Main application state
pub struct App {
    pub services: Services,
    pub session: SessionContext,
    pub screen: Screen,
    pub scope: RequestScope,
    pub alert: Option<Alert>,
    pub confirm: Option<Confirm>,
    pub registry: CommandRegistry,
    pub should_quit: bool,
    /// Set whenever visible state changes; cleared after a draw.
    pub needs_redraw: bool,
    pub tick_count: u64,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// An app on the login screen. Call [`App::start`] once the session
    /// has been initialised.
    pub fn new(services: Services, session: SessionContext) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            services,
            session,
            screen: Screen {
                route: Route::Login,
                status: ScreenStatus::Ready,
                view: View::for_route(Route::Login, false, today()),
            },
            scope: RequestScope::new(),
            alert: None,
            confirm: None,
            registry: CommandRegistry::new(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Show the home screen for the restored session, or the login screen.
    pub fn start(&mut self) {
        self.navigate(Route::Login);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.screen.status == ScreenStatus::Loading {
            self.mark_dirty();
        }
    }

    /// Capabilities of the live session; none when signed out.
    pub fn capabilities(&self) -> Capabilities {
        self.session.capabilities()
    }

    pub fn menu(&self) -> Vec<MenuItem> {
        match self.session.session() {
            Some(session) => routes::menu_items(&session.capabilities),
            None => Vec::new(),
        }
    }

    /// Index of the menu entry the current screen belongs to.
    pub fn active_menu_index(&self) -> Option<usize> {
        let route = self.screen.route;
        let section = route.parent().unwrap_or(route);
        self.menu().iter().position(|item| item.route == section)
    }

    /// Resolve `requested` through the guard and start its load.
    ///
    /// Loads from the previous screen are aborted and their results, if
    /// any still arrive, are dropped.
    pub fn navigate(&mut self, requested: Route) {
        let session = self.session.session();
        let route = routes::resolve(requested, session.as_ref().map(|s| &s.capabilities));
        if route != requested {
            debug!("Route {:?} resolved to {:?}", requested, route);
        }

        let generation = self.scope.reset();
        let for_others = session
            .as_ref()
            .is_some_and(|s| s.capabilities.apply_leave_for_others);
        self.alert = None;
        self.confirm = None;
        self.screen = Screen {
            route,
            status: ScreenStatus::Ready,
            view: View::for_route(route, for_others, today()),
        };
        self.mark_dirty();

        let Some(session) = session else {
            return;
        };
        if loaders::has_data(route) {
            self.screen.status = ScreenStatus::Loading;
            let services = self.services.clone();
            let tx = self.message_tx.clone();
            self.scope.spawn(async move {
                let message = match loaders::load(route, &services, &session).await {
                    Ok(Some(data)) => AppMessage::Loaded {
                        generation,
                        data: Box::new(data),
                    },
                    Ok(None) => return,
                    Err(error) => AppMessage::LoadFailed { generation, error },
                };
                let _ = tx.send(message);
            });
        }
        if matches!(route, Route::Dashboard | Route::EmployeeDashboard) {
            let welcome = self.services.welcome.clone();
            let tx = self.message_tx.clone();
            self.scope.spawn(async move {
                let text = welcome.welcome_message().await;
                let _ = tx.send(AppMessage::Welcome { generation, text });
            });
        }
    }

    /// Re-run the current screen's load.
    pub fn reload(&mut self) {
        self.navigate(self.screen.route);
    }

    /// Leave the current screen for its parent, if it has one.
    pub fn back(&mut self) {
        if let Some(parent) = self.screen.route.parent() {
            self.navigate(parent);
        }
    }
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
