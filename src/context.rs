//! Application Context
//!
//! Navigation shell state provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_nav::{Nav, NavOptions, NavTransition};

use crate::models::Screen;
use crate::store::{store_reset_screen, AppStateStoreFields, AppStore};

/// App-wide navigation handle
#[derive(Clone, Copy)]
pub struct AppContext {
    nav: Nav<Screen>,
    store: AppStore,
    /// True while the incoming screen fades in - read
    pub entering: ReadSignal<bool>,
    /// True while the incoming screen fades in - write
    set_entering: WriteSignal<bool>,
    transition_ms: u32,
}

impl AppContext {
    pub fn new(
        nav: Nav<Screen>,
        store: AppStore,
        entering: (ReadSignal<bool>, WriteSignal<bool>),
        transition_ms: u32,
    ) -> Self {
        Self {
            nav,
            store,
            entering: entering.0,
            set_entering: entering.1,
            transition_ms,
        }
    }

    /// Current screen (tracked)
    pub fn current(&self) -> Screen {
        self.nav.current()
    }

    pub fn is_current(&self, screen: Screen) -> bool {
        self.nav.current() == screen
    }

    pub fn drawer_open(&self) -> bool {
        self.store.drawer_open().get()
    }

    pub fn open_drawer(&self) {
        self.store.drawer_open().set(true);
    }

    pub fn close_drawer(&self) {
        if self.store.drawer_open().get_untracked() {
            self.store.drawer_open().set(false);
        }
    }

    /// Go to `screen`, tab policy for bottom bar destinations
    pub fn navigate(&self, screen: Screen) {
        self.close_drawer();
        let transition = self.nav.navigate(screen, nav_options(screen));
        self.apply(&transition);
    }

    /// Navigate by route id; unknown ids go home
    pub fn navigate_route(&self, route: &str) {
        self.navigate(Screen::from_route(route));
    }

    /// Back press: closes the drawer first, then pops the stack
    pub fn back(&self) {
        if self.store.drawer_open().get_untracked() {
            self.close_drawer();
            return;
        }
        if let Some(transition) = self.nav.pop_back() {
            self.apply(&transition);
        }
    }

    fn apply(&self, transition: &NavTransition<Screen>) {
        for screen in &transition.discarded {
            if !self.nav.is_live(*screen) {
                store_reset_screen(&self.store, *screen);
            }
        }
        if transition.restored {
            log::debug!("[NAV] restored {}", transition.to);
        }
        if transition.changed() {
            log::info!("[NAV] {} -> {}", transition.from, transition.to);
            self.start_fade();
        }
    }

    fn start_fade(&self) {
        if self.transition_ms == 0 {
            return;
        }
        self.set_entering.set(true);
        let set_entering = self.set_entering;
        Timeout::new(self.transition_ms, move || set_entering.set(false)).forget();
    }
}

/// Bottom bar destinations switch like tabs, drawer ones push
pub fn nav_options(screen: Screen) -> NavOptions {
    if screen.is_bottom_bar() {
        NavOptions::tab()
    } else {
        NavOptions::push()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
