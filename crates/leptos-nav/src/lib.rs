//! Leptos Navigation Utilities
//!
//! Back stack navigation for single-window Leptos apps.
//! Tab destinations pop back to the start destination, save the popped
//! entries' state and restore it when reselected.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use leptos::prelude::*;

/// Anything usable as a navigation destination
pub trait Destination: Copy + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> Destination for T where T: Copy + Eq + Hash + Debug + Send + Sync + 'static {}

/// How a single `navigate` call treats the back stack
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavOptions {
    /// Pop every entry above the start destination before pushing
    pub pop_up_to_start: bool,
    /// Keep the state of entries popped by `pop_up_to_start`
    pub save_state: bool,
    /// Don't push when the destination is already on top
    pub launch_single_top: bool,
    /// Restore previously saved state of the destination
    pub restore_state: bool,
}

impl NavOptions {
    /// Plain push
    pub fn push() -> Self {
        Self::default()
    }

    /// Bottom bar / tab policy
    pub fn tab() -> Self {
        Self {
            pop_up_to_start: true,
            save_state: true,
            launch_single_top: true,
            restore_state: true,
        }
    }
}

/// Result of a back stack change
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavTransition<R> {
    pub from: R,
    pub to: R,
    /// Popped entries whose state is gone
    pub discarded: Vec<R>,
    /// Destination state came back from the saved set
    pub restored: bool,
}

impl<R: Destination> NavTransition<R> {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Pure back stack state
#[derive(Clone, Debug)]
pub struct NavController<R> {
    start: R,
    back_stack: Vec<R>,
    saved: HashSet<R>,
}

impl<R: Destination> NavController<R> {
    pub fn new(start: R) -> Self {
        Self {
            start,
            back_stack: vec![start],
            saved: HashSet::new(),
        }
    }

    pub fn current(&self) -> R {
        // The start entry is never popped
        *self.back_stack.last().unwrap_or(&self.start)
    }

    pub fn back_stack(&self) -> &[R] {
        &self.back_stack
    }

    pub fn has_saved_state(&self, route: R) -> bool {
        self.saved.contains(&route)
    }

    /// Destination still owns state (on the stack or saved)
    pub fn is_live(&self, route: R) -> bool {
        self.back_stack.contains(&route) || self.saved.contains(&route)
    }

    pub fn navigate(&mut self, route: R, opts: NavOptions) -> NavTransition<R> {
        let from = self.current();
        let mut discarded = Vec::new();

        if opts.pop_up_to_start {
            while self.back_stack.len() > 1 {
                let Some(popped) = self.back_stack.pop() else { break };
                if opts.save_state {
                    self.saved.insert(popped);
                } else {
                    discarded.push(popped);
                }
            }
        }

        let on_top = self.current() == route;
        if !(opts.launch_single_top && on_top) {
            self.back_stack.push(route);
        }

        let restored = opts.restore_state && self.saved.remove(&route);

        // Discarded entries still on the stack keep their state
        discarded.retain(|r| !self.back_stack.contains(r));

        log::debug!("[NAV] {:?} -> {:?} stack={:?}", from, route, self.back_stack);

        NavTransition {
            from,
            to: route,
            discarded,
            restored,
        }
    }

    /// Pop the top entry; `None` when only the start destination is left
    pub fn pop_back(&mut self) -> Option<NavTransition<R>> {
        if self.back_stack.len() <= 1 {
            return None;
        }
        let popped = self.back_stack.pop()?;
        let discarded = if self.back_stack.contains(&popped) {
            Vec::new()
        } else {
            vec![popped]
        };
        Some(NavTransition {
            from: popped,
            to: self.current(),
            discarded,
            restored: false,
        })
    }
}

/// Reactive wrapper around `NavController`
pub struct Nav<R: Destination> {
    controller: RwSignal<NavController<R>>,
    current: Memo<R>,
}

impl<R: Destination> Clone for Nav<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Destination> Copy for Nav<R> {}

pub fn create_nav<R: Destination>(start: R) -> Nav<R> {
    let controller = RwSignal::new(NavController::new(start));
    // Views keyed on the destination only rerun when it actually changes
    let current = Memo::new(move |_| controller.with(|c| c.current()));
    Nav { controller, current }
}

impl<R: Destination> Nav<R> {
    /// Current destination (tracked)
    pub fn current(&self) -> R {
        self.current.get()
    }

    pub fn is_live(&self, route: R) -> bool {
        self.controller.with_untracked(|c| c.is_live(route))
    }

    pub fn navigate(&self, route: R, opts: NavOptions) -> NavTransition<R> {
        let mut transition = None;
        self.controller.maybe_update(|c| {
            let before = (c.back_stack.clone(), c.saved.clone());
            transition = Some(c.navigate(route, opts));
            before.0 != c.back_stack || before.1 != c.saved
        });
        transition.unwrap_or_else(|| NavTransition {
            from: route,
            to: route,
            discarded: Vec::new(),
            restored: false,
        })
    }

    pub fn pop_back(&self) -> Option<NavTransition<R>> {
        let mut transition = None;
        self.controller.maybe_update(|c| {
            transition = c.pop_back();
            transition.is_some()
        });
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Dest {
        A,
        B,
        C,
    }

    #[test]
    fn starts_on_start_destination() {
        let nav = NavController::new(Dest::A);
        assert_eq!(nav.current(), Dest::A);
        assert_eq!(nav.back_stack(), &[Dest::A]);
    }

    #[test]
    fn push_stacks_entries() {
        let mut nav = NavController::new(Dest::A);
        let t = nav.navigate(Dest::C, NavOptions::push());
        assert_eq!(t.from, Dest::A);
        assert_eq!(t.to, Dest::C);
        assert!(t.changed());
        assert_eq!(nav.back_stack(), &[Dest::A, Dest::C]);
    }

    #[test]
    fn tab_pops_to_start_and_saves() {
        let mut nav = NavController::new(Dest::A);
        nav.navigate(Dest::B, NavOptions::tab());
        assert_eq!(nav.back_stack(), &[Dest::A, Dest::B]);

        let t = nav.navigate(Dest::A, NavOptions::tab());
        assert_eq!(nav.back_stack(), &[Dest::A]);
        assert!(t.discarded.is_empty());
        assert!(nav.has_saved_state(Dest::B));
        assert!(nav.is_live(Dest::B));

        let t = nav.navigate(Dest::B, NavOptions::tab());
        assert!(t.restored);
        assert!(!nav.has_saved_state(Dest::B));
    }

    #[test]
    fn single_top_does_not_duplicate() {
        let mut nav = NavController::new(Dest::A);
        nav.navigate(Dest::B, NavOptions::tab());
        let t = nav.navigate(Dest::B, NavOptions::tab());
        assert!(!t.changed());
        assert_eq!(nav.back_stack(), &[Dest::A, Dest::B]);
    }

    #[test]
    fn tab_from_pushed_screen_clears_it() {
        let mut nav = NavController::new(Dest::A);
        nav.navigate(Dest::C, NavOptions::push());
        nav.navigate(Dest::A, NavOptions::tab());
        assert_eq!(nav.current(), Dest::A);
        assert_eq!(nav.back_stack(), &[Dest::A]);
    }

    #[test]
    fn pop_without_save_discards() {
        let mut nav = NavController::new(Dest::A);
        nav.navigate(Dest::C, NavOptions::push());
        let opts = NavOptions {
            pop_up_to_start: true,
            ..NavOptions::default()
        };
        let t = nav.navigate(Dest::B, opts);
        assert_eq!(t.discarded, vec![Dest::C]);
        assert!(!nav.is_live(Dest::C));
    }

    #[test]
    fn pop_back_keeps_start() {
        let mut nav = NavController::new(Dest::A);
        assert!(nav.pop_back().is_none());

        nav.navigate(Dest::B, NavOptions::push());
        let t = nav.pop_back().unwrap();
        assert_eq!(t.from, Dest::B);
        assert_eq!(t.to, Dest::A);
        assert_eq!(t.discarded, vec![Dest::B]);
        assert!(nav.pop_back().is_none());
        assert_eq!(nav.current(), Dest::A);
    }

    /// Counts how often subscribers of the controller signal rerun
    fn runs_counter(nav: Nav<Dest>) -> (Memo<usize>, Arc<AtomicUsize>) {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let memo = Memo::new(move |_| {
            nav.controller.track();
            counter.fetch_add(1, Ordering::SeqCst) + 1
        });
        (memo, runs)
    }

    #[test]
    fn reselect_and_pop_at_start_do_not_notify() {
        let owner = Owner::new();
        owner.with(|| {
            let nav = create_nav(Dest::A);
            let (memo, runs) = runs_counter(nav);
            memo.get_untracked();
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            nav.navigate(Dest::A, NavOptions::tab());
            assert!(nav.pop_back().is_none());
            memo.get_untracked();
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            nav.navigate(Dest::B, NavOptions::tab());
            memo.get_untracked();
            assert_eq!(runs.load(Ordering::SeqCst), 2);
            assert_eq!(nav.current.get_untracked(), Dest::B);

            // Single top reselect leaves the stack alone
            nav.navigate(Dest::B, NavOptions::tab());
            memo.get_untracked();
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn current_follows_back_stack() {
        let owner = Owner::new();
        owner.with(|| {
            let nav = create_nav(Dest::A);
            nav.navigate(Dest::C, NavOptions::push());
            assert_eq!(nav.current.get_untracked(), Dest::C);
            let t = nav.pop_back().unwrap();
            assert_eq!(t.discarded, vec![Dest::C]);
            assert_eq!(nav.current.get_untracked(), Dest::A);
            assert!(!nav.is_live(Dest::C));
        });
    }

    fn dest() -> impl Strategy<Value = Dest> {
        prop_oneof![Just(Dest::A), Just(Dest::B), Just(Dest::C)]
    }

    proptest! {
        #[test]
        fn start_always_at_bottom(steps in prop::collection::vec((dest(), any::<bool>(), any::<bool>()), 0..40)) {
            let mut nav = NavController::new(Dest::A);
            for (d, tab, back) in steps {
                if back {
                    nav.pop_back();
                } else if tab {
                    nav.navigate(d, NavOptions::tab());
                } else {
                    nav.navigate(d, NavOptions::push());
                }
                prop_assert_eq!(nav.back_stack()[0], Dest::A);
                prop_assert!(!nav.back_stack().is_empty());
            }
        }
    }
}
