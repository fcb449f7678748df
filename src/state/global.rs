//! Global Application State
//!
//! Reactive state shared by the sidebar, the dashboard shell and the views.

use leptos::*;

use super::route::Route;
use crate::config;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// View currently mounted by the dashboard shell
    pub route: RwSignal<Route>,
    /// Base URL of the dashboard service
    pub api_base: RwSignal<String>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new(config::get_api_base()));
}

impl GlobalState {
    pub fn new(api_base: String) -> Self {
        Self {
            route: create_rw_signal(Route::default()),
            api_base: create_rw_signal(api_base),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    pub fn select(&self, route: Route) {
        if self.route.get_untracked() != route {
            log::debug!("Switching view to {:?}", route);
            self.route.set(route);
        }
    }

    pub fn is_selected(&self, route: Route) -> bool {
        self.route.get() == route
    }

    /// Change the service URL for this session and future reloads
    pub fn update_api_base(&self, url: &str) {
        config::set_api_base(url);
        self.api_base.set(config::normalize_base(url));
    }

    pub fn reset_api_base(&self) {
        config::clear_api_base();
        self.api_base.set(config::default_api_base());
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(state: &GlobalState) -> Vec<Route> {
        Route::ALL.into_iter().filter(|r| state.is_selected(*r)).collect()
    }

    #[test]
    fn test_starts_on_dashboard() {
        let runtime = create_runtime();
        let state = GlobalState::new(config::DEFAULT_API_BASE.to_string());

        assert_eq!(selected(&state), vec![Route::Dashboard]);
        runtime.dispose();
    }

    #[test]
    fn test_select_leaves_exactly_one_route_selected() {
        let runtime = create_runtime();
        let state = GlobalState::new(config::DEFAULT_API_BASE.to_string());

        state.select(Route::Map);
        assert_eq!(selected(&state), vec![Route::Map]);

        for route in Route::ALL {
            state.select(route);
            assert_eq!(selected(&state), vec![route]);
        }

        // selecting the current route again changes nothing
        state.select(Route::Settings);
        assert_eq!(selected(&state), vec![Route::Settings]);
        runtime.dispose();
    }
}
