//! Selected Route
//!
//! Which view the dashboard shell mounts.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Dashboard,
    Chatbot,
    Map,
    RainfallMap,
    Database,
    Settings,
}

impl Route {
    /// Sidebar order
    pub const ALL: [Route; 6] = [
        Route::Dashboard,
        Route::Chatbot,
        Route::Map,
        Route::RainfallMap,
        Route::Database,
        Route::Settings,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Chatbot => "Chatbot",
            Route::Map => "Map",
            Route::RainfallMap => "Rainfall Map",
            Route::Database => "Supabase Information",
            Route::Settings => "Settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Route::Dashboard => "🏠",
            Route::Chatbot => "💬",
            Route::Map => "🗺️",
            Route::RainfallMap => "🌧️",
            Route::Database => "🗄️",
            Route::Settings => "⚙️",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_initial_route_is_dashboard() {
        assert_eq!(Route::default(), Route::Dashboard);
    }

    #[test]
    fn test_routes_are_unique() {
        let routes: HashSet<_> = Route::ALL.iter().collect();
        assert_eq!(routes.len(), Route::ALL.len());

        let titles: HashSet<_> = Route::ALL.iter().map(|r| r.title()).collect();
        assert_eq!(titles.len(), Route::ALL.len());
    }
}
