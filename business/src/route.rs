//! Route state for sidebar navigation.

use backoffice_states::State;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Which dashboard page is currently displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Overview page with the latest-users card.
    #[default]
    Overview,
    /// User management table.
    Users,
}

impl Route {
    /// Sidebar label and page heading.
    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Users => "Users",
        }
    }

    /// All routes in sidebar order.
    pub fn all() -> [Self; 2] {
        [Self::Overview, Self::Users]
    }
}

impl State for Route {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_default_is_overview() {
        assert_eq!(Route::default(), Route::Overview);
    }

    #[test]
    fn test_route_titles() {
        assert_eq!(Route::Overview.title(), "Overview");
        assert_eq!(Route::Users.title(), "Users");
    }

    #[test]
    fn test_sidebar_order() {
        assert_eq!(Route::all(), [Route::Overview, Route::Users]);
    }
}
