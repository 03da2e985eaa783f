//! Query handlers for the dashboard shell.
//!
//! - `enter_route` - Route path to SpecialtyContext (theme + navigation)
//! - `get_navigation` - Navigation for a specialty without touching the theme

mod enter_route;
mod get_navigation;

pub use enter_route::{EnterRouteHandler, EnterRouteQuery};
pub use get_navigation::{GetNavigationHandler, GetNavigationQuery, NavigationView};
