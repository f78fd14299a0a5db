//! Application route map.
//!
//! The guard classifies routes by path prefix ([`ward_core::RouteTable`]),
//! so the enum here only needs to keep its paths inside the right
//! subtree: everything under `/preceptor` and `/facilitator` is
//! role-gated, the rest is public.

use yew_router::prelude::*;

/// Top-level routes of the Ward application.
#[derive(Debug, Clone, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/auth/login")]
    Login,
    #[at("/unauthorized")]
    Unauthorized,
    #[at("/preceptor/home")]
    PreceptorHome,
    #[at("/preceptor/feedback")]
    PreceptorFeedback,
    #[at("/facilitator/home")]
    FacilitatorHome,
    #[at("/facilitator/students")]
    FacilitatorStudents,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ward_core::{Access, Role, RouteTable, LOGIN_PATH, UNAUTHORIZED_PATH};

    #[test]
    fn test_role_sections_are_gated() {
        let table = RouteTable::default();
        assert_eq!(
            table.classify(&Route::PreceptorHome.to_path()),
            Access::Requires(Role::Preceptor)
        );
        assert_eq!(
            table.classify(&Route::PreceptorFeedback.to_path()),
            Access::Requires(Role::Preceptor)
        );
        assert_eq!(
            table.classify(&Route::FacilitatorHome.to_path()),
            Access::Requires(Role::Facilitator)
        );
        assert_eq!(
            table.classify(&Route::FacilitatorStudents.to_path()),
            Access::Requires(Role::Facilitator)
        );
    }

    #[test]
    fn test_auth_and_landing_pages_are_public() {
        let table = RouteTable::default();
        assert_eq!(table.classify(&Route::Home.to_path()), Access::Public);
        assert_eq!(table.classify(&Route::Login.to_path()), Access::Public);
        assert_eq!(table.classify(&Route::Unauthorized.to_path()), Access::Public);
        assert_eq!(table.classify(&Route::NotFound.to_path()), Access::Public);
    }

    #[test]
    fn test_redirect_targets_match_route_paths() {
        // The guard's fixed redirect targets must stay in sync with the
        // router's idea of those pages.
        assert_eq!(Route::Login.to_path(), LOGIN_PATH);
        assert_eq!(Route::Unauthorized.to_path(), UNAUTHORIZED_PATH);
    }
}
