//! Client-side route table.
//!
//! Every path resolves to exactly one page and one shell. Paths outside the
//! table fall through to `NotFound`, rendered inside the public shell.

use yew::{html, Html};
use yew_router::Routable;

use crate::layouts::dashboard_layout::DashboardLayout;
use crate::layouts::main_layout::MainLayout;
use crate::pages::dashboard::blacklist::BlacklistPage;
use crate::pages::dashboard::bulk_upload::BulkUploadPage;
use crate::pages::dashboard::logs::LogsPage;
use crate::pages::dashboard::overview::DashboardPage;
use crate::pages::dashboard::settings::SettingsPage;
use crate::pages::landing::LandingPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::results::ResultsPage;
use crate::pages::upload::UploadPage;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/upload")]
    Upload,
    #[at("/results/:id")]
    Results { id: String },
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/bulk-upload")]
    BulkUpload,
    #[at("/dashboard/blacklist")]
    Blacklist,
    #[at("/dashboard/logs")]
    Logs,
    #[at("/dashboard/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Outer frame hosting a page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Shell {
    /// Header with top navigation.
    Public,
    /// Sidebar admin panel.
    Admin,
}

impl Route {
    pub fn shell(&self) -> Shell {
        match self {
            Route::Landing | Route::Upload | Route::Results { .. } | Route::NotFound => {
                Shell::Public
            }
            Route::Dashboard
            | Route::BulkUpload
            | Route::Blacklist
            | Route::Logs
            | Route::Settings => Shell::Admin,
        }
    }
}

fn page(route: &Route) -> Html {
    match route {
        Route::Landing => html! { <LandingPage /> },
        Route::Upload => html! { <UploadPage /> },
        Route::Results { id } => html! { <ResultsPage id={id.clone()} /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::BulkUpload => html! { <BulkUploadPage /> },
        Route::Blacklist => html! { <BlacklistPage /> },
        Route::Logs => html! { <LogsPage /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// `Switch` render function: wraps the matched page in its shell.
pub fn switch(route: Route) -> Html {
    gloo_console::debug!(format!("route -> {}", route.to_path()));
    let content = page(&route);
    match route.shell() {
        Shell::Public => html! { <MainLayout>{ content }</MainLayout> },
        Shell::Admin => html! { <DashboardLayout active={route}>{ content }</DashboardLayout> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_paths_use_public_shell() {
        for (path, expected) in [
            ("/", Route::Landing),
            ("/upload", Route::Upload),
            ("/results/demo", Route::Results { id: "demo".into() }),
        ] {
            let route = Route::recognize(path).unwrap();
            assert_eq!(route, expected);
            assert_eq!(route.shell(), Shell::Public);
        }
    }

    #[test]
    fn dashboard_paths_use_admin_shell() {
        for (path, expected) in [
            ("/dashboard", Route::Dashboard),
            ("/dashboard/bulk-upload", Route::BulkUpload),
            ("/dashboard/blacklist", Route::Blacklist),
            ("/dashboard/logs", Route::Logs),
            ("/dashboard/settings", Route::Settings),
        ] {
            let route = Route::recognize(path).unwrap();
            assert_eq!(route, expected);
            assert_eq!(route.shell(), Shell::Admin);
        }
    }

    #[test]
    fn result_id_is_passed_verbatim() {
        let route = Route::recognize("/results/CERT-2023-002").unwrap();
        assert_eq!(route, Route::Results { id: "CERT-2023-002".into() });
        assert_eq!(route.to_path(), "/results/CERT-2023-002");
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/dashboard/unknown"), Some(Route::NotFound));
        assert_eq!(Route::NotFound.shell(), Shell::Public);
    }
}
