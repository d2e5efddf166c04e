use yew::{classes, html, Component, Context, Html, Properties};
use yew_router::components::Link;

use crate::components::ui::button::icon;
use crate::routes::Route;

/// `(route, material icon, label)` in display order.
const SIDEBAR_ITEMS: [(Route, &str, &str); 5] = [
    (Route::Dashboard, "dashboard", "Dashboard"),
    (Route::BulkUpload, "upload", "Bulk Upload"),
    (Route::Blacklist, "shield", "Blacklist"),
    (Route::Logs, "description", "Logs"),
    (Route::Settings, "settings", "Settings"),
];

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: Route,
}

pub struct Sidebar;

impl Component for Sidebar {
    type Message = ();
    type Properties = SidebarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Sidebar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let active = &ctx.props().active;
        html! {
            <aside class="sidebar">
                <Link<Route> to={Route::Landing} classes={classes!("sidebar-home")}>
                    { icon("home") }
                    <span>{ "Back to Home" }</span>
                </Link<Route>>
                <h2 class="sidebar-title">{ "Admin Panel" }</h2>
                <nav class="sidebar-nav">
                    { for SIDEBAR_ITEMS.iter().map(|(route, glyph, label)| {
                        let state = if route == active { "active" } else { "idle" };
                        html! {
                            <Link<Route> to={route.clone()} classes={classes!("sidebar-link", state)}>
                                { icon(glyph) }
                                <span>{ *label }</span>
                            </Link<Route>>
                        }
                    }) }
                </nav>
            </aside>
        }
    }
}
