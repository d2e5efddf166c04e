use yew::{classes, html, Component, Context, Html};
use yew_router::components::Link;

use crate::components::ui::button::icon;
use crate::routes::Route;

pub struct Header;

impl Component for Header {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Header
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <header class="site-header">
                <div class="container header-bar">
                    <Link<Route> to={Route::Landing} classes={classes!("brand")}>
                        <span class="brand-icon">{ icon("shield") }</span>
                        <span class="brand-name">{ "ValidX" }</span>
                    </Link<Route>>
                    <nav class="header-nav">
                        <Link<Route> to={Route::Landing} classes={classes!("nav-link")}>{ "Home" }</Link<Route>>
                        <Link<Route> to={Route::Upload} classes={classes!("nav-link")}>{ "Verify Certificate" }</Link<Route>>
                        <Link<Route> to={Route::Dashboard} classes={classes!("nav-link")}>{ "Dashboard" }</Link<Route>>
                    </nav>
                </div>
            </header>
        }
    }
}
