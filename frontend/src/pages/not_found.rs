use yew::{classes, html, Component, Context, Html};
use yew_router::components::Link;

use crate::components::ui::button::{icon, Button};
use crate::components::ui::card::{Card, CardPadding};
use crate::routes::Route;

pub struct NotFoundPage;

impl Component for NotFoundPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        NotFoundPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="page-center">
                <Card padding={CardPadding::Lg} class={classes!("text-center")}>
                    <div class="status-icon text-red">{ icon("highlight_off") }</div>
                    <h2 class="card-title">{ "Page Not Found" }</h2>
                    <p class="muted">{ "The page you requested does not exist." }</p>
                    <Link<Route> to={Route::Landing}>
                        <Button>{ "Back to Home" }</Button>
                    </Link<Route>>
                </Card>
            </div>
        }
    }
}
