//! Single-certificate upload page.
//!
//! Wires the Yew `Component` implementation to its submodules: `state` holds
//! the `UploadForm`, `update` applies messages to it, `view` renders the form
//! and the demo-mode card.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::UploadPage;

impl Component for UploadPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        UploadPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
