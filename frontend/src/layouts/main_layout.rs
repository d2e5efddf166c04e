use yew::{html, Children, Component, Context, Html, Properties};

use crate::components::layout::header::Header;

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Children,
}

/// Public site shell: header on top, page below.
pub struct MainLayout;

impl Component for MainLayout {
    type Message = ();
    type Properties = MainLayoutProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MainLayout
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="main-layout">
                <Header />
                { for ctx.props().children.iter() }
            </div>
        }
    }
}
