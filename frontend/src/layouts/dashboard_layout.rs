use yew::{html, Children, Component, Context, Html, Properties};

use crate::components::layout::sidebar::Sidebar;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    /// Route being shown, for sidebar highlighting.
    pub active: Route,
    pub children: Children,
}

/// Admin shell: fixed sidebar on the left, page in the remaining area.
pub struct DashboardLayout;

impl Component for DashboardLayout {
    type Message = ();
    type Properties = DashboardLayoutProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DashboardLayout
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="dashboard-layout">
                <Sidebar active={props.active.clone()} />
                <div class="dashboard-content">
                    { for props.children.iter() }
                </div>
            </div>
        }
    }
}
