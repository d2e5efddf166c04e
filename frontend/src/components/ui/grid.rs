use yew::{classes, html, Children, Classes, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct GridProps {
    /// Column count on wide screens; narrow screens always stack.
    pub columns: usize,
    #[prop_or(24)]
    pub gap_px: u32,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

pub struct Grid;

impl Component for Grid {
    type Message = ();
    type Properties = GridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Grid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "--grid-columns: {}; gap: {}px;",
            props.columns.max(1),
            props.gap_px
        );
        html! {
            <div class={classes!("grid", props.class.clone())} style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
