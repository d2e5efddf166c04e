use yew::{classes, html, Classes, Component, Context, Html, Properties};

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub size: SpinnerSize,
    #[prop_or_default]
    pub class: Classes,
}

pub struct LoadingSpinner;

impl Component for LoadingSpinner {
    type Message = ();
    type Properties = SpinnerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LoadingSpinner
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let size = match props.size {
            SpinnerSize::Sm => "spinner-sm",
            SpinnerSize::Md => "spinner-md",
            SpinnerSize::Lg => "spinner-lg",
        };
        html! {
            <div class={classes!("spinner", size, props.class.clone())} role="status" />
        }
    }
}
