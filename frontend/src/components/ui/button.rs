use web_sys::MouseEvent;
use yew::{classes, html, Callback, Children, Classes, Component, Context, Html, Properties};

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    /// `None` renders a button with no click handler.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub disabled: bool,
    /// `"button"` or `"submit"`.
    #[prop_or("button")]
    pub button_type: &'static str,
    #[prop_or_default]
    pub title: Option<String>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

pub struct Button;

impl Component for Button {
    type Message = ();
    type Properties = ButtonProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Button
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let variant = match props.variant {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Success => "btn-success",
            ButtonVariant::Warning => "btn-warning",
            ButtonVariant::Danger => "btn-danger",
        };
        let size = match props.size {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        };

        html! {
            <button
                type={props.button_type}
                class={classes!("btn", variant, size, props.class.clone())}
                onclick={props.onclick.clone()}
                disabled={props.disabled}
                title={props.title.clone()}
            >
                { for props.children.iter() }
            </button>
        }
    }
}

/// Material icon glyph, as used inside buttons and headings.
pub fn icon(name: &str) -> Html {
    html! { <i class="material-icons">{ name.to_string() }</i> }
}
