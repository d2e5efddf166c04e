use yew::{classes, html, Children, Classes, Component, Context, Html, Properties};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardPadding {
    Sm,
    #[default]
    Md,
    Lg,
}

impl CardPadding {
    pub fn class(&self) -> &'static str {
        match self {
            CardPadding::Sm => "card-pad-sm",
            CardPadding::Md => "card-pad-md",
            CardPadding::Lg => "card-pad-lg",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub padding: CardPadding,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Bordered white panel used by every page.
pub struct Card;

impl Component for Card {
    type Message = ();
    type Properties = CardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Card
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class={classes!("card", props.padding.class(), props.class.clone())}>
                { for props.children.iter() }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_defaults_to_medium() {
        assert_eq!(CardPadding::default().class(), "card-pad-md");
        assert_eq!(CardPadding::Sm.class(), "card-pad-sm");
        assert_eq!(CardPadding::Lg.class(), "card-pad-lg");
    }
}
