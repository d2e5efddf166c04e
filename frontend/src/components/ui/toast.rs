//! Transient notification banner.
//!
//! The banner closes itself after `duration_ms` by emitting `on_close`. The
//! parent keeps a `ToastSlot`, which keys the banner so that showing it again
//! remounts it and restarts the timer. The pending timeout lives in the
//! component, so unmounting the banner cancels it.

use gloo_timers::callback::Timeout;
use yew::{classes, html, AttrValue, Callback, Component, Context, Html, Properties};

use super::button::icon;

pub const TOAST_DURATION_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// `(css class, material icon)`.
    pub fn style(&self) -> (&'static str, &'static str) {
        match self {
            ToastKind::Success => ("toast-success", "check_circle"),
            ToastKind::Error => ("toast-error", "highlight_off"),
        }
    }
}

/// What a page currently shows in its toast area.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ToastSlot {
    generation: u32,
    notice: Option<(ToastKind, AttrValue)>,
}

impl ToastSlot {
    /// Shows `message`. Calling it while a toast is up replaces the message
    /// and restarts the dismiss timer.
    pub fn show(&mut self, kind: ToastKind, message: impl Into<AttrValue>) {
        self.generation = self.generation.wrapping_add(1);
        self.notice = Some((kind, message.into()));
    }

    pub fn dismiss(&mut self) {
        self.notice = None;
    }

    /// Key of the mounted banner; changes on every `show`.
    pub fn key(&self) -> Option<u32> {
        self.notice.as_ref().map(|_| self.generation)
    }

    pub fn render(&self, on_close: Callback<()>) -> Html {
        match (self.key(), &self.notice) {
            (Some(key), Some((kind, message))) => html! {
                <Toast key={key} message={message.clone()} kind={*kind} {on_close} />
            },
            _ => html! {},
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: AttrValue,
    pub kind: ToastKind,
    pub on_close: Callback<()>,
    #[prop_or(TOAST_DURATION_MS)]
    pub duration_ms: u32,
}

pub enum Msg {
    Close,
}

pub struct Toast {
    _timeout: Timeout,
}

impl Component for Toast {
    type Message = Msg;
    type Properties = ToastProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let timeout = Timeout::new(ctx.props().duration_ms, move || link.send_message(Msg::Close));
        Self { _timeout: timeout }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Close => {
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let (tone, glyph) = props.kind.style();
        html! {
            <div class={classes!("toast", tone)} role="alert">
                { icon(glyph) }
                <p class="toast-message">{ props.message.clone() }</p>
                <button class="toast-close" onclick={ctx.link().callback(|_| Msg::Close)}>
                    { icon("close") }
                </button>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showing_again_rekeys_the_banner() {
        let mut slot = ToastSlot::default();
        assert_eq!(slot.key(), None);

        slot.show(ToastKind::Success, "Verification report downloaded successfully!");
        let first = slot.key().unwrap();
        slot.show(ToastKind::Success, "Verification report downloaded successfully!");
        let second = slot.key().unwrap();

        assert_ne!(first, second);
        assert!(slot.key().is_some());
    }

    #[test]
    fn dismiss_hides_and_next_show_gets_a_fresh_key() {
        let mut slot = ToastSlot::default();
        slot.show(ToastKind::Error, "nope");
        let shown = slot.key().unwrap();

        slot.dismiss();
        assert_eq!(slot.key(), None);

        slot.show(ToastKind::Success, "ok");
        assert_ne!(slot.key(), Some(shown));
    }

    #[test]
    fn each_kind_has_its_own_tone() {
        assert_eq!(ToastKind::Success.style(), ("toast-success", "check_circle"));
        assert_eq!(ToastKind::Error.style(), ("toast-error", "highlight_off"));
    }
}
