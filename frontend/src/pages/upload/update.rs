//! Update function for the upload page.
//!
//! Submitting enters the loading state, waits `UPLOAD_DELAY_MS` and then
//! navigates to `/results/demo` or `/results/uploaded`. The delay is not
//! cancellable: if the page is gone when it fires, Yew drops the message.

use common::upload::UPLOAD_DELAY_MS;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::routes::Route;

use super::messages::Msg;
use super::state::UploadPage;

pub fn update(component: &mut UploadPage, ctx: &Context<UploadPage>, msg: Msg) -> bool {
    let form = &mut component.form;
    match msg {
        Msg::FileSelected(name) => {
            form.select_file(name);
            true
        }
        Msg::DragOver => {
            if form.dragging {
                return false;
            }
            form.dragging = true;
            true
        }
        Msg::DragLeave => {
            form.dragging = false;
            true
        }
        Msg::Dropped(Some((name, mime))) => {
            if !form.drop_file(name, &mime) {
                gloo_console::debug!(format!("ignored dropped file of type '{}'", mime));
            }
            true
        }
        Msg::Dropped(None) => {
            form.dragging = false;
            true
        }
        Msg::SetCertificateId(value) => {
            form.certificate_id = value;
            true
        }
        Msg::LoadDemo => {
            form.load_demo();
            true
        }
        Msg::Submit => match form.submit() {
            Some(reference) => {
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(UPLOAD_DELAY_MS).await;
                    link.send_message(Msg::Navigate(reference));
                });
                true
            }
            None => {
                gloo_console::debug!("submit ignored: no file selected and demo mode off");
                false
            }
        },
        Msg::Navigate(reference) => {
            gloo_console::info!(format!("verification submitted as '{}'", reference));
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&Route::Results {
                    id: reference.to_string(),
                });
            }
            false
        }
    }
}
