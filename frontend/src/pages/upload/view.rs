use common::upload::PICKER_ACCEPT;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::ui::button::{icon, Button, ButtonVariant};
use crate::components::ui::card::Card;
use crate::components::ui::grid::Grid;
use crate::components::ui::spinner::{LoadingSpinner, SpinnerSize};

use super::messages::Msg;
use super::state::UploadPage;

pub fn view(component: &UploadPage, ctx: &Context<UploadPage>) -> Html {
    let link = ctx.link();
    html! {
        <div class="page-public">
            <div class="container narrow">
                <div class="page-heading text-center">
                    <h1>{ "Certificate Verification" }</h1>
                    <p class="lead">{ "Upload a certificate file or enter a certificate ID to begin verification" }</p>
                </div>
                <Grid columns={2} gap_px={32}>
                    { build_upload_card(component, link) }
                    { build_demo_card(component, link) }
                </Grid>
            </div>
        </div>
    }
}

fn build_upload_card(component: &UploadPage, link: &Scope<UploadPage>) -> Html {
    let form = &component.form;
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let oninput = link.callback(|e: InputEvent| {
        Msg::SetCertificateId(e.target_unchecked_into::<HtmlInputElement>().value())
    });

    html! {
        <Card>
            <form {onsubmit}>
                <div class="field">
                    <label class="field-label">{ "Certificate File" }</label>
                    { build_drop_zone(component, link) }
                </div>
                <div class="field">
                    <label for="certificateId" class="field-label">
                        { "Certificate ID / Roll Number (Optional)" }
                    </label>
                    <input
                        type="text"
                        id="certificateId"
                        class="input"
                        value={form.certificate_id.clone()}
                        {oninput}
                        placeholder="Enter certificate ID or roll number"
                    />
                </div>
                <Button button_type="submit" class={classes!("w-full")} disabled={!form.can_submit()}>
                    {
                        if form.loading {
                            html! {
                                <span class="inline-row">
                                    <LoadingSpinner size={SpinnerSize::Sm} />
                                    <span>{ "Verifying Certificate..." }</span>
                                </span>
                            }
                        } else {
                            html! { "Verify Certificate" }
                        }
                    }
                </Button>
            </form>
        </Card>
    }
}

fn build_drop_zone(component: &UploadPage, link: &Scope<UploadPage>) -> Html {
    let form = &component.form;
    let ondragover = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::DragOver
    });
    let ondragleave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::DragLeave
    });
    let ondrop = link.callback(|e: DragEvent| {
        e.prevent_default();
        let first = e
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0))
            .map(|file| (file.name(), file.type_()));
        Msg::Dropped(first)
    });
    let onchange = link.batch_callback(|e: Event| {
        let input = e.target_unchecked_into::<HtmlInputElement>();
        input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| Msg::FileSelected(file.name()))
    });

    let zone_class = classes!("drop-zone", if form.dragging { "dragging" } else { "" });

    html! {
        <div class={zone_class} {ondragover} {ondragleave} {ondrop}>
            {
                if let Some(name) = &form.file_name {
                    html! {
                        <div class="inline-row">
                            <span class="text-blue">{ icon("description") }</span>
                            <span class="file-name">{ name.clone() }</span>
                        </div>
                    }
                } else {
                    html! {
                        <>
                            <div class="drop-icon">{ icon("cloud_upload") }</div>
                            <p class="muted">
                                { "Drag and drop your certificate here, or " }
                                <label class="link">
                                    { "browse files" }
                                    <input type="file" class="hidden" accept={PICKER_ACCEPT} {onchange} />
                                </label>
                            </p>
                            <p class="hint">{ "Supports PDF, JPG, PNG files up to 10MB" }</p>
                        </>
                    }
                }
            }
        </div>
    }
}

fn build_demo_card(component: &UploadPage, link: &Scope<UploadPage>) -> Html {
    html! {
        <Card class={classes!("text-center")}>
            <div class="status-icon text-amber">{ icon("error_outline") }</div>
            <h3 class="card-title">{ "Demo Mode" }</h3>
            <p class="muted">
                { "Try our verification system with sample certificates. This will demonstrate \
                   the verification process without uploading your own files." }
            </p>
            <Button
                variant={ButtonVariant::Warning}
                class={classes!("w-full")}
                onclick={link.callback(|_| Msg::LoadDemo)}
            >
                { "Load Sample Certificate" }
            </Button>
            {
                if component.form.demo_mode {
                    html! {
                        <div class="notice notice-amber">
                            <strong>{ "Demo Mode Active:" }</strong>
                            { " Using sample certificate data for demonstration purposes." }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </Card>
    }
}
