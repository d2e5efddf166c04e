//! Bulk upload with simulated progress.
//!
//! The chosen file is never read. Starting the upload arms an `Interval`
//! that advances `BulkUpload` until it reports `Finished`; the handle is
//! dropped at that point, or with the page if the user navigates away.

use common::bulk::{BulkUpload, ProgressTick, BULK_ACCEPT, CSV_HEADER, JSON_EXAMPLE, PROGRESS_INTERVAL_MS};
use gloo_timers::callback::Interval;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::page_heading;
use crate::components::ui::button::{icon, Button, ButtonSize};
use crate::components::ui::card::Card;
use crate::components::ui::grid::Grid;
use crate::components::ui::spinner::{LoadingSpinner, SpinnerSize};
use crate::components::ui::toast::{ToastKind, ToastSlot};

pub enum Msg {
    FileSelected(String),
    Start,
    Tick,
    DismissToast,
}

pub struct BulkUploadPage {
    upload: BulkUpload,
    ticker: Option<Interval>,
    toast: ToastSlot,
}

impl Component for BulkUploadPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            upload: BulkUpload::default(),
            ticker: None,
            toast: ToastSlot::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileSelected(name) => {
                gloo_console::debug!(format!("bulk file selected: {}", name));
                self.upload.select_file(name);
                true
            }
            Msg::Start => {
                if !self.upload.start() {
                    return false;
                }
                let link = ctx.link().clone();
                self.ticker = Some(Interval::new(PROGRESS_INTERVAL_MS, move || {
                    link.send_message(Msg::Tick)
                }));
                true
            }
            Msg::Tick => match self.upload.tick() {
                ProgressTick::Advanced(_) => true,
                ProgressTick::Finished => {
                    // Dropping the handle clears the browser interval.
                    self.ticker = None;
                    self.toast.show(ToastKind::Success, "Certificates uploaded successfully! Verification will begin shortly.");
                    gloo_console::info!("bulk upload finished");
                    true
                }
            },
            Msg::DismissToast => {
                self.toast.dismiss();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_file = link.batch_callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input
                .files()
                .and_then(|files| files.get(0))
                .map(|file| Msg::FileSelected(file.name()))
        });

        html! {
            <div class="dashboard-page">
                { page_heading("Bulk Upload", "Upload multiple certificates for batch verification") }

                <Grid columns={2}>
                    <Card>
                        <h3 class="card-title">{ "Upload Certificate Data" }</h3>
                        <div class="drop-zone">
                            <span class="drop-icon">{ icon("cloud_upload") }</span>
                            <p class="strong">{ "Upload CSV or JSON file" }</p>
                            <p class="muted">{ "Select a file containing certificate data" }</p>
                            <input
                                id="bulk-file"
                                class="hidden"
                                type="file"
                                accept={BULK_ACCEPT}
                                onchange={on_file}
                            />
                            <label for="bulk-file" class="btn btn-secondary btn-md">{ "Choose File" }</label>
                            {
                                match &self.upload.file_name {
                                    Some(name) => html! {
                                        <p class="selected-file">{ format!("Selected: {}", name) }</p>
                                    },
                                    None => html! {},
                                }
                            }
                        </div>

                        { self.progress_view() }

                        <Button
                            class={classes!("w-full")}
                            size={ButtonSize::Lg}
                            disabled={!self.upload.can_start()}
                            onclick={link.callback(|_| Msg::Start)}
                        >
                            {
                                if self.upload.uploading {
                                    html! { <><LoadingSpinner size={SpinnerSize::Sm} />{ "Processing..." }</> }
                                } else {
                                    html! { <>{ icon("description") }{ "Start Bulk Verification" }</> }
                                }
                            }
                        </Button>
                    </Card>

                    <Card>
                        <h3 class="card-title">{ "File Format Requirements" }</h3>
                        <div class="format-block">
                            <h4>{ "CSV Format" }</h4>
                            <pre class="code-sample">{ CSV_HEADER }</pre>
                        </div>
                        <div class="format-block">
                            <h4>{ "JSON Format" }</h4>
                            <pre class="code-sample">{ JSON_EXAMPLE }</pre>
                        </div>
                        <div class="notice notice-blue">
                            <h4>{ "Important Notes:" }</h4>
                            <ul>
                                <li>{ "Maximum file size: 10MB" }</li>
                                <li>{ "Maximum 1000 certificates per batch" }</li>
                                <li>{ "All fields are required" }</li>
                                <li>{ "Dates should be in YYYY-MM-DD format" }</li>
                            </ul>
                        </div>
                    </Card>
                </Grid>

                { self.toast.render(link.callback(|_| Msg::DismissToast)) }
            </div>
        }
    }
}

impl BulkUploadPage {
    fn progress_view(&self) -> Html {
        if !self.upload.uploading {
            return html! {};
        }
        let progress = self.upload.progress;
        html! {
            <div class="progress">
                <div class="progress-caption">
                    <span>{ "Processing..." }</span>
                    <span>{ format!("{}%", progress) }</span>
                </div>
                <div class="progress-track">
                    <div class="progress-bar" style={format!("width: {}%;", progress)} />
                </div>
            </div>
        }
    }
}
