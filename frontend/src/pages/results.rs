//! Verification result page.
//!
//! On mount the page waits `RESULT_DELAY_MS`, then asks a `FixtureProvider`
//! for the certificate behind the route id. `"demo"` always resolves to the
//! first sample; any other id gets a random sample. The not-found panel is
//! kept for providers that can miss, and is never shown with fixtures.

use common::error::ValidxError;
use common::model::certificate::{Certificate, CertificateField, CertificateStatus};
use common::verification::{FixtureProvider, VerificationProvider};
use wasm_bindgen::JsValue;
use yew::html::Scope;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::ui::button::{icon, Button, ButtonSize, ButtonVariant};
use crate::components::ui::card::{Card, CardPadding};
use crate::components::ui::spinner::{LoadingSpinner, SpinnerSize};
use crate::components::ui::table::{Table, TableRow};
use crate::components::ui::toast::{ToastKind, ToastSlot};
use crate::routes::Route;

pub const RESULT_DELAY_MS: u32 = 1500;

#[derive(Properties, PartialEq)]
pub struct ResultsProps {
    /// Route segment, passed through unvalidated.
    pub id: String,
}

pub enum Msg {
    Loaded {
        request: u32,
        outcome: Result<Certificate, ValidxError>,
    },
    DownloadReport,
    DismissToast,
}

pub struct ResultsPage {
    loading: bool,
    certificate: Option<Certificate>,
    toast: ToastSlot,
    /// Bumped on every id change so a late answer for an old id is ignored.
    request: u32,
}

struct StatusCopy {
    glyph: &'static str,
    tone: &'static str,
    title: &'static str,
    description: &'static str,
}

fn status_copy(status: CertificateStatus) -> StatusCopy {
    match status {
        CertificateStatus::Verified => StatusCopy {
            glyph: "check_circle",
            tone: "green",
            title: "Certificate Verified",
            description: "This certificate is authentic and has passed all verification checks.",
        },
        CertificateStatus::Suspect => StatusCopy {
            glyph: "warning",
            tone: "amber",
            title: "Certificate Suspect",
            description: "This certificate shows signs of tampering or inconsistencies that require further review.",
        },
        CertificateStatus::Invalid => StatusCopy {
            glyph: "highlight_off",
            tone: "red",
            title: "Certificate Invalid",
            description: "This certificate is fraudulent or has been significantly tampered with.",
        },
    }
}

impl ResultsPage {
    fn start_verification(&mut self, ctx: &Context<Self>) {
        self.loading = true;
        self.certificate = None;
        self.request = self.request.wrapping_add(1);

        let request = self.request;
        let reference = ctx.props().id.clone();
        let link = ctx.link().clone();
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(RESULT_DELAY_MS).await;
            let outcome = FixtureProvider::new(rand::thread_rng()).verify(&reference);
            link.send_message(Msg::Loaded { request, outcome });
        });
    }
}

impl Component for ResultsPage {
    type Message = Msg;
    type Properties = ResultsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut page = Self {
            loading: true,
            certificate: None,
            toast: ToastSlot::default(),
            request: 0,
        };
        page.start_verification(ctx);
        page
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().id != old_props.id {
            self.start_verification(ctx);
            return true;
        }
        false
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded { request, .. } if request != self.request => false,
            Msg::Loaded { outcome, .. } => {
                self.loading = false;
                match outcome {
                    Ok(certificate) => {
                        gloo_console::info!(format!(
                            "verification finished: {} is {}",
                            certificate.id, certificate.status
                        ));
                        self.certificate = Some(certificate);
                    }
                    Err(err) => {
                        gloo_console::warn!(err.to_string());
                        self.certificate = None;
                    }
                }
                true
            }
            Msg::DownloadReport => {
                // No report file is produced; the toast is the whole action.
                self.toast.show(ToastKind::Success, "Verification report downloaded successfully!");
                true
            }
            Msg::DismissToast => {
                self.toast.dismiss();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! {
                <div class="page-center">
                    <div class="text-center">
                        <LoadingSpinner size={SpinnerSize::Lg} class={classes!("centered")} />
                        <p class="lead">{ "Analyzing certificate..." }</p>
                    </div>
                </div>
            };
        }

        let Some(certificate) = &self.certificate else {
            return not_found();
        };

        let link = ctx.link();
        let copy = status_copy(certificate.status);
        html! {
            <div class="page-public">
                <div class="container narrow">
                    <div class="inline-row page-heading">
                        <Link<Route> to={Route::Upload}>
                            <Button variant={ButtonVariant::Secondary} size={ButtonSize::Sm}>
                                { icon("arrow_back") }{ "Back to Upload" }
                            </Button>
                        </Link<Route>>
                        <h1>{ "Verification Results" }</h1>
                    </div>

                    <Card class={classes!("status-banner", format!("banner-{}", copy.tone))}>
                        <div class="inline-row">
                            <span class={classes!("status-icon", format!("text-{}", copy.tone))}>{ icon(copy.glyph) }</span>
                            <div>
                                <h2 class={format!("banner-title text-{}", copy.tone)}>{ copy.title }</h2>
                                <p>{ copy.description }</p>
                            </div>
                        </div>
                    </Card>

                    <div class="results-grid">
                        <div class="results-main">
                            { details_card(certificate) }
                        </div>
                        <div class="results-side">
                            { actions_card(link) }
                            { info_card(certificate) }
                        </div>
                    </div>
                </div>
                { self.toast.render(link.callback(|_| Msg::DismissToast)) }
            </div>
        }
    }
}

fn details_card(certificate: &Certificate) -> Html {
    let rows = CertificateField::ALL
        .iter()
        .map(|field| {
            let value_class = if certificate.is_tampered(*field) {
                "cell-tampered"
            } else {
                "cell-value"
            };
            TableRow {
                key: field.key().to_string(),
                cells: vec![
                    html! { <span class="cell-label">{ field.label() }</span> },
                    html! { <span class={value_class}>{ certificate.field_value(*field).to_string() }</span> },
                ],
            }
        })
        .collect::<Vec<_>>();

    let tampered = certificate.tampered();

    html! {
        <Card>
            <div class="card-header">
                <h3 class="card-title">{ "Certificate Details" }</h3>
                <span class="hint">{ format!("ID: {}", certificate.id) }</span>
            </div>
            <Table columns={vec![AttrValue::from("Field"), AttrValue::from("Value")]} {rows} />
            {
                if tampered.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="notice notice-red">
                            <h4>{ "Tampered Fields Detected:" }</h4>
                            <div class="chips">
                                { for tampered.iter().map(|field| html! {
                                    <span key={field.key()} class="chip chip-red">{ field.key() }</span>
                                }) }
                            </div>
                        </div>
                    }
                }
            }
        </Card>
    }
}

fn actions_card(link: &Scope<ResultsPage>) -> Html {
    html! {
        <Card>
            <h3 class="card-title">{ "Actions" }</h3>
            <div class="stack">
                <Button
                    variant={ButtonVariant::Success}
                    class={classes!("w-full")}
                    onclick={link.callback(|_| Msg::DownloadReport)}
                >
                    { icon("file_download") }{ "Download Report" }
                </Button>
                <Link<Route> to={Route::Upload}>
                    <Button variant={ButtonVariant::Secondary} class={classes!("w-full")}>{ "Verify Another" }</Button>
                </Link<Route>>
                <Link<Route> to={Route::Dashboard}>
                    <Button variant={ButtonVariant::Secondary} class={classes!("w-full")}>{ "View Dashboard" }</Button>
                </Link<Route>>
            </div>
        </Card>
    }
}

fn info_card(certificate: &Certificate) -> Html {
    let today = String::from(js_sys::Date::new_0().to_locale_date_string("en-US", &JsValue::UNDEFINED));
    html! {
        <Card>
            <h4 class="card-title">{ "Verification Info" }</h4>
            <dl class="info-list">
                <div><dt>{ "Verified:" }</dt><dd>{ today }</dd></div>
                <div><dt>{ "Confidence:" }</dt><dd class="strong">{ certificate.status.confidence() }</dd></div>
                <div><dt>{ "Processing Time:" }</dt><dd>{ "2.3s" }</dd></div>
            </dl>
        </Card>
    }
}

fn not_found() -> Html {
    html! {
        <div class="page-center">
            <Card padding={CardPadding::Lg} class={classes!("text-center")}>
                <div class="status-icon text-red">{ icon("highlight_off") }</div>
                <h2 class="card-title">{ "Certificate Not Found" }</h2>
                <p class="muted">{ "The requested certificate could not be found or verified." }</p>
                <Link<Route> to={Route::Upload}>
                    <Button>{ "Try Another Certificate" }</Button>
                </Link<Route>>
            </Card>
        </div>
    }
}
