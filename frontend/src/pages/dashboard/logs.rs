use common::filters::{count_by_status, filter_logs, StatusFilter};
use common::fixtures::verification_logs;
use common::model::certificate::CertificateStatus;
use common::model::verification_log::VerificationLog;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::{page_heading, stat_card};
use crate::components::ui::button::{icon, Button, ButtonVariant};
use crate::components::ui::card::Card;
use crate::components::ui::grid::Grid;
use crate::components::ui::status_badge::status_badge;
use crate::components::ui::table::{Table, TableRow};

pub enum Msg {
    Search(String),
    Status(String),
}

pub struct LogsPage {
    logs: Vec<VerificationLog>,
    search: String,
    status: StatusFilter,
}

impl Component for LogsPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            logs: verification_logs(),
            search: String::new(),
            status: StatusFilter::All,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Search(search) => self.search = search,
            Msg::Status(value) => self.status = StatusFilter::parse(&value),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let visible = filter_logs(&self.logs, &self.search, self.status);
        let oninput = link.callback(|e: InputEvent| Msg::Search(e.target_unchecked_into::<HtmlInputElement>().value()));
        let onchange = link.callback(|e: Event| Msg::Status(e.target_unchecked_into::<HtmlSelectElement>().value()));
        let selected = self.status.as_value();

        let options = std::iter::once(("all", "All Status"))
            .chain(CertificateStatus::ALL.iter().map(|status| {
                let label = match status {
                    CertificateStatus::Verified => "Verified",
                    CertificateStatus::Suspect => "Suspect",
                    CertificateStatus::Invalid => "Invalid",
                };
                (status.as_str(), label)
            }))
            .map(|(value, label)| {
                html! { <option {value} selected={value == selected}>{ label }</option> }
            })
            .collect::<Html>();

        html! {
            <div class="dashboard-page">
                <div class="heading-row">
                    { page_heading("Verification Logs", "Complete history of all certificate verification attempts") }
                    // Export is not wired to any file writer.
                    <Button variant={ButtonVariant::Secondary}>
                        { icon("file_download") }{ "Export Logs" }
                    </Button>
                </div>

                <Card class={classes!("section")}>
                    <div class="filter-bar">
                        <div class="search-box">
                            { icon("search") }
                            <input
                                type="text"
                                placeholder="Search by certificate ID, student name, or institution..."
                                value={self.search.clone()}
                                {oninput}
                            />
                        </div>
                        <div class="inline-row">
                            { icon("filter_list") }
                            <select class="select" {onchange}>{ options }</select>
                        </div>
                        <Button variant={ButtonVariant::Secondary}>
                            { icon("date_range") }{ "Date Range" }
                        </Button>
                    </div>
                </Card>

                <Grid columns={4} class={classes!("section")}>
                    { stat_card("description", "blue", "Total Logs", self.logs.len().to_string()) }
                    { stat_card("check_circle", "green", "Verified",
                        count_by_status(&self.logs, CertificateStatus::Verified).to_string()) }
                    { stat_card("warning", "amber", "Suspect",
                        count_by_status(&self.logs, CertificateStatus::Suspect).to_string()) }
                    { stat_card("highlight_off", "red", "Invalid",
                        count_by_status(&self.logs, CertificateStatus::Invalid).to_string()) }
                </Grid>

                <Card>
                    <div class="card-header">
                        <h3 class="card-title">{ "Verification History" }</h3>
                        <span class="hint">{ format!("{} record(s) found", visible.len()) }</span>
                    </div>
                    {
                        if visible.is_empty() {
                            html! {
                                <div class="empty-state">
                                    <span class="empty-icon">{ icon("description") }</span>
                                    <p>{ "No logs match your current filters" }</p>
                                </div>
                            }
                        } else {
                            logs_table(&visible)
                        }
                    }
                </Card>
            </div>
        }
    }
}

fn logs_table(logs: &[&VerificationLog]) -> Html {
    let columns = ["Timestamp", "Certificate ID", "Student Name", "Institution", "Status"]
        .into_iter()
        .map(AttrValue::from)
        .collect::<Vec<_>>();
    let rows = logs
        .iter()
        .map(|log| TableRow {
            key: log.id.clone(),
            cells: vec![
                html! { <span class="muted">{ log.timestamp.clone() }</span> },
                html! { <span class="mono">{ log.certificate_id.clone() }</span> },
                html! { <span class="strong">{ log.student_name.clone() }</span> },
                html! { <span>{ log.institution.clone() }</span> },
                status_badge(log.status),
            ],
        })
        .collect::<Vec<_>>();
    html! { <Table {columns} {rows} /> }
}
