use common::filters::filter_blacklist;
use common::fixtures::blacklist_entries;
use common::model::blacklist::BlacklistEntry;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{page_heading, stat_card};
use crate::components::ui::button::{icon, Button, ButtonSize, ButtonVariant};
use crate::components::ui::card::Card;
use crate::components::ui::grid::Grid;
use crate::components::ui::table::{Table, TableRow};

pub enum Msg {
    Search(String),
}

pub struct BlacklistPage {
    entries: Vec<BlacklistEntry>,
    search: String,
}

impl Component for BlacklistPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            entries: blacklist_entries(),
            search: String::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Search(search) => {
                self.search = search;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let visible = filter_blacklist(&self.entries, &self.search);
        let oninput = ctx
            .link()
            .callback(|e: InputEvent| Msg::Search(e.target_unchecked_into::<HtmlInputElement>().value()));

        html! {
            <div class="dashboard-page">
                <div class="heading-row">
                    { page_heading("Blacklist Management", "Manage blacklisted certificates and fraudulent documents") }
                    // Adding entries is not wired to any store.
                    <Button variant={ButtonVariant::Danger}>
                        { icon("add") }{ "Add to Blacklist" }
                    </Button>
                </div>

                <Card class={classes!("section")}>
                    <div class="search-box">
                        { icon("search") }
                        <input
                            type="text"
                            placeholder="Search certificates..."
                            value={self.search.clone()}
                            {oninput}
                        />
                    </div>
                </Card>

                <Grid columns={3} class={classes!("section")}>
                    { stat_card("block", "red", "Total Blacklisted", self.entries.len().to_string()) }
                    { stat_card("warning", "amber", "This Month", "2".to_string()) }
                    { stat_card("shield", "green", "Prevention Rate", "98.5%".to_string()) }
                </Grid>

                <Card>
                    <div class="card-header">
                        <h3 class="card-title">{ "Blacklisted Certificates" }</h3>
                        <span class="hint">{ format!("{} certificate(s) found", visible.len()) }</span>
                    </div>
                    {
                        if visible.is_empty() {
                            empty_state()
                        } else {
                            entries_table(&visible)
                        }
                    }
                </Card>
            </div>
        }
    }
}

fn entries_table(entries: &[&BlacklistEntry]) -> Html {
    let columns = ["Certificate ID", "Reason", "Added By", "Date Added", "Actions"]
        .into_iter()
        .map(AttrValue::from)
        .collect::<Vec<_>>();
    let rows = entries
        .iter()
        .map(|entry| TableRow {
            key: entry.id.clone(),
            cells: vec![
                html! { <span class="mono strong">{ entry.certificate_id.clone() }</span> },
                html! { <span>{ entry.reason.clone() }</span> },
                html! { <span>{ entry.added_by.clone() }</span> },
                html! { <span class="muted">{ entry.added_date.clone() }</span> },
                html! {
                    <Button
                        variant={ButtonVariant::Danger}
                        size={ButtonSize::Sm}
                        title={format!("Remove {}", entry.certificate_id)}
                    >
                        { icon("delete") }
                    </Button>
                },
            ],
        })
        .collect::<Vec<_>>();
    html! { <Table {columns} {rows} /> }
}

fn empty_state() -> Html {
    html! {
        <div class="empty-state">
            <span class="empty-icon">{ icon("block") }</span>
            <p>{ "No blacklisted certificates found" }</p>
        </div>
    }
}
