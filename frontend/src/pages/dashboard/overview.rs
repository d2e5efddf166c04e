use common::fixtures::dashboard_stats;
use common::model::dashboard::DashboardStats;
use num_format::{Locale, ToFormattedString};
use yew::prelude::*;

use super::{page_heading, stat_card};
use crate::components::ui::card::Card;
use crate::components::ui::grid::Grid;
use crate::components::ui::status_badge::status_badge;
use crate::components::ui::table::{Table, TableRow};

/// `(icon, tone, caption, value)` for the four overview tiles, in display order.
fn summary_cards(stats: &DashboardStats) -> [(&'static str, &'static str, &'static str, String); 4] {
    [
        (
            "bar_chart",
            "blue",
            "Total Verifications",
            stats.total_verifications.to_formatted_string(&Locale::en),
        ),
        ("check_circle", "green", "Valid Certificates", format!("{}%", stats.valid_percentage)),
        ("warning", "amber", "Suspect Certificates", format!("{}%", stats.suspect_percentage)),
        ("highlight_off", "red", "Invalid Certificates", format!("{}%", stats.invalid_percentage)),
    ]
}

pub struct DashboardPage {
    stats: DashboardStats,
}

impl Component for DashboardPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            stats: dashboard_stats(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let stats = &self.stats;
        let columns = ["Certificate ID", "Student Name", "Institution", "Status", "Timestamp"]
            .into_iter()
            .map(AttrValue::from)
            .collect::<Vec<_>>();
        let rows = stats
            .recent_activity
            .iter()
            .map(|activity| TableRow {
                key: activity.id.clone(),
                cells: vec![
                    html! { <span class="mono">{ activity.certificate_id.clone() }</span> },
                    html! { <span class="strong">{ activity.student_name.clone() }</span> },
                    html! { <span>{ activity.institution.clone() }</span> },
                    status_badge(activity.status),
                    html! { <span class="muted">{ activity.timestamp.clone() }</span> },
                ],
            })
            .collect::<Vec<_>>();

        html! {
            <div class="dashboard-page">
                { page_heading("Dashboard", "Overview of certificate verification activities") }

                <Grid columns={4} class={classes!("section")}>
                    { for summary_cards(stats).into_iter().map(|(glyph, tone, label, value)| stat_card(glyph, tone, label, value)) }
                </Grid>

                <Card>
                    <div class="card-header">
                        <h3 class="card-title">{ "Recent Activity" }</h3>
                        <span class="hint">{ "Latest verification attempts" }</span>
                    </div>
                    <Table {columns} {rows} />
                </Card>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_run_total_valid_suspect_invalid() {
        let cards = summary_cards(&dashboard_stats());
        let captions: Vec<&str> = cards.iter().map(|(_, _, label, _)| *label).collect();
        assert_eq!(
            captions,
            ["Total Verifications", "Valid Certificates", "Suspect Certificates", "Invalid Certificates"]
        );

        let values: Vec<&str> = cards.iter().map(|(_, _, _, value)| value.as_str()).collect();
        assert_eq!(values, ["1,247", "78.5%", "6.3%", "15.2%"]);
    }
}
