pub mod blacklist;
pub mod bulk_upload;
pub mod logs;
pub mod overview;
pub mod settings;

use yew::{classes, html, Html};

use crate::components::ui::button::icon;
use crate::components::ui::card::{Card, CardPadding};

/// Summary tile shared by the admin pages: caption and value on the left,
/// a tinted icon on the right.
pub(crate) fn stat_card(glyph: &str, tone: &str, label: &str, value: String) -> Html {
    html! {
        <Card padding={CardPadding::Sm} class={classes!("stat-card")}>
            <div class="stat-body">
                <div>
                    <p class="stat-label">{ label.to_string() }</p>
                    <p class={classes!("stat-value", format!("text-{}", tone))}>{ value }</p>
                </div>
                <span class={classes!("stat-icon", format!("tint-{}", tone))}>{ icon(glyph) }</span>
            </div>
        </Card>
    }
}

pub(crate) fn page_heading(title: &str, subtitle: &str) -> Html {
    html! {
        <div class="page-heading">
            <h1>{ title.to_string() }</h1>
            <p class="muted">{ subtitle.to_string() }</p>
        </div>
    }
}
