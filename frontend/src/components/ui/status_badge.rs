use common::model::certificate::CertificateStatus;
use yew::{classes, html, Html};

/// Pill showing a status tag, coloured per status.
pub fn status_badge(status: CertificateStatus) -> Html {
    let tone = match status {
        CertificateStatus::Verified => "badge-green",
        CertificateStatus::Suspect => "badge-amber",
        CertificateStatus::Invalid => "badge-red",
    };
    html! {
        <span class={classes!("badge", tone)}>{ status.as_str() }</span>
    }
}
