use yew::{classes, html, Component, Context, Html};
use yew_router::components::Link;

use crate::components::ui::button::{icon, Button, ButtonSize, ButtonVariant};
use crate::components::ui::card::Card;
use crate::components::ui::grid::Grid;
use crate::routes::Route;

const FEATURES: [(&str, &str, &str, &str); 3] = [
    (
        "check_circle",
        "text-green",
        "Instant Verification",
        "Get verification results in seconds with our advanced AI-powered document analysis technology.",
    ),
    (
        "shield",
        "text-blue",
        "Tamper Detection",
        "Advanced algorithms detect document tampering and highlight suspicious modifications in real-time.",
    ),
    (
        "description",
        "text-purple",
        "Detailed Reports",
        "Generate comprehensive verification reports with detailed analysis and downloadable documentation.",
    ),
];

const HIGHLIGHTS: [(&str, &str); 4] = [
    ("99.7%", "Accuracy Rate"),
    ("50K+", "Certificates Verified"),
    ("200+", "Institutions"),
    ("24/7", "Support"),
];

pub struct LandingPage;

impl Component for LandingPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        LandingPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="landing">
                <section class="container hero">
                    <div class="hero-icon text-blue">{ icon("shield") }</div>
                    <h1 class="hero-title">
                        { "Authenticity Validator" }
                        <span class="hero-accent">{ "for Academia" }</span>
                    </h1>
                    <p class="hero-lead">
                        { "Verify academic certificates instantly and securely. Protect institutions \
                           from fraudulent credentials with our advanced verification technology." }
                    </p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Upload}>
                            <Button size={ButtonSize::Lg}>{ "Start Verification" }</Button>
                        </Link<Route>>
                        <Link<Route> to={Route::Dashboard}>
                            <Button variant={ButtonVariant::Secondary} size={ButtonSize::Lg}>
                                { "Admin Dashboard" }
                            </Button>
                        </Link<Route>>
                    </div>
                </section>

                <section class="container features">
                    <div class="section-heading">
                        <h2>{ "Trusted by Educational Institutions Worldwide" }</h2>
                        <p>
                            { "Our platform provides comprehensive certificate validation with \
                               industry-leading accuracy and security standards." }
                        </p>
                    </div>
                    <Grid columns={3} gap_px={32}>
                        { for FEATURES.iter().map(|(glyph, tone, title, body)| html! {
                            <Card class={classes!("text-center")}>
                                <div class={classes!("feature-icon", *tone)}>{ icon(glyph) }</div>
                                <h3 class="feature-title">{ *title }</h3>
                                <p class="muted">{ *body }</p>
                            </Card>
                        }) }
                    </Grid>
                </section>

                <section class="stats-band">
                    <div class="container">
                        <Grid columns={4} gap_px={32} class={classes!("text-center")}>
                            { for HIGHLIGHTS.iter().map(|(figure, label)| html! {
                                <div>
                                    <div class="stats-figure">{ *figure }</div>
                                    <div class="stats-label">{ *label }</div>
                                </div>
                            }) }
                        </Grid>
                    </div>
                </section>
            </div>
        }
    }
}
