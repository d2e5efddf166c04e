//! Admin settings.
//!
//! Every option is rendered from the group's descriptor table and written
//! back through `Settings::set`, so a change touches exactly one group.
//! Saving persists nothing.

use common::model::settings::{SettingControl, SettingDescriptor, SettingValue, Settings, SettingsGroup};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::page_heading;
use crate::components::ui::button::{icon, Button};
use crate::components::ui::card::Card;
use crate::components::ui::toast::{ToastKind, ToastSlot};

pub enum Msg {
    Change {
        group: SettingsGroup,
        key: &'static str,
        value: SettingValue,
    },
    Save,
    DismissToast,
}

pub struct SettingsPage {
    settings: Settings,
    toast: ToastSlot,
}

fn group_icon(group: SettingsGroup) -> &'static str {
    match group {
        SettingsGroup::Notifications => "notifications",
        SettingsGroup::Security => "shield",
        SettingsGroup::Verification => "storage",
    }
}

impl Component for SettingsPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            settings: Settings::default(),
            toast: ToastSlot::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Change { group, key, value } => match self.settings.set(group, key, value) {
                Ok(()) => true,
                Err(err) => {
                    gloo_console::error!(err.to_string());
                    self.toast.show(ToastKind::Error, format!("Could not update setting: {}", err));
                    true
                }
            },
            Msg::Save => {
                gloo_console::info!("settings saved");
                self.toast.show(ToastKind::Success, "Settings saved successfully!");
                true
            }
            Msg::DismissToast => {
                self.toast.dismiss();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="dashboard-page">
                <div class="heading-row">
                    { page_heading("System Settings", "Configure system preferences and security settings") }
                    <Button onclick={link.callback(|_| Msg::Save)}>
                        { icon("save") }{ "Save Changes" }
                    </Button>
                </div>

                <div class="stack-lg">
                    { for SettingsGroup::ALL.into_iter().map(|group| self.group_card(link, group)) }
                </div>

                { self.toast.render(link.callback(|_| Msg::DismissToast)) }
            </div>
        }
    }
}

impl SettingsPage {
    fn group_card(&self, link: &Scope<Self>, group: SettingsGroup) -> Html {
        html! {
            <Card key={group.name()}>
                <div class="inline-row card-header">
                    <span class="text-blue">{ icon(group_icon(group)) }</span>
                    <h3 class="card-title">{ group.title() }</h3>
                </div>
                <div class="settings-list">
                    { for group.descriptors().iter().map(|descriptor| self.setting_row(link, group, descriptor)) }
                </div>
            </Card>
        }
    }

    fn setting_row(&self, link: &Scope<Self>, group: SettingsGroup, descriptor: &SettingDescriptor) -> Html {
        let key = descriptor.key;
        let control = match (descriptor.control, self.settings.get(group, key)) {
            (SettingControl::Checkbox, Some(SettingValue::Flag(checked))) => {
                let onchange = link.callback(move |e: Event| Msg::Change {
                    group,
                    key,
                    value: SettingValue::Flag(e.target_unchecked_into::<HtmlInputElement>().checked()),
                });
                html! {
                    <label class="switch">
                        <input type="checkbox" {checked} {onchange} />
                        <span class="switch-track" />
                    </label>
                }
            }
            (SettingControl::Select(options), Some(SettingValue::Choice(current))) => {
                let onchange = link.callback(move |e: Event| Msg::Change {
                    group,
                    key,
                    value: SettingValue::Choice(e.target_unchecked_into::<HtmlSelectElement>().value()),
                });
                html! {
                    <select class="select" {onchange}>
                        { for options.iter().map(|(value, label)| html! {
                            <option value={*value} selected={*value == current}>{ *label }</option>
                        }) }
                    </select>
                }
            }
            _ => {
                gloo_console::warn!(format!("no control for {}.{}", group.name(), key));
                html! {}
            }
        };

        html! {
            <div key={key} class="setting-row">
                <div>
                    <h4 class="strong">{ descriptor.title }</h4>
                    <p class="muted">{ descriptor.description }</p>
                </div>
                { control }
            </div>
        }
    }
}
