//! Administrative settings edited on the dashboard settings view.
//!
//! Settings are three independent groups. Each group is addressed by option
//! name (the camel-case keys below) and holds either a flag or a string
//! choice. Nothing here is persisted: the view keeps a `Settings` value in its
//! local state and a reload starts again from `Settings::default()`.

use crate::error::ValidxError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsGroup {
    Notifications,
    Security,
    Verification,
}

impl SettingsGroup {
    pub const ALL: [SettingsGroup; 3] = [
        SettingsGroup::Notifications,
        SettingsGroup::Security,
        SettingsGroup::Verification,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SettingsGroup::Notifications => "notifications",
            SettingsGroup::Security => "security",
            SettingsGroup::Verification => "verification",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SettingsGroup::Notifications => "Notification Settings",
            SettingsGroup::Security => "Security Settings",
            SettingsGroup::Verification => "Verification Settings",
        }
    }

    pub fn descriptors(&self) -> &'static [SettingDescriptor] {
        match self {
            SettingsGroup::Notifications => NOTIFICATION_DESCRIPTORS,
            SettingsGroup::Security => SECURITY_DESCRIPTORS,
            SettingsGroup::Verification => VERIFICATION_DESCRIPTORS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Flag(bool),
    Choice(String),
}

/// How an option is edited: a checkbox or a select over `(value, label)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingControl {
    Checkbox,
    Select(&'static [(&'static str, &'static str)]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingDescriptor {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub control: SettingControl,
}

const NOTIFICATION_DESCRIPTORS: &[SettingDescriptor] = &[
    SettingDescriptor {
        key: "emailAlerts",
        title: "Email Alerts",
        description: "Receive email notifications for important events",
        control: SettingControl::Checkbox,
    },
    SettingDescriptor {
        key: "suspiciousActivity",
        title: "Suspicious Activity",
        description: "Alert when suspicious certificates are detected",
        control: SettingControl::Checkbox,
    },
    SettingDescriptor {
        key: "dailyReports",
        title: "Daily Reports",
        description: "Receive daily summary reports",
        control: SettingControl::Checkbox,
    },
    SettingDescriptor {
        key: "systemUpdates",
        title: "System Updates",
        description: "Notifications about system updates and maintenance",
        control: SettingControl::Checkbox,
    },
];

const SECURITY_DESCRIPTORS: &[SettingDescriptor] = &[
    SettingDescriptor {
        key: "twoFactorAuth",
        title: "Two-Factor Authentication",
        description: "Add an extra layer of security to your account",
        control: SettingControl::Checkbox,
    },
    SettingDescriptor {
        key: "sessionTimeout",
        title: "Session Timeout",
        description: "Automatically log out after inactivity",
        control: SettingControl::Select(&[
            ("15", "15 minutes"),
            ("30", "30 minutes"),
            ("60", "1 hour"),
            ("120", "2 hours"),
        ]),
    },
    SettingDescriptor {
        key: "apiAccess",
        title: "API Access",
        description: "Allow API access to verification services",
        control: SettingControl::Checkbox,
    },
    SettingDescriptor {
        key: "auditLogs",
        title: "Audit Logs",
        description: "Enable detailed audit logging",
        control: SettingControl::Checkbox,
    },
];

const VERIFICATION_DESCRIPTORS: &[SettingDescriptor] = &[
    SettingDescriptor {
        key: "confidenceThreshold",
        title: "Confidence Threshold",
        description: "Minimum confidence level for verification",
        control: SettingControl::Select(&[
            ("50", "50%"),
            ("65", "65%"),
            ("75", "75%"),
            ("85", "85%"),
            ("95", "95%"),
        ]),
    },
    SettingDescriptor {
        key: "autoBlacklist",
        title: "Auto-Blacklist",
        description: "Automatically blacklist certificates below threshold",
        control: SettingControl::Checkbox,
    },
    SettingDescriptor {
        key: "batchSize",
        title: "Batch Processing Size",
        description: "Number of certificates to process simultaneously",
        control: SettingControl::Select(&[
            ("50", "50"),
            ("100", "100"),
            ("200", "200"),
            ("500", "500"),
        ]),
    },
    SettingDescriptor {
        key: "retentionDays",
        title: "Data Retention",
        description: "How long to keep verification records",
        control: SettingControl::Select(&[
            ("90", "90 days"),
            ("180", "6 months"),
            ("365", "1 year"),
            ("730", "2 years"),
            ("1825", "5 years"),
        ]),
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_alerts: bool,
    pub suspicious_activity: bool,
    pub daily_reports: bool,
    pub system_updates: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_alerts: true,
            suspicious_activity: true,
            daily_reports: false,
            system_updates: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    pub two_factor_auth: bool,
    /// Minutes, as the select value.
    pub session_timeout: String,
    pub api_access: bool,
    pub audit_logs: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            two_factor_auth: false,
            session_timeout: "30".to_string(),
            api_access: true,
            audit_logs: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationPolicy {
    /// Percent, as the select value.
    pub confidence_threshold: String,
    pub auto_blacklist: bool,
    pub batch_size: String,
    pub retention_days: String,
}

impl Default for VerificationPolicy {
    fn default() -> Self {
        Self {
            confidence_threshold: "75".to_string(),
            auto_blacklist: true,
            batch_size: "100".to_string(),
            retention_days: "365".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub notifications: NotificationSettings,
    pub security: SecuritySettings,
    pub verification: VerificationPolicy,
}

impl Settings {
    pub fn get(&self, group: SettingsGroup, key: &str) -> Option<SettingValue> {
        use SettingValue::{Choice, Flag};
        let n = &self.notifications;
        let s = &self.security;
        let v = &self.verification;
        let value = match (group, key) {
            (SettingsGroup::Notifications, "emailAlerts") => Flag(n.email_alerts),
            (SettingsGroup::Notifications, "suspiciousActivity") => Flag(n.suspicious_activity),
            (SettingsGroup::Notifications, "dailyReports") => Flag(n.daily_reports),
            (SettingsGroup::Notifications, "systemUpdates") => Flag(n.system_updates),
            (SettingsGroup::Security, "twoFactorAuth") => Flag(s.two_factor_auth),
            (SettingsGroup::Security, "sessionTimeout") => Choice(s.session_timeout.clone()),
            (SettingsGroup::Security, "apiAccess") => Flag(s.api_access),
            (SettingsGroup::Security, "auditLogs") => Flag(s.audit_logs),
            (SettingsGroup::Verification, "confidenceThreshold") => {
                Choice(v.confidence_threshold.clone())
            }
            (SettingsGroup::Verification, "autoBlacklist") => Flag(v.auto_blacklist),
            (SettingsGroup::Verification, "batchSize") => Choice(v.batch_size.clone()),
            (SettingsGroup::Verification, "retentionDays") => Choice(v.retention_days.clone()),
            _ => return None,
        };
        Some(value)
    }

    /// Updates one option of one group. Every other group is left untouched.
    ///
    /// Returns `UnknownSettingKey` for a key the group does not have and
    /// `InvalidSettingValue` when a flag is given for a choice or vice versa.
    pub fn set(
        &mut self,
        group: SettingsGroup,
        key: &str,
        value: SettingValue,
    ) -> Result<(), ValidxError> {
        let slot = match self.slot_mut(group, key) {
            Some(slot) => slot,
            None => {
                return Err(ValidxError::UnknownSettingKey {
                    group: group.name(),
                    key: key.to_string(),
                });
            }
        };

        match (slot, value) {
            (Slot::Flag(target), SettingValue::Flag(flag)) => *target = flag,
            (Slot::Choice(target), SettingValue::Choice(choice)) => *target = choice,
            (_, value) => {
                return Err(ValidxError::InvalidSettingValue {
                    key: key.to_string(),
                    value: format!("{:?}", value),
                });
            }
        }
        Ok(())
    }

    fn slot_mut(&mut self, group: SettingsGroup, key: &str) -> Option<Slot<'_>> {
        let slot = match group {
            SettingsGroup::Notifications => {
                let n = &mut self.notifications;
                match key {
                    "emailAlerts" => Slot::Flag(&mut n.email_alerts),
                    "suspiciousActivity" => Slot::Flag(&mut n.suspicious_activity),
                    "dailyReports" => Slot::Flag(&mut n.daily_reports),
                    "systemUpdates" => Slot::Flag(&mut n.system_updates),
                    _ => return None,
                }
            }
            SettingsGroup::Security => {
                let s = &mut self.security;
                match key {
                    "twoFactorAuth" => Slot::Flag(&mut s.two_factor_auth),
                    "sessionTimeout" => Slot::Choice(&mut s.session_timeout),
                    "apiAccess" => Slot::Flag(&mut s.api_access),
                    "auditLogs" => Slot::Flag(&mut s.audit_logs),
                    _ => return None,
                }
            }
            SettingsGroup::Verification => {
                let v = &mut self.verification;
                match key {
                    "confidenceThreshold" => Slot::Choice(&mut v.confidence_threshold),
                    "autoBlacklist" => Slot::Flag(&mut v.auto_blacklist),
                    "batchSize" => Slot::Choice(&mut v.batch_size),
                    "retentionDays" => Slot::Choice(&mut v.retention_days),
                    _ => return None,
                }
            }
        };
        Some(slot)
    }
}

enum Slot<'a> {
    Flag(&'a mut bool),
    Choice(&'a mut String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_a_checkbox_leaves_other_groups_byte_identical() {
        let before = Settings::default();
        let mut after = before.clone();
        after
            .set(SettingsGroup::Notifications, "dailyReports", SettingValue::Flag(true))
            .unwrap();

        assert!(after.notifications.daily_reports);
        assert_eq!(
            serde_json::to_vec(&before.security).unwrap(),
            serde_json::to_vec(&after.security).unwrap()
        );
        assert_eq!(
            serde_json::to_vec(&before.verification).unwrap(),
            serde_json::to_vec(&after.verification).unwrap()
        );

        let mut expected = before.notifications.clone();
        expected.daily_reports = true;
        assert_eq!(after.notifications, expected);
    }

    #[test]
    fn select_updates_choice_value() {
        let mut settings = Settings::default();
        settings
            .set(SettingsGroup::Security, "sessionTimeout", SettingValue::Choice("120".into()))
            .unwrap();
        assert_eq!(settings.security.session_timeout, "120");
        assert_eq!(
            settings.get(SettingsGroup::Security, "sessionTimeout"),
            Some(SettingValue::Choice("120".into()))
        );
    }

    #[test]
    fn key_from_another_group_is_rejected() {
        let mut settings = Settings::default();
        let err = settings
            .set(SettingsGroup::Security, "emailAlerts", SettingValue::Flag(false))
            .unwrap_err();
        assert_eq!(
            err,
            ValidxError::UnknownSettingKey { group: "security", key: "emailAlerts".into() }
        );
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn mismatched_value_kind_is_rejected() {
        let mut settings = Settings::default();
        let result = settings.set(SettingsGroup::Verification, "batchSize", SettingValue::Flag(true));
        assert!(matches!(result, Err(ValidxError::InvalidSettingValue { .. })));
        assert_eq!(settings.verification.batch_size, "100");
    }

    #[test]
    fn every_descriptor_resolves_and_defaults_are_listed_choices() {
        let settings = Settings::default();
        for group in SettingsGroup::ALL {
            for descriptor in group.descriptors() {
                let value = settings
                    .get(group, descriptor.key)
                    .unwrap_or_else(|| panic!("missing {}", descriptor.key));
                match (descriptor.control, value) {
                    (SettingControl::Checkbox, SettingValue::Flag(_)) => {}
                    (SettingControl::Select(options), SettingValue::Choice(choice)) => {
                        assert!(options.iter().any(|(v, _)| *v == choice));
                    }
                    (control, value) => panic!("{:?} does not fit {:?}", value, control),
                }
            }
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["notifications"]["emailAlerts"], true);
        assert_eq!(json["security"]["sessionTimeout"], "30");
        assert_eq!(json["verification"]["retentionDays"], "365");
    }
}
