//! Audit logs as of v9: the v8 tables plus thread keys and events.
//!
//! <https://discord.com/developers/docs/resources/audit-log>

pub use crate::v8::audit_log::{
    AuditLogChangeData, AuditLogChangeRole, AuditLogChangeType, AuditLogOptions,
    AuditLogOptionsType,
};

use crate::v8::audit_log::{
    audit_log_changes, audit_log_events, with_v8_change_keys, with_v8_events,
};

with_v8_change_keys!(audit_log_changes {
    /// Single attribute change recorded in an audit log entry.
    pub enum AuditLogChange;
} {
    Archived("archived" => bool),
    Locked("locked" => bool),
    AutoArchiveDuration("auto_archive_duration" => crate::v9::channel::AutoArchiveDuration),
    DefaultAutoArchiveDuration("default_auto_archive_duration" => crate::v9::channel::AutoArchiveDuration),
    Invitable("invitable" => bool),
});

with_v8_events!(audit_log_events {
    /// Action an audit log entry records.
    ///
    /// <https://discord.com/developers/docs/resources/audit-log#audit-log-entry-object-audit-log-events>
    pub enum AuditLogEvent;
} {
    ThreadCreate = 110,
    ThreadUpdate = 111,
    ThreadDelete = 112,
});

pub type AuditLog = crate::v8::audit_log::AuditLog<AuditLogChange, AuditLogEvent>;
pub type AuditLogEntry = crate::v8::audit_log::AuditLogEntry<AuditLogChange, AuditLogEvent>;

#[cfg(test)]
mod tests {
    use super::{AuditLog, AuditLogChange, AuditLogChangeData, AuditLogEvent};
    use crate::v9::channel::AutoArchiveDuration;
    use serde_json::json;
    use serde_test::Token;

    #[test]
    fn thread_keys() {
        let value = json!({"key": "auto_archive_duration", "old_value": 60, "new_value": 1440});
        let change: AuditLogChange = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(
            change,
            AuditLogChange::AutoArchiveDuration(AuditLogChangeData {
                new_value: Some(AutoArchiveDuration::Day),
                old_value: Some(AutoArchiveDuration::Hour),
            })
        );
        assert_eq!(serde_json::to_value(&change).unwrap(), value);

        let change: AuditLogChange =
            serde_json::from_value(json!({"key": "archived", "new_value": true})).unwrap();
        assert_eq!(change.key(), "archived");
        assert!(matches!(change, AuditLogChange::Archived(_)));
    }

    #[test]
    fn v8_keys_are_kept() {
        let change: AuditLogChange =
            serde_json::from_value(json!({"key": "color", "new_value": 255})).unwrap();

        assert!(matches!(
            change,
            AuditLogChange::Color(AuditLogChangeData {
                new_value: Some(255),
                ..
            })
        ));
    }

    #[test]
    fn thread_events() {
        serde_test::assert_tokens(&AuditLogEvent::ThreadUpdate, &[Token::U16(111)]);
        serde_test::assert_tokens(&AuditLogEvent::MemberKick, &[Token::U16(20)]);
        assert_eq!(AuditLogEvent::from(113), AuditLogEvent::Unknown(113));
    }

    #[test]
    fn thread_audit_log() {
        let log: AuditLog = serde_json::from_value(json!({
            "audit_log_entries": [{
                "id": "3",
                "action_type": 110,
                "target_id": "4",
                "user_id": "5",
                "changes": [
                    {"key": "name", "new_value": "help"},
                    {"key": "locked", "new_value": false},
                ],
            }],
            "integrations": [],
            "users": [],
            "webhooks": [],
        }))
        .unwrap();

        let entry = &log.audit_log_entries[0];
        assert_eq!(entry.action_type, AuditLogEvent::ThreadCreate);
        assert!(matches!(entry.changes[1], AuditLogChange::Locked(_)));
    }
}
