use std::sync::Arc;

use storage::models::{Class, Event};
use thiserror::Error;

/// A message handed to the notification sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMail {
    pub subject: String,
    pub recipient: String,
    pub body: String,
}

#[derive(Debug, Error)]
#[error("failed to dispatch notification to {recipient}: {reason}")]
pub struct NotifyError {
    pub recipient: String,
    pub reason: String,
}

/// Narrow seam to the notification collaborator. Delivery is best-effort:
/// callers log failures and never roll back the state change that triggered
/// the mail.
pub trait Mailer: Send + Sync {
    fn send(&self, mail: OutboundMail) -> Result<(), NotifyError>;
}

pub type SharedMailer = Arc<dyn Mailer>;

/// Default sink: records the dispatch in the log. Actual SMTP delivery is a
/// deployment concern behind the same trait.
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send(&self, mail: OutboundMail) -> Result<(), NotifyError> {
        tracing::info!(
            recipient = %mail.recipient,
            subject = %mail.subject,
            "Dispatching notification"
        );
        Ok(())
    }
}

/// Sends `build_mail(class)` to every class with a contact address. Failures
/// are logged per recipient; the caller's operation has already committed.
pub fn notify_classes<F>(mailer: &dyn Mailer, classes: &[Class], build_mail: F)
where
    F: Fn(&Class, &str) -> OutboundMail,
{
    for class in classes {
        let Some(recipient) = class.contact_email.as_deref() else {
            continue;
        };
        if let Err(e) = mailer.send(build_mail(class, recipient)) {
            tracing::warn!(error = %e, "Notification dispatch failed");
        }
    }
}

pub fn event_announcement(event: &Event, class: &Class, recipient: &str) -> OutboundMail {
    let points = if event.points.len() == 3 {
        format!(
            "1st place: {} points\n2nd place: {} points\n3rd place: {} points",
            event.points[0], event.points[1], event.points[2]
        )
    } else {
        "Points are not specified.".to_string()
    };

    OutboundMail {
        subject: format!("Invitation to register for \"{}\"", event.name),
        recipient: recipient.to_string(),
        body: format!(
            "Dear {},\n\n\
             A new {} event \"{}\" ({}) is open for registration.\n\n\
             Location: {}\n\
             Participation: {} to {} students\n\n\
             Points distribution:\n{}\n\n\
             {}",
            class.name,
            event.category,
            event.name,
            event.participation,
            event.location,
            event.min_students,
            event.max_students,
            points,
            event.description,
        ),
    }
}

pub fn result_announcement(event: &Event, year: i32, class: &Class, recipient: &str) -> OutboundMail {
    OutboundMail {
        subject: format!("Results declared for \"{}\" ({})", event.name, year),
        recipient: recipient.to_string(),
        body: format!(
            "Dear {},\n\nThe results for \"{}\" ({}) have been declared. \
             The {} standings have been updated accordingly.",
            class.name, event.name, year, event.category,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use uuid::Uuid;

    struct RecordingMailer {
        sent: Mutex<Vec<OutboundMail>>,
        fail_for: Option<String>,
    }

    impl RecordingMailer {
        fn new() -> Self {
            Self {
                sent: Mutex::new(vec![]),
                fail_for: None,
            }
        }
    }

    impl Mailer for RecordingMailer {
        fn send(&self, mail: OutboundMail) -> Result<(), NotifyError> {
            if self.fail_for.as_deref() == Some(mail.recipient.as_str()) {
                return Err(NotifyError {
                    recipient: mail.recipient,
                    reason: "unreachable".to_string(),
                });
            }
            self.sent.lock().unwrap().push(mail);
            Ok(())
        }
    }

    fn class(name: &str, email: Option<&str>) -> Class {
        Class {
            class_id: Uuid::new_v4(),
            name: name.to_string(),
            category: "Senior".to_string(),
            contact_email: email.map(str::to_string),
            is_active: true,
            created_at: Default::default(),
        }
    }

    #[test]
    fn test_classes_without_address_are_skipped() {
        let mailer = RecordingMailer::new();
        let classes = vec![class("A", Some("a@school.test")), class("B", None)];

        notify_classes(&mailer, &classes, |class, recipient| OutboundMail {
            subject: "hello".to_string(),
            recipient: recipient.to_string(),
            body: class.name.clone(),
        });

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient, "a@school.test");
    }

    #[test]
    fn test_one_failure_does_not_stop_the_rest() {
        let mut mailer = RecordingMailer::new();
        mailer.fail_for = Some("a@school.test".to_string());
        let classes = vec![
            class("A", Some("a@school.test")),
            class("B", Some("b@school.test")),
        ];

        notify_classes(&mailer, &classes, |_, recipient| OutboundMail {
            subject: "hello".to_string(),
            recipient: recipient.to_string(),
            body: String::new(),
        });

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient, "b@school.test");
    }
}
