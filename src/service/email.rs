use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::Config;
use crate::model::leave::LeaveRequest;

/// SMTP notifier for review outcomes. With no SMTP host configured, every
/// send is a silent no-op. Callers only log failures; a notification never
/// affects the operation it follows.
#[derive(Clone)]
pub struct EmailService {
    smtp: Option<SmtpSettings>,
}

#[derive(Clone)]
struct SmtpSettings {
    host: String,
    port: u16,
    user: Option<String>,
    password: Option<String>,
    from: String,
}

impl EmailService {
    pub fn new(config: &Config) -> Self {
        let smtp = config.smtp_host.as_ref().map(|host| SmtpSettings {
            host: host.clone(),
            port: config.smtp_port,
            user: config.smtp_user.clone(),
            password: config.smtp_password.clone(),
            from: config.smtp_from.clone(),
        });

        Self { smtp }
    }

    pub fn send_approval(&self, leave: &LeaveRequest) -> anyhow::Result<()> {
        let Some(smtp) = &self.smtp else {
            return Ok(());
        };

        self.send(
            smtp,
            &leave.employee_email,
            "Leave Request Approved",
            approval_body(leave),
        )
    }

    pub fn send_rejection(&self, leave: &LeaveRequest) -> anyhow::Result<()> {
        let Some(smtp) = &self.smtp else {
            return Ok(());
        };

        self.send(
            smtp,
            &leave.employee_email,
            "Leave Request Rejected",
            rejection_body(leave),
        )
    }

    fn send(
        &self,
        smtp: &SmtpSettings,
        to: &str,
        subject: &str,
        body: String,
    ) -> anyhow::Result<()> {
        let message = Message::builder()
            .from(smtp.from.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .body(body)?;

        let mut builder = SmtpTransport::starttls_relay(&smtp.host)?.port(smtp.port);
        if let (Some(user), Some(password)) = (&smtp.user, &smtp.password) {
            builder = builder.credentials(Credentials::new(user.clone(), password.clone()));
        }

        builder.build().send(&message)?;

        Ok(())
    }
}

fn leave_details(leave: &LeaveRequest) -> String {
    format!(
        "Leave Details:\n\
         - Type: {}\n\
         - Start Date: {}\n\
         - End Date: {}\n\
         - Days: {}\n\
         - Reason: {}",
        leave.leave_type,
        leave.start_date.format("%B %e, %Y"),
        leave.end_date.format("%B %e, %Y"),
        leave.days,
        leave.reason,
    )
}

fn approval_body(leave: &LeaveRequest) -> String {
    let comment = match leave.manager_comment.as_deref() {
        Some(c) => format!("\nManager's Comment:\n{c}\n"),
        None => String::new(),
    };

    format!(
        "Hello {},\n\nYour leave request has been approved.\n\n{}\n{}\nThank you,\nLeave Management System\n",
        leave.employee_name,
        leave_details(leave),
        comment,
    )
}

fn rejection_body(leave: &LeaveRequest) -> String {
    format!(
        "Hello {},\n\nYour leave request has been rejected.\n\n{}\n\nManager's Comment:\n{}\n\nIf you have any questions, please contact your manager.\n\nThank you,\nLeave Management System\n",
        leave.employee_name,
        leave_details(leave),
        leave.manager_comment.as_deref().unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::leave::{LeaveStatus, LeaveType};
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn sample_leave() -> LeaveRequest {
        let now = Utc::now();
        LeaveRequest {
            id: Uuid::new_v4(),
            employee_id: "emp-1".to_string(),
            employee_name: "Jane Doe".to_string(),
            employee_email: "jane@company.com".to_string(),
            leave_type: LeaveType::Annual,
            reason: "Family vacation abroad".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 9).unwrap(),
            days: 5,
            status: LeaveStatus::Approved,
            manager_comment: Some("Enjoy your trip".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn unconfigured_notifier_is_a_noop() {
        let service = EmailService { smtp: None };
        assert!(service.send_approval(&sample_leave()).is_ok());
        assert!(service.send_rejection(&sample_leave()).is_ok());
    }

    #[test]
    fn approval_body_includes_comment_when_present() {
        let body = approval_body(&sample_leave());
        assert!(body.contains("Jane Doe"));
        assert!(body.contains("Days: 5"));
        assert!(body.contains("Manager's Comment:\nEnjoy your trip"));
    }

    #[test]
    fn approval_body_omits_comment_section_when_absent() {
        let mut leave = sample_leave();
        leave.manager_comment = None;
        let body = approval_body(&leave);
        assert!(!body.contains("Manager's Comment"));
    }
}
