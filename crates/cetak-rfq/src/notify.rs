// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SMTP notifier for new quote requests.
//!
//! Sends a plain-text summary of each submission to the configured sales
//! address. Construction fails fast on bad config; send failures surface as
//! `Submission` errors and are handled as best-effort by the caller.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use cetak_core::CetakError;
use cetak_core::traits::adapter::ServiceAdapter;
use cetak_core::traits::notify::Notifier;
use cetak_core::types::{AdapterType, HealthStatus, RfqSubmission};

use cetak_config::model::RfqConfig;

/// Sends quote-request notifications over SMTP.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sales: Mailbox,
    sender: Mailbox,
}

impl SmtpNotifier {
    /// Builds a notifier from config, or `None` when notifications are
    /// disabled or no relay host is set.
    ///
    /// Enabled-but-incomplete config is a `Config` error so the gap shows up
    /// at startup instead of silently dropping every notification.
    pub fn from_config(config: &RfqConfig) -> Result<Option<Self>, CetakError> {
        if !config.notifications_enabled {
            return Ok(None);
        }
        let Some(host) = config.smtp_host.as_deref() else {
            return Ok(None);
        };
        let sales_email = config.sales_email.as_deref().ok_or_else(|| {
            CetakError::Config("rfq.sales_email is required when notifications are enabled".into())
        })?;

        let sales: Mailbox = sales_email
            .parse()
            .map_err(|_| CetakError::Config(format!("invalid rfq.sales_email: {sales_email}")))?;
        let sender: Mailbox = format!("Cetak Assistant <no-reply@{host}>")
            .parse()
            .map_err(|_| CetakError::Config(format!("invalid sender address for host {host}")))?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|err| CetakError::Config(format!("invalid smtp relay {host}: {err}")))?
            .port(config.smtp_port);
        if let (Some(user), Some(pass)) = (&config.smtp_username, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Some(Self {
            transport: builder.build(),
            sales,
            sender,
        }))
    }

    fn body_for(submission: &RfqSubmission) -> String {
        let mut body = format!(
            "A new quote request was submitted.\n\n\
             Reference:       {}\n\
             Submitted:       {}\n\
             Customer:        {} <{}>\n\
             Project:         {}\n\
             Quantity:        {}\n\
             Specifications:  {}\n",
            submission.id,
            submission.created_at.to_rfc3339(),
            submission.user_name,
            submission.user_email,
            submission.project_name,
            submission.quantity,
            submission.size_specifications,
        );
        if let Some(category) = &submission.product_category {
            body.push_str(&format!("Category:        {category}\n"));
        }
        if let Some(deadline) = &submission.deadline {
            body.push_str(&format!("Deadline:        {deadline}\n"));
        }
        if let (Some(min), Some(max)) =
            (submission.estimated_cost_min, submission.estimated_cost_max)
        {
            body.push_str(&format!(
                "Estimate:        {min} - {max} {}\n",
                submission.currency
            ));
        }
        if !submission.design_file_refs.is_empty() {
            body.push_str("\nDesign files:\n");
            for reference in &submission.design_file_refs {
                body.push_str(&format!("  - {reference}\n"));
            }
        }
        if let Some(notes) = &submission.additional_notes {
            body.push_str(&format!("\nNotes:\n{notes}\n"));
        }
        body
    }

    fn connection_status(probe: Result<bool, String>) -> HealthStatus {
        match probe {
            Ok(true) => HealthStatus::Healthy,
            Ok(false) => HealthStatus::Unhealthy("smtp connection test failed".to_string()),
            Err(err) => HealthStatus::Degraded(err),
        }
    }
}

#[async_trait]
impl ServiceAdapter for SmtpNotifier {
    fn name(&self) -> &str {
        "smtp-notifier"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Notifier
    }

    async fn health_check(&self) -> Result<HealthStatus, CetakError> {
        let probe = self
            .transport
            .test_connection()
            .await
            .map_err(|err| err.to_string());
        Ok(Self::connection_status(probe))
    }

    async fn shutdown(&self) -> Result<(), CetakError> {
        Ok(())
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify_rfq(&self, submission: &RfqSubmission) -> Result<(), CetakError> {
        let message = Message::builder()
            .from(self.sender.clone())
            .to(self.sales.clone())
            .subject(format!("New quote request: {}", submission.project_name))
            .body(Self::body_for(submission))
            .map_err(|err| CetakError::Submission {
                message: "could not build notification email".to_string(),
                source: Some(Box::new(err)),
            })?;

        self.transport
            .send(message)
            .await
            .map(|_| ())
            .map_err(|err| CetakError::Submission {
                message: "notification email could not be sent".to_string(),
                source: Some(Box::new(err)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use cetak_core::types::{Language, RfqStatus};

    fn submission() -> RfqSubmission {
        RfqSubmission {
            id: "rfq-1".into(),
            user_name: "Siti Rahma".into(),
            user_email: "siti@example.com".into(),
            project_name: "Company banners".into(),
            product_category: Some("banners".into()),
            size_specifications: "3m x 1m".into(),
            quantity: 10,
            deadline: Some("2026-04-01".into()),
            design_file_refs: vec!["uploads/rfq/rfq-1/design_0.png".into()],
            additional_notes: Some("Outdoor use".into()),
            estimated_cost_min: Some(450_000),
            estimated_cost_max: Some(800_000),
            currency: "IDR".into(),
            language: Language::Id,
            status: RfqStatus::Pending,
            created_at: Utc.with_ymd_and_hms(2026, 3, 2, 8, 30, 0).unwrap(),
        }
    }

    #[test]
    fn disabled_config_yields_no_notifier() {
        let config = RfqConfig::default();
        assert!(SmtpNotifier::from_config(&config).unwrap().is_none());
    }

    #[test]
    fn enabled_without_host_yields_no_notifier() {
        let config = RfqConfig {
            notifications_enabled: true,
            ..RfqConfig::default()
        };
        assert!(SmtpNotifier::from_config(&config).unwrap().is_none());
    }

    #[test]
    fn enabled_without_sales_email_is_a_config_error() {
        let config = RfqConfig {
            notifications_enabled: true,
            smtp_host: Some("smtp.example.com".into()),
            ..RfqConfig::default()
        };
        let err = SmtpNotifier::from_config(&config).err().unwrap();
        assert!(matches!(err, CetakError::Config(msg) if msg.contains("sales_email")));
    }

    #[test]
    fn complete_config_builds_a_notifier() {
        let config = RfqConfig {
            notifications_enabled: true,
            smtp_host: Some("smtp.example.com".into()),
            smtp_username: Some("sales".into()),
            smtp_password: Some("secret".into()),
            sales_email: Some("sales@emranghanimasahi.net".into()),
            ..RfqConfig::default()
        };
        let notifier = SmtpNotifier::from_config(&config).unwrap().unwrap();
        assert_eq!(notifier.name(), "smtp-notifier");
    }

    #[test]
    fn connection_probe_maps_to_health_status() {
        assert_eq!(
            SmtpNotifier::connection_status(Ok(true)),
            HealthStatus::Healthy
        );
        assert!(matches!(
            SmtpNotifier::connection_status(Ok(false)),
            HealthStatus::Unhealthy(reason) if reason.contains("connection test")
        ));
        assert!(matches!(
            SmtpNotifier::connection_status(Err("relay down".to_string())),
            HealthStatus::Degraded(reason) if reason == "relay down"
        ));
    }

    #[test]
    fn body_includes_all_filled_fields() {
        let body = SmtpNotifier::body_for(&submission());
        assert!(body.contains("rfq-1"));
        assert!(body.contains("Siti Rahma <siti@example.com>"));
        assert!(body.contains("Company banners"));
        assert!(body.contains("450000 - 800000 IDR"));
        assert!(body.contains("design_0.png"));
        assert!(body.contains("Outdoor use"));
    }

    #[test]
    fn body_omits_empty_sections() {
        let mut sub = submission();
        sub.product_category = None;
        sub.deadline = None;
        sub.design_file_refs.clear();
        sub.additional_notes = None;
        sub.estimated_cost_min = None;

        let body = SmtpNotifier::body_for(&sub);
        assert!(!body.contains("Category:"));
        assert!(!body.contains("Deadline:"));
        assert!(!body.contains("Design files:"));
        assert!(!body.contains("Notes:"));
    }
}
