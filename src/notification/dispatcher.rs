//! Notification dispatch: one attempt, no retry

use tracing::{error, info};
use crate::{
    errors::{BlendableError, BlendableResult},
    notification::EmailTransport,
    types::{ComparisonResult, DispatchOutcome, TemplateParams},
};

pub async fn notify<T: EmailTransport>(
    transport: &T,
    email: &str,
    result: Option<&ComparisonResult>,
) -> BlendableResult<DispatchOutcome> {
    let email = email.trim();
    let Some(result) = result else {
        return Ok(DispatchOutcome::Skipped);
    };
    if email.is_empty() {
        return Ok(DispatchOutcome::Skipped);
    }

    let params = TemplateParams::from_comparison(email, result);
    let notification_id = uuid::Uuid::new_v4();

    info!(
        notification_id = %notification_id,
        recipient = %email,
        best_pool = %result.best_pool.name,
        yield_difference = %params.yield_difference,
        "📧 Sending yield notification"
    );

    match transport.send(&params).await {
        Ok(()) => {
            info!(notification_id = %notification_id, "✅ Notification sent");
            Ok(DispatchOutcome::Sent {
                recipient: email.to_string(),
            })
        }
        Err(e) => {
            error!(notification_id = %notification_id, "Error sending email: {:#}", e);
            Err(BlendableError::notification_failed(e))
        }
    }
}
