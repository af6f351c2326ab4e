//! Session state: the single state bag mutated by user actions

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use crate::{
    errors::{BlendableError, BlendableResult},
    notification::{notify, EmailTransport},
    pools::load_catalog,
    types::{ComparisonResult, DispatchOutcome, NotifyState, Pool},
    yields::compare,
};

/// Holds the busy flag for the duration of a send; clears it on drop, including cancellation.
struct BusyFlag<'a> {
    flag: &'a mut bool,
}

impl<'a> BusyFlag<'a> {
    fn raise(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for BusyFlag<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}

#[derive(Debug)]
pub struct Session {
    pools: Vec<Pool>,
    selected_pool: String,
    loading: bool,
    comparison_result: Option<ComparisonResult>,
    email: String,
    email_sent_at: Option<Instant>,
    error: Option<String>,
    last_sent_email: String,
    confirmation_delay: Duration,
}

impl Session {
    pub fn new(confirmation_delay: Duration) -> Self {
        Self {
            pools: Vec::new(),
            selected_pool: String::new(),
            loading: false,
            comparison_result: None,
            email: String::new(),
            email_sent_at: None,
            error: None,
            last_sent_email: String::new(),
            confirmation_delay,
        }
    }

    /// Fills the catalog and selects its first pool.
    pub fn load(&mut self) -> BlendableResult<()> {
        self.loading = true;
        let loaded = load_catalog();
        self.loading = false;

        let catalog = loaded?;
        self.selected_pool = catalog.default_selection().unwrap_or_default().to_string();
        self.pools = catalog.pools().to_vec();
        Ok(())
    }

    pub fn select_pool(&mut self, id: &str) -> BlendableResult<()> {
        if !self.pools.iter().any(|pool| pool.id == id) {
            return Err(BlendableError::UnknownPool { id: id.to_string() });
        }
        if self.selected_pool != id {
            debug!("Selected pool {}", id);
            self.selected_pool = id.to_string();
            // A result computed for the previous pool no longer applies.
            self.comparison_result = None;
        }
        Ok(())
    }

    pub fn check_for_better_yields(&mut self) -> Option<&ComparisonResult> {
        if self.selected_pool.is_empty() || self.pools.is_empty() {
            return None;
        }
        // Unknown selection leaves the previous result untouched.
        if let Some(result) = compare(&self.pools, &self.selected_pool) {
            info!(
                current = %result.current_pool.name,
                best = %result.best_pool.name,
                difference = %result.yield_difference,
                "🔍 Compared yields"
            );
            self.comparison_result = Some(result);
        }
        self.comparison_result.as_ref()
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    /// Sends the current comparison to the entered address. At most one send is in flight.
    pub async fn send_notification<T: EmailTransport>(&mut self, transport: &T) -> NotifyState {
        if self.email.trim().is_empty() || self.comparison_result.is_none() {
            return self.notify_state(Instant::now());
        }
        if self.loading {
            warn!("Notification already in progress");
            return NotifyState::Sending;
        }

        self.error = None;

        let outcome = {
            let _busy = BusyFlag::raise(&mut self.loading);
            notify(transport, &self.email, self.comparison_result.as_ref()).await
        };

        match outcome {
            Ok(DispatchOutcome::Sent { recipient }) => {
                self.email_sent_at = Some(Instant::now());
                self.last_sent_email = recipient;
                self.email.clear();
                NotifyState::Sent
            }
            Ok(DispatchOutcome::Skipped) => NotifyState::Idle,
            Err(e) => {
                self.error = Some(e.to_string());
                NotifyState::Error
            }
        }
    }

    pub fn is_email_sent(&self, now: Instant) -> bool {
        self.email_sent_at
            .map(|sent_at| now.saturating_duration_since(sent_at) < self.confirmation_delay)
            .unwrap_or(false)
    }

    /// Drops the sent confirmation once its display delay has passed.
    pub fn clear_expired_confirmation(&mut self, now: Instant) {
        if self.email_sent_at.is_some() && !self.is_email_sent(now) {
            self.email_sent_at = None;
        }
    }

    pub fn notify_state(&self, now: Instant) -> NotifyState {
        if self.loading {
            NotifyState::Sending
        } else if self.is_email_sent(now) {
            NotifyState::Sent
        } else if self.error.is_some() {
            NotifyState::Error
        } else {
            NotifyState::Idle
        }
    }

    pub fn can_check(&self) -> bool {
        !self.loading && !self.selected_pool.is_empty()
    }

    pub fn can_notify(&self) -> bool {
        !self.loading && !self.email.trim().is_empty()
    }

    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    pub fn selected_pool(&self) -> &str {
        &self.selected_pool
    }

    pub fn current_pool(&self) -> Option<&Pool> {
        self.pools.iter().find(|pool| pool.id == self.selected_pool)
    }

    pub fn comparison_result(&self) -> Option<&ComparisonResult> {
        self.comparison_result.as_ref()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn last_sent_email(&self) -> &str {
        &self.last_sent_email
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
