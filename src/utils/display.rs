//! Display and printing utilities

use chrono::{Datelike, Utc};
use std::time::Instant;
use tracing::{error, info, warn};
use crate::{
    session::Session,
    types::{ComparisonResult, NotifyState, Pool},
    utils::{format_apy, format_signed_delta},
};

pub const APP_TITLE: &str = "Blendable";
pub const APP_SUBTITLE: &str = "Yield Optimizer for Blend Protocol";
pub const BLEND_LINK_TEXT: &str = "blend.xlm.sh";

pub fn pool_option_label(pool: &Pool) -> String {
    format!("{} ({}% APY)", pool.name, format_apy(pool.apy))
}

pub fn comparison_lines(result: &ComparisonResult) -> [String; 3] {
    [
        format!(
            "You're in {} Pool ({}% APY).",
            result.current_pool.name,
            format_apy(result.current_pool.apy)
        ),
        format!(
            "Best Pool: {} Pool ({}% APY).",
            result.best_pool.name,
            format_apy(result.best_pool.apy)
        ),
        format!(
            "You could earn {}% more by switching.",
            format_signed_delta(result.yield_difference)
        ),
    ]
}

pub fn check_button_caption(loading: bool) -> &'static str {
    if loading { "Loading..." } else { "Check for Better Yields" }
}

pub fn notify_button_caption(state: NotifyState) -> &'static str {
    match state {
        NotifyState::Sending => "Sending...",
        NotifyState::Sent => "Sent!",
        NotifyState::Idle | NotifyState::Error => "Notify Me",
    }
}

/// Confirmation banner while the sent indicator is showing.
pub fn confirmation_message(session: &Session, now: Instant) -> Option<String> {
    if !session.is_email_sent(now) {
        return None;
    }
    let recipient = if session.email().is_empty() {
        session.last_sent_email()
    } else {
        session.email()
    };
    Some(format!("Email notification sent successfully to {}!", recipient))
}

pub fn footer(year: i32) -> String {
    format!(
        "© {} {}. Not affiliated with Blend Protocol. {}",
        year, APP_TITLE, BLEND_LINK_TEXT
    )
}

pub fn print_header() {
    info!("🅱️  {} - {}", APP_TITLE, APP_SUBTITLE);
}

pub fn print_footer() {
    info!("{}", footer(Utc::now().year()));
}

pub fn print_pool_list(pools: &[Pool], selected: &str) {
    info!("📋 Select Your Current Pool:");
    for pool in pools {
        let marker = if pool.id == selected { "➤" } else { " " };
        info!(" {} [{}] {}  TVL ${}  ({}/{})",
            marker, pool.id, pool_option_label(pool), pool.tvl, pool.token0, pool.token1);
    }
}

pub fn print_comparison(result: &ComparisonResult) {
    let [current, best, difference] = comparison_lines(result);
    warn!("\n📊 Yield Comparison");
    warn!("   {}", current);
    warn!("   {}", best);
    warn!("   {}", difference);
    if result.is_already_best() {
        info!("🏆 {} already has the best yield", result.current_pool.name);
    }
}

pub fn print_session_status(session: &Session, now: Instant) {
    if let Some(current) = session.current_pool() {
        info!("📍 Current pool: {}", pool_option_label(current));
    }
    info!("   [{}]{}",
        check_button_caption(session.is_loading()),
        if session.can_check() { "" } else { " (disabled)" });

    if let Some(message) = session.error() {
        error!("❌ {}", message);
    }

    if let Some(result) = session.comparison_result() {
        print_comparison(result);
        info!("📧 Get Notified: enter your email to receive notifications about yield opportunities.");
        info!("   Email: {}", if session.email().is_empty() { "your@email.com" } else { session.email() });
        info!("   [{}]{}",
            notify_button_caption(session.notify_state(now)),
            if session.can_notify() { "" } else { " (disabled)" });
    }

    if let Some(message) = confirmation_message(session, now) {
        info!("✅ {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use crate::{pools::mock_pools, yields::compare};

    #[test]
    fn test_pool_option_label() {
        let pools = mock_pools();
        assert_eq!(pool_option_label(&pools[0]), "ETH-USDC (3.2% APY)");
        assert_eq!(pool_option_label(&pools[4]), "MATIC-USDC (3.9% APY)");
    }

    #[test]
    fn test_comparison_lines() {
        let result = compare(&mock_pools(), "1").unwrap();
        let lines = comparison_lines(&result);
        assert_eq!(lines[0], "You're in ETH-USDC Pool (3.2% APY).");
        assert_eq!(lines[1], "Best Pool: XLM-USDC Pool (5.1% APY).");
        assert_eq!(lines[2], "You could earn +1.9% more by switching.");
    }

    #[test]
    fn test_comparison_lines_without_gain_has_no_plus() {
        let result = compare(&mock_pools(), "2").unwrap();
        assert_eq!(comparison_lines(&result)[2], "You could earn 0.0% more by switching.");
    }

    #[test]
    fn test_button_captions() {
        assert_eq!(check_button_caption(true), "Loading...");
        assert_eq!(check_button_caption(false), "Check for Better Yields");
        assert_eq!(notify_button_caption(NotifyState::Sending), "Sending...");
        assert_eq!(notify_button_caption(NotifyState::Sent), "Sent!");
        assert_eq!(notify_button_caption(NotifyState::Error), "Notify Me");
        assert_eq!(notify_button_caption(NotifyState::Idle), "Notify Me");
    }

    #[test]
    fn test_no_confirmation_before_send() {
        let mut session = Session::new(Duration::from_secs(3));
        session.load().unwrap();
        assert!(confirmation_message(&session, Instant::now()).is_none());
    }

    #[tokio::test]
    async fn test_confirmation_names_last_recipient() {
        use crate::notification::dispatcher::tests::FakeTransport;

        let transport = FakeTransport::default();
        let mut session = Session::new(Duration::from_secs(3));
        session.load().unwrap();
        session.check_for_better_yields();
        session.set_email("user@example.com");
        session.send_notification(&transport).await;

        let now = Instant::now();
        assert_eq!(
            confirmation_message(&session, now).as_deref(),
            Some("Email notification sent successfully to user@example.com!")
        );
        assert!(confirmation_message(&session, now + Duration::from_secs(3)).is_none());
    }

    #[test]
    fn test_footer() {
        assert_eq!(
            footer(2026),
            "© 2026 Blendable. Not affiliated with Blend Protocol. blend.xlm.sh"
        );
    }
}
