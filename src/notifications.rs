/// Cross-platform notification support
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Body text for the countdown-finished notification
fn timer_done_message(item_count: usize) -> String {
    match item_count {
        0 => "Time's up!".to_string(),
        1 => "Time's up! 1 item on the list".to_string(),
        n => format!("Time's up! {} items on the list", n),
    }
}

/// Send a notification when the countdown reaches zero
pub fn notify_timer_done(item_count: usize) {
    let message = timer_done_message(item_count);

    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "Too Fast ToDorious""#,
            message.replace('"', "\\\"")
        );

        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
            log::warn!("Notification failed: {}", e);
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        log::debug!("Notification skipped on this platform: {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_done_message() {
        assert_eq!(timer_done_message(0), "Time's up!");
        assert_eq!(timer_done_message(1), "Time's up! 1 item on the list");
        assert_eq!(timer_done_message(3), "Time's up! 3 items on the list");
    }
}
