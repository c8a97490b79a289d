//! Output formatting for CLI commands

use anyhow::Result;

use crate::slack::SlackMessage;

/// Pretty-print a composed message as the JSON body the webhook receives
pub fn format_message(message: &SlackMessage) -> Result<String> {
    Ok(serde_json::to_string_pretty(message)?)
}
