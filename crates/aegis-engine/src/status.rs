//! Human-readable shield status.

use crate::state::ShieldState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Headline condition shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum StatusLine {
    /// Down after an overload.
    Cooldown {
        /// Seconds until the shield may come back.
        seconds_remaining: f64,
    },
    /// No power on the last tick.
    Offline,
    /// Powered, not projecting.
    Idle,
    /// Projecting.
    Active,
}

/// Snapshot of an emitter for inspection panels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Headline condition.
    pub line: StatusLine,
    /// Machine state after the last tick.
    pub state: ShieldState,
    /// `Some(target)` while manual override is on.
    pub manual: Option<bool>,
    /// Power an active shield of the current size would draw.
    pub draw_watts: f64,
    /// Wall cells in the current geometry.
    pub border_cells: usize,
    /// Region cells in the current geometry.
    pub region_cells: usize,
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cooldown { seconds_remaining } => {
                write!(f, "COOLDOWN ({seconds_remaining:.1}s remaining)")
            }
            Self::Offline => write!(f, "Offline (No Power)"),
            Self::Idle => write!(f, "Idle"),
            Self::Active => write!(f, "Active"),
        }
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status: {}", self.line)?;
        match self.manual {
            Some(true) => write!(f, " (Manual ON)")?,
            Some(false) => write!(f, " (Manual OFF)")?,
            None => {}
        }
        writeln!(f)?;
        writeln!(f, "Idle Draw: {:.0} W", self.draw_watts)?;
        match self.line {
            StatusLine::Cooldown { seconds_remaining } => {
                write!(f, "Cooldown: {seconds_remaining:.1}s remaining")
            }
            _ => write!(f, "Ready to intercept projectiles."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(line: StatusLine, manual: Option<bool>) -> StatusReport {
        StatusReport {
            line,
            state: ShieldState::Idle,
            manual,
            draw_watts: 600.0,
            border_cells: 12,
            region_cells: 16,
        }
    }

    #[test]
    fn idle_rendering() {
        let text = report(StatusLine::Idle, None).to_string();
        assert_eq!(
            text,
            "Status: Idle\nIdle Draw: 600 W\nReady to intercept projectiles."
        );
    }

    #[test]
    fn cooldown_rendering_with_manual_suffix() {
        let text = report(
            StatusLine::Cooldown {
                seconds_remaining: 83.3,
            },
            Some(false),
        )
        .to_string();
        assert!(text.starts_with("Status: COOLDOWN (83.3s remaining) (Manual OFF)\n"));
        assert!(text.ends_with("Cooldown: 83.3s remaining"));
    }

    #[test]
    fn offline_line() {
        assert_eq!(StatusLine::Offline.to_string(), "Offline (No Power)");
        assert!(report(StatusLine::Active, Some(true))
            .to_string()
            .contains("Active (Manual ON)"));
    }
}
