//! Scroll triggers: where a region's lines are and what crossing them does.
//!
//! ```text
//!            viewport top ─────────────  ← end line (optional)
//!
//!                          Active
//!
//!  viewport bottom - offset ───────────  ← start line
//!                          Before
//!         viewport bottom ─────────────
//! ```
//!
//! The region's top edge is compared against the start line and its bottom
//! edge against the end line. Crossings map onto four action slots:
//! enter, leave, enter-back, leave-back.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::MotionError;
use crate::probe::ElementBounds;

/// What a crossing does to the region's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// Play forward from the current position.
    Play,
    /// Freeze.
    Pause,
    /// Continue in the last direction.
    Resume,
    /// Play backward from the current position.
    Reverse,
    /// Jump to start and play forward.
    Restart,
    /// Jump to start and stop.
    Reset,
    /// Jump to end and stop.
    Complete,
    /// Do nothing.
    None,
}

impl FromStr for ToggleAction {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "play" => Ok(Self::Play),
            "pause" => Ok(Self::Pause),
            "resume" => Ok(Self::Resume),
            "reverse" => Ok(Self::Reverse),
            "restart" => Ok(Self::Restart),
            "reset" => Ok(Self::Reset),
            "complete" => Ok(Self::Complete),
            "none" => Ok(Self::None),
            other => Err(MotionError::InvalidToggleAction(other.to_string())),
        }
    }
}

impl fmt::Display for ToggleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Reverse => "reverse",
            Self::Restart => "restart",
            Self::Reset => "reset",
            Self::Complete => "complete",
            Self::None => "none",
        };
        f.write_str(s)
    }
}

/// A line crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// Scrolled down past the start line.
    Enter,
    /// Scrolled down past the end line.
    Leave,
    /// Scrolled up past the end line.
    EnterBack,
    /// Scrolled up past the start line.
    LeaveBack,
}

/// Actions for each crossing, in `enter leave enter-back leave-back` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct ToggleActions {
    /// Start line crossed downward.
    pub on_enter: ToggleAction,
    /// End line crossed downward.
    pub on_leave: ToggleAction,
    /// End line crossed upward.
    pub on_enter_back: ToggleAction,
    /// Start line crossed upward.
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    /// Play on enter, reverse on leaving back above the start line.
    pub const PLAY_REVERSE: Self = Self {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::Reverse,
    };

    /// Play once on enter and ignore everything else.
    pub const PLAY_ONCE: Self = Self {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::None,
    };

    /// Action for a crossing.
    #[must_use]
    pub fn for_crossing(&self, crossing: Crossing) -> ToggleAction {
        match crossing {
            Crossing::Enter => self.on_enter,
            Crossing::Leave => self.on_leave,
            Crossing::EnterBack => self.on_enter_back,
            Crossing::LeaveBack => self.on_leave_back,
        }
    }
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self::PLAY_REVERSE
    }
}

impl FromStr for ToggleActions {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [enter, leave, enter_back, leave_back] = parts.as_slice() else {
            return Err(MotionError::InvalidToggleActions(s.to_string()));
        };
        Ok(Self {
            on_enter: enter.parse()?,
            on_leave: leave.parse()?,
            on_enter_back: enter_back.parse()?,
            on_leave_back: leave_back.parse()?,
        })
    }
}

impl TryFrom<String> for ToggleActions {
    type Error = MotionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for ToggleActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.on_enter, self.on_leave, self.on_enter_back, self.on_leave_back
        )
    }
}

/// Where a region sits relative to its trigger lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerZone {
    /// Top edge still below the start line.
    #[default]
    Before,
    /// Between the lines.
    Active,
    /// Bottom edge above the end line.
    After,
}

impl TriggerZone {
    fn rank(self) -> u8 {
        match self {
            Self::Before => 0,
            Self::Active => 1,
            Self::After => 2,
        }
    }

    /// Crossings passed when moving from `self` to `next`, in order.
    ///
    /// A jump across both lines in one scroll step yields two crossings.
    #[must_use]
    pub fn crossings_to(self, next: Self) -> &'static [Crossing] {
        match (self.rank(), next.rank()) {
            (0, 1) => &[Crossing::Enter],
            (0, 2) => &[Crossing::Enter, Crossing::Leave],
            (1, 2) => &[Crossing::Leave],
            (2, 1) => &[Crossing::EnterBack],
            (2, 0) => &[Crossing::EnterBack, Crossing::LeaveBack],
            (1, 0) => &[Crossing::LeaveBack],
            _ => &[],
        }
    }
}

/// Scroll trigger for one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTrigger {
    /// Start line distance above the viewport bottom.
    pub start_offset: f32,
    /// End line distance below the viewport top. `None` disables the end line.
    pub end_offset: Option<f32>,
    /// Crossing actions.
    pub actions: ToggleActions,
    /// Stop observing after the first enter.
    pub once: bool,
}

impl ScrollTrigger {
    /// Default start line: 100 units above the viewport bottom.
    pub const DEFAULT_START_OFFSET: f32 = 100.0;

    /// A trigger that plays on enter and reverses on leave-back.
    #[must_use]
    pub fn new(start_offset: f32) -> Self {
        Self {
            start_offset,
            end_offset: None,
            actions: ToggleActions::default(),
            once: false,
        }
    }

    /// Sets the actions.
    #[must_use]
    pub fn with_actions(mut self, actions: ToggleActions) -> Self {
        self.actions = actions;
        self
    }

    /// Enables the end line.
    #[must_use]
    pub fn with_end_offset(mut self, end_offset: f32) -> Self {
        self.end_offset = Some(end_offset);
        self
    }

    /// Makes the trigger one-shot.
    #[must_use]
    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }

    /// Classifies element bounds against this trigger's lines.
    #[must_use]
    pub fn zone(&self, bounds: ElementBounds, viewport_height: f32) -> TriggerZone {
        let start_line = viewport_height - self.start_offset;
        if bounds.top > start_line {
            return TriggerZone::Before;
        }
        match self.end_offset {
            Some(end_line) if bounds.bottom < end_line => TriggerZone::After,
            _ => TriggerZone::Active,
        }
    }
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new(Self::DEFAULT_START_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toggle_actions() {
        let actions: ToggleActions = "play none none reverse".parse().unwrap();
        assert_eq!(actions, ToggleActions::PLAY_REVERSE);
        assert_eq!(actions.to_string(), "play none none reverse");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "play none".parse::<ToggleActions>(),
            Err(MotionError::InvalidToggleActions("play none".into()))
        );
        assert_eq!(
            "play none none rewind".parse::<ToggleActions>(),
            Err(MotionError::InvalidToggleAction("rewind".into()))
        );
    }

    #[test]
    fn test_deserialize_from_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            actions: ToggleActions,
        }
        let wrapper: Wrapper = toml::from_str(r#"actions = "restart pause resume reset""#).unwrap();
        assert_eq!(wrapper.actions.on_enter, ToggleAction::Restart);
        assert_eq!(wrapper.actions.on_leave_back, ToggleAction::Reset);
    }

    #[test]
    fn test_zone_against_start_line() {
        let trigger = ScrollTrigger::default();
        // Viewport 800: start line at 700.
        assert_eq!(trigger.zone(ElementBounds::new(750.0, 100.0), 800.0), TriggerZone::Before);
        assert_eq!(trigger.zone(ElementBounds::new(650.0, 100.0), 800.0), TriggerZone::Active);
        // No end line: scrolled far past still counts as active.
        assert_eq!(trigger.zone(ElementBounds::new(-900.0, 100.0), 800.0), TriggerZone::Active);
    }

    #[test]
    fn test_zone_with_end_line() {
        let trigger = ScrollTrigger::default().with_end_offset(0.0);
        assert_eq!(trigger.zone(ElementBounds::new(-150.0, 100.0), 800.0), TriggerZone::After);
    }

    #[test]
    fn test_fast_scroll_crosses_both_lines() {
        assert_eq!(
            TriggerZone::Before.crossings_to(TriggerZone::After),
            &[Crossing::Enter, Crossing::Leave]
        );
        assert!(TriggerZone::Active.crossings_to(TriggerZone::Active).is_empty());
    }
}
