//! Stage configuration.
//!
//! ```toml
//! [particles]
//! link_distance = 120.0
//! seed = 7
//!
//! [motion]
//! trigger_offset = 100.0
//! toggle_actions = "play none none reverse"
//!
//! [motion.contact]
//! from_scale = 0.0
//! duration = 0.5
//! stagger = 0.1
//! easing = "back.out(1.7)"
//! ```
//!
//! Every table and key is optional. Keys in a region table override that
//! region's own page preset; the rest of the preset is kept.

use std::path::Path;

use serde::Deserialize;

use parallax_motion::{
    Easing, ElementStyle, MotionError, ScrollTrigger, ToggleActions, Tween,
};
use parallax_particles::FieldConfig;

use crate::error::StageResult;

/// How one region animates in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionPreset {
    /// Initial vertical offset.
    pub from_y: f32,
    /// Initial opacity.
    pub from_opacity: f32,
    /// Initial scale.
    pub from_scale: f32,
    /// Seconds per element.
    pub duration: f32,
    /// Seconds between successive elements' starts.
    pub stagger: f32,
    /// Easing curve.
    pub easing: Easing,
}

impl RegionPreset {
    /// Header: drops in from above over one second.
    pub const HEADER: Self = Self {
        from_y: -100.0,
        from_opacity: 0.0,
        from_scale: 1.0,
        duration: 1.0,
        stagger: 0.0,
        easing: Easing::Power3Out,
    };

    /// About: rises in over one second.
    pub const ABOUT: Self = Self {
        from_y: 50.0,
        duration: 1.0,
        ..Self::RISE
    };

    /// Skill chips: quick rise, tight cascade.
    pub const SKILLS: Self = Self {
        stagger: 0.1,
        ..Self::RISE
    };

    /// Project cards: quick rise, looser cascade.
    pub const PROJECTS: Self = Self {
        stagger: 0.2,
        ..Self::RISE
    };

    /// Contact buttons: pop in from nothing with an overshoot.
    pub const CONTACT: Self = Self {
        from_y: 0.0,
        from_opacity: 0.0,
        from_scale: 0.0,
        duration: 0.5,
        stagger: 0.1,
        easing: Easing::BACK_OUT,
    };

    const RISE: Self = Self {
        from_y: 50.0,
        from_opacity: 0.0,
        from_scale: 1.0,
        duration: Tween::DEFAULT_DURATION,
        stagger: 0.0,
        easing: Easing::Power3Out,
    };

    /// Style the elements start from.
    #[must_use]
    pub fn from_style(&self) -> ElementStyle {
        ElementStyle {
            translate_x: 0.0,
            translate_y: self.from_y,
            opacity: self.from_opacity,
            scale: self.from_scale,
        }
    }

    /// Tween from the initial style to rest.
    #[must_use]
    pub fn tween(&self) -> Tween {
        Tween::from_style(self.from_style())
            .with_duration(self.duration)
            .with_easing(self.easing)
    }

    fn validate(&self) -> Result<(), MotionError> {
        self.tween().validate()?;
        if self.stagger < 0.0 || !self.stagger.is_finite() {
            return Err(MotionError::InvalidStagger(self.stagger));
        }
        Ok(())
    }
}

/// A region table as written in TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PresetOverrides {
    from_y: Option<f32>,
    from_opacity: Option<f32>,
    from_scale: Option<f32>,
    duration: Option<f32>,
    stagger: Option<f32>,
    easing: Option<Easing>,
}

impl PresetOverrides {
    fn over(self, base: RegionPreset) -> RegionPreset {
        RegionPreset {
            from_y: self.from_y.unwrap_or(base.from_y),
            from_opacity: self.from_opacity.unwrap_or(base.from_opacity),
            from_scale: self.from_scale.unwrap_or(base.from_scale),
            duration: self.duration.unwrap_or(base.duration),
            stagger: self.stagger.unwrap_or(base.stagger),
            easing: self.easing.unwrap_or(base.easing),
        }
    }
}

/// The `[motion]` table as written in TOML.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct MotionTable {
    trigger_offset: f32,
    end_offset: Option<f32>,
    toggle_actions: ToggleActions,
    once: bool,
    header: PresetOverrides,
    about: PresetOverrides,
    skills: PresetOverrides,
    projects: PresetOverrides,
    contact: PresetOverrides,
}

impl Default for MotionTable {
    fn default() -> Self {
        Self {
            trigger_offset: ScrollTrigger::DEFAULT_START_OFFSET,
            end_offset: None,
            toggle_actions: ToggleActions::default(),
            once: false,
            header: PresetOverrides::default(),
            about: PresetOverrides::default(),
            skills: PresetOverrides::default(),
            projects: PresetOverrides::default(),
            contact: PresetOverrides::default(),
        }
    }
}

impl From<MotionTable> for MotionConfig {
    fn from(table: MotionTable) -> Self {
        Self {
            trigger_offset: table.trigger_offset,
            end_offset: table.end_offset,
            toggle_actions: table.toggle_actions,
            once: table.once,
            header: table.header.over(RegionPreset::HEADER),
            about: table.about.over(RegionPreset::ABOUT),
            skills: table.skills.over(RegionPreset::SKILLS),
            projects: table.projects.over(RegionPreset::PROJECTS),
            contact: table.contact.over(RegionPreset::CONTACT),
        }
    }
}

/// Scroll-triggered animation settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "MotionTable")]
pub struct MotionConfig {
    /// Start line distance above the viewport bottom.
    pub trigger_offset: f32,
    /// Optional end line distance below the viewport top.
    pub end_offset: Option<f32>,
    /// Crossing actions for scroll-gated regions.
    pub toggle_actions: ToggleActions,
    /// Stop observing regions after their first entrance.
    pub once: bool,
    /// Header preset (never scroll-gated).
    pub header: RegionPreset,
    /// About section preset.
    pub about: RegionPreset,
    /// Skills grid preset.
    pub skills: RegionPreset,
    /// Projects grid preset.
    pub projects: RegionPreset,
    /// Contact buttons preset.
    pub contact: RegionPreset,
}

impl MotionConfig {
    /// The trigger every scroll-gated region uses.
    #[must_use]
    pub fn trigger(&self) -> ScrollTrigger {
        let mut trigger = ScrollTrigger::new(self.trigger_offset).with_actions(self.toggle_actions);
        if let Some(end) = self.end_offset {
            trigger = trigger.with_end_offset(end);
        }
        if self.once {
            trigger = trigger.once();
        }
        trigger
    }

    /// Checks offsets and every preset.
    ///
    /// # Errors
    ///
    /// Returns the first [`MotionError`] found.
    pub fn validate(&self) -> Result<(), MotionError> {
        if !self.trigger_offset.is_finite() {
            return Err(MotionError::InvalidOffset(self.trigger_offset));
        }
        if let Some(end) = self.end_offset.filter(|end| !end.is_finite()) {
            return Err(MotionError::InvalidOffset(end));
        }
        for preset in [
            &self.header,
            &self.about,
            &self.skills,
            &self.projects,
            &self.contact,
        ] {
            preset.validate()?;
        }
        Ok(())
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            trigger_offset: ScrollTrigger::DEFAULT_START_OFFSET,
            end_offset: None,
            toggle_actions: ToggleActions::default(),
            once: false,
            header: RegionPreset::HEADER,
            about: RegionPreset::ABOUT,
            skills: RegionPreset::SKILLS,
            projects: RegionPreset::PROJECTS,
            contact: RegionPreset::CONTACT,
        }
    }
}

/// Top-level stage configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Particle field tuning.
    pub particles: FieldConfig,
    /// Section animation tuning.
    pub motion: MotionConfig,
    /// Host event queue capacity.
    pub event_capacity: usize,
}

impl StageConfig {
    /// Default host event queue capacity.
    pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

    /// Parses and validates a TOML config.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::Parse`](crate::StageError::Parse) for malformed
    /// TOML, otherwise any validation error.
    pub fn from_toml_str(source: &str) -> StageResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::Io`](crate::StageError::Io) if the file can't be
    /// read, otherwise as [`StageConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> StageResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Checks every section.
    ///
    /// # Errors
    ///
    /// Returns the first field or motion error found.
    pub fn validate(&self) -> StageResult<()> {
        self.particles.validate()?;
        self.motion.validate()?;
        Ok(())
    }
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            particles: FieldConfig::default(),
            motion: MotionConfig::default(),
            event_capacity: Self::DEFAULT_EVENT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StageError;
    use parallax_motion::ToggleAction;

    #[test]
    fn test_defaults_match_page_presets() {
        let config = StageConfig::default();
        assert!(config.validate().is_ok());

        let motion = &config.motion;
        assert_eq!(motion.header.from_style(), ElementStyle::offset_y(-100.0));
        assert_eq!(motion.header.duration, 1.0);
        assert_eq!(motion.about.duration, 1.0);
        assert_eq!(motion.skills.stagger, 0.1);
        assert_eq!(motion.projects.stagger, 0.2);
        assert_eq!(motion.contact.from_style(), ElementStyle::collapsed());
        assert_eq!(motion.contact.easing, Easing::BACK_OUT);
        assert_eq!(motion.trigger().start_offset, 100.0);
        assert_eq!(motion.trigger().actions, ToggleActions::PLAY_REVERSE);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(StageConfig::from_toml_str("").unwrap(), StageConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = StageConfig::from_toml_str(
            r#"
            [particles]
            link_distance = 150.0
            max_particles = 500
            seed = 42

            [motion]
            trigger_offset = 200.0
            toggle_actions = "play reverse play reverse"
            once = true

            [motion.skills]
            stagger = 0.05
            easing = "expo.out"
            "#,
        )
        .unwrap();

        assert_eq!(config.particles.link_distance, 150.0);
        assert_eq!(config.particles.max_particles, Some(500));
        assert_eq!(config.particles.size_min, 1.0);

        let trigger = config.motion.trigger();
        assert_eq!(trigger.start_offset, 200.0);
        assert_eq!(trigger.actions.on_leave, ToggleAction::Reverse);
        assert!(trigger.once);

        assert_eq!(config.motion.skills.stagger, 0.05);
        assert_eq!(config.motion.skills.easing, Easing::ExponentialOut);
        // Untouched presets keep the page values.
        assert_eq!(config.motion.projects, RegionPreset::PROJECTS);
    }

    #[test]
    fn test_bad_toggle_actions_rejected() {
        let err = StageConfig::from_toml_str(
            r#"
            [motion]
            toggle_actions = "play none"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, StageError::Parse(_)));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let err = StageConfig::from_toml_str(
            r#"
            [motion.about]
            duration = -1.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            StageError::Motion(MotionError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_bad_particle_config_rejected() {
        let err = StageConfig::from_toml_str(
            r#"
            [particles]
            size_min = 0.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, StageError::Field(_)));
    }

    #[test]
    fn test_partial_region_table_keeps_own_preset() {
        let config = StageConfig::from_toml_str(
            r#"
            [motion.header]
            duration = 2.0
            "#,
        )
        .unwrap();

        let header = config.motion.header;
        assert_eq!(header.duration, 2.0);
        assert_eq!(header.from_y, -100.0);
        assert_eq!(header.easing, Easing::Power3Out);
        assert_eq!(config.motion.about, RegionPreset::ABOUT);
    }

    #[test]
    fn test_negative_stagger_rejected() {
        let err = StageConfig::from_toml_str(
            r#"
            [motion.skills]
            stagger = -0.1
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            StageError::Motion(MotionError::InvalidStagger(_))
        ));
    }

    #[test]
    fn test_non_finite_offsets_rejected() {
        let mut config = StageConfig::default();
        config.motion.end_offset = Some(f32::INFINITY);
        assert!(matches!(
            config.validate(),
            Err(StageError::Motion(MotionError::InvalidOffset(_)))
        ));

        let err = StageConfig::from_toml_str(
            r#"
            [motion]
            trigger_offset = nan
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            StageError::Motion(MotionError::InvalidOffset(_))
        ));

        config.motion.end_offset = Some(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unsafe_particle_ranges_rejected() {
        for source in ["[particles]\nsize_max = inf", "[particles]\nspeed = 3e38"] {
            let err = StageConfig::from_toml_str(source).unwrap_err();
            assert!(matches!(err, StageError::Field(_)), "{source}");
        }
    }
}
