use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rejected reveal configuration. Raised when the wrapper is set up, never on a crossing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("threshold {0} is outside the range 0.0..=1.0")]
    ThresholdOutOfRange(f64),
    #[error("reveal delay must not be negative, got {0}ms")]
    NegativeDelay(i64),
    #[error("reveal delay of {0}ms does not fit a browser timer")]
    DelayOutOfRange(i64),
    #[error("unknown animation kind `{0}`")]
    UnknownAnimation(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationKind {
    #[default]
    FadeIn,
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    ScaleIn,
}

impl AnimationKind {
    pub const ALL: [AnimationKind; 6] = [
        AnimationKind::FadeIn,
        AnimationKind::FadeUp,
        AnimationKind::FadeDown,
        AnimationKind::FadeLeft,
        AnimationKind::FadeRight,
        AnimationKind::ScaleIn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationKind::FadeIn => "fade-in",
            AnimationKind::FadeUp => "fade-up",
            AnimationKind::FadeDown => "fade-down",
            AnimationKind::FadeLeft => "fade-left",
            AnimationKind::FadeRight => "fade-right",
            AnimationKind::ScaleIn => "scale-in",
        }
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimationKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnimationKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownAnimation(s.to_string()))
    }
}

/// Fraction of a region's area that has to be on screen before it counts as visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(0.1);

    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&value) {
            // NaN fails the range check as well
            return Err(ConfigError::ThresholdOutOfRange(value));
        }
        Ok(Threshold(value))
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::DEFAULT
    }
}

impl TryFrom<f64> for Threshold {
    type Error = ConfigError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Threshold::new(value)
    }
}

/// Everything one reveal wrapper needs to know, validated as a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSettings {
    pub animation: AnimationKind,
    pub delay_ms: u32,
    pub threshold: Threshold,
    pub trigger_once: bool,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            animation: AnimationKind::FadeIn,
            delay_ms: 0,
            threshold: Threshold::DEFAULT,
            trigger_once: true,
        }
    }
}

impl RevealSettings {
    pub fn new(animation: AnimationKind) -> Self {
        Self {
            animation,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn repeatable(mut self) -> Self {
        self.trigger_once = false;
        self
    }

    /// Builds settings from loosely typed input, failing on the first invalid field.
    pub fn parse(
        animation: &str,
        delay_ms: i64,
        threshold: f64,
        trigger_once: bool,
    ) -> Result<Self, ConfigError> {
        let animation = animation.parse::<AnimationKind>()?;
        if delay_ms < 0 {
            return Err(ConfigError::NegativeDelay(delay_ms));
        }
        let delay_ms =
            u32::try_from(delay_ms).map_err(|_| ConfigError::DelayOutOfRange(delay_ms))?;
        let threshold = Threshold::new(threshold)?;

        Ok(Self {
            animation,
            delay_ms,
            threshold,
            trigger_once,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_names_round_trip() {
        for kind in AnimationKind::ALL {
            assert_eq!(kind.as_str().parse::<AnimationKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_animation_is_rejected() {
        assert_eq!(
            "fade-upp".parse::<AnimationKind>(),
            Err(ConfigError::UnknownAnimation("fade-upp".to_string()))
        );
        assert!("Fade-Up".parse::<AnimationKind>().is_err());
        assert!("".parse::<AnimationKind>().is_err());
    }

    #[test]
    fn test_threshold_bounds() {
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(1.0).is_ok());
        assert_eq!(Threshold::new(0.25).map(|t| t.get()), Ok(0.25));
        assert_eq!(
            Threshold::new(1.5),
            Err(ConfigError::ThresholdOutOfRange(1.5))
        );
        assert!(Threshold::new(-0.01).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
        assert!(Threshold::try_from(2.0).is_err());
    }

    #[test]
    fn test_defaults() {
        let settings = RevealSettings::default();
        assert_eq!(settings.animation, AnimationKind::FadeIn);
        assert_eq!(settings.delay_ms, 0);
        assert_eq!(settings.threshold.get(), 0.1);
        assert!(settings.trigger_once);
    }

    #[test]
    fn test_parse_rejects_out_of_range_threshold_at_setup() {
        let err = RevealSettings::parse("fade-up", 200, 1.5, true).unwrap_err();
        assert_eq!(err, ConfigError::ThresholdOutOfRange(1.5));
    }

    #[test]
    fn test_parse_rejects_bad_delay() {
        assert_eq!(
            RevealSettings::parse("fade-in", -1, 0.1, true),
            Err(ConfigError::NegativeDelay(-1))
        );
        let too_long = i64::from(u32::MAX) + 1;
        assert_eq!(
            RevealSettings::parse("fade-in", too_long, 0.1, true),
            Err(ConfigError::DelayOutOfRange(too_long))
        );
    }

    #[test]
    fn test_parse_valid() {
        let settings = RevealSettings::parse("scale-in", 300, 0.5, false).unwrap();
        assert_eq!(
            settings,
            RevealSettings::new(AnimationKind::ScaleIn)
                .with_delay(300)
                .with_threshold(Threshold::new(0.5).unwrap())
                .repeatable()
        );
    }
}
