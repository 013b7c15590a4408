use super::machine::RevealPhase;
use super::settings::AnimationKind;

/// Offset used by the directional fades, 1rem.
pub const SLIDE_DISTANCE_PX: i32 = 16;
pub const HIDDEN_SCALE: f32 = 0.95;
pub const TRANSITION_MS: u32 = 700;

/// Geometric state a wrapped region is drawn in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub opacity: f32,
    pub translate_x_px: i32,
    pub translate_y_px: i32,
    pub scale: f32,
}

impl Presentation {
    pub const VISIBLE: Presentation = Presentation {
        opacity: 1.0,
        translate_x_px: 0,
        translate_y_px: 0,
        scale: 1.0,
    };

    pub fn hidden(kind: AnimationKind) -> Self {
        let hidden = Presentation {
            opacity: 0.0,
            ..Self::VISIBLE
        };
        match kind {
            AnimationKind::FadeIn => hidden,
            AnimationKind::FadeUp => Presentation {
                translate_y_px: SLIDE_DISTANCE_PX,
                ..hidden
            },
            AnimationKind::FadeDown => Presentation {
                translate_y_px: -SLIDE_DISTANCE_PX,
                ..hidden
            },
            AnimationKind::FadeLeft => Presentation {
                translate_x_px: -SLIDE_DISTANCE_PX,
                ..hidden
            },
            AnimationKind::FadeRight => Presentation {
                translate_x_px: SLIDE_DISTANCE_PX,
                ..hidden
            },
            AnimationKind::ScaleIn => Presentation {
                scale: HIDDEN_SCALE,
                ..hidden
            },
        }
    }

    /// `PendingDelay` still draws the hidden offset; only `Visible` rests.
    pub fn for_phase(kind: AnimationKind, phase: RevealPhase) -> Self {
        match phase {
            RevealPhase::Visible => Self::VISIBLE,
            RevealPhase::Hidden | RevealPhase::PendingDelay => Self::hidden(kind),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "{} transition: opacity {ms}ms ease-out, transform {ms}ms ease-out;",
            self.static_style(),
            ms = TRANSITION_MS,
        )
    }

    /// Same geometry with no transition, for content that is never animated.
    pub fn static_style(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.translate_x_px, self.translate_y_px, self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_offsets() {
        let cases = [
            (AnimationKind::FadeIn, 0, 0, 1.0),
            (AnimationKind::FadeUp, 0, 16, 1.0),
            (AnimationKind::FadeDown, 0, -16, 1.0),
            (AnimationKind::FadeLeft, -16, 0, 1.0),
            (AnimationKind::FadeRight, 16, 0, 1.0),
            (AnimationKind::ScaleIn, 0, 0, 0.95),
        ];
        for (kind, x, y, scale) in cases {
            let hidden = Presentation::hidden(kind);
            assert_eq!(hidden.opacity, 0.0, "{kind}");
            assert_eq!(hidden.translate_x_px, x, "{kind}");
            assert_eq!(hidden.translate_y_px, y, "{kind}");
            assert_eq!(hidden.scale, scale, "{kind}");
        }
    }

    #[test]
    fn test_initial_phase_draws_hidden_offset() {
        for kind in AnimationKind::ALL {
            assert_eq!(
                Presentation::for_phase(kind, RevealPhase::Hidden),
                Presentation::hidden(kind)
            );
            assert_eq!(
                Presentation::for_phase(kind, RevealPhase::PendingDelay),
                Presentation::hidden(kind)
            );
            assert_eq!(
                Presentation::for_phase(kind, RevealPhase::Visible),
                Presentation::VISIBLE
            );
        }
    }

    #[test]
    fn test_style_string() {
        let style = Presentation::hidden(AnimationKind::FadeUp).style();
        assert!(style.starts_with("opacity: 0; transform: translate(0px, 16px) scale(1);"));
        assert!(style.contains("transition: opacity 700ms ease-out"));
        assert!(Presentation::VISIBLE.style().starts_with("opacity: 1;"));
        assert_eq!(
            Presentation::VISIBLE.static_style(),
            "opacity: 1; transform: translate(0px, 0px) scale(1);"
        );
    }
}
