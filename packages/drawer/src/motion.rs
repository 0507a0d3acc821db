//! # Motion profiles for drawer entry, exit and the notice pulse
//!
//! The UI animates drawers with CSS transitions. This module describes the
//! target styles and transition profiles, renders them to CSS, and computes
//! how long a transition takes to settle so the caller can await completion.

use std::time::Duration;

use crate::config::MotionConfig;

/// Visual state of a drawer surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionStyle {
    pub scale: f32,
    pub opacity: f32,
    /// Vertical offset as a percentage of the element's own height.
    pub offset_y: f32,
}

impl MotionStyle {
    pub const REST: MotionStyle = MotionStyle {
        scale: 1.0,
        opacity: 1.0,
        offset_y: 0.0,
    };

    /// Off-screen below the viewport, for bottom sheets.
    pub const SHEET_HIDDEN: MotionStyle = MotionStyle {
        scale: 1.0,
        opacity: 1.0,
        offset_y: 100.0,
    };

    pub fn dialog_hidden(config: &MotionConfig) -> Self {
        Self {
            scale: config.initial_scale,
            opacity: config.initial_opacity,
            offset_y: 0.0,
        }
    }

    pub fn with_scale(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    /// Inline CSS for this style (without the transition).
    pub fn css(&self) -> String {
        format!(
            "transform: translateY({}%) scale({}); opacity: {};",
            self.offset_y, self.scale, self.opacity
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    Spring { stiffness: f32, damping: f32, mass: f32 },
    Tween { duration_secs: f32 },
}

impl Transition {
    /// Used when the profile has no finite settle time.
    const FALLBACK_SETTLE: Duration = Duration::from_secs(1);

    pub fn spring(config: &MotionConfig) -> Self {
        Transition::Spring {
            stiffness: config.stiffness,
            damping: config.damping,
            mass: config.mass,
        }
    }

    fn damping_ratio(stiffness: f32, damping: f32, mass: f32) -> f32 {
        damping / (2.0 * (stiffness * mass).sqrt())
    }

    /// Time until the motion is visually at rest, clamped to 0.1..=1.0s for springs.
    pub fn settle_duration(&self) -> Duration {
        let secs = match *self {
            Transition::Spring { stiffness, damping, mass } => {
                let stiffness = stiffness.max(f32::EPSILON);
                let mass = mass.max(f32::EPSILON);
                let omega = (stiffness / mass).sqrt();
                let zeta = Self::damping_ratio(stiffness, damping, mass);
                // 2% envelope: e^(-zeta*omega*t) = 0.02
                let t = if zeta < 1.0 { 4.0 / (zeta.max(0.05) * omega) } else { 4.0 * zeta / omega };
                t.clamp(0.1, 1.0)
            }
            Transition::Tween { duration_secs } => duration_secs.max(0.0),
        };
        Duration::try_from_secs_f32(secs).unwrap_or(Self::FALLBACK_SETTLE)
    }

    pub fn timing_function(&self) -> &'static str {
        match *self {
            Transition::Spring { stiffness, damping, mass } => {
                if Self::damping_ratio(stiffness.max(f32::EPSILON), damping, mass.max(f32::EPSILON)) < 1.0 {
                    "cubic-bezier(0.34, 1.56, 0.64, 1)"
                } else {
                    "cubic-bezier(0.22, 1, 0.36, 1)"
                }
            }
            Transition::Tween { .. } => "ease-out",
        }
    }

    pub fn css(&self) -> String {
        let secs = self.settle_duration().as_secs_f32();
        let timing = self.timing_function();
        format!("transition: transform {secs}s {timing}, opacity {secs}s {timing};")
    }
}

/// The two-step scale pulse played when a backdrop click is rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoticePulse {
    pub peak: MotionStyle,
    pub rest: MotionStyle,
    pub transition: Transition,
}

impl NoticePulse {
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            peak: MotionStyle::REST.with_scale(config.notice_scale),
            rest: MotionStyle::REST,
            transition: Transition::Tween {
                duration_secs: config.notice_duration_secs,
            },
        }
    }

    pub fn steps(&self) -> [(MotionStyle, Transition); 2] {
        [(self.peak, self.transition), (self.rest, self.transition)]
    }
}
