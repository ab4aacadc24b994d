//! Exercise calibration catalog
//!
//! Static angle windows describing every pose the four supported exercises
//! pass through. Every exercise that returns to a standing pose references
//! the single shared [`STAND`] window, so recalibrating the stand pose is a
//! one-line change.

use heapless::Vec;

use crate::sample::{AnglePair, OrientationSample};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum poses in any exercise profile
pub const MAX_POSES: usize = 3;

/// Target pose with a symmetric per-axis tolerance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngleWindow {
    /// Pose center
    pub center: AnglePair,
    /// Exclusive tolerance on each axis
    pub tolerance: AnglePair,
}

impl AngleWindow {
    /// Create a window from center and tolerance pairs
    pub const fn new(center: AnglePair, tolerance: AnglePair) -> Self {
        Self { center, tolerance }
    }

    /// Roll within tolerance of the center
    pub fn contains_roll(&self, roll: i32) -> bool {
        near(roll, self.center.roll, self.tolerance.roll)
    }

    /// Pitch within tolerance of the center
    pub fn contains_pitch(&self, pitch: i32) -> bool {
        near(pitch, self.center.pitch, self.tolerance.pitch)
    }

    /// Both axes within tolerance
    pub fn contains(&self, sample: OrientationSample) -> bool {
        self.contains_roll(sample.roll) && self.contains_pitch(sample.pitch)
    }
}

/// `|value - center| < tolerance`
pub fn near(value: i32, center: i32, tolerance: i32) -> bool {
    tolerance > 0 && value.abs_diff(center) < tolerance.unsigned_abs()
}

/// Supported exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Exercise {
    SitUp,
    Squat,
    PushUp,
    JumpingJack,
}

impl Exercise {
    /// Number of supported exercises
    pub const COUNT: usize = 4;

    /// All exercises in counter order
    pub const ALL: [Exercise; Self::COUNT] = [
        Exercise::SitUp,
        Exercise::Squat,
        Exercise::PushUp,
        Exercise::JumpingJack,
    ];

    /// Stable index into per-exercise tables
    pub const fn index(self) -> usize {
        match self {
            Exercise::SitUp => 0,
            Exercise::Squat => 1,
            Exercise::PushUp => 2,
            Exercise::JumpingJack => 3,
        }
    }

    /// Short human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            Exercise::SitUp => "situp",
            Exercise::Squat => "squat",
            Exercise::PushUp => "pushup",
            Exercise::JumpingJack => "jump",
        }
    }
}

/// Named pose inside an exercise profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pose<'a> {
    pub name: &'static str,
    pub window: &'a AngleWindow,
}

/// Reference standing pose shared by squat, push-up and jumping-jack
pub static STAND: AngleWindow = AngleWindow::new(AnglePair::new(105, 165), AnglePair::new(25, 20));

/// Sit-up: original -> lying -> sit -> original
#[derive(Debug, Clone, Copy)]
pub struct SitUpProfile {
    pub lying: AngleWindow,
    pub sit: AngleWindow,
}

/// Squat: original -> stand -> down -> stand
#[derive(Debug, Clone, Copy)]
pub struct SquatProfile {
    pub stand: &'static AngleWindow,
    pub down: AngleWindow,
}

/// Push-up: original -> stand -> down -> stand
#[derive(Debug, Clone, Copy)]
pub struct PushUpProfile {
    pub stand: &'static AngleWindow,
    pub down: AngleWindow,
}

/// Jumping-jack: stand -> horizontal -> vertical -> horizontal -> stand
#[derive(Debug, Clone, Copy)]
pub struct JumpingJackProfile {
    pub stand: &'static AngleWindow,
    /// Only the roll axis of this window is matched
    pub horizontal: AngleWindow,
    pub vertical: AngleWindow,
    /// Upper bound (inclusive) on avg2 pitch while horizontal
    pub horizontal_max_pitch: i32,
    /// Added to raw pitch (mod 360) before matching the vertical window
    pub vertical_pitch_offset: i32,
}

impl JumpingJackProfile {
    /// Horizontal arms: raw roll in window, smoothed pitch at or below the cap
    pub fn is_horizontal(&self, raw: OrientationSample, short: OrientationSample) -> bool {
        self.horizontal.contains_roll(raw.roll) && short.pitch <= self.horizontal_max_pitch
    }

    /// Vertical arms: raw roll in window, offset raw pitch in window
    pub fn is_vertical(&self, raw: OrientationSample) -> bool {
        let offset = self.vertical_pitch_offset.rem_euclid(360);
        let pitch = (raw.pitch.rem_euclid(360) + offset).rem_euclid(360);
        self.vertical.contains_roll(raw.roll) && self.vertical.contains_pitch(pitch)
    }
}

/// Complete calibration set
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub stand: &'static AngleWindow,
    pub sit_up: SitUpProfile,
    pub squat: SquatProfile,
    pub push_up: PushUpProfile,
    pub jumping_jack: JumpingJackProfile,
}

/// Reference calibration
pub static CATALOG: Catalog = Catalog {
    stand: &STAND,
    sit_up: SitUpProfile {
        lying: AngleWindow::new(AnglePair::new(320, 292), AnglePair::new(40, 40)),
        sit: AngleWindow::new(AnglePair::new(205, 320), AnglePair::new(15, 15)),
    },
    squat: SquatProfile {
        stand: &STAND,
        down: AngleWindow::new(AnglePair::new(170, 110), AnglePair::new(10, 35)),
    },
    push_up: PushUpProfile {
        stand: &STAND,
        down: AngleWindow::new(AnglePair::new(50, 110), AnglePair::new(20, 20)),
    },
    jumping_jack: JumpingJackProfile {
        stand: &STAND,
        horizontal: AngleWindow::new(AnglePair::new(175, 60), AnglePair::new(15, 10)),
        vertical: AngleWindow::new(AnglePair::new(180, 30), AnglePair::new(10, 15)),
        horizontal_max_pitch: 65,
        vertical_pitch_offset: 30,
    },
};

impl Catalog {
    /// Named poses an exercise passes through, in motion order
    pub fn poses(&self, exercise: Exercise) -> Vec<Pose<'_>, MAX_POSES> {
        let mut poses = Vec::new();
        // MAX_POSES covers the longest profile
        let mut add = |name, window| {
            let _ = poses.push(Pose { name, window });
        };
        match exercise {
            Exercise::SitUp => {
                add("lying", &self.sit_up.lying);
                add("sit", &self.sit_up.sit);
            }
            Exercise::Squat => {
                add("stand", self.squat.stand);
                add("down", &self.squat.down);
            }
            Exercise::PushUp => {
                add("stand", self.push_up.stand);
                add("down", &self.push_up.down);
            }
            Exercise::JumpingJack => {
                add("stand", self.jumping_jack.stand);
                add("horizontal", &self.jumping_jack.horizontal);
                add("vertical", &self.jumping_jack.vertical);
            }
        }
        poses
    }

    /// Look up a pose by exercise and name
    pub fn pose(&self, exercise: Exercise, name: &str) -> Option<&AngleWindow> {
        self.poses(exercise)
            .into_iter()
            .find(|pose| pose.name == name)
            .map(|pose| pose.window)
    }
}
