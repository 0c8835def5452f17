use thiserror::Error;

/// Coarse locomotion grouping a motion belongs to, used to decide which
/// resting/walking loop to fall back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionState {
    Standing,
    Crouching,
    /// Terminal: entered through death motions, never left. The character
    /// holds the last keyframe of whatever clip got it here.
    Frozen,
}

impl LocomotionState {
    /// Resting loop to fall back to when a one-shot clip finishes or all
    /// movement keys are released. Frozen has none: the dead pose holds.
    pub const fn resting_motion(self) -> Option<Motion> {
        match self {
            LocomotionState::Standing => Some(Motion::Stand),
            LocomotionState::Crouching => Some(Motion::CrouchStand),
            LocomotionState::Frozen => None,
        }
    }

    /// Walking loop this state promotes to when movement intent appears.
    pub const fn walk_motion(self) -> Option<Motion> {
        match self {
            LocomotionState::Standing => Some(Motion::Run),
            LocomotionState::Crouching => Some(Motion::CrouchWalk),
            LocomotionState::Frozen => None,
        }
    }
}

/// Immutable catalog entry for one animation clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionEntry {
    /// Inclusive keyframe bounds as authored in the model file. `clip_end`
    /// may be numerically smaller than `clip_start` (crouch-pain is authored
    /// that way); the declared order is preserved, never sorted.
    pub clip_start: u32,
    pub clip_end: u32,
    pub frames_per_second: f32,
    pub state: LocomotionState,
    /// One-shot clips play once and return to the state's resting loop;
    /// non-actions loop until another motion is requested.
    pub is_action: bool,
}

impl MotionEntry {
    /// Playback duration in milliseconds, straight from the authored bounds.
    /// Negative for ranges authored end-before-start; the clip player must
    /// tolerate that rather than correct it.
    pub fn duration_ms(&self) -> f32 {
        1000.0 * (self.clip_end as f32 - self.clip_start as f32) / self.frames_per_second
    }
}

/// The motion catalog: every fine-grained animation clip the character can
/// play. The enum is the table; `entry` is total by construction, so an
/// unknown motion cannot reach the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    Stand,
    Run,
    Attack,
    Pain1,
    Pain2,
    Pain3,
    Jump,
    Flip,
    Salute,
    Taunt,
    Wave,
    Point,
    CrouchStand,
    CrouchWalk,
    CrouchAttack,
    CrouchPain,
    CrouchDeath,
    Death1,
    Death2,
    Death3,
    Boom,
}

impl Motion {
    pub const ALL: [Motion; 21] = [
        Motion::Stand,
        Motion::Run,
        Motion::Attack,
        Motion::Pain1,
        Motion::Pain2,
        Motion::Pain3,
        Motion::Jump,
        Motion::Flip,
        Motion::Salute,
        Motion::Taunt,
        Motion::Wave,
        Motion::Point,
        Motion::CrouchStand,
        Motion::CrouchWalk,
        Motion::CrouchAttack,
        Motion::CrouchPain,
        Motion::CrouchDeath,
        Motion::Death1,
        Motion::Death2,
        Motion::Death3,
        Motion::Boom,
    ];

    /// Catalog lookup. Keyframe bounds and rates are the authored values of
    /// the droid model file, preserved exactly — including crouch-pain's
    /// reversed 196→172 range.
    pub const fn entry(self) -> MotionEntry {
        use LocomotionState as S;

        const fn e(
            clip_start: u32,
            clip_end: u32,
            fps: f32,
            state: LocomotionState,
            is_action: bool,
        ) -> MotionEntry {
            MotionEntry {
                clip_start,
                clip_end,
                frames_per_second: fps,
                state,
                is_action,
            }
        }

        match self {
            Motion::Stand => e(0, 39, 9.0, S::Standing, false),
            Motion::Run => e(40, 45, 10.0, S::Standing, false),
            Motion::Attack => e(46, 53, 10.0, S::Standing, true),
            Motion::Pain1 => e(54, 57, 7.0, S::Standing, true),
            Motion::Pain2 => e(58, 61, 7.0, S::Standing, true),
            Motion::Pain3 => e(62, 65, 7.0, S::Standing, true),
            Motion::Jump => e(66, 71, 7.0, S::Standing, true),
            Motion::Flip => e(72, 83, 7.0, S::Standing, true),
            Motion::Salute => e(84, 94, 7.0, S::Standing, true),
            Motion::Taunt => e(95, 111, 10.0, S::Standing, true),
            Motion::Wave => e(112, 122, 7.0, S::Standing, true),
            Motion::Point => e(123, 134, 6.0, S::Standing, true),
            Motion::CrouchStand => e(135, 153, 10.0, S::Crouching, false),
            Motion::CrouchWalk => e(154, 159, 7.0, S::Crouching, false),
            Motion::CrouchAttack => e(160, 168, 10.0, S::Crouching, true),
            Motion::CrouchPain => e(196, 172, 7.0, S::Crouching, true),
            Motion::CrouchDeath => e(173, 177, 5.0, S::Frozen, true),
            Motion::Death1 => e(178, 183, 7.0, S::Frozen, true),
            Motion::Death2 => e(184, 189, 7.0, S::Frozen, true),
            Motion::Death3 => e(190, 197, 7.0, S::Frozen, true),
            // One-shot explosion frame; present in the model file but never
            // sequenced by the controller.
            Motion::Boom => e(198, 198, 5.0, S::Standing, true),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Motion::Stand => "stand",
            Motion::Run => "run",
            Motion::Attack => "attack",
            Motion::Pain1 => "pain1",
            Motion::Pain2 => "pain2",
            Motion::Pain3 => "pain3",
            Motion::Jump => "jump",
            Motion::Flip => "flip",
            Motion::Salute => "salute",
            Motion::Taunt => "taunt",
            Motion::Wave => "wave",
            Motion::Point => "point",
            Motion::CrouchStand => "crstand",
            Motion::CrouchWalk => "crwalk",
            Motion::CrouchAttack => "crattack",
            Motion::CrouchPain => "crpain",
            Motion::CrouchDeath => "crdeath",
            Motion::Death1 => "death1",
            Motion::Death2 => "death2",
            Motion::Death3 => "death3",
            Motion::Boom => "boom",
        }
    }

    /// Host-boundary name lookup for configs and scripts. The catalog is
    /// static and exhaustive, so an error here is a build defect in the host,
    /// to be turned into a startup-time fatal diagnostic — not a condition
    /// to recover from.
    pub fn from_name(name: &str) -> Result<Motion, UnknownMotion> {
        Motion::ALL
            .iter()
            .copied()
            .find(|m| m.name() == name)
            .ok_or_else(|| UnknownMotion(name.to_string()))
    }
}

/// A motion name that does not resolve to a catalog entry.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown motion `{0}`")]
pub struct UnknownMotion(pub String);
