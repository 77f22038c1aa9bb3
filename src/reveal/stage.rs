/// Stage of the curtain reveal. Values only ever increase.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RevealStage {
    /// Initial closed state; heart halves folded edge-on.
    #[default]
    Folded = 0,
    /// Heart halves unfold to face the viewer.
    Unfolded = 1,
    /// Colour fill settles and fold lines appear.
    Filled = 2,
    /// Peak glow and centre crease pulse.
    Glowing = 3,
    /// Curtains retract; the overlay is ready to be dismissed.
    Open = 4,
}

impl RevealStage {
    /// All stages in timeline order.
    pub const ALL: [RevealStage; 5] = [
        RevealStage::Folded,
        RevealStage::Unfolded,
        RevealStage::Filled,
        RevealStage::Glowing,
        RevealStage::Open,
    ];

    /// Numeric stage counter in `0..=4`.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Stage for a counter value, if in range.
    pub fn from_index(i: u8) -> Option<Self> {
        Self::ALL.get(usize::from(i)).copied()
    }

    /// The stage that follows this one, `None` at [`RevealStage::Open`].
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Visual parameters for this stage.
    pub fn look(self) -> RevealLook {
        RevealLook::for_stage(self)
    }
}

impl std::fmt::Display for RevealStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RevealStage::Folded => "folded",
            RevealStage::Unfolded => "unfolded",
            RevealStage::Filled => "filled",
            RevealStage::Glowing => "glowing",
            RevealStage::Open => "open",
        };
        f.write_str(name)
    }
}

/// Target values the visual layer transitions towards at a given stage.
///
/// Rotations are about the vertical axis through the centre crease; the left half uses the
/// negated angle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RevealLook {
    /// Right-half rotation in degrees; `0` faces the viewer.
    pub half_rotation_deg: f64,
    /// Heart fill opacity.
    pub fill_opacity: f64,
    /// Fold line stroke opacity.
    pub fold_line_opacity: f64,
    /// Scale of the glow behind each half.
    pub glow_scale: f64,
    /// Opacity of the glow behind each half.
    pub glow_opacity: f64,
    /// Centre crease highlight.
    pub crease_glow: bool,
    /// Curtains translated fully off-screen.
    pub curtains_open: bool,
    /// Background particle layer opacity.
    pub particles_opacity: f64,
}

impl RevealLook {
    /// Look for `stage`. Each property switches at a single stage boundary.
    pub fn for_stage(stage: RevealStage) -> Self {
        let unfolded = stage >= RevealStage::Unfolded;
        let filled = stage >= RevealStage::Filled;
        let glowing = stage >= RevealStage::Glowing;
        let open = stage >= RevealStage::Open;

        Self {
            half_rotation_deg: if unfolded { 0.0 } else { 90.0 },
            fill_opacity: if filled { 1.0 } else { 0.7 },
            fold_line_opacity: if filled { 0.3 } else { 0.0 },
            glow_scale: if glowing { 1.5 } else { 1.0 },
            glow_opacity: if glowing { 0.6 } else { 0.3 },
            crease_glow: glowing && !open,
            curtains_open: open,
            particles_opacity: if open { 0.0 } else { 1.0 },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/stage.rs"]
mod tests;
