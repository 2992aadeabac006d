use std::hash::Hash;

const WEIGHT_SATURATION: f32 = 0.24;
const WEIGHT_LUMA: f32 = 0.52;
const WEIGHT_POPULATION: f32 = 0.24;

const MIN_VIBRANT_SATURATION: f32 = 0.35;
const TARGET_VIBRANT_SATURATION: f32 = 1.0;

const TARGET_MUTED_SATURATION: f32 = 0.3;
const MAX_MUTED_SATURATION: f32 = 0.4;

const MIN_LIGHT_LUMA: f32 = 0.55;
const TARGET_LIGHT_LUMA: f32 = 0.74;

const TARGET_DARK_LUMA: f32 = 0.26;
const MAX_DARK_LUMA: f32 = 0.45;

const MIN_NORMAL_LUMA: f32 = 0.3;
const TARGET_NORMAL_LUMA: f32 = 0.5;
const MAX_NORMAL_LUMA: f32 = 0.7;

pub const LIGHT_VIBRANT: &str = "LightVibrant";
pub const VIBRANT: &str = "Vibrant";
pub const DARK_VIBRANT: &str = "DarkVibrant";
pub const LIGHT_MUTED: &str = "LightMuted";
pub const MUTED: &str = "Muted";
pub const DARK_MUTED: &str = "DarkMuted";

/// A named saturation and lightness profile. Generating a palette picks at most one swatch per
/// target and files it under the target's name.
#[derive(Debug, Clone, Copy)]
pub struct Target {
    name: &'static str,
    // min, target, max
    saturation_targets: (f32, f32, f32),
    // min, target, max
    lightness_targets: (f32, f32, f32),
    // sat, luma, pop
    weights: (f32, f32, f32),
    is_exclusive: bool,
}

impl Target {
    pub fn default_targets() -> [Target; 6] {
        [
            Target::light_vibrant(),
            Target::vibrant(),
            Target::dark_vibrant(),
            Target::light_muted(),
            Target::muted(),
            Target::dark_muted(),
        ]
    }

    pub fn light_vibrant() -> Target {
        Target {
            saturation_targets: (MIN_VIBRANT_SATURATION, TARGET_VIBRANT_SATURATION, 1.0),
            lightness_targets: (MIN_LIGHT_LUMA, TARGET_LIGHT_LUMA, 1.0),
            ..Target::new(LIGHT_VIBRANT)
        }
    }

    pub fn vibrant() -> Target {
        Target {
            saturation_targets: (MIN_VIBRANT_SATURATION, TARGET_VIBRANT_SATURATION, 1.0),
            lightness_targets: (MIN_NORMAL_LUMA, TARGET_NORMAL_LUMA, MAX_NORMAL_LUMA),
            ..Target::new(VIBRANT)
        }
    }

    pub fn dark_vibrant() -> Target {
        Target {
            saturation_targets: (MIN_VIBRANT_SATURATION, TARGET_VIBRANT_SATURATION, 1.0),
            lightness_targets: (0.0, TARGET_DARK_LUMA, MAX_DARK_LUMA),
            ..Target::new(DARK_VIBRANT)
        }
    }

    pub fn light_muted() -> Target {
        Target {
            saturation_targets: (0.0, TARGET_MUTED_SATURATION, MAX_MUTED_SATURATION),
            lightness_targets: (MIN_LIGHT_LUMA, TARGET_LIGHT_LUMA, 1.0),
            ..Target::new(LIGHT_MUTED)
        }
    }

    pub fn muted() -> Target {
        Target {
            saturation_targets: (0.0, TARGET_MUTED_SATURATION, MAX_MUTED_SATURATION),
            lightness_targets: (MIN_NORMAL_LUMA, TARGET_NORMAL_LUMA, MAX_NORMAL_LUMA),
            ..Target::new(MUTED)
        }
    }

    pub fn dark_muted() -> Target {
        Target {
            saturation_targets: (0.0, TARGET_MUTED_SATURATION, MAX_MUTED_SATURATION),
            lightness_targets: (0.0, TARGET_DARK_LUMA, MAX_DARK_LUMA),
            ..Target::new(DARK_MUTED)
        }
    }

    /// A target accepting any saturation and lightness, aiming for the middle of both.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            saturation_targets: (0.0, 0.5, 1.0),
            lightness_targets: (0.0, 0.5, 1.0),
            weights: (WEIGHT_SATURATION, WEIGHT_LUMA, WEIGHT_POPULATION),
            is_exclusive: true,
        }
    }

    pub fn with_saturation(self, minimum: f32, target: f32, maximum: f32) -> Self {
        Self {
            saturation_targets: (minimum, target, maximum),
            ..self
        }
    }

    pub fn with_lightness(self, minimum: f32, target: f32, maximum: f32) -> Self {
        Self {
            lightness_targets: (minimum, target, maximum),
            ..self
        }
    }

    pub fn with_weights(self, saturation: f32, lightness: f32, population: f32) -> Self {
        Self {
            weights: (saturation, lightness, population),
            ..self
        }
    }

    /// Whether a swatch picked for this target is withheld from the targets after it.
    pub fn with_exclusive(self, is_exclusive: bool) -> Self {
        Self { is_exclusive, ..self }
    }

    pub fn name(self) -> &'static str {
        self.name
    }

    pub(crate) fn normalize_weights(&mut self) {
        let weights_sum = self.weights.0 + self.weights.1 + self.weights.2;

        if weights_sum != 0.0 {
            if self.weights.0 > 0.0 {
                self.weights.0 /= weights_sum;
            }

            if self.weights.1 > 0.0 {
                self.weights.1 /= weights_sum;
            }

            if self.weights.2 > 0.0 {
                self.weights.2 /= weights_sum;
            }
        }
    }

    pub fn minimum_saturation(self) -> f32 {
        self.saturation_targets.0
    }

    pub fn target_saturation(self) -> f32 {
        self.saturation_targets.1
    }

    pub fn maximum_saturation(self) -> f32 {
        self.saturation_targets.2
    }

    pub fn minimum_lightness(self) -> f32 {
        self.lightness_targets.0
    }

    pub fn target_lightness(self) -> f32 {
        self.lightness_targets.1
    }

    pub fn maximum_lightness(self) -> f32 {
        self.lightness_targets.2
    }

    pub fn saturation_weight(self) -> f32 {
        self.weights.0
    }

    pub fn lightness_weight(self) -> f32 {
        self.weights.1
    }

    pub fn population_weight(self) -> f32 {
        self.weights.2
    }

    pub fn is_exclusive(self) -> bool {
        self.is_exclusive
    }
}

impl Eq for Target {}
impl PartialEq for Target {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Hash for Target {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
