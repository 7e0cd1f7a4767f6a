use serde::{Deserialize, Serialize};
use speedcube_core::geometry::DEFAULT_SPACING;
use speedcube_core::{CubeSize, DEFAULT_SCRAMBLE_LENGTH, MoveError, NotationFeatures, SliceGeometry};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InteractionPreferences {
    /// Number of layers of a new cube.
    pub cube_size: u8,
    /// Distance between adjacent cubie centers.
    pub spacing: f32,
    /// Minimum drag distance, in world units, before a drag turns a layer.
    pub drag_threshold: f32,
    pub scramble_length: usize,
    /// Whether move notation may carry a layer number such as `2R`.
    pub layer_prefix_notation: bool,
}
impl Default for InteractionPreferences {
    fn default() -> Self {
        Self {
            cube_size: 3,
            spacing: DEFAULT_SPACING,
            drag_threshold: 0.05,
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            layer_prefix_notation: false,
        }
    }
}

impl InteractionPreferences {
    pub fn size(&self) -> Result<CubeSize, MoveError> {
        CubeSize::try_from(self.cube_size)
    }

    pub fn geometry(&self) -> Result<SliceGeometry, MoveError> {
        Ok(SliceGeometry::new(self.size()?, self.spacing))
    }

    pub fn notation_features(&self) -> NotationFeatures {
        NotationFeatures {
            layer_prefix: self.layer_prefix_notation,
        }
    }

    /// Returns whether a drag is long enough to turn a layer.
    pub fn is_drag(&self, distance: f32) -> bool {
        distance >= self.drag_threshold
    }
}
