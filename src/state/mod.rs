pub mod geometry;
pub mod music;
pub mod placement;
pub mod random;

pub use geometry::{Point, Rect, Size};
pub use music::{MusicCommand, MusicState};
pub use placement::{EvadeParams, PlacementKind, compute_placement, initial_placement};
pub use random::{JsRandom, RandomSource};
