pub mod types;
pub mod registry;
pub mod validate;
pub mod reorder;

pub use types::*;
pub use registry::{Layout, Theme, LAYOUTS, THEMES};
pub use validate::{normalize_collection, normalize_slide, sample_slide, validate_slide};
pub use reorder::{clamp_active, insert_at, move_to, remove_at, renumber};
