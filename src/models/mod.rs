pub mod model_asset;
pub mod presentation;
pub mod slide;
