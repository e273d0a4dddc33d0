pub mod category_deriver;
pub mod feature_builder;
pub mod feature_store;
pub mod filter_engine;
pub mod session;
pub mod viewport_controller;

pub use category_deriver::derive_category_universe;
pub use feature_builder::{BuildReport, FeatureBuilder, SkipReason, SkippedRow};
pub use feature_store::FeatureStore;
pub use filter_engine::FilterEngine;
pub use session::{LoadState, Session};
pub use viewport_controller::ViewportController;
