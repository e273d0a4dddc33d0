pub mod collection;
pub mod criteria;
pub mod outlet;
pub mod raw;
pub mod view;
pub mod viewport;

pub use collection::FeatureCollection;
pub use criteria::{FilterCriteria, TextMatchMode};
pub use outlet::{Coordinate, OutletFeature, OutletProperties, PointGeometry};
pub use raw::RawRecord;
pub use view::{MapSource, MapView, PanelRow, PanelView, SegmentOption};
pub use viewport::{CameraUpdate, Easing, ViewportTarget};
