pub mod outlet_reader;

pub use outlet_reader::{decode_text, DataSource, OutletReader};
