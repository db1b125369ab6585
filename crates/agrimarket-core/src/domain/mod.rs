//! Domain values for the export analytics engine.

mod date;
mod indicator;
mod prediction;
mod product;
mod record;

pub use date::ExportDate;
pub use indicator::MarketIndicator;
pub use prediction::{PredictionResult, PredictionStatus};
pub use product::Product;
pub use record::ExportRecord;
