//! Common types and utilities shared across the forecast-strips crates.

pub mod document;
pub mod error;
pub mod numeric;
pub mod style;
pub mod time;

pub use document::{ForecastDocument, ForecastEntry, ForecastLocation, ForecastSample, SwellComponent};
pub use error::{ForecastError, ForecastResult};
pub use numeric::{round_hundredths, to_fixed_point};
pub use style::{BandPalette, Color, ColorError};
pub use time::{Alphabet, ModelCycle, TimeToken, TimeTokenError};
