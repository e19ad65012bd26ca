pub use biotope_core::{combine, init_logging, CellLogic, ConfigError};
pub use biotope_data::Cell;

pub mod clock {
    pub use biotope_core::clock::*;
}
pub mod config {
    pub use biotope_core::config::*;
}
pub mod field {
    pub use biotope_core::field::*;
}
pub mod metrics {
    pub use biotope_core::metrics::*;
}
pub mod random {
    pub use biotope_core::random::*;
}
