pub mod complexity;
pub mod config;
pub mod equipment;
pub mod error;
pub mod order_text;
pub mod snapshot;

pub use complexity::{Complexity, ComplexityLevel, derive_complexity};
pub use config::NotionConfig;
pub use equipment::{NetworkEquipment, derive_network_equipment};
pub use error::AppError;
pub use order_text::format_order_text;
pub use snapshot::{
    CableLength, Connectivity, DirectRoute, Distance, Infrastructure, Location, Peripherals,
    Placement, PrinterCounts, PrinterType, RouterLocation, SegmentLength, SimProvider, Snapshot,
    Station,
};
