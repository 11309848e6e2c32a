//! Installation complexity rating.

use std::fmt;

use super::equipment::NetworkEquipment;
use super::snapshot::{PrinterType, Snapshot};

/// Complexity tier, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComplexityLevel::Low => "LOW",
            ComplexityLevel::Medium => "MEDIUM",
            ComplexityLevel::High => "HIGH",
        };
        f.write_str(name)
    }
}

/// Derived installation complexity with its time estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub level: ComplexityLevel,
    pub time: &'static str,
}

/// Rate the installation. Rules are checked in precedence order, first
/// match wins.
///
/// Label printers are wired-only hardware, so any label placement
/// without a wired path puts the whole order in the highest tier
/// regardless of printer count.
pub fn derive_complexity(snapshot: &Snapshot, equipment: &NetworkEquipment) -> Complexity {
    let total_printers = snapshot.printer_counts.total();
    let label_without_wire = snapshot
        .placements
        .iter()
        .any(|p| p.printer_type == PrinterType::Label && !p.connectivity.is_wired());

    if total_printers > 5 || label_without_wire {
        return Complexity { level: ComplexityLevel::High, time: "2 hours" };
    }

    let wired_count =
        snapshot.placements.iter().filter(|p| p.connectivity.is_wired()).count();
    if wired_count > 2 || equipment.switch.is_some() {
        return Complexity { level: ComplexityLevel::Medium, time: "1.5 hours" };
    }

    Complexity { level: ComplexityLevel::Low, time: "1 hour" }
}
