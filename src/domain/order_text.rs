//! Order summary formatting.
//!
//! Deterministic section-ordered text assembly from a snapshot and its
//! derived artifacts. The output is what operators copy to the
//! clipboard and what lands in the Notion record.

use std::fmt::Write;

use super::complexity::Complexity;
use super::equipment::NetworkEquipment;
use super::snapshot::{Connectivity, DirectRoute, Distance, Placement, PrinterType, Snapshot};

/// Render the full order summary.
pub fn format_order_text(
    snapshot: &Snapshot,
    equipment: &NetworkEquipment,
    complexity: &Complexity,
) -> String {
    let mut text = String::from("=== WAFFLE HARDWARE ORDER ===\n\n");

    let customer = snapshot.customer_name.trim();
    let customer = if customer.is_empty() { "Not specified" } else { customer };
    let _ = writeln!(text, "CUSTOMER: {}\n", customer);

    text.push_str("## POS STATIONS\n\n");
    for (index, station) in snapshot.stations.iter().enumerate() {
        let _ = writeln!(text, "Station {}:", index + 1);
        if station.has_pos {
            text.push_str("  - 1x iPad (POS)\n");
        }
        if station.has_cds {
            text.push_str("  - 1x iPad (CDS)\n");
        }
        text.push('\n');
    }

    if snapshot.peripherals.any() {
        text.push_str("## PERIPHERALS\n\n");
        let allocation = allocate_peripherals(snapshot);
        for (index, items) in allocation.per_station.iter().enumerate() {
            if items.is_empty() {
                continue;
            }
            let _ = writeln!(text, "Station {}:", index + 1);
            for item in items {
                let _ = writeln!(text, "  - {}", item);
            }
            text.push('\n');
        }
        if allocation.has_spares() {
            text.push_str("Unallocated (spares):\n");
            if allocation.spare_stands > 0 {
                let _ = writeln!(text, "  - {}x POS Stand", allocation.spare_stands);
            }
            if allocation.spare_drawers > 0 {
                let _ = writeln!(text, "  - {}x Cash Drawer", allocation.spare_drawers);
            }
            if allocation.spare_readers > 0 {
                let _ = writeln!(text, "  - {}x Card Reader", allocation.spare_readers);
            }
            text.push('\n');
        }
    }

    let groups = group_by_location(snapshot);
    if !groups.is_empty() {
        text.push_str("## PRINTERS\n\n");
        for (label, placements) in &groups {
            let _ = writeln!(text, "{}:", label);
            for placement in placements {
                let _ = writeln!(
                    text,
                    "  - 1x {} {} ({}, paired to {})",
                    printer_model(placement),
                    placement.printer_type.label(),
                    connection_description(&placement.connectivity),
                    snapshot.station_display_name(placement.station_id),
                );
            }
            text.push('\n');
        }
    }

    text.push_str("## NETWORK EQUIPMENT\n\n");
    let _ = writeln!(text, "  - {}", equipment.router);
    if let Some(switch) = &equipment.switch {
        let _ = writeln!(text, "  - {}", switch);
    }
    if let Some(cables) = &equipment.cables {
        let _ = writeln!(text, "  - {}", cables);
    }
    text.push('\n');

    text.push_str("## INSTALLATION\n\n");
    let _ = writeln!(text, "Complexity: {} ({})", complexity.level, complexity.time);

    text
}

/// Single-pass first-fit peripheral allocation.
///
/// Stations are walked once, in order. Each station receives at most
/// one stand (if it carries any iPad), one drawer (unconditionally),
/// and one reader (only if it carries a POS iPad), while supplies
/// last. A skipped station is never revisited; whatever remains after
/// the pass is reported as spares.
struct PeripheralAllocation {
    per_station: Vec<Vec<&'static str>>,
    spare_stands: u32,
    spare_drawers: u32,
    spare_readers: u32,
}

impl PeripheralAllocation {
    fn has_spares(&self) -> bool {
        self.spare_stands > 0 || self.spare_drawers > 0 || self.spare_readers > 0
    }
}

fn allocate_peripherals(snapshot: &Snapshot) -> PeripheralAllocation {
    let mut stands = snapshot.peripherals.stands;
    let mut drawers = snapshot.peripherals.drawers;
    let mut readers = snapshot.peripherals.readers;

    let per_station = snapshot
        .stations
        .iter()
        .map(|station| {
            let mut items = Vec::new();
            if stands > 0 && (station.has_pos || station.has_cds) {
                items.push("1x POS Stand");
                stands -= 1;
            }
            if drawers > 0 {
                items.push("1x Cash Drawer");
                drawers -= 1;
            }
            if readers > 0 && station.has_pos {
                items.push("1x Card Reader");
                readers -= 1;
            }
            items
        })
        .collect();

    PeripheralAllocation {
        per_station,
        spare_stands: stands,
        spare_drawers: drawers,
        spare_readers: readers,
    }
}

/// Group configured placements by resolved location label, preserving
/// first-occurrence order. Placements without a location are omitted.
fn group_by_location(snapshot: &Snapshot) -> Vec<(String, Vec<&Placement>)> {
    let mut groups: Vec<(String, Vec<&Placement>)> = Vec::new();
    for placement in &snapshot.placements {
        let Some(location) = &placement.location else {
            continue;
        };
        let label = location.display_label();
        match groups.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, members)) => members.push(placement),
            None => groups.push((label, vec![placement])),
        }
    }
    groups
}

/// Model selection: label printers are always the wired-only ZD411;
/// wired paths get the TM-T82X; everything else the cheaper M30-III.
fn printer_model(placement: &Placement) -> &'static str {
    if placement.printer_type == PrinterType::Label {
        "ZD411"
    } else if placement.connectivity.is_wired() {
        "TM-T82X"
    } else {
        "M30-III"
    }
}

fn connection_description(connectivity: &Connectivity) -> String {
    match connectivity {
        Connectivity::Outlet { router_to_outlet, outlet_to_printer } => {
            let first = router_to_outlet.map(|l| l.meters()).unwrap_or(1);
            let second = outlet_to_printer.map(|l| l.meters()).unwrap_or(1);
            format!("LAN {}M + {}M (via outlet)", first, second)
        }
        Connectivity::Direct(DirectRoute::Cable(length)) => {
            format!("LAN {}M", length.meters())
        }
        Connectivity::Direct(DirectRoute::Pending) => "LAN (length pending)".to_string(),
        Connectivity::Direct(DirectRoute::Wifi { distance })
        | Connectivity::Wireless { distance } => {
            if *distance == Some(Distance::Over10) {
                "WiFi (>10M, may need router upgrade)".to_string()
            } else {
                "WiFi".to_string()
            }
        }
        Connectivity::Unknown => "WiFi".to_string(),
    }
}
