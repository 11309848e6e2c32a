//! Network equipment derivation.
//!
//! Pure function of the snapshot: router selection, switch
//! determination, and the aggregated cable order line.

use super::snapshot::{CableLength, Connectivity, DirectRoute, SegmentLength, Snapshot};

/// Derived network-equipment bill of materials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkEquipment {
    /// Always present.
    pub router: String,
    /// `None` when no switch is needed.
    pub switch: Option<String>,
    /// Aggregated cable line, `None` when no cables are needed.
    pub cables: Option<String>,
}

/// Compute the equipment list for a snapshot.
pub fn derive_network_equipment(snapshot: &Snapshot) -> NetworkEquipment {
    let wired_count =
        snapshot.placements.iter().filter(|p| p.connectivity.is_wired()).count();
    let long_range_need =
        snapshot.placements.iter().any(|p| p.connectivity.has_long_range_need());
    // Unanswered counts as no existing connection.
    let has_internet = snapshot.infrastructure.has_internet.unwrap_or(false);

    let router = match (has_internet, long_range_need) {
        (true, false) => "1x ER605W Router",
        (true, true) => "1x ER706W Router",
        (false, false) => "1x MR505 Router",
        (false, true) => "1x ER706W4G-V2 Router",
    };

    let needs_switch = if has_internet {
        snapshot.infrastructure.has_port == Some(false) || wired_count > 1
    } else {
        // The standalone router's own ports carry the wired printers.
        let router_ports = if long_range_need { 4 } else { 3 };
        wired_count > router_ports
    };

    NetworkEquipment {
        router: router.to_string(),
        switch: needs_switch.then(|| "1x 5-Port Switch".to_string()),
        cables: cable_summary(snapshot),
    }
}

/// Tally cable segments per length bucket and render the order line in
/// ascending length order, omitting empty buckets.
fn cable_summary(snapshot: &Snapshot) -> Option<String> {
    let mut buckets = [0u32; CableLength::ALL.len()];
    let mut bump = |length: CableLength| {
        let index = CableLength::ALL.iter().position(|l| *l == length).unwrap_or(0);
        buckets[index] += 1;
    };

    for placement in &snapshot.placements {
        match &placement.connectivity {
            Connectivity::Outlet { router_to_outlet, outlet_to_printer } => {
                bump(router_to_outlet.unwrap_or(SegmentLength::M1).as_cable());
                bump(outlet_to_printer.unwrap_or(SegmentLength::M1).as_cable());
            }
            Connectivity::Direct(DirectRoute::Cable(length)) => bump(*length),
            _ => {}
        }
    }

    let parts: Vec<String> = CableLength::ALL
        .iter()
        .zip(buckets)
        .filter(|(_, count)| *count > 0)
        .map(|(length, count)| format!("{}x {}M Ethernet Cable", count, length.meters()))
        .collect();

    if parts.is_empty() { None } else { Some(parts.join(", ")) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::snapshot::{Distance, Placement, PrinterType};

    fn placement(connectivity: Connectivity) -> Placement {
        Placement { connectivity, ..Placement::new(PrinterType::Receipt) }
    }

    fn snapshot_with(placements: Vec<Placement>, has_internet: Option<bool>) -> Snapshot {
        let mut snapshot = Snapshot::new();
        snapshot.infrastructure.has_internet = has_internet;
        snapshot.placements = placements;
        snapshot
    }

    fn wired_direct(length: CableLength) -> Connectivity {
        Connectivity::Direct(DirectRoute::Cable(length))
    }

    fn wifi_far() -> Connectivity {
        Connectivity::Wireless { distance: Some(Distance::Over10) }
    }

    #[test]
    fn router_table_covers_all_four_combinations() {
        let near = snapshot_with(vec![], Some(true));
        assert_eq!(derive_network_equipment(&near).router, "1x ER605W Router");

        let far = snapshot_with(vec![placement(wifi_far())], Some(true));
        assert_eq!(derive_network_equipment(&far).router, "1x ER706W Router");

        let offline_near = snapshot_with(vec![], Some(false));
        assert_eq!(derive_network_equipment(&offline_near).router, "1x MR505 Router");

        let offline_far = snapshot_with(vec![placement(wifi_far())], Some(false));
        assert_eq!(derive_network_equipment(&offline_far).router, "1x ER706W4G-V2 Router");
    }

    #[test]
    fn unanswered_internet_question_selects_standalone_router() {
        let snapshot = snapshot_with(vec![], None);
        assert_eq!(derive_network_equipment(&snapshot).router, "1x MR505 Router");
    }

    #[test]
    fn switch_needed_beyond_one_wired_printer_with_internet() {
        let mut one = snapshot_with(vec![placement(wired_direct(CableLength::M3))], Some(true));
        one.infrastructure.has_port = Some(true);
        assert_eq!(derive_network_equipment(&one).switch, None);

        let mut two = snapshot_with(
            vec![
                placement(wired_direct(CableLength::M3)),
                placement(wired_direct(CableLength::M5)),
            ],
            Some(true),
        );
        two.infrastructure.has_port = Some(true);
        assert_eq!(
            derive_network_equipment(&two).switch,
            Some("1x 5-Port Switch".to_string())
        );
    }

    #[test]
    fn switch_needed_when_customer_router_has_no_free_port() {
        let mut snapshot = snapshot_with(vec![], Some(true));
        snapshot.infrastructure.has_port = Some(false);
        assert!(derive_network_equipment(&snapshot).switch.is_some());

        // Unanswered port question does not force a switch.
        snapshot.infrastructure.has_port = None;
        assert!(derive_network_equipment(&snapshot).switch.is_none());
    }

    #[test]
    fn standalone_router_port_budget_is_three_or_four() {
        let wired = |n: usize| -> Vec<Placement> {
            (0..n).map(|_| placement(wired_direct(CableLength::M1))).collect()
        };

        // Three ports without long-range need.
        assert!(derive_network_equipment(&snapshot_with(wired(3), Some(false))).switch.is_none());
        assert!(derive_network_equipment(&snapshot_with(wired(4), Some(false))).switch.is_some());

        // Four ports on the long-range 4G router.
        let mut four = wired(4);
        four.push(placement(wifi_far()));
        assert!(derive_network_equipment(&snapshot_with(four, Some(false))).switch.is_none());
        let mut five = wired(5);
        five.push(placement(wifi_far()));
        assert!(derive_network_equipment(&snapshot_with(five, Some(false))).switch.is_some());
    }

    #[test]
    fn cable_tally_aggregates_ascending_with_counts() {
        let placements = vec![
            placement(wired_direct(CableLength::M3)),
            placement(wired_direct(CableLength::M3)),
            placement(Connectivity::Outlet {
                router_to_outlet: Some(SegmentLength::M1),
                outlet_to_printer: Some(SegmentLength::M5),
            }),
        ];
        let equipment = derive_network_equipment(&snapshot_with(placements, Some(true)));
        assert_eq!(
            equipment.cables.as_deref(),
            Some("1x 1M Ethernet Cable, 2x 3M Ethernet Cable, 1x 5M Ethernet Cable")
        );
    }

    #[test]
    fn outlet_segments_default_to_one_meter() {
        let placements = vec![placement(Connectivity::Outlet {
            router_to_outlet: None,
            outlet_to_printer: None,
        })];
        let equipment = derive_network_equipment(&snapshot_with(placements, Some(true)));
        assert_eq!(equipment.cables.as_deref(), Some("2x 1M Ethernet Cable"));
    }

    #[test]
    fn pending_direct_run_is_wired_but_contributes_no_cable() {
        let placements = vec![placement(Connectivity::Direct(DirectRoute::Pending))];
        let equipment = derive_network_equipment(&snapshot_with(placements, Some(true)));
        assert_eq!(equipment.cables, None);
    }

    #[test]
    fn no_wired_placements_yields_absent_cables_and_switch() {
        let snapshot = snapshot_with(
            vec![placement(Connectivity::Wireless { distance: Some(Distance::Under10) })],
            Some(true),
        );
        let equipment = derive_network_equipment(&snapshot);
        assert_eq!(equipment.switch, None);
        assert_eq!(equipment.cables, None);
    }

    #[test]
    fn derivation_is_deterministic() {
        let snapshot = snapshot_with(
            vec![
                placement(wired_direct(CableLength::M10)),
                placement(wifi_far()),
                placement(Connectivity::Unknown),
            ],
            Some(true),
        );
        assert_eq!(derive_network_equipment(&snapshot), derive_network_equipment(&snapshot));
    }
}
