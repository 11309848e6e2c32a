//! Interactive order wizard.
//!
//! Mirrors the five-step flow operators know: stations, printers,
//! placement, infrastructure, review. The draft is persisted after
//! every step, and interrupting a prompt (Ctrl-C) cancels cleanly
//! without discarding it.

use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::app::commands::{copy, submit};
use crate::domain::{
    AppError, CableLength, Connectivity, DirectRoute, Distance, Location, Peripherals,
    PrinterType, RouterLocation, SegmentLength, SimProvider, Snapshot, Station,
    derive_complexity, derive_network_equipment, format_order_text,
};
use crate::ports::DraftStore;
use crate::services::{ArboardClipboard, HttpRecordClient};

pub(super) fn run(drafts: &impl DraftStore) -> Result<(), AppError> {
    let mut snapshot = if drafts.exists() { drafts.load()? } else { Snapshot::new() };

    println!("Waffle Hardware Provisioner");
    println!("Configure POS stations, printers, and network equipment for the customer.\n");

    if step_stations(&mut snapshot, drafts)?.is_none() {
        return cancel(drafts, &snapshot);
    }
    drafts.save(&snapshot)?;

    if step_printers(&mut snapshot)?.is_none() {
        return cancel(drafts, &snapshot);
    }
    drafts.save(&snapshot)?;

    if step_placements(&mut snapshot, drafts)?.is_none() {
        return cancel(drafts, &snapshot);
    }

    if step_infrastructure(&mut snapshot)?.is_none() {
        return cancel(drafts, &snapshot);
    }
    drafts.save(&snapshot)?;

    if step_review(&snapshot, drafts)?.is_none() {
        return cancel(drafts, &snapshot);
    }

    println!("\n✅ Order draft saved. Use 'provision submit' to record it in Notion.");
    Ok(())
}

fn cancel(drafts: &impl DraftStore, snapshot: &Snapshot) -> Result<(), AppError> {
    drafts.save(snapshot)?;
    println!("\nWizard cancelled. Draft saved; run 'provision wizard' to resume.");
    Ok(())
}

// ---- Step 1: customer, stations, peripherals ----

fn step_stations(
    snapshot: &mut Snapshot,
    drafts: &impl DraftStore,
) -> Result<Option<()>, AppError> {
    println!("Step 1/5: Stations & peripherals");

    let current_name = snapshot.customer_name.clone();
    let Some(name) = prompt_text("Customer business name", &current_name)? else {
        return Ok(None);
    };
    snapshot.customer_name = name.trim().to_string();
    drafts.save(snapshot)?;

    loop {
        print_station_summary(snapshot);
        for warning in station_warnings(snapshot) {
            println!("{}", warning);
        }

        let items = ["Add station", "Configure station", "Remove station", "Continue"];
        let Some(choice) = prompt_select("Stations", &items, 3)? else {
            return Ok(None);
        };
        match choice {
            0 => {
                snapshot.add_station();
            }
            1 => {
                let Some(id) = pick_station(snapshot, "Configure which station?")? else {
                    return Ok(None);
                };
                let (has_pos, has_cds) = snapshot
                    .stations
                    .iter()
                    .find(|s| s.id == id)
                    .map(|s| (s.has_pos, s.has_cds))
                    .unwrap_or((false, false));
                let Some(pos) = prompt_confirm("POS iPad?", has_pos)? else {
                    return Ok(None);
                };
                let Some(cds) = prompt_confirm("CDS iPad?", has_cds)? else {
                    return Ok(None);
                };
                if let Some(station) = snapshot.station_mut(id) {
                    station.has_pos = pos;
                    station.has_cds = cds;
                }
            }
            2 => {
                if snapshot.stations.len() == 1 {
                    println!("⚠️ At least one station is required.");
                } else {
                    let Some(id) = pick_station(snapshot, "Remove which station?")? else {
                        return Ok(None);
                    };
                    snapshot.remove_station(id);
                }
            }
            _ => break,
        }
        drafts.save(snapshot)?;
    }

    println!("Total peripherals needed (allocated to stations on-site):");
    let Some(stands) = prompt_count("POS stands", snapshot.peripherals.stands)? else {
        return Ok(None);
    };
    let Some(drawers) = prompt_count("Cash drawers", snapshot.peripherals.drawers)? else {
        return Ok(None);
    };
    let Some(readers) = prompt_count("Card readers", snapshot.peripherals.readers)? else {
        return Ok(None);
    };
    snapshot.peripherals = Peripherals { stands, drawers, readers };
    Ok(Some(()))
}

fn print_station_summary(snapshot: &Snapshot) {
    for (index, station) in snapshot.stations.iter().enumerate() {
        println!("  Station {}{}", index + 1, station_equipment_suffix(station));
    }
}

fn station_equipment_suffix(station: &Station) -> &'static str {
    match (station.has_pos, station.has_cds) {
        (true, true) => " (POS + CDS)",
        (true, false) => " (POS)",
        (false, true) => " (CDS)",
        (false, false) => " (no iPads)",
    }
}

fn station_warnings(snapshot: &Snapshot) -> Vec<String> {
    let mut warnings = Vec::new();
    for (index, station) in snapshot.stations.iter().enumerate() {
        if station.has_cds && !station.has_pos {
            warnings.push(format!(
                "⚠️ Station {}: a CDS iPad needs a POS iPad to pair with. Ensure the customer has their own POS iPad.",
                index + 1
            ));
        }
        if !station.has_pos && !station.has_cds {
            warnings.push(format!(
                "⚠️ Station {}: no iPads selected. This station will ship no equipment.",
                index + 1
            ));
        }
    }
    warnings
}

fn pick_station(snapshot: &Snapshot, prompt: &str) -> Result<Option<u32>, AppError> {
    let labels: Vec<String> = snapshot
        .stations
        .iter()
        .enumerate()
        .map(|(index, station)| format!("Station {}{}", index + 1, station_equipment_suffix(station)))
        .collect();
    let items: Vec<&str> = labels.iter().map(String::as_str).collect();
    match prompt_select(prompt, &items, 0)? {
        Some(index) => Ok(Some(snapshot.stations[index].id)),
        None => Ok(None),
    }
}

// ---- Step 2: printer counts ----

fn step_printers(snapshot: &mut Snapshot) -> Result<Option<()>, AppError> {
    println!("\nStep 2/5: Printers");
    let prompts = [
        ("Receipt printers", PrinterType::Receipt),
        ("Kitchen printers", PrinterType::Kitchen),
        ("Label printers", PrinterType::Label),
    ];
    for (label, printer_type) in prompts {
        let Some(count) = prompt_count(label, snapshot.printer_counts.get(printer_type))? else {
            return Ok(None);
        };
        snapshot.set_printer_count(printer_type, count);
    }
    Ok(Some(()))
}

// ---- Step 3: placement per printer ----

const LOCATION_ITEMS: [&str; 6] = [
    "Front of House Counter",
    "Back of House Kitchen",
    "Back of House Expeditor",
    "Bar",
    "Back Office",
    "Other",
];

fn step_placements(
    snapshot: &mut Snapshot,
    drafts: &impl DraftStore,
) -> Result<Option<()>, AppError> {
    println!("\nStep 3/5: Printer placement");
    if snapshot.placements.is_empty() {
        println!("No printers configured.");
        return Ok(Some(()));
    }

    for index in 0..snapshot.placements.len() {
        println!("\n{}", snapshot.placement_title(index));

        let Some(location) = prompt_location()? else {
            return Ok(None);
        };
        let Some(station_id) = pick_station(snapshot, "Paired to which station?")? else {
            return Ok(None);
        };
        let Some(connectivity) = prompt_connectivity()? else {
            return Ok(None);
        };

        let placement = &mut snapshot.placements[index];
        placement.location = Some(location);
        placement.station_id = Some(station_id);
        placement.connectivity = connectivity;

        if placement.printer_type == PrinterType::Label && !placement.connectivity.is_wired() {
            println!(
                "⚠️ Label printers (ZD411) need a wired LAN connection and cannot use WiFi. Pick a cable option or an ethernet outlet for this printer to function."
            );
        }
        drafts.save(snapshot)?;
    }
    Ok(Some(()))
}

fn prompt_location() -> Result<Option<Location>, AppError> {
    let Some(choice) = prompt_select("Physical location", &LOCATION_ITEMS, 0)? else {
        return Ok(None);
    };
    let location = match choice {
        0 => Location::FrontOfHouseCounter,
        1 => Location::BackOfHouseKitchen,
        2 => Location::BackOfHouseExpeditor,
        3 => Location::Bar,
        4 => Location::BackOffice,
        _ => {
            let Some(custom) = prompt_text("Specify location (e.g. Patio Bar)", "")? else {
                return Ok(None);
            };
            Location::Other(custom.trim().to_string())
        }
    };
    Ok(Some(location))
}

fn prompt_connectivity() -> Result<Option<Connectivity>, AppError> {
    let cable_question = "Can we run a visible cable from the router to this printer?";
    let Some(can_cable) = prompt_confirm(cable_question, true)? else {
        return Ok(None);
    };

    if can_cable {
        let items = ["1M", "3M", "5M", "10M", "Use WiFi instead"];
        let Some(choice) = prompt_select("Cable length from router to printer", &items, 0)? else {
            return Ok(None);
        };
        let route = match choice {
            0 => DirectRoute::Cable(CableLength::M1),
            1 => DirectRoute::Cable(CableLength::M3),
            2 => DirectRoute::Cable(CableLength::M5),
            3 => DirectRoute::Cable(CableLength::M10),
            _ => {
                let Some(distance) = prompt_distance()? else {
                    return Ok(None);
                };
                DirectRoute::Wifi { distance: Some(distance) }
            }
        };
        return Ok(Some(Connectivity::Direct(route)));
    }

    let outlet_question = "Is there an ethernet outlet (wall-mounted socket) at this location?";
    let Some(has_outlet) = prompt_confirm(outlet_question, false)? else {
        return Ok(None);
    };
    if has_outlet {
        let Some(first) = prompt_segment("Cable length from router to outlet")? else {
            return Ok(None);
        };
        let Some(second) = prompt_segment("Cable length from outlet to printer")? else {
            return Ok(None);
        };
        return Ok(Some(Connectivity::Outlet {
            router_to_outlet: Some(first),
            outlet_to_printer: Some(second),
        }));
    }

    let Some(distance) = prompt_distance()? else {
        return Ok(None);
    };
    Ok(Some(Connectivity::Wireless { distance: Some(distance) }))
}

fn prompt_segment(prompt: &str) -> Result<Option<SegmentLength>, AppError> {
    let Some(choice) = prompt_select(prompt, &["1M", "3M", "5M"], 0)? else {
        return Ok(None);
    };
    Ok(Some(match choice {
        0 => SegmentLength::M1,
        1 => SegmentLength::M3,
        _ => SegmentLength::M5,
    }))
}

fn prompt_distance() -> Result<Option<Distance>, AppError> {
    let Some(choice) =
        prompt_select("Distance from the router location", &["Under 10M", "Over 10M"], 0)?
    else {
        return Ok(None);
    };
    Ok(Some(if choice == 0 { Distance::Under10 } else { Distance::Over10 }))
}

// ---- Step 4: infrastructure ----

fn step_infrastructure(snapshot: &mut Snapshot) -> Result<Option<()>, AppError> {
    println!("\nStep 4/5: Infrastructure");

    let internet_question = "Does the customer have an existing internet connection?";
    let items = ["Yes, ISP connection", "No, need a SIM card"];
    let Some(choice) = prompt_select(internet_question, &items, 0)? else {
        return Ok(None);
    };

    if choice == 0 {
        snapshot.infrastructure.has_internet = Some(true);
        snapshot.infrastructure.sim_provider = None;

        let locations = ["Front of House", "Back of House", "Back Office"];
        let Some(location) = prompt_select("Where will the router be located?", &locations, 0)?
        else {
            return Ok(None);
        };
        snapshot.infrastructure.router_location = Some(match location {
            0 => RouterLocation::FrontOfHouse,
            1 => RouterLocation::BackOfHouse,
            _ => RouterLocation::BackOffice,
        });

        let port_question = "Does the customer's ISP router have a free LAN port for our use?";
        let Some(port) = prompt_select(port_question, &["Yes", "No / not sure"], 0)? else {
            return Ok(None);
        };
        snapshot.infrastructure.has_port = Some(port == 0);
        if port != 0 {
            println!(
                "⚠️ We need at least one LAN port on the ISP router to connect ours. Without one the customer must contact their ISP or switch to the SIM option."
            );
        }
    } else {
        snapshot.infrastructure.has_internet = Some(false);
        snapshot.infrastructure.router_location = None;
        snapshot.infrastructure.has_port = None;

        let providers = [
            "Singtel Heya (recommended)",
            "M1 Maxx (recommended)",
            "Starhub Prepaid (recommended)",
            "Other",
        ];
        let Some(selected) = prompt_select("SIM card provider", &providers, 0)? else {
            return Ok(None);
        };
        let provider = match selected {
            0 => SimProvider::SingtelHeya,
            1 => SimProvider::M1Maxx,
            2 => SimProvider::StarhubPrepaid,
            _ => {
                let Some(name) = prompt_text("Specify SIM provider (e.g. Circles Life, TPG)", "")?
                else {
                    return Ok(None);
                };
                SimProvider::Other(name.trim().to_string())
            }
        };
        if !provider.is_recommended() {
            println!(
                "⚠️ Non-recommended SIM providers may have compatibility issues with our routers. Verify with the customer before proceeding."
            );
        }
        println!("ℹ️ The MR505 router takes a physical SIM card only (no eSIM). Check the card size.");
        snapshot.infrastructure.sim_provider = Some(provider);
    }
    Ok(Some(()))
}

// ---- Step 5: review ----

fn step_review(snapshot: &Snapshot, drafts: &impl DraftStore) -> Result<Option<()>, AppError> {
    println!("\nStep 5/5: Review");
    loop {
        let equipment = derive_network_equipment(snapshot);
        let complexity = derive_complexity(snapshot, &equipment);
        println!("\n{}", format_order_text(snapshot, &equipment, &complexity));
        println!("ℹ️ Each printer needs its own dedicated power outlet at its location.");
        if let Some(note) = unconfigured_label_note(snapshot) {
            println!("{}", note);
        }
        println!();

        let items = ["Copy to clipboard", "Submit to Notion", "Finish"];
        let Some(choice) = prompt_select("Order summary", &items, 2)? else {
            return Ok(None);
        };
        match choice {
            0 => {
                let copied = ArboardClipboard::new()
                    .and_then(|mut clipboard| copy::execute(drafts, &mut clipboard));
                match copied {
                    Ok(_) => println!("✅ Copied to clipboard"),
                    Err(e) => println!("⚠️ {}", e),
                }
            }
            1 => {
                let submitted = HttpRecordClient::from_env()
                    .and_then(|client| submit::execute(drafts, &client));
                match submitted {
                    Ok(receipt) => match receipt.record_url {
                        Some(url) => println!("✅ Order created in Notion: {}", url),
                        None => println!("✅ Order created in Notion"),
                    },
                    Err(e) => println!("⚠️ Failed to create order: {}", e),
                }
            }
            _ => return Ok(Some(())),
        }
    }
}

/// Label printers with no connectivity answer yet are rated as
/// unwired, which pushes the complexity to its highest tier. Tell the
/// operator the rating settles once the placement is configured.
fn unconfigured_label_note(snapshot: &Snapshot) -> Option<&'static str> {
    let pending = snapshot.placements.iter().any(|p| {
        p.printer_type == PrinterType::Label && p.connectivity == Connectivity::Unknown
    });
    pending.then_some(
        "ℹ️ Unconfigured label printers are rated as unwired; the complexity rating will settle once their wired path is chosen.",
    )
}

// ---- Prompt helpers ----
//
// An interrupted prompt (Ctrl-C) maps to Ok(None) so callers can
// unwind the wizard without treating it as a failure.

fn prompt_text(prompt: &str, initial: &str) -> Result<Option<String>, AppError> {
    let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
    if !initial.is_empty() {
        input = input.with_initial_text(initial);
    }
    match input.interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read input: {}", err))),
    }
}

fn prompt_count(prompt: &str, initial: u32) -> Result<Option<u32>, AppError> {
    match Input::<u32>::new().with_prompt(prompt).default(initial).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read count: {}", err))),
    }
}

fn prompt_select(prompt: &str, items: &[&str], default: usize) -> Result<Option<usize>, AppError> {
    match Select::new().with_prompt(prompt).items(items).default(default).interact() {
        Ok(index) => Ok(Some(index)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Selection failed: {}", err))),
    }
}

fn prompt_confirm(prompt: &str, default: bool) -> Result<Option<bool>, AppError> {
    match Confirm::new().with_prompt(prompt).default(default).interact() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Confirmation failed: {}", err))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cds_without_pos_is_flagged() {
        let mut snapshot = Snapshot::new();
        snapshot.stations[0].has_cds = true;
        let warnings = station_warnings(&snapshot);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Station 1"));
        assert!(warnings[0].contains("POS iPad"));
    }

    #[test]
    fn unconfigured_label_placement_gets_a_rating_note() {
        let mut snapshot = Snapshot::new();
        snapshot.set_printer_count(PrinterType::Label, 1);
        assert!(unconfigured_label_note(&snapshot).is_some());

        snapshot.placements[0].connectivity = Connectivity::Direct(DirectRoute::Pending);
        assert!(unconfigured_label_note(&snapshot).is_none());
    }

    #[test]
    fn empty_station_is_flagged() {
        let snapshot = Snapshot::new();
        let warnings = station_warnings(&snapshot);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("no iPads"));
    }

    #[test]
    fn equipped_stations_produce_no_warnings() {
        let mut snapshot = Snapshot::new();
        snapshot.stations[0].has_pos = true;
        snapshot.stations[0].has_cds = true;
        assert!(station_warnings(&snapshot).is_empty());
    }
}
