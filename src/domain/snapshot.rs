//! Configuration snapshot: everything the wizard collects for one order.
//!
//! The snapshot is a plain value. The presentation layer owns every
//! transition and persists the draft after each mutation; derivation
//! only ever reads a completed snapshot.

use serde::{Deserialize, Serialize};

/// A checkout point, optionally equipped with a POS and/or CDS iPad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: u32,
    pub has_pos: bool,
    pub has_cds: bool,
}

/// Total peripheral counts, independent of station count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peripherals {
    pub stands: u32,
    pub drawers: u32,
    pub readers: u32,
}

impl Peripherals {
    /// Whether any peripheral was requested at all.
    pub fn any(&self) -> bool {
        self.stands > 0 || self.drawers > 0 || self.readers > 0
    }
}

/// Requested printer counts per type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterCounts {
    pub receipt: u32,
    pub kitchen: u32,
    pub label: u32,
}

impl PrinterCounts {
    pub fn total(&self) -> u32 {
        self.receipt + self.kitchen + self.label
    }

    pub fn get(&self, printer_type: PrinterType) -> u32 {
        match printer_type {
            PrinterType::Receipt => self.receipt,
            PrinterType::Kitchen => self.kitchen,
            PrinterType::Label => self.label,
        }
    }
}

/// Printer category. Order matters: placements are enumerated receipt
/// first, then kitchen, then label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrinterType {
    Receipt,
    Kitchen,
    Label,
}

impl PrinterType {
    pub const ALL: [PrinterType; 3] =
        [PrinterType::Receipt, PrinterType::Kitchen, PrinterType::Label];

    /// Human-readable type label used in the order summary.
    pub fn label(self) -> &'static str {
        match self {
            PrinterType::Receipt => "Receipt",
            PrinterType::Kitchen => "Kitchen",
            PrinterType::Label => "Label",
        }
    }
}

/// Physical location of a printer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    FrontOfHouseCounter,
    BackOfHouseKitchen,
    BackOfHouseExpeditor,
    Bar,
    BackOffice,
    /// Free-text location entered by the operator.
    Other(String),
}

impl Location {
    /// Snake-case identifier for the named locations.
    pub fn slug(&self) -> &'static str {
        match self {
            Location::FrontOfHouseCounter => "front_of_house_counter",
            Location::BackOfHouseKitchen => "back_of_house_kitchen",
            Location::BackOfHouseExpeditor => "back_of_house_expeditor",
            Location::Bar => "bar",
            Location::BackOffice => "back_office",
            Location::Other(_) => "other",
        }
    }

    /// Display label: the custom text for `Other`, otherwise the
    /// title-cased, underscore-to-space transform of the slug.
    pub fn display_label(&self) -> String {
        match self {
            Location::Other(custom) if !custom.trim().is_empty() => custom.clone(),
            Location::Other(_) => "Other".to_string(),
            named => title_case(named.slug()),
        }
    }
}

fn title_case(slug: &str) -> String {
    slug.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Distance bucket from the router for wireless placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    Under10,
    Over10,
}

/// Ethernet cable length in meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CableLength {
    M1,
    M3,
    M5,
    M10,
}

impl CableLength {
    /// All lengths, ascending.
    pub const ALL: [CableLength; 4] =
        [CableLength::M1, CableLength::M3, CableLength::M5, CableLength::M10];

    pub fn meters(self) -> u32 {
        match self {
            CableLength::M1 => 1,
            CableLength::M3 => 3,
            CableLength::M5 => 5,
            CableLength::M10 => 10,
        }
    }
}

/// Cable segment length for ethernet-outlet runs. Wall segments are
/// stocked in 1/3/5 m only; longer runs take the direct-cable path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentLength {
    M1,
    M3,
    M5,
}

impl SegmentLength {
    pub fn meters(self) -> u32 {
        self.as_cable().meters()
    }

    /// The equivalent stock cable for the order tally.
    pub fn as_cable(self) -> CableLength {
        match self {
            SegmentLength::M1 => CableLength::M1,
            SegmentLength::M3 => CableLength::M3,
            SegmentLength::M5 => CableLength::M5,
        }
    }
}

/// Resolution of a visible cable run from the router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectRoute {
    /// The run is possible but no length has been chosen yet.
    Pending,
    /// A cable of the chosen length.
    Cable(CableLength),
    /// The operator chose WiFi over the possible cable run.
    Wifi { distance: Option<Distance> },
}

/// How one printer reaches the network. Replaces the original's mixed
/// cable-length/"use wifi instead" field with a tagged representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connectivity {
    /// Not yet answered.
    #[default]
    Unknown,
    /// A visible cable run from the router is possible.
    Direct(DirectRoute),
    /// No visible run, but a wall-mounted ethernet outlet exists.
    /// Segment lengths default to 1 m until chosen.
    Outlet {
        router_to_outlet: Option<SegmentLength>,
        outlet_to_printer: Option<SegmentLength>,
    },
    /// No cable run and no outlet.
    Wireless { distance: Option<Distance> },
}

impl Connectivity {
    /// A placement is wired when it routes via an outlet, or a direct
    /// run is possible and WiFi was not chosen over it. A pending
    /// direct run counts as wired.
    pub fn is_wired(&self) -> bool {
        matches!(
            self,
            Connectivity::Outlet { .. }
                | Connectivity::Direct(DirectRoute::Pending)
                | Connectivity::Direct(DirectRoute::Cable(_))
        )
    }

    /// Recorded distance bucket, present only on WiFi paths.
    pub fn distance(&self) -> Option<Distance> {
        match self {
            Connectivity::Direct(DirectRoute::Wifi { distance })
            | Connectivity::Wireless { distance } => *distance,
            _ => None,
        }
    }

    /// A wireless placement beyond the router's reliable range.
    pub fn has_long_range_need(&self) -> bool {
        !self.is_wired() && self.distance() == Some(Distance::Over10)
    }
}

/// Physical-location and connectivity configuration for one printer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub printer_type: PrinterType,
    pub location: Option<Location>,
    /// Paired station, by id. The station may have been removed since.
    pub station_id: Option<u32>,
    #[serde(default)]
    pub connectivity: Connectivity,
}

impl Placement {
    pub fn new(printer_type: PrinterType) -> Self {
        Self { printer_type, location: None, station_id: None, connectivity: Connectivity::Unknown }
    }
}

/// Where the provision router will live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouterLocation {
    FrontOfHouse,
    BackOfHouse,
    BackOffice,
}

impl RouterLocation {
    pub fn label(self) -> &'static str {
        match self {
            RouterLocation::FrontOfHouse => "Front of House",
            RouterLocation::BackOfHouse => "Back of House",
            RouterLocation::BackOffice => "Back Office",
        }
    }
}

/// SIM card provider for sites without an ISP connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimProvider {
    SingtelHeya,
    M1Maxx,
    StarhubPrepaid,
    Other(String),
}

impl SimProvider {
    /// Non-recommended providers may have compatibility issues with
    /// the MR505 router.
    pub fn is_recommended(&self) -> bool {
        !matches!(self, SimProvider::Other(_))
    }
}

/// Site network situation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infrastructure {
    /// Whether the customer has an existing ISP connection. `None`
    /// while unanswered; derivation treats unanswered as no.
    pub has_internet: Option<bool>,
    pub router_location: Option<RouterLocation>,
    /// Whether the customer's ISP router has a free LAN port.
    pub has_port: Option<bool>,
    pub sim_provider: Option<SimProvider>,
}

/// The complete input to derivation: one order in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub customer_name: String,
    pub stations: Vec<Station>,
    pub peripherals: Peripherals,
    pub printer_counts: PrinterCounts,
    /// Flattened placement list in canonical order: all receipt
    /// printers, then kitchen, then label. Kept in sync with
    /// `printer_counts` by [`Snapshot::set_printer_count`].
    pub placements: Vec<Placement>,
    pub infrastructure: Infrastructure,
    /// Monotonic station id source. Never decremented, so removed ids
    /// are not reused within a session.
    station_counter: u32,
}

impl Snapshot {
    /// Fresh snapshot with one auto-added station.
    pub fn new() -> Self {
        let mut snapshot = Self {
            customer_name: String::new(),
            stations: Vec::new(),
            peripherals: Peripherals::default(),
            printer_counts: PrinterCounts::default(),
            placements: Vec::new(),
            infrastructure: Infrastructure::default(),
            station_counter: 0,
        };
        snapshot.add_station();
        snapshot
    }

    /// Append a new station and return its id.
    pub fn add_station(&mut self) -> u32 {
        self.station_counter += 1;
        self.stations.push(Station { id: self.station_counter, has_pos: false, has_cds: false });
        self.station_counter
    }

    /// Remove a station by id. Refuses to remove the last remaining
    /// station; returns whether a station was removed.
    pub fn remove_station(&mut self, id: u32) -> bool {
        if self.stations.len() <= 1 {
            return false;
        }
        let before = self.stations.len();
        self.stations.retain(|s| s.id != id);
        self.stations.len() < before
    }

    pub fn station_mut(&mut self, id: u32) -> Option<&mut Station> {
        self.stations.iter_mut().find(|s| s.id == id)
    }

    /// Positional display name for a station reference, e.g. "Station 2".
    /// Dangling references resolve to "Unknown Station".
    pub fn station_display_name(&self, station_id: Option<u32>) -> String {
        station_id
            .and_then(|id| self.stations.iter().position(|s| s.id == id))
            .map(|index| format!("Station {}", index + 1))
            .unwrap_or_else(|| "Unknown Station".to_string())
    }

    pub fn pos_ipads(&self) -> u32 {
        self.stations.iter().filter(|s| s.has_pos).count() as u32
    }

    pub fn cds_ipads(&self) -> u32 {
        self.stations.iter().filter(|s| s.has_cds).count() as u32
    }

    /// Update one printer count and re-sync the placement list.
    ///
    /// Existing placements keep their configuration. When a count is
    /// decreased the highest-ordinal placements of that type are
    /// dropped; placements of other types are unaffected.
    pub fn set_printer_count(&mut self, printer_type: PrinterType, count: u32) {
        match printer_type {
            PrinterType::Receipt => self.printer_counts.receipt = count,
            PrinterType::Kitchen => self.printer_counts.kitchen = count,
            PrinterType::Label => self.printer_counts.label = count,
        }
        self.sync_placements();
    }

    fn sync_placements(&mut self) {
        let mut next = Vec::with_capacity(self.printer_counts.total() as usize);
        for printer_type in PrinterType::ALL {
            let count = self.printer_counts.get(printer_type) as usize;
            let mut kept: Vec<Placement> = self
                .placements
                .iter()
                .filter(|p| p.printer_type == printer_type)
                .take(count)
                .cloned()
                .collect();
            while kept.len() < count {
                kept.push(Placement::new(printer_type));
            }
            next.extend(kept);
        }
        self.placements = next;
    }

    /// Wizard heading for the placement at `index`, e.g.
    /// "Kitchen Printer #2" (ordinal within the type).
    pub fn placement_title(&self, index: usize) -> String {
        let Some(placement) = self.placements.get(index) else {
            return format!("Printer #{}", index + 1);
        };
        let ordinal = self.placements[..index]
            .iter()
            .filter(|p| p.printer_type == placement.printer_type)
            .count()
            + 1;
        format!("{} Printer #{}", placement.printer_type.label(), ordinal)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}
