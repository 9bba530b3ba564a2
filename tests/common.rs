//! Common test utilities for building flows, mappings and seeded stores.
use foreflow::prelude::*;

/// Seeds a store with a small background landscape.
///
/// `background` holds technosphere providers (each with a production
/// exchange), `biosphere` holds elementary flows without production. The
/// landfill provider produces its reference product with amount `-1.0`,
/// matching the treatment convention.
#[allow(dead_code)]
pub fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new();

    let grid = NodeKey::new("background", "grid-kwh");
    store.add_activity(
        ActivityNode::new(grid.clone(), "market for electricity, medium voltage")
            .with_unit("kilowatt hour")
            .with_location("DE"),
    );
    store
        .add_production(&grid, 1.0)
        .expect("Failed to seed grid production");

    let water = NodeKey::new("background", "tap-water");
    store.add_activity(
        ActivityNode::new(water.clone(), "market for water, deionised")
            .with_unit("kilogram")
            .with_location("RER"),
    );
    store
        .add_production(&water, 1.0)
        .expect("Failed to seed water production");

    let solvent = NodeKey::new("background", "solvent-m3");
    store.add_activity(
        ActivityNode::new(solvent.clone(), "market for solvent, organic")
            .with_unit("cubic meter")
            .with_location("GLO"),
    );
    store
        .add_production(&solvent, 1.0)
        .expect("Failed to seed solvent production");

    let landfill = NodeKey::new("background", "landfill");
    store.add_activity(
        ActivityNode::new(landfill.clone(), "treatment of inert waste, sanitary landfill")
            .with_unit("kilogram")
            .with_location("CH"),
    );
    store
        .add_production(&landfill, -1.0)
        .expect("Failed to seed landfill production");

    let heat = NodeKey::new("background", "district-heat");
    store.add_activity(
        ActivityNode::new(heat.clone(), "heat, district or industrial")
            .with_unit("megajoule")
            .with_location("CH"),
    );
    store
        .add_production(&heat, 1.0)
        .expect("Failed to seed heat production");

    store.add_activity(
        ActivityNode::new(NodeKey::new("biosphere", "co2-air"), "Carbon dioxide, fossil")
            .with_unit("kilogram")
            .with_categories(["air"]),
    );
    store.add_activity(
        ActivityNode::new(NodeKey::new("biosphere", "water-river"), "Water, river")
            .with_unit("cubic meter")
            .with_categories(["natural resource", "in water"]),
    );

    store
}

/// A mapping covering the flows used by the end-to-end fixtures.
#[allow(dead_code)]
pub fn base_mapping() -> MappingTable {
    let mut mapping = MappingTable::new();
    mapping.insert(
        "ELEC",
        MappingEntry::new("background", "grid-kwh").with_unit("kilowatt hour"),
    );
    mapping.insert("WATER-IN", MappingEntry::new("background", "tap-water"));
    mapping.insert("CO2-OUT", MappingEntry::new("biosphere", "co2-air"));
    mapping.insert("SLUDGE", MappingEntry::new("background", "landfill"));
    mapping
}

/// Standard metadata for the process under test.
#[allow(dead_code)]
pub fn process_meta() -> ProcessMeta {
    ProcessMeta::new("steam production, test rig", "kilogram", "steam")
}

/// Creates a bare foreground process node to route edges onto.
#[allow(dead_code)]
pub fn foreground_process(store: &mut MemoryStore) -> NodeKey {
    ensure_database(store, "foreground");
    store
        .create_process(
            "foreground",
            NewProcess {
                name: "process under test".to_string(),
                location: "GLO".to_string(),
                kind: ProcessKind::WithReferenceProduct,
                unit: Some("kilogram".to_string()),
                reference_product: Some("steam".to_string()),
                code: None,
            },
        )
        .expect("Failed to create foreground process")
}

/// A classified energy flow at the utility boundary.
#[allow(dead_code)]
pub fn energy_flow(name: &str, joules: f64, util_type: &str, role: FlowRole) -> ClassifiedFlow {
    let record = FlowRecord::new(name, joules, "J").with_util_type(util_type);
    ClassifiedFlow::new(&record, FlowPosition::Energy, role)
}

/// A classified material input flow.
#[allow(dead_code)]
pub fn material_input(name: &str, kg: f64, role: FlowRole) -> ClassifiedFlow {
    let record = FlowRecord::new(name, kg, "kg");
    ClassifiedFlow::new(&record, FlowPosition::MaterialInput, role)
}

/// A classified material output flow.
#[allow(dead_code)]
pub fn material_output(name: &str, kg: f64, role: FlowRole) -> ClassifiedFlow {
    let record = FlowRecord::new(name, kg, "kg");
    ClassifiedFlow::new(&record, FlowPosition::MaterialOutput, role)
}

/// A normalized row as the builder would see it, without going through
/// normalization. Mass-based, one field per routing decision.
#[allow(dead_code)]
pub fn mass_row(
    flow: &str,
    role: FlowRole,
    amount: f64,
    direction: Option<Direction>,
) -> NormalizedRow {
    let (group, flow_id) = match direction {
        Some(Direction::Input) => (FlowGroup::MaterialInputs, format!("minput_{}", flow)),
        _ => (FlowGroup::Outputs, format!("moutput_{}", flow)),
    };
    NormalizedRow {
        flow: flow.to_string(),
        role,
        amount,
        unit: "kg".to_string(),
        group,
        direction,
        flow_id,
        utility: None,
    }
}

/// The reference-flow row of a normalized table.
#[allow(dead_code)]
pub fn reference_row(flow: &str) -> NormalizedRow {
    mass_row(flow, FlowRole::ReferenceFlow, 1.0, Some(Direction::Output))
}
