//! Unit tests for classification, units, mapping and identifier types.
mod common;
use foreflow::flow::role_counts;
use foreflow::impact::methods_by_family;
use foreflow::mapping::{activity_label, search_activities};
use foreflow::prelude::*;
use foreflow::units::{CUBIC_METER, KILOGRAM, is_volumetric, normalize_unit};

use common::*;

#[test]
fn test_unit_alias_normalization() {
    assert_eq!(normalize_unit("kg"), KILOGRAM);
    assert_eq!(normalize_unit(" Kilograms "), KILOGRAM);
    assert_eq!(normalize_unit("M3"), CUBIC_METER);
    assert_eq!(normalize_unit("m^3"), CUBIC_METER);
    assert_eq!(normalize_unit("cubic metre"), CUBIC_METER);
    assert_eq!(normalize_unit("MJ"), "megajoule");
    assert_eq!(normalize_unit("megajoules"), "megajoule");
    assert_eq!(normalize_unit("kWh"), "kilowatt hour");
    assert_eq!(normalize_unit("kW·h"), "kilowatt hour");
    assert_eq!(normalize_unit("kW h"), "kilowatt hour");
    // Unknown labels pass through folded, empty stays empty
    assert_eq!(normalize_unit(" Bucket "), "bucket");
    assert_eq!(normalize_unit(""), "");
}

#[test]
fn test_volumetric_detection() {
    assert!(is_volumetric("m3"));
    assert!(is_volumetric("Cubic Meter"));
    assert!(!is_volumetric("kg"));
    assert!(!is_volumetric(""));
}

#[test]
fn test_direction_parse() {
    assert_eq!(Direction::parse("Input"), Some(Direction::Input));
    assert_eq!(Direction::parse(" OUTPUT "), Some(Direction::Output));
    assert_eq!(Direction::parse(""), None);
    assert_eq!(Direction::parse("   "), None);
    assert_eq!(
        Direction::parse("Sideways"),
        Some(Direction::Other("sideways".to_string()))
    );
    assert_eq!(format!("{}", Direction::Input), "input");
    assert_eq!(format!("{}", Direction::Output), "output");
}

#[test]
fn test_flow_role_serde_labels() {
    let reference: FlowRole = serde_json::from_str(r#""Reference Flow""#).unwrap();
    assert_eq!(reference, FlowRole::ReferenceFlow);
    let avoided: FlowRole = serde_json::from_str(r#""Avoided Product""#).unwrap();
    assert_eq!(avoided, FlowRole::AvoidedProduct);
    let exotic: FlowRole = serde_json::from_str(r#""Mystery""#).unwrap();
    assert_eq!(exotic, FlowRole::Other("Mystery".to_string()));

    assert_eq!(
        serde_json::to_string(&FlowRole::ReferenceFlow).unwrap(),
        r#""Reference Flow""#
    );
    assert_eq!(format!("{}", FlowRole::AvoidedProduct), "Avoided Product");
    assert_eq!(format!("{}", FlowRole::Waste), "Waste");
}

#[test]
fn test_flow_position_ids() {
    assert_eq!(FlowPosition::Energy.flow_id("E-101"), "energy_E-101");
    assert_eq!(FlowPosition::MaterialInput.flow_id("WATER"), "minput_WATER");
    assert_eq!(FlowPosition::MaterialOutput.flow_id("STEAM"), "moutput_STEAM");
}

#[test]
fn test_flow_position_directions_and_categories() {
    assert_eq!(FlowPosition::Energy.direction(), Direction::Input);
    assert_eq!(FlowPosition::MaterialInput.direction(), Direction::Input);
    assert_eq!(FlowPosition::MaterialOutput.direction(), Direction::Output);
    assert_eq!(FlowPosition::Energy.category(), FlowCategory::Energy);
    assert_eq!(FlowPosition::MaterialOutput.category(), FlowCategory::Material);
}

#[test]
fn test_allowed_roles_per_position() {
    let energy = FlowPosition::Energy.allowed_roles();
    assert_eq!(
        energy,
        &[
            FlowRole::Technosphere,
            FlowRole::Biosphere,
            FlowRole::AvoidedProduct
        ]
    );
    assert!(!FlowPosition::Energy.allows(&FlowRole::ReferenceFlow));

    let inputs = FlowPosition::MaterialInput.allowed_roles();
    assert!(inputs.contains(&FlowRole::ReferenceFlow));
    assert!(!inputs.contains(&FlowRole::Waste));

    let outputs = FlowPosition::MaterialOutput.allowed_roles();
    assert!(outputs.contains(&FlowRole::Waste));
    assert!(outputs.contains(&FlowRole::AvoidedProduct));
    assert!(!outputs.contains(&FlowRole::Technosphere));
}

#[test]
fn test_extracted_flows_counting() {
    assert!(ExtractedFlows::default().is_empty());

    let flows = ExtractedFlows {
        energy: vec![FlowRecord::new("POWER", 250_000.0, "Watt").with_util_type("ELECTRICITY")],
        material_inputs: vec![FlowRecord::new("WATER-IN", 120.0, "kg/hr")],
        material_outputs: vec![FlowRecord::new("STEAM-OUT", 100.0, "kg/hr")],
    };
    assert!(!flows.is_empty());
    assert_eq!(flows.len(), 3);
    // Table order: energy, then material inputs, then outputs
    let positions: Vec<_> = flows.positioned().map(|(position, _)| position).collect();
    assert_eq!(
        positions,
        vec![
            FlowPosition::Energy,
            FlowPosition::MaterialInput,
            FlowPosition::MaterialOutput,
        ]
    );
}

#[test]
fn test_select_reference_exactly_one() {
    let flows = vec![
        material_input("WATER-IN", 50.0, FlowRole::Technosphere),
        material_output("STEAM-OUT", 100.0, FlowRole::ReferenceFlow),
    ];
    let reference = select_reference(&flows).expect("Failed to select reference");
    assert_eq!(reference.name, "STEAM-OUT");
    assert_eq!(reference.id, "moutput_STEAM-OUT");
}

#[test]
fn test_select_reference_none_designated() {
    let flows = vec![material_input("WATER-IN", 50.0, FlowRole::Technosphere)];
    assert_eq!(
        select_reference(&flows),
        Err(ReferenceSelectionError::NoReference)
    );
}

#[test]
fn test_select_reference_multiple_designated() {
    let flows = vec![
        material_output("A", 1.0, FlowRole::ReferenceFlow),
        material_output("B", 2.0, FlowRole::ReferenceFlow),
        material_output("C", 3.0, FlowRole::ReferenceFlow),
    ];
    assert_eq!(
        select_reference(&flows),
        Err(ReferenceSelectionError::MultipleReferences { count: 3 })
    );
}

#[test]
fn test_role_counts_first_appearance_order() {
    let flows = vec![
        material_input("A", 1.0, FlowRole::Technosphere),
        material_output("B", 1.0, FlowRole::ReferenceFlow),
        material_input("C", 1.0, FlowRole::Technosphere),
        material_output("D", 1.0, FlowRole::Waste),
    ];
    let counts = role_counts(&flows);
    assert_eq!(
        counts,
        vec![
            (FlowRole::Technosphere, 2),
            (FlowRole::ReferenceFlow, 1),
            (FlowRole::Waste, 1),
        ]
    );
}

#[test]
fn test_mapping_table_accepts_both_entry_shapes() {
    let mapping = MappingTable::from_json_str(
        r#"{
            "ELEC": {"database": "bg", "code": "grid", "unit": "kilowatt hour", "density": null},
            "OLD": ["bg", "legacy-code"],
            "DENSE": {"database": "bg", "code": "liquid", "unit": "cubic meter", "density": "850.5"},
            "JUNK": {"database": "bg", "code": "x", "density": "n/a"}
        }"#,
    )
    .expect("Failed to parse mapping table");

    assert_eq!(mapping.len(), 4);

    let old = mapping.get("OLD").unwrap();
    assert_eq!(old.database, "bg");
    assert_eq!(old.code, "legacy-code");
    assert_eq!(old.unit, None);
    assert_eq!(old.density, None);

    let elec = mapping.get("ELEC").unwrap();
    assert_eq!(elec.unit.as_deref(), Some("kilowatt hour"));
    assert_eq!(elec.density, None);

    // Spreadsheet round trips leave densities as text
    assert_eq!(mapping.get("DENSE").unwrap().density, Some(850.5));
    assert_eq!(mapping.get("JUNK").unwrap().density, None);
}

#[test]
fn test_mapping_entry_validity() {
    assert!(MappingEntry::new("bg", "code").is_valid());
    assert!(!MappingEntry::new("", "code").is_valid());
    assert!(!MappingEntry::new("bg", "").is_valid());
    // Whitespace is not trimmed; a blank-but-nonempty field still counts
    assert!(MappingEntry::new(" ", "code").is_valid());
}

#[test]
fn test_mapping_table_remove() {
    let mut mapping = base_mapping();
    assert!(!mapping.is_empty());
    let before = mapping.len();

    let removed = mapping.remove("WATER-IN").expect("Failed to remove entry");
    assert_eq!(removed.code, "tap-water");
    assert_eq!(mapping.get("WATER-IN"), None);
    assert_eq!(mapping.len(), before - 1);
    // Removing an absent flow is a no-op
    assert_eq!(mapping.remove("WATER-IN"), None);
}

#[test]
fn test_flows_missing_density() {
    let mut mapping = MappingTable::new();
    mapping.insert(
        "B-NO-DENSITY",
        MappingEntry::new("bg", "a").with_unit("cubic meter"),
    );
    mapping.insert(
        "A-ZERO",
        MappingEntry::new("bg", "b").with_unit("m3").with_density(0.0),
    );
    mapping.insert(
        "OK",
        MappingEntry::new("bg", "c")
            .with_unit("cubic meter")
            .with_density(850.0),
    );
    mapping.insert("MASS", MappingEntry::new("bg", "d").with_unit("kg"));

    assert_eq!(mapping.flows_missing_density(), vec!["A-ZERO", "B-NO-DENSITY"]);
}

#[test]
fn test_search_activities() {
    let store = seeded_store();
    let candidates = store
        .activities("background")
        .expect("Failed to list background activities");

    let hits = search_activities(&candidates, "water");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "market for water, deionised");

    // Location and unit are searchable too, case-insensitively
    assert_eq!(search_activities(&candidates, "RER").len(), 1);
    assert_eq!(search_activities(&candidates, "KILOWATT").len(), 1);
    assert!(search_activities(&candidates, "").is_empty());
    assert!(search_activities(&candidates, "   ").is_empty());

    let markets = search_activities(&candidates, "market for");
    let names: Vec<_> = markets.iter().map(|n| n.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted, "results should be ordered by name");
}

#[test]
fn test_search_deduplicates_by_key() {
    let node = ActivityNode::new(NodeKey::new("bg", "dup"), "duplicated market").with_unit("kg");
    let candidates = vec![node.clone(), node];
    assert_eq!(search_activities(&candidates, "duplicated").len(), 1);
}

#[test]
fn test_activity_label() {
    let full = ActivityNode::new(NodeKey::new("bg", "x"), "market for water, deionised")
        .with_unit("kilogram")
        .with_location("RER")
        .with_categories(["chemicals", "inorganic"]);
    assert_eq!(
        activity_label(&full),
        "market for water, deionised [RER] (chemicals | inorganic) — kilogram"
    );

    let bare = ActivityNode::new(NodeKey::new("bg", "y"), "bare process");
    assert_eq!(activity_label(&bare), "bare process ()");
}

#[test]
fn test_error_display() {
    let err = BuildError::ProcessCreation { field: "unit" };
    assert!(err.to_string().contains("unit"));

    let store_err = StoreError::NodeNotFound {
        database: "background".to_string(),
        code: "missing".to_string(),
    };
    assert!(store_err.to_string().contains("missing"));
    assert!(store_err.to_string().contains("background"));

    let norm_err = NormalizationError::InvalidReference {
        flow: "STEAM-OUT".to_string(),
    };
    assert!(norm_err.to_string().contains("STEAM-OUT"));

    let impact_err = ImpactError::MethodFailed {
        method: "ReCiPe 2016 / Midpoint / GWP100".to_string(),
        message: "singular matrix".to_string(),
    };
    assert!(impact_err.to_string().contains("GWP100"));
    assert!(impact_err.to_string().contains("singular matrix"));
}

#[test]
fn test_build_warning_display() {
    assert_eq!(
        BuildWarning::Unmapped {
            flow: "ELEC".to_string()
        }
        .to_string(),
        "Flow 'ELEC' not mapped; skipping."
    );
    assert_eq!(
        BuildWarning::NoMapping {
            flow: "ELEC".to_string()
        }
        .to_string(),
        "Flow 'ELEC' has no mapping; skipping."
    );
    assert_eq!(
        BuildWarning::InvalidMapping {
            flow: "ELEC".to_string()
        }
        .to_string(),
        "Invalid mapping for flow 'ELEC'; skipping."
    );
    assert_eq!(
        BuildWarning::TargetMissing {
            flow: "ELEC".to_string(),
            database: "bg".to_string(),
            code: "gone".to_string(),
        }
        .to_string(),
        "Mapped node ('bg', 'gone') for flow 'ELEC' not found; skipping."
    );
    assert_eq!(
        BuildWarning::DensityMissing {
            flow: "SOLVENT".to_string()
        }
        .to_string(),
        "Missing or invalid density for flow 'SOLVENT' mapped to volumetric unit; cannot convert kg→m³."
    );
    assert_eq!(
        BuildWarning::UnitMismatch {
            row_unit: "kg".to_string(),
            target_unit: "megajoule".to_string(),
        }
        .to_string(),
        "Unit mismatch: LCI row unit 'kg' vs target product unit 'megajoule'."
    );
    assert_eq!(
        BuildWarning::WasteDirection {
            flow: "SLUDGE".to_string(),
            direction: "input".to_string(),
        }
        .to_string(),
        "Waste flow 'SLUDGE' with Direction='input' treated as output (treatment consumption)."
    );
    assert_eq!(
        BuildWarning::UnhandledRow {
            flow: "ODD".to_string(),
            role: "Mystery".to_string(),
        }
        .to_string(),
        "Row for flow 'ODD' with Type 'Mystery' not handled; skipped."
    );
    assert_eq!(
        BuildWarning::OrphanProduction.to_string(),
        "No production exchange found on the foreground process; added a fallback production of 1.0."
    );
}

#[test]
fn test_edge_label_display() {
    assert_eq!(EdgeLabel::Production.to_string(), "production");
    assert_eq!(EdgeLabel::Biosphere.to_string(), "biosphere");
    assert_eq!(EdgeLabel::Substitution.to_string(), "substitution");
    assert_eq!(
        EdgeLabel::TechnosphereConsumption.to_string(),
        "technosphere-consumption"
    );
    assert_eq!(
        EdgeLabel::TechnosphereProductionExternal.to_string(),
        "technosphere-production-external"
    );
    assert_eq!(
        EdgeLabel::TechnosphereConsumptionFallback.to_string(),
        "technosphere-consumption-fallback"
    );
    assert_eq!(
        EdgeLabel::TechnosphereWasteTreatment.to_string(),
        "technosphere-waste-treatment"
    );
}

#[test]
fn test_node_and_kind_display() {
    assert_eq!(NodeKey::new("background", "grid-kwh").to_string(), "background:grid-kwh");
    assert_eq!(ProcessKind::WithReferenceProduct.to_string(), "processwithreferenceproduct");
    assert_eq!(ProcessKind::Plain.to_string(), "process");
    assert_eq!(FlowGroup::Utilities.to_string(), "Input: Utilities");
    assert_eq!(FlowGroup::MaterialInputs.to_string(), "Input: materials");
    assert_eq!(FlowGroup::Outputs.to_string(), "Outputs");
}

#[test]
fn test_method_id_segments() {
    let method = MethodId::new(["ReCiPe 2016", "Midpoint", "GWP100"]);
    assert_eq!(method.family(), "ReCiPe 2016");
    assert_eq!(method.tail(), ["Midpoint", "GWP100"]);
    assert_eq!(method.to_string(), "ReCiPe 2016 / Midpoint / GWP100");

    let empty = MethodId::new(Vec::<String>::new());
    assert_eq!(empty.family(), "");
    assert!(empty.tail().is_empty());
}

#[test]
fn test_methods_by_family_sorted() {
    let methods = vec![
        MethodId::new(["IPCC", "GWP100"]),
        MethodId::new(["CML", "acidification"]),
        MethodId::new(["IPCC", "GWP20"]),
        MethodId::new(Vec::<String>::new()),
    ];
    let grouped = methods_by_family(&methods);
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[0].0, "CML");
    assert_eq!(grouped[1].0, "IPCC");
    // Within a family, categories are ordered by their remaining segments
    assert_eq!(
        grouped[1].1,
        vec![MethodId::new(["IPCC", "GWP100"]), MethodId::new(["IPCC", "GWP20"])]
    );
}
