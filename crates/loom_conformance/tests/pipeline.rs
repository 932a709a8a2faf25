//! Build and lint behavior over whole designs.

use std::fs;

use loom_conformance::{
    hdmi, hdmi_catalog, hdmi_description, make_lint_config, run_pipeline,
    run_pipeline_with_lint,
};
use loom_diagnostics::Severity;
use loom_elaborate::{build_design, DesignError};
use loom_ir::{Endpoint, ExternalKind};

#[test]
fn building_twice_is_bit_identical() {
    let catalog = hdmi_catalog();
    let desc = hdmi_description();
    let a = build_design(&desc, &catalog).unwrap();
    let b = build_design(&desc, &catalog).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn accepted_connections_have_compatible_directions() {
    let catalog = hdmi_catalog();
    let design = build_design(&hdmi_description(), &catalog).unwrap();
    let direction = |ep: &Endpoint| {
        let ty = &design.instance(&ep.instance).unwrap().ip_type;
        catalog.get(ty).unwrap().interface(&ep.interface).unwrap().direction
    };
    for conn in &design.connections {
        assert!(
            direction(&conn.from).is_compatible_with(direction(&conn.to)),
            "{} -> {}",
            conn.from,
            conn.to
        );
    }
    for ext in &design.externals {
        assert!(ext.kind.inner_direction().is_compatible_with(ext.direction));
    }
}

#[test]
fn design_keeps_declaration_order() {
    let desc = hdmi_description();
    let design = build_design(&desc, &hdmi_catalog()).unwrap();
    let declared: Vec<_> = desc.connections.iter().map(|c| (&c.from, &c.to)).collect();
    let built: Vec<_> = design.connections.iter().map(|c| (&c.from, &c.to)).collect();
    assert_eq!(declared, built);
}

#[test]
fn fan_out_only_on_multi_interfaces() {
    let catalog = hdmi_catalog();
    let desc = hdmi_description().connect(
        "dma0.m_axis".parse().unwrap(),
        "fifo0.s_axis".parse().unwrap(),
    );
    assert!(matches!(
        build_design(&desc, &catalog),
        Err(DesignError::InterfaceAlreadyBound { instance, interface })
            if instance == "dma0" && interface == "m_axis"
    ));
}

#[test]
fn first_error_in_declaration_order() {
    let catalog = hdmi_catalog();
    let desc = hdmi_description()
        .connect("hdmi0.video".parse().unwrap(), "dma0.clk".parse().unwrap())
        .external("bad", ExternalKind::Input, "nope0.x".parse().unwrap());
    // The connection comes first and fails on direction before the external
    // port's unknown instance is reached.
    assert!(matches!(
        build_design(&desc, &catalog),
        Err(DesignError::DirectionMismatch { .. })
    ));
}

#[test]
fn hdmi_design_lints_clean() {
    let result = run_pipeline(&hdmi_description(), &hdmi_catalog());
    assert!(result.design.is_some());
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
}

#[test]
fn lint_deny_and_allow() {
    let mut desc = hdmi_description();
    desc.externals.pop();
    let catalog = hdmi_catalog();

    let result = run_pipeline(&desc, &catalog);
    assert!(result.has_code("W101"));
    assert!(!result.has_errors);

    let denied = run_pipeline_with_lint(&desc, &catalog, &make_lint_config(&["W101"], &[]));
    assert!(denied.has_errors);
    assert!(denied
        .diagnostics
        .iter()
        .all(|d| d.severity == Severity::Error));

    let allowed = run_pipeline_with_lint(
        &desc,
        &catalog,
        &make_lint_config(&[], &["unconnected-interface"]),
    );
    assert!(allowed.diagnostics.is_empty());
}

#[test]
fn project_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let cores = dir.path().join("ipcores");
    fs::create_dir(&cores).unwrap();
    let mut catalog_entries = Vec::new();
    for (file, text) in hdmi::IP_CORES {
        fs::write(cores.join(file), text).unwrap();
        catalog_entries.push(format!("\"ipcores/{file}\""));
    }
    fs::write(dir.path().join("design.toml"), hdmi::DESIGN).unwrap();
    fs::write(
        dir.path().join("loom.toml"),
        format!(
            "[project]\nname = \"hdmi\"\ndesign = \"design.toml\"\ncatalog = [{}]\n",
            catalog_entries.join(", ")
        ),
    )
    .unwrap();

    let config = loom_config::load_config(dir.path()).unwrap();
    let catalog = loom_config::load_catalog(&config.catalog_paths(dir.path())).unwrap();
    let desc = loom_config::load_description(&config.design_path(dir.path()).unwrap()).unwrap();
    assert_eq!(desc, hdmi_description());

    let design = build_design(&desc, &catalog).unwrap();
    assert_eq!(design, build_design(&hdmi_description(), &hdmi_catalog()).unwrap());
}
