use std::collections::BTreeMap;

use anyhow::Result;
use extpack::{
    Compiler, ConfigFragment, ExtpackPlugin, Flag, ModuleSection, OptionOverrides, RegistryEntry,
    ResolveSection,
};

mod common;
use common::{overrides_for, rule, seeded_host};

fn broken_source() -> Result<ConfigFragment> {
    anyhow::bail!("malformed preset: propertiesPanel")
}

fn minimal_source() -> Result<ConfigFragment> {
    Ok(ConfigFragment {
        module: ModuleSection {
            rules: vec![rule(r"\.js$", "test-loader")],
        },
        resolve: ResolveSection {
            alias: BTreeMap::from([("a".to_string(), "b".to_string())]),
        },
    })
}

static BROKEN_FIRST: [RegistryEntry; 2] = [
    RegistryEntry {
        key: "propertiesPanel",
        source: broken_source,
        alias_flag: Flag {
            name: "properties_panel_alias",
            get: |o| o.properties_panel_alias,
        },
        loader_flag: Flag {
            name: "properties_panel_loader",
            get: |o| o.properties_panel_loader,
        },
    },
    RegistryEntry {
        key: "react",
        source: minimal_source,
        alias_flag: Flag {
            name: "react_alias",
            get: |o| o.react_alias,
        },
        loader_flag: Flag {
            name: "react_loader",
            get: |o| o.react_loader,
        },
    },
];

#[test]
fn source_failure_surfaces_at_the_hook_not_at_registration() {
    let mut compiler = Compiler::new(seeded_host());
    let plugin = ExtpackPlugin::with_registry(OptionOverrides::default(), &BROKEN_FIRST);

    // selection and registration succeed: resolution is lazy
    plugin.apply(&mut compiler).expect("apply");

    let err = compiler
        .run_after_environment()
        .expect_err("hook run must fail");
    assert!(format!("{err:#}").contains("malformed preset"));

    // the failing entry resolved before mutating, and the run aborted
    // before the second entry, so the host is untouched
    assert_eq!(compiler.options, seeded_host());
}

#[test]
fn unselected_broken_source_is_never_resolved() {
    let mut host = seeded_host();
    let plugin = ExtpackPlugin::with_registry(overrides_for("react"), &BROKEN_FIRST);
    plugin.inject(&mut host).expect("inject");

    assert_eq!(host.module.rules.len(), 2);
    assert_eq!(host.resolve.alias.get("a").map(String::as_str), Some("b"));
}
