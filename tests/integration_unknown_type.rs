use extpack::{Compiler, ExtpackPlugin, PluginError};

mod common;
use common::{overrides_for, seeded_host};

#[test]
fn unknown_type_fails_selection() {
    let plugin = ExtpackPlugin::new(overrides_for("legacy"));
    let err = plugin.selected_entries().expect_err("selection must fail");
    assert_eq!(err, PluginError::UnknownType("legacy".to_string()));
    assert_eq!(err.to_string(), "unknown type <legacy>");
}

#[test]
fn unknown_type_installs_nothing_and_mutates_nothing() {
    let mut compiler = Compiler::new(seeded_host());
    let plugin = ExtpackPlugin::new(overrides_for("propertiespanel"));

    assert!(plugin.apply(&mut compiler).is_err());
    assert!(compiler.hooks.after_environment.is_empty());

    compiler.run_after_environment().expect("empty run");
    assert_eq!(compiler.options, seeded_host());
}

#[test]
fn unknown_type_error_downcasts_from_inject() {
    let mut host = seeded_host();
    let err = ExtpackPlugin::new(overrides_for("vue"))
        .inject(&mut host)
        .expect_err("inject must fail");
    assert_eq!(
        err.downcast_ref::<PluginError>(),
        Some(&PluginError::UnknownType("vue".to_string()))
    );
    assert_eq!(host, seeded_host());
}
