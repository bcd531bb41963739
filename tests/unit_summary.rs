use extpack::{render_summary, HostConfig, OptionOverrides};

mod common;
use common::{merged_with, seeded_host};

#[test]
fn summary_counts_rules_and_lists_aliases() {
    let out = merged_with(OptionOverrides::default(), HostConfig::default());
    let summary = render_summary(&out);

    assert!(summary.contains("loader rules: 2"), "summary was: {summary}");
    assert!(
        summary.contains("react = modeler-plugin-helpers/vendor/react"),
        "summary was: {summary}"
    );
    assert!(
        summary.contains("preact = @bpmn-io/properties-panel/preact"),
        "summary was: {summary}"
    );
}

#[test]
fn summary_renders_untouched_host_too() {
    let summary = render_summary(&seeded_host());
    assert!(summary.contains("loader rules: 1"), "summary was: {summary}");
    assert!(
        summary.contains("react = ./vendor/react-shim"),
        "summary was: {summary}"
    );
}
