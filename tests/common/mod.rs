#![allow(dead_code)]

use std::collections::BTreeMap;

use extpack::*;

pub fn rule(test: &str, loader: &str) -> LoaderRule {
    LoaderRule {
        test: test.to_string(),
        loader: loader.to_string(),
        exclude: None,
        options: serde_json::Value::Null,
    }
}

/// Host with one pre-existing rule and one alias that collides with the
/// built-in presets.
pub fn seeded_host() -> HostConfig {
    HostConfig {
        module: ModuleSection {
            rules: vec![rule(r"\.css$", "css-loader")],
        },
        resolve: ResolveSection {
            alias: BTreeMap::from([("react".to_string(), "./vendor/react-shim".to_string())]),
        },
    }
}

pub fn overrides_for(kind: &str) -> OptionOverrides {
    OptionOverrides {
        kind: Some(kind.to_string()),
        ..Default::default()
    }
}

/// Construct a plugin, register it on a fresh compiler over `host`, run the
/// environment-ready hook, and hand back the merged configuration.
pub fn merged_with(overrides: OptionOverrides, host: HostConfig) -> HostConfig {
    let mut compiler = Compiler::new(host);
    ExtpackPlugin::new(overrides)
        .apply(&mut compiler)
        .expect("apply");
    compiler.run_after_environment().expect("run hook");
    compiler.options
}
