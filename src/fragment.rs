use std::collections::BTreeMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// One loader rule contributed to the host's `module.rules`.
///
/// `test` uses the host bundler's pattern syntax and is passed through
/// untouched; `options` is whatever the named loader expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderRule {
    pub test: String,
    pub loader: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub options: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleSection {
    #[serde(default)]
    pub rules: Vec<LoaderRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveSection {
    #[serde(default)]
    pub alias: BTreeMap<String, String>,
}

/// Partial bundler configuration shipped for one extension type: loader
/// rules to append and aliases to merge. Read-only input to the merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFragment {
    #[serde(default)]
    pub module: ModuleSection,
    #[serde(default)]
    pub resolve: ResolveSection,
}

/// Zero-argument fragment factory. The registry stores the factory, not the
/// fragment, so resolution happens on first use and a broken preset only
/// surfaces when its type is actually selected.
pub type FragmentSource = fn() -> Result<ConfigFragment>;

/// Preset for properties-panel extensions: a JSX transform targeting the
/// panel's bundled preact, plus aliases routing react imports onto it.
pub fn properties_panel_fragment() -> Result<ConfigFragment> {
    Ok(ConfigFragment {
        module: ModuleSection {
            rules: vec![LoaderRule {
                test: r"\.js$".to_string(),
                loader: "babel-loader".to_string(),
                exclude: Some("node_modules".to_string()),
                options: json!({
                    "plugins": [
                        [
                            "@babel/plugin-transform-react-jsx",
                            {
                                "importSource": "@bpmn-io/properties-panel/preact",
                                "runtime": "automatic"
                            }
                        ]
                    ]
                }),
            }],
        },
        resolve: ResolveSection {
            alias: BTreeMap::from([
                (
                    "react".to_string(),
                    "@bpmn-io/properties-panel/preact/compat".to_string(),
                ),
                (
                    "react-dom".to_string(),
                    "@bpmn-io/properties-panel/preact/compat".to_string(),
                ),
                (
                    "preact".to_string(),
                    "@bpmn-io/properties-panel/preact".to_string(),
                ),
            ]),
        },
    })
}

/// Preset for UI-framework extensions: a react JSX transform plus aliases
/// onto the copy of react the modeler host ships.
pub fn react_fragment() -> Result<ConfigFragment> {
    Ok(ConfigFragment {
        module: ModuleSection {
            rules: vec![LoaderRule {
                test: r"\.js$".to_string(),
                loader: "babel-loader".to_string(),
                exclude: Some("node_modules".to_string()),
                options: json!({
                    "presets": [
                        ["@babel/preset-react", { "runtime": "automatic" }]
                    ]
                }),
            }],
        },
        resolve: ResolveSection {
            alias: BTreeMap::from([
                (
                    "react".to_string(),
                    "modeler-plugin-helpers/vendor/react".to_string(),
                ),
                (
                    "react-dom".to_string(),
                    "modeler-plugin-helpers/vendor/react-dom".to_string(),
                ),
            ]),
        },
    })
}
