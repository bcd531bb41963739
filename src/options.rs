use serde::Deserialize;

/// Effective plugin options. Built once at construction by merging caller
/// overrides over defaults (caller wins, one level deep); immutable after.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginOptions {
    /// Extension type to apply. Empty selects every known type, in registry
    /// order.
    pub kind: String,
    pub properties_panel_alias: bool,
    pub properties_panel_loader: bool,
    pub react_alias: bool,
    pub react_loader: bool,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            kind: String::new(),
            properties_panel_alias: true,
            properties_panel_loader: true,
            react_alias: true,
            react_loader: true,
        }
    }
}

/// Caller-supplied overrides. Unset fields fall back to the defaults above;
/// in options files the type key is spelled `type`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OptionOverrides {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub properties_panel_alias: Option<bool>,
    pub properties_panel_loader: Option<bool>,
    pub react_alias: Option<bool>,
    pub react_loader: Option<bool>,
}

impl PluginOptions {
    pub fn from_overrides(overrides: &OptionOverrides) -> Self {
        let defaults = Self::default();
        Self {
            kind: overrides.kind.clone().unwrap_or(defaults.kind),
            properties_panel_alias: overrides
                .properties_panel_alias
                .unwrap_or(defaults.properties_panel_alias),
            properties_panel_loader: overrides
                .properties_panel_loader
                .unwrap_or(defaults.properties_panel_loader),
            react_alias: overrides.react_alias.unwrap_or(defaults.react_alias),
            react_loader: overrides.react_loader.unwrap_or(defaults.react_loader),
        }
    }
}
