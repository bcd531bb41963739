use std::fmt;

use crate::fragment::{properties_panel_fragment, react_fragment, FragmentSource};
use crate::options::PluginOptions;

/// One option flag an entry is gated on: its human-readable name (for
/// diagnostics) and the accessor that reads it off the effective options.
#[derive(Clone, Copy)]
pub struct Flag {
    pub name: &'static str,
    pub get: fn(&PluginOptions) -> bool,
}

impl fmt::Debug for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flag").field("name", &self.name).finish()
    }
}

/// One known extension type: lookup key, preset source, and the two option
/// flags gating its alias merge and loader-rule append.
#[derive(Clone, Copy)]
pub struct RegistryEntry {
    pub key: &'static str,
    pub source: FragmentSource,
    pub alias_flag: Flag,
    pub loader_flag: Flag,
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("key", &self.key)
            .field("alias_flag", &self.alias_flag.name)
            .field("loader_flag", &self.loader_flag.name)
            .finish()
    }
}

/// The known extension types, in application order. Fixed at build time.
pub static REGISTRY: [RegistryEntry; 2] = [
    RegistryEntry {
        key: "propertiesPanel",
        source: properties_panel_fragment,
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
        source: react_fragment,
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

/// Exact, case-sensitive key lookup.
pub fn find_entry<'a>(key: &str, registry: &'a [RegistryEntry]) -> Option<&'a RegistryEntry> {
    registry.iter().find(|entry| entry.key == key)
}
