use anyhow::Result;
use thiserror::Error;

use crate::host::{Compiler, HostConfig};
use crate::merge::splice_fragment;
use crate::options::{OptionOverrides, PluginOptions};
use crate::registry::{find_entry, RegistryEntry, REGISTRY};

/// Stable tap name used for hook registration.
pub const PLUGIN_NAME: &str = "ExtpackPlugin";

#[derive(Debug, Error, PartialEq)]
pub enum PluginError {
    /// Raised during selection, before any host-configuration mutation.
    #[error("unknown type <{0}>")]
    UnknownType(String),
}

/// Injects preset loader rules and module aliases into a host bundler
/// configuration at the environment-ready hook.
///
/// Options recognize one `type` selecting a single extension preset (all
/// presets when empty) and a per-preset alias/loader boolean pair, each
/// defaulting to `true`.
#[derive(Debug, Clone)]
pub struct ExtpackPlugin {
    options: PluginOptions,
    registry: &'static [RegistryEntry],
}

impl ExtpackPlugin {
    pub fn new(overrides: OptionOverrides) -> Self {
        Self::with_registry(overrides, &REGISTRY)
    }

    /// Same plugin over a substitute registry. Lets tests and embedders
    /// supply their own preset sources.
    pub fn with_registry(overrides: OptionOverrides, registry: &'static [RegistryEntry]) -> Self {
        Self {
            options: PluginOptions::from_overrides(&overrides),
            registry,
        }
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    /// Entries selected by the effective type: the whole registry, in order,
    /// when the type is empty; exactly one entry otherwise. An unmatched
    /// non-empty type fails here, before anything is mutated.
    pub fn selected_entries(&self) -> Result<Vec<&'static RegistryEntry>, PluginError> {
        if self.options.kind.is_empty() {
            return Ok(self.registry.iter().collect());
        }
        match find_entry(&self.options.kind, self.registry) {
            Some(entry) => Ok(vec![entry]),
            None => Err(PluginError::UnknownType(self.options.kind.clone())),
        }
    }

    /// Resolve and splice every selected fragment into `host`, in registry
    /// order. Each fragment resolves lazily, before that entry's mutations
    /// begin; there is no rollback once splicing starts. Re-injecting into
    /// the same host appends the loader rules again.
    pub fn inject(&self, host: &mut HostConfig) -> Result<()> {
        let entries = self.selected_entries()?;
        merge_entries(&entries, &self.options, host)
    }

    /// Register the merge under this plugin's name on the compiler's
    /// environment-ready hook. Selection runs eagerly, so an unknown type
    /// fails before any callback is installed.
    pub fn apply(&self, compiler: &mut Compiler) -> Result<()> {
        let entries = self.selected_entries()?;
        let options = self.options.clone();
        compiler
            .hooks
            .after_environment
            .tap(PLUGIN_NAME, move |host| {
                merge_entries(&entries, &options, host)
            });
        Ok(())
    }
}

impl Default for ExtpackPlugin {
    fn default() -> Self {
        Self::new(OptionOverrides::default())
    }
}

fn merge_entries(
    entries: &[&RegistryEntry],
    options: &PluginOptions,
    host: &mut HostConfig,
) -> Result<()> {
    for entry in entries {
        // Preset content is trusted data shipped with this crate; a source
        // failure propagates untranslated.
        let fragment = (entry.source)()?;
        splice_fragment(
            &mut host.module.rules,
            &mut host.resolve.alias,
            &fragment,
            (entry.loader_flag.get)(options),
            (entry.alias_flag.get)(options),
        );
    }
    Ok(())
}
