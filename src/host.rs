use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::fragment::{ModuleSection, ResolveSection};
use crate::hooks::CompilerHooks;

/// The externally owned bundler configuration, narrowed to the fields this
/// plugin touches: `module.rules` (append-only here) and `resolve.alias`
/// (merged, fragment wins). Mutated in place; owned by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default)]
    pub module: ModuleSection,
    #[serde(default)]
    pub resolve: ResolveSection,
}

/// Minimal host-side compilation handle: the configuration under
/// construction plus the lifecycle hooks plugins register on.
#[derive(Default)]
pub struct Compiler {
    pub options: HostConfig,
    pub hooks: CompilerHooks,
}

impl Compiler {
    pub fn new(options: HostConfig) -> Self {
        Self {
            options,
            hooks: CompilerHooks::default(),
        }
    }

    /// Run the environment-ready taps in registration order, draining them:
    /// each registration fires at most once. A failing tap aborts the run
    /// and surfaces through the host's own error reporting.
    pub fn run_after_environment(&mut self) -> Result<()> {
        for tap in self.hooks.after_environment.drain() {
            (tap.callback)(&mut self.options)
                .with_context(|| format!("{} failed at afterEnvironment", tap.name))?;
        }
        Ok(())
    }
}
