mod config;
mod fragment;
mod hooks;
mod host;
mod merge;
mod options;
mod plugin;
mod registry;
mod summary;

pub use config::load_options;
pub use fragment::{
    properties_panel_fragment, react_fragment, ConfigFragment, FragmentSource, LoaderRule,
    ModuleSection, ResolveSection,
};
pub use hooks::{CompilerHooks, SyncHook, Tap};
pub use host::{Compiler, HostConfig};
pub use merge::{appended_rules, merged_alias, splice_fragment};
pub use options::{OptionOverrides, PluginOptions};
pub use plugin::{ExtpackPlugin, PluginError, PLUGIN_NAME};
pub use registry::{find_entry, Flag, RegistryEntry, REGISTRY};
pub use summary::render_summary;
