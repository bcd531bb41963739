use anyhow::Result;

use crate::host::HostConfig;

type TapFn = Box<dyn Fn(&mut HostConfig) -> Result<()>>;

/// One registered callback: the name identifies the registrant in host
/// diagnostics and stays stable across versions.
pub struct Tap {
    pub name: String,
    pub(crate) callback: TapFn,
}

/// Synchronous named-tap hook. Taps run in registration order when the host
/// reaches the matching lifecycle point, and are drained by the run, so each
/// registration fires at most once.
#[derive(Default)]
pub struct SyncHook {
    taps: Vec<Tap>,
}

impl SyncHook {
    pub fn tap(
        &mut self,
        name: impl Into<String>,
        callback: impl Fn(&mut HostConfig) -> Result<()> + 'static,
    ) {
        self.taps.push(Tap {
            name: name.into(),
            callback: Box::new(callback),
        });
    }

    pub fn tap_names(&self) -> Vec<&str> {
        self.taps.iter().map(|tap| tap.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    pub(crate) fn drain(&mut self) -> Vec<Tap> {
        std::mem::take(&mut self.taps)
    }
}

/// The lifecycle points this crate knows about. One: environment ready,
/// after the host's base configuration exists and before module resolution
/// consumes it.
#[derive(Default)]
pub struct CompilerHooks {
    pub after_environment: SyncHook,
}
