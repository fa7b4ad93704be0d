// nfctag/src/dispatcher.rs
//! Capability-driven variant selection.

use std::sync::{Arc, OnceLock};

use log::debug;

use crate::config::ProtocolConfig;
use crate::exchange::{Operation, Outcome};
use crate::tag::Tag;
use crate::types::{CapabilitySet, Variant};
use crate::utils::charset;
use crate::variants::{create_protocol_for, TagProtocol};
use crate::{Error, Result};

/// Selects the protocol for a tag and forwards reads and writes to it.
///
/// A dispatcher is an ordinary value owned by the caller. The only state it
/// carries besides its configuration is an optional override, which can be
/// set once and then replaces detection for the dispatcher's lifetime.
pub struct TagDispatcher {
    config: Arc<ProtocolConfig>,
    override_protocol: OnceLock<Box<dyn TagProtocol>>,
}

impl Default for TagDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TagDispatcher {
    /// Dispatcher with default configuration.
    pub fn new() -> Self {
        Self::with_config(ProtocolConfig::default())
    }

    /// Dispatcher with the given configuration.
    pub fn with_config(config: ProtocolConfig) -> Self {
        Self {
            config: Arc::new(config),
            override_protocol: OnceLock::new(),
        }
    }

    /// Builder form of [`register_override`](Self::register_override).
    pub fn with_override(self, protocol: Box<dyn TagProtocol>) -> Self {
        Self {
            override_protocol: OnceLock::from(protocol),
            ..self
        }
    }

    /// Bypass detection with a host-provided protocol. Succeeds once per
    /// dispatcher; later calls fail with [`Error::AlreadyRegistered`].
    pub fn register_override(&self, protocol: Box<dyn TagProtocol>) -> Result<()> {
        self.override_protocol
            .set(protocol)
            .map_err(|_| Error::AlreadyRegistered)
    }

    /// Whether an override is registered.
    pub fn has_override(&self) -> bool {
        self.override_protocol.get().is_some()
    }

    /// Configuration handed to every variant.
    pub fn config(&self) -> &ProtocolConfig {
        &self.config
    }

    /// Map the first reported technology to its variant. Exact names only;
    /// the rest of the set is not consulted.
    pub fn select_variant(capabilities: &CapabilitySet) -> Result<Variant> {
        let first = capabilities
            .first()
            .ok_or_else(|| Error::UnsupportedTagType("<no capabilities>".into()))?;
        Variant::from_capability(first).ok_or_else(|| Error::UnsupportedTagType(first.to_string()))
    }

    /// Variant that will serve `tag`: the override's, or the detected one.
    pub fn resolve(&self, tag: &Tag) -> Result<Variant> {
        match self.override_protocol.get() {
            Some(protocol) => Ok(protocol.variant()),
            None => Self::select_variant(tag.capabilities()),
        }
    }

    fn with_protocol<T>(
        &self,
        tag: &mut Tag,
        f: impl FnOnce(&dyn TagProtocol, &mut Tag) -> Result<T>,
    ) -> Result<T> {
        if let Some(protocol) = self.override_protocol.get() {
            debug!("dispatching {} to the registered override", tag.uid().to_hex());
            return f(protocol.as_ref(), tag);
        }
        let variant = Self::select_variant(tag.capabilities())?;
        debug!("dispatching {} as {}", tag.uid().to_hex(), variant);
        let protocol = create_protocol_for(variant, Arc::clone(&self.config));
        f(protocol.as_ref(), tag)
    }

    /// Read through the selected variant.
    pub fn read(&self, tag: &mut Tag) -> Result<Vec<u8>> {
        self.with_protocol(tag, |protocol, tag| protocol.read(tag))
    }

    /// Write raw bytes through the selected variant.
    pub fn write(&self, tag: &mut Tag, data: &[u8]) -> Result<()> {
        self.with_protocol(tag, |protocol, tag| protocol.write(tag, data))
    }

    /// Encode `text` for the selected variant and write it. Page-oriented
    /// Ultralight memory takes the configured page charset, everything else
    /// UTF-8.
    pub fn write_text(&self, tag: &mut Tag, text: &str) -> Result<()> {
        self.with_protocol(tag, |protocol, tag| {
            let data = match protocol.variant() {
                Variant::MifareUltralight => {
                    charset::string_to_bytes(text, &self.config.page_charset)?
                }
                _ => text.as_bytes().to_vec(),
            };
            protocol.write(tag, &data)
        })
    }

    /// Run one operation against `tag`.
    pub fn dispatch(&self, tag: &mut Tag, operation: &Operation) -> Result<Outcome> {
        match operation {
            Operation::Read => self.read(tag).map(Outcome::Read),
            Operation::Write(data) => self.write(tag, data).map(|()| Outcome::Written),
            Operation::WriteText(text) => self.write_text(tag, text).map(|()| Outcome::Written),
        }
    }
}
