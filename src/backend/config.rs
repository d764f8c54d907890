//! Binding generator configuration
//!
//! Which side of the bus to generate for, where to put the output and which optional pieces to
//! emit. The CLI fills this from its flags; library users build it directly.

/// Which side of the D-Bus connection the generated bindings are for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationMode {
    /// Client side: a `#[zbus::proxy]` trait for calling a remote object.
    #[default]
    Sender,
    /// Server side: a handler trait plus a `#[zbus::interface]` wrapper serving it.
    Receiver,
}

impl GenerationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GenerationMode::Sender => "sender",
            GenerationMode::Receiver => "receiver",
        }
    }
}

/// Binding generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Client or server bindings
    pub mode: GenerationMode,
    /// Wrap the output in `pub mod <name> { ... }`
    pub module: Option<String>,
    /// Emit the `// Generated by fidlgen ...` header line
    pub emit_header: bool,
    /// Derive `serde::Serialize`/`serde::Deserialize` on generated structs
    pub serde: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            mode: GenerationMode::Sender,
            module: None,
            emit_header: true,
            serde: true,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Wrap the generated items in a module with this name.
    ///
    /// An empty name means no wrapper.
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        let module = module.into();
        self.module = if module.is_empty() { None } else { Some(module) };
        self
    }

    pub fn with_header(mut self, emit: bool) -> Self {
        self.emit_header = emit;
        self
    }

    pub fn with_serde(mut self, serde: bool) -> Self {
        self.serde = serde;
        self
    }
}
