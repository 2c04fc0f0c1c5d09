//! Execution context handed through kernel calls
//!
//! Kernels receive the context for uniformity with the rest of the
//! runtime; most of them, property transfer included, never read it.

/// Process-wide runtime configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContextConfig {
    /// Sparsity below which a sparse representation is preferred
    pub sparsity_threshold: f64,
    /// Whether representation selection looks at attached properties at all
    pub select_representation: bool,
}

impl ContextConfig {
    /// Default sparsity threshold for choosing CSR over dense
    pub const DEFAULT_SPARSITY_THRESHOLD: f64 = 0.25;

    /// Set the sparsity threshold
    pub fn with_sparsity_threshold(mut self, threshold: f64) -> Self {
        self.sparsity_threshold = threshold;
        self
    }

    /// Enable or disable property-driven representation selection
    pub fn with_representation_selection(mut self, enabled: bool) -> Self {
        self.select_representation = enabled;
        self
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            sparsity_threshold: Self::DEFAULT_SPARSITY_THRESHOLD,
            select_representation: true,
        }
    }
}

/// Opaque handle to runtime configuration and resources
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionContext {
    config: ContextConfig,
}

impl ExecutionContext {
    /// Create a context from a configuration
    pub fn new(config: ContextConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &ContextConfig {
        &self.config
    }
}
