#![deny(clippy::all)]

/**
 * sf2ts - Salesforce metadata to TypeScript declaration compiler
 *
 * Converts Apex classes and XML metadata descriptors into ambient
 * TypeScript module declarations, with per-token alignment between the
 * generated text and the original source.
 */

#[cfg(feature = "napi-bindings")]
use napi_derive::napi;

pub mod apex;
pub mod builder;
pub mod component;
pub mod converts;
pub mod error;
pub mod logging;
pub mod xml;

// Re-exports
pub use apex::service::Readiness;
pub use builder::{AlignmentPair, PositionAwareTextBuilder};
pub use component::{file_base_name, CompiledUnit, MetadataKind, SourceUnit};
pub use error::ConvertError;
pub use logging::{ConsoleLogger, LogLevel, Logger, NullLogger};

use std::sync::Arc;

use apex::service::ApexParserService;

/// Front door of the crate: owns the warm-up-gated Apex parser service and
/// dispatches each unit to its kind's converter.
pub struct Converter {
    apex: ApexParserService,
    logger: Arc<dyn Logger>,
}

impl Converter {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Converter {
            apex: ApexParserService::new(),
            logger,
        }
    }

    /// Starts the one-time parser warm-up (idempotent) and returns the
    /// handle that resolves when `convert` becomes valid for class units.
    pub fn warm_up(&self) -> Readiness {
        self.apex.warm_up()
    }

    pub fn convert(&self, unit: &SourceUnit) -> Result<CompiledUnit, ConvertError> {
        converts::convert_unit(unit, &self.apex, self.logger.as_ref())
    }

    /// Converts units independently; one unit's failure leaves the others'
    /// results untouched.
    pub fn convert_batch(&self, units: &[SourceUnit]) -> Vec<Result<CompiledUnit, ConvertError>> {
        units.iter().map(|unit| self.convert(unit)).collect()
    }
}

impl Default for Converter {
    fn default() -> Self {
        Converter::new(Arc::new(NullLogger))
    }
}

#[cfg(feature = "napi-bindings")]
static SHARED_CONVERTER: once_cell::sync::Lazy<Converter> = once_cell::sync::Lazy::new(|| {
    Converter::new(Arc::new(ConsoleLogger::new(LogLevel::Warn)))
});

/// Start the Apex parser warm-up in the background.
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn warm_up() {
    SHARED_CONVERTER.warm_up();
}

/// Convert one metadata unit, returning the compiled declaration and its
/// alignment as JSON (`{"dts": ..., "mapData": [...]}`). Blocks until the
/// parser warm-up completes on first use.
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn convert_metadata(path: String, kind: String, content: String) -> napi::Result<String> {
    let kind: MetadataKind = kind
        .parse()
        .map_err(|err: ConvertError| napi::Error::from_reason(err.to_string()))?;
    SHARED_CONVERTER.warm_up().wait();
    let unit = SourceUnit::new(path, kind, content);
    let compiled = SHARED_CONVERTER
        .convert(&unit)
        .map_err(|err| napi::Error::from_reason(err.to_string()))?;
    serde_json::to_string(&compiled).map_err(|err| napi::Error::from_reason(err.to_string()))
}
