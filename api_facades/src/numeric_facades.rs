//! Numeric Facades
//!
//! Provides the numeric layer as one value: the host capability record plus
//! the bounds calculator and endian codec configured from it.
//!
//! `init()` builds the process-wide layer once; `NumericLayer::from_facts`
//! builds a standalone layer for a simulated host.

use std::sync::OnceLock;

use adapters_time_representation as time_shim;
use entities_numeric_types::{
    BitWidth, BoundsPair, EndianValue, IntegerCategory, IntegerTypeDescriptor, NumericError,
    TimeInterval,
};
use infrastructure_bounds_calculator::BoundsCalculator;
use infrastructure_endian_codec::EndianCodec;
use infrastructure_host_probe::{init_host_capabilities, CapabilityError, HostCapabilities, HostFacts};

/// Host capabilities with the calculator and codec they select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericLayer {
    capabilities: HostCapabilities,
    bounds: BoundsCalculator,
    codec: EndianCodec,
}

impl NumericLayer {
    /// Configure the calculator and codec from a capability record
    pub fn new(capabilities: HostCapabilities) -> Self {
        Self {
            capabilities,
            bounds: BoundsCalculator::new(capabilities.signed_representation()),
            codec: EndianCodec::for_order(capabilities.byte_order()),
        }
    }

    /// Layer for a simulated host
    pub fn from_facts(facts: &HostFacts) -> Result<Self, CapabilityError> {
        HostCapabilities::from_facts(facts).map(Self::new)
    }

    pub fn capabilities(&self) -> &HostCapabilities {
        &self.capabilities
    }

    pub fn bounds_calculator(&self) -> &BoundsCalculator {
        &self.bounds
    }

    pub fn codec(&self) -> &EndianCodec {
        &self.codec
    }

    /// Bit width of a category, or `BitWidth::UNSUPPORTED`
    pub fn width_of(&self, category: IntegerCategory) -> BitWidth {
        self.capabilities.width_of(category)
    }

    pub fn descriptor_of(&self, category: IntegerCategory, is_signed: bool) -> IntegerTypeDescriptor {
        self.capabilities.descriptor_of(category, is_signed)
    }

    /// Bounds of a descriptor under this host's signed representation
    pub fn bounds_of(&self, descriptor: &IntegerTypeDescriptor) -> Result<BoundsPair, NumericError> {
        self.bounds.bounds_of(descriptor)
    }

    /// Bounds of a host category
    pub fn bounds_of_category(
        &self,
        category: IntegerCategory,
        is_signed: bool,
    ) -> Result<BoundsPair, NumericError> {
        self.bounds_of(&self.descriptor_of(category, is_signed))
    }

    pub fn to_canonical(&self, value: u64, width: BitWidth) -> Result<EndianValue, NumericError> {
        self.codec.to_canonical(value, width)
    }

    pub fn from_canonical(&self, value: EndianValue) -> Result<u64, NumericError> {
        self.codec.from_canonical(value)
    }

    /// Canonical byte sequence of a host value, ready to leave the process
    pub fn to_canonical_bytes(&self, value: u64, width: BitWidth) -> Result<Vec<u8>, NumericError> {
        self.codec.to_canonical_bytes(value, width)
    }

    /// Canonical value from bytes received from any host
    pub fn read_canonical(&self, bytes: &[u8], width: BitWidth) -> Result<EndianValue, NumericError> {
        self.codec.read_canonical(bytes, width)
    }

    /// Host value from a received canonical byte sequence
    pub fn from_canonical_bytes(&self, bytes: &[u8], width: BitWidth) -> Result<u64, NumericError> {
        self.codec.from_canonical_bytes(bytes, width)
    }

    /// Canonicalize a value of a host category
    pub fn to_canonical_category(
        &self,
        category: IntegerCategory,
        value: u64,
    ) -> Result<EndianValue, NumericError> {
        self.codec.to_canonical_category(self.capabilities.widths(), category, value)
    }

    pub fn default_time_interval(&self) -> TimeInterval {
        time_shim::default_time_interval()
    }

    pub fn seconds_field_width(&self) -> BitWidth {
        time_shim::seconds_field_width()
    }
}

/// Process-wide numeric layer (singleton)
static NUMERIC_LAYER: OnceLock<Result<NumericLayer, CapabilityError>> = OnceLock::new();

/// Initialize the process-wide numeric layer
///
/// Safe to call any number of times from any number of threads; detection
/// runs once and every caller gets the same layer.
///
/// # Returns
/// * `Ok(&NumericLayer)` - the process-wide layer
/// * `Err(CapabilityError)` - the host cannot run the numeric layer
///
/// # Examples
///
/// ```rust
/// use api_facades::init;
/// use entities_numeric_types::{BitWidth, IntegerCategory};
///
/// let layer = init().unwrap();
/// let canonical = layer.to_canonical(0x0102_0304, BitWidth::W32).unwrap();
/// assert_eq!(canonical.canonical_bytes().unwrap(), vec![1, 2, 3, 4]);
/// assert_eq!(layer.from_canonical(canonical).unwrap(), 0x0102_0304);
/// assert!(layer.width_of(IntegerCategory::NativeInt).is_supported());
/// ```
pub fn init() -> Result<&'static NumericLayer, CapabilityError> {
    NUMERIC_LAYER
        .get_or_init(|| {
            let layer = init_host_capabilities().map(|caps| NumericLayer::new(*caps));
            match &layer {
                Ok(layer) => tracing::info!(
                    byte_order = %layer.capabilities().byte_order(),
                    representation = %layer.capabilities().signed_representation(),
                    strategy = %layer.codec().strategy(),
                    "numeric layer ready"
                ),
                Err(err) => tracing::error!(error = %err, "numeric layer unavailable"),
            }
            layer
        })
        .as_ref()
        .map_err(Clone::clone)
}
