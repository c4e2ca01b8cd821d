//! Host Capabilities Module
//!
//! Provides the immutable capability record the rest of the numeric layer is
//! configured from: byte order, signed representation and the width table.
//! The record is validated when built; a host that would make the width
//! arithmetic silently wrong never gets one.

use entities_numeric_types::{
    BitWidth, ByteOrder, IntegerCategory, IntegerTypeDescriptor, SignedRepresentation, BYTE_BITS,
};

use crate::facts::HostFacts;
use crate::width_table::WordWidthTable;

/// Validated, read-only facts about a host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    byte_order: ByteOrder,
    signed_representation: SignedRepresentation,
    widths: WordWidthTable,
}

impl HostCapabilities {
    /// Detect and validate the running host
    pub fn detect() -> Result<Self, CapabilityError> {
        Self::from_facts(&HostFacts::detect())
    }

    /// Validate facts and build the record
    ///
    /// # Returns
    /// * `Ok(HostCapabilities)` - the host is usable
    /// * `Err(CapabilityError::ByteNotEightBits)` - bytes are not 8 bits
    /// * `Err(CapabilityError::UnsupportedSignedRepresentation)` - the facts
    ///   require two's complement and the host is something else
    pub fn from_facts(facts: &HostFacts) -> Result<Self, CapabilityError> {
        if facts.byte_bits != BYTE_BITS {
            tracing::error!(byte_bits = facts.byte_bits, "host byte is not 8 bits");
            return Err(CapabilityError::ByteNotEightBits(facts.byte_bits));
        }
        if facts.require_twos_complement
            && facts.signed_representation != SignedRepresentation::TwosComplement
        {
            tracing::error!(
                representation = %facts.signed_representation,
                "host is not two's complement"
            );
            return Err(CapabilityError::UnsupportedSignedRepresentation(
                facts.signed_representation,
            ));
        }

        let widths = WordWidthTable::from_facts(facts);
        for (category, width) in widths.iter() {
            if width.is_supported() {
                tracing::debug!(category = %category, bits = width.raw(), "integer width");
            } else {
                tracing::debug!(category = %category, "integer category unavailable");
            }
        }
        tracing::debug!(
            byte_order = %facts.byte_order,
            representation = %facts.signed_representation,
            "host capabilities built"
        );

        Ok(Self {
            byte_order: facts.byte_order,
            signed_representation: facts.signed_representation,
            widths,
        })
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn signed_representation(&self) -> SignedRepresentation {
        self.signed_representation
    }

    pub fn widths(&self) -> &WordWidthTable {
        &self.widths
    }

    /// Width of a category, or the sentinel
    pub fn width_of(&self, category: IntegerCategory) -> BitWidth {
        self.widths.width_of(category)
    }

    /// Descriptor for a category
    pub fn descriptor_of(&self, category: IntegerCategory, is_signed: bool) -> IntegerTypeDescriptor {
        self.widths.descriptor_of(category, is_signed)
    }

    /// Number of distinct byte values (`1 << bits-per-byte`)
    pub fn charset_size(&self) -> usize {
        1 << BYTE_BITS
    }
}

/// Fatal initialization errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    /// The host byte is not 8 bits wide
    ByteNotEightBits(u32),
    /// The host is not two's complement and fail-fast was requested
    UnsupportedSignedRepresentation(SignedRepresentation),
}

impl std::fmt::Display for CapabilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapabilityError::ByteNotEightBits(bits) => {
                write!(f, "Host byte is {} bits, 8 required", bits)
            }
            CapabilityError::UnsupportedSignedRepresentation(repr) => {
                write!(f, "Unsupported signed representation: {}", repr)
            }
        }
    }
}

impl std::error::Error for CapabilityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        let caps = HostCapabilities::detect().unwrap();
        assert_eq!(caps.byte_order(), ByteOrder::native());
        assert_eq!(caps.signed_representation(), SignedRepresentation::TwosComplement);
        assert_eq!(caps.charset_size(), 256);
    }

    #[test]
    fn test_rejects_non_octet_bytes() {
        let mut facts = HostFacts::detect();
        facts.byte_bits = 9;
        assert_eq!(
            HostCapabilities::from_facts(&facts),
            Err(CapabilityError::ByteNotEightBits(9))
        );
    }

    #[test]
    fn test_ones_complement_accepted_unless_required() {
        let facts = HostFacts::detect()
            .with_signed_representation(SignedRepresentation::OnesComplement);
        let caps = HostCapabilities::from_facts(&facts).unwrap();
        assert_eq!(caps.signed_representation(), SignedRepresentation::OnesComplement);

        let strict = HostFacts { require_twos_complement: true, ..facts };
        assert_eq!(
            HostCapabilities::from_facts(&strict),
            Err(CapabilityError::UnsupportedSignedRepresentation(
                SignedRepresentation::OnesComplement
            ))
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            CapabilityError::ByteNotEightBits(16).to_string(),
            "Host byte is 16 bits, 8 required"
        );
    }
}
