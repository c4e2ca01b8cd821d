//! Integration tests for infrastructure_endian_codec crate
//!
//! These tests verify the binary-compatibility contract: the same logical
//! value and width give the same bytes on every host.

use entities_numeric_types::{BitWidth, ByteOrder, IntegerCategory, NumericError, WordBits};
use infrastructure_endian_codec::*;
use infrastructure_host_probe::{HostFacts, WordWidthTable, ABSENT_TYPE_SIZE};

const ORDERS: [ByteOrder; 2] = [ByteOrder::BigEndian, ByteOrder::LittleEndian];

fn sample_values() -> Vec<u64> {
    let mut values = vec![0, 1, 0xFF, 0x0102_0304, u64::MAX, 1 << 63];
    let mut x: u64 = 0x2545_F491_4F6C_DD1D;
    for _ in 0..1_000 {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        values.push(x);
    }
    values
}

fn mask(value: u64, width: BitWidth) -> u64 {
    match width.bits() {
        Some(64) => value,
        Some(bits) => value & ((1u64 << bits) - 1),
        None => 0,
    }
}

#[test]
fn test_round_trip_every_strategy_and_width() {
    let strategies = [SwapStrategy::Identity, SwapStrategy::ShiftMask, SwapStrategy::Intrinsic];
    for strategy in strategies {
        let codec = EndianCodec::with_strategy(strategy);
        for width in [BitWidth::W16, BitWidth::W32, BitWidth::W64] {
            for value in sample_values() {
                let x = mask(value, width);
                let canonical = codec.to_canonical(x, width).unwrap();
                assert_eq!(codec.from_canonical(canonical).unwrap(), x);
            }
        }
    }
}

#[test]
fn test_shift_mask_and_intrinsic_are_interchangeable() {
    let slow = EndianCodec::with_strategy(SwapStrategy::ShiftMask);
    let fast = EndianCodec::with_strategy(SwapStrategy::Intrinsic);
    for width in [BitWidth::W16, BitWidth::W32, BitWidth::W64] {
        for value in sample_values() {
            let x = mask(value, width);
            assert_eq!(slow.to_canonical(x, width), fast.to_canonical(x, width));
        }
    }
}

#[test]
fn test_big_endian_host_identity() {
    let codec = EndianCodec::for_order(ByteOrder::BigEndian);
    for width in [BitWidth::W16, BitWidth::W32, BitWidth::W64] {
        for value in sample_values() {
            let x = mask(value, width);
            assert_eq!(codec.to_canonical(x, width).unwrap().bits().to_u64(), x);
        }
    }
}

#[test]
fn test_real_host_wire_bytes() {
    let codec = EndianCodec::native();
    let canonical = codec.to_canonical(0x0102_0304, BitWidth::W32).unwrap();

    assert_eq!(canonical.canonical_bytes().unwrap(), vec![0x01, 0x02, 0x03, 0x04]);
    match canonical.bits() {
        WordBits::Bits32(bits) => assert_eq!(bits.to_ne_bytes(), [0x01, 0x02, 0x03, 0x04]),
        other => panic!("unexpected width: {:?}", other),
    }
}

#[test]
fn test_every_host_writes_identical_bytes() {
    for width in [BitWidth::W16, BitWidth::W32, BitWidth::W64] {
        for value in sample_values() {
            let x = mask(value, width);
            let expected = x.to_be_bytes()[8 - width.bytes().unwrap()..].to_vec();
            for order in ORDERS {
                let codec = EndianCodec::for_order(order);
                let canonical = codec.to_canonical(x, width).unwrap();
                assert_eq!(canonical.canonical_bytes().unwrap(), expected);
                assert_eq!(codec.from_canonical_bytes(&expected, width).unwrap(), x);
            }
        }
    }
}

#[test]
fn test_simulated_host_bytes_independent_of_machine() {
    // Whatever machine runs this, a codec for the other order still writes
    // most significant byte first
    for order in ORDERS {
        let codec = EndianCodec::for_order(order);
        let canonical = codec.to_canonical(0x0102_0304, BitWidth::W32).unwrap();
        assert_eq!(canonical.host_order(), order);
        assert_eq!(canonical.canonical_bytes().unwrap(), vec![1, 2, 3, 4]);
    }
}

#[test]
fn test_bytes_cross_between_hosts() {
    let [big, little] = ORDERS.map(EndianCodec::for_order);
    for width in [BitWidth::W16, BitWidth::W32, BitWidth::W64] {
        for value in sample_values().into_iter().take(100) {
            let x = mask(value, width);
            let sent = big.to_canonical_bytes(x, width).unwrap();
            let received = little.read_canonical(&sent, width).unwrap();
            assert_eq!(received.canonical_bytes().unwrap(), sent);
            assert_eq!(little.from_canonical(received).unwrap(), x);
            assert_eq!(big.from_canonical_bytes(&little.to_canonical_bytes(x, width).unwrap(), width).unwrap(), x);
        }
    }
}

#[test]
fn test_category_without_host_type() {
    let facts = HostFacts::detect().with_size(IntegerCategory::Extended, ABSENT_TYPE_SIZE);
    let table = WordWidthTable::from_facts(&facts);
    let codec = EndianCodec::native();

    assert_eq!(
        codec.to_canonical_category(&table, IntegerCategory::Extended, 7),
        Err(NumericError::UnavailableWidth)
    );
    let int = codec.to_canonical_category(&table, IntegerCategory::NativeInt, 7).unwrap();
    assert_eq!(int.width(), table.width_of(IntegerCategory::NativeInt));
    assert_eq!(codec.from_canonical(int).unwrap(), 7);
}

#[test]
fn test_value_wider_than_width() {
    let codec = EndianCodec::native();
    assert_eq!(
        codec.to_canonical(0x1_0000_0000, BitWidth::W32),
        Err(NumericError::ValueOutOfRange { value: 0x1_0000_0000, width: BitWidth::W32 })
    );
    assert_eq!(
        codec.from_canonical_bytes(&[0; 8], BitWidth::W32),
        Err(NumericError::ByteCountMismatch { expected: 4, actual: 8 })
    );
}

#[test]
fn test_double_bytes_match_across_hosts() {
    let value = -2.5e-300f64;
    for order in ORDERS {
        let codec = EndianCodec::for_order(order);
        let canonical = codec.double_to_canonical(value);
        assert_eq!(canonical.canonical_bytes().unwrap(), value.to_bits().to_be_bytes().to_vec());
        assert_eq!(codec.double_from_canonical(canonical).unwrap(), value);
    }
}
