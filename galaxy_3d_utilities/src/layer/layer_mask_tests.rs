use super::*;
use crate::error::Error;

/// Stand-in for a host scene object with an assigned layer.
struct GameObject {
    layer: u32,
}

impl Layered for GameObject {
    fn layer(&self) -> u32 {
        self.layer
    }
}

// ============================================================================
// contains
// ============================================================================

#[test]
fn test_contains_returns_true_when_layer_is_in_mask() {
    let mask = LayerMask::from_bits(1 << 3);
    assert!(mask.contains(3));
}

#[test]
fn test_contains_returns_false_when_layer_is_not_in_mask() {
    let mask = LayerMask::from_bits(1 << 3);
    assert!(!mask.contains(2));
}

#[test]
fn test_contains_out_of_range_layer_is_false() {
    assert!(!LayerMask::ALL.contains(32));
    assert!(!LayerMask::ALL.contains(u32::MAX));
}

#[test]
fn test_contains_object() {
    let mask = LayerMask::from_bits(1 << 3);
    assert!(mask.contains_object(&GameObject { layer: 3 }));
    assert!(!mask.contains_object(&GameObject { layer: 2 }));
    assert!(!mask.contains_object(&GameObject { layer: 40 }));
}

// ============================================================================
// add_layer / remove_layer
// ============================================================================

#[test]
fn test_add_layer_on_empty_mask_contains_only_that_layer() {
    for layer in 0..MAX_LAYERS {
        let mut mask = LayerMask::NONE;
        mask.add_layer(layer).unwrap();

        for other in 0..MAX_LAYERS {
            assert_eq!(mask.contains(other), other == layer, "layer {} / {}", layer, other);
        }
    }
}

#[test]
fn test_add_layer_keeps_existing_layers() {
    let mut mask = LayerMask::from_bits(1 << 3);
    mask.add_layer(5).unwrap();
    assert!(mask.contains(3));
    assert!(mask.contains(5));
}

#[test]
fn test_remove_layer_removes_only_that_layer() {
    let mut mask = LayerMask::from_bits((1 << 3) | (1 << 5));
    mask.remove_layer(3).unwrap();
    assert!(!mask.contains(3));
    assert!(mask.contains(5));
}

#[test]
fn test_add_then_remove_clears_layer() {
    for bits in [0u32, 0xFFFF_FFFF, 0xA5A5_0F0F] {
        for layer in 0..MAX_LAYERS {
            let mut mask = LayerMask::from_bits(bits);
            mask.add_layer(layer).unwrap();
            mask.remove_layer(layer).unwrap();
            assert!(!mask.contains(layer));
            assert_eq!(mask.bits(), bits & !(1 << layer));
        }
    }
}

#[test]
fn test_highest_layer() {
    let mut mask = LayerMask::NONE;
    mask.add_layer(31).unwrap();
    assert_eq!(mask.bits(), 0x8000_0000);
    assert_eq!(mask.layers(), vec![31]);
}

#[test]
fn test_mutators_reject_out_of_range_layers() {
    let mut mask = LayerMask::from_bits(0b1010);

    assert_eq!(mask.add_layer(32), Err(Error::LayerOutOfRange(32)));
    assert_eq!(mask.remove_layer(100), Err(Error::LayerOutOfRange(100)));
    assert_eq!(mask.fill(&[1, 2, 64]), Err(Error::LayerOutOfRange(64)));

    assert_eq!(mask.bits(), 0b1010);
}

// ============================================================================
// layers / iter
// ============================================================================

#[test]
fn test_layers_returns_set_bits_in_ascending_order() {
    let mask = LayerMask::from_bits((1 << 5) | (1 << 3));
    assert_eq!(mask.layers(), vec![3, 5]);
}

#[test]
fn test_layers_of_empty_and_full_masks() {
    assert!(LayerMask::NONE.layers().is_empty());
    assert_eq!(LayerMask::ALL.layers(), (0..32).collect::<Vec<u32>>());
}

#[test]
fn test_iter_is_exact_size() {
    let mask = LayerMask::from_bits(0b1011_0000);
    let iter = mask.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(mask.into_iter().collect::<Vec<_>>(), vec![4, 5, 7]);
}

// ============================================================================
// fill
// ============================================================================

#[test]
fn test_fill_sets_exactly_the_given_layers() {
    let mut mask = LayerMask::NONE;
    mask.fill(&[3, 5]).unwrap();
    assert!(mask.contains(3));
    assert!(mask.contains(5));
    assert_eq!(mask.count(), 2);
}

#[test]
fn test_fill_ignores_prior_value() {
    let mut expected = LayerMask::NONE;
    expected.add_layer(3).unwrap();
    expected.add_layer(5).unwrap();

    for prior in [0u32, 0xFFFF_FFFF, 1 << 9] {
        let mut mask = LayerMask::from_bits(prior);
        mask.fill(&[3, 5]).unwrap();
        assert_eq!(mask, expected);
    }
}

#[test]
fn test_fill_with_duplicates_and_empty_list() {
    let mut mask = LayerMask::ALL;
    mask.fill(&[7, 7, 7]).unwrap();
    assert_eq!(mask.layers(), vec![7]);

    mask.fill(&[]).unwrap();
    assert!(mask.is_empty());
}

#[test]
fn test_from_layers() {
    assert_eq!(LayerMask::from_layers(&[0, 31]).unwrap().bits(), 0x8000_0001);
    assert_eq!(LayerMask::from_layers(&[32]), Err(Error::LayerOutOfRange(32)));
}

// ============================================================================
// Value semantics
// ============================================================================

#[test]
fn test_bitwise_operators() {
    let a = LayerMask::from_bits(0b1100);
    let b = LayerMask::from_bits(0b1010);

    assert_eq!((a | b).bits(), 0b1110);
    assert_eq!((a & b).bits(), 0b1000);
    assert_eq!((a ^ b).bits(), 0b0110);
    assert_eq!(!LayerMask::NONE, LayerMask::ALL);

    let mut c = a;
    c |= b;
    c &= LayerMask::from_bits(0b0110);
    c ^= LayerMask::from_bits(0b0001);
    assert_eq!(c.bits(), 0b0111);
}

#[test]
fn test_conversions() {
    let mask: LayerMask = 0b101u32.into();
    let bits: u32 = mask.into();
    assert_eq!(bits, 0b101);
    assert_eq!(LayerMask::default(), LayerMask::NONE);
}

#[test]
fn test_display_and_debug() {
    let mask = LayerMask::from_bits((1 << 3) | (1 << 5));
    assert_eq!(format!("{}", mask), "LayerMask(3, 5)");
    assert_eq!(format!("{}", LayerMask::NONE), "LayerMask()");
    assert_eq!(
        format!("{:?}", LayerMask::from_bits(1)),
        "LayerMask(0b00000000000000000000000000000001)"
    );
}

#[test]
fn test_pod_layout() {
    let masks = [LayerMask::from_bits(1), LayerMask::from_bits(0x8000_0000)];
    let bytes: &[u8] = bytemuck::cast_slice(&masks);
    assert_eq!(bytes.len(), 8);
    let words: &[u32] = bytemuck::cast_slice(bytes);
    assert_eq!(words, &[1u32, 0x8000_0000][..]);
}
