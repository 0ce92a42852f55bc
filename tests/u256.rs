use edcurve::Error;
use edcurve::primitives::{U256, U512};

#[test]
fn u256_max_const() {
    assert_eq!(U256::MAX, U256::from([255u8; 32]));
    assert_eq!(
        U256::MAX,
        U256::from_dec_str(
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        )
        .unwrap()
    );
}

#[test]
fn u256_try_from_small_ints_and_back() {
    let a = U256::from(0x12u8);
    assert_eq!(u8::try_from(a).unwrap(), 0x12u8);

    let bad = U256::from([1u8; 32]);
    assert!(u8::try_from(bad).is_err());

    let a = U256::from(0xDEADBEEFu32);
    assert_eq!(u32::try_from(a).unwrap(), 0xDEADBEEFu32);

    let a = U256::from(0x0123_4567_89AB_CDEFu64);
    assert_eq!(u64::try_from(a).unwrap(), 0x0123_4567_89AB_CDEFu64);

    let mut bad = [0u8; 32];
    bad[0] = 1;
    assert_eq!(u64::try_from(U256::from(bad)), Err(Error::Overflow));

    let a = U256::from(0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEFu128);
    assert_eq!(
        u128::try_from(a).unwrap(),
        0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEFu128
    );
}

#[test]
fn u256_leading_zeros_and_bits() {
    assert_eq!(U256::ZERO.leading_zeros(), 256);
    assert_eq!(U256::ZERO.bits(), 0);

    let one = U256::from(1u8);
    assert_eq!(one.leading_zeros(), 255);
    assert_eq!(one.bits(), 1);

    let mut high = [0u8; 32];
    high[0] = 0x10;
    let h = U256::from(high);
    assert_eq!(h.leading_zeros(), 3);
    assert!(h.bit(252));
    assert!(!h.bit(251));
    assert!(!h.bit(300));

    let mut mid = [0u8; 32];
    mid[10] = 0x01;
    let m = U256::from(mid);
    assert_eq!(m.leading_zeros(), 87u32);
}

#[test]
fn u256_shifts() {
    let a = U256::from(0x8001u32);

    assert_eq!(a << 3, U256::from(0x4_0008u32));
    assert_eq!(a >> 1, U256::from(0x4000u32));
    assert_eq!(a << 256, U256::ZERO);
    assert_eq!(U256::MAX >> 255, U256::ONE);

    let top = U256::ONE << 255;
    assert_eq!(top.to_be_bytes()[0], 0x80);
    assert_eq!(top >> 255, U256::ONE);

    // Shift across byte boundaries in both directions.
    let b = U256::from_hex("0x1234_5678_9abc_def0").unwrap();
    assert_eq!((b << 12) >> 12, b);
    assert_eq!(b >> 4, U256::from_hex("0123456789abcdef").unwrap());
}

#[test]
fn u256_wrapping_and_checked_add() {
    let one = U256::ONE;

    assert_eq!(U256::MAX + one, U256::ZERO);
    assert_eq!(U256::ZERO - one, U256::MAX);
    assert_eq!(U256::MAX.checked_add(one), None);
    assert_eq!(
        U256::from(40u8).checked_add(U256::from(2u8)),
        Some(U256::from(42u8))
    );
}

#[test]
fn u256_widening_mul() {
    let product = U256::MAX.widening_mul(&U256::MAX);

    // (2²⁵⁶ − 1)² = 2⁵¹² − 2²⁵⁷ + 1
    let mut expected = [0xFFu8; 64];
    expected[31] = 0xFE;
    expected[32..].fill(0);
    expected[63] = 1;

    assert_eq!(product, U512::from(expected));
    assert_eq!(
        U256::try_from(U256::from(7u8).widening_mul(&U256::from(6u8))).unwrap(),
        U256::from(42u8)
    );
}

#[test]
fn u256_parse_literals() {
    assert_eq!("42".parse::<U256>().unwrap(), U256::from(42u8));
    assert_eq!("0x2a".parse::<U256>().unwrap(), U256::from(42u8));
    assert_eq!(U256::from_dec_str("1_000").unwrap(), U256::from(1000u32));

    assert_eq!(U256::from_dec_str("12a"), Err(Error::InvalidDigit('a')));
    assert!(U256::from_dec_str("").unwrap_err().is_format());
    assert_eq!(
        U256::from_dec_str(
            "115792089237316195423570985008687907853269984665640564039457584007913129639936"
        ),
        Err(Error::Overflow)
    );
    assert_eq!(U256::from_hex(&"f".repeat(65)), Err(Error::Overflow));
}

#[test]
fn u256_from_be_slice_pads_left() {
    let v = U256::from_be_slice(&[0x01, 0x00]).unwrap();
    assert_eq!(v, U256::from(256u32));

    assert_eq!(
        U256::from_be_slice(&[0u8; 33]),
        Err(Error::InvalidLength {
            expected: 32,
            actual: 33
        })
    );
}

#[test]
fn u256_formatting() {
    let v = U256::from(0xABu8);

    assert!(format!("{v}").ends_with(":00:AB"));
    assert_eq!(format!("{v:x}"), format!("{}ab", "0".repeat(62)));
    assert!(format!("{v:#x}").starts_with("0x"));
}

#[test]
fn u512_round_trips_u256() {
    let u256 = U256::from(0xDEADBEEFu32);
    let widened = U512::from(u256);

    assert_eq!(U256::try_from(widened).unwrap(), u256);

    let mut bad = [0u8; 64];
    bad[0] = 1;
    assert!(U256::try_from(U512::from(bad)).is_err());
    assert_eq!(U512::from(bad).leading_zeros(), 7);
}
