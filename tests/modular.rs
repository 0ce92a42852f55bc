use edcurve::Error;
use edcurve::arith::{FieldElement, Modulus};
use edcurve::curve::constants::{FIELD_PRIME, GROUP_ORDER};
use edcurve::primitives::{U256, U512};

fn hex(s: &str) -> U256 {
    U256::from_hex(s).unwrap()
}

fn a() -> U256 {
    hex("0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef")
}

fn b() -> U256 {
    hex("fedcba9876543210fedcba9876543210fedcba9876543210fedcba9876543210")
}

#[test]
fn modulus_rejects_zero() {
    let err = Modulus::new(U256::ZERO).unwrap_err();

    assert_eq!(err, Error::ZeroModulus);
    assert!(err.is_domain());
}

#[test]
fn reduce_normalizes_into_range() {
    let m = Modulus::new(U256::from(97u8)).unwrap();

    assert_eq!(m.reduce(&U256::from(97u8)), U256::ZERO);
    assert_eq!(m.reduce(&U256::from(200u8)), U256::from(6u8));
    assert_eq!(m.reduce(&U256::from(5u8)), U256::from(5u8));
    assert_eq!(m.neg(&U256::from(5u8)), U256::from(92u8));
    assert_eq!(m.sub(&U256::from(3u8), &U256::from(5u8)), U256::from(95u8));

    assert_eq!(
        Modulus::ORDER.reduce(&U256::MAX),
        hex("0ffffffffffffffffffffffffffffffec6ef5bf4737dcf70d6ec31748d98951c")
    );
    assert_eq!(Modulus::FIELD.reduce(&FIELD_PRIME), U256::ZERO);
}

#[test]
fn reduce_wide_matches_reference() {
    let wide = U512::from([0xFFu8; 64]);

    assert_eq!(
        Modulus::ORDER.reduce_wide(&wide),
        hex("0399411b7c309a3dceec73d217f5be65d00e1ba768859347a40611e3449c0f00")
    );
}

#[test]
fn ring_operations_match_reference() {
    assert_eq!(
        Modulus::FIELD.mul(&a(), &b()),
        hex("374c6c5b5db7ad57d322db4097232896eef94a25d08ea3d60acfb90b09fa1f13")
    );
    assert_eq!(
        Modulus::ORDER.mul(&a(), &b()),
        hex("0e727e8ed54e7d1e9daab69447142133ff385bcb2e0092cd11907e19d2df78b8")
    );
    assert_eq!(
        Modulus::ORDER.add(&a(), &b()),
        Modulus::ORDER.reduce(&U256::MAX)
    );
    assert_eq!(
        Modulus::ORDER.pow(&a(), &b()),
        hex("0151f5c4c69c83bba7502b34d73c906df6058e8437120f5b477b21fb39aa1951")
    );
}

#[test]
fn addition_handles_moduli_near_two_pow_256() {
    let m = Modulus::new(U256::MAX).unwrap();
    let x = U256::MAX - U256::ONE;

    // (2m − 2) mod m = m − 2
    assert_eq!(m.add(&x, &x), U256::MAX - U256::from(2u8));
}

#[test]
fn inverse_of_two_in_field() {
    let inv = Modulus::FIELD.inverse(&U256::from(2u8)).unwrap();

    // (M + 1) / 2
    assert_eq!(inv, (FIELD_PRIME >> 1) + U256::ONE);
}

#[test]
fn inverse_times_value_is_one() {
    let values = [
        U256::ONE,
        U256::from(2u8),
        U256::from(0xDEADBEEFu32),
        a(),
        b(),
        FIELD_PRIME - U256::ONE,
    ];

    for modulus in [Modulus::FIELD, Modulus::ORDER] {
        for v in values {
            if modulus.reduce(&v).is_zero() {
                continue;
            }

            let inv = modulus.inverse(&v).unwrap();
            assert_eq!(modulus.mul(&v, &inv), U256::ONE, "modulus {:x}", modulus.value());
        }
    }
}

#[test]
fn inverse_agrees_with_fermat() {
    let exp = FIELD_PRIME - U256::from(2u8);

    assert_eq!(
        Modulus::FIELD.inverse(&a()).unwrap(),
        Modulus::FIELD.pow(&a(), &exp)
    );
    assert_eq!(
        Modulus::FIELD.inverse(&a()).unwrap(),
        hex("0156a6e8a59f1ce84cf3fe6bb3704486ee3ce441547929141dcf6be16377749c")
    );
}

#[test]
fn inverse_of_zero_or_modulus_fails() {
    for modulus in [Modulus::FIELD, Modulus::ORDER] {
        assert_eq!(modulus.inverse(&U256::ZERO), Err(Error::NoInverse));
        assert_eq!(modulus.inverse(&modulus.value()), Err(Error::NoInverse));
    }

    let n = Modulus::ORDER;
    let twice = GROUP_ORDER + GROUP_ORDER;
    assert_eq!(n.inverse(&twice), Err(Error::NoInverse));
}

#[test]
fn inverse_fails_without_coprimality() {
    let m = Modulus::new(U256::from(12u8)).unwrap();

    assert_eq!(m.inverse(&U256::from(8u8)), Err(Error::NoInverse));
    assert_eq!(m.inverse(&U256::from(5u8)), Ok(U256::from(5u8)));
    assert!(m.inverse(&U256::from(6u8)).unwrap_err().is_domain());
}

#[test]
fn field_element_matches_generic_modulus() {
    let pairs = [
        (a(), b()),
        (FIELD_PRIME - U256::ONE, FIELD_PRIME - U256::ONE),
        (U256::MAX, U256::MAX),
        (U256::from(19u8), U256::ONE << 254),
    ];

    for (x, y) in pairs {
        let fx = FieldElement::from_u256(&x);
        let fy = FieldElement::from_u256(&y);

        let m = Modulus::FIELD;
        assert_eq!((fx * fy).to_u256(), m.mul(&x, &y));
        assert_eq!((fx + fy).to_u256(), m.add(&x, &y));
        assert_eq!((fx - fy).to_u256(), m.sub(&x, &y));
        assert_eq!((-fx).to_u256(), m.neg(&x));
    }
}

#[test]
fn field_element_invert() {
    let x = FieldElement::from_u256(&a());

    assert_eq!(x * x.invert().unwrap(), FieldElement::ONE);
    assert_eq!(FieldElement::ZERO.invert(), Err(Error::NoInverse));
    assert!(FieldElement::from_u256(&FIELD_PRIME).is_zero());
}
