use edcurve::curve::ENCODED_LEN;
use edcurve::curve::constants::GROUP_ORDER;
use edcurve::primitives::U256;
use edcurve::{Error, Point};

const BASE_BYTES: &str = "216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a\
                          6666666666666666666666666666666666666666666666666666666666666658";

const FIVE_G_BYTES: &str = "49fda73eade3587bfcef7cf7d12da5de5c2819f93e1be1a591409cc0322ef233\
                            5f4825b298feae6fe02c6e148992466631282eca89430b5d10d21f83d676c8ed";

#[test]
fn base_point_encoding() {
    let bytes = Point::BASE.to_bytes().unwrap();

    assert_eq!(hex::encode(bytes), BASE_BYTES);
}

#[test]
fn five_times_base_matches_golden_vector() {
    let p = Point::BASE.multiply(&U256::from(5u8));
    let bytes = p.to_bytes().unwrap();

    assert_eq!(hex::encode(bytes), FIVE_G_BYTES);
}

#[test]
fn identity_encoding() {
    let bytes = Point::IDENTITY.to_bytes().unwrap();

    let mut expected = [0u8; ENCODED_LEN];
    expected[63] = 1;
    assert_eq!(bytes, expected);

    // N·G has large projective coordinates but encodes like the identity.
    assert_eq!(Point::BASE.multiply(&GROUP_ORDER).to_bytes().unwrap(), expected);
}

#[test]
fn round_trip_is_affine_equivalent() {
    let scalars = [
        U256::ZERO,
        U256::from(1u8),
        U256::from(5u8),
        U256::from(0xFEED_FACEu32),
        GROUP_ORDER - U256::ONE,
    ];

    for k in scalars {
        let p = Point::BASE.multiply(&k);
        let decoded = Point::from_bytes(&p.to_bytes().unwrap()).unwrap();

        assert_eq!(decoded, p);
        assert_eq!(decoded.affine().unwrap(), p.affine().unwrap());
        assert_eq!(decoded.to_extended()[2], U256::ONE);
    }
}

#[test]
fn decoded_point_has_consistent_t() {
    let bytes = hex::decode(FIVE_G_BYTES).unwrap();
    let p = Point::from_bytes(&bytes).unwrap();

    assert!(p.is_on_curve());
    assert_eq!(Point::from_bytes_validated(&bytes).unwrap(), p);
}

#[test]
fn wrong_lengths_are_rejected() {
    for len in [0usize, 1, 32, 63, 65, 128] {
        let buf = vec![0u8; len];
        let err = Point::from_bytes(&buf).unwrap_err();

        assert_eq!(
            err,
            Error::InvalidLength {
                expected: ENCODED_LEN,
                actual: len
            }
        );
        assert!(err.is_format());
    }
}

#[test]
fn try_from_slice() {
    let bytes = Point::BASE.to_bytes().unwrap();

    assert_eq!(Point::try_from(&bytes[..]).unwrap(), Point::BASE);
    assert!(Point::try_from(&bytes[..10]).is_err());
}

#[test]
fn validated_decoding_rejects_off_curve_points() {
    let mut bytes = [0u8; ENCODED_LEN];
    bytes[31] = 1;
    bytes[63] = 2;

    assert!(Point::from_bytes(&bytes).is_ok());
    assert_eq!(Point::from_bytes_validated(&bytes), Err(Error::NotOnCurve));
}
