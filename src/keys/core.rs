//! Key material for Edwards25519 Diffie–Hellman.
//!
//! A [`Key`] pairs an optional private scalar with a public point. Keys are
//! immutable once built. The private half is an explicit
//! [`PrivatePart`], so a public-only key can never be mistaken for one
//! holding a real scalar.
//!
//! Construction variants:
//!
//! - [`Key::generate`]: 32 random bytes, read big-endian and reduced modulo
//!   `N`, with `pub = G · priv`;
//! - [`Key::from_private`]: derive the public point from a known scalar;
//! - [`Key::from_pair`]: caller-supplied scalar and point, unchecked;
//! - [`Key::from_public`]: a peer's public point with no private material;
//! - [`Key::with_placeholder_public`]: a scalar with `pub = G · N`, a
//!   non-functional stand-in for test fixtures only.
//!
//! Nothing here runs in constant time.

use tracing::{debug, warn};

use crate::curve::constants::GROUP_ORDER;
use crate::curve::{Point, Scalar};
use crate::error::{Error, Result};
use crate::keys::entropy::{EntropySource, OsEntropy};

/// The private half of a [`Key`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrivatePart {
    /// A private scalar in `[0, N)`.
    HasPrivateKey(Scalar),
    /// No private material; the key only carries a public point.
    PublicOnly,
}

/// A private scalar (or its explicit absence) and a public point.
#[derive(Clone, Copy, Debug)]
pub struct Key {
    private: PrivatePart,
    public: Point,
}

impl Key {
    /// Generates a fresh key from operating system entropy.
    pub fn generate() -> Result<Key> {
        Self::generate_with(&mut OsEntropy)
    }

    /// Generates a fresh key from the given entropy source.
    ///
    /// Draws 32 bytes, interprets them as a big-endian integer and reduces
    /// it modulo `N` to obtain the private scalar.
    pub fn generate_with<E: EntropySource + ?Sized>(source: &mut E) -> Result<Key> {
        let mut seed = [0u8; 32];
        source.fill_bytes(&mut seed)?;

        let private = Scalar::from_be_bytes(&seed);
        seed.fill(0);

        debug!("generated key pair");

        Ok(Self::from_private(private))
    }

    /// Builds a key from a private scalar, deriving `pub = G · priv`.
    pub fn from_private(private: Scalar) -> Key {
        Key {
            private: PrivatePart::HasPrivateKey(private),
            public: Point::BASE * private,
        }
    }

    /// Builds a key from a scalar and a point supplied together.
    ///
    /// The pair is trusted: `public` is not checked against `G · private`.
    pub fn from_pair(private: Scalar, public: Point) -> Key {
        Key {
            private: PrivatePart::HasPrivateKey(private),
            public,
        }
    }

    /// Builds a public-only key, typically a peer's.
    pub fn from_public(public: Point) -> Key {
        Key {
            private: PrivatePart::PublicOnly,
            public,
        }
    }

    /// Builds a key whose public point is the placeholder `G · N`.
    ///
    /// The public point is not derived from `private` and must never be
    /// published or used for key agreement.
    pub fn with_placeholder_public(private: Scalar) -> Key {
        warn!("constructing key with placeholder public point");

        Key {
            private: PrivatePart::HasPrivateKey(private),
            public: Point::BASE.multiply(&GROUP_ORDER),
        }
    }

    pub fn private_part(&self) -> &PrivatePart {
        &self.private
    }

    /// Returns the private scalar, if the key has one.
    pub fn private(&self) -> Option<Scalar> {
        match self.private {
            PrivatePart::HasPrivateKey(scalar) => Some(scalar),
            PrivatePart::PublicOnly => None,
        }
    }

    pub fn public(&self) -> &Point {
        &self.public
    }

    pub fn has_private(&self) -> bool {
        matches!(self.private, PrivatePart::HasPrivateKey(_))
    }

    /// Diffie–Hellman: computes `peer · priv`.
    ///
    /// Fails with [`Error::MissingPrivateKey`] for a public-only key. The
    /// peer point is used as given; validate untrusted input first.
    pub fn shared_point(&self, peer: &Point) -> Result<Point> {
        let Some(private) = self.private() else {
            debug!("key agreement attempted with a public-only key");
            return Err(Error::MissingPrivateKey);
        };

        debug!("computing shared point");

        Ok(peer * &private)
    }

    /// Diffie–Hellman: the 32-byte big-endian affine x-coordinate of the
    /// shared point.
    pub fn shared_secret(&self, peer: &Point) -> Result<[u8; 32]> {
        Ok(self.shared_point(peer)?.affine_x()?.to_be_bytes())
    }
}

impl From<Scalar> for Key {
    fn from(private: Scalar) -> Self {
        Key::from_private(private)
    }
}
