use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The elliptic curve a key pair or a signature lives on.
///
/// Key generation, signing and verification all take their curve from here, and every key in
/// a ring has to share the curve of the signing key.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Curve {
    /// NIST P-256, also known as secp256r1
    P256,
    /// NIST P-384, also known as secp384r1
    #[default]
    P384,
}

impl Curve {
    pub const ALL: [Curve; 2] = [Curve::P256, Curve::P384];

    pub fn name(self) -> &'static str {
        match self {
            Curve::P256 => "P-256",
            Curve::P384 => "P-384",
        }
    }

    /// Width in bytes of both a field element and a scalar
    pub fn field_size(self) -> usize {
        match self {
            Curve::P256 => 32,
            Curve::P384 => 48,
        }
    }

    /// `0x04 ‖ X ‖ Y`
    pub fn public_key_len(self) -> usize {
        1 + 2 * self.field_size()
    }

    pub fn private_key_len(self) -> usize {
        self.field_size()
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
