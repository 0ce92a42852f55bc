//! Modular arithmetic.
//!
//! Two layers live here:
//!
//! - [`Modulus`]: reduction, inversion and ring operations modulo any
//!   non-zero 256-bit modulus. Used for the group order `N` (scalars) and
//!   for inversions in the field.
//! - [`FieldElement`]: fast arithmetic modulo the field prime
//!   `M = 2²⁵⁵ − 19`, used for every point coordinate.
//!
//! Values are always kept normalized into `[0, modulus)`.
//!
//! None of this code is constant-time.

mod field;
mod modular;

pub use field::FieldElement;
pub use modular::Modulus;
