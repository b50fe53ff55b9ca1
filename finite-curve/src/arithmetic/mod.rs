mod modular;
mod point;

pub use modular::{extended_gcd, mod_inverse, Modulus};
pub use point::Point;
