//! Reconstruction of Shamir-shared secrets over a large prime field.
//!
//! Shares arrive as `(identifier, base, value)` records, are decoded into
//! points, the `k` points with the smallest x-coordinates are selected and
//! Lagrange interpolation at zero recovers the secret.
//!
//! ```
//! use num_bigint::BigUint;
//! use shamir_recover::{points::Point, shamir::Reconstructor};
//!
//! let points = vec![Point::new(1u32, 3u32), Point::new(2u32, 5u32)];
//! let secret = Reconstructor::default()
//!     .reconstruct_points(points, 2)
//!     .unwrap();
//! assert_eq!(BigUint::from(1u32), secret);
//! ```

pub mod error;
pub mod input;
pub mod interpolation;
pub mod params;
pub mod points;
pub mod selection;
pub mod shamir;

pub use error::{RecoverError, Result};
pub use input::TestCase;
pub use shamir::Reconstructor;
