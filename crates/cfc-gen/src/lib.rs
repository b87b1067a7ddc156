//! Generation engines for comma-free code search.
//!
//! Two enumeration strategies with deliberately different complexity: the
//! mixed-radix [`TupleEnumerator`] walks every tuple under heterogeneous
//! per-position maxima, while the [`NecklaceGenerator`] produces prime
//! strings over a uniform alphabet directly. [`class_representatives`]
//! combines the odometer with a dictionary to brute-force the minimal
//! representative of every aperiodic cyclic class.

mod necklace;
mod odometer;
mod reprs;

pub use necklace::NecklaceGenerator;
pub use odometer::TupleEnumerator;
pub use reprs::class_representatives;
