//! Unboxed optional values for `i32`, `i64` and `f64`.
//!
//! [`PrimitiveOptional`] holds one primitive value or nothing, with absence
//! carried by the variant rather than a sentinel. Around it:
//!
//! - `map` / `filter` / kind conversions and `Option` interop ([`ops`]);
//! - single-use iteration with explicit exhaustion ([`iter`]);
//! - collector-style reduction ([`collect`]);
//! - present/absent callbacks ([`presence`]);
//! - a read-only zero-or-one element set ([`set`]).
//!
//! ```
//! use optional::{collect, some, OptionalInt};
//!
//! let x: OptionalInt = some(5).filter(|v| v > 3);
//! assert_eq!(x.get(), Ok(5));
//! assert_eq!(x.as_long().collect_with(&collect::summing()), 5i64);
//! ```

pub mod error;
pub mod optional;
pub mod iter;
pub mod ops;
pub mod set;
pub mod collect;
pub mod presence;

pub use collect::{from_fns, Collector, FnCollector};
pub use error::{OptionalError, Result};
pub use iter::{OptionalIterable, PrimitiveOptionalIterator};
pub use optional::{none, some, OptionalDouble, OptionalInt, OptionalLong, PrimitiveOptional};
pub use presence::{if_absent, if_present, run_if_absent, Branch, PresenceCheck};
pub use set::BoxedSet;

pub use primitives::{Exhausted, Primitive, PrimitiveIterable, PrimitiveIterator, PrimitiveKind};
