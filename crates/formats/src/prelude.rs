//! Convenient re-exports of commonly used data types, designed to make crate usage painless.
//!
//! The contents of this module can be used by including the following in any module:
//! ```
//! use cartouche_formats::prelude::*;
//! ```

#[doc(inline)]
pub use crate::descriptor::{Descriptor, Magic, ParseFn, ProbeKind, SizeFallback, SizeRule};
#[doc(inline)]
pub use crate::dispatch::{identify, identify_all};
#[doc(inline)]
pub use crate::registry::{self, REGISTRY};
#[doc(inline)]
pub use crate::strategy::{probe, strip_bom, FieldReader};

/// Includes [`registry::Error`], which is returned when resolving format names.
pub mod lookup {
    #[doc(inline)]
    pub use crate::registry::Error;
}
