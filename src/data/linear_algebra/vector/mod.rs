//! # Offset-indexed vector
//!
//! A dense vector addressed through a logical window that starts at an arbitrary
//! index. This was written by hand, because the start-index addressing and the
//! bounds ceilings need to be enforced at every access and construction site.

pub use offset::Offset as OffsetVector;

mod offset;
