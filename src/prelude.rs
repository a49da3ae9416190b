//! The prelude

#[doc(inline)]
pub use crate::comp::{Comp, CompMaker, Compare};
#[doc(inline)]
pub use crate::name::NameKey;
#[doc(inline)]
pub use crate::sort::{NameSorter, SortConfig};
#[doc(inline)]
pub use crate::util::{err, get_writer, read_names, write_names, Error, Result};

#[doc(inline)]
pub use std::cmp::Ordering;
#[doc(inline)]
pub use std::fmt;
#[doc(inline)]
pub use std::io::Write;
