//! Names and handles for stops and buses.
//!
//! Stop and bus names are shared `Arc<str>` strings that compare, hash and
//! sort by content, so a `BTreeSet<BusName>` lists a stop's buses in name
//! order and maps keyed by name can be queried with a plain `&str`.
//! [`StopId`] and [`BusId`] index the catalogue's append-only arenas and
//! stay valid for its whole lifetime.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

macro_rules! impl_name {
    ($name:ident) => {
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(s: impl AsRef<str>) -> Self {
                Self(s.as_ref().into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        // Hash and Eq above delegate to the str contents, as Borrow requires
        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s.into())
            }
        }
    };
}

macro_rules! impl_handle {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(usize);

        impl $name {
            pub(crate) fn from_index(index: usize) -> Self {
                Self(index)
            }

            pub fn index(self) -> usize {
                self.0
            }
        }
    };
}

impl_name!(StopName);
impl_name!(BusName);

impl_handle!(StopId);
impl_handle!(BusId);
