#![no_std]

//! Ordered containers on a red-black tree: the raw [`RbTree`], a unique-key
//! [`OrdSet`] and a key/value [`OrdMap`].

pub use ordtree_map::{
  MapError,
  MapResult,
  OrdMap,
  Pair,
};
pub use ordtree_rbtree::{
  Color,
  Handle,
  Policy,
  RbError,
  RbResult,
  RbTree,
  Violation,
};
pub use ordtree_set::OrdSet;

pub mod prelude {
  pub use super::{
    Handle,
    MapError,
    OrdMap,
    OrdSet,
    Policy,
    RbError,
    RbTree,
  };
}
