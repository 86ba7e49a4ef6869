use getset::{
  CopyGetters,
  Setters,
};

/// Index of a node inside the arena of the tree that owns it.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct NodeId(usize);

impl NodeId {
  #[inline(always)]
  pub(crate) const fn new(idx: usize) -> Self {
    Self(idx)
  }

  #[inline(always)]
  pub const fn index(self) -> usize {
    self.0
  }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Color {
  #[default]
  Red,
  Black,
}

impl Color {
  #[inline(always)]
  pub const fn is_red(self) -> bool {
    matches!(self, Color::Red)
  }

  #[inline(always)]
  pub const fn is_black(self) -> bool {
    matches!(self, Color::Black)
  }
}

/// Side of a node a child hangs from.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Dir {
  Left,
  Right,
}

impl Dir {
  #[inline(always)]
  pub(crate) const fn flip(self) -> Self {
    match self {
      Dir::Left => Dir::Right,
      Dir::Right => Dir::Left,
    }
  }
}

/// Structural links of a node. `left` and `right` are owning in the sense
/// that the arena frees a child only once it is unlinked from its parent;
/// `parent` is a plain back-reference for navigation.
#[derive(Debug, Clone, Copy, Default, CopyGetters, Setters)]
pub(crate) struct Link {
  #[getset(get_copy = "pub(crate)", set = "pub(crate)")]
  parent: Option<NodeId>,
  #[getset(get_copy = "pub(crate)", set = "pub(crate)")]
  left: Option<NodeId>,
  #[getset(get_copy = "pub(crate)", set = "pub(crate)")]
  right: Option<NodeId>,
  #[getset(get_copy = "pub(crate)", set = "pub(crate)")]
  color: Color,
}

impl Link {
  #[inline(always)]
  pub(crate) fn child(&self, dir: Dir) -> Option<NodeId> {
    match dir {
      Dir::Left => self.left,
      Dir::Right => self.right,
    }
  }

  #[inline(always)]
  pub(crate) fn set_child(&mut self, dir: Dir, child: Option<NodeId>) {
    match dir {
      Dir::Left => self.left = child,
      Dir::Right => self.right = child,
    }
  }
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
  pub(crate) data: T,
  pub(crate) link: Link,
}

impl<T> Node<T> {
  /// Fresh nodes are detached and red.
  pub(crate) fn new(data: T) -> Self {
    Self {
      data,
      link: Link::default(),
    }
  }
}
