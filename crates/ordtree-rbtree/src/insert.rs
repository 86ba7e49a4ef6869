use core::cmp::Ordering;

use crate::{
  Handle,
  Policy,
  RbError,
  RbResult,
  RbTree,
  node::{
    Color,
    Dir,
    NodeId,
  },
};

/// Where a new element goes, or the equal element that blocks it.
enum Spot {
  Root,
  Under(NodeId, Dir),
  Taken(NodeId),
}

impl<T> RbTree<T>
where
  T: Ord,
{
  /// Inserts `data` and rebalances.
  ///
  /// Returns the handle of the new element and `true`, or, under
  /// [`Policy::Unique`] with an equal element present, that element's handle
  /// and `false`. Growing the arena aborts on allocation failure like the
  /// standard collections; see [`RbTree::try_insert`] for the fallible form.
  pub fn insert(&mut self, data: T, policy: Policy) -> (Handle, bool) {
    let spot = self.locate(&data, policy);
    self.insert_at(spot, data)
  }

  /// Like [`RbTree::insert`], but reports a failed allocation instead of
  /// aborting. The tree is left exactly as it was when this fails.
  pub fn try_insert(&mut self, data: T, policy: Policy) -> RbResult<(Handle, bool)> {
    let spot = self.locate(&data, policy);
    if !matches!(spot, Spot::Taken(_)) {
      self.arena.try_reserve(1).map_err(RbError::Alloc)?;
    }
    Ok(self.insert_at(spot, data))
  }

  fn locate(&self, data: &T, policy: Policy) -> Spot {
    let Some(mut current) = self.root else {
      return Spot::Root;
    };

    loop {
      let dir = match data.cmp(self.arena.data(current)) {
        Ordering::Less => Dir::Left,
        Ordering::Equal if policy == Policy::Unique => return Spot::Taken(current),
        Ordering::Equal | Ordering::Greater => Dir::Right,
      };
      match self.arena.child(current, dir) {
        Some(next) => current = next,
        None => return Spot::Under(current, dir),
      }
    }
  }

  fn insert_at(&mut self, spot: Spot, data: T) -> (Handle, bool) {
    let id = match spot {
      Spot::Taken(existing) => return (Handle::from_id(Some(existing)), false),
      Spot::Root => {
        let id = self.arena.alloc(data);
        self.arena.set_color(id, Color::Black);
        self.root = Some(id);
        id
      }
      Spot::Under(parent, dir) => {
        let id = self.arena.alloc(data);
        self.arena.attach(parent, dir, Some(id));
        self.insert_fixup(id);
        id
      }
    };

    self.len += 1;
    self.self_check();
    (Handle::from_id(Some(id)), true)
  }

  fn insert_fixup(&mut self, mut node: NodeId) {
    loop {
      // A: the root only needs to be black.
      let Some(parent) = self.arena.parent(node) else {
        self.arena.set_color(node, Color::Black);
        return;
      };

      // B: a black parent absorbs the new red node.
      if self.arena.color(parent).is_black() {
        return;
      }

      // A red parent is never the root, so the grandparent exists.
      let Some(granny) = self.arena.parent(parent) else {
        unreachable!("red root at node {}", parent.index());
      };
      let aunt = self.arena.sibling(parent);

      // C: push the red up two levels and retry from there.
      if let Some(aunt) = aunt.filter(|&aunt| self.arena.color(aunt).is_red()) {
        log::trace!("insert fixup: recolor at node {}", granny.index());
        self.arena.set_color(parent, Color::Black);
        self.arena.set_color(aunt, Color::Black);
        self.arena.set_color(granny, Color::Red);
        node = granny;
        continue;
      }

      // D: black or missing aunt, rotate the red pair over the grandparent.
      let parent_left = self.arena.is_left_child(parent);
      let node_left = self.arena.is_left_child(node);
      let pivot = match (parent_left, node_left) {
        (true, true) => {
          self.rotate_right(granny);
          parent
        }
        (false, false) => {
          self.rotate_left(granny);
          parent
        }
        (true, false) => {
          self.rotate_left(parent);
          self.rotate_right(granny);
          node
        }
        (false, true) => {
          self.rotate_right(parent);
          self.rotate_left(granny);
          node
        }
      };
      log::trace!("insert fixup: node {} is the new local root", pivot.index());

      self.arena.set_color(pivot, Color::Black);
      self.arena.set_color(granny, Color::Red);
      return;
    }
  }
}
