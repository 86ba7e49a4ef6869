use core::borrow::Borrow;

use crate::{
  Handle,
  RbError,
  RbResult,
  RbTree,
  node::{
    Color,
    Dir,
    NodeId,
  },
};

impl<T> RbTree<T>
where
  T: Ord,
{
  /// Removes the element at `at` and returns the position of its in-order
  /// successor. The end position and stale handles leave the tree untouched
  /// and return the end.
  pub fn erase(&mut self, at: Handle) -> Handle {
    match self.live(at) {
      Some(id) => Handle::from_id(self.unlink(id).1),
      None => Handle::END,
    }
  }

  /// Removes the element at `at` and hands it back.
  pub fn take(&mut self, at: Handle) -> Option<T> {
    let id = self.live(at)?;
    Some(self.unlink(id).0)
  }

  /// Removes one element equal to `key`, returning how many were removed.
  pub fn erase_key<Q>(&mut self, key: &Q) -> usize
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    let at = self.find(key);
    if at.is_end() {
      return 0;
    }
    self.erase(at);
    1
  }

  pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    let at = self.find(key);
    self.take(at)
  }

  /// Removes every element in `[first, last)` and returns `last`.
  pub fn erase_range(&mut self, first: Handle, last: Handle) -> Handle {
    let mut current = first;
    while current != last && !current.is_end() {
      current = self.erase(current);
    }
    last
  }

  pub fn pop_front(&mut self) -> RbResult<T> {
    let first = self.begin();
    self.take(first).ok_or(RbError::Empty)
  }

  pub fn pop_back(&mut self) -> RbResult<T> {
    let last = self.last();
    self.take(last).ok_or(RbError::Empty)
  }

  /// Detaches `node`, restores the red-black properties and frees it.
  /// Returns the payload and the successor.
  fn unlink(&mut self, node: NodeId) -> (T, Option<NodeId>) {
    let next = self.arena.successor(node);
    let left = self.arena.left(node);
    let right = self.arena.right(node);

    // `hole` is what now sits where a node left the tree, possibly nil, and
    // `hole_parent` is its parent; `removed` is the color that left.
    let (hole, hole_parent, removed) = match (left, right) {
      (None, _) => {
        let parent = self.arena.parent(node);
        self.transplant(node, right);
        (right, parent, self.arena.color(node))
      }
      (Some(_), None) => {
        let parent = self.arena.parent(node);
        self.transplant(node, left);
        (left, parent, self.arena.color(node))
      }
      (Some(left), Some(right)) => {
        let heir = self.arena.leftmost(right);
        let removed = self.arena.color(heir);
        let hole = self.arena.right(heir);

        let hole_parent = if heir == right {
          heir
        } else {
          // The heir is a left child; its parent adopts the heir's right
          // subtree before the heir takes over `node`'s right subtree.
          let heir_parent = self.arena.parent(heir).unwrap_or(right);
          self.arena.attach_left(heir_parent, hole);
          self.arena.attach_right(heir, Some(right));
          heir_parent
        };

        self.transplant(node, Some(heir));
        self.arena.attach_left(heir, Some(left));
        let color = self.arena.color(node);
        self.arena.set_color(heir, color);
        (hole, Some(hole_parent), removed)
      }
    };

    if removed.is_black() {
      self.erase_fixup(hole, hole_parent);
    }

    self.len -= 1;
    let data = match self.arena.free(node) {
      Some(data) => data,
      None => unreachable!("live node {} vanished during erase", node.index()),
    };
    self.self_check();
    (data, next)
  }

  /// Removing a black node left the `hole` side one black short.
  fn erase_fixup(&mut self, mut hole: Option<NodeId>, mut parent: Option<NodeId>) {
    while hole != self.root && !self.arena.is_red(hole) {
      let Some(up) = parent else {
        break;
      };

      let dir = if self.arena.left(up) == hole {
        Dir::Left
      } else {
        Dir::Right
      };
      let far = dir.flip();

      let Some(mut sibling) = self.arena.child(up, far) else {
        hole = Some(up);
        parent = self.arena.parent(up);
        continue;
      };

      // Red sibling: rotate it above the parent so the sibling is black.
      if self.arena.color(sibling).is_red() {
        log::trace!("erase fixup: red sibling at node {}", sibling.index());
        self.arena.set_color(sibling, Color::Black);
        self.arena.set_color(up, Color::Red);
        self.rotate(up, dir);
        match self.arena.child(up, far) {
          Some(next) => sibling = next,
          None => {
            hole = Some(up);
            parent = self.arena.parent(up);
            continue;
          }
        }
      }

      let near_red = self.arena.is_red(self.arena.child(sibling, dir));
      let far_red = self.arena.is_red(self.arena.child(sibling, far));

      // Black sibling with black children: move the deficit up.
      if !near_red && !far_red {
        log::trace!("erase fixup: recolor sibling {}", sibling.index());
        self.arena.set_color(sibling, Color::Red);
        hole = Some(up);
        parent = self.arena.parent(up);
        continue;
      }

      // Near child red, far child black: turn it into the far case.
      if !far_red {
        if let Some(near) = self.arena.child(sibling, dir) {
          self.arena.set_color(near, Color::Black);
        }
        self.arena.set_color(sibling, Color::Red);
        self.rotate(sibling, far);
        match self.arena.child(up, far) {
          Some(next) => sibling = next,
          None => break,
        }
      }

      // Far child red: one rotation at the parent settles it.
      log::trace!("erase fixup: rotate at node {}", up.index());
      let color = self.arena.color(up);
      self.arena.set_color(sibling, color);
      self.arena.set_color(up, Color::Black);
      if let Some(far_child) = self.arena.child(sibling, far) {
        self.arena.set_color(far_child, Color::Black);
      }
      self.rotate(up, dir);
      hole = self.root;
      break;
    }

    if let Some(hole) = hole {
      self.arena.set_color(hole, Color::Black);
    }
  }
}
