use alloc::vec::Vec;

use crate::{
  Handle,
  RbError,
  RbResult,
  RbTree,
  node::NodeId,
};

/// First red-black or search-tree property found broken by
/// [`RbTree::verify`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Violation {
  /// The root is red.
  RedRoot,
  /// A red node has a red child.
  RedRed { parent: Handle, child: Handle },
  /// Two paths below `at` see different numbers of black nodes.
  BlackHeight { at: Handle, left: usize, right: usize },
  /// A child does not point back at the node that links to it.
  BrokenLink { at: Handle },
  /// In-order neighbours are out of order.
  OutOfOrder { at: Handle },
  /// The recorded length disagrees with the number of reachable nodes.
  SizeMismatch { recorded: usize, counted: usize },
}

impl<T> RbTree<T>
where
  T: Ord,
{
  /// Checks every red-black property, the parent/child links, the ordering
  /// of elements and the recorded length.
  pub fn verify(&self) -> RbResult<()> {
    self.check().map_err(RbError::Invariant)
  }

  /// Number of black nodes on every path from the root down to a nil leaf,
  /// nil leaves not counted.
  pub fn black_height(&self) -> RbResult<usize> {
    let Some(root) = self.root else {
      return Ok(0);
    };
    self.black_heights(root).map_err(RbError::Invariant)
  }

  fn check(&self) -> Result<(), Violation> {
    let Some(root) = self.root else {
      return match self.len {
        0 => Ok(()),
        recorded => Err(Violation::SizeMismatch {
          recorded,
          counted: 0,
        }),
      };
    };

    if self.arena.parent(root).is_some() {
      return Err(Violation::BrokenLink {
        at: Handle::from_id(Some(root)),
      });
    }
    if self.arena.color(root).is_red() {
      return Err(Violation::RedRoot);
    }

    self.black_heights(root)?;

    let mut counted = 0usize;
    let mut previous: Option<NodeId> = None;
    let mut current = Some(self.arena.leftmost(root));
    while let Some(id) = current {
      if let Some(prev) = previous {
        if self.arena.data(id) < self.arena.data(prev) {
          return Err(Violation::OutOfOrder {
            at: Handle::from_id(Some(id)),
          });
        }
      }
      counted += 1;
      if counted > self.len {
        break;
      }
      previous = Some(id);
      current = self.arena.successor(id);
    }

    if counted != self.len {
      return Err(Violation::SizeMismatch {
        recorded: self.len,
        counted,
      });
    }
    Ok(())
  }

  /// Post-order walk that checks links and red-red edges on the way down and
  /// compares black heights on the way up.
  fn black_heights(&self, root: NodeId) -> Result<usize, Violation> {
    let mut heights = alloc::vec![0usize; self.arena.capacity()];
    let mut work = Vec::new();
    work.push((root, false));

    while let Some((id, expanded)) = work.pop() {
      let link = *self.arena.link(id);
      let at = Handle::from_id(Some(id));

      if !expanded {
        work.push((id, true));
        for child in [link.right(), link.left()].into_iter().flatten() {
          if self.arena.parent(child) != Some(id) {
            return Err(Violation::BrokenLink {
              at: Handle::from_id(Some(child)),
            });
          }
          if link.color().is_red() && self.arena.color(child).is_red() {
            return Err(Violation::RedRed {
              parent: at,
              child: Handle::from_id(Some(child)),
            });
          }
          work.push((child, false));
        }
        continue;
      }

      let left = link.left().map_or(0, |child| heights[child.index()]);
      let right = link.right().map_or(0, |child| heights[child.index()]);
      if left != right {
        return Err(Violation::BlackHeight { at, left, right });
      }
      heights[id.index()] = left + usize::from(link.color().is_black());
    }

    Ok(heights[root.index()])
  }
}
