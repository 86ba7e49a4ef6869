use alloc::vec::Vec;

use crate::{
  RbError,
  RbResult,
  RbTree,
  node::{
    Dir,
    NodeId,
  },
};

/// One pending pair of the merge: the destination node currently at this
/// position (if any), the source node that should end up there, and where the
/// result hangs in the destination.
struct Pending {
  dest: Option<NodeId>,
  src: Option<NodeId>,
  under: Option<(NodeId, Dir)>,
}

impl<T> RbTree<T>
where
  T: Clone,
{
  /// Makes `self` a structural copy of `src`: same shape, same colors, equal
  /// payloads. Destination nodes at positions the source also occupies are
  /// reused in place, missing ones are created and surplus subtrees freed.
  pub fn assign(&mut self, src: &Self) {
    let mut work = Vec::new();
    work.push(Pending {
      dest: self.root,
      src: src.root,
      under: None,
    });

    let mut reused = 0usize;
    let mut created = 0usize;
    let mut freed = 0usize;

    while let Some(Pending { dest, src: from, under }) = work.pop() {
      let Some(from) = from else {
        if let Some(dest) = dest {
          freed += self.arena.free_subtree(dest);
        }
        self.hang(under, None);
        continue;
      };

      let source = src.arena.node(from);
      let id = match dest {
        Some(id) => {
          self.arena.node_mut(id).data.clone_from(&source.data);
          reused += 1;
          id
        }
        None => {
          created += 1;
          self.arena.alloc(source.data.clone())
        }
      };

      let (old_left, old_right) = match dest {
        Some(id) => (self.arena.left(id), self.arena.right(id)),
        None => (None, None),
      };
      self.arena.set_color(id, source.link.color());
      self.hang(under, Some(id));

      work.push(Pending {
        dest: old_right,
        src: source.link.right(),
        under: Some((id, Dir::Right)),
      });
      work.push(Pending {
        dest: old_left,
        src: source.link.left(),
        under: Some((id, Dir::Left)),
      });
    }

    self.len = src.len;
    log::debug!("assign: {reused} nodes reused, {created} created, {freed} freed");
  }

  /// Like [`RbTree::assign`], but reserves every slot the copy could need
  /// first, so a failed allocation leaves `self` untouched.
  pub fn try_assign(&mut self, src: &Self) -> RbResult<()> {
    let missing = self.missing_nodes(src);
    self.arena.try_reserve(missing).map_err(RbError::Alloc)?;
    self.assign(src);
    Ok(())
  }

  /// Number of source nodes whose position has no destination node, i.e.
  /// how many nodes `assign` will create.
  fn missing_nodes(&self, src: &Self) -> usize {
    let mut missing = 0;
    let mut work = Vec::new();
    if let Some(root) = src.root {
      work.push((self.root, root));
    }

    while let Some((dest, from)) = work.pop() {
      if dest.is_none() {
        missing += 1;
      }
      let source = src.arena.link(from);
      for dir in [Dir::Left, Dir::Right] {
        if let Some(child) = source.child(dir) {
          let paired = dest.and_then(|dest| self.arena.child(dest, dir));
          work.push((paired, child));
        }
      }
    }

    missing
  }

  fn hang(&mut self, under: Option<(NodeId, Dir)>, child: Option<NodeId>) {
    match under {
      Some((parent, dir)) => self.arena.attach(parent, dir, child),
      None => {
        self.root = child;
        if let Some(child) = child {
          self.arena.link_mut(child).set_parent(None);
        }
      }
    }
  }
}

impl<T> Clone for RbTree<T>
where
  T: Clone,
{
  fn clone(&self) -> Self {
    let mut tree = RbTree::new();
    tree.assign(self);
    tree
  }

  fn clone_from(&mut self, source: &Self) {
    self.assign(source);
  }
}
