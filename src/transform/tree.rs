use alloc::vec::Vec;

use crate::matrix::vector::{Vector2, Vector3};
use crate::quaternion::Quaternion;
use crate::traits::FloatScalar;

use super::{Transform, Transform2D, Transform3D, TransformError};

/// Handle to a transform stored in a [`TransformTree`].
///
/// Handles stay valid for the lifetime of the tree; transforms are never
/// removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransformId(usize);

impl TransformId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Node<X> {
    transform: X,
    parent: Option<TransformId>,
}

/// Arena of transforms linked into an acyclic parent forest.
///
/// Every mutation of a parent link goes through
/// [`set_parent`](Self::set_parent), which refuses links that would form a
/// cycle, so walking up from any node always reaches a root.
#[derive(Debug, Clone)]
pub struct TransformTree<X> {
    nodes: Vec<Node<X>>,
}

impl<X> Default for TransformTree<X> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<X> TransformTree<X> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Store a root transform and return its handle.
    pub fn insert(&mut self, transform: X) -> TransformId {
        self.nodes.push(Node {
            transform,
            parent: None,
        });
        TransformId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: TransformId) -> Option<&X> {
        self.nodes.get(id.0).map(|node| &node.transform)
    }

    pub fn get_mut(&mut self, id: TransformId) -> Option<&mut X> {
        self.nodes.get_mut(id.0).map(|node| &mut node.transform)
    }

    /// The parent of `id`, or `None` for roots and foreign handles.
    pub fn parent(&self, id: TransformId) -> Option<TransformId> {
        self.nodes.get(id.0).and_then(|node| node.parent)
    }

    /// `id` itself, then its parent, grandparent, and so on up to the root.
    pub fn ancestors(&self, id: TransformId) -> Ancestors<'_, X> {
        Ancestors {
            tree: self,
            next: self.nodes.get(id.0).map(|_| id),
            remaining: self.nodes.len(),
        }
    }

    /// Re-parent `child` under `parent`, or detach it with `None`.
    ///
    /// Fails with [`TransformError::CircularHierarchy`] when `parent` is
    /// `child` or one of its descendants. On any error the tree is left
    /// unchanged.
    pub fn set_parent(
        &mut self,
        child: TransformId,
        parent: Option<TransformId>,
    ) -> Result<(), TransformError> {
        if child.0 >= self.nodes.len() {
            return Err(TransformError::InvalidHandle);
        }
        if let Some(p) = parent {
            if p.0 >= self.nodes.len() {
                return Err(TransformError::InvalidHandle);
            }
            if self.ancestors(p).any(|a| a == child) {
                return Err(TransformError::CircularHierarchy);
            }
        }
        self.nodes[child.0].parent = parent;
        Ok(())
    }
}

impl<X: Transform> TransformTree<X> {
    /// Local matrix of `id` composed with every ancestor:
    /// `world(parent) × local`.
    pub fn world_matrix(&self, id: TransformId) -> Result<X::Matrix, TransformError> {
        let node = self.nodes.get(id.0).ok_or(TransformError::InvalidHandle)?;
        match node.parent {
            None => Ok(node.transform.matrix()),
            Some(parent) => {
                let parent_world = self.world_matrix(parent)?;
                Ok(node.transform.world_matrix(&parent_world))
            }
        }
    }
}

impl<T: FloatScalar> TransformTree<Transform2D<T>> {
    /// World-space position of the local origin.
    pub fn world_translation(&self, id: TransformId) -> Result<Vector2<T>, TransformError> {
        Ok(self.world_matrix(id)?.extract_translation())
    }

    /// World-space angle of the local +X direction.
    pub fn world_rotation(&self, id: TransformId) -> Result<T, TransformError> {
        Ok(self.world_matrix(id)?.extract_rotation())
    }

    /// World-space image of the local `(1, 1)` offset. Approximate under skew.
    pub fn world_scale(&self, id: TransformId) -> Result<Vector2<T>, TransformError> {
        Ok(self.world_matrix(id)?.extract_scale())
    }
}

impl<T: FloatScalar> TransformTree<Transform3D<T>> {
    /// World-space position of the local origin.
    pub fn world_translation(&self, id: TransformId) -> Result<Vector3<T>, TransformError> {
        Ok(self.world_matrix(id)?.extract_translation())
    }

    /// World-space orientation, from the normalized world basis.
    pub fn world_rotation(&self, id: TransformId) -> Result<Quaternion<T>, TransformError> {
        Ok(self.world_matrix(id)?.extract_rotation())
    }

    /// World-space image of the local `(1, 1, 1)` offset. Approximate under skew.
    pub fn world_scale(&self, id: TransformId) -> Result<Vector3<T>, TransformError> {
        Ok(self.world_matrix(id)?.extract_scale())
    }
}

/// Iterator returned by [`TransformTree::ancestors`].
pub struct Ancestors<'a, X> {
    tree: &'a TransformTree<X>,
    next: Option<TransformId>,
    remaining: usize,
}

impl<X> Iterator for Ancestors<'_, X> {
    type Item = TransformId;

    fn next(&mut self) -> Option<TransformId> {
        // bounded by the arena size even if a cycle slipped in
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = self.tree.parent(current);
        Some(current)
    }
}
