use std::fmt;
use std::rc::Rc;

/// Errors raised by [`PersistentPath`] operations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    #[error("path is empty")]
    Empty,
}

/// A node in the shared path chain.
///
/// `next` points toward the root end of the path. Nodes are shared by
/// reference among every path that includes this suffix.
struct PathNode<T> {
    element: T,
    next: Option<Rc<PathNode<T>>>,
}

/// An immutable, structurally shared path of elements.
///
/// `PersistentPath` is a cons list: [`push`](Self::push) prepends an element
/// in O(1) by wrapping the existing chain, so many paths produced during a
/// traversal can share their tail segments without copying. The empty path is
/// the canonical shared value and allocates nothing.
///
/// Extending a path never changes any previously obtained path:
///
/// ```
/// use prefix_histogram::PersistentPath;
///
/// let short = PersistentPath::empty().push('a');
/// let long = short.push('b');
///
/// assert_eq!(short.iter().collect::<Vec<_>>(), vec![&'a']);
/// assert_eq!(long.iter().collect::<Vec<_>>(), vec![&'b', &'a']);
/// ```
pub struct PersistentPath<T> {
    head: Option<Rc<PathNode<T>>>,
    length: usize,
}

impl<T> PersistentPath<T> {
    /// Returns the canonical empty path.
    pub const fn empty() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Returns a new path with `element` prepended.
    ///
    /// The receiver is untouched; the new path shares the receiver's entire
    /// chain as its tail.
    pub fn push(&self, element: T) -> Self {
        Self {
            head: Some(Rc::new(PathNode {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns the head element.
    ///
    /// Fails with [`PathError::Empty`] on the empty path.
    pub fn peek(&self) -> Result<&T, PathError> {
        self.head
            .as_deref()
            .map(|node| &node.element)
            .ok_or(PathError::Empty)
    }

    /// Returns the path without its head element.
    ///
    /// The returned path shares the remaining chain with the receiver. Fails
    /// with [`PathError::Empty`] on the empty path.
    pub fn pop(&self) -> Result<Self, PathError> {
        let node = self.head.as_deref().ok_or(PathError::Empty)?;
        Ok(Self {
            head: node.next.clone(),
            length: self.length - 1,
        })
    }

    /// Returns the number of elements in the path.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the path holds no elements.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns an iterator from the head toward the root end.
    ///
    /// The iteration is finite and restartable; it borrows the path without
    /// consuming it.
    pub fn iter(&self) -> PathIter<'_, T> {
        PathIter {
            next: self.head.as_deref(),
            remaining: self.length,
        }
    }
}

impl<T> Clone for PersistentPath<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for PersistentPath<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for PersistentPath<T> {
    /// Unlinks the chain iteratively.
    ///
    /// The derived recursive drop would overflow the stack on very long
    /// paths. Stops at the first node still shared with another path.
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            match Rc::try_unwrap(node) {
                Ok(mut inner) => current = inner.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: PartialEq> PartialEq for PersistentPath<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PersistentPath<T> {}

impl<T: fmt::Debug> fmt::Debug for PersistentPath<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over a path, head first.
pub struct PathIter<'a, T> {
    next: Option<&'a PathNode<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for PathIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PathIter<'_, T> {}

impl<'a, T> IntoIterator for &'a PersistentPath<T> {
    type Item = &'a T;
    type IntoIter = PathIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
