//! Singly-linked entry list with a borrowed cursor
//!
//! Every node is owned by its predecessor, and the head by the list. The
//! cursor is never stored on the list: [`LinkedSequence::cursor_mut`] hands
//! out a fresh [`CursorMut`] positioned at the head, which lives only as long
//! as the traversal that created it.

use lexstore::{Entry, Error, Result};

struct Node {
    entry: Entry,
    next: Link,
}

type Link = Option<Box<Node>>;

/// Singly-linked list of entries, newest at the head
#[derive(Default)]
pub struct LinkedSequence {
    head: Link,
}

impl LinkedSequence {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry in front of the current head
    pub fn add_to_head(&mut self, entry: Entry) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { entry, next }));
    }

    /// Remove and return the head entry
    pub fn pop_head(&mut self) -> Option<Entry> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            node.entry
        })
    }

    /// Cursor positioned at the head (absent if the list is empty)
    pub fn cursor_mut(&mut self) -> CursorMut<'_> {
        CursorMut {
            current: self.head.as_deref_mut(),
        }
    }

    /// Iterate entries from head to tail
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Check if the list has no nodes
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Drop every node
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl Drop for LinkedSequence {
    fn drop(&mut self) {
        // Unlink iteratively so long chains don't recurse through Box drops
        self.clear();
    }
}

/// Mutable cursor over a [`LinkedSequence`]
pub struct CursorMut<'a> {
    current: Option<&'a mut Node>,
}

impl<'a> CursorMut<'a> {
    /// Entry under the cursor
    pub fn current(&self) -> Option<&Entry> {
        self.current.as_deref().map(|node| &node.entry)
    }

    /// Move to the next node; no-op once the cursor has run off the end
    pub fn advance(&mut self) {
        self.current = self
            .current
            .take()
            .and_then(|node| node.next.as_deref_mut());
    }

    /// Unlink the node after the cursor and return its entry
    ///
    /// The removed node's successor is spliced back in behind the cursor.
    pub fn remove_after(&mut self) -> Result<Entry> {
        let node = self
            .current
            .as_mut()
            .ok_or(Error::InvalidOperation("cursor is not on a node"))?;
        let mut removed = node
            .next
            .take()
            .ok_or(Error::InvalidOperation("no node follows the cursor"))?;

        node.next = removed.next.take();
        Ok(removed.entry)
    }
}

/// Borrowing iterator over a [`LinkedSequence`]
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.entry
        })
    }
}
