extern crate alloc;

use alloc::boxed::Box;
use alloc::fmt;
use core::mem;
use core::ptr::{self, NonNull};

/// A node in the recency list.
///
/// Contains a value and pointers to the previous and next entries.
/// This structure is not meant to be used directly by users of the `List`.
pub struct Entry<T> {
    /// The value stored in this entry. Uses MaybeUninit to allow for sigil nodes.
    val: mem::MaybeUninit<T>,
    /// Pointer to the previous entry in the list.
    prev: *mut Entry<T>,
    /// Pointer to the next entry in the list.
    next: *mut Entry<T>,
}

impl<T> Entry<T> {
    /// Creates a new entry with the given value.
    fn new(val: T) -> Self {
        Entry {
            val: mem::MaybeUninit::new(val),
            prev: ptr::null_mut(),
            next: ptr::null_mut(),
        }
    }

    /// Creates a new sigil (sentinel) entry without initializing the value.
    ///
    /// Sigil entries are used as head and tail markers in the list.
    fn new_sigil() -> Self {
        Entry {
            val: mem::MaybeUninit::uninit(),
            prev: ptr::null_mut(),
            next: ptr::null_mut(),
        }
    }

    /// Extracts a shared reference to the value in this entry.
    ///
    /// # Safety
    ///
    /// The value must be initialized: only call this on non-sigil nodes.
    pub unsafe fn get_value(&self) -> &T {
        // SAFETY: caller guarantees this is a non-sigil node
        unsafe { self.val.assume_init_ref() }
    }

    /// Extracts a mutable reference to the value in this entry.
    ///
    /// # Safety
    ///
    /// The value must be initialized: only call this on non-sigil nodes.
    pub unsafe fn get_value_mut(&mut self) -> &mut T {
        // SAFETY: caller guarantees this is a non-sigil node
        unsafe { self.val.assume_init_mut() }
    }

    /// Consumes the entry and returns the value it held.
    ///
    /// # Safety
    ///
    /// The value must be initialized: only call this on non-sigil nodes.
    unsafe fn into_value(self) -> T {
        // SAFETY: caller guarantees this is a non-sigil node
        unsafe { self.val.assume_init() }
    }
}

/// A doubly linked list maintaining recency order.
///
/// Front = most recently touched, back = least recently touched. The list
/// uses sentinel nodes (sigils) at the head and tail to keep unlinking
/// branch-free, and hands out raw node pointers so an index kept beside the
/// list can reorder or remove entries in O(1).
///
/// The list itself is unbounded; the cache that owns it enforces its
/// capacity by draining from the back before inserting.
pub struct List<T> {
    /// Current number of items in the list.
    len: usize,
    /// Pointer to the head sentinel node.
    head: *mut Entry<T>,
    /// Pointer to the tail sentinel node.
    tail: *mut Entry<T>,
}

impl<T> List<T> {
    /// Creates a new empty list.
    ///
    /// This sets up the sentinel nodes and links them together.
    pub fn new() -> List<T> {
        let head = Box::into_raw(Box::new(Entry::new_sigil()));
        let tail = Box::into_raw(Box::new(Entry::new_sigil()));

        let list = List { len: 0, head, tail };

        unsafe {
            // SAFETY: head and tail are newly allocated and valid pointers
            (*list.head).next = list.tail;
            (*list.tail).prev = list.head;
        }

        list
    }

    /// Returns the current number of items in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Detaches a node from the list without deallocating it.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `node` is a valid pointer to a non-sigil
    /// node currently linked into this list.
    unsafe fn detach(&mut self, node: *mut Entry<T>) {
        // SAFETY: the caller guarantees that node is a valid entry in the list,
        // which means its prev and next pointers are also valid entries.
        unsafe {
            (*(*node).prev).next = (*node).next;
            (*(*node).next).prev = (*node).prev;
        }
    }

    /// Attaches a node directly after the head sentinel.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `node` is a valid pointer to a node that
    /// is not currently linked into the list (newly allocated or detached).
    unsafe fn attach(&mut self, node: *mut Entry<T>) {
        // SAFETY: head is a valid sentinel and the caller guarantees node is
        // a valid entry not already in the list
        unsafe {
            (*node).next = (*self.head).next;
            (*node).prev = self.head;
            (*self.head).next = node;
            (*(*node).next).prev = node;
        }
    }

    /// Adds a value at the front of the list and returns its node pointer.
    ///
    /// The returned pointer stays valid until the node is removed from the
    /// list or the list is dropped.
    pub fn push_front(&mut self, v: T) -> *mut Entry<T> {
        // SAFETY: Box::into_raw never returns null
        let node = unsafe { NonNull::new_unchecked(Box::into_raw(Box::new(Entry::new(v)))) };
        // SAFETY: node is a newly allocated entry that is not part of the list yet
        unsafe { self.attach(node.as_ptr()) };
        self.len += 1;
        node.as_ptr()
    }

    /// Moves a node to the front of the list (directly after the head sentinel).
    ///
    /// # Safety
    ///
    /// The caller must ensure that `node` points to a valid entry in this list.
    pub unsafe fn move_to_front(&mut self, node: *mut Entry<T>) {
        if node.is_null() || node == self.head || node == self.tail {
            return;
        }

        // SAFETY: head is a valid sentinel; node is valid per the caller
        unsafe {
            // Already the first item, nothing to do
            if (*self.head).next == node {
                return;
            }
            self.detach(node);
            self.attach(node);
        }
    }

    /// Removes the last (least recently touched) item and returns its value.
    ///
    /// Returns `None` if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the sentinels are valid, and a non-empty list has at least
        // one real node between them
        let node = unsafe { (*self.tail).prev };
        if node == self.head {
            return None;
        }
        unsafe {
            // SAFETY: node is a real entry; after detaching we own it exclusively
            self.detach(node);
            self.len -= 1;
            Some(Box::from_raw(node).into_value())
        }
    }

    /// Unlinks a node from the list and returns its value.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `node` is a valid pointer to a node in
    /// this list (not null, not freed, and actually part of this list).
    pub unsafe fn remove(&mut self, node: *mut Entry<T>) -> Option<T> {
        if self.is_empty() || node.is_null() || node == self.head || node == self.tail {
            return None;
        }

        unsafe {
            // SAFETY: caller guarantees node is valid and part of this list;
            // after detaching we own it exclusively
            self.detach(node);
            self.len -= 1;
            Some(Box::from_raw(node).into_value())
        }
    }

    /// Returns a reference to the most recently touched value, if any.
    #[allow(dead_code)]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: a non-empty list has a real initialized node after head
        unsafe {
            let node = (*self.head).next;
            if node == self.tail {
                None
            } else {
                Some((*node).get_value())
            }
        }
    }

    /// Returns a reference to the least recently touched value, if any.
    #[allow(dead_code)]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: a non-empty list has a real initialized node before tail
        unsafe {
            let node = (*self.tail).prev;
            if node == self.head {
                None
            } else {
                Some((*node).get_value())
            }
        }
    }

    /// Clears the list, dropping all values.
    pub fn clear(&mut self) {
        while self.pop_back().is_some() {}
    }
}

impl<T> Drop for List<T> {
    /// Drops all remaining values, then frees the sentinel nodes.
    fn drop(&mut self) {
        self.clear();

        // SAFETY: head and tail were allocated in `new` and are only freed
        // here; null checks guard against a partially torn-down list.
        unsafe {
            if !self.head.is_null() {
                let _ = Box::from_raw(self.head);
                self.head = ptr::null_mut();
            }
            if !self.tail.is_null() {
                let _ = Box::from_raw(self.tail);
                self.tail = ptr::null_mut();
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List").field("length", &self.len).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn test_new_list_is_empty() {
        let list = List::<u32>::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert!(!list.head.is_null());
        assert!(!list.tail.is_null());
    }

    #[test]
    fn test_push_front_and_len() {
        let mut list = List::<u32>::new();
        let node1 = list.push_front(10);
        let node2 = list.push_front(20);
        assert_eq!(list.len(), 2);
        assert_ne!(node1, node2);
    }

    #[test]
    fn test_pop_back_order() {
        let mut list = List::<u32>::new();
        assert_eq!(list.pop_back(), None);

        list.push_front(10);
        list.push_front(20);
        list.push_front(30);

        // Oldest first: push order was 10, 20, 30
        assert_eq!(list.pop_back(), Some(10));
        assert_eq!(list.pop_back(), Some(20));
        assert_eq!(list.pop_back(), Some(30));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_front_and_back() {
        let mut list = List::<u32>::new();
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);

        list.push_front(10);
        list.push_front(20);
        assert_eq!(list.front(), Some(&20));
        assert_eq!(list.back(), Some(&10));
    }

    #[test]
    fn test_move_to_front() {
        let mut list = List::<u32>::new();

        // Push order 10, 20, 30: front->30->20->10->back
        let node1 = list.push_front(10);
        let _node2 = list.push_front(20);
        let node3 = list.push_front(30);

        // Move the last item (10) to front: front->10->30->20->back
        unsafe {
            list.move_to_front(node1);
        }
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&10));
        assert_eq!(list.back(), Some(&20));

        // Moving the current front is a no-op
        unsafe {
            list.move_to_front(node1);
        }
        assert_eq!(list.front(), Some(&10));

        unsafe {
            list.move_to_front(node3);
        }
        assert_eq!(list.front(), Some(&30));
        assert_eq!(list.back(), Some(&20));
    }

    #[test]
    fn test_remove_middle_node() {
        let mut list = List::<u32>::new();

        let _node1 = list.push_front(10);
        let node2 = list.push_front(20);
        let _node3 = list.push_front(30);

        let removed = unsafe { list.remove(node2) };
        assert_eq!(removed, Some(20));
        assert_eq!(list.len(), 2);
        assert_eq!(list.front(), Some(&30));
        assert_eq!(list.back(), Some(&10));
    }

    #[test]
    fn test_remove_sigils_is_none() {
        let mut list = List::<u32>::new();
        list.push_front(10);

        let head = list.head;
        let tail = list.tail;
        assert_eq!(unsafe { list.remove(head) }, None);
        assert_eq!(unsafe { list.remove(tail) }, None);
        assert_eq!(unsafe { list.remove(ptr::null_mut()) }, None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut list = List::<u32>::new();
        list.push_front(10);
        list.push_front(20);
        list.push_front(30);
        assert_eq!(list.len(), 3);

        list.clear();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());

        // Usable again afterwards
        list.push_front(40);
        assert_eq!(list.len(), 1);
        assert_eq!(list.front(), Some(&40));
    }

    #[test]
    fn test_node_value_access() {
        let mut list = List::<String>::new();
        let node = list.push_front(String::from("test"));

        unsafe {
            assert_eq!((*node).get_value(), "test");

            (*node).get_value_mut().push_str("_modified");
            assert_eq!((*node).get_value(), "test_modified");
        }
    }

    #[test]
    fn test_owned_values_are_dropped() {
        // Strings exercise the drop path; run under miri or asan to verify
        let mut list = List::<String>::new();
        list.push_front(String::from("one"));
        let node = list.push_front(String::from("two"));
        list.push_front(String::from("three"));

        assert_eq!(list.pop_back(), Some(String::from("one")));
        assert_eq!(unsafe { list.remove(node) }, Some(String::from("two")));
        drop(list);
    }
}
