//! Fixed-capacity circular FIFO queue.
//!
//! Backs every queued-resource pattern of the firmware without touching an
//! allocator. Capacity is a const generic, storage lives inline, and `new` is
//! const so queues can sit in statics.
//!
//! Used by the goal pipeline and by executor implementations.

#[derive(Debug)]
pub struct StaticQueue<T, const CAPACITY: usize> {
    slots: [Option<T>; CAPACITY],
    head: usize,
    len: usize,
}

impl<T, const CAPACITY: usize> StaticQueue<T, CAPACITY> {
    // Promoted const so the array repeat below accepts a non-Copy T.
    const EMPTY_SLOT: Option<T> = None;

    pub const fn new() -> Self {
        Self {
            slots: [Self::EMPTY_SLOT; CAPACITY],
            head: 0,
            len: 0,
        }
    }

    /// Appends at the tail. A full queue rejects the element and hands it
    /// back to the caller.
    pub fn push(&mut self, elem: T) -> Result<(), T> {
        if self.is_full() {
            return Err(elem);
        }
        let tail = (self.head + self.len) % CAPACITY;
        self.slots[tail] = Some(elem);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the oldest element.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let elem = self.slots[self.head].take();
        self.head = (self.head + 1) % CAPACITY;
        self.len -= 1;
        elem
    }

    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_mut()
    }

    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[(self.head + self.len - 1) % CAPACITY].as_ref()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        self.slots[(self.head + self.len - 1) % CAPACITY].as_mut()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == CAPACITY
    }
}

impl<T, const CAPACITY: usize> Default for StaticQueue<T, CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}
