//! Fixed-capacity FIFO circular buffer.

use std::fmt;
use std::iter::FusedIterator;
use std::num::NonZeroUsize;

use crate::error::BufferError;

/// A fixed-capacity circular buffer.
///
/// `CircularBuffer<T>` stores up to `capacity` elements in a backing slice
/// allocated once at construction. Elements are read back in the order they
/// were written.
///
/// # Semantics
///
/// - **Read**: Removes the oldest element, fails with [`BufferError::EmptyBuffer`] when empty
/// - **Write**: Appends an element, fails with [`BufferError::BufferFull`] when full
/// - **Overwrite**: Appends an element, evicting the oldest one when full
/// - **Clear**: Drops every element and returns to the initial state
///
/// The buffer does no locking. Wrap it in a `Mutex` to share it between threads.
///
/// # Example
///
/// ```
/// use kata_buffer::{BufferError, CircularBuffer};
///
/// let mut buf = CircularBuffer::new(3).unwrap();
/// buf.write(1).unwrap();
/// buf.write(2).unwrap();
/// buf.write(3).unwrap();
/// assert_eq!(buf.write(4), Err(BufferError::BufferFull));
///
/// buf.overwrite(4);
/// assert_eq!(buf.read(), Ok(2));
/// assert_eq!(buf.read(), Ok(3));
/// assert_eq!(buf.read(), Ok(4));
/// assert_eq!(buf.read(), Err(BufferError::EmptyBuffer));
/// ```
pub struct CircularBuffer<T> {
    slots: Box<[Option<T>]>,
    head: usize, // oldest unread element
    tail: usize, // next write position
    // head == tail is both "empty" and "full"; this tells them apart.
    full: bool,
}

impl<T> CircularBuffer<T> {
    /// Creates an empty buffer that holds at most `capacity` elements.
    ///
    /// Returns [`BufferError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(BufferError::InvalidCapacity)?;
        Ok(Self::with_capacity(capacity))
    }

    /// Creates an empty buffer from a capacity that is known to be non-zero.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        let slots = std::iter::repeat_with(|| None)
            .take(capacity.get())
            .collect::<Vec<_>>()
            .into_boxed_slice();

        CircularBuffer {
            slots,
            head: 0,
            tail: 0,
            full: false,
        }
    }

    /// Returns the maximum number of elements the buffer can hold.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of elements currently in the buffer.
    pub fn len(&self) -> usize {
        if self.full {
            self.slots.len()
        } else if self.tail >= self.head {
            self.tail - self.head
        } else {
            self.slots.len() - self.head + self.tail
        }
    }

    /// Returns true if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        !self.full && self.head == self.tail
    }

    /// Returns true if the buffer holds `capacity` elements.
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Removes and returns the oldest element.
    pub fn read(&mut self) -> Result<T, BufferError> {
        if self.is_empty() {
            return Err(BufferError::EmptyBuffer);
        }

        let value = self.slots[self.head]
            .take()
            .ok_or(BufferError::EmptyBuffer)?;
        self.head = self.advance(self.head);
        self.full = false;

        Ok(value)
    }

    /// Appends an element.
    ///
    /// Returns [`BufferError::BufferFull`] if the buffer is full. The buffer
    /// is left untouched and `value` is dropped.
    pub fn write(&mut self, value: T) -> Result<(), BufferError> {
        if self.full {
            return Err(BufferError::BufferFull);
        }

        self.slots[self.tail] = Some(value);
        self.tail = self.advance(self.tail);
        if self.tail == self.head {
            self.full = true;
        }

        Ok(())
    }

    /// Appends an element, evicting the oldest one if the buffer is full.
    pub fn overwrite(&mut self, value: T) {
        if !self.full {
            self.slots[self.tail] = Some(value);
            self.tail = self.advance(self.tail);
            self.full = self.tail == self.head;
            return;
        }

        // Full: the write position is the oldest element's slot.
        self.slots[self.head] = Some(value);
        self.head = self.advance(self.head);
        self.tail = self.advance(self.tail);
    }

    /// Drops every element and resets the buffer to its initial state.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.full = false;
    }

    /// Returns a reference to the element `read` would return next.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// Returns an iterator over the elements from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buffer: self,
            offset: 0,
            remaining: self.len(),
        }
    }

    #[inline]
    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.slots.len()
    }
}

impl<T: Clone> CircularBuffer<T> {
    /// Returns a copy of all elements from oldest to newest.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a CircularBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`CircularBuffer`], oldest element first.
pub struct Iter<'a, T> {
    buffer: &'a CircularBuffer<T>,
    offset: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let idx = (self.buffer.head + self.offset) % self.buffer.slots.len();
        self.offset += 1;
        self.remaining -= 1;
        self.buffer.slots[idx].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
