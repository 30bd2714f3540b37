//! Fixed-capacity circular buffer.
//!
//! This crate provides [`CircularBuffer<T>`], a FIFO queue over a backing
//! slice whose size is fixed when the buffer is created. It never grows and
//! never allocates after construction.
//!
//! # Reading and Writing
//!
//! [`CircularBuffer::write`] refuses new elements once the buffer is full,
//! while [`CircularBuffer::overwrite`] makes room by evicting the oldest one.
//! [`CircularBuffer::read`] removes elements in the order they were written.
//!
//! ```
//! use kata_buffer::{BufferError, CircularBuffer};
//!
//! let mut buf = CircularBuffer::<i32>::new(2)?;
//! buf.write(1)?;
//! buf.write(2)?;
//! assert_eq!(buf.write(3), Err(BufferError::BufferFull));
//!
//! buf.overwrite(3);  // Evicts 1
//! assert_eq!(buf.to_vec(), vec![2, 3]);
//! # Ok::<(), BufferError>(())
//! ```
//!
//! # Errors
//!
//! All failures are reported through [`BufferError`]:
//!
//! - `InvalidCapacity`: the buffer was created with capacity 0
//! - `EmptyBuffer`: `read` found nothing to return
//! - `BufferFull`: `write` found no free slot
//!
//! `overwrite` and `clear` never fail.
//!
//! # Thread Safety
//!
//! The buffer does no internal locking. It is `Send`/`Sync` whenever `T`
//! is, so callers that share it put it behind a `Mutex`.

mod circular_buffer;
mod error;

pub use circular_buffer::{CircularBuffer, Iter};
pub use error::BufferError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CircularBuffer<i32>>();
        assert_send_sync::<CircularBuffer<String>>();
    }

    #[test]
    fn test_buffer_shared_behind_mutex() {
        use std::sync::{Arc, Mutex};
        use std::thread;

        let buf = Arc::new(Mutex::new(CircularBuffer::new(64).unwrap()));
        let producers: Vec<_> = (0..4)
            .map(|p| {
                let buf = Arc::clone(&buf);
                thread::spawn(move || {
                    for i in 0..16 {
                        buf.lock().unwrap().write(p * 100 + i).unwrap();
                    }
                })
            })
            .collect();

        for producer in producers {
            producer.join().unwrap();
        }

        let buf = buf.lock().unwrap();
        assert!(buf.is_full());
        assert_eq!(buf.len(), 64);
    }
}
