//! Thread-local scratch streams for message encoding
//!
//! A message header carries the body's length, so the body has to be encoded before
//! the header can be written. The scratch stream gives that two-step encode a
//! buffer that is reused across messages on the same thread instead of
//! allocating one per message.
//!
//! ```text
//! Thread A: [scratch Stream]
//! Thread B: [scratch Stream]
//!           ↑ no contention, each thread owns its buffer
//! ```
//!
//! Re-entrant use (encoding a message from inside the closure) gets a fresh,
//! temporary stream rather than failing.

use crate::stream::Stream;
use std::cell::RefCell;

/// Initial capacity, enough for the largest single-packet body
const SCRATCH_CAPACITY: usize = crate::constants::MAX_DATA_SIZE + 1;

thread_local! {
    static SCRATCH_STREAM: RefCell<Stream> = RefCell::new(Stream::with_capacity(SCRATCH_CAPACITY));
}

/// Run `f` with this thread's scratch stream, emptied before the call
pub fn with_scratch_stream<R, F>(f: F) -> R
where
    F: FnOnce(&mut Stream) -> R,
{
    SCRATCH_STREAM.with(|cell| match cell.try_borrow_mut() {
        Ok(mut stream) => {
            stream.clear();
            f(&mut stream)
        }
        Err(_) => {
            tracing::trace!("scratch stream busy, using a temporary stream");
            f(&mut Stream::new())
        }
    })
}
