//! Interrupt-to-main-loop byte channel for the supervisor link.
//!
//! The UART receive interrupt only stores raw bytes here; the main loop
//! drains them in FIFO order and runs protocol dispatch outside interrupt
//! context. Because bytes are consumed strictly in order, the original
//! "dispatch happens before the next byte is accepted" guarantee holds.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────────┐
//! │ UART RX ISR │────▶│  Byte Queue  │────▶│ Main loop →       │
//! │ (producer)  │     │  (lock-free) │     │ ProtocolEngine    │
//! └─────────────┘     └──────────────┘     └───────────────────┘
//! ```
//!
//! Overflow drops the byte; the protocol's magic-byte resynchronisation
//! recovers from the resulting truncated frame.

use core::sync::atomic::{AtomicUsize, Ordering};

/// Maximum number of pending received bytes.
/// Power of 2 for efficient ring buffer modulo.
const RX_QUEUE_CAP: usize = 64;

static RX_HEAD: AtomicUsize = AtomicUsize::new(0);
static RX_TAIL: AtomicUsize = AtomicUsize::new(0);
// SAFETY: RX_BUFFER is accessed under the SPSC discipline only.
// Producer (push_rx_byte): UART ISR / link poll context, one writer.
// Consumer (pop_rx_byte): main-loop context, one reader.
// The acquire/release pairs on RX_HEAD/RX_TAIL order the buffer accesses.
static mut RX_BUFFER: [u8; RX_QUEUE_CAP] = [0; RX_QUEUE_CAP];

/// Push a received byte into the queue.
/// Safe to call from ISR context (lock-free).
/// Returns `false` if the queue is full (byte dropped).
pub fn push_rx_byte(byte: u8) -> bool {
    let head = RX_HEAD.load(Ordering::Relaxed);
    let tail = RX_TAIL.load(Ordering::Acquire);
    let next_head = (head + 1) % RX_QUEUE_CAP;

    if next_head == tail {
        return false; // Queue full: drop the byte, framing resync recovers.
    }

    // SAFETY: single producer; slot `head` is not visible to the consumer
    // until the Release store below. Raw pointer access, no reference to
    // the static is formed.
    unsafe {
        core::ptr::write(&raw mut RX_BUFFER[head], byte);
    }

    RX_HEAD.store(next_head, Ordering::Release);
    true
}

/// Pop the next received byte.
/// Called from the main loop (single consumer).
pub fn pop_rx_byte() -> Option<u8> {
    let tail = RX_TAIL.load(Ordering::Relaxed);
    let head = RX_HEAD.load(Ordering::Acquire);

    if tail == head {
        return None; // Empty.
    }

    // SAFETY: single consumer; slot `tail` was published by the producer's
    // Release store on RX_HEAD.
    let byte = unsafe { core::ptr::read(&raw const RX_BUFFER[tail]) };
    RX_TAIL.store((tail + 1) % RX_QUEUE_CAP, Ordering::Release);
    Some(byte)
}

/// Drain all pending bytes into a handler, strictly FIFO.
pub fn drain_rx(mut handler: impl FnMut(u8)) {
    while let Some(byte) = pop_rx_byte() {
        handler(byte);
    }
}

/// Number of pending bytes.
pub fn rx_len() -> usize {
    let head = RX_HEAD.load(Ordering::Relaxed);
    let tail = RX_TAIL.load(Ordering::Relaxed);
    (head + RX_QUEUE_CAP - tail) % RX_QUEUE_CAP
}

/// Check whether the queue is empty.
pub fn rx_is_empty() -> bool {
    RX_TAIL.load(Ordering::Relaxed) == RX_HEAD.load(Ordering::Acquire)
}
