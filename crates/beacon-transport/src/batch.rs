//! Ordered, size-bounded buffer shared by the batching transports.

use std::mem;

use beacon_core::Payload;

#[derive(Debug, Clone)]
pub struct BatchBuffer {
    hits: Vec<Payload>,
    max_batch_size: usize,
}

impl BatchBuffer {
    /// A buffer that fills after `max_batch_size` hits (at least one).
    pub fn new(max_batch_size: usize) -> Self {
        let max_batch_size = max_batch_size.max(1);
        Self {
            hits: Vec::with_capacity(max_batch_size),
            max_batch_size,
        }
    }

    /// Append a hit. Returns the drained batch once the buffer is full.
    pub fn push(&mut self, payload: Payload) -> Option<Vec<Payload>> {
        self.hits.push(payload);
        if self.hits.len() >= self.max_batch_size {
            self.take()
        } else {
            None
        }
    }

    /// Drain whatever is buffered, leaving the buffer empty.
    pub fn take(&mut self) -> Option<Vec<Payload>> {
        if self.hits.is_empty() {
            None
        } else {
            Some(mem::replace(&mut self.hits, Vec::with_capacity(self.max_batch_size)))
        }
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }
}
