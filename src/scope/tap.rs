//! Ring-buffer visualizer feeding a UI thread.

use rtrb::{Consumer, Producer, RingBuffer};

use super::{SignalSnapshot, Visualizer};

/// Owned copy of a [`SignalSnapshot`], sent across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeFrame {
    pub input: Vec<f64>,
    pub output: Vec<f64>,
    pub attenuation: f64,
    pub noise_level: f64,
}

impl ScopeFrame {
    pub fn snapshot(&self) -> SignalSnapshot<'_> {
        SignalSnapshot {
            input: &self.input,
            output: &self.output,
            attenuation: self.attenuation,
            noise_level: self.noise_level,
        }
    }
}

impl From<&SignalSnapshot<'_>> for ScopeFrame {
    fn from(snapshot: &SignalSnapshot<'_>) -> Self {
        Self {
            input: snapshot.input.to_vec(),
            output: snapshot.output.to_vec(),
            attenuation: snapshot.attenuation,
            noise_level: snapshot.noise_level,
        }
    }
}

/// Pushes every snapshot into a bounded SPSC queue.
///
/// Never blocks: when the reader falls behind the frame is dropped and
/// counted.
pub struct ScopeTap {
    tx: Producer<ScopeFrame>,
    dropped: u64,
}

impl ScopeTap {
    /// Create a tap and the consumer end for the reading thread.
    pub fn new(capacity: usize) -> (Self, Consumer<ScopeFrame>) {
        let (tx, rx) = RingBuffer::new(capacity.max(1));
        (Self { tx, dropped: 0 }, rx)
    }

    /// Frames discarded because the queue was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl Visualizer for ScopeTap {
    fn render(&mut self, snapshot: &SignalSnapshot<'_>) {
        if self.tx.push(ScopeFrame::from(snapshot)).is_err() {
            self.dropped += 1;
            tracing::warn!(dropped = self.dropped, "scope queue full, frame dropped");
        }
    }
}
