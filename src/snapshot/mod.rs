// Saved calculator state for Save / Load / ClrMem

use crate::memory::{EntryBuffer, OperandStack};

/// Copy of the calculator's visible state
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub stack: Vec<f64>,
    pub entry: String,
}

impl Snapshot {
    /// Capture the stack and entry buffer verbatim
    pub fn capture(stack: &OperandStack, entry: &EntryBuffer) -> Self {
        Snapshot {
            stack: stack.values().to_vec(),
            entry: entry.contents().to_string(),
        }
    }

    /// Overwrite the given stack and buffer with this snapshot
    pub fn restore_into(&self, stack: &mut OperandStack, entry: &mut EntryBuffer) {
        stack.replace(self.stack.clone());
        entry.replace(self.entry.clone());
    }
}

/// A single optional saved snapshot
#[derive(Debug, Default, Clone)]
pub struct MemorySlot {
    saved: Option<Snapshot>,
}

impl MemorySlot {
    pub fn new() -> Self {
        MemorySlot { saved: None }
    }

    /// Store a snapshot, replacing any previous one
    pub fn save(&mut self, snapshot: Snapshot) {
        self.saved = Some(snapshot);
    }

    /// Read the stored snapshot; the slot stays set
    pub fn load(&self) -> Option<&Snapshot> {
        self.saved.as_ref()
    }

    pub fn clear(&mut self) {
        self.saved = None;
    }

    pub fn is_set(&self) -> bool {
        self.saved.is_some()
    }
}
