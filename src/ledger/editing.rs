//! Index-addressed editing synthesized from the kernel's LIFO primitives.
//!
//! Every operation reaches position `i` (0 = most recent) by popping the
//! `i` records above it into an auxiliary buffer, editing at the exposed
//! top, and pushing the buffer back. The pops reverse the buffered records
//! once and the pushes reverse them again, restoring their original
//! relative order. Each call costs O(i) kernel operations and O(i)
//! auxiliary storage, and validates its arguments before touching the
//! stack.

use tracing::trace;

use crate::errors::LedgerError;
use crate::sink::TextSink;

use super::tracker::BudgetTracker;
use super::transaction::Transaction;

impl BudgetTracker {
    /// Inserts a record so it lands at `index`, shifting the records
    /// previously at `index` and below one position toward the bottom.
    pub fn insert_at(
        &mut self,
        index: usize,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<(), LedgerError> {
        if index > self.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        let mut buffer = self.detach_top(index);
        self.add(amount, description);
        self.restore(&mut buffer);
        Ok(())
    }

    /// Replaces the record at `index`, returning the one it replaced.
    pub fn modify_at(
        &mut self,
        index: usize,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<Transaction, LedgerError> {
        self.check_index(index)?;
        let mut buffer = self.detach_top(index);
        let replaced = self.pop_for_edit();
        self.add(amount, description);
        self.restore(&mut buffer);
        Ok(replaced)
    }

    /// Removes and returns the record at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Transaction, LedgerError> {
        self.check_index(index)?;
        let mut buffer = self.detach_top(index);
        let removed = self.pop_for_edit();
        self.restore(&mut buffer);
        Ok(removed)
    }

    /// Moves the record at `cur_index` so it ends up at `new_index`.
    ///
    /// List-move semantics: the record is taken out and re-inserted at
    /// `new_index` counted in the sequence that remains, so the records
    /// strictly between the two positions shift by exactly one slot and
    /// everything outside that span is untouched. Equal indices are a
    /// successful no-op.
    pub fn move_record(&mut self, cur_index: usize, new_index: usize) -> Result<(), LedgerError> {
        self.check_index(cur_index)?;
        self.check_index(new_index)?;
        if cur_index == new_index {
            return Ok(());
        }
        trace!(cur_index, new_index, "relocating record");

        let mut buffer = self.detach_top(cur_index);
        let moved = self.pop_for_edit();
        if cur_index < new_index {
            // Toward the bottom: keep buffering past the extraction point
            // until the target slot is exposed.
            let deeper = self.detach_top(new_index - cur_index);
            buffer.extend(deeper);
        } else {
            // Toward the top: put back the records that belong below the
            // target slot before re-adding the moved one.
            for _ in 0..(cur_index - new_index) {
                let record = buffer.pop().expect("buffer holds cur_index records");
                self.add_record(record);
            }
        }
        self.add_record(moved);
        self.restore(&mut buffer);
        Ok(())
    }

    /// Writes the `count` most recent records to `sink`, one
    /// `<rank>: <amount>$ <description>` line each (rank 0 = most recent),
    /// leaving the tracker unchanged.
    pub fn print_recent(
        &mut self,
        count: usize,
        sink: &mut dyn TextSink,
    ) -> Result<(), LedgerError> {
        if count > self.len() {
            return Err(LedgerError::IndexOutOfRange {
                index: count,
                len: self.len(),
            });
        }
        if !sink.is_open() {
            return Err(LedgerError::SinkClosed);
        }
        let mut buffer = Vec::with_capacity(count);
        for rank in 0..count {
            let record = self.pop_for_edit();
            sink.write_line(&format!("{rank}: {record}"));
            buffer.push(record);
        }
        self.restore(&mut buffer);
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), LedgerError> {
        if index >= self.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }

    /// Pops the `depth` most recent records into a buffer, reversing their
    /// relative order once.
    fn detach_top(&mut self, depth: usize) -> Vec<Transaction> {
        let mut buffer = Vec::with_capacity(depth);
        for _ in 0..depth {
            buffer.push(self.pop_for_edit());
        }
        buffer
    }

    /// Pushes buffered records back, reversing them a second time so the
    /// original order is restored.
    fn restore(&mut self, buffer: &mut Vec<Transaction>) {
        while let Some(record) = buffer.pop() {
            self.add_record(record);
        }
    }

    /// Kernel remove for depths already validated by the caller.
    fn pop_for_edit(&mut self) -> Transaction {
        self.remove()
            .expect("index precondition checked before buffering")
    }
}
