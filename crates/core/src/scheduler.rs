//! Scheduler module - cancellable one-shot tasks in game time
//!
//! Delayed effects (hiding a mismatched pair, hiding hinted tiles) are queued
//! here instead of on platform timers. Each task records the round generation
//! it belongs to and the reveal id of every tile it targets, so a task that
//! fires after a reset or after its tiles changed can be recognised as stale.
//!
//! Time is an explicit millisecond cursor advanced by the caller, which keeps
//! the whole game deterministic under test.

use arrayvec::ArrayVec;
use tui_memory_types::Position;

/// What a task does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Hide a mismatched pair.
    FlipBack,
    /// Hide tiles revealed by a hint.
    HintHide,
}

/// A tile targeted by a task, with the reveal it expects to undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTarget {
    pub pos: Position,
    pub reveal_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTask {
    pub id: u64,
    pub due_ms: u64,
    pub generation: u32,
    pub kind: TaskKind,
    pub targets: ArrayVec<TaskTarget, 2>,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u64,
    /// Pending tasks; kept sorted by (due_ms, id).
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current game-time cursor
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn pending(&self) -> &[ScheduledTask] {
        &self.tasks
    }

    /// Queue a task to fire `delay_ms` from now. Returns its id.
    pub fn schedule(
        &mut self,
        delay_ms: u32,
        generation: u32,
        kind: TaskKind,
        targets: ArrayVec<TaskTarget, 2>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        let task = ScheduledTask {
            id,
            due_ms: self.now_ms + delay_ms as u64,
            generation,
            kind,
            targets,
        };
        let at = self
            .tasks
            .partition_point(|t| (t.due_ms, t.id) <= (task.due_ms, task.id));
        self.tasks.insert(at, task);
        id
    }

    /// Drop a single task. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Drop every pending task
    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    /// Move the cursor forward and take every task that is now due, in due order.
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<ScheduledTask> {
        self.now_ms += elapsed_ms as u64;
        let due = self.tasks.partition_point(|t| t.due_ms <= self.now_ms);
        self.tasks.drain(..due).collect()
    }
}
