//! Hashed timing wheel for one-shot page effects.
//!
//! Deadlines are kept exactly; the wheel only buckets them by tick so that
//! `advance` touches the slots that elapsed since the previous call instead of
//! every pending task. Entries that belong to a later rotation stay in their
//! slot until their deadline passes.

use crate::constants::{WHEEL_SLOTS, WHEEL_TICK_MS};
use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Fired<T> {
    pub id: TimerId,
    pub deadline_ms: f64,
    pub task: T,
}

struct Entry<T> {
    id: TimerId,
    deadline_ms: f64,
    task: T,
}

pub struct TimerWheel<T> {
    slots: Vec<Vec<Entry<T>>>,
    tick_ms: f64,
    current_tick: u64,
    next_id: u64,
    // id -> slot index, for cancellation and length
    pending: FnvHashMap<TimerId, usize>,
}

impl<T> Default for TimerWheel<T> {
    fn default() -> Self {
        Self::new(WHEEL_TICK_MS, WHEEL_SLOTS)
    }
}

impl<T> TimerWheel<T> {
    pub fn new(tick_ms: f64, slot_count: usize) -> Self {
        let slot_count = slot_count.max(1);
        Self {
            slots: (0..slot_count).map(|_| Vec::new()).collect(),
            tick_ms: if tick_ms > 0.0 { tick_ms } else { WHEEL_TICK_MS },
            current_tick: 0,
            next_id: 0,
            pending: FnvHashMap::default(),
        }
    }

    #[inline]
    fn tick_of(&self, ms: f64) -> u64 {
        (ms.max(0.0) / self.tick_ms).floor() as u64
    }

    /// Run `task` once `delay_ms` has elapsed after `now_ms`.
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let deadline_ms = now_ms + delay_ms.max(0.0);
        // Never bucket behind the cursor, or the task would wait a full rotation.
        let tick = self.tick_of(deadline_ms).max(self.current_tick);
        let slot = (tick % self.slots.len() as u64) as usize;
        self.slots[slot].push(Entry {
            id,
            deadline_ms,
            task,
        });
        self.pending.insert(id, slot);
        id
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.pending.remove(&id) {
            Some(slot) => {
                self.slots[slot].retain(|e| e.id != id);
                true
            }
            None => false,
        }
    }

    /// Drop every pending task without running it.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return every task whose deadline is `<= now_ms`, ordered by
    /// deadline then scheduling order.
    pub fn advance(&mut self, now_ms: f64) -> SmallVec<[Fired<T>; 8]> {
        let mut fired: SmallVec<[Fired<T>; 8]> = SmallVec::new();
        if self.pending.is_empty() {
            self.current_tick = self.current_tick.max(self.tick_of(now_ms));
            return fired;
        }
        let now_tick = self.tick_of(now_ms).max(self.current_tick);
        let slot_count = self.slots.len() as u64;
        let span = (now_tick - self.current_tick + 1).min(slot_count);
        for t in self.current_tick..self.current_tick + span {
            let slot = (t % slot_count) as usize;
            let bucket = std::mem::take(&mut self.slots[slot]);
            for entry in bucket {
                if entry.deadline_ms <= now_ms {
                    self.pending.remove(&entry.id);
                    fired.push(Fired {
                        id: entry.id,
                        deadline_ms: entry.deadline_ms,
                        task: entry.task,
                    });
                } else {
                    self.slots[slot].push(entry);
                }
            }
        }
        self.current_tick = now_tick;
        fired.sort_by(|a, b| {
            a.deadline_ms
                .total_cmp(&b.deadline_ms)
                .then_with(|| a.id.cmp(&b.id))
        });
        fired
    }
}
