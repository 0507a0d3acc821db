//! # Presence: per-drawer lifecycle and deferred unmounting
//!
//! [`Presence`] is the state machine of a single presented drawer:
//!
//! ```text
//! Entering -> Idle -> (Noticed <-> Idle) -> Exiting -> Removed
//! Exiting | Removed -> Entering   (revive)
//! ```
//!
//! A drawer whose id is presented again while it is still leaving revives:
//! it goes back to `Entering` instead of finishing its exit.
//!
//! [`PresenceList`] is what the renderer draws. A drawer that leaves the stack
//! stays in the list, flagged as exiting and at its previous position, until
//! its element calls [`PresenceList::finish_exit`] after the exit animation.

use std::collections::HashSet;
use std::rc::Rc;

use crate::config::MotionConfig;
use crate::id::DrawerId;
use crate::models::DrawerEntry;
use crate::motion::NoticePulse;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Entering,
    Idle,
    Noticed,
    Exiting,
    Removed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Presence {
    phase: Phase,
    pulses: u32,
}

impl Presence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of notice pulses started so far.
    pub fn pulses(&self) -> u32 {
        self.pulses
    }

    pub fn is_leaving(&self) -> bool {
        matches!(self.phase, Phase::Exiting | Phase::Removed)
    }

    /// The entry animation finished.
    pub fn entered(&mut self) {
        if self.phase == Phase::Entering {
            self.phase = Phase::Idle;
        }
    }

    /// A backdrop click was rejected. Returns the pulse to play, or `None`
    /// once the drawer is leaving.
    pub fn notice(&mut self, config: &MotionConfig) -> Option<NoticePulse> {
        if self.is_leaving() {
            return None;
        }
        self.phase = Phase::Noticed;
        self.pulses += 1;
        Some(NoticePulse::new(config))
    }

    /// The pulse finished.
    pub fn settle(&mut self) {
        if self.phase == Phase::Noticed {
            self.phase = Phase::Idle;
        }
    }

    /// Start leaving. Returns false if already leaving.
    pub fn exit(&mut self) -> bool {
        if self.is_leaving() {
            return false;
        }
        self.phase = Phase::Exiting;
        true
    }

    pub fn removed(&mut self) {
        self.phase = Phase::Removed;
    }

    /// The entry is live again after it started leaving. Returns false if it
    /// was not leaving.
    pub fn revive(&mut self) -> bool {
        if !self.is_leaving() {
            return false;
        }
        self.phase = Phase::Entering;
        true
    }
}

/// One element the renderer should draw.
pub struct Rendered<V> {
    pub entry: Rc<DrawerEntry<V>>,
    pub exiting: bool,
}

impl<V> Clone for Rendered<V> {
    fn clone(&self) -> Self {
        Self {
            entry: Rc::clone(&self.entry),
            exiting: self.exiting,
        }
    }
}

pub struct PresenceList<V> {
    items: Vec<Rendered<V>>,
}

impl<V> Default for PresenceList<V> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<V> PresenceList<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Rendered<V>] {
        &self.items
    }

    /// Merge the live stack into the rendered list.
    ///
    /// Live entries appear in stack order. Entries rendered before but no
    /// longer live are kept as exiting, right after whatever preceded them.
    pub fn reconcile(&mut self, live: &[Rc<DrawerEntry<V>>]) -> &[Rendered<V>] {
        let live_ids: HashSet<&DrawerId> = live.iter().map(|e| &e.id).collect();
        let mut emitted: HashSet<DrawerId> = HashSet::new();
        let mut out = Vec::with_capacity(live.len().max(self.items.len()));
        let mut cursor = 0;

        for item in &self.items {
            let id = &item.entry.id;
            if !live_ids.contains(id) {
                out.push(Rendered {
                    entry: Rc::clone(&item.entry),
                    exiting: true,
                });
                continue;
            }
            if emitted.contains(id) {
                continue;
            }
            while cursor < live.len() {
                let entry = &live[cursor];
                cursor += 1;
                if emitted.insert(entry.id.clone()) {
                    out.push(Rendered {
                        entry: Rc::clone(entry),
                        exiting: false,
                    });
                }
                if &entry.id == id {
                    break;
                }
            }
        }
        for entry in &live[cursor..] {
            if emitted.insert(entry.id.clone()) {
                out.push(Rendered {
                    entry: Rc::clone(entry),
                    exiting: false,
                });
            }
        }

        self.items = out;
        &self.items
    }

    /// Drop an exiting entry once its exit animation completed. Live entries
    /// are left alone.
    pub fn finish_exit(&mut self, id: &DrawerId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !(item.exiting && &item.entry.id == id));
        self.items.len() != before
    }
}
