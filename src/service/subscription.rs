use std::sync::mpsc::{self, Receiver, Sender};

use crate::model::ListedOrder;

/// A stream of order list snapshots.
///
/// Holds the current list as soon as it is created and receives a new
/// snapshot after every mutation. Dropping it ends delivery.
#[derive(Debug)]
pub struct Subscription {
    rx: Receiver<Vec<ListedOrder>>,
}

impl Subscription {
    /// Oldest undelivered snapshot, if any.
    pub fn try_next(&self) -> Option<Vec<ListedOrder>> {
        self.rx.try_recv().ok()
    }

    /// Drain pending snapshots and keep only the newest.
    pub fn latest(&self) -> Option<Vec<ListedOrder>> {
        self.rx.try_iter().last()
    }

    pub fn unsubscribe(self) {}
}

#[derive(Debug, Default)]
pub(crate) struct Publisher {
    subscribers: Vec<Sender<Vec<ListedOrder>>>,
}

impl Publisher {
    pub fn subscribe(&mut self, current: &[ListedOrder]) -> Subscription {
        let (tx, rx) = mpsc::channel();
        if tx.send(current.to_vec()).is_ok() {
            self.subscribers.push(tx);
        }
        Subscription { rx }
    }

    /// Deliver `snapshot` to every live subscriber, pruning dropped ones.
    pub fn publish(&mut self, snapshot: &[ListedOrder]) {
        self.subscribers
            .retain(|tx| tx.send(snapshot.to_vec()).is_ok());
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }
}
