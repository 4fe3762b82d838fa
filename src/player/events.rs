//! Event bus between widgets, the media element and controllers
//!
//! Widgets and the media element publish `PlayerEvent`s on a bus. Each
//! controller holds one `Subscription`, which queues matching events until
//! the controller pumps them. Dropping the subscription unsubscribes.

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

/// Widget an interaction event originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    PlayButton,
    MediaSurface,
    ProgressTrack,
    VolumeIcon,
    VolumeTrack,
    SpeedSelector,
    FullscreenButton,
}

/// Named event kinds a subscriber can listen for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Change,
    PositionUpdate,
    Ready,
    Ended,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Click,
        EventKind::Change,
        EventKind::PositionUpdate,
        EventKind::Ready,
        EventKind::Ended,
    ];
}

/// Events produced by widgets and the media element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEvent {
    /// Pointer click; `offset_x` is the horizontal offset within the target
    Click { target: Target, offset_x: f64 },

    /// Value change on a selection control
    Change { target: Target },

    /// Playback position moved
    PositionUpdate,

    /// Enough media is loaded to start playing
    Ready,

    /// Playback reached the end of the media
    Ended,
}

impl PlayerEvent {
    /// Click without a meaningful offset
    pub fn click(target: Target) -> Self {
        PlayerEvent::Click {
            target,
            offset_x: 0.0,
        }
    }

    /// Click at a horizontal offset within a track
    pub fn click_at(target: Target, offset_x: f64) -> Self {
        PlayerEvent::Click { target, offset_x }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            PlayerEvent::Click { .. } => EventKind::Click,
            PlayerEvent::Change { .. } => EventKind::Change,
            PlayerEvent::PositionUpdate => EventKind::PositionUpdate,
            PlayerEvent::Ready => EventKind::Ready,
            PlayerEvent::Ended => EventKind::Ended,
        }
    }
}

struct Subscriber {
    id: u64,
    kinds: Vec<EventKind>,
    sender: Sender<PlayerEvent>,
}

type SubscriberList = RwLock<Vec<Subscriber>>;

/// Fan-out of player events to subscribers
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Arc<SubscriberList>,
    next_id: Arc<AtomicU64>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to the given event kinds
    pub fn subscribe(&self, kinds: &[EventKind]) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (sender, receiver) = unbounded();

        self.subscribers.write().push(Subscriber {
            id,
            kinds: kinds.to_vec(),
            sender,
        });

        Subscription {
            id,
            receiver,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    /// Publish an event, returning how many subscribers received it
    pub fn emit(&self, event: PlayerEvent) -> usize {
        let kind = event.kind();
        let subs = self.subscribers.read();
        subs.iter()
            .filter(|sub| sub.kinds.contains(&kind))
            .filter(|sub| sub.sender.send(event).is_ok())
            .count()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }
}

/// Scoped subscription handle; unsubscribes on drop
pub struct Subscription {
    id: u64,
    receiver: Receiver<PlayerEvent>,
    subscribers: Weak<SubscriberList>,
}

impl Subscription {
    /// Take the next queued event, if any
    pub fn try_next(&self) -> Option<PlayerEvent> {
        self.receiver.try_recv().ok()
    }

    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.write().retain(|sub| sub.id != self.id);
        }
    }
}
