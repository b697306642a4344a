//! Broadcast of store changes to the open screens
//!
//! Every screen holds its own [`EventSubscriber`]. A screen that falls
//! behind skips the missed events; it re-derives from the stores anyway, so
//! only the fact that something changed matters.

use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

use super::events::{Event, EventMessage};

/// Events buffered per subscriber before it starts lagging
const BACKLOG: usize = 256;

#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventMessage>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(BACKLOG);
        Self { sender }
    }

    /// Wrap `event` in an envelope and hand it to every live subscriber.
    /// Returns how many subscribers received it.
    pub fn publish(&self, event: Event) -> usize {
        let message = EventMessage::new(event);
        let kind = message.event.event_type();
        // Sending only fails when nobody listens
        let delivered = self.sender.send(message).unwrap_or(0);
        debug!("{} delivered to {} screen(s)", kind, delivered);
        delivered
    }

    pub fn subscribe(&self) -> EventSubscriber {
        EventSubscriber {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn listeners(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

pub struct EventSubscriber {
    receiver: broadcast::Receiver<EventMessage>,
}

impl EventSubscriber {
    /// Next event, waiting for one. `None` once the bus is gone.
    pub async fn recv(&mut self) -> Option<EventMessage> {
        loop {
            match self.receiver.recv().await {
                Ok(message) => return Some(message),
                Err(RecvError::Lagged(skipped)) => warn!("Screen skipped {} events", skipped),
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Next event already delivered, without waiting.
    pub fn try_recv(&mut self) -> Option<EventMessage> {
        loop {
            match self.receiver.try_recv() {
                Ok(message) => return Some(message),
                Err(TryRecvError::Lagged(skipped)) => warn!("Screen skipped {} events", skipped),
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }

    /// Everything delivered so far, oldest first.
    pub fn drain(&mut self) -> Vec<Event> {
        std::iter::from_fn(|| self.try_recv())
            .map(|message| message.event)
            .collect()
    }
}

pub type SharedEventBus = Arc<EventBus>;

pub fn create_event_bus() -> SharedEventBus {
    Arc::new(EventBus::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn subscriber_receives_published_event() {
        let bus = create_event_bus();
        let mut screen = bus.subscribe();

        assert_eq!(bus.publish(Event::OnuDeleted { onu_id: "3".into() }), 1);

        let message = tokio::time::timeout(Duration::from_millis(100), screen.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(message.event, Event::OnuDeleted { onu_id: "3".into() });
        assert!(!message.id.is_empty());
    }

    #[test]
    fn publish_without_screens_is_fine() {
        let bus = EventBus::new();
        assert_eq!(bus.publish(Event::SettingsChanged), 0);
        assert_eq!(bus.listeners(), 0);
    }

    #[test]
    fn drain_returns_events_in_order() {
        let bus = EventBus::new();
        let mut screen = bus.subscribe();
        assert!(screen.drain().is_empty());

        bus.publish(Event::SettingsChanged);
        bus.publish(Event::SessionEnded);

        assert_eq!(screen.drain(), vec![Event::SettingsChanged, Event::SessionEnded]);
        assert!(screen.try_recv().is_none());
    }

    #[test]
    fn lagging_screen_keeps_the_newest_events() {
        let bus = EventBus::new();
        let mut screen = bus.subscribe();
        for i in 0..BACKLOG + 10 {
            bus.publish(Event::OltUpdated { olt_id: i.to_string() });
        }

        let events = screen.drain();
        assert_eq!(events.len(), BACKLOG);
        assert_eq!(
            events.last(),
            Some(&Event::OltUpdated { olt_id: (BACKLOG + 9).to_string() })
        );
    }

    #[test]
    fn listeners_follow_live_subscribers() {
        let bus = EventBus::new();
        let first = bus.subscribe();
        let _second = bus.subscribe();
        assert_eq!(bus.listeners(), 2);

        drop(first);
        assert_eq!(bus.listeners(), 1);
    }
}
