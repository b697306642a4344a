//! Notifications module
//!
//! Screens subscribe to the event bus and re-derive their filtered views
//! whenever a store they read from changes.
//!
//! # Usage
//! ```ignore
//! use smartolt::notifications::{create_event_bus, Event};
//!
//! let event_bus = create_event_bus();
//! let mut screen = event_bus.subscribe();
//!
//! event_bus.publish(Event::OnuDeleted { onu_id: "3".to_string() });
//! ```

pub mod event_bus;
pub mod events;

pub use event_bus::{create_event_bus, EventBus, EventSubscriber, SharedEventBus};
pub use events::*;
