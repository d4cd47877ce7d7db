//! Application Ports
//!
//! Driven-port interfaces for external systems.

mod event_publisher_port;

pub use event_publisher_port::{
    DetailType, EVENT_SOURCE, EventPublishError, EventPublisherPort, NoOpEventPublisher,
    OrderNotification, PublishedNotification, RecordingEventPublisher,
};
