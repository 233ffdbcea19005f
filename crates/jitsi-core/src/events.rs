use std::sync::{Arc, RwLock};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::RelayError;

/// Events the conferencing SDK reports back to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConferenceEvent {
    ConferenceJoined,
    ConferenceWillJoin,
    ConferenceTerminated,
    ParticipantJoined,
    ParticipantLeft,
    AudioMutedChanged,
    VideoMutedChanged,
    ScreenShareToggled,
    ChatMessageReceived,
    ChatToggled,
    EndpointTextMessageReceived,
    ParticipantsInfoRetrieved,
    CustomOverflowMenuButtonPressed,
    ReadyToClose,
    EnterPictureInPicture,
}

impl ConferenceEvent {
    pub const ALL: &'static [ConferenceEvent] = &[
        ConferenceEvent::ConferenceJoined,
        ConferenceEvent::ConferenceWillJoin,
        ConferenceEvent::ConferenceTerminated,
        ConferenceEvent::ParticipantJoined,
        ConferenceEvent::ParticipantLeft,
        ConferenceEvent::AudioMutedChanged,
        ConferenceEvent::VideoMutedChanged,
        ConferenceEvent::ScreenShareToggled,
        ConferenceEvent::ChatMessageReceived,
        ConferenceEvent::ChatToggled,
        ConferenceEvent::EndpointTextMessageReceived,
        ConferenceEvent::ParticipantsInfoRetrieved,
        ConferenceEvent::CustomOverflowMenuButtonPressed,
        ConferenceEvent::ReadyToClose,
        ConferenceEvent::EnterPictureInPicture,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConferenceJoined => "conferenceJoined",
            Self::ConferenceWillJoin => "conferenceWillJoin",
            Self::ConferenceTerminated => "conferenceTerminated",
            Self::ParticipantJoined => "participantJoined",
            Self::ParticipantLeft => "participantLeft",
            Self::AudioMutedChanged => "audioMutedChanged",
            Self::VideoMutedChanged => "videoMutedChanged",
            Self::ScreenShareToggled => "screenShareToggled",
            Self::ChatMessageReceived => "chatMessageReceived",
            Self::ChatToggled => "chatToggled",
            Self::EndpointTextMessageReceived => "endpointTextMessageReceived",
            Self::ParticipantsInfoRetrieved => "participantsInfoRetrieved",
            Self::CustomOverflowMenuButtonPressed => "customOverflowMenuButtonPressed",
            Self::ReadyToClose => "readyToClose",
            Self::EnterPictureInPicture => "enterPictureInPicture",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, RelayError> {
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.as_str() == name)
            .ok_or_else(|| RelayError::UnknownEvent(name.to_string()))
    }

    /// Picture-in-picture entry is handled by the view itself and never
    /// reaches the host.
    pub fn is_forwarded(self) -> bool {
        self != Self::EnterPictureInPicture
    }

    /// `readyToClose` goes out bare; every other forwarded event carries its payload.
    pub fn carries_data(self) -> bool {
        self != Self::ReadyToClose
    }
}

/// What the host receives: `{"event": "...", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelayedEvent {
    pub event: ConferenceEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

impl RelayedEvent {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Trait for receiving relayed events on the host side.
/// Implementations must be Send + Sync (called from SDK callback threads).
pub trait EventListener: Send + Sync {
    fn on_event(&self, event: RelayedEvent);
}

/// Forwards SDK events to every registered host listener.
#[derive(Clone, Default)]
pub struct EventRelay {
    listeners: Arc<RwLock<Vec<Arc<dyn EventListener>>>>,
}

impl EventRelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&self, listener: Arc<dyn EventListener>) {
        self.listeners
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(listener);
    }

    /// Relay one SDK event. Returns `false` if the event stays local.
    pub fn relay(&self, event: ConferenceEvent, data: Map<String, Value>) -> bool {
        if !event.is_forwarded() {
            tracing::debug!("relay: {} handled locally", event.as_str());
            return false;
        }

        let relayed = RelayedEvent {
            event,
            data: event.carries_data().then_some(data),
        };
        let listeners = self
            .listeners
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        tracing::info!("relay: {} to {} listener(s)", event.as_str(), listeners.len());
        for listener in listeners.iter() {
            listener.on_event(relayed.clone());
        }
        true
    }

    /// Relay an event given by its SDK name.
    pub fn relay_named(&self, name: &str, data: Map<String, Value>) -> Result<bool, RelayError> {
        let event = ConferenceEvent::from_name(name)?;
        Ok(self.relay(event, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingListener {
        count: Arc<AtomicUsize>,
    }

    impl EventListener for CountingListener {
        fn on_event(&self, _event: RelayedEvent) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct EventCapture {
        events: Arc<Mutex<Vec<RelayedEvent>>>,
    }

    impl EventListener for EventCapture {
        fn on_event(&self, event: RelayedEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn payload() -> Map<String, Value> {
        match json!({"url": "https://meet.jit.si/room", "participants": [{"id": "abc"}]}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn relay_dispatches_to_multiple_listeners() {
        let relay = EventRelay::new();
        let count1 = Arc::new(AtomicUsize::new(0));
        let count2 = Arc::new(AtomicUsize::new(0));
        relay.add_listener(Arc::new(CountingListener { count: count1.clone() }));
        relay.add_listener(Arc::new(CountingListener { count: count2.clone() }));

        assert!(relay.relay(ConferenceEvent::ConferenceJoined, payload()));

        assert_eq!(count1.load(Ordering::SeqCst), 1);
        assert_eq!(count2.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn relay_forwards_payload_unchanged() {
        let relay = EventRelay::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        relay.add_listener(Arc::new(EventCapture { events: events.clone() }));

        relay.relay(ConferenceEvent::ParticipantsInfoRetrieved, payload());

        let captured = events.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].event, ConferenceEvent::ParticipantsInfoRetrieved);
        assert_eq!(captured[0].data, Some(payload()));
    }

    #[test]
    fn ready_to_close_has_no_payload() {
        let relay = EventRelay::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        relay.add_listener(Arc::new(EventCapture { events: events.clone() }));

        relay.relay(ConferenceEvent::ReadyToClose, payload());

        let captured = events.lock().unwrap();
        assert_eq!(captured[0].data, None);
        assert_eq!(captured[0].to_json().unwrap(), r#"{"event":"readyToClose"}"#);
    }

    #[test]
    fn picture_in_picture_is_not_forwarded() {
        let relay = EventRelay::new();
        let count = Arc::new(AtomicUsize::new(0));
        relay.add_listener(Arc::new(CountingListener { count: count.clone() }));

        assert!(!relay.relay(ConferenceEvent::EnterPictureInPicture, Map::new()));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn relay_named_rejects_unknown_events() {
        let relay = EventRelay::new();
        assert_eq!(
            relay.relay_named("somethingElse", Map::new()),
            Err(RelayError::UnknownEvent("somethingElse".into()))
        );
        assert_eq!(relay.relay_named("chatToggled", Map::new()), Ok(true));
    }

    #[test]
    fn names_round_trip_and_match_serde() {
        for event in ConferenceEvent::ALL {
            assert_eq!(ConferenceEvent::from_name(event.as_str()), Ok(*event));
            assert_eq!(serde_json::to_value(event).unwrap(), json!(event.as_str()));
        }
    }

    #[test]
    fn relayed_event_serializes_as_event_and_data() {
        let relayed = RelayedEvent {
            event: ConferenceEvent::AudioMutedChanged,
            data: Some(match json!({"muted": true}) {
                Value::Object(map) => map,
                _ => unreachable!(),
            }),
        };
        let value: Value = serde_json::from_str(&relayed.to_json().unwrap()).unwrap();
        assert_eq!(value, json!({"event": "audioMutedChanged", "data": {"muted": true}}));
    }
}
