//! UniFFI bindings for jitsi-core.
//!
//! Exposes meeting-URL parsing as namespace functions and a JitsiBridge
//! object that owns the SDK event relay.

use std::collections::HashMap;
use std::sync::Arc;

use jitsi_core::{
    ConferenceConfig, EventRelay, FlagValue as CoreFlagValue, OverrideValue as CoreOverrideValue,
    RelayedEvent,
};

uniffi::include_scaffolding!("jitsi");

// ── Namespace functions ──────────────────────────────────────────────

/// Initialize tracing/logging. Call once from the host before anything else.
fn init_logging() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("jitsi_core=debug,jitsi_ffi=debug")),
            )
            .with_ansi(false)
            .init();
    });
}

fn parse_meeting_url(url: String) -> Result<ConferenceOptions, BridgeError> {
    let config = jitsi_core::UrlConfigParser::parse(&url)?;
    Ok(config.into())
}

fn create_conference_options(arguments: HashMap<String, String>) -> Result<ConferenceOptions, BridgeError> {
    let config = jitsi_core::conference_options(&arguments)?;
    Ok(config.into())
}

// ── FFI-safe type conversions ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct UserInfo {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<jitsi_core::UserInfo> for UserInfo {
    fn from(u: jitsi_core::UserInfo) -> Self {
        Self {
            display_name: u.display_name,
            email: u.email,
            avatar_url: u.avatar_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    BoolValue { value: bool },
    TextValue { value: String },
}

impl From<CoreFlagValue> for FlagValue {
    fn from(v: CoreFlagValue) -> Self {
        match v {
            CoreFlagValue::Bool(value) => Self::BoolValue { value },
            CoreFlagValue::Text(value) => Self::TextValue { value },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverrideValue {
    BoolValue { value: bool },
    TextValue { value: String },
    ListValue { values: Vec<String> },
}

impl From<CoreOverrideValue> for OverrideValue {
    fn from(v: CoreOverrideValue) -> Self {
        match v {
            CoreOverrideValue::Bool(value) => Self::BoolValue { value },
            CoreOverrideValue::Text(value) => Self::TextValue { value },
            CoreOverrideValue::List(values) => Self::ListValue { values },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConferenceOptions {
    pub server_url: String,
    pub room: String,
    pub token: Option<String>,
    pub user_info: UserInfo,
    pub audio_muted: Option<bool>,
    pub video_muted: Option<bool>,
    pub audio_only: Option<bool>,
    pub feature_flags: HashMap<String, FlagValue>,
    pub config_overrides: HashMap<String, OverrideValue>,
}

impl From<ConferenceConfig> for ConferenceOptions {
    fn from(c: ConferenceConfig) -> Self {
        Self {
            server_url: c.server_url().to_string(),
            room: c.room().to_string(),
            token: c.token().map(str::to_string),
            user_info: c.user_info().clone().into(),
            audio_muted: c.audio_muted(),
            video_muted: c.video_muted(),
            audio_only: c.audio_only(),
            feature_flags: c
                .feature_flags()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone().into()))
                .collect(),
            config_overrides: c
                .config_overrides()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone().into()))
                .collect(),
        }
    }
}

// ── Error conversion ──────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("Invalid URL: {msg}")]
    InvalidUrl { msg: String },
    #[error("Missing room in meeting URL")]
    MissingRoom,
    #[error("Missing argument: {name}")]
    MissingArgument { name: String },
    #[error("Unknown event: {name}")]
    UnknownEvent { name: String },
    #[error("Invalid payload: {msg}")]
    InvalidPayload { msg: String },
}

impl From<jitsi_core::ParseError> for BridgeError {
    fn from(e: jitsi_core::ParseError) -> Self {
        tracing::error!("ParseError: {e}");
        match e {
            jitsi_core::ParseError::InvalidUrl(msg) => Self::InvalidUrl { msg },
            jitsi_core::ParseError::MissingRoom => Self::MissingRoom,
        }
    }
}

impl From<jitsi_core::BridgeError> for BridgeError {
    fn from(e: jitsi_core::BridgeError) -> Self {
        match e {
            jitsi_core::BridgeError::MissingArgument(name) => {
                tracing::error!("BridgeError: missing argument {name}");
                Self::MissingArgument { name }
            }
            jitsi_core::BridgeError::Parse(e) => e.into(),
        }
    }
}

impl From<jitsi_core::RelayError> for BridgeError {
    fn from(e: jitsi_core::RelayError) -> Self {
        tracing::error!("RelayError: {e}");
        match e {
            jitsi_core::RelayError::UnknownEvent(name) => Self::UnknownEvent { name },
            jitsi_core::RelayError::InvalidPayload(msg) => Self::InvalidPayload { msg },
        }
    }
}

// ── Callback interface ────────────────────────────────────────────────

pub trait ConferenceEventListener: Send + Sync {
    fn on_event(&self, event: String, data_json: Option<String>);
}

// ── Bridge listener: core relay → FFI callback ────────────────────────

struct BridgeListener {
    ffi_listener: Arc<dyn ConferenceEventListener>,
}

impl jitsi_core::EventListener for BridgeListener {
    fn on_event(&self, event: RelayedEvent) {
        let data_json = event
            .data
            .map(|map| serde_json::Value::Object(map).to_string());
        self.ffi_listener
            .on_event(event.event.as_str().to_string(), data_json);
    }
}

// ── JitsiBridge: main FFI object ──────────────────────────────────────

pub struct JitsiBridge {
    relay: EventRelay,
}

impl Default for JitsiBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl JitsiBridge {
    pub fn new() -> Self {
        tracing::info!("JitsiBridge::new()");
        Self {
            relay: EventRelay::new(),
        }
    }

    /// Options for a new conference view, built from its `room` argument.
    pub fn create_options(&self, arguments: HashMap<String, String>) -> Result<ConferenceOptions, BridgeError> {
        create_conference_options(arguments)
    }

    pub fn add_listener(&self, listener: Box<dyn ConferenceEventListener>) {
        let bridge = Arc::new(BridgeListener {
            ffi_listener: Arc::from(listener),
        });
        self.relay.add_listener(bridge);
    }

    /// Forward an SDK event to the host listeners.
    ///
    /// `data_json` must be a JSON object when present.
    pub fn relay(&self, event: String, data_json: Option<String>) -> Result<bool, BridgeError> {
        let data = match data_json {
            None => serde_json::Map::new(),
            Some(json) => match serde_json::from_str::<serde_json::Value>(&json) {
                Ok(serde_json::Value::Object(map)) => map,
                Ok(other) => {
                    return Err(jitsi_core::RelayError::InvalidPayload(format!(
                        "expected a JSON object, got {other}"
                    ))
                    .into());
                }
                Err(e) => return Err(jitsi_core::RelayError::InvalidPayload(e.to_string()).into()),
            },
        };
        Ok(self.relay.relay_named(&event, data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Capture {
        events: Arc<Mutex<Vec<(String, Option<String>)>>>,
    }

    impl ConferenceEventListener for Capture {
        fn on_event(&self, event: String, data_json: Option<String>) {
            self.events.lock().unwrap().push((event, data_json));
        }
    }

    #[test]
    fn parse_meeting_url_converts_values() {
        let opts = parse_meeting_url(
            "https://meet.jit.si/room?config.toolbarButtons=[chat]&resolution=360".to_string(),
        )
        .unwrap();
        assert_eq!(opts.server_url, "https://meet.jit.si");
        assert_eq!(opts.room, "room");
        assert_eq!(opts.feature_flags["chat.enabled"], FlagValue::BoolValue { value: true });
        assert_eq!(
            opts.feature_flags["resolution"],
            FlagValue::TextValue { value: "360".to_string() }
        );
        assert_eq!(
            opts.config_overrides["toolbarButtons"],
            OverrideValue::ListValue { values: vec!["chat".to_string()] }
        );
    }

    #[test]
    fn parse_meeting_url_errors_flatten() {
        assert!(matches!(
            parse_meeting_url("https://meet.jit.si".to_string()),
            Err(BridgeError::MissingRoom)
        ));
        assert!(matches!(
            parse_meeting_url("nope".to_string()),
            Err(BridgeError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn create_conference_options_requires_room() {
        let err = create_conference_options(HashMap::new()).unwrap_err();
        assert!(matches!(err, BridgeError::MissingArgument { ref name } if name == "room"));
    }

    #[test]
    fn bridge_options_depend_only_on_url() {
        let bridge = JitsiBridge::new();
        let args = HashMap::from([("room".to_string(), "https://meet.jit.si/r".to_string())]);
        let opts = bridge.create_options(args.clone()).unwrap();

        assert_eq!(opts.user_info.display_name, None);
        assert_eq!(opts.video_muted, None);
        assert!(opts.config_overrides.is_empty());
        assert_eq!(opts, create_conference_options(args).unwrap());
    }

    #[test]
    fn bridge_relays_to_callback() {
        let bridge = JitsiBridge::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        bridge.add_listener(Box::new(Capture { events: events.clone() }));

        assert!(bridge
            .relay("conferenceJoined".to_string(), Some(r#"{"url":"https://meet.jit.si/r"}"#.to_string()))
            .unwrap());
        assert!(bridge.relay("readyToClose".to_string(), Some("{}".to_string())).unwrap());
        assert!(!bridge.relay("enterPictureInPicture".to_string(), None).unwrap());

        let captured = events.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].0, "conferenceJoined");
        assert_eq!(captured[0].1.as_deref(), Some(r#"{"url":"https://meet.jit.si/r"}"#));
        assert_eq!(captured[1], ("readyToClose".to_string(), None));
    }

    #[test]
    fn bridge_rejects_bad_relay_input() {
        let bridge = JitsiBridge::new();
        assert!(matches!(
            bridge.relay("bogus".to_string(), None),
            Err(BridgeError::UnknownEvent { .. })
        ));
        assert!(matches!(
            bridge.relay("chatToggled".to_string(), Some("[1,2]".to_string())),
            Err(BridgeError::InvalidPayload { .. })
        ));
        assert!(matches!(
            bridge.relay("chatToggled".to_string(), Some("not json".to_string())),
            Err(BridgeError::InvalidPayload { .. })
        ));
    }
}
