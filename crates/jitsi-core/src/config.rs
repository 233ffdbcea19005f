use std::collections::BTreeMap;

use serde::Serialize;

use crate::errors::ParseError;

/// Value of an SDK feature flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Text(String),
}

/// Value of a raw SDK configuration override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OverrideValue {
    Bool(bool),
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub display_name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "avatarURL")]
    pub avatar_url: Option<String>,
}

/// Everything a meeting URL carries besides server and room.
///
/// Filled in by the parser, then sealed into a [`ConferenceConfig`].
#[derive(Debug, Clone, Default)]
pub struct ConfigParts {
    pub token: Option<String>,
    pub user_info: UserInfo,
    pub audio_muted: Option<bool>,
    pub video_muted: Option<bool>,
    pub audio_only: Option<bool>,
    pub feature_flags: BTreeMap<String, FlagValue>,
    pub config_overrides: BTreeMap<String, OverrideValue>,
}

/// Conference options handed to the Jitsi Meet SDK.
///
/// Built once from a meeting URL and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceConfig {
    #[serde(rename = "serverURL")]
    server_url: String,
    room: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    user_info: UserInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    audio_muted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    video_muted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    audio_only: Option<bool>,
    feature_flags: BTreeMap<String, FlagValue>,
    config_overrides: BTreeMap<String, OverrideValue>,
}

impl ConferenceConfig {
    /// Validate and seal a configuration.
    ///
    /// The room must be non-empty and the server URL must use `https`.
    pub fn new(server_url: String, room: String, parts: ConfigParts) -> Result<Self, ParseError> {
        if room.is_empty() {
            return Err(ParseError::MissingRoom);
        }
        let server = url::Url::parse(&server_url)
            .map_err(|e| ParseError::InvalidUrl(format!("server URL '{server_url}': {e}")))?;
        if server.scheme() != "https" {
            return Err(ParseError::InvalidUrl(format!(
                "server URL must use https, got '{server_url}'"
            )));
        }

        Ok(Self {
            server_url,
            room,
            token: parts.token,
            user_info: parts.user_info,
            audio_muted: parts.audio_muted,
            video_muted: parts.video_muted,
            audio_only: parts.audio_only,
            feature_flags: parts.feature_flags,
            config_overrides: parts.config_overrides,
        })
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user_info(&self) -> &UserInfo {
        &self.user_info
    }

    pub fn audio_muted(&self) -> Option<bool> {
        self.audio_muted
    }

    pub fn video_muted(&self) -> Option<bool> {
        self.video_muted
    }

    pub fn audio_only(&self) -> Option<bool> {
        self.audio_only
    }

    pub fn feature_flags(&self) -> &BTreeMap<String, FlagValue> {
        &self.feature_flags
    }

    pub fn feature_flag(&self, key: &str) -> Option<&FlagValue> {
        self.feature_flags.get(key)
    }

    pub fn config_overrides(&self) -> &BTreeMap<String, OverrideValue> {
        &self.config_overrides
    }

    pub fn config_override(&self, key: &str) -> Option<&OverrideValue> {
        self.config_overrides.get(key)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(parts: ConfigParts) -> ConferenceConfig {
        ConferenceConfig::new("https://meet.jit.si".into(), "room".into(), parts).unwrap()
    }

    #[test]
    fn empty_room_is_rejected() {
        let err = ConferenceConfig::new("https://meet.jit.si".into(), String::new(), ConfigParts::default())
            .unwrap_err();
        assert_eq!(err, ParseError::MissingRoom);
    }

    #[test]
    fn non_https_server_is_rejected() {
        let err = ConferenceConfig::new("http://meet.jit.si".into(), "room".into(), ConfigParts::default())
            .unwrap_err();
        assert!(matches!(err, ParseError::InvalidUrl(_)));

        let err = ConferenceConfig::new("meet.jit.si".into(), "room".into(), ConfigParts::default())
            .unwrap_err();
        assert!(matches!(err, ParseError::InvalidUrl(_)));
    }

    #[test]
    fn serializes_with_sdk_key_names() {
        let mut parts = ConfigParts::default();
        parts.token = Some("jwt".into());
        parts.audio_muted = Some(true);
        parts.user_info.avatar_url = Some("https://example.com/a.png".into());
        parts.feature_flags.insert("chat.enabled".into(), FlagValue::Bool(false));
        parts.feature_flags.insert("resolution".into(), FlagValue::Text("720".into()));
        parts.config_overrides.insert(
            "toolbarButtons".into(),
            OverrideValue::List(vec!["microphone".into()]),
        );

        let json: serde_json::Value = serde_json::from_str(&config(parts).to_json().unwrap()).unwrap();

        assert_eq!(json["serverURL"], "https://meet.jit.si");
        assert_eq!(json["room"], "room");
        assert_eq!(json["token"], "jwt");
        assert_eq!(json["audioMuted"], true);
        assert!(json.get("videoMuted").is_none());
        assert_eq!(json["userInfo"]["avatarURL"], "https://example.com/a.png");
        assert_eq!(json["featureFlags"]["chat.enabled"], false);
        assert_eq!(json["featureFlags"]["resolution"], "720");
        assert_eq!(json["configOverrides"]["toolbarButtons"][0], "microphone");
    }
}
