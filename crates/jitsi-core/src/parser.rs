//! Meeting URL → [`ConferenceConfig`].
//!
//! A meeting link carries its options as `key=value` pairs, either in the
//! query string or in the fragment (`https://meet.jit.si/room#config.x=true`).
//! Keys are routed by namespace: `token`/`jwt`, `userInfo.*`, `config.*`,
//! `interfaceConfigOverwrite.*`, and everything else as a feature flag.
//!
//! Parsing only fails on the URL itself; parameters are never rejected.

use std::borrow::Cow;

use url::Url;

use crate::config::{ConferenceConfig, ConfigParts, FlagValue, OverrideValue};
use crate::errors::ParseError;
use crate::flags::FeatureFlag;
use crate::toolbar;

/// `config.<suffix>` keys that switch a feature flag. `true` in the last
/// column means the flag is the negation of the value.
const CONFIG_FLAGS: &[(&str, FeatureFlag, bool)] = &[
    ("prejoinPageEnabled", FeatureFlag::PrejoinPageEnabled, false),
    ("disableInviteFunctions", FeatureFlag::InviteEnabled, true),
    ("chatEnabled", FeatureFlag::ChatEnabled, false),
    ("lobbyModeEnabled", FeatureFlag::LobbyModeEnabled, false),
    ("raiseHandEnabled", FeatureFlag::RaiseHandEnabled, false),
    ("tileViewEnabled", FeatureFlag::TileViewEnabled, false),
    ("videoShareButtonEnabled", FeatureFlag::VideoShareButtonEnabled, false),
];

/// `config.<suffix>` keys passed through as boolean overrides under the same name.
const CONFIG_BOOL_OVERRIDES: &[&str] = &[
    "disableTileView",
    "enableNoAudioDetection",
    "enableNoisyMicDetection",
    "enableClosePage",
    "disableRemoteMute",
    "disableSelfView",
];

/// `interfaceConfigOverwrite.<suffix>` → boolean override name.
const INTERFACE_OVERRIDES: &[(&str, &str)] = &[
    ("TOOLBAR_ALWAYS_VISIBLE", "toolbarAlwaysVisible"),
    ("DISABLE_JOIN_LEAVE_NOTIFICATIONS", "disableJoinLeaveNotifications"),
    ("SHOW_JITSI_WATERMARK", "showJitsiWatermark"),
    ("SHOW_WATERMARK_FOR_GUESTS", "showWatermarkForGuests"),
];

/// Turns meeting URLs into conference options.
pub struct UrlConfigParser;

impl UrlConfigParser {
    pub fn parse(input: &str) -> Result<ConferenceConfig, ParseError> {
        let input = input.trim();
        let url = Url::parse(input).map_err(|e| ParseError::InvalidUrl(format!("'{input}': {e}")))?;

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ParseError::InvalidUrl(format!("'{input}' has no host")))?;
        let server_url = match url.port().filter(|port| *port != 443) {
            Some(port) => format!("https://{host}:{port}"),
            None => format!("https://{host}"),
        };

        let room = url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(|segment| decode(segment).into_owned())
            .ok_or(ParseError::MissingRoom)?;

        let mut parts = ConfigParts::default();
        for (key, value) in parameters(&url) {
            apply_parameter(&mut parts, &key, &value);
        }

        let config = ConferenceConfig::new(server_url, room, parts)?;
        tracing::info!(
            "parsed meeting URL: server={} room={} flags={} overrides={}",
            config.server_url(),
            config.room(),
            config.feature_flags().len(),
            config.config_overrides().len()
        );
        Ok(config)
    }
}

/// Query pairs first, then fragment pairs, so the fragment wins on duplicates.
/// A fragment without any `=` is a plain anchor and carries no parameters.
fn parameters(url: &Url) -> Vec<(String, String)> {
    let mut params = Vec::new();
    if let Some(query) = url.query() {
        params.extend(split_pairs(query));
    }
    if let Some(fragment) = url.fragment().filter(|f| f.contains('=')) {
        params.extend(split_pairs(fragment));
    }
    params
}

fn split_pairs(list: &str) -> impl Iterator<Item = (String, String)> + '_ {
    list.split('&').filter_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode(key);
        if key.is_empty() {
            return None;
        }
        Some((key.into_owned(), decode(value).into_owned()))
    })
}

/// Percent-decode, keeping the raw text if the result isn't UTF-8.
fn decode(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

fn is_true(value: &str) -> bool {
    value == "true"
}

fn apply_parameter(parts: &mut ConfigParts, key: &str, value: &str) {
    if key == "token" || key == "jwt" {
        if !value.is_empty() {
            parts.token = Some(value.to_string());
        }
    } else if let Some(suffix) = key.strip_prefix("userInfo.") {
        apply_user_info(parts, suffix, value);
    } else if let Some(suffix) = key.strip_prefix("config.") {
        apply_config(parts, suffix, value);
    } else if let Some(suffix) = key.strip_prefix("interfaceConfigOverwrite.") {
        apply_interface_config(parts, suffix, value);
    } else {
        apply_feature_flag(parts, key, value);
    }
}

fn apply_user_info(parts: &mut ConfigParts, suffix: &str, value: &str) {
    let info = &mut parts.user_info;
    match suffix {
        "displayName" => info.display_name = Some(value.to_string()),
        "email" => info.email = Some(value.to_string()),
        "avatar" | "avatarURL" => {
            info.avatar_url = match Url::parse(value) {
                Ok(_) => Some(value.to_string()),
                Err(e) => {
                    tracing::debug!("dropping avatar URL '{value}': {e}");
                    None
                }
            };
        }
        _ => tracing::debug!("ignoring unknown parameter userInfo.{suffix}"),
    }
}

fn apply_config(parts: &mut ConfigParts, suffix: &str, value: &str) {
    match suffix {
        "startWithAudioMuted" => {
            parts.audio_muted = Some(is_true(value));
            set_override(parts, suffix, OverrideValue::Bool(is_true(value)));
        }
        "startWithVideoMuted" => {
            parts.video_muted = Some(is_true(value));
            set_override(parts, suffix, OverrideValue::Bool(is_true(value)));
        }
        "audioOnly" => parts.audio_only = Some(is_true(value)),
        "toolbarButtons" => apply_toolbar_buttons(parts, value),
        "defaultLanguage" => set_override(parts, suffix, OverrideValue::Text(value.to_string())),
        _ => {
            if let Some((_, flag, inverted)) = CONFIG_FLAGS.iter().find(|(name, ..)| *name == suffix) {
                let on = is_true(value) != *inverted;
                set_flag(parts, flag.as_str(), FlagValue::Bool(on));
            } else if CONFIG_BOOL_OVERRIDES.contains(&suffix) {
                set_override(parts, suffix, OverrideValue::Bool(is_true(value)));
            } else {
                tracing::debug!("ignoring unknown parameter config.{suffix}");
            }
        }
    }
}

fn apply_interface_config(parts: &mut ConfigParts, suffix: &str, value: &str) {
    match INTERFACE_OVERRIDES.iter().find(|(name, _)| *name == suffix) {
        Some((_, key)) => set_override(parts, key, OverrideValue::Bool(is_true(value))),
        None => tracing::debug!("ignoring unknown parameter interfaceConfigOverwrite.{suffix}"),
    }
}

/// Every known toolbar flag is written, on or off, then the buttons the
/// native toolbar can render go into the `toolbarButtons` override.
fn apply_toolbar_buttons(parts: &mut ConfigParts, value: &str) {
    let buttons = toolbar::decode_buttons(value);
    for (flag, on) in toolbar::flags_for_buttons(&buttons) {
        set_flag(parts, flag, FlagValue::Bool(on));
    }
    let native = toolbar::native_buttons(&buttons);
    tracing::debug!("toolbar buttons {buttons:?} -> native {native:?}");
    set_override(parts, "toolbarButtons", OverrideValue::List(native));
}

fn apply_feature_flag(parts: &mut ConfigParts, key: &str, value: &str) {
    match FeatureFlag::lookup(key) {
        Some(flag) => {
            let value = match value {
                "true" => FlagValue::Bool(true),
                "false" => FlagValue::Bool(false),
                other => FlagValue::Text(other.to_string()),
            };
            tracing::debug!("feature flag {key} -> {flag}");
            set_flag(parts, flag.as_str(), value);
        }
        None => set_flag(parts, key, FlagValue::Bool(is_true(value))),
    }
}

fn set_flag(parts: &mut ConfigParts, key: &str, value: FlagValue) {
    parts.feature_flags.insert(key.to_string(), value);
}

fn set_override(parts: &mut ConfigParts, key: &str, value: OverrideValue) {
    parts.config_overrides.insert(key.to_string(), value);
}
