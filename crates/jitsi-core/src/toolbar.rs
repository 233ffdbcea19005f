//! Web toolbar button names and how they map onto the mobile SDK.
//!
//! Meeting links copied from the web client carry `config.toolbarButtons`
//! as a JSON-ish list (`["microphone","chat"]`). The mobile SDK has no such
//! list for most buttons; instead each button is switched by a feature flag.

use std::collections::{BTreeMap, HashSet};

/// Web toolbar button → SDK feature flag.
///
/// Some buttons share a flag; the flag is on if any of them is listed.
pub const WEB_BUTTON_FLAGS: &[(&str, &str)] = &[
    ("microphone", "audio-mute.enabled"),
    ("camera", "video-mute.enabled"),
    ("desktop", "ios.screensharing.enabled"),
    ("chat", "chat.enabled"),
    ("raisehand", "raise-hand.enabled"),
    ("participants-pane", "participants.enabled"),
    ("tileview", "tile-view.enabled"),
    ("toggle-camera", "toggle-camera-button.enabled"),
    ("invite", "invite.enabled"),
    ("videoquality", "resolution"),
    ("fullscreen", "fullscreen.enabled"),
    ("security", "security-options.enabled"),
    ("closedcaptions", "close-captions.enabled"),
    ("recording", "ios.recording.enabled"),
    ("highlight", "reactions.enabled"),
    ("livestreaming", "live-streaming.enabled"),
    ("sharedvideo", "video-share.enabled"),
    ("shareaudio", "audio-only.enabled"),
    ("noisesuppression", "audio-device-button.enabled"),
    ("whiteboard", "etherpad.enabled"),
    ("etherpad", "etherpad.enabled"),
    ("undock-iframe", "pip.enabled"),
    ("dock-iframe", "pip.enabled"),
    ("settings", "settings.enabled"),
    ("stats", "speakerstats.enabled"),
    ("shortcuts", "shortcuts.enabled"),
    ("embedmeeting", "embedmeeting.enabled"),
    ("feedback", "feedback.enabled"),
    ("download", "download.enabled"),
    ("help", "help.enabled"),
    ("filmstrip", "filmstrip.enabled"),
    ("carmode", "car-mode.enabled"),
    ("breakout-rooms", "breakout-rooms.enabled"),
];

/// Buttons the native toolbar knows how to render.
pub const NATIVE_TOOLBAR_BUTTONS: &[&str] = &[
    "microphone",
    "camera",
    "chat",
    "hangup",
    "profile",
    "raisehand",
    "tile-view",
    "security",
    "closedcaptions",
];

/// Decode a `toolbarButtons` value into button tokens, in input order.
///
/// Never fails: anything that isn't a list just yields odd tokens, which
/// match nothing downstream.
pub fn decode_buttons(raw: &str) -> Vec<String> {
    let decoded = urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string());

    decoded
        .replace(['"', '[', ']'], "")
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Every flag in [`WEB_BUTTON_FLAGS`], switched on or off by presence.
pub fn flags_for_buttons(buttons: &[String]) -> BTreeMap<&'static str, bool> {
    let present: HashSet<&str> = buttons.iter().map(String::as_str).collect();
    let mut flags = BTreeMap::new();
    for (button, flag) in WEB_BUTTON_FLAGS {
        let on = present.contains(button);
        *flags.entry(*flag).or_insert(false) |= on;
    }
    flags
}

/// The subset of buttons the native toolbar renders, without duplicates.
pub fn native_buttons(buttons: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for button in buttons {
        let name = if button == "toggle-camera" { "camera" } else { button.as_str() };
        if NATIVE_TOOLBAR_BUTTONS.contains(&name) && !out.iter().any(|b| b == name) {
            out.push(name.to_string());
        }
    }
    out
}
