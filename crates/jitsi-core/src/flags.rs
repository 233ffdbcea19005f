//! Known Jitsi Meet SDK feature flags.
//!
//! Each flag has an identifier name (the camelCase form hosts use in
//! meeting links, e.g. `chatEnabled`) and the canonical wire string the
//! SDK reads (e.g. `chat.enabled`).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureFlag {
    AddPeopleEnabled,
    AndroidScreensharingEnabled,
    AudioDeviceButtonEnabled,
    AudioFocusDisabled,
    AudioMuteButtonEnabled,
    AudioOnlyButtonEnabled,
    BreakoutRoomsAddButtonEnabled,
    BreakoutRoomsButtonEnabled,
    CalendarEnabled,
    CallIntegrationEnabled,
    CarModeEnabled,
    CloseCaptionsEnabled,
    ConferenceTimerEnabled,
    ChatEnabled,
    FilmstripEnabled,
    FullscreenEnabled,
    HelpButtonEnabled,
    InviteEnabled,
    IosRecordingEnabled,
    IosScreensharingEnabled,
    KickOutEnabled,
    LiveStreamingEnabled,
    LobbyModeEnabled,
    MeetingNameEnabled,
    MeetingPasswordEnabled,
    NotificationsEnabled,
    OverflowMenuEnabled,
    ParticipantsEnabled,
    PipEnabled,
    PipWhileScreenSharingEnabled,
    PrejoinPageEnabled,
    PrejoinPageHideDisplayName,
    RaiseHandEnabled,
    ReactionsEnabled,
    RecordingEnabled,
    ReplaceParticipant,
    Resolution,
    SecurityOptionsEnabled,
    ServerUrlChangeEnabled,
    SettingsEnabled,
    SpeakerstatsEnabled,
    TileViewEnabled,
    ToggleCameraButtonEnabled,
    ToolboxAlwaysVisible,
    ToolboxEnabled,
    UnsafeRoomWarningEnabled,
    VideoMuteButtonEnabled,
    VideoShareButtonEnabled,
    WelcomePageEnabled,
}

impl FeatureFlag {
    pub const ALL: &'static [FeatureFlag] = &[
        FeatureFlag::AddPeopleEnabled,
        FeatureFlag::AndroidScreensharingEnabled,
        FeatureFlag::AudioDeviceButtonEnabled,
        FeatureFlag::AudioFocusDisabled,
        FeatureFlag::AudioMuteButtonEnabled,
        FeatureFlag::AudioOnlyButtonEnabled,
        FeatureFlag::BreakoutRoomsAddButtonEnabled,
        FeatureFlag::BreakoutRoomsButtonEnabled,
        FeatureFlag::CalendarEnabled,
        FeatureFlag::CallIntegrationEnabled,
        FeatureFlag::CarModeEnabled,
        FeatureFlag::CloseCaptionsEnabled,
        FeatureFlag::ConferenceTimerEnabled,
        FeatureFlag::ChatEnabled,
        FeatureFlag::FilmstripEnabled,
        FeatureFlag::FullscreenEnabled,
        FeatureFlag::HelpButtonEnabled,
        FeatureFlag::InviteEnabled,
        FeatureFlag::IosRecordingEnabled,
        FeatureFlag::IosScreensharingEnabled,
        FeatureFlag::KickOutEnabled,
        FeatureFlag::LiveStreamingEnabled,
        FeatureFlag::LobbyModeEnabled,
        FeatureFlag::MeetingNameEnabled,
        FeatureFlag::MeetingPasswordEnabled,
        FeatureFlag::NotificationsEnabled,
        FeatureFlag::OverflowMenuEnabled,
        FeatureFlag::ParticipantsEnabled,
        FeatureFlag::PipEnabled,
        FeatureFlag::PipWhileScreenSharingEnabled,
        FeatureFlag::PrejoinPageEnabled,
        FeatureFlag::PrejoinPageHideDisplayName,
        FeatureFlag::RaiseHandEnabled,
        FeatureFlag::ReactionsEnabled,
        FeatureFlag::RecordingEnabled,
        FeatureFlag::ReplaceParticipant,
        FeatureFlag::Resolution,
        FeatureFlag::SecurityOptionsEnabled,
        FeatureFlag::ServerUrlChangeEnabled,
        FeatureFlag::SettingsEnabled,
        FeatureFlag::SpeakerstatsEnabled,
        FeatureFlag::TileViewEnabled,
        FeatureFlag::ToggleCameraButtonEnabled,
        FeatureFlag::ToolboxAlwaysVisible,
        FeatureFlag::ToolboxEnabled,
        FeatureFlag::UnsafeRoomWarningEnabled,
        FeatureFlag::VideoMuteButtonEnabled,
        FeatureFlag::VideoShareButtonEnabled,
        FeatureFlag::WelcomePageEnabled,
    ];

    /// Identifier name accepted as a bare meeting-link key.
    pub fn identifier(self) -> &'static str {
        match self {
            Self::AddPeopleEnabled => "addPeopleEnabled",
            Self::AndroidScreensharingEnabled => "androidScreensharingEnabled",
            Self::AudioDeviceButtonEnabled => "audioDeviceButtonEnabled",
            Self::AudioFocusDisabled => "audioFocusDisabled",
            Self::AudioMuteButtonEnabled => "audioMuteButtonEnabled",
            Self::AudioOnlyButtonEnabled => "audioOnlyButtonEnabled",
            Self::BreakoutRoomsAddButtonEnabled => "breakoutRoomsAddButtonEnabled",
            Self::BreakoutRoomsButtonEnabled => "breakoutRoomsButtonEnabled",
            Self::CalendarEnabled => "calendarEnabled",
            Self::CallIntegrationEnabled => "callIntegrationEnabled",
            Self::CarModeEnabled => "carModeEnabled",
            Self::CloseCaptionsEnabled => "closeCaptionsEnabled",
            Self::ConferenceTimerEnabled => "conferenceTimerEnabled",
            Self::ChatEnabled => "chatEnabled",
            Self::FilmstripEnabled => "filmstripEnabled",
            Self::FullscreenEnabled => "fullscreenEnabled",
            Self::HelpButtonEnabled => "helpButtonEnabled",
            Self::InviteEnabled => "inviteEnabled",
            Self::IosRecordingEnabled => "iosRecordingEnabled",
            Self::IosScreensharingEnabled => "iosScreensharingEnabled",
            Self::KickOutEnabled => "kickOutEnabled",
            Self::LiveStreamingEnabled => "liveStreamingEnabled",
            Self::LobbyModeEnabled => "lobbyModeEnabled",
            Self::MeetingNameEnabled => "meetingNameEnabled",
            Self::MeetingPasswordEnabled => "meetingPasswordEnabled",
            Self::NotificationsEnabled => "notificationsEnabled",
            Self::OverflowMenuEnabled => "overflowMenuEnabled",
            Self::ParticipantsEnabled => "participantsEnabled",
            Self::PipEnabled => "pipEnabled",
            Self::PipWhileScreenSharingEnabled => "pipWhileScreenSharingEnabled",
            Self::PrejoinPageEnabled => "prejoinPageEnabled",
            Self::PrejoinPageHideDisplayName => "prejoinPageHideDisplayName",
            Self::RaiseHandEnabled => "raiseHandEnabled",
            Self::ReactionsEnabled => "reactionsEnabled",
            Self::RecordingEnabled => "recordingEnabled",
            Self::ReplaceParticipant => "replaceParticipant",
            Self::Resolution => "resolution",
            Self::SecurityOptionsEnabled => "securityOptionsEnabled",
            Self::ServerUrlChangeEnabled => "serverUrlChangeEnabled",
            Self::SettingsEnabled => "settingsEnabled",
            Self::SpeakerstatsEnabled => "speakerstatsEnabled",
            Self::TileViewEnabled => "tileViewEnabled",
            Self::ToggleCameraButtonEnabled => "toggleCameraButtonEnabled",
            Self::ToolboxAlwaysVisible => "toolboxAlwaysVisible",
            Self::ToolboxEnabled => "toolboxEnabled",
            Self::UnsafeRoomWarningEnabled => "unsafeRoomWarningEnabled",
            Self::VideoMuteButtonEnabled => "videoMuteButtonEnabled",
            Self::VideoShareButtonEnabled => "videoShareButtonEnabled",
            Self::WelcomePageEnabled => "welcomePageEnabled",
        }
    }

    /// Canonical key the SDK reads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AddPeopleEnabled => "add-people.enabled",
            Self::AndroidScreensharingEnabled => "android.screensharing.enabled",
            Self::AudioDeviceButtonEnabled => "audio-device-button.enabled",
            Self::AudioFocusDisabled => "audio-focus.disabled",
            Self::AudioMuteButtonEnabled => "audio-mute.enabled",
            Self::AudioOnlyButtonEnabled => "audio-only.enabled",
            Self::BreakoutRoomsAddButtonEnabled => "breakout-rooms.add.enabled",
            Self::BreakoutRoomsButtonEnabled => "breakout-rooms.enabled",
            Self::CalendarEnabled => "calendar.enabled",
            Self::CallIntegrationEnabled => "call-integration.enabled",
            Self::CarModeEnabled => "car-mode.enabled",
            Self::CloseCaptionsEnabled => "close-captions.enabled",
            Self::ConferenceTimerEnabled => "conference-timer.enabled",
            Self::ChatEnabled => "chat.enabled",
            Self::FilmstripEnabled => "filmstrip.enabled",
            Self::FullscreenEnabled => "fullscreen.enabled",
            Self::HelpButtonEnabled => "help.enabled",
            Self::InviteEnabled => "invite.enabled",
            Self::IosRecordingEnabled => "ios.recording.enabled",
            Self::IosScreensharingEnabled => "ios.screensharing.enabled",
            Self::KickOutEnabled => "kick-out.enabled",
            Self::LiveStreamingEnabled => "live-streaming.enabled",
            Self::LobbyModeEnabled => "lobby-mode.enabled",
            Self::MeetingNameEnabled => "meeting-name.enabled",
            Self::MeetingPasswordEnabled => "meeting-password.enabled",
            Self::NotificationsEnabled => "notifications.enabled",
            Self::OverflowMenuEnabled => "overflow-menu.enabled",
            Self::ParticipantsEnabled => "participants.enabled",
            Self::PipEnabled => "pip.enabled",
            Self::PipWhileScreenSharingEnabled => "pip-while-screen-sharing.enabled",
            Self::PrejoinPageEnabled => "prejoinpage.enabled",
            Self::PrejoinPageHideDisplayName => "prejoinpage.hideDisplayName",
            Self::RaiseHandEnabled => "raise-hand.enabled",
            Self::ReactionsEnabled => "reactions.enabled",
            Self::RecordingEnabled => "recording.enabled",
            Self::ReplaceParticipant => "replace.participant",
            Self::Resolution => "resolution",
            Self::SecurityOptionsEnabled => "security-options.enabled",
            Self::ServerUrlChangeEnabled => "server-url-change.enabled",
            Self::SettingsEnabled => "settings.enabled",
            Self::SpeakerstatsEnabled => "speakerstats.enabled",
            Self::TileViewEnabled => "tile-view.enabled",
            Self::ToggleCameraButtonEnabled => "toggle-camera-button.enabled",
            Self::ToolboxAlwaysVisible => "toolbox.alwaysVisible",
            Self::ToolboxEnabled => "toolbox.enabled",
            Self::UnsafeRoomWarningEnabled => "unsafe-room-warning.enabled",
            Self::VideoMuteButtonEnabled => "video-mute.enabled",
            Self::VideoShareButtonEnabled => "video-share.enabled",
            Self::WelcomePageEnabled => "welcomepage.enabled",
        }
    }

    /// Look up a meeting-link key. Matches either the identifier name or
    /// the wire string, exactly (case-sensitive).
    pub fn lookup(key: &str) -> Option<FeatureFlag> {
        Self::ALL
            .iter()
            .copied()
            .find(|flag| flag.identifier() == key || flag.as_str() == key)
    }
}

impl std::fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
