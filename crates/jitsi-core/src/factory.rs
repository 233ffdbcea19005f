use std::collections::HashMap;

use crate::config::ConferenceConfig;
use crate::errors::BridgeError;
use crate::parser::UrlConfigParser;

/// Creation argument carrying the meeting URL.
pub const ROOM_ARGUMENT: &str = "room";

/// Builds conference options for a new platform view.
///
/// `arguments` are the view's creation arguments; the meeting URL sits under
/// [`ROOM_ARGUMENT`]. The result depends on that URL alone.
pub fn conference_options(arguments: &HashMap<String, String>) -> Result<ConferenceConfig, BridgeError> {
    let url = arguments
        .get(ROOM_ARGUMENT)
        .ok_or_else(|| BridgeError::MissingArgument(ROOM_ARGUMENT.to_string()))?;

    let config = UrlConfigParser::parse(url).inspect_err(|e| {
        tracing::error!("refusing to create conference view: {e}");
    })?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ParseError;

    fn args(url: &str) -> HashMap<String, String> {
        HashMap::from([(ROOM_ARGUMENT.to_string(), url.to_string())])
    }

    #[test]
    fn builds_options_from_room_argument() {
        let cfg = conference_options(&args("https://meet.jit.si/standup?jwt=t")).unwrap();
        assert_eq!(cfg.room(), "standup");
        assert_eq!(cfg.token(), Some("t"));
    }

    #[test]
    fn missing_room_argument() {
        let err = conference_options(&HashMap::new()).unwrap_err();
        assert!(matches!(err, BridgeError::MissingArgument(ref key) if key == "room"));
    }

    #[test]
    fn parse_errors_are_surfaced() {
        let err = conference_options(&args("https://meet.jit.si/")).unwrap_err();
        assert!(matches!(err, BridgeError::Parse(ParseError::MissingRoom)));
    }

    #[test]
    fn options_match_a_direct_parse() {
        let url = "https://meet.jit.si/r?config.startWithVideoMuted=true#userInfo.displayName=Bob";
        let mut arguments = args(url);
        arguments.insert("viewId".to_string(), "7".to_string());
        assert_eq!(conference_options(&arguments).unwrap(), UrlConfigParser::parse(url).unwrap());
    }

    #[test]
    fn unset_values_stay_unset() {
        let cfg = conference_options(&args("https://meet.jit.si/r")).unwrap();
        assert_eq!(cfg.user_info().display_name, None);
        assert_eq!(cfg.video_muted(), None);
        assert!(cfg.config_overrides().is_empty());
    }
}
