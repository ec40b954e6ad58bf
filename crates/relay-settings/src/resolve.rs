//! Resolution of a configuration document into engine-ready settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use relay_config::{CodecOption, ConfigDocument, SettingValue};

use crate::select::select_enabled;
use crate::transport::Transport;
use crate::SettingsResult;

/// The fully computed parameter set handed to the media engine.
///
/// Built fresh on every [`resolve`] call, owned by the caller, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSettings {
    /// Connection URI the engine reads the incoming stream from.
    pub input_server: String,

    /// Connection URI the engine writes the outgoing stream to.
    pub output_server: String,

    /// Codec name of the incoming video stream.
    pub input_video_codec: String,

    /// Codec name of the incoming audio stream.
    pub input_audio_codec: String,

    /// Codec name to encode outgoing video with.
    pub output_video_codec: String,

    /// Codec name to encode outgoing audio with.
    pub output_audio_codec: String,

    /// Engine parameters copied through from the document, unmodified.
    pub additional_settings: BTreeMap<String, SettingValue>,
}

/// Resolve a configuration document into the settings record.
///
/// Each of the six categories is evaluated independently: the enabled
/// protocol on each side becomes a connection URI, the enabled codec in
/// each group contributes its `value`. A category with nothing enabled
/// resolves to an empty string; the only hard failure is a known
/// protocol entry missing a required URI field.
///
/// The document is not mutated; callers invoking this concurrently must
/// hand in a snapshot that does not change mid-call.
pub fn resolve(config: &ConfigDocument) -> SettingsResult<ResolvedSettings> {
    let input_selection = select_enabled(&config.input_stream.protocols);
    let output_selection = select_enabled(&config.output_stream.protocols);

    let input_video_codec = codec_value(&config.input_stream.codecs.video_codecs);
    let input_audio_codec = codec_value(&config.input_stream.codecs.audio_codecs);
    let output_video_codec = codec_value(&config.output_stream.codecs.video_codecs);
    let output_audio_codec = codec_value(&config.output_stream.codecs.audio_codecs);

    let input_transport = match input_selection.chosen() {
        Some((name, option)) => Transport::from_option(name, option)?,
        None => None,
    };
    let output_transport = match output_selection.chosen() {
        Some((name, option)) => Transport::from_option(name, option)?,
        None => None,
    };

    Ok(ResolvedSettings {
        input_server: input_transport.map(|t| t.uri()).unwrap_or_default(),
        output_server: output_transport.map(|t| t.uri()).unwrap_or_default(),
        input_video_codec,
        input_audio_codec,
        output_video_codec,
        output_audio_codec,
        additional_settings: config.additional_settings.clone(),
    })
}

fn codec_value(codecs: &BTreeMap<String, CodecOption>) -> String {
    select_enabled(codecs)
        .chosen()
        .map(|(_, codec)| codec.value.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SettingsError;

    fn document(json: &str) -> ConfigDocument {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn resolves_full_document() {
        let config = document(
            r#"{
            "input_stream": {
                "protocols": {
                    "rtsp": {"enabled": true, "hostname": "10.0.0.5", "port": "554", "path": "live"},
                    "srt": {"enabled": false, "hostname": "0.0.0.0", "port": "9000"}
                },
                "codecs": {
                    "video_codecs": {"h264": {"enabled": true, "value": "h264"}},
                    "audio_codecs": {"aac": {"enabled": true, "value": "aac"}}
                }
            },
            "output_stream": {
                "protocols": {
                    "srt": {"enabled": true, "hostname": "1.2.3.4", "port": "9000"}
                },
                "codecs": {
                    "video_codecs": {"x264": {"enabled": true, "value": "libx264"}},
                    "audio_codecs": {"aac": {"enabled": true, "value": "aac"}}
                }
            },
            "additional_settings": {"video_bitrate": 512000, "preset": "ultrafast"}
        }"#,
        );

        let settings = resolve(&config).unwrap();

        assert_eq!(settings.input_server, "rtsp://10.0.0.5:554/live");
        assert_eq!(settings.output_server, "srt://1.2.3.4:9000");
        assert_eq!(settings.input_video_codec, "h264");
        assert_eq!(settings.input_audio_codec, "aac");
        assert_eq!(settings.output_video_codec, "libx264");
        assert_eq!(settings.output_audio_codec, "aac");

        // Pass-through equals the document's map by value.
        assert_eq!(settings.additional_settings, config.additional_settings);
    }

    #[test]
    fn nothing_enabled_resolves_to_empty_strings() {
        let config = document(
            r#"{
            "input_stream": {
                "protocols": {
                    "rtsp": {"enabled": false, "hostname": "10.0.0.5", "port": "554", "path": "live"}
                }
            },
            "output_stream": {}
        }"#,
        );

        let settings = resolve(&config).unwrap();

        assert_eq!(settings.input_server, "");
        assert_eq!(settings.output_server, "");
        assert_eq!(settings.output_video_codec, "");
        assert!(settings.additional_settings.is_empty());
    }

    #[test]
    fn unknown_protocol_resolves_to_empty_uri() {
        let config = document(
            r#"{
            "input_stream": {
                "protocols": {
                    "webrtc": {"enabled": true, "hostname": "10.0.0.5"}
                }
            },
            "output_stream": {}
        }"#,
        );

        let settings = resolve(&config).unwrap();
        assert_eq!(settings.input_server, "");
    }

    #[test]
    fn missing_protocol_field_aborts_resolution() {
        let config = document(
            r#"{
            "input_stream": {
                "protocols": {
                    "rtsp": {"enabled": true, "hostname": "10.0.0.5", "path": "live"}
                }
            },
            "output_stream": {}
        }"#,
        );

        assert_eq!(
            resolve(&config),
            Err(SettingsError::MissingField {
                protocol: "rtsp",
                field: "port",
            })
        );
    }

    #[test]
    fn multiple_enabled_protocols_use_the_last_in_order() {
        let config = document(
            r#"{
            "input_stream": {
                "protocols": {
                    "rtsp": {"enabled": true, "hostname": "10.0.0.5", "port": "554", "path": "live"},
                    "srt": {"enabled": true, "hostname": "1.2.3.4", "port": "9000"}
                }
            },
            "output_stream": {}
        }"#,
        );

        // "srt" sorts after "rtsp", so it wins.
        let settings = resolve(&config).unwrap();
        assert_eq!(settings.input_server, "srt://1.2.3.4:9000");
    }

    #[test]
    fn resolution_does_not_mutate_the_document() {
        let config = document(
            r#"{
            "input_stream": {
                "protocols": {
                    "srt": {"enabled": true, "hostname": "1.2.3.4", "port": "9000"}
                }
            },
            "output_stream": {},
            "additional_settings": {"threads": 2}
        }"#,
        );

        let before = config.clone();
        let _ = resolve(&config).unwrap();

        assert_eq!(
            serde_json::to_value(&before).unwrap(),
            serde_json::to_value(&config).unwrap()
        );
    }
}
