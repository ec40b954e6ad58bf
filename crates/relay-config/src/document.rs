//! The configuration document tree.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Root of the configuration document.
///
/// Two stream sections describe where media comes from and where it goes;
/// `additional_settings` is an opaque bag of engine parameters forwarded
/// verbatim to the media engine (bitrate, frame rate, pixel format, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Input side: how the relay reads the incoming stream.
    #[serde(default)]
    pub input_stream: StreamSection,

    /// Output side: how the relay writes the outgoing stream.
    #[serde(default)]
    pub output_stream: StreamSection,

    /// Engine parameters passed through without interpretation.
    #[serde(default)]
    pub additional_settings: BTreeMap<String, SettingValue>,
}

/// One side of the relay (input or output).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamSection {
    /// Transport protocol options, keyed by protocol name.
    ///
    /// At most one entry is expected to be enabled at a time. Iteration
    /// order is the map's sorted-key order.
    #[serde(default)]
    pub protocols: BTreeMap<String, ProtocolOption>,

    /// Codec options for this side.
    #[serde(default)]
    pub codecs: CodecSection,
}

/// Video and audio codec choices for one stream side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodecSection {
    /// Video codec options, keyed by a free-form name.
    #[serde(default)]
    pub video_codecs: BTreeMap<String, CodecOption>,

    /// Audio codec options, keyed by a free-form name.
    #[serde(default)]
    pub audio_codecs: BTreeMap<String, CodecOption>,
}

/// A transport protocol entry.
///
/// Every key other than `enabled` is a connection-URI field; which keys
/// are required depends on the protocol the entry is stored under.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProtocolOption {
    /// Whether this protocol is the active choice for its section.
    #[serde(default)]
    pub enabled: bool,

    /// URI fields (hostname, port, path, ...), all strings.
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

/// A codec entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodecOption {
    /// Whether this codec is the active choice for its category.
    #[serde(default)]
    pub enabled: bool,

    /// Codec name handed to the media engine (e.g. "libx264").
    #[serde(default)]
    pub value: String,
}

/// A primitive engine parameter value.
///
/// The keys of `additional_settings` belong to the external media engine;
/// this type only pins the value kinds the document may carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Boolean flag.
    Bool(bool),

    /// Integer value.
    Integer(i64),

    /// Floating-point value.
    Float(f64),

    /// Free-form string value.
    Text(String),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_option_collects_uri_fields() {
        let json = r#"{"enabled": true, "hostname": "10.0.0.5", "port": "554", "path": "live"}"#;
        let option: ProtocolOption = serde_json::from_str(json).unwrap();

        assert!(option.enabled);
        assert_eq!(option.fields.get("hostname").unwrap(), "10.0.0.5");
        assert_eq!(option.fields.get("port").unwrap(), "554");
        assert_eq!(option.fields.get("path").unwrap(), "live");
        assert!(!option.fields.contains_key("enabled"));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let doc: ConfigDocument = serde_json::from_str("{}").unwrap();

        assert!(doc.input_stream.protocols.is_empty());
        assert!(doc.output_stream.codecs.video_codecs.is_empty());
        assert!(doc.additional_settings.is_empty());
    }

    #[test]
    fn setting_values_keep_their_kind() {
        let json = r#"{
            "additional_settings": {
                "video_bitrate": 512000,
                "level": 4.1,
                "preset": "ultrafast",
                "flush_packets": false
            }
        }"#;
        let doc: ConfigDocument = serde_json::from_str(json).unwrap();

        assert_eq!(
            doc.additional_settings.get("video_bitrate"),
            Some(&SettingValue::Integer(512000))
        );
        assert_eq!(
            doc.additional_settings.get("level"),
            Some(&SettingValue::Float(4.1))
        );
        assert_eq!(
            doc.additional_settings.get("preset"),
            Some(&SettingValue::Text("ultrafast".into()))
        );
        assert_eq!(
            doc.additional_settings.get("flush_packets"),
            Some(&SettingValue::Bool(false))
        );
    }

    #[test]
    fn setting_value_displays_bare() {
        assert_eq!(SettingValue::Integer(10).to_string(), "10");
        assert_eq!(SettingValue::Text("yuvj420p".into()).to_string(), "yuvj420p");
        assert_eq!(SettingValue::Bool(true).to_string(), "true");
    }
}
