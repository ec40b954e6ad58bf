//! Media engine invocation built from resolved settings.

use relay_settings::ResolvedSettings;

/// The media engine binary the relay drives.
pub const DEFAULT_PROGRAM: &str = "ffmpeg";

/// A ready-to-spawn media engine invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineCommand {
    /// Program to execute.
    pub program: String,

    /// Arguments, in order.
    pub args: Vec<String>,
}

/// Build the engine invocation for a resolved settings record.
///
/// The input URI is opened in listen mode, output codecs are applied when
/// resolved, and every additional setting is forwarded verbatim as a
/// `-<key> <value>` pair in map order, ahead of the destination URI.
pub fn build_command(settings: &ResolvedSettings) -> PipelineCommand {
    let mut args = vec![
        "-listen".to_string(),
        "1".to_string(),
        "-i".to_string(),
        settings.input_server.clone(),
    ];

    if !settings.output_video_codec.is_empty() {
        args.push("-vcodec".to_string());
        args.push(settings.output_video_codec.clone());
    }

    if !settings.output_audio_codec.is_empty() {
        args.push("-acodec".to_string());
        args.push(settings.output_audio_codec.clone());
    }

    for (key, value) in &settings.additional_settings {
        args.push(format!("-{key}"));
        args.push(value.to_string());
    }

    args.push(settings.output_server.clone());

    PipelineCommand {
        program: DEFAULT_PROGRAM.to_string(),
        args,
    }
}
