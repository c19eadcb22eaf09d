use serde::Deserialize;

/// What a copy does when the destination already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    /// Refuse and leave the destination untouched.
    #[default]
    Deny,
    /// Truncate and replace the destination.
    Allow,
}

/// Knobs for the content sniffers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InspectOptions {
    /// How many leading bytes are read when classifying a file.
    pub prefix_len: usize,
    /// Extensions of text-based image formats, matched case-insensitively.
    pub text_image_extensions: Vec<String>,
}

impl Default for InspectOptions {
    fn default() -> Self {
        InspectOptions {
            prefix_len: 512,
            text_image_extensions: vec!["svg".to_string()],
        }
    }
}
