use serde::Deserialize;

/// Content repository configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    /// Load the bundled sample articles and projects at startup. Default: true.
    #[serde(default = "default_seed_sample_content")]
    pub seed_sample_content: bool,
}

fn default_seed_sample_content() -> bool {
    true
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            seed_sample_content: default_seed_sample_content(),
        }
    }
}
