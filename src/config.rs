/// Where the activities API lives. Empty means same origin as the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardConfig {
    pub api_base: String,
}

impl BoardConfig {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `ACTIVITY_BOARD_API_BASE` at build time (Trunk passes the env through).
    pub fn from_build_env() -> Self {
        Self::new(option_env!("ACTIVITY_BOARD_API_BASE").unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slashes() {
        assert_eq!(BoardConfig::new("https://school.example/").api_base, "https://school.example");
        assert_eq!(BoardConfig::new(" http://127.0.0.1:8000// ").api_base, "http://127.0.0.1:8000");
    }

    #[test]
    fn empty_base_is_same_origin() {
        assert_eq!(BoardConfig::new("").api_base, "");
        assert_eq!(BoardConfig::default(), BoardConfig::new("/"));
    }
}
