use graphlab_core::config::HeuristicKind;
use graphlab_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse heuristic kind from string
pub fn parse_heuristic(s: &str) -> std::result::Result<HeuristicKind, String> {
    s.parse::<HeuristicKind>().map_err(|e| e.to_string())
}
