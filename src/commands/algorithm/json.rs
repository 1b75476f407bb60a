use graphlab_core::error::Result;
use graphlab_core::graph::Run;

/// Output in JSON format
pub fn output(result: &Run) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}
