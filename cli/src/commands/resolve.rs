//! Label resolution command

use anyhow::Result;
use vedanco_core::site::resolve;

/// Print where a destination label navigates
pub fn resolve_command(label: &str, json: bool) -> Result<()> {
    let target = resolve(label);
    if json {
        println!("{}", serde_json::to_string(&target)?);
    } else {
        println!("{}", target);
    }
    Ok(())
}
