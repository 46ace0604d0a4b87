use pulse_core::tool::{ServerStatusTool, Tool};
use serde_json::Value;
use tracing::{error, info};

use crate::terminal::print;

/// Prints the descriptor an orchestrator would register, then one call result.
pub async fn tool(q_level: u8) -> anyhow::Result<()> {
    let tool = ServerStatusTool::default();

    print::header("tool definition", q_level);
    println!("{}", serde_json::to_string_pretty(&tool.definition())?);

    print::header("tool output", q_level);
    let output: Value = tool.call().await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    if output.as_object().is_some_and(|map| map.values().all(Value::is_string)) {
        info!("Tool output is a flat status object");
    } else {
        error!("Tool output is not a flat status object");
        anyhow::bail!("unexpected tool output shape");
    }
    Ok(())
}
