//! `formsmith schema`: execute a script and print the schema it leaves behind.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use formsmith::{load_script, run_script, FormSession};

use crate::exit_codes::EXIT_SUCCESS;

pub fn handle(script: &Path, config: Option<&Path>, out: &mut impl Write) -> anyhow::Result<i32> {
    let config = super::load_config(config)?;
    let commands = load_script(script)
        .with_context(|| format!("failed to read script {}", script.display()))?;

    let mut session = FormSession::with_config(config);
    run_script(&mut session, &commands)?;

    writeln!(out, "{}", serde_json::to_string_pretty(session.schema())?)?;
    Ok(EXIT_SUCCESS)
}
