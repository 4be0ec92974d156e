//! `formsmith run`: execute a script and stream results as NDJSON.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use formsmith::{load_script, Command, FormSession, PayloadKey};
use tracing::{debug, info};

use crate::exit_codes::{EXIT_REJECTED, EXIT_SUCCESS};

pub fn handle(
    script: &Path,
    config: Option<&Path>,
    payload_key: Option<PayloadKey>,
    out: &mut impl Write,
) -> anyhow::Result<i32> {
    let mut config = super::load_config(config)?;
    if let Some(key) = payload_key {
        config = config.with_payload_key(key);
    }
    let commands = load_script(script)
        .with_context(|| format!("failed to read script {}", script.display()))?;
    debug!(count = commands.len(), "script loaded");

    let mut session = FormSession::with_config(config);
    let mut last_accepted = None;
    for (index, command) in commands.iter().enumerate() {
        let result = command
            .execute(&mut session)
            .with_context(|| format!("command {} ({}) failed", index + 1, command.op()))?;
        if matches!(command, Command::Submit) {
            last_accepted = Some(result["status"] == "accepted");
        }
        writeln!(out, "{}", serde_json::to_string(&result)?)?;
    }

    info!(commands = commands.len(), "script finished");
    Ok(match last_accepted {
        Some(false) => EXIT_REJECTED,
        _ => EXIT_SUCCESS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SCRIPT: &str = r#"[
        {"op": "insert-field", "field": {"id": "f1", "label": "Name", "required": true, "type": {"kind": "text"}}},
        {"op": "submit"}
    ]"#;

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_rejected_submit_sets_exit_code() {
        let tmp = TempDir::new().unwrap();
        let script = write(&tmp, "form.json", SCRIPT);
        let mut out = Vec::new();

        let code = handle(&script, None, None, &mut out).unwrap();
        assert_eq!(code, EXIT_REJECTED);

        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["inserted"], true);
        assert_eq!(lines[1]["errors"]["f1"], "Name is required");
    }

    #[test]
    fn test_label_override_keys_payload() {
        let tmp = TempDir::new().unwrap();
        let script = write(
            &tmp,
            "form.yaml",
            "- op: insert-field\n  field: {id: f1, label: Name, required: true, type: {kind: text}}\n- op: set-value\n  id: f1\n  value: Ann\n- op: submit\n",
        );
        let mut out = Vec::new();

        let code = handle(&script, None, Some(PayloadKey::Label), &mut out).unwrap();
        assert_eq!(code, EXIT_SUCCESS);
        let text = String::from_utf8(out).unwrap();
        let last: serde_json::Value = serde_json::from_str(text.lines().last().unwrap()).unwrap();
        assert_eq!(last["payload"]["Name"], "Ann");
    }

    #[test]
    fn test_missing_script_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let mut out = Vec::new();
        let result = handle(&tmp.path().join("nope.json"), None, None, &mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
