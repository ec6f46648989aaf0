//! Reading post content from the user.

use std::io::{self, IsTerminal, Read};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

/// Where `read_content` found the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Flag,
    Stdin,
    Editor,
}

/// Post content from `--content`, piped stdin, or an editor.
///
/// The editor opens on a temp `.html` file seeded with `initial`. With
/// `no_input` the editor is never launched.
pub fn read_content(
    no_input: bool,
    content: Option<String>,
    editor_override: Option<&str>,
    initial: &str,
) -> anyhow::Result<(String, ContentSource)> {
    if let Some(value) = content {
        if value.trim().is_empty() {
            return Err(anyhow::anyhow!("--content cannot be empty"));
        }
        return Ok((value, ContentSource::Flag));
    }

    if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        let trimmed = buffer.trim_end();
        if !trimmed.is_empty() {
            return Ok((trimmed.to_string(), ContentSource::Stdin));
        }
        if no_input || editor_override.is_none() {
            return Err(anyhow::anyhow!("No input provided on stdin"));
        }
        return read_from_editor(editor_override, initial).map(|c| (c, ContentSource::Editor));
    }

    if no_input {
        return Err(anyhow::anyhow!(
            "--no-input requires --content or content on stdin"
        ));
    }

    read_from_editor(editor_override, initial).map(|c| (c, ContentSource::Editor))
}

fn read_from_editor(editor_override: Option<&str>, initial: &str) -> anyhow::Result<String> {
    let editor = editor_override
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok().filter(|v| !v.trim().is_empty()))
        .or_else(|| std::env::var("EDITOR").ok().filter(|v| !v.trim().is_empty()))
        .ok_or_else(|| {
            anyhow::anyhow!("$EDITOR is not set; use --content or pipe content via stdin")
        })?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| anyhow::anyhow!("System time error: {}", e))?
        .as_nanos();
    let path = std::env::temp_dir().join(format!(
        "bulletin_post_{}_{}.html",
        std::process::id(),
        nanos
    ));
    std::fs::write(&path, initial)
        .map_err(|e| anyhow::anyhow!("Failed to create temp file: {}", e))?;

    // Editors are often configured with arguments, e.g. "code --wait".
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| anyhow::anyhow!("Editor command is empty"))?;
    let status = Command::new(program)
        .args(parts)
        .arg(&path)
        .status()
        .map_err(|e| {
            let _ = std::fs::remove_file(&path);
            anyhow::anyhow!("Failed to launch editor {}: {}", program, e)
        })?;
    if !status.success() {
        let _ = std::fs::remove_file(&path);
        return Err(anyhow::anyhow!("Editor exited with failure"));
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read temp file: {}", e))?;
    let _ = std::fs::remove_file(&path);

    let trimmed = contents.trim_end();
    if trimmed.is_empty() {
        return Err(anyhow::anyhow!("Post content is empty"));
    }
    Ok(trimmed.to_string())
}
