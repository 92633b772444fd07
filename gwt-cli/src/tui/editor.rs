//! External editor resolution and launch

use crate::error::EditorError;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use tracing::info;

/// The editor program, taken whole from a `$VISUAL`-style value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    pub program: String,
}

impl EditorCommand {
    /// The trimmed value is the program, spaces included. Blank values are `None`.
    fn parse(value: &str) -> Option<Self> {
        let program = value.trim();
        if program.is_empty() {
            return None;
        }
        Some(Self {
            program: program.to_string(),
        })
    }

    /// Run the editor in the foreground with `path` as its only argument,
    /// inheriting the terminal
    pub fn run(&self, path: &Path) -> Result<ExitStatus, EditorError> {
        info!(program = %self.program, path = %path.display(), "launching editor");
        Command::new(&self.program)
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| EditorError::Launch {
                program: self.program.clone(),
                source,
            })
    }
}

/// Pick the editor: `VISUAL`, then `EDITOR`, then the configured fallback.
/// Blank values are skipped.
pub fn resolve_editor(
    visual: Option<String>,
    editor: Option<String>,
    fallback: Option<&str>,
) -> Result<EditorCommand, EditorError> {
    visual
        .as_deref()
        .and_then(EditorCommand::parse)
        .or_else(|| editor.as_deref().and_then(EditorCommand::parse))
        .or_else(|| fallback.and_then(EditorCommand::parse))
        .ok_or(EditorError::NotConfigured)
}

/// [`resolve_editor`] against the process environment
pub fn resolve_from_env(fallback: Option<&str>) -> Result<EditorCommand, EditorError> {
    resolve_editor(
        std::env::var("VISUAL").ok(),
        std::env::var("EDITOR").ok(),
        fallback,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_visual_wins() {
        let cmd = resolve_editor(some("nvim"), some("vi"), Some("nano")).unwrap();
        assert_eq!(cmd.program, "nvim");
    }

    #[test]
    fn test_editor_then_fallback() {
        assert_eq!(resolve_editor(None, some("vi"), None).unwrap().program, "vi");
        assert_eq!(
            resolve_editor(some("  "), None, Some("hx")).unwrap().program,
            "hx"
        );
    }

    #[test]
    fn test_program_path_with_spaces_is_kept_whole() {
        let cmd = resolve_editor(some(" /opt/My Editor/bin/edit\n"), some("vi"), None).unwrap();
        assert_eq!(cmd.program, "/opt/My Editor/bin/edit");
    }

    #[test]
    fn test_nothing_configured() {
        let err = resolve_editor(None, some(""), None).unwrap_err();
        assert!(matches!(err, EditorError::NotConfigured));
        assert_eq!(err.to_string(), "$VISUAL and $EDITOR are not set");
    }

    #[test]
    fn test_launch_failure() {
        let cmd = EditorCommand {
            program: "/nonexistent/gwt-editor".to_string(),
        };
        let err = cmd.run(Path::new("/tmp")).unwrap_err();
        assert!(matches!(err, EditorError::Launch { .. }));
    }
}
