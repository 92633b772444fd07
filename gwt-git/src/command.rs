use crate::error::GitError;
use crate::{Git, Result};
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, warn};

impl Git {
    /// Run git with `args`, returning captured stdout.
    ///
    /// A non-zero exit is an error carrying the arguments and trimmed stderr.
    pub(crate) fn run(&self, args: &[&str]) -> Result<String> {
        debug!(program = %self.program, ?args, dir = ?self.dir, "running git");

        let mut command = Command::new(&self.program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.dir {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|source| GitError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            let err = GitError::CommandFailed {
                args: args.join(" "),
                status: describe_status(output.status),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            };
            warn!("{}", err);
            return Err(err);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// `exit status N`, or a note that the process was killed
fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}
