//! Device control over adb.
//!
//! The bot talks to the phone exclusively through the `adb` executable:
//! `exec-out screencap -p` for captures and `shell input tap` for
//! dispatch. Tap bursts go out as one batched shell invocation of
//! backgrounded `input tap` commands joined by a final `wait`, because
//! spawning one adb process per tap is far slower than the puzzle's
//! own animation.

use std::process::Stdio;

use thiserror::Error;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

/// Result type for device operations.
pub type Result<T> = std::result::Result<T, DeviceError>;

/// Errors that can occur while driving the device.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The adb process could not be spawned or piped.
    #[error("adb io error: {0}")]
    Io(#[from] std::io::Error),

    /// adb ran but exited nonzero.
    #[error("adb {command:?} exited with status {status}")]
    CommandFailed { command: String, status: i32 },
}

/// Handle on a device reachable through a configured adb invocation.
///
/// Every call spawns `program` with `args` prepended, so device
/// selection flags like `-s SERIAL` apply uniformly.
#[derive(Debug, Clone)]
pub struct Adb {
    program: String,
    args: Vec<String>,
}

impl Adb {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    fn command(&self, trailing: &[&str]) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).args(trailing);
        command
    }

    /// Capture the screen as a PNG via `exec-out screencap -p`.
    pub async fn screencap(&self) -> Result<Vec<u8>> {
        let mut child = self
            .command(&["exec-out", "screencap", "-p"])
            .stdout(Stdio::piped())
            .spawn()?;

        let mut png = Vec::new();
        child
            .stdout
            .take()
            .expect("stdout was piped")
            .read_to_end(&mut png)
            .await?;

        let status = child.wait().await?;
        if !status.success() {
            return Err(DeviceError::CommandFailed {
                command: "exec-out screencap -p".into(),
                status: status.code().unwrap_or(-1),
            });
        }

        tracing::debug!(bytes = png.len(), "captured screenshot");
        Ok(png)
    }

    /// Send a single tap at screen position `(x, y)`.
    pub async fn tap(&self, x: i32, y: i32) -> Result<()> {
        let (x, y) = (x.to_string(), y.to_string());
        self.run(&["shell", "input", "tap", &x, &y]).await
    }

    /// Run a raw shell command on the device.
    pub async fn shell(&self, command: &str) -> Result<()> {
        self.run(&["shell", command]).await
    }

    async fn run(&self, trailing: &[&str]) -> Result<()> {
        tracing::trace!(?trailing, "adb");
        let status = self.command(trailing).status().await?;
        if !status.success() {
            return Err(DeviceError::CommandFailed {
                command: trailing.join(" "),
                status: status.code().unwrap_or(-1),
            });
        }
        Ok(())
    }
}

/// Build the batched dispatch command for a sequence of taps.
///
/// Each `(x, y, count)` contributes `count` backgrounded `input tap`
/// invocations; the trailing `wait` keeps the shell alive until all of
/// them land. Returns `None` for an empty sequence.
pub fn batch_tap_command(taps: impl IntoIterator<Item = (i32, i32, u8)>) -> Option<String> {
    let mut command = String::new();
    for (x, y, count) in taps {
        for _ in 0..count {
            command.push_str(&format!("input tap {x} {y} & "));
        }
    }
    if command.is_empty() {
        return None;
    }
    command.push_str("wait");
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tap_batch_is_none() {
        assert_eq!(batch_tap_command([]), None);
        assert_eq!(batch_tap_command([(10, 20, 0)]), None);
    }

    #[test]
    fn batch_repeats_each_tap_and_ends_with_wait() {
        let command = batch_tap_command([(10, 20, 2), (30, 40, 1)]).unwrap();
        assert_eq!(
            command,
            "input tap 10 20 & input tap 10 20 & input tap 30 40 & wait"
        );
    }

    #[test]
    fn adb_prepends_configured_args() {
        let adb = Adb::new("adb", vec!["-s".into(), "emulator-5554".into()]);
        let command = adb.command(&["shell", "true"]);
        let args: Vec<_> = command.as_std().get_args().collect();
        assert_eq!(args, ["-s", "emulator-5554", "shell", "true"]);
        assert_eq!(command.as_std().get_program(), "adb");
    }
}
