use anyhow::{Context, Result};
use tokio::process::Command;

/// Hand a URL to the platform's default opener without waiting on it
pub fn open(url: &str) -> Result<()> {
    let mut command = opener_command(url);
    let mut child = command
        .spawn()
        .with_context(|| format!("failed to launch browser for {}", url))?;

    let url = url.to_string();
    tokio::spawn(async move {
        match child.wait().await {
            Ok(status) if status.success() => tracing::debug!(%url, "opener exited"),
            Ok(status) => tracing::warn!(%url, %status, "opener exited with failure"),
            Err(err) => tracing::warn!(%url, error = %err, "opener wait failed"),
        }
    });

    Ok(())
}

fn opener_command(url: &str) -> Command {
    let mut command = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else {
        Command::new("xdg-open")
    };
    command
        .arg(url)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null());
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_last_argument() {
        let command = opener_command("https://www.coolairhvac.com");
        let args: Vec<_> = command.as_std().get_args().collect();
        assert_eq!(
            args.last().and_then(|a| a.to_str()),
            Some("https://www.coolairhvac.com")
        );
    }
}
