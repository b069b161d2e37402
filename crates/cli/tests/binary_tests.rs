#[cfg(all(test, unix))]
mod tests {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use std::process::{Command, Output};
    use tempfile::TempDir;

    struct Workspace {
        search_dir: TempDir,
        state_dir: TempDir,
    }

    impl Workspace {
        fn new() -> Self {
            let workspace = Self {
                search_dir: tempfile::tempdir().unwrap(),
                state_dir: tempfile::tempdir().unwrap(),
            };
            let program = workspace.search_dir.path().join("ls");
            fs::write(&program, "#!/bin/sh\n").unwrap();
            fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();
            workspace
        }

        fn history_path(&self) -> PathBuf {
            self.state_dir.path().join("history")
        }

        /// Command for the launcher binary with explicit state files and
        /// `PATH` limited to the workspace search directory.
        fn command(&self) -> Command {
            let mut command = Command::new(env!("CARGO_BIN_EXE_dmenu-hist"));
            command
                .env_remove("RUST_LOG")
                .env("PATH", self.search_dir.path())
                .arg("--history-path")
                .arg(self.history_path())
                .arg("--cache-path")
                .arg(self.state_dir.path().join("app_cache"));
            command
        }
    }

    fn run(command: &mut Command) -> Output {
        command.output().unwrap()
    }

    #[test]
    fn test_noop_verbose_prints_candidates_and_exits_zero() {
        let workspace = Workspace::new();

        let output = run(workspace.command().arg("--noop").arg("--verbose"));

        assert!(output.status.success());
        assert_eq!(
            String::from_utf8(output.stdout).unwrap(),
            "!edit-history\nls\n"
        );
        assert!(!workspace.history_path().exists());
    }

    #[test]
    fn test_edit_exits_zero_without_scanning() {
        let workspace = Workspace::new();

        // The editor is looked up on the caller's `PATH`
        let output = run(workspace
            .command()
            .env("PATH", std::env::var_os("PATH").unwrap_or_default())
            .arg("--edit")
            .arg("--editor")
            .arg("true"));

        assert!(output.status.success());
        assert!(output.stdout.is_empty());
        assert!(!workspace.state_dir.path().join("app_cache").exists());
    }

    #[test]
    fn test_malformed_history_exits_with_failure() {
        let workspace = Workspace::new();
        fs::write(workspace.history_path(), "ls:many\n").unwrap();

        let output = run(workspace.command().arg("--noop"));

        assert!(!output.status.success());
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("Malformed usage count"));
    }

    #[test]
    fn test_missing_selector_exits_with_failure() {
        let workspace = Workspace::new();

        let output = run(workspace
            .command()
            .arg("--selector")
            .arg("dmenu-hist-no-such-selector"));

        assert!(!output.status.success());
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("dmenu-hist-no-such-selector"));
    }
}
