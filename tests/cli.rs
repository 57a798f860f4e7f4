mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use predicates::prelude::PredicateBooleanExt;
    use predicates::str::{contains, is_empty, starts_with};

    use std::fs;
    use std::path::Path;
    use std::process::Command;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const CURRENT: &str = "list-versions";
    const LEGACY: &str = "list-versions-legacy";

    const INVALID_UTF8: &[u8] = &[0x66, 0x6f, 0xff, 0xfe, 0x6f];

    fn command_in(name: &str, dir: &Path) -> Result<Command, Box<dyn std::error::Error>> {
        let mut cmd = Command::cargo_bin(name)?;
        cmd.current_dir(dir).env_remove("RUST_LOG");
        Ok(cmd)
    }

    #[test]
    fn test_output__cargo_manifest_stanza() -> TestResult {
        let dir = tempfile::tempdir()?;
        fs::write(
            dir.path().join("Cargo.toml"),
            "[dependencies]\nfilesfinder\"\nversion = \"2.3.1\"\n",
        )?;

        command_in(CURRENT, dir.path())?
            .assert()
            .success()
            .stdout("v2.3.1\n");
        command_in(LEGACY, dir.path())?
            .assert()
            .success()
            .stdout("2.3.1\n");
        Ok(())
    }

    #[test]
    fn test_output__dockerfile_only_in_current_mode() -> TestResult {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("Dockerfile"), "FROM filesfinder:v1.0.0\n")?;

        command_in(CURRENT, dir.path())?
            .assert()
            .success()
            .stdout("v1.0.0\n");
        command_in(LEGACY, dir.path())?
            .assert()
            .success()
            .stdout(is_empty());
        Ok(())
    }

    #[test]
    fn test_output__markdown_only_in_current_mode() -> TestResult {
        let dir = tempfile::tempdir()?;
        fs::create_dir_all(dir.path().join("docs"))?;
        fs::write(
            dir.path().join("docs/install.md"),
            "cargo install filesfinder@v0.5.0\n",
        )?;

        command_in(CURRENT, dir.path())?
            .assert()
            .success()
            .stdout("v0.5.0\n");
        command_in(LEGACY, dir.path())?
            .assert()
            .success()
            .stdout(is_empty());
        Ok(())
    }

    #[test]
    fn test_output__unmatched_extension_is_not_scanned() -> TestResult {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("notes.txt"), "filesfinder:v9.9.9\n")?;
        fs::write(dir.path().join("broken.txt"), INVALID_UTF8)?;

        command_in(CURRENT, dir.path())?
            .assert()
            .success()
            .stdout(is_empty())
            .stderr(is_empty());
        Ok(())
    }

    #[test]
    fn test_output__glob_order_then_pattern_order() -> TestResult {
        let dir = tempfile::tempdir()?;
        let base = dir.path();
        fs::create_dir_all(base.join(".github/workflows"))?;
        fs::write(base.join("main.rs"), "// filesfinder@v0.1.0\n")?;
        fs::write(
            base.join("Cargo.lock"),
            "name = \"filesfinder\"\nversion = \"0.3.0\"\nsource = \"filesfinder@v0.3.0\"\n",
        )?;
        fs::write(
            base.join(".github/workflows/release.yml"),
            "image: filesfinder:v0.2.0\n",
        )?;

        command_in(CURRENT, base)?
            .assert()
            .success()
            .stdout("v0.1.0\nv0.2.0\nv0.3.0\nv0.3.0\"\n");
        Ok(())
    }

    #[test]
    fn test_output__same_output_on_every_run() -> TestResult {
        let dir = tempfile::tempdir()?;
        let base = dir.path();
        for crate_name in ["alpha", "beta", "gamma"] {
            let crate_dir = base.join(crate_name);
            fs::create_dir_all(&crate_dir)?;
            fs::write(
                crate_dir.join("Cargo.toml"),
                format!(
                    "[dependencies.{crate_name}]\nfilesfinder\"\nversion = \"1.{}\"\n",
                    crate_name.len()
                ),
            )?;
        }

        let first = command_in(CURRENT, base)?.output()?;
        let second = command_in(CURRENT, base)?.output()?;

        assert!(first.status.success());
        assert_eq!(first.stdout, second.stdout);
        assert_eq!(String::from_utf8(first.stdout)?, "v1.5\nv1.4\nv1.5\n");
        Ok(())
    }

    #[test]
    fn test_output__current_mode_read_error_names_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let base = dir.path();
        fs::write(base.join("a.toml"), "filesfinder\"\nversion = \"1.0.0\"\n")?;
        fs::write(base.join("b.toml"), INVALID_UTF8)?;
        fs::write(base.join("c.toml"), "filesfinder\"\nversion = \"3.0.0\"\n")?;

        command_in(CURRENT, base)?
            .assert()
            .failure()
            .code(1)
            .stdout("v1.0.0\n")
            .stderr(contains("Error: Could not read file 'b.toml'"));
        Ok(())
    }

    #[test]
    fn test_output__read_error_reported_once() -> TestResult {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("b.toml"), INVALID_UTF8)?;

        let output = command_in(CURRENT, dir.path())?.output()?;
        let stderr = String::from_utf8(output.stderr)?;

        assert!(!output.status.success());
        assert_eq!(stderr.matches("Could not read file 'b.toml'").count(), 1, "{stderr}");
        Ok(())
    }

    #[test]
    fn test_output__crlf_line_endings() -> TestResult {
        let dir = tempfile::tempdir()?;
        fs::write(
            dir.path().join("Cargo.toml"),
            "[dependencies]\r\nfilesfinder\"\r\nversion = \"2.3.1\"\r\n",
        )?;
        fs::write(dir.path().join("Dockerfile"), "FROM filesfinder:v1.0.0\r\n")?;

        command_in(CURRENT, dir.path())?
            .assert()
            .success()
            .stdout("v2.3.1\nv1.0.0\n");
        command_in(LEGACY, dir.path())?
            .assert()
            .success()
            .stdout("2.3.1\n");
        Ok(())
    }

    #[test]
    fn test_output__legacy_mode_read_error_is_generic() -> TestResult {
        let dir = tempfile::tempdir()?;
        let base = dir.path();
        fs::write(base.join("a.toml"), INVALID_UTF8)?;
        fs::write(base.join("b.toml"), "filesfinder\"\nversion = \"1.0.0\"\n")?;

        command_in(LEGACY, base)?
            .assert()
            .failure()
            .code(1)
            .stdout(is_empty())
            .stderr(contains("Error: IO error:"))
            .stderr(contains("a.toml").not());
        Ok(())
    }

    #[test]
    fn test_output__verbose_logs_go_to_stderr() -> TestResult {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("Dockerfile"), "FROM filesfinder:v1.0.0\n")?;

        command_in(CURRENT, dir.path())?
            .env("RUST_LOG", "debug")
            .assert()
            .success()
            .stdout("v1.0.0\n")
            .stderr(contains("Scan complete: 1 version(s) in 1 file(s)"));
        Ok(())
    }

    #[test]
    fn test_version_flag() -> TestResult {
        let dir = tempfile::tempdir()?;

        command_in(LEGACY, dir.path())?
            .arg("--version")
            .assert()
            .success()
            .stdout(starts_with("list-versions-legacy "));
        Ok(())
    }

    #[test]
    fn test_unknown_argument_is_rejected() -> TestResult {
        let dir = tempfile::tempdir()?;

        command_in(CURRENT, dir.path())?
            .arg("--root")
            .assert()
            .failure()
            .stderr(contains("unexpected argument"));
        Ok(())
    }
}
