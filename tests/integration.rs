use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn sample_project() -> PathBuf {
    fixtures_path().join("sample-project")
}

fn cmd() -> assert_cmd::Command {
    let mut c = cargo_bin_cmd!("codebase-concat");
    c.env_remove("RUST_LOG");
    c
}

const SAMPLE_DEFAULT_OUTPUT: &str = "# File: README.md\n\
# Sample project\n\
\n\
A tiny tree used by the integration tests.\n\
\n\
# File: src/app.py\n\
def main():\n    print(\"hello\")\n\
\n\
// File: src/util.js\n\
export const add = (a, b) => a + b;\n\
\n\
<!-- File: web/index.html -->\n\
<h1>Hello</h1>\n\
\n";

fn create_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (path, content) in files {
        let full = dir.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }
    dir
}

fn stdout_of(dir: &Path, args: &[&str]) -> String {
    let output = cmd()
        .arg(dir)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).unwrap()
}

mod sample_project {
    use super::*;

    #[test]
    fn test_default_output() {
        cmd()
            .arg(sample_project())
            .assert()
            .success()
            .code(0)
            .stdout(predicate::eq(SAMPLE_DEFAULT_OUTPUT));
    }

    #[test]
    fn test_diagnostics_on_stderr_only() {
        cmd()
            .arg(sample_project())
            .assert()
            .success()
            .stderr(predicate::str::contains("Processing 4 files from '"))
            .stderr(predicate::str::contains("Successfully processed 4 files."))
            .stdout(predicate::str::contains("Processing").not())
            .stdout(predicate::str::contains("Successfully").not());
    }

    #[test]
    fn test_ignored_entries_never_emitted() {
        cmd()
            .arg(sample_project())
            .arg("--all-ext")
            .assert()
            .success()
            .stdout(predicate::str::contains("node_modules").not())
            .stdout(predicate::str::contains("left-pad").not())
            .stdout(predicate::str::contains("SECRET").not())
            .stdout(predicate::str::contains("package-lock.json").not());
    }

    #[test]
    fn test_all_ext_includes_allowed_dotfiles() {
        cmd()
            .arg(sample_project())
            .arg("--all-ext")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("# File: .gitignore\n*.tmp\n\n"))
            .stdout(predicate::str::contains("# File: src/main.rs\nfn main() {}\n\n"));
    }

    #[test]
    fn test_default_filter_skips_gitignore() {
        cmd()
            .arg(sample_project())
            .assert()
            .success()
            .stdout(predicate::str::contains(".gitignore").not())
            .stdout(predicate::str::contains("main.rs").not());
    }

    #[test]
    fn test_ext_filter() {
        cmd()
            .arg(sample_project())
            .arg("--ext")
            .arg("py")
            .assert()
            .success()
            .stdout(predicate::eq(
                "# File: src/app.py\ndef main():\n    print(\"hello\")\n\n",
            ));
    }

    #[test]
    fn test_output_file() {
        let out_dir = TempDir::new().unwrap();
        let out_path = out_dir.path().join("context.txt");

        cmd()
            .arg(sample_project())
            .arg("-o")
            .arg(&out_path)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        assert_eq!(fs::read_to_string(&out_path).unwrap(), SAMPLE_DEFAULT_OUTPUT);
    }

    #[test]
    fn test_output_file_truncated() {
        let out_dir = TempDir::new().unwrap();
        let out_path = out_dir.path().join("context.txt");
        fs::write(&out_path, "stale content that is much longer than nothing\n".repeat(100))
            .unwrap();

        cmd()
            .arg(sample_project())
            .arg("--output")
            .arg(&out_path)
            .assert()
            .success();

        assert_eq!(fs::read_to_string(&out_path).unwrap(), SAMPLE_DEFAULT_OUTPUT);
    }

    #[test]
    fn test_repeated_runs_identical() {
        let first = stdout_of(&sample_project(), &["--all-ext"]);
        let second = stdout_of(&sample_project(), &["--all-ext"]);
        assert_eq!(first, second);
    }
}

mod filtering {
    use super::*;

    #[test]
    fn test_binary_file_excluded_regardless_of_extension() {
        let dir = create_tree(&[("text.py", "print(1)\n")]);
        fs::write(
            dir.path().join("binary.py"),
            b"\x7fELF\x02\x01\x01\x00\x00\x00",
        )
        .unwrap();

        let out = stdout_of(dir.path(), &["--all-ext"]);
        assert_eq!(out, "# File: text.py\nprint(1)\n\n");
    }

    #[test]
    fn test_extension_match_case_insensitive() {
        let dir = create_tree(&[("a.py", "a\n"), ("b.js", "b\n"), ("c.PY", "c\n")]);

        let out = stdout_of(dir.path(), &["--ext", ".py"]);
        assert_eq!(out, "# File: a.py\na\n\n# File: c.PY\nc\n\n");
    }

    #[test]
    fn test_uppercase_ext_argument() {
        let dir = create_tree(&[("a.py", "a\n"), ("b.md", "b\n")]);

        let out = stdout_of(dir.path(), &["--ext", "PY"]);
        assert_eq!(out, "# File: a.py\na\n\n");
    }

    #[test]
    fn test_ignored_directory_with_matching_files() {
        let dir = create_tree(&[
            ("node_modules/pkg/index.js", "module.exports = 1;\n"),
            ("dist/bundle.js", "bundle();\n"),
            (".git/hooks/pre-commit.sh", "exit 0\n"),
            ("src/index.js", "run();\n"),
        ]);

        let out = stdout_of(dir.path(), &[]);
        assert_eq!(out, "// File: src/index.js\nrun();\n\n");
    }

    #[test]
    fn test_wildcard_suffixes() {
        let dir = create_tree(&[
            ("server.log", "boot\n"),
            ("app.py~", "backup\n"),
            ("app.py", "app\n"),
        ]);

        let out = stdout_of(dir.path(), &["--all-ext"]);
        assert_eq!(out, "# File: app.py\napp\n\n");
    }

    #[test]
    fn test_trailing_newline_handling() {
        let dir = create_tree(&[
            ("with.md", "line\n"),
            ("without.md", "line"),
            ("empty.md", ""),
        ]);

        let out = stdout_of(dir.path(), &[]);
        assert_eq!(
            out,
            "# File: empty.md\n\n# File: with.md\nline\n\n# File: without.md\nline\n\n"
        );
    }

    #[test]
    fn test_invalid_utf8_dropped() {
        let dir = create_tree(&[]);
        fs::write(dir.path().join("latin1.txt"), b"caf\xe9 ok\n").unwrap();

        let out = stdout_of(dir.path(), &["--ext", "txt"]);
        assert_eq!(out, "# File: latin1.txt\ncaf ok\n\n");
    }

    #[test]
    fn test_paths_sorted_by_component() {
        let dir = create_tree(&[
            ("src/x.py", "x\n"),
            ("README.md", "r\n"),
            ("a-b/y.py", "y\n"),
            ("a/z.py", "z\n"),
        ]);

        let out = stdout_of(dir.path(), &[]);
        let headers: Vec<&str> = out.lines().filter(|l| l.starts_with("# File:")).collect();
        assert_eq!(
            headers,
            [
                "# File: README.md",
                "# File: a/z.py",
                "# File: a-b/y.py",
                "# File: src/x.py"
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_file_symlink_emitted_under_link_name() {
        let dir = create_tree(&[("a/z.py", "z\n"), ("a-b/y.py", "y\n"), ("real/r.py", "r\n")]);
        std::os::unix::fs::symlink(dir.path().join("real/r.py"), dir.path().join("link.py"))
            .unwrap();

        let out = stdout_of(dir.path(), &[]);
        let headers: Vec<&str> = out.lines().filter(|l| l.starts_with("# File:")).collect();
        assert_eq!(
            headers,
            [
                "# File: a/z.py",
                "# File: a-b/y.py",
                "# File: link.py",
                "# File: real/r.py"
            ]
        );
    }

    #[test]
    fn test_progress_every_ten_files() {
        let names: Vec<String> = (0..21).map(|i| format!("m{i:02}.md")).collect();
        let files: Vec<(&str, &str)> = names.iter().map(|n| (n.as_str(), "m\n")).collect();
        let dir = create_tree(&files);

        cmd()
            .arg(dir.path())
            .assert()
            .success()
            .stderr(predicate::str::contains("Processed 10/21 files..."))
            .stderr(predicate::str::contains("Processed 20/21 files..."))
            .stderr(predicate::str::contains("Successfully processed 21 files."));
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();

        cmd()
            .arg(dir.path().join("does-not-exist"))
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Error: Directory '"))
            .stderr(predicate::str::contains("does not exist."));
    }

    #[cfg(unix)]
    #[test]
    fn test_relative_missing_directory_shown_absolute() {
        let dir = TempDir::new().unwrap();

        cmd()
            .current_dir(dir.path())
            .arg("missing")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Error: Directory '/"))
            .stderr(predicate::str::contains("missing' does not exist."));
    }

    #[test]
    fn test_not_a_directory() {
        let dir = create_tree(&[("file.py", "x\n")]);

        cmd()
            .arg(dir.path().join("file.py"))
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("is not a directory."));
    }

    #[test]
    fn test_missing_directory_does_not_create_output() {
        let dir = TempDir::new().unwrap();
        let out_path = dir.path().join("out.txt");

        cmd()
            .arg(dir.path().join("missing"))
            .arg("-o")
            .arg(&out_path)
            .assert()
            .code(1);

        assert!(!out_path.exists());
    }

    #[test]
    fn test_unwritable_output() {
        let dir = create_tree(&[("a.py", "a\n")]);

        cmd()
            .arg(dir.path())
            .arg("-o")
            .arg(dir.path().join("missing-dir/out.txt"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Failed to create output file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = create_tree(&[("a.py", "a\n"), ("b.py", "b\n")]);
        let locked = dir.path().join("b.py");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores permission bits; nothing to observe then.
        if fs::read(&locked).is_ok() {
            return;
        }

        cmd()
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::eq("# File: a.py\na\n\n"));
    }
}

mod cli {
    use super::*;

    #[test]
    fn test_help() {
        cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--all-ext"))
            .stdout(predicate::str::contains("--ext"))
            .stdout(predicate::str::contains("--output"));
    }

    #[test]
    fn test_version() {
        cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_defaults_to_current_directory() {
        let dir = create_tree(&[("only.py", "only\n")]);

        cmd()
            .current_dir(dir.path())
            .assert()
            .success()
            .stdout(predicate::eq("# File: only.py\nonly\n\n"));
    }
}
