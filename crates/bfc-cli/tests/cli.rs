use std::{fs, path::Path, process::Command};

fn bfc(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bfc"));
    cmd.current_dir(cwd).env_remove("RUST_LOG");
    cmd
}

#[test]
fn translates_file_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("add.bf"), "++>+++++[<+>-]<.").unwrap();

    let out = bfc(dir.path()).arg("add.bf").output().unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let c = fs::read_to_string(dir.path().join("add.c")).unwrap();
    assert!(c.starts_with("#include <stdio.h>\n"));
    assert!(c.contains("\twhile (buffer[p]) {\n\t\tp--;\n"));
}

#[test]
fn memory_program_goes_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let out = bfc(dir.path())
        .args(["--from", "memory", "--spaces", "2", "[.]"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("\n  while (buffer[p]) {\n    putchar(buffer[p]);\n  }\n"), "{stdout}");
}

#[test]
fn unbalanced_program_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.bf"), "+\n[[-]").unwrap();

    let out = bfc(dir.path()).args(["bad.bf", "-o", "bad.c"]).output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unclosed '[' at 2:1"), "{stderr}");
    assert!(!dir.path().join("bad.c").exists());
}

#[test]
fn permissive_flag_accepts_unbalanced_program() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.bf"), "]").unwrap();

    let out = bfc(dir.path()).args(["bad.bf", "--permissive", "-o", "-"]).output().unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("\n\t}\n\treturn 0;\n}\n"));
}

#[test]
fn missing_input_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let out = bfc(dir.path()).arg("nope.bf").output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("failed to read source 'nope.bf'"), "{stderr}");
}

#[test]
fn refuses_to_overwrite_input() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("prog.c"), "+").unwrap();
    let out = bfc(dir.path()).arg("prog.c").output().unwrap();
    assert!(!out.status.success());
    assert_eq!(fs::read_to_string(dir.path().join("prog.c")).unwrap(), "+");
}

#[test]
fn refuses_to_overwrite_input_under_another_spelling() {
    let dir = tempfile::tempdir().unwrap();
    let source = "+ my source text";
    fs::write(dir.path().join("prog.c"), source).unwrap();

    let absolute = dir.path().join("prog.c");
    for output in [Path::new("./prog.c"), absolute.as_path()] {
        let out = bfc(dir.path()).arg("prog.c").arg("-o").arg(output).output().unwrap();
        assert!(!out.status.success(), "wrote over input via {}", output.display());
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.contains("refusing to overwrite input"), "{stderr}");
        assert_eq!(fs::read_to_string(dir.path().join("prog.c")).unwrap(), source);
    }
}

#[cfg(unix)]
#[test]
fn accepts_non_utf8_input_path() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    let dir = tempfile::tempdir().unwrap();
    let name = OsStr::from_bytes(b"prog-\xff.bf");
    if fs::write(dir.path().join(name), "+.").is_err() {
        // Some filesystems only store UTF-8 names.
        return;
    }

    let out = bfc(dir.path()).arg(name).output().unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let c = fs::read_to_string(dir.path().join(OsStr::from_bytes(b"prog-\xff.c"))).unwrap();
    assert!(c.contains("\tputchar(buffer[p]);\n"));
}

#[test]
fn config_file_sets_options() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bfc.toml"), "tape-size = 16\n").unwrap();
    let out = bfc(dir.path())
        .args(["--from", "memory", "--config", "bfc.toml", "+"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("buffer[16];"));
}
