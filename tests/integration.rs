use std::fs;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::thread;
use tempfile::TempDir;

fn wordgrid_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("wordgrid");
    path
}

fn run_wordgrid(args: &[&str]) -> (String, String, bool) {
    let binary = wordgrid_binary();
    let output = Command::new(&binary)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run wordgrid binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

/// Serve exactly one HTTP response on a loopback port, then stop.
fn serve_once(status_line: &'static str, body: String) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "{}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    addr
}

fn fixture_html() -> String {
    concat!(
        "<html><head><title>Fixture</title>",
        "<style>p { color: red }</style>",
        "<script>var hidden = \"skipme\";</script></head>",
        "<body><p>The Cat sat. 123 dogs!!</p>",
        "<p>cats &amp; dogs fish<br>fowl</p></body></html>"
    )
    .to_string()
}

fn read_word_list(path: &Path) -> Vec<String> {
    let raw = fs::read_to_string(path).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn harvest_writes_expected_words() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("words.json");
    let addr = serve_once("HTTP/1.1 200 OK", fixture_html());

    let url = format!("http://{}/", addr);
    let (stdout, stderr, success) =
        run_wordgrid(&["harvest", &url, "-o", out.to_str().unwrap()]);

    assert!(
        success,
        "harvest failed: stdout={}, stderr={}",
        stdout, stderr
    );
    assert!(stdout.contains("unique words: 7"));
    assert!(stdout.contains("ok"));

    let words = read_word_list(&out);
    assert_eq!(
        words,
        ["cat", "cats", "dogs", "fish", "fixture", "fowl", "the"]
    );
}

#[test]
fn harvest_case_sensitive_rejects_capitalized_tokens() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("words.json");
    let addr = serve_once("HTTP/1.1 200 OK", fixture_html());

    let url = format!("http://{}/", addr);
    let (stdout, stderr, success) = run_wordgrid(&[
        "harvest",
        &url,
        "-o",
        out.to_str().unwrap(),
        "--case-sensitive",
    ]);

    assert!(
        success,
        "harvest failed: stdout={}, stderr={}",
        stdout, stderr
    );
    let words = read_word_list(&out);
    assert_eq!(words, ["cats", "dogs", "fish", "fowl"]);
}

#[test]
fn harvest_unreachable_url_leaves_output_untouched() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("words.json");
    fs::write(&out, r#"["previous"]"#).unwrap();

    // Bind then drop to get a port nothing is listening on.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let url = format!("http://{}/", addr);
    let (_, stderr, success) = run_wordgrid(&["harvest", &url, "-o", out.to_str().unwrap()]);

    assert!(!success);
    assert!(stderr.contains("failed to fetch"));
    assert_eq!(fs::read_to_string(&out).unwrap(), r#"["previous"]"#);
}

#[test]
fn harvest_http_error_status_fails() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("words.json");
    let addr = serve_once("HTTP/1.1 404 Not Found", "<h1>gone</h1>".to_string());

    let url = format!("http://{}/", addr);
    let (_, stderr, success) = run_wordgrid(&["harvest", &url, "-o", out.to_str().unwrap()]);

    assert!(!success);
    assert!(stderr.contains("404"));
    assert!(!out.exists());
}

#[test]
fn harvest_invalid_url_fails() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("words.json");

    let (_, stderr, success) =
        run_wordgrid(&["harvest", "not a url", "-o", out.to_str().unwrap()]);

    assert!(!success);
    assert!(stderr.contains("invalid URL"));
    assert!(!out.exists());
}

#[test]
fn harvest_uses_configured_output_path() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("from-config.json");
    let config_path = tmp.path().join("wordgrid.toml");
    fs::write(
        &config_path,
        format!("[output]\npath = \"{}\"\n", out.display()),
    )
    .unwrap();

    let addr = serve_once("HTTP/1.1 200 OK", "<p>hello world</p>".to_string());
    let url = format!("http://{}/", addr);
    let (stdout, stderr, success) =
        run_wordgrid(&["--config", config_path.to_str().unwrap(), "harvest", &url]);

    assert!(
        success,
        "harvest failed: stdout={}, stderr={}",
        stdout, stderr
    );
    assert_eq!(read_word_list(&out), ["hello", "world"]);
}

#[test]
fn puzzle_generates_from_word_list() {
    let tmp = TempDir::new().unwrap();
    let list = tmp.path().join("words.json");
    fs::write(&list, r#"["cat","dog","fish","horse","mouse"]"#).unwrap();

    let (stdout, stderr, success) = run_wordgrid(&[
        "puzzle",
        "-i",
        list.to_str().unwrap(),
        "--width",
        "8",
        "--height",
        "8",
        "--seed",
        "42",
    ]);

    assert!(
        success,
        "puzzle failed: stdout={}, stderr={}",
        stdout, stderr
    );
    assert!(stdout.contains("Words"));
    assert!(stdout.contains("Seed: 42"));
}

#[test]
fn puzzle_is_reproducible_for_a_seed() {
    let tmp = TempDir::new().unwrap();
    let list = tmp.path().join("words.json");
    fs::write(&list, r#"["cat","dog","fish","horse","mouse"]"#).unwrap();

    let args = [
        "puzzle",
        "-i",
        list.to_str().unwrap(),
        "--seed",
        "7",
        "--diagonals",
    ];
    let (first, _, ok1) = run_wordgrid(&args);
    let (second, _, ok2) = run_wordgrid(&args);

    assert!(ok1 && ok2);
    assert_eq!(first, second);
}

#[test]
fn puzzle_rejects_invalid_dimensions() {
    let tmp = TempDir::new().unwrap();
    let list = tmp.path().join("words.json");
    fs::write(&list, r#"["cat"]"#).unwrap();

    let (_, stderr, success) = run_wordgrid(&[
        "puzzle",
        "-i",
        list.to_str().unwrap(),
        "--width",
        "0",
    ]);

    assert!(!success);
    assert!(stderr.contains("dimensions"));
}

#[test]
fn puzzle_missing_word_list_fails() {
    let (_, stderr, success) = run_wordgrid(&["puzzle", "-i", "/nonexistent/words.json"]);

    assert!(!success);
    assert!(stderr.contains("failed to read word list"));
}
