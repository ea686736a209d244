//! Evaluates encoded output with Node.js and checks it reproduces the input.
//! Skipped when `node` is not on PATH.

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use rand::Rng;
use serde_json::Value;
use sixcode_encoder::{encode, encode_run, Encoder, EncoderConfig};

const EVAL: &str = "process.stdout.write(JSON.stringify(eval(require('fs').readFileSync(0, 'utf8'))))";

fn node_available() -> bool {
    Command::new("node")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn eval(program: &str) -> Result<Value> {
    let mut child = Command::new("node")
        .args(["-e", EVAL])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("spawning node")?;
    child
        .stdin
        .take()
        .context("node stdin")?
        .write_all(program.as_bytes())?;
    let output = child.wait_with_output()?;
    if !output.status.success() {
        bail!("node failed: {}", String::from_utf8_lossy(&output.stderr));
    }
    Ok(serde_json::from_slice(&output.stdout)?)
}

fn assert_roundtrip(encoder: &Encoder, s: &str) -> Result<()> {
    let program = encoder.encode(s)?;
    assert!(program.chars().all(|c| "[]()!+".contains(c)));
    assert_eq!(eval(&program)?, Value::String(s.to_string()), "input {:?}", s);
    Ok(())
}

#[test]
fn test_roundtrip() -> Result<()> {
    if !node_available() {
        eprintln!("node not found, skipping");
        return Ok(());
    }
    let encoder = Encoder::new()?;
    for s in [
        "",
        "0",
        "a",
        "\u{0}",
        "\u{ff}",
        "Hello, world!",
        "\u{fc}n\u{ef}c\u{f6}d\u{e9}",
        "\u{1F600}",
        "\u{1F600} and \u{65e5}\u{672c}",
        "\n\t\"\\'`${}",
        "</script><!--",
        "the quick brown fox jumps over the lazy dog",
    ] {
        assert_roundtrip(&encoder, s)?;
    }
    Ok(())
}

#[test]
fn test_roundtrip_repeats() -> Result<()> {
    if !node_available() {
        return Ok(());
    }
    let encoder = Encoder::new()?;
    assert_roundtrip(&encoder, &"a".repeat(1000))?;
    assert_roundtrip(&encoder, &"abc\u{e9}".repeat(200))?;
    Ok(())
}

fn random_text(rng: &mut impl Rng, len: usize) -> String {
    const POOL: &[char] = &[
        'a', 'Z', '0', '9', ' ', '$', '.', '\n', '\u{e9}', '\u{fc}', '\u{ff}', '\u{100}',
        '\u{3b1}', '\u{65e5}', '\u{672c}', '\u{8a9e}', '\u{ffff}', '\u{1F600}', '\u{10FFFF}',
    ];
    (0..len).map(|_| POOL[rng.gen_range(0..POOL.len())]).collect()
}

#[test]
fn test_roundtrip_random() -> Result<()> {
    if !node_available() {
        return Ok(());
    }
    let encoder = Encoder::new()?;
    let mut rng = rand::thread_rng();
    for _ in 0..60 {
        let len = rng.gen_range(1..12);
        assert_roundtrip(&encoder, &random_text(&mut rng, len))?;
    }
    Ok(())
}

#[test]
fn test_roundtrip_split() -> Result<()> {
    if !node_available() {
        return Ok(());
    }
    let encoder = Encoder::with_config(EncoderConfig::default().with_split_threshold(7))?;
    assert_roundtrip(&encoder, "split me into a few pieces \u{1F600}")?;
    Ok(())
}

#[test]
fn test_encode_matches_default_encoder() -> Result<()> {
    if !node_available() {
        return Ok(());
    }
    let s = "free functions";
    assert_eq!(eval(&encode(s)?)?, Value::String(s.to_string()));
    Ok(())
}

#[test]
fn test_encode_run() -> Result<()> {
    if !node_available() {
        return Ok(());
    }
    assert_eq!(eval(&encode_run("1+1")?)?, serde_json::json!(2));
    assert_eq!(eval(&encode_run("[1, 2, 3].map(x => x * 2).join('-')")?)?, serde_json::json!("2-4-6"));
    Ok(())
}
