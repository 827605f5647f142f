// Drives the compiled binary through a PTY: start a round, then quit.
// Requires a pseudo terminal, so it is unix-only and ignored by default.
// Run manually via: `cargo test --test integration_min_session -- --ignored`.

#![cfg(unix)]

use std::time::Duration;

use expectrl::{spawn, Eof};

#[test]
#[ignore]
fn start_round_and_quit() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let log = dir.path().join("speedkey.log");

    let bin = assert_cmd::cargo::cargo_bin("speedkey");
    let cmd = format!("{} --log-file {}", bin.display(), log.display());

    let mut p = spawn(cmd)?;

    // let the app enter the alternate screen
    std::thread::sleep(Duration::from_millis(200));

    // enter starts the round
    p.send("\r")?;
    std::thread::sleep(Duration::from_millis(200));

    // a couple of presses while playing
    p.send("as")?;
    std::thread::sleep(Duration::from_millis(200));

    p.send("\x1b")?; // ESC
    p.expect(Eof)?;

    let contents = std::fs::read_to_string(&log)?;
    assert!(contents.contains("round started"));
    Ok(())
}
