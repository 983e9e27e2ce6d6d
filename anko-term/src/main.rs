//! Anko - a minimal full-screen terminal text editor
//!
//! Raw-mode input, window-size discovery, and single-write frame rendering
//! built directly on the POSIX line discipline, with no terminal-UI
//! library in between.

mod editor;
mod input;

use std::process;

fn main() {
    // "warn" by default; RUST_LOG=debug traces the session on stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    log::debug!("starting anko");

    if let Err(e) = editor::run() {
        // the editor has already cleared the screen and restored the
        // terminal by the time the error reaches here
        eprintln!("anko: {}", e);
        process::exit(1);
    }

    log::debug!("anko exited");
}
