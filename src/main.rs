use std::io;

use array_chess::uci::uci_top::run_stdio_loop;

fn main() -> io::Result<()> {
    // stdout carries the UCI protocol; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    run_stdio_loop()
}
