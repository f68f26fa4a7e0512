//! Interactive counter demo on stdin/stdout

use counter_ui::prelude::*;
use std::io;

fn main() {
    let app = App::new(TITLE).root(CounterApp::new());
    let mut renderer = TextRenderer::new(io::stdout());
    let stdin = io::stdin();
    if let Err(err) = app.run(&mut renderer, stdin.lock()) {
        eprintln!("[counter-ui] {err}");
        std::process::exit(1);
    }
}
