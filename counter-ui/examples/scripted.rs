//! Scripted session - drives the demo headlessly and prints each frame

use counter_ui::prelude::*;
use std::io;

fn click(app: &mut App, label: &str, nth: usize) -> Result<bool, UiError> {
    let scene = app.scene();
    let (target, _) = scene
        .buttons()
        .into_iter()
        .filter(|(_, l)| *l == label)
        .nth(nth)
        .expect("button not on screen");
    println!("-> click {label} #{nth}");
    app.click(target)
}

fn main() -> Result<(), UiError> {
    let mut app = App::new(TITLE).root(CounterApp::new());
    let mut renderer = TextRenderer::new(io::stdout());

    renderer.present(&app.scene())?;

    // Grow the list, bump the second counter, then shrink past it
    click(&mut app, "+", 0)?;
    click(&mut app, "Plus", 1)?;
    click(&mut app, "Plus", 1)?;
    click(&mut app, "Minus", 4)?;
    renderer.present(&app.scene())?;

    click(&mut app, "-", 0)?;
    click(&mut app, "-", 0)?;
    renderer.present(&app.scene())?;

    println!("{}", app.scene().to_json()?);
    Ok(())
}
