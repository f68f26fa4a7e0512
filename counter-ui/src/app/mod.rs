//! Application entry point
//!
//! `App` retains the built element tree between frames, delivers events to
//! widgets by id, and rebuilds the whole tree whenever a handled event
//! marks something dirty. Everything runs synchronously on the caller's
//! thread; one dispatch completes before the next begins.

use crate::core::{BoxedWidget, Context, Event, MouseButton, UiError, Widget, WidgetId};
use crate::render::{Renderer, Scene, SceneNode};
use std::io::BufRead;

/// One retained widget plus the children it built
struct Element {
    widget: BoxedWidget,
    children: Vec<Element>,
}

impl Element {
    fn new(widget: BoxedWidget) -> Self {
        Self {
            widget,
            children: Vec::new(),
        }
    }

    fn rebuild(&mut self, ctx: &mut Context, parent: Option<WidgetId>) {
        let id = self.widget.id();
        ctx.register_widget(id, parent);
        self.children = self
            .widget
            .build(ctx)
            .into_iter()
            .map(Element::new)
            .collect();
        for child in &mut self.children {
            child.rebuild(ctx, Some(id));
        }
    }

    fn deliver(&mut self, target: WidgetId, event: &Event, ctx: &mut Context) -> Option<bool> {
        if self.widget.id() == target {
            return Some(self.widget.on_event(event, ctx));
        }
        for child in &mut self.children {
            if let Some(handled) = child.deliver(target, event, ctx) {
                return Some(handled);
            }
        }
        None
    }

    fn scene_node(&self) -> SceneNode {
        SceneNode {
            id: self.widget.id(),
            kind: self.widget.node(),
            children: self.children.iter().map(Element::scene_node).collect(),
        }
    }
}

/// Main application struct
pub struct App {
    title: String,
    root: Option<Element>,
    context: Context,
}

impl App {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            root: None,
            context: Context::new(),
        }
    }

    /// Install the root widget and build the first frame
    pub fn root(mut self, widget: impl Widget + 'static) -> Self {
        let mut element = Element::new(Box::new(widget));
        element.rebuild(&mut self.context, None);
        self.root = Some(element);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Flatten the current element tree into a scene
    pub fn scene(&self) -> Scene {
        Scene {
            root: self.root.as_ref().map(Element::scene_node),
        }
    }

    /// Deliver an event to the widget with the given id.
    ///
    /// A handled event marks the target dirty and rebuilds the tree before
    /// returning, so the next `scene()` already reflects the new state.
    pub fn dispatch(&mut self, target: WidgetId, event: &Event) -> Result<bool, UiError> {
        let root = self
            .root
            .as_mut()
            .ok_or(UiError::UnknownWidget(target))?;
        let handled = root
            .deliver(target, event, &mut self.context)
            .ok_or(UiError::UnknownWidget(target))?;
        if handled {
            self.context.mark_dirty(target);
        }
        if !self.context.take_dirty().is_empty() {
            self.rebuild();
        }
        Ok(handled)
    }

    /// Press-and-release on the widget with the given id
    pub fn click(&mut self, target: WidgetId) -> Result<bool, UiError> {
        self.dispatch(
            target,
            &Event::MouseDown {
                button: MouseButton::Left,
            },
        )?;
        self.dispatch(
            target,
            &Event::MouseUp {
                button: MouseButton::Left,
            },
        )
    }

    /// Rebuild the whole element tree from the root
    pub fn rebuild(&mut self) {
        self.context.clear_tree();
        if let Some(ref mut root) = self.root {
            root.rebuild(&mut self.context, None);
        }
    }

    /// Interactive session: present each frame, read commands from `input`.
    ///
    /// Commands: a button number clicks that button, `json` dumps the
    /// scene, `q` quits. Unknown input is reported and skipped.
    pub fn run<R: Renderer, I: BufRead>(
        mut self,
        renderer: &mut R,
        mut input: I,
    ) -> Result<(), UiError> {
        println!("[{}] interactive session", self.title);
        loop {
            let scene = self.scene();
            renderer.present(&scene)?;
            let buttons: Vec<(WidgetId, String)> = scene
                .buttons()
                .into_iter()
                .map(|(id, label)| (id, label.to_string()))
                .collect();
            for (index, (_, label)) in buttons.iter().enumerate() {
                println!("  {index}: [{label}]");
            }
            println!("button number, 'json', or 'q':");

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            match line.trim() {
                "" => {}
                "q" | "quit" => break,
                "json" => println!("{}", self.scene().to_json()?),
                command => match command.parse::<usize>() {
                    Ok(index) if index < buttons.len() => {
                        self.click(buttons[index].0)?;
                    }
                    _ => eprintln!("[{}] unknown command: {command}", self.title),
                },
            }
        }
        Ok(())
    }
}
