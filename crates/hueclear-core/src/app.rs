//! The Elm-architecture application loop: [`Model`], [`Driver`],
//! [`EventLoopDriver`], [`Effect`], [`App`], [`AppRunner`].

use std::sync::mpsc::{self, Receiver, Sender};

use crate::messages::Msg;
use crate::scene::Scene;

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side-effect returned by [`Model::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Signal the application loop to stop.
    End,
}

// ---------------------------------------------------------------------------
// Model trait
// ---------------------------------------------------------------------------

/// The application model (Elm architecture).
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `scene`. The scene arrives empty.
    fn draw(&self, scene: &mut Scene);
}

// ---------------------------------------------------------------------------
// AppRunner
// ---------------------------------------------------------------------------

/// Drives a boxed [`Model`] one message at a time.
///
/// Back-ends that own the platform event loop (see [`EventLoopDriver`]) push
/// messages in with [`handle_msg`](Self::handle_msg) and pull frames out with
/// [`draw_frame`](Self::draw_frame).
pub struct AppRunner {
    model: Box<dyn Model>,
    scene: Scene,
    quit: bool,
    dirty: bool,
}

impl AppRunner {
    pub fn new(model: Box<dyn Model>) -> Self {
        Self {
            model,
            scene: Scene::new(),
            quit: false,
            dirty: true,
        }
    }

    /// Deliver [`Msg::Init`].
    pub fn init(&mut self) {
        self.handle_msg(Msg::Init);
    }

    /// Feed one message to the model. Nothing reaches it once it has asked
    /// to stop.
    pub fn handle_msg(&mut self, msg: Msg) {
        if self.quit {
            return;
        }
        if msg != Msg::Resize && self.model.update(msg) == Some(Effect::End) {
            self.quit = true;
        }
        self.dirty = true;
    }

    /// Whether the model returned [`Effect::End`].
    #[inline]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Redraw the scene if anything happened since the last frame.
    pub fn draw_frame(&mut self) -> Option<&Scene> {
        if !self.dirty {
            return None;
        }
        self.scene.clear_to(Default::default());
        self.model.draw(&mut self.scene);
        self.dirty = false;
        Some(&self.scene)
    }

    /// The most recently drawn scene.
    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

// ---------------------------------------------------------------------------
// Driver traits
// ---------------------------------------------------------------------------

/// Polling back-end (e.g. a terminal), run by [`App`].
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Send whatever input arrived since the last call through `tx`,
    /// waiting briefly when there is none.
    fn poll_msgs(&mut self, tx: &Sender<Msg>) -> Result<(), Box<dyn std::error::Error>>;

    /// Paint a scene.
    fn flush(&mut self, scene: &Scene) -> Result<(), Box<dyn std::error::Error>>;

    /// Clean up / restore the terminal.
    fn close(&mut self);
}

/// Back-end that must own the main-thread event loop (e.g. winit).
pub trait EventLoopDriver {
    fn run(self, runner: AppRunner) -> Result<(), Box<dyn std::error::Error>>;
}

// ---------------------------------------------------------------------------
// AppConfig / App
// ---------------------------------------------------------------------------

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
}

/// The main application loop for polling drivers.
pub struct App<D: Driver> {
    runner: AppRunner,
    driver: D,
}

impl<D: Driver> App<D> {
    /// Create a new application from a configuration.
    pub fn new<M: Model + 'static>(config: AppConfig<M, D>) -> Self {
        Self {
            runner: AppRunner::new(Box::new(config.model)),
            driver: config.driver,
        }
    }

    /// Run the main Model-View-Update loop.
    ///
    /// 1. Initialises the driver.
    /// 2. Sends `Msg::Init` through the model.
    /// 3. Enters the event loop: poll → update → draw → flush.
    /// 4. Stops when the model returns `Effect::End`.
    ///
    /// The driver is closed on every exit path.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.driver.init()?;
        let result = self.run_loop();
        self.driver.close();
        result
    }

    fn run_loop(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let (tx, rx): (Sender<Msg>, Receiver<Msg>) = mpsc::channel();

        self.runner.init();
        self.flush_frame()?;

        while !self.runner.should_quit() {
            self.driver.poll_msgs(&tx)?;

            while let Ok(msg) = rx.try_recv() {
                self.runner.handle_msg(msg);
                if self.runner.should_quit() {
                    break;
                }
            }

            self.flush_frame()?;
        }
        Ok(())
    }

    fn flush_frame(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if self.runner.should_quit() {
            return Ok(());
        }
        if let Some(scene) = self.runner.draw_frame() {
            self.driver.flush(scene)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::geom::Rect;
    use crate::messages::Key;
    use crate::style::Color;

    fn key(c: char) -> Msg {
        Msg::KeyDown {
            key: Key::Char(c),
            ctrl: false,
        }
    }

    /// Counts keys and every message it sees; `q` quits.
    #[derive(Default)]
    struct Counter {
        keys: Vec<char>,
        seen: usize,
    }

    impl Model for Counter {
        fn update(&mut self, msg: Msg) -> Option<Effect> {
            self.seen += 1;
            match msg {
                Msg::KeyDown { key: Key::Char(c), .. } => {
                    self.keys.push(c);
                    (c == 'q').then_some(Effect::End)
                }
                _ => None,
            }
        }

        fn draw(&self, scene: &mut Scene) {
            for _ in &self.keys {
                scene.push(Rect::from_edges(-1.0, -1.0, 0.0, 0.0), Color::WHITE);
            }
            scene.set_status(format!("{} keys / {} msgs", self.keys.len(), self.seen));
        }
    }

    #[test]
    fn runner_draws_only_when_dirty() {
        let mut runner = AppRunner::new(Box::new(Counter::default()));
        runner.init();
        assert!(runner.draw_frame().is_some());
        assert!(runner.draw_frame().is_none());
        runner.handle_msg(key('a'));
        let scene = runner.draw_frame().unwrap();
        assert_eq!(scene.quads.len(), 1);
        assert_eq!(runner.scene().status, "1 keys / 2 msgs");
    }

    #[test]
    fn resize_redraws_without_reaching_model() {
        let mut runner = AppRunner::new(Box::new(Counter::default()));
        runner.init();
        runner.draw_frame();
        runner.handle_msg(Msg::Resize);
        assert_eq!(runner.draw_frame().unwrap().status, "0 keys / 1 msgs");
    }

    #[test]
    fn end_effect_stops_runner() {
        let mut runner = AppRunner::new(Box::new(Counter::default()));
        runner.handle_msg(key('q'));
        assert!(runner.should_quit());
        runner.handle_msg(key('a'));
        assert_eq!(runner.draw_frame().unwrap().status, "1 keys / 1 msgs");
    }

    /// Replays a fixed script of messages, recording flushes.
    struct ScriptDriver {
        script: VecDeque<Msg>,
        flushed: Vec<String>,
        closed: bool,
    }

    impl ScriptDriver {
        fn new(script: impl IntoIterator<Item = Msg>) -> Self {
            Self {
                script: script.into_iter().collect(),
                flushed: Vec::new(),
                closed: false,
            }
        }
    }

    impl Driver for ScriptDriver {
        fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
            Ok(())
        }

        fn poll_msgs(&mut self, tx: &Sender<Msg>) -> Result<(), Box<dyn std::error::Error>> {
            let msg = self.script.pop_front().ok_or("script exhausted")?;
            tx.send(msg)?;
            Ok(())
        }

        fn flush(&mut self, scene: &Scene) -> Result<(), Box<dyn std::error::Error>> {
            self.flushed.push(scene.status.clone());
            Ok(())
        }

        fn close(&mut self) {
            self.closed = true;
        }
    }

    #[test]
    fn app_runs_until_end() {
        let mut app = App::new(AppConfig {
            model: Counter::default(),
            driver: ScriptDriver::new([key('a'), Msg::Resize, key('q')]),
        });
        app.run().unwrap();
        assert!(app.driver.closed);
        assert_eq!(
            app.driver.flushed,
            vec!["0 keys / 1 msgs", "1 keys / 2 msgs", "1 keys / 2 msgs"]
        );
    }

    #[test]
    fn app_closes_driver_on_error() {
        let mut app = App::new(AppConfig {
            model: Counter::default(),
            driver: ScriptDriver::new([key('a')]),
        });
        assert!(app.run().is_err());
        assert!(app.driver.closed);
    }
}
