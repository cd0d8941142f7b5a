//! Interactive edit/render session.
//!
//! Reads one command per line (the key bindings of a windowed viewer,
//! spelled out as text), applies it between render passes and re-renders
//! after every successful edit.
//!
//! | command              | effect                                  |
//! |----------------------|-----------------------------------------|
//! | `d` / `a`            | move selection +x / -x                  |
//! | `s` / `w`            | move selection +y / -y                  |
//! | `e` / `q`            | move selection +z / -z                  |
//! | `c` / `z`            | grow / shrink selected sphere           |
//! | `right` / `left`     | move camera +x / -x                     |
//! | `down` / `up`        | move camera +y / -y                     |
//! | `.` / `,`            | move camera +z / -z                     |
//! | `pick X Y`           | select the primitive under a pixel      |
//! | `select N`           | select primitive N                      |
//! | `p`, `save [PATH]`   | write a screenshot                      |
//! | `render`             | re-render without editing               |
//! | `quit`, `esc`        | leave                                   |

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use glint_core::{Axis, Edit, Scene};
use glint_renderer::{mean_color, pick, render, Camera, ImageBuffer, RenderConfig};
use log::{info, warn};

use crate::config::ViewerConfig;

/// Size of one nudge, in world units.
const STEP: f32 = 1.0;

/// A discrete key-style nudge; the target primitive is filled in at apply time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Nudge {
    Selection(Axis, f32),
    Radius(f32),
    Camera(Axis, f32),
}

impl Nudge {
    fn to_edit(self, selected: usize) -> Edit {
        match self {
            Nudge::Selection(axis, step) => Edit::MovePrimitive {
                index: selected,
                axis,
                step,
            },
            Nudge::Radius(delta) => Edit::ResizeSphere {
                index: selected,
                delta,
            },
            Nudge::Camera(axis, step) => Edit::MoveCamera { axis, step },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Nudge(Nudge),
    Pick { x: u32, y: u32 },
    Select(usize),
    Screenshot(Option<PathBuf>),
    Render,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();

        let command = match (head, rest.as_slice()) {
            ("d", []) => Command::Nudge(Nudge::Selection(Axis::X, STEP)),
            ("a", []) => Command::Nudge(Nudge::Selection(Axis::X, -STEP)),
            ("s", []) => Command::Nudge(Nudge::Selection(Axis::Y, STEP)),
            ("w", []) => Command::Nudge(Nudge::Selection(Axis::Y, -STEP)),
            ("e", []) => Command::Nudge(Nudge::Selection(Axis::Z, STEP)),
            ("q", []) => Command::Nudge(Nudge::Selection(Axis::Z, -STEP)),
            ("c", []) => Command::Nudge(Nudge::Radius(STEP)),
            ("z", []) => Command::Nudge(Nudge::Radius(-STEP)),
            ("right", []) => Command::Nudge(Nudge::Camera(Axis::X, STEP)),
            ("left", []) => Command::Nudge(Nudge::Camera(Axis::X, -STEP)),
            ("down", []) => Command::Nudge(Nudge::Camera(Axis::Y, STEP)),
            ("up", []) => Command::Nudge(Nudge::Camera(Axis::Y, -STEP)),
            (".", []) => Command::Nudge(Nudge::Camera(Axis::Z, STEP)),
            (",", []) => Command::Nudge(Nudge::Camera(Axis::Z, -STEP)),
            ("pick", [x, y]) => Command::Pick {
                x: x.parse().with_context(|| format!("bad x coordinate {x:?}"))?,
                y: y.parse().with_context(|| format!("bad y coordinate {y:?}"))?,
            },
            ("select", [index]) => Command::Select(
                index
                    .parse()
                    .with_context(|| format!("bad primitive index {index:?}"))?,
            ),
            ("p", []) | ("save", []) => Command::Screenshot(None),
            ("save", [path]) => Command::Screenshot(Some(PathBuf::from(*path))),
            ("render", []) => Command::Render,
            ("quit", []) | ("exit", []) | ("esc", []) => Command::Quit,
            _ => bail!("unknown command {line:?}"),
        };
        Ok(Some(command))
    }
}

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the scene and camera; renders borrow them, edits need them mutably,
/// so an edit can never overlap a frame.
pub struct Session {
    scene: Scene,
    camera: Camera,
    config: RenderConfig,
    selected: usize,
    frame: ImageBuffer,
    frames_rendered: usize,
    output: Option<PathBuf>,
    screenshot_path: PathBuf,
}

impl Session {
    pub fn new(scene: Scene, config: &ViewerConfig) -> Self {
        let camera = config.camera();
        let frame = ImageBuffer::new(camera.image_width, camera.image_height, config.render.background);
        Self {
            scene,
            camera,
            config: config.render.clone(),
            selected: 0,
            frame,
            frames_rendered: 0,
            output: Some(config.output.clone()),
            screenshot_path: config.screenshot_path.clone(),
        }
    }

    /// Keep frames in memory only.
    #[cfg(test)]
    pub fn without_output(mut self) -> Self {
        self.output = None;
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }

    /// Render a full frame and publish it to the output file, if any.
    pub fn render_frame(&mut self) -> Result<()> {
        self.frame = render(&self.camera, &self.scene, &self.config);
        self.frames_rendered += 1;
        info!("Frame {} mean color {}", self.frames_rendered, mean_color(&self.frame));

        if let Some(path) = &self.output {
            self.frame
                .save_png(path)
                .with_context(|| format!("Failed to write frame to {}", path.display()))?;
        }
        Ok(())
    }

    /// Apply one command.
    pub fn handle(&mut self, command: Command, out: &mut impl Write) -> Result<Flow> {
        match command {
            Command::Nudge(nudge) => {
                let edit = nudge.to_edit(self.selected);
                match edit.apply(&mut self.scene, &mut self.camera.position) {
                    Ok(()) => self.render_frame()?,
                    Err(e) => warn!("Ignoring {edit:?}: {e}"),
                }
            }
            Command::Pick { x, y } => match pick(&self.camera, &self.scene, x, y) {
                Some(index) => {
                    self.selected = index;
                    writeln!(out, "{index}")?;
                }
                None => writeln!(out, "nothing at ({x}, {y})")?,
            },
            Command::Select(index) => {
                if self.scene.primitive(index).is_none() {
                    warn!("No primitive with index {index}");
                } else {
                    self.selected = index;
                    writeln!(out, "{index}")?;
                }
            }
            Command::Screenshot(path) => {
                let path = path.unwrap_or_else(|| self.screenshot_path.clone());
                self.frame
                    .save_png(&path)
                    .with_context(|| format!("Failed to save screenshot {}", path.display()))?;
                writeln!(out, "saved {}", path.display())?;
            }
            Command::Render => self.render_frame()?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Process commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<()> {
        for line in input.lines() {
            let line = line.map_err(|e| anyhow!("Failed to read command: {e}"))?;
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    warn!("{e:#}");
                    continue;
                }
            };
            if self.handle(command, &mut out)? == Flow::Quit {
                break;
            }
            out.flush()?;
        }
        Ok(())
    }
}
