//! Interpreter that converts a token sequence into drawable [`Segment`]s.
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a
//! [`TurtleConfig`], then call [`TurtleInterpreter::interpret`] with the
//! tokens produced by [`crate::tokenize`].

use crate::token::Token;
use crate::turtle::{Segment, TurtleConfig, TurtleState};
use glam::Vec3;
use thiserror::Error;

/// Interpretation failure.
///
/// Everything except a structural stack underflow is recovered locally, so
/// this is the only way [`TurtleInterpreter::interpret`] fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InterpretError {
    /// A `]` was encountered with no matching `[` on the branch stack.
    ///
    /// Silently ignoring this would desynchronize every subsequent segment
    /// position, so the whole run fails instead. `index` is the offending
    /// token's position in the input sequence.
    #[error("branch pop at token {index} with no matching push")]
    UnbalancedPop {
        /// Index of the offending `]` token.
        index: usize,
    },
}

/// Interprets L-System tokens as turtle-graphics instructions.
pub struct TurtleInterpreter {
    config: TurtleConfig,
}

impl TurtleInterpreter {
    /// Creates a new interpreter with the given configuration.
    pub fn new(config: TurtleConfig) -> Self {
        Self { config }
    }

    /// Walks `tokens` in order and returns the emitted segments.
    ///
    /// The turtle starts at the world origin with the configured heading,
    /// length, width, and default material. Per token (`p` = the token's
    /// parameter, `cfg` = the config):
    ///
    /// | Symbol | Effect |
    /// |---|---|
    /// | `F` | advance by `p` or current length, emitting a segment |
    /// | `+` / `-` | yaw by ±(`p` or `cfg.angle`) degrees |
    /// | `&` / `^` | pitch by ±(`p` or `cfg.angle`) degrees |
    /// | `/` / `\` | roll by ±(`p` or `cfg.angle`) degrees |
    /// | `!` / `?` | multiply / divide width by `cfg.width_scale` |
    /// | `"` / `_` | multiply / divide length by `cfg.length_scale` |
    /// | `[` / `]` | push / pop the turtle state on the branch stack |
    /// | `M` | select `cfg.materials[floor(p)]`; out-of-range or absent `p` is a no-op |
    ///
    /// Any other symbol is ignored, preserving forward compatibility with
    /// grammar symbols that carry no turtle meaning. State left on the
    /// branch stack when the tokens run out is discarded.
    ///
    /// # Errors
    ///
    /// [`InterpretError::UnbalancedPop`] if a `]` finds the stack empty.
    pub fn interpret(&self, tokens: &[Token]) -> Result<Vec<Segment>, InterpretError> {
        let cfg = &self.config;
        let mut segments = Vec::new();
        let mut stack: Vec<TurtleState> = Vec::new();

        let mut turtle = TurtleState {
            position: Vec3::ZERO,
            heading: cfg.initial_heading.normalize_or(Vec3::Y),
            length: cfg.initial_length,
            width: cfg.initial_width,
            material: cfg.default_material,
        };

        for (index, token) in tokens.iter().enumerate() {
            let p = token.parameter;
            let angle = p.unwrap_or(cfg.angle);

            match token.symbol {
                'F' => {
                    let step = p.unwrap_or(turtle.length);
                    let end = turtle.position + turtle.heading * step;
                    segments.push(Segment {
                        start: turtle.position,
                        end,
                        width: turtle.width,
                        material: turtle.material,
                    });
                    turtle.position = end;
                }

                '+' => turtle.yaw(angle),
                '-' => turtle.yaw(-angle),
                '&' => turtle.pitch(angle),
                '^' => turtle.pitch(-angle),
                '/' => turtle.roll(angle),
                '\\' => turtle.roll(-angle),

                '!' => turtle.width *= cfg.width_scale,
                '?' => turtle.width /= cfg.width_scale,
                '"' => turtle.length *= cfg.length_scale,
                '_' => turtle.length /= cfg.length_scale,

                '[' => stack.push(turtle),
                ']' => {
                    turtle = stack
                        .pop()
                        .ok_or(InterpretError::UnbalancedPop { index })?;
                }

                'M' => {
                    if let Some(value) = p {
                        let idx = value.floor();
                        // NaN and negatives fail the range check and keep
                        // the current material.
                        if idx >= 0.0 && (idx as usize) < cfg.materials.len() {
                            turtle.material = Some(cfg.materials[idx as usize]);
                        }
                    }
                }

                _ => {}
            }
        }

        Ok(segments)
    }
}
