//! Action sources standing in for a learned policy.

use crate::action::{heuristic, Key, ACTION_COUNT};
use crate::agent::Observation;
use crate::error::KeyScriptError;

pub trait Policy {
    fn act(&mut self, obs: &Observation) -> u32;
}

/// Uniformly random actions.
pub struct RandomPolicy {
    rng: fastrand::Rng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self { rng }
    }
}

impl Policy for RandomPolicy {
    #[allow(clippy::cast_possible_truncation)]
    fn act(&mut self, _obs: &Observation) -> u32 {
        self.rng.u32(0..ACTION_COUNT as u32)
    }
}

/// Heuristic mode: replays a script of key frames through [`heuristic`],
/// looping when it runs out.
///
/// Frames are separated by `,`; keys pressed together are joined by `+`;
/// an empty frame or `-` presses nothing. Example: `up,up,right+up,-`.
#[derive(Debug, Clone)]
pub struct KeyScript {
    frames: Vec<Vec<Key>>,
    cursor: usize,
}

impl KeyScript {
    /// # Errors
    ///
    /// [`KeyScriptError::UnknownKey`] for a key name that is not recognised.
    pub fn parse(script: &str) -> Result<Self, KeyScriptError> {
        let mut frames = Vec::new();
        for (i, frame) in script.split(',').enumerate() {
            let frame = frame.trim();
            if frame.is_empty() || frame == "-" {
                frames.push(Vec::new());
                continue;
            }
            let keys = frame
                .split('+')
                .map(|name| {
                    Key::parse(name).ok_or_else(|| KeyScriptError::UnknownKey {
                        frame: i,
                        key: name.trim().to_owned(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            frames.push(keys);
        }
        Ok(Self { frames, cursor: 0 })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl Policy for KeyScript {
    fn act(&mut self, _obs: &Observation) -> u32 {
        let Some(frame) = self.frames.get(self.cursor) else {
            return heuristic(&[]);
        };
        self.cursor = (self.cursor + 1) % self.frames.len();
        heuristic(frame)
    }
}
