use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};

use crate::assets::decode::decode_image;
use crate::assets::source::SourceImage;
use crate::captions::CaptionPair;
use crate::effects::random::SeededRandom;
use crate::effects::settings::GlitchSettings;
use crate::foundation::error::{MemeError, MemeResult};
use crate::render::frame::Frame;
use crate::render::pipeline::Renderer;

/// Image half of a [`RenderRequest`].
#[derive(Clone, Debug, Default)]
pub enum ImageInput {
    /// Render the placeholder.
    #[default]
    None,
    /// Encoded bytes, decoded on the worker thread.
    Encoded(Vec<u8>),
    /// Already decoded.
    Decoded(SourceImage),
}

/// Everything one render depends on.
#[derive(Clone, Debug, Default)]
pub struct RenderRequest {
    /// Source image, if any.
    pub image: ImageInput,
    /// Caption text.
    pub captions: CaptionPair,
    /// Glitch intensities.
    pub settings: GlitchSettings,
    /// Seed for the stochastic stages.
    pub seed: u64,
}

/// How a submitted render ended.
#[derive(Clone, Debug)]
pub enum RenderOutcome {
    /// This render was the newest when it finished and is now [`RenderDriver::latest`].
    Committed(Arc<Frame>),
    /// A newer submission arrived first; the result was dropped.
    Superseded,
}

impl RenderOutcome {
    /// The committed frame, if any.
    pub fn frame(&self) -> Option<&Arc<Frame>> {
        match self {
            RenderOutcome::Committed(f) => Some(f),
            RenderOutcome::Superseded => None,
        }
    }
}

/// Handle to a render running on a worker thread.
#[derive(Debug)]
pub struct PendingRender {
    generation: u64,
    handle: JoinHandle<MemeResult<RenderOutcome>>,
}

impl PendingRender {
    /// Generation number assigned at submission.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Block until the worker finishes.
    pub fn wait(self) -> MemeResult<RenderOutcome> {
        self.handle
            .join()
            .map_err(|_| MemeError::render("render worker panicked"))?
    }
}

/// Runs renders off the calling thread with last-write-wins semantics.
///
/// Every [`submit`](Self::submit) bumps a generation counter. A worker only publishes its frame
/// if its generation is still the newest when it takes the slot lock, so a slow decode can never
/// overwrite a frame produced for a later request. Readers of [`latest`](Self::latest) only ever
/// see complete frames.
#[derive(Debug)]
pub struct RenderDriver {
    renderer: Arc<Mutex<Renderer>>,
    generation: Arc<AtomicU64>,
    latest: Arc<Mutex<Option<Arc<Frame>>>>,
}

impl RenderDriver {
    /// Driver rendering with `renderer`.
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer: Arc::new(Mutex::new(renderer)),
            generation: Arc::new(AtomicU64::new(0)),
            latest: Arc::new(Mutex::new(None)),
        }
    }

    /// Generation of the most recent submission (0 before any).
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// The most recently committed frame.
    pub fn latest(&self) -> Option<Arc<Frame>> {
        lock_or_recover(&self.latest, "latest frame").clone()
    }

    /// Start rendering `request` on a new worker thread.
    pub fn submit(&self, request: RenderRequest) -> PendingRender {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let renderer = Arc::clone(&self.renderer);
        let current = Arc::clone(&self.generation);
        let latest = Arc::clone(&self.latest);

        let handle = thread::spawn(move || {
            let span = tracing::debug_span!("render_worker", generation);
            let _enter = span.enter();

            let source = match request.image {
                ImageInput::None => Ok(None),
                ImageInput::Decoded(img) => Ok(Some(img)),
                ImageInput::Encoded(bytes) => decode_image(&bytes).map(Some),
            };
            let frame = {
                let mut r = lock_or_recover(&renderer, "renderer");
                // A stale request is superseded even when its decode failed.
                if current.load(Ordering::SeqCst) != generation {
                    tracing::debug!("superseded before render");
                    return Ok(RenderOutcome::Superseded);
                }
                let source = source?;
                r.render_new(
                    source.as_ref(),
                    &request.captions,
                    &request.settings,
                    &mut SeededRandom::new(request.seed),
                )?
            };

            let mut slot = lock_or_recover(&latest, "latest frame");
            if current.load(Ordering::SeqCst) != generation {
                tracing::debug!("superseded after render");
                return Ok(RenderOutcome::Superseded);
            }
            let frame = Arc::new(frame);
            *slot = Some(Arc::clone(&frame));
            tracing::debug!("committed");
            Ok(RenderOutcome::Committed(frame))
        });

        PendingRender { generation, handle }
    }
}

fn lock_or_recover<'a, T>(m: &'a Mutex<T>, what: &str) -> MutexGuard<'a, T> {
    match m.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("{what} lock poisoned; continuing with recovered state");
            poisoned.into_inner()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/driver.rs"]
mod tests;
