//! In-process model of the state machine embedded in the generated page.
//!
//! The script emitted by [`crate::template::script`] interpolates the
//! constants below, so this model and the browser-side code move together.
//! A [`Session`] plays the role of the page's module-scoped variables and is
//! driven by the same two events the page reacts to.

use std::f64::consts::TAU;

use rand::Rng;

use crate::page::{ButtonAnimation, PageConfig};

/// Multiplier applied to the affirmative button's scale on every animation frame.
pub const GROWTH_FACTOR: f64 = 1.5;
/// Scale at which the growth animation stops and the success scene is shown.
pub const GROWTH_THRESHOLD: f64 = 100.0;
/// Hard stop for the growth loop. 1.5^12 already exceeds the threshold.
pub const MAX_GROWTH_FRAMES: u32 = 64;
/// Scale added to the affirmative button per refusal in grow mode.
pub const GROW_STEP: f64 = 0.3;
/// Font size in rem is `1 + scale * FONT_SCALE_PER_UNIT`.
pub const FONT_SCALE_PER_UNIT: f64 = 0.2;
/// Maximum offset along each axis as a fraction of the container size.
pub const RANDOM_SPREAD: f64 = 0.4;
/// Delay between fading the main scene and removing it.
pub const HIDE_DELAY_MS: u64 = 500;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

/// Pixel offset from the container's center.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

pub trait OffsetSampler {
    fn sample(&mut self, container: ContainerSize) -> Offset;
}

/// Samples an angle over the full circle and an independent distance per axis
/// up to [`RANDOM_SPREAD`] of the container's width and height.
pub struct RandomOffsets<R> {
    rng: R,
}

impl RandomOffsets<rand::rngs::ThreadRng> {
    pub fn thread() -> Self {
        Self { rng: rand::rng() }
    }
}

impl<R: Rng> RandomOffsets<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> OffsetSampler for RandomOffsets<R> {
    fn sample(&mut self, container: ContainerSize) -> Offset {
        let angle = self.rng.random::<f64>() * TAU;
        let distance_x = self.rng.random::<f64>() * container.width * RANDOM_SPREAD;
        let distance_y = self.rng.random::<f64>() * container.height * RANDOM_SPREAD;
        Offset {
            x: angle.cos() * distance_x,
            y: angle.sin() * distance_y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Static, in the button row's normal flow.
    InFlow,
    /// Absolutely positioned, anchored at the container's center and shifted
    /// by `offset`.
    Anchored { offset: Offset },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scene {
    Main,
    /// Success scene visible, main scene fading out.
    Success,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NoClickEffect {
    Moved { first_move: bool, offset: Offset },
    YesGrew { scale: f64, font_rem: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct NoClick {
    /// The newly displayed phrase, `None` when the phrase list is empty.
    pub phrase: Option<String>,
    pub effect: NoClickEffect,
}

#[derive(Debug)]
pub enum YesClick {
    Started(GrowthAnimation),
    Ignored,
}

/// Frames of the affirmative button's final growth. Each item is the scale
/// applied on that frame.
#[derive(Clone, Debug)]
pub struct GrowthAnimation {
    scale: f64,
    frames: u32,
    done: bool,
}

impl GrowthAnimation {
    fn starting_at(scale: f64) -> Self {
        Self {
            scale,
            frames: 0,
            done: false,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Iterator for GrowthAnimation {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done {
            return None;
        }
        self.scale *= GROWTH_FACTOR;
        self.frames += 1;
        if self.scale >= GROWTH_THRESHOLD || self.frames >= MAX_GROWTH_FRAMES {
            self.done = true;
        }
        Some(self.scale)
    }
}

/// What happens once the growth animation ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneTransition {
    pub final_scale: f64,
    pub frames: u32,
    pub main_opacity: f64,
    pub hide_after_ms: u64,
}

#[derive(Clone, Debug)]
pub struct Session {
    phrases: Vec<String>,
    animation: ButtonAnimation,
    phrase_index: Option<usize>,
    no_text: String,
    yes_scale: f64,
    yes_font_rem: Option<f64>,
    placement: Placement,
    transitioning: bool,
    scene: Scene,
}

impl Session {
    pub fn new(phrases: Vec<String>, animation: ButtonAnimation, no_text: impl Into<String>) -> Self {
        Self {
            phrases,
            animation,
            phrase_index: None,
            no_text: no_text.into(),
            yes_scale: 1.0,
            yes_font_rem: None,
            placement: Placement::InFlow,
            transitioning: false,
            scene: Scene::Main,
        }
    }

    pub fn for_page(page: &PageConfig) -> Self {
        Self::new(
            page.no_button_phrases.clone(),
            page.button_animation,
            page.no_button_text.clone(),
        )
    }

    pub fn no_text(&self) -> &str {
        &self.no_text
    }

    pub fn yes_scale(&self) -> f64 {
        self.yes_scale
    }

    pub fn yes_font_rem(&self) -> Option<f64> {
        self.yes_font_rem
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    /// Handle a click on the negative button. Returns `None` once the
    /// affirmative transition has started.
    pub fn click_no<S: OffsetSampler>(
        &mut self,
        sampler: &mut S,
        container: ContainerSize,
    ) -> Option<NoClick> {
        if self.transitioning {
            return None;
        }

        let phrase = self.advance_phrase();

        let effect = match self.animation {
            ButtonAnimation::Random => {
                let first_move = self.placement == Placement::InFlow;
                let offset = sampler.sample(container);
                self.placement = Placement::Anchored { offset };
                NoClickEffect::Moved { first_move, offset }
            }
            ButtonAnimation::Grow => {
                self.yes_scale += GROW_STEP;
                let font_rem = 1.0 + self.yes_scale * FONT_SCALE_PER_UNIT;
                self.yes_font_rem = Some(font_rem);
                NoClickEffect::YesGrew {
                    scale: self.yes_scale,
                    font_rem,
                }
            }
        };

        Some(NoClick { phrase, effect })
    }

    /// Handle a click on the affirmative button. Only the first click starts
    /// the growth animation.
    pub fn click_yes(&mut self) -> YesClick {
        if self.transitioning {
            return YesClick::Ignored;
        }
        self.transitioning = true;
        YesClick::Started(GrowthAnimation::starting_at(self.yes_scale))
    }

    /// Drain any remaining frames and switch to the success scene.
    pub fn finish(&mut self, mut animation: GrowthAnimation) -> SceneTransition {
        for _ in animation.by_ref() {}
        self.yes_scale = animation.scale();
        self.scene = Scene::Success;
        SceneTransition {
            final_scale: animation.scale(),
            frames: animation.frames(),
            main_opacity: 0.0,
            hide_after_ms: HIDE_DELAY_MS,
        }
    }

    fn advance_phrase(&mut self) -> Option<String> {
        if self.phrases.is_empty() {
            return None;
        }
        let next = match self.phrase_index {
            Some(index) => (index + 1) % self.phrases.len(),
            None => 0,
        };
        self.phrase_index = Some(next);
        self.no_text = self.phrases[next].clone();
        Some(self.no_text.clone())
    }
}
