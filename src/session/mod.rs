//! Interactive session: owns the live inputs and keeps the views in sync.
//!
//! Every state transition recomputes the refraction exactly once and hands
//! the result to the renderer exactly once.

pub mod control;

use crate::{
    physics::{
        RefractionInput,
        RefractionResult,
        compute_refraction,
    },
    session::control::QuickPreset,
};

/// Something that displays refraction results.
pub trait Render {
    type Error;

    fn render(&mut self, result: &RefractionResult) -> Result<(), Self::Error>;
}

impl<T> Render for &mut T
where
    T: Render,
{
    type Error = T::Error;

    fn render(&mut self, result: &RefractionResult) -> Result<(), Self::Error> {
        (**self).render(result)
    }
}

/// One discrete user action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionEvent {
    SetIncidenceAngle(f64),
    SetN1(f64),
    SetN2(f64),
    QuickPreset(QuickPreset),
    Reset,
}

/// The live input values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionState {
    pub input: RefractionInput,
}

#[derive(Debug)]
pub struct SessionController<R> {
    state: SessionState,
    renderer: R,
}

impl<R> SessionController<R>
where
    R: Render,
{
    /// Creates a session with the default inputs and renders it once.
    pub fn new(renderer: R) -> Result<Self, R::Error> {
        let state = SessionState::default();
        let mut renderer = renderer;
        renderer.render(&compute_refraction(state.input))?;

        Ok(Self { state, renderer })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn handle(&mut self, event: SessionEvent) -> Result<(), R::Error> {
        tracing::debug!(?event, "session event");

        match event {
            SessionEvent::SetIncidenceAngle(value) => self.set_incidence_angle(value),
            SessionEvent::SetN1(value) => self.set_n1(value),
            SessionEvent::SetN2(value) => self.set_n2(value),
            SessionEvent::QuickPreset(preset) => self.apply_quick_preset(preset),
            SessionEvent::Reset => self.reset(),
        }
    }

    pub fn set_incidence_angle(&mut self, value: f64) -> Result<(), R::Error> {
        self.transition(|input| {
            input.incidence_angle_degrees =
                control::INCIDENCE_ANGLE.clamp_or(value, input.incidence_angle_degrees);
        })
    }

    pub fn set_n1(&mut self, value: f64) -> Result<(), R::Error> {
        self.transition(|input| {
            input.n1 = control::N1.clamp_or(value, input.n1);
        })
    }

    pub fn set_n2(&mut self, value: f64) -> Result<(), R::Error> {
        self.transition(|input| {
            input.n2 = control::N2.clamp_or(value, input.n2);
        })
    }

    /// Sets both indices in a single transition.
    pub fn apply_preset(&mut self, n1: f64, n2: f64) -> Result<(), R::Error> {
        self.transition(|input| {
            input.n1 = control::N1.clamp_or(n1, input.n1);
            input.n2 = control::N2.clamp_or(n2, input.n2);
        })
    }

    pub fn apply_quick_preset(&mut self, preset: QuickPreset) -> Result<(), R::Error> {
        let (n1, n2) = preset.indices();
        self.apply_preset(n1, n2)
    }

    pub fn reset(&mut self) -> Result<(), R::Error> {
        self.transition(|input| {
            *input = RefractionInput::DEFAULT;
        })
    }

    fn transition(&mut self, update: impl FnOnce(&mut RefractionInput)) -> Result<(), R::Error> {
        update(&mut self.state.input);

        let result = compute_refraction(self.state.input);
        tracing::trace!(?result);

        self.renderer.render(&result)
    }
}
