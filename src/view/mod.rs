//! What the renderer shows for a refraction result.
//!
//! The view models here are rebuilt from scratch for every result, so the
//! displayed state never mixes values of different results.

pub mod diagram;
pub mod panels;
pub mod text;

use std::convert::Infallible;

use crate::{
    physics::RefractionResult,
    session::Render,
    view::{
        diagram::{
            DiagramConfig,
            RayDiagram,
        },
        panels::{
            CalculationPanel,
            ResultPanel,
        },
    },
};

/// The three views of one result.
#[derive(Clone, Debug, PartialEq)]
pub struct Views {
    pub result: RefractionResult,

    /// `None` if the result is undefined.
    pub diagram: Option<RayDiagram>,

    pub calculation: CalculationPanel,
    pub summary: ResultPanel,
}

impl Views {
    pub fn new(result: &RefractionResult, diagram_config: &DiagramConfig) -> Self {
        Self {
            result: *result,
            diagram: RayDiagram::new(result, diagram_config),
            calculation: CalculationPanel::new(result),
            summary: ResultPanel::new(result),
        }
    }
}

/// Keeps the views of the latest result for an immediate mode UI to paint.
#[derive(Debug)]
pub struct ViewModel {
    diagram_config: DiagramConfig,
    views: Option<Views>,
    render_count: u64,
}

impl ViewModel {
    pub fn new(diagram_config: DiagramConfig) -> Self {
        Self {
            diagram_config,
            views: None,
            render_count: 0,
        }
    }

    pub fn views(&self) -> Option<&Views> {
        self.views.as_ref()
    }

}

impl Render for ViewModel {
    type Error = Infallible;

    fn render(&mut self, result: &RefractionResult) -> Result<(), Self::Error> {
        self.views = Some(Views::new(result, &self.diagram_config));
        self.render_count += 1;
        tracing::trace!(render_count = self.render_count);
        Ok(())
    }
}
