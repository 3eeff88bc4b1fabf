use std::io::{
    self,
    Write,
};

use crate::{
    physics::RefractionResult,
    session::Render,
    view::panels::{
        CalculationPanel,
        ResultPanel,
    },
};

/// Writes the calculation and result panels as plain text.
#[derive(Debug)]
pub struct TextRenderer<W> {
    writer: W,
}

impl<W> TextRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W> Render for TextRenderer<W>
where
    W: Write,
{
    type Error = io::Error;

    fn render(&mut self, result: &RefractionResult) -> Result<(), Self::Error> {
        let calculation = CalculationPanel::new(result);
        let summary = ResultPanel::new(result);

        writeln!(self.writer, "Calculation")?;
        writeln!(self.writer, "  Snell's law: {}", calculation.formula)?;
        writeln!(self.writer, "  Given: {}", calculation.given)?;
        for step in &calculation.steps {
            writeln!(self.writer, "  {step}")?;
        }

        writeln!(self.writer)?;
        writeln!(self.writer, "Result")?;
        writeln!(self.writer, "  {}", summary.headline)?;
        for detail in &summary.details {
            writeln!(self.writer, "  {detail}")?;
        }

        writeln!(self.writer)?;
        writeln!(self.writer, "Physics rules")?;
        for rule in summary.rules {
            writeln!(self.writer, "  • {rule}")?;
        }

        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{
        RefractionInput,
        compute_refraction,
    };

    fn render(input: RefractionInput) -> String {
        let mut buffer = vec![];
        TextRenderer::new(&mut buffer)
            .render(&compute_refraction(input))
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn it_writes_all_panels() {
        let text = render(RefractionInput::DEFAULT);

        assert!(text.starts_with("Calculation\n"));
        assert!(text.contains("  Given: n₁ = 1.00   n₂ = 1.33   θ₁ = 30°\n"));
        assert!(text.contains("  sin(θ₂) = 0.3759\n"));
        assert!(text.contains("Result\n  Refraction angle θ₂ = 22.1°\n"));
        assert!(text.contains("  • Critical angle: θc = arcsin(n₂ / n₁)\n"));
    }

    #[test]
    fn it_writes_undefined_configurations() {
        let text = render(RefractionInput::new(30.0, 1.0, 0.0));
        assert!(text.contains("Result\n  Undefined configuration\n"));
    }
}
