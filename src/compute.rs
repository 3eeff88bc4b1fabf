//! Evaluates a single configuration without opening a window.

use std::io::Write;

use color_eyre::eyre::Error;

use crate::{
    physics::{
        Material,
        RefractionInput,
        compute_refraction,
    },
    session::{
        Render,
        control,
    },
    view::text::TextRenderer,
};

#[derive(Clone, Debug, clap::Args)]
pub struct Args {
    /// Incidence angle in degrees.
    #[clap(short, long, default_value_t = RefractionInput::DEFAULT.incidence_angle_degrees)]
    pub angle: f64,

    /// Refractive index of the upper medium.
    #[clap(long, conflicts_with = "from")]
    pub n1: Option<f64>,

    /// Refractive index of the lower medium.
    #[clap(long, conflicts_with = "to")]
    pub n2: Option<f64>,

    /// Upper medium by name, e.g. `glass`.
    #[clap(long)]
    pub from: Option<Material>,

    /// Lower medium by name, e.g. `air`.
    #[clap(long)]
    pub to: Option<Material>,

    /// Don't clamp the values to the ranges of the interactive controls.
    #[clap(long)]
    pub unclamped: bool,

    #[clap(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Args {
    pub fn input(&self) -> RefractionInput {
        let n1 = self
            .n1
            .or_else(|| self.from.map(|material| material.refractive_index()))
            .unwrap_or(RefractionInput::DEFAULT.n1);
        let n2 = self
            .n2
            .or_else(|| self.to.map(|material| material.refractive_index()))
            .unwrap_or(RefractionInput::DEFAULT.n2);

        let input = RefractionInput::new(self.angle, n1, n2);
        if self.unclamped {
            input
        }
        else {
            control::clamp_input(input)
        }
    }

    pub fn run(self) -> Result<(), Error> {
        let input = self.input();
        tracing::debug!(?input, "computing refraction");

        let result = compute_refraction(input);
        if !result.is_defined() {
            tracing::warn!(?result, "undefined configuration");
        }
        else if result.has_total_internal_reflection() {
            tracing::debug!(critical_angle = ?result.critical_angle_degrees, "total internal reflection");
        }

        let stdout = std::io::stdout().lock();
        match self.format {
            OutputFormat::Text => {
                TextRenderer::new(stdout).render(&result)?;
            }
            OutputFormat::Json => {
                let mut stdout = stdout;
                serde_json::to_writer_pretty(&mut stdout, &result)?;
                writeln!(stdout)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[clap(flatten)]
        args: Args,
    }

    fn parse(args: &[&str]) -> Args {
        Cli::try_parse_from(std::iter::once("compute").chain(args.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn it_defaults_to_the_session_defaults() {
        assert_eq!(parse(&[]).input(), RefractionInput::DEFAULT);
    }

    #[test]
    fn it_uses_materials() {
        let args = parse(&["--angle", "60", "--from", "glass", "--to", "Air"]);
        assert_eq!(args.input(), RefractionInput::new(60.0, 1.52, 1.0));
    }

    #[test]
    fn it_clamps_unless_asked_not_to() {
        let args = parse(&["--angle", "89", "--n1", "1", "--n2", "0"]);
        assert_eq!(args.input(), RefractionInput::new(85.0, 1.0, 1.0));

        let args = parse(&["--angle", "89", "--n1", "1", "--n2", "0", "--unclamped"]);
        assert_eq!(args.input(), RefractionInput::new(89.0, 1.0, 0.0));
    }

    #[test]
    fn silicon_is_clamped_to_the_control_range() {
        let args = parse(&["--from", "silicon"]);
        assert_eq!(args.input().n1, 3.0);
    }

    #[test]
    fn it_rejects_conflicting_arguments() {
        let result = Cli::try_parse_from(["compute", "--n1", "1.5", "--from", "water"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from(["compute", "--from", "unobtainium"]);
        assert!(result.is_err());
    }

    #[test]
    fn results_serialize_to_json() {
        let result = compute_refraction(RefractionInput::new(60.0, 1.52, 1.0));
        let json = serde_json::to_value(result).unwrap();

        assert_eq!(json["outcome"]["kind"], "total_internal_reflection");
        assert_eq!(json["input"]["n1"], 1.52);
        assert!(json["critical_angle_degrees"].is_number());
    }
}
