pub mod material;
pub mod refraction;

pub use self::{
    material::Material,
    refraction::{
        RefractionInput,
        RefractionOutcome,
        RefractionResult,
        compute_refraction,
    },
};
