use serde::Serialize;

#[non_exhaustive]
pub struct ImageModel;

/// Inference-step bounds a model permits. The fast schnell variant is
/// distilled for a handful of denoising steps; pushing it higher only
/// burns time without improving the sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InferenceSteps {
    pub default: u8,
    pub max: u8,
}

impl ImageModel {
    pub const FLUX_DEV: &str = "black-forest-labs/flux-dev";
    pub const FLUX_SCHNELL: &str = "black-forest-labs/flux-schnell";

    pub const ALL: [&str; 2] = [Self::FLUX_DEV, Self::FLUX_SCHNELL];

    pub fn is_supported(model: &str) -> bool {
        Self::ALL.contains(&model)
    }

    pub fn inference_steps(model: &str) -> InferenceSteps {
        match model {
            Self::FLUX_SCHNELL => InferenceSteps { default: 4, max: 4 },
            _ => InferenceSteps {
                default: 28,
                max: 50,
            },
        }
    }
}
