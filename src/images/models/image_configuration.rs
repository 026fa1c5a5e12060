use serde::Serialize;

use crate::images::{
    dtos::generate_image_dto::GenerateImageDto,
    enums::{
        aspect_ratio::AspectRatio,
        image_model::{ImageModel, InferenceSteps},
        output_format::OutputFormat,
    },
};

/// Everything a client needs to seed its configuration form.
#[derive(Debug, Clone, Serialize)]
pub struct ImageConfiguration {
    pub defaults: GenerateImageDto,
    pub models: Vec<ModelCapability>,
    pub aspect_ratios: Vec<&'static str>,
    pub output_formats: Vec<OutputFormatCapability>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelCapability {
    pub id: &'static str,
    pub inference_steps: InferenceSteps,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputFormatCapability {
    pub id: &'static str,
    pub mime_type: String,
}

impl ImageConfiguration {
    pub fn new() -> Self {
        let models = ImageModel::ALL
            .into_iter()
            .map(|id| ModelCapability {
                id,
                inference_steps: ImageModel::inference_steps(id),
            })
            .collect();

        let output_formats = OutputFormat::ALL
            .into_iter()
            .filter_map(|id| {
                OutputFormat::mime_type(id).map(|mime_type| OutputFormatCapability {
                    id,
                    mime_type: mime_type.to_string(),
                })
            })
            .collect();

        Self {
            defaults: GenerateImageDto::default(),
            models,
            aspect_ratios: AspectRatio::ALL.to_vec(),
            output_formats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capabilities_cover_every_supported_value() {
        let configuration = ImageConfiguration::new();

        assert_eq!(configuration.models.len(), 2);
        assert_eq!(configuration.aspect_ratios.len(), 11);
        assert_eq!(configuration.output_formats.len(), 3);

        let schnell = configuration
            .models
            .iter()
            .find(|m| m.id == ImageModel::FLUX_SCHNELL)
            .unwrap();
        assert_eq!(schnell.inference_steps.max, 4);
    }
}
