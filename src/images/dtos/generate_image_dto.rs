use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::images::enums::{
    aspect_ratio::AspectRatio, image_model::ImageModel, output_format::OutputFormat,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_steps_within_model_ceiling"))]
pub struct GenerateImageDto {
    #[validate(custom = "validate_model")]
    pub model: String,
    #[validate(length(
        min = 1,
        max = 1000,
        message = "prompt must be between 1 and 1000 characters."
    ))]
    pub prompt: String,
    #[validate(range(min = 0.0, max = 10.0, message = "guidance must be between 0 and 10."))]
    pub guidance: f32,
    #[validate(range(
        min = 1,
        max = 4,
        message = "number of outputs must be between 1 and 4."
    ))]
    pub num_outputs: u8,
    #[validate(custom = "validate_aspect_ratio")]
    pub aspect_ratio: String,
    #[validate(custom = "validate_output_format")]
    pub output_format: String,
    #[validate(range(
        min = 1,
        max = 100,
        message = "output quality must be between 1 and 100."
    ))]
    pub output_quality: u8,
    #[validate(range(
        min = 1,
        max = 50,
        message = "number of inference steps must be between 1 and 50."
    ))]
    pub num_inference_steps: u8,
}

impl GenerateImageDto {
    pub fn sanitized(&self) -> Self {
        return Self {
            prompt: self.prompt.trim().replace('\n', "").replace('\r', ""),
            ..self.clone()
        };
    }
}

// Mirrors the form defaults: the fast model with its low step count.
impl Default for GenerateImageDto {
    fn default() -> Self {
        return Self {
            model: ImageModel::FLUX_SCHNELL.to_string(),
            prompt: String::new(),
            guidance: 3.5,
            num_outputs: 1,
            aspect_ratio: "1:1".to_string(),
            output_format: OutputFormat::JPG.to_string(),
            output_quality: 80,
            num_inference_steps: ImageModel::inference_steps(ImageModel::FLUX_SCHNELL).default,
        };
    }
}

fn validate_model(model: &str) -> Result<(), ValidationError> {
    if ImageModel::is_supported(model) {
        return Ok(());
    }

    let mut error = ValidationError::new("model");
    error.message = Some("model is not supported.".into());
    Err(error)
}

fn validate_aspect_ratio(aspect_ratio: &str) -> Result<(), ValidationError> {
    if AspectRatio::is_supported(aspect_ratio) {
        return Ok(());
    }

    let mut error = ValidationError::new("aspect_ratio");
    error.message = Some("aspect ratio is not supported.".into());
    Err(error)
}

fn validate_output_format(output_format: &str) -> Result<(), ValidationError> {
    if OutputFormat::is_supported(output_format) {
        return Ok(());
    }

    let mut error = ValidationError::new("output_format");
    error.message = Some("output format must be webp, jpg or png.".into());
    Err(error)
}

fn validate_steps_within_model_ceiling(dto: &GenerateImageDto) -> Result<(), ValidationError> {
    let steps = ImageModel::inference_steps(&dto.model);

    if dto.num_inference_steps <= steps.max {
        return Ok(());
    }

    let mut error = ValidationError::new("num_inference_steps");
    error.message = Some(
        format!(
            "number of inference steps must be at most {} for {}.",
            steps.max, dto.model
        )
        .into(),
    );
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> GenerateImageDto {
        GenerateImageDto {
            prompt: "an astronaut riding a horse".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn default_values_mirror_the_form() {
        let dto = GenerateImageDto::default();

        assert_eq!(dto.model, ImageModel::FLUX_SCHNELL);
        assert_eq!(dto.guidance, 3.5);
        assert_eq!(dto.num_outputs, 1);
        assert_eq!(dto.aspect_ratio, "1:1");
        assert_eq!(dto.output_format, "jpg");
        assert_eq!(dto.output_quality, 80);
        assert_eq!(dto.num_inference_steps, 4);
    }

    #[test]
    fn valid_dto_passes_validation() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn empty_prompt_blocks_validation() {
        let dto = GenerateImageDto {
            prompt: String::new(),
            ..valid_dto()
        };

        let message = dto.validate().unwrap_err().to_string();
        assert!(message.contains("prompt must be between 1 and 1000 characters."));
    }

    #[test]
    fn unknown_model_blocks_validation() {
        let dto = GenerateImageDto {
            model: "stability-ai/sdxl".to_string(),
            ..valid_dto()
        };

        let message = dto.validate().unwrap_err().to_string();
        assert!(message.contains("model is not supported."));
    }

    #[test]
    fn num_outputs_out_of_range_blocks_validation() {
        for num_outputs in [0, 5] {
            let dto = GenerateImageDto {
                num_outputs,
                ..valid_dto()
            };

            let message = dto.validate().unwrap_err().to_string();
            assert!(message.contains("number of outputs must be between 1 and 4."));
        }
    }

    #[test]
    fn output_quality_out_of_range_blocks_validation() {
        for output_quality in [0, 101] {
            let dto = GenerateImageDto {
                output_quality,
                ..valid_dto()
            };

            let message = dto.validate().unwrap_err().to_string();
            assert!(message.contains("output quality must be between 1 and 100."));
        }
    }

    #[test]
    fn unsupported_aspect_ratio_blocks_validation() {
        let dto = GenerateImageDto {
            aspect_ratio: "7:3".to_string(),
            ..valid_dto()
        };

        assert!(dto.validate().is_err());
    }

    #[test]
    fn unsupported_output_format_blocks_validation() {
        let dto = GenerateImageDto {
            output_format: "gif".to_string(),
            ..valid_dto()
        };

        let message = dto.validate().unwrap_err().to_string();
        assert!(message.contains("output format must be webp, jpg or png."));
    }

    #[test]
    fn steps_above_model_ceiling_block_validation() {
        let dto = GenerateImageDto {
            num_inference_steps: 30,
            ..valid_dto()
        };

        // 30 is within 1..=50 but above the schnell ceiling of 4.
        let message = dto.validate().unwrap_err().to_string();
        assert!(message.contains("number of inference steps must be at most 4"));
    }

    #[test]
    fn steps_within_dev_ceiling_pass_validation() {
        let dto = GenerateImageDto {
            model: ImageModel::FLUX_DEV.to_string(),
            num_inference_steps: 50,
            ..valid_dto()
        };

        assert!(dto.validate().is_ok());
    }

    #[test]
    fn whitespace_only_prompt_fails_after_sanitization() {
        let dto = GenerateImageDto {
            prompt: "   \n".to_string(),
            ..valid_dto()
        };

        // The raw value passes the length check but sanitizes to empty.
        assert!(dto.validate().is_ok());
        assert_eq!(dto.sanitized().prompt, "");
        assert!(dto.sanitized().validate().is_err());
    }

    #[test]
    fn sanitized_strips_newlines_from_prompt() {
        let dto = GenerateImageDto {
            prompt: "  a quiet\nharbor\r at dawn  ".to_string(),
            ..valid_dto()
        };

        assert_eq!(dto.sanitized().prompt, "a quietharbor at dawn");
    }
}
