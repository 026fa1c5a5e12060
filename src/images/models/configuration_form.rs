use tokio::sync::watch;
use validator::{Validate, ValidationErrors};

use crate::images::{dtos::generate_image_dto::GenerateImageDto, enums::image_model::ImageModel};

/// Form state for the image-generation configuration.
///
/// Field edits go through setters so the one cross-field rule holds: picking
/// a model overwrites `num_inference_steps` with that model's default. The
/// rule is one-way; editing the steps never touches the model.
///
/// Observers subscribe through [`ConfigurationForm::watch`] and unsubscribe
/// by dropping the receiver, after which no further updates reach them.
pub struct ConfigurationForm {
    values: GenerateImageDto,
    changes: watch::Sender<GenerateImageDto>,
}

impl ConfigurationForm {
    pub fn new() -> Self {
        let values = GenerateImageDto::default();
        let (changes, _) = watch::channel(values.clone());

        Self { values, changes }
    }

    pub fn values(&self) -> &GenerateImageDto {
        &self.values
    }

    pub fn watch(&self) -> watch::Receiver<GenerateImageDto> {
        self.changes.subscribe()
    }

    pub fn watcher_count(&self) -> usize {
        self.changes.receiver_count()
    }

    pub fn set_model(&mut self, model: &str) {
        self.values.model = model.to_string();
        self.values.num_inference_steps = ImageModel::inference_steps(model).default;
        self.notify();
    }

    pub fn set_prompt(&mut self, prompt: &str) {
        self.values.prompt = prompt.to_string();
        self.notify();
    }

    pub fn set_guidance(&mut self, guidance: f32) {
        self.values.guidance = guidance;
        self.notify();
    }

    pub fn set_num_outputs(&mut self, num_outputs: u8) {
        self.values.num_outputs = num_outputs;
        self.notify();
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: &str) {
        self.values.aspect_ratio = aspect_ratio.to_string();
        self.notify();
    }

    pub fn set_output_format(&mut self, output_format: &str) {
        self.values.output_format = output_format.to_string();
        self.notify();
    }

    pub fn set_output_quality(&mut self, output_quality: u8) {
        self.values.output_quality = output_quality;
        self.notify();
    }

    pub fn set_num_inference_steps(&mut self, num_inference_steps: u8) {
        self.values.num_inference_steps = num_inference_steps;
        self.notify();
    }

    /// Sanitizes and validates the current values, yielding the record to
    /// hand to the generator. Field errors block submission entirely.
    pub fn submit(&self) -> Result<GenerateImageDto, ValidationErrors> {
        let dto = self.values.sanitized();
        dto.validate()?;

        Ok(dto)
    }

    fn notify(&self) {
        self.changes.send_replace(self.values.clone());
    }
}

impl Default for ConfigurationForm {
    fn default() -> Self {
        Self::new()
    }
}
