pub mod aspect_ratio;
pub mod image_model;
pub mod output_format;
