pub mod configuration_form;
pub mod image_configuration;
