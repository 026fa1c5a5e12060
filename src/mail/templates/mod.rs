pub mod reset_password_template;
