pub mod count_validator;
