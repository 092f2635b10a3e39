pub mod input_generator;
