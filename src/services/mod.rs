pub mod archiver;
pub mod csv_parser;
pub mod json_parser;
pub mod materializer;
pub mod source_locator;
