pub mod csv_writer;
pub mod json_writer;
pub mod stdout;

pub use csv_writer::Csv;
pub use json_writer::Json;
pub use stdout::Stdout;

use crate::domain::model::OutputFormat;
use crate::domain::ports::Renderer;

pub fn get_writer(format: OutputFormat) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Stdout => Box::new(Stdout::new()),
        OutputFormat::Csv => Box::new(Csv::new()),
        OutputFormat::Json => Box::new(Json::new()),
    }
}
