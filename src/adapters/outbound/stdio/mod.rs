/// Standard stream adapters for the report input and output
mod stdin_reader;
mod stdout_presenter;

pub use stdin_reader::StdinReader;
pub use stdout_presenter::StdoutPresenter;
