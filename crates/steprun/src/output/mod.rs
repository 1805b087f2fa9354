mod formatter;
mod plain;
mod reporter;

pub(crate) use formatter::OutputFormatter;
pub(crate) use plain::PlainTextFormatter;
pub(crate) use reporter::ConsoleReporter;
