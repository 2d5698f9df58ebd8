mod writer;

pub use crate::helpers::writer::Writer;
