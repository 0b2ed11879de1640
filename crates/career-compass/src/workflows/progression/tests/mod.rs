mod builder;
mod common;
mod narrative;
mod report;
