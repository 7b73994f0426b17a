pub(crate) mod manifest;
pub(crate) mod size_table;
pub(crate) mod writer;
