pub(crate) mod builtin;
pub(crate) mod layout;
pub(crate) mod model;
