pub(crate) mod count;
pub(crate) mod pipeline;
pub(crate) mod reveal;
