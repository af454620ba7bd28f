pub(crate) mod reaction;
