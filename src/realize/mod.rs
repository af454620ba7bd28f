pub(crate) mod adapter;
