use std::path::PathBuf;

use crate::order::Order;

#[derive(Clone)]
pub(crate) struct Config {
    tmp: PathBuf,
    tmp_prefix: String,
    tmp_suffix: String,
    key_column: String,
    order: Order,
    batch_size: usize,
}

impl Config {
    pub(crate) fn new(
        tmp: PathBuf,
        tmp_prefix: String,
        tmp_suffix: String,
        key_column: String,
        order: Order,
        batch_size: usize,
    ) -> Config {
        Config {
            tmp,
            tmp_prefix,
            tmp_suffix,
            key_column,
            order,
            batch_size,
        }
    }

    pub(crate) fn tmp(&self) -> &PathBuf {
        &self.tmp
    }

    pub(crate) fn tmp_prefix(&self) -> &String {
        &self.tmp_prefix
    }

    pub(crate) fn tmp_suffix(&self) -> &String {
        &self.tmp_suffix
    }

    pub(crate) fn key_column(&self) -> &String {
        &self.key_column
    }

    pub(crate) fn order(&self) -> &Order {
        &self.order
    }

    pub(crate) fn batch_size(&self) -> usize {
        self.batch_size
    }
}
