#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use xc_convert as convert;
pub use xc_tree as tree;
pub use xc_utils as utils;
